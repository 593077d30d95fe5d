use classroom_admin::classroom::RoomCategory;
use classroom_admin::constants::{CATEGORY_PLACEHOLDER, SEARCH_PLACEHOLDER};
use classroom_admin::routes::Route;
use classroom_admin::ui::components::ToolbarComponent;
use classroom_admin::ui::core::{Action, Component, DialogType};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{backend::TestBackend, Terminal};

fn key(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)
}

fn render_line(toolbar: &mut ToolbarComponent) -> String {
    let mut terminal = Terminal::new(TestBackend::new(100, 3)).unwrap();
    terminal.draw(|f| toolbar.render(f, f.area())).unwrap();
    let buffer = terminal.backend().buffer().clone();
    (0..3u16)
        .map(|y| (0..100u16).map(|x| buffer[(x, y)].symbol().to_string()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn test_toolbar_keys() {
    let mut toolbar = ToolbarComponent::new();
    toolbar.search_input = "P1".to_string();

    match toolbar.handle_key_events(key('/')) {
        Action::ShowDialog(DialogType::Search { current }) => assert_eq!(current, "P1"),
        other => panic!("unexpected action: {:?}", other),
    }
    assert!(matches!(toolbar.handle_key_events(key('c')), Action::CycleCategoryFilter));
    assert!(matches!(toolbar.handle_key_events(key('x')), Action::ClearFilters));
    assert!(matches!(toolbar.handle_key_events(key('a')), Action::Navigate(Route::Create)));
    assert!(matches!(toolbar.handle_key_events(key('z')), Action::None));
}

#[test]
fn test_toolbar_records_search_and_passes_through() {
    let mut toolbar = ToolbarComponent::new();

    let action = toolbar.update(Action::ApplySearch("phòng".to_string()));
    assert!(matches!(action, Action::ApplySearch(ref text) if text == "phòng"));
    assert_eq!(toolbar.search_input, "phòng");

    assert!(matches!(toolbar.update(Action::ClearFilters), Action::ClearFilters));
    assert!(toolbar.search_input.is_empty());
}

#[test]
fn test_toolbar_render() {
    let mut toolbar = ToolbarComponent::new();
    let screen = render_line(&mut toolbar);
    assert!(screen.contains("Search [/]"));
    assert!(screen.contains(SEARCH_PLACEHOLDER));
    assert!(screen.contains(CATEGORY_PLACEHOLDER));
    assert!(screen.contains("Add new"));

    toolbar.search_input = "LAB".to_string();
    toolbar.category = Some(RoomCategory::Practice);
    let screen = render_line(&mut toolbar);
    assert!(screen.contains("LAB"));
    assert!(screen.contains("Thực hành"));
    assert!(!screen.contains(CATEGORY_PLACEHOLDER));
}
