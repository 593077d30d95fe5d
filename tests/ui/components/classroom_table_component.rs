use classroom_admin::classroom::{Classroom, RoomCategory};
use classroom_admin::listing::{ListingView, SortColumn};
use classroom_admin::routes::Route;
use classroom_admin::ui::components::ClassroomTableComponent;
use classroom_admin::ui::core::{Action, Component, DialogType};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{backend::TestBackend, Terminal};

use crate::mock_service::sample_classrooms;

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn render_to_string(table: &mut ClassroomTableComponent, width: u16, height: u16) -> Vec<String> {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(|f| table.render(f, f.area())).unwrap();

    let buffer = terminal.backend().buffer().clone();
    (0..height)
        .map(|y| (0..width).map(|x| buffer[(x, y)].symbol().to_string()).collect())
        .collect()
}

fn many_classrooms(count: usize) -> Vec<Classroom> {
    (1..=count)
        .map(|i| Classroom::new(format!("R{:02}", i), format!("Room {}", i), 10 + i as i32, RoomCategory::Theory, "Staff"))
        .collect()
}

#[test]
fn test_empty_table_shows_no_data() {
    let mut table = ClassroomTableComponent::default();
    let lines = render_to_string(&mut table, 100, 10);

    assert!(lines.iter().any(|line| line.contains("No data")));
    assert!(lines[0].contains("Classrooms (0)"));
}

#[test]
fn test_renders_rows_and_locked_delete() {
    let mut table = ClassroomTableComponent::default();
    table.set_records(sample_classrooms());
    let lines = render_to_string(&mut table, 120, 12);

    let hall_row = lines.iter().find(|line| line.contains("HT01")).expect("HT01 row");
    assert!(hall_row.contains("Hội trường"));
    assert!(hall_row.contains("- Delete"), "200 seats cannot be deleted: {}", hall_row);

    let lab_row = lines.iter().find(|line| line.contains("LAB1")).expect("LAB1 row");
    assert!(lab_row.contains("d Delete"), "20 seats can be deleted: {}", lab_row);
}

#[test]
fn test_pagination_and_title() {
    let mut table = ClassroomTableComponent::new(ListingView::new(5));
    table.set_records(many_classrooms(12));

    let lines = render_to_string(&mut table, 120, 12);
    assert!(lines.iter().any(|line| line.contains("Page 1/3")));
    assert!(lines.iter().any(|line| line.contains("R05")));
    assert!(!lines.iter().any(|line| line.contains("R06")));

    table.update(Action::NextPage);
    let lines = render_to_string(&mut table, 120, 12);
    assert!(lines.iter().any(|line| line.contains("Page 2/3")));
    assert!(lines.iter().any(|line| line.contains("R06")));

    table.update(Action::ApplySearch("r1".to_string()));
    let lines = render_to_string(&mut table, 120, 12);
    assert!(lines[0].contains("Classrooms (3 of 12)"));
}

#[test]
fn test_sort_indicator_in_header() {
    let mut table = ClassroomTableComponent::default();
    table.set_records(sample_classrooms());

    assert!(matches!(
        table.handle_key_events(key(KeyCode::Char('3'))),
        Action::ToggleSort(SortColumn::SeatCount)
    ));
    table.update(Action::ToggleSort(SortColumn::SeatCount));
    table.update(Action::ToggleSort(SortColumn::SeatCount));

    let lines = render_to_string(&mut table, 120, 12);
    assert!(lines.iter().any(|line| line.contains("Seats ▼")));
    assert_eq!(table.view.visible()[0].code, "HT01");
}

#[test]
fn test_row_keys() {
    let mut table = ClassroomTableComponent::default();
    assert!(matches!(table.handle_key_events(key(KeyCode::Char('d'))), Action::None));

    table.set_records(sample_classrooms());
    assert!(matches!(table.handle_key_events(key(KeyCode::Down)), Action::NextRow));
    assert!(matches!(table.update(Action::NextRow), Action::None));

    assert!(matches!(
        table.handle_key_events(key(KeyCode::Enter)),
        Action::Navigate(Route::Edit(code)) if code == "LAB1"
    ));

    match table.handle_key_events(key(KeyCode::Char('d'))) {
        Action::ShowDialog(DialogType::DeleteConfirmation { code, name }) => {
            assert_eq!(code, "LAB1");
            assert_eq!(name, "Phòng máy tính");
        }
        other => panic!("unexpected action: {:?}", other),
    }

    // Actions the table does not own pass through
    assert!(matches!(table.update(Action::RefreshData), Action::RefreshData));
}
