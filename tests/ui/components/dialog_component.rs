use classroom_admin::classroom::{Classroom, RoomCategory};
use classroom_admin::constants::{CONFIRM_DELETE_QUESTION, ERROR_NAME_REQUIRED, WARNING_DELETE_SEAT_LIMIT};
use classroom_admin::logger::Logger;
use classroom_admin::routes::Route;
use classroom_admin::ui::components::dialogs::FormField;
use classroom_admin::ui::components::DialogComponent;
use classroom_admin::ui::core::{Action, Component, DialogType};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{backend::TestBackend, Terminal};

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn screen_text(dialog: &mut DialogComponent) -> String {
    let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
    terminal.draw(|f| dialog.render(f, f.area())).unwrap();
    terminal.backend().buffer().content().iter().map(|c| c.symbol()).collect()
}

#[test]
fn test_hidden_dialog_ignores_keys() {
    let mut dialog = DialogComponent::new();
    assert!(!dialog.is_visible());
    assert!(matches!(dialog.handle_key_events(key(KeyCode::Enter)), Action::None));
}

#[test]
fn test_message_dialog_closes_on_any_key() {
    let mut dialog = DialogComponent::new();
    dialog.update(Action::ShowDialog(DialogType::Warning(WARNING_DELETE_SEAT_LIMIT.to_string())));
    assert!(dialog.is_visible());
    assert!(screen_text(&mut dialog).contains("fewer than 30 seats"));

    // Scroll keys keep it open
    assert!(matches!(dialog.handle_key_events(key(KeyCode::Char('j'))), Action::None));

    let action = dialog.handle_key_events(key(KeyCode::Char('z')));
    assert!(matches!(action, Action::HideDialog));
    dialog.update(action);
    assert!(!dialog.is_visible());
}

#[test]
fn test_delete_confirmation() {
    let mut dialog = DialogComponent::new();
    dialog.update(Action::ShowDialog(DialogType::DeleteConfirmation {
        code: "LAB1".to_string(),
        name: "Phòng máy tính".to_string(),
    }));

    let text = screen_text(&mut dialog);
    assert!(text.contains(CONFIRM_DELETE_QUESTION));
    assert!(text.contains("LAB1"));

    assert!(matches!(dialog.handle_key_events(key(KeyCode::Char('x'))), Action::None));
    assert!(matches!(dialog.handle_key_events(key(KeyCode::Char('n'))), Action::HideDialog));

    match dialog.handle_key_events(key(KeyCode::Enter)) {
        Action::DeleteClassroom(code) => assert_eq!(code, "LAB1"),
        other => panic!("unexpected action: {:?}", other),
    }
    assert!(!dialog.is_visible());
}

#[test]
fn test_search_dialog_edits_and_submits() {
    let mut dialog = DialogComponent::new();
    dialog.update(Action::ShowDialog(DialogType::Search {
        current: "ph".to_string(),
    }));
    assert_eq!(dialog.input_buffer, "ph");
    assert_eq!(dialog.cursor_position, 2);

    for c in "òng".chars() {
        dialog.handle_key_events(key(KeyCode::Char(c)));
    }
    dialog.handle_key_events(key(KeyCode::Home));
    dialog.handle_key_events(key(KeyCode::Delete));
    assert_eq!(dialog.input_buffer, "hòng");

    match dialog.handle_key_events(key(KeyCode::Enter)) {
        Action::ApplySearch(text) => assert_eq!(text, "hòng"),
        other => panic!("unexpected action: {:?}", other),
    }
    assert!(!dialog.is_visible());
}

#[test]
fn test_form_validation_error_is_shown_inline() {
    let mut dialog = DialogComponent::new();
    dialog.update(Action::ShowDialog(DialogType::ClassroomForm { existing: None }));
    assert_eq!(dialog.form.focus, FormField::Code);

    for c in "P301".chars() {
        dialog.handle_key_events(key(KeyCode::Char(c)));
    }
    assert!(matches!(dialog.handle_key_events(key(KeyCode::Enter)), Action::None));
    assert_eq!(dialog.form.error.as_deref(), Some(ERROR_NAME_REQUIRED));
    assert!(screen_text(&mut dialog).contains(ERROR_NAME_REQUIRED));

    // Editing clears the error
    dialog.handle_key_events(key(KeyCode::Tab));
    dialog.handle_key_events(key(KeyCode::Char('A')));
    assert!(dialog.form.error.is_none());
}

#[test]
fn test_edit_form_submits_update() {
    let existing = Classroom::new("P101", "Phòng Toán", 25, RoomCategory::Theory, "Nguyễn Văn A");
    let mut dialog = DialogComponent::new();
    dialog.update_existing_codes(vec!["P101".to_string()]);
    dialog.update(Action::ShowDialog(DialogType::ClassroomForm {
        existing: Some(existing.clone()),
    }));
    assert!(screen_text(&mut dialog).contains("read-only"));

    // Move to the room type and change it
    dialog.handle_key_events(key(KeyCode::Tab));
    dialog.handle_key_events(key(KeyCode::Tab));
    assert_eq!(dialog.form.focus, FormField::Category);
    dialog.handle_key_events(key(KeyCode::Left));

    match dialog.handle_key_events(key(KeyCode::Enter)) {
        Action::UpdateClassroom(classroom) => {
            assert_eq!(classroom.code, "P101");
            assert_eq!(classroom.category, RoomCategory::Hall);
        }
        other => panic!("unexpected action: {:?}", other),
    }

    // The form closes when the app routes back to the list
    assert!(matches!(dialog.update(Action::Navigate(Route::List)), Action::Navigate(Route::List)));
    assert!(!dialog.is_visible());
}

#[test]
fn test_form_escape_routes_to_list() {
    let mut dialog = DialogComponent::new();
    dialog.update(Action::ShowDialog(DialogType::ClassroomForm { existing: None }));
    assert!(matches!(
        dialog.handle_key_events(key(KeyCode::Esc)),
        Action::Navigate(Route::List)
    ));
}

#[test]
fn test_help_and_logs_dialogs() {
    let logger = Logger::new();
    logger.log("Loaded 4 classrooms".to_string());

    let mut dialog = DialogComponent::new();
    dialog.set_logger(logger);

    dialog.update(Action::ShowDialog(DialogType::Logs));
    assert!(screen_text(&mut dialog).contains("Loaded 4 classrooms"));
    assert!(matches!(dialog.handle_key_events(key(KeyCode::Char('G'))), Action::HideDialog));

    dialog.update(Action::ShowDialog(DialogType::Help));
    assert!(screen_text(&mut dialog).contains("CLASSROOM ADMIN"));
    dialog.handle_key_events(key(KeyCode::End));
    screen_text(&mut dialog);
    assert!(dialog.scroll.offset > 0, "help text is longer than the panel");
    assert!(matches!(dialog.handle_key_events(key(KeyCode::Esc)), Action::HideDialog));
}
