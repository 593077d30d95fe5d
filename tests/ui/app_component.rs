use std::sync::Arc;

use classroom_admin::classroom::{Classroom, RoomCategory};
use classroom_admin::constants::{
    ERROR_CLASSROOM_NOT_FOUND, ERROR_CODE_EXISTS, SUCCESS_CLASSROOM_CREATED, SUCCESS_CLASSROOM_DELETED,
    SUCCESS_CLASSROOM_UPDATED, WARNING_DELETE_SEAT_LIMIT,
};
use classroom_admin::icons::{IconService, IconTheme};
use classroom_admin::listing::ListingView;
use classroom_admin::logger::Logger;
use classroom_admin::routes::Route;
use classroom_admin::ui::core::{Action, Component, DialogType, EventType};
use classroom_admin::ui::AppComponent;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{backend::TestBackend, Terminal};

use crate::mock_service::{sample_classrooms, MockService};

fn press(app: &mut AppComponent, code: KeyCode) {
    app.handle_event(EventType::Key(KeyEvent::new(code, KeyModifiers::NONE)))
        .unwrap();
}

fn type_text(app: &mut AppComponent, text: &str) {
    for c in text.chars() {
        press(app, KeyCode::Char(c));
    }
}

/// A success message as the default (Ascii) icon theme shows it
fn success(message: &str) -> String {
    format!("{} {}", IconService::default().success(), message)
}

async fn loaded_app(service: Arc<MockService>) -> AppComponent {
    let mut app = AppComponent::new(service, ListingView::default(), Logger::new());
    app.trigger_initial_load();
    assert!(app.process_next_background_action().await);
    app
}

#[tokio::test]
async fn test_initial_load_fills_table() {
    let service = Arc::new(MockService::with_records(sample_classrooms()));
    let app = loaded_app(Arc::clone(&service)).await;

    assert_eq!(service.list_calls(), 1);
    assert_eq!(app.view().records().len(), 4);
    assert_eq!(app.route(), &Route::List);
    assert!(app.dialog_type().is_none());
}

#[tokio::test]
async fn test_delete_blocked_at_seat_limit_without_service_call() {
    let service = Arc::new(MockService::with_records(sample_classrooms()));
    let mut app = loaded_app(Arc::clone(&service)).await;

    // P102 has exactly 30 seats
    app.dispatch(Action::LastRow);
    assert_eq!(app.view().selected().map(|c| c.code.as_str()), Some("P102"));

    press(&mut app, KeyCode::Char('d'));
    assert!(matches!(
        app.dialog_type(),
        Some(DialogType::DeleteConfirmation { code, .. }) if code == "P102"
    ));

    press(&mut app, KeyCode::Enter);
    assert_eq!(
        app.dialog_type(),
        Some(&DialogType::Warning(WARNING_DELETE_SEAT_LIMIT.to_string()))
    );
    assert_eq!(service.delete_calls(), 0);
    assert!(!app.is_busy());
    assert_eq!(service.codes().len(), 4);
}

#[tokio::test]
async fn test_successful_delete_refetches() {
    let service = Arc::new(MockService::with_records(sample_classrooms()));
    let mut app = loaded_app(Arc::clone(&service)).await;

    // LAB1 has 20 seats
    press(&mut app, KeyCode::Char('j'));
    assert_eq!(app.view().selected().map(|c| c.code.as_str()), Some("LAB1"));

    press(&mut app, KeyCode::Char('d'));
    press(&mut app, KeyCode::Char('y'));
    assert!(app.is_busy());

    // Operation result, then the re-fetch it triggers
    assert!(app.process_next_background_action().await);
    assert_eq!(
        app.dialog_type(),
        Some(&DialogType::Info(success(SUCCESS_CLASSROOM_DELETED)))
    );
    assert!(app.process_next_background_action().await);

    assert_eq!(service.delete_calls(), 1);
    assert_eq!(service.list_calls(), 2);
    assert_eq!(app.view().records().len(), 3);
    assert!(!app.view().contains_code("LAB1"));

    // Any key closes the message
    press(&mut app, KeyCode::Char(' '));
    assert!(app.dialog_type().is_none());
}

#[tokio::test]
async fn test_delete_of_uncached_code_is_refused() {
    let service = Arc::new(MockService::with_records(sample_classrooms()));
    let mut app = AppComponent::new(service.clone(), ListingView::default(), Logger::new());

    // Nothing loaded yet, so the seat rule cannot be checked
    app.dispatch(Action::DeleteClassroom("HT01".to_string()));

    assert!(matches!(
        app.dialog_type(),
        Some(DialogType::Error(message)) if message.contains(ERROR_CLASSROOM_NOT_FOUND)
    ));
    assert_eq!(service.delete_calls(), 0);
    assert!(!app.is_busy());
    assert!(service.codes().contains(&"HT01".to_string()));

    // Also refused once loaded, for a code that has since gone
    app.trigger_initial_load();
    assert!(app.process_next_background_action().await);
    app.dispatch(Action::DeleteClassroom("GONE".to_string()));
    assert!(matches!(app.dialog_type(), Some(DialogType::Error(_))));
    assert_eq!(service.delete_calls(), 0);
}

#[tokio::test]
async fn test_cancelled_delete_does_nothing() {
    let service = Arc::new(MockService::with_records(sample_classrooms()));
    let mut app = loaded_app(Arc::clone(&service)).await;

    press(&mut app, KeyCode::Char('d'));
    press(&mut app, KeyCode::Esc);

    assert!(app.dialog_type().is_none());
    assert_eq!(service.delete_calls(), 0);
    assert!(!app.is_busy());
}

#[tokio::test]
async fn test_create_through_form() {
    let service = Arc::new(MockService::with_records(sample_classrooms()));
    let mut app = loaded_app(Arc::clone(&service)).await;

    press(&mut app, KeyCode::Char('a'));
    assert_eq!(app.route(), &Route::Create);
    assert_eq!(
        app.dialog_type(),
        Some(&DialogType::ClassroomForm { existing: None })
    );

    type_text(&mut app, "P201");
    press(&mut app, KeyCode::Tab);
    type_text(&mut app, "Phòng Hóa");
    press(&mut app, KeyCode::Tab);
    type_text(&mut app, "28");
    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Right);
    press(&mut app, KeyCode::Tab);
    type_text(&mut app, "Võ Thị E");
    press(&mut app, KeyCode::Enter);

    // The form waits for the service
    assert_eq!(app.route(), &Route::Create);
    assert!(matches!(app.dialog_type(), Some(DialogType::ClassroomForm { .. })));
    assert!(app.is_busy());

    assert!(app.process_next_background_action().await);
    assert_eq!(app.route(), &Route::List);
    assert_eq!(
        app.dialog_type(),
        Some(&DialogType::Info(success(SUCCESS_CLASSROOM_CREATED)))
    );
    assert!(app.process_next_background_action().await);

    assert!(service.codes().contains(&"P201".to_string()));
    assert_eq!(app.view().records().len(), 5);
}

#[tokio::test]
async fn test_create_with_existing_code_stays_on_form() {
    let service = Arc::new(MockService::with_records(sample_classrooms()));
    let mut app = loaded_app(Arc::clone(&service)).await;

    press(&mut app, KeyCode::Char('a'));
    type_text(&mut app, "P101");
    press(&mut app, KeyCode::Tab);
    type_text(&mut app, "Trùng");
    press(&mut app, KeyCode::Tab);
    type_text(&mut app, "10");
    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Tab);
    type_text(&mut app, "A");
    press(&mut app, KeyCode::Enter);

    assert_eq!(app.route(), &Route::Create);
    assert!(matches!(app.dialog_type(), Some(DialogType::ClassroomForm { .. })));
    assert!(!app.is_busy());
    assert!(app.logger().get_logs()[0].contains(ERROR_CODE_EXISTS));

    // Esc returns to the list without saving
    press(&mut app, KeyCode::Esc);
    assert_eq!(app.route(), &Route::List);
    assert!(app.dialog_type().is_none());
    assert_eq!(service.codes().len(), 4);
}

#[tokio::test]
async fn test_failed_save_keeps_form_contents() {
    let service = Arc::new(MockService::with_records(sample_classrooms()));
    let mut app = loaded_app(Arc::clone(&service)).await;

    // Stored after the list was loaded, so only the service knows about it
    service
        .records
        .lock()
        .unwrap()
        .push(Classroom::new("P301", "Phòng Sinh", 20, RoomCategory::Theory, "Đỗ Văn F"));

    press(&mut app, KeyCode::Char('a'));
    type_text(&mut app, "P301");
    press(&mut app, KeyCode::Tab);
    type_text(&mut app, "Phòng Sử");
    press(&mut app, KeyCode::Tab);
    type_text(&mut app, "15");
    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Tab);
    type_text(&mut app, "Bùi Thị G");
    press(&mut app, KeyCode::Enter);

    assert!(app.process_next_background_action().await);

    assert_eq!(app.route(), &Route::Create);
    assert!(matches!(app.dialog_type(), Some(DialogType::ClassroomForm { .. })));
    assert!(!app.is_busy());

    let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
    terminal.draw(|f| app.render(f, f.area())).unwrap();
    let content: String = terminal.backend().buffer().content().iter().map(|c| c.symbol()).collect();
    assert!(content.contains("Phòng Sử"), "typed values survive the failure");
    assert!(content.contains("Failed to create classroom"));

    let stored = service.records.lock().unwrap().iter().find(|c| c.code == "P301").cloned();
    assert_eq!(stored.map(|c| c.name), Some("Phòng Sinh".to_string()));
}

#[tokio::test]
async fn test_start_route_opens_after_load() {
    let service = Arc::new(MockService::with_records(sample_classrooms()));
    let mut app = AppComponent::new(service, ListingView::default(), Logger::new());
    app.set_start_route(Route::parse("/phong-hoc/chinh-sua/LAB1").unwrap());

    app.trigger_initial_load();
    assert!(app.dialog_type().is_none());
    assert!(app.process_next_background_action().await);

    assert_eq!(app.route(), &Route::Edit("LAB1".to_string()));
    assert!(matches!(
        app.dialog_type(),
        Some(DialogType::ClassroomForm { existing: Some(classroom) }) if classroom.code == "LAB1"
    ));
}

#[tokio::test]
async fn test_messages_follow_icon_theme() {
    let service = Arc::new(MockService::with_records(sample_classrooms()));
    let mut app = loaded_app(service).await;
    app.set_icon_theme(IconTheme::Emoji);

    app.dispatch(Action::OperationCompleted(SUCCESS_CLASSROOM_DELETED.to_string()));
    assert_eq!(
        app.dialog_type(),
        Some(&DialogType::Info(format!("✅ {}", SUCCESS_CLASSROOM_DELETED)))
    );

    app.set_icon_theme(IconTheme::Ascii);
    app.dispatch(Action::OperationFailed("Failed to delete classroom: locked".to_string()));
    assert_eq!(
        app.dialog_type(),
        Some(&DialogType::Error(format!("{} Failed to delete classroom: locked", IconService::default().error())))
    );
}

#[tokio::test]
async fn test_edit_selected_classroom() {
    let service = Arc::new(MockService::with_records(sample_classrooms()));
    let mut app = loaded_app(Arc::clone(&service)).await;

    press(&mut app, KeyCode::Char('j'));
    press(&mut app, KeyCode::Char('j'));
    press(&mut app, KeyCode::Char('e'));
    assert_eq!(app.route(), &Route::Edit("P101".to_string()));

    // Focus starts on the name; move to the seat count and replace it
    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Backspace);
    press(&mut app, KeyCode::Backspace);
    type_text(&mut app, "45");
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.route(), &Route::Edit("P101".to_string()));

    assert!(app.process_next_background_action().await);
    assert_eq!(app.route(), &Route::List);
    assert_eq!(
        app.dialog_type(),
        Some(&DialogType::Info(success(SUCCESS_CLASSROOM_UPDATED)))
    );
    assert!(app.process_next_background_action().await);

    assert_eq!(app.view().find("P101").map(|c| c.seat_count), Some(45));
}

#[tokio::test]
async fn test_edit_unknown_code_shows_error() {
    let service = Arc::new(MockService::with_records(sample_classrooms()));
    let mut app = loaded_app(service).await;

    app.dispatch(Action::Navigate(Route::Edit("NOPE".to_string())));

    assert_eq!(app.route(), &Route::List);
    assert!(matches!(app.dialog_type(), Some(DialogType::Error(message)) if message.contains("NOPE")));
}

#[tokio::test]
async fn test_search_and_filters_from_keys() {
    let service = Arc::new(MockService::with_records(sample_classrooms()));
    let mut app = loaded_app(service).await;

    press(&mut app, KeyCode::Char('/'));
    assert!(matches!(app.dialog_type(), Some(DialogType::Search { .. })));
    type_text(&mut app, "LAB");
    press(&mut app, KeyCode::Enter);
    assert!(app.dialog_type().is_none());
    assert_eq!(app.view().visible_count(), 1);

    press(&mut app, KeyCode::Char('x'));
    assert_eq!(app.view().visible_count(), 4);

    press(&mut app, KeyCode::Char('c'));
    assert_eq!(app.view().visible_count(), 2, "two theory rooms");

    press(&mut app, KeyCode::Char('3'));
    assert_eq!(app.view().visible()[0].code, "P101");
}

#[tokio::test]
async fn test_load_failure_shows_error() {
    let service = Arc::new(MockService {
        fail_list: true,
        ..Default::default()
    });
    let app = loaded_app(service).await;

    assert!(matches!(app.dialog_type(), Some(DialogType::Error(message)) if message.contains("database is locked")));
    assert!(app.view().records().is_empty());
}

#[tokio::test]
async fn test_global_keys() {
    let service = Arc::new(MockService::with_records(sample_classrooms()));
    let mut app = loaded_app(Arc::clone(&service)).await;

    press(&mut app, KeyCode::Char('?'));
    assert_eq!(app.dialog_type(), Some(&DialogType::Help));
    press(&mut app, KeyCode::Char('?'));
    assert!(app.dialog_type().is_none());

    press(&mut app, KeyCode::Char('G'));
    assert_eq!(app.dialog_type(), Some(&DialogType::Logs));
    press(&mut app, KeyCode::Esc);

    press(&mut app, KeyCode::Char('r'));
    assert!(app.process_next_background_action().await);
    assert_eq!(service.list_calls(), 2);

    assert!(!app.should_quit());
    app.handle_event(EventType::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)))
        .unwrap();
    assert!(app.should_quit());
}

#[tokio::test]
async fn test_render_list_screen() {
    let service = Arc::new(MockService::with_records(sample_classrooms()));
    let mut app = loaded_app(service).await;
    app.handle_event(EventType::Tick).unwrap();

    let mut terminal = Terminal::new(TestBackend::new(120, 20)).unwrap();
    terminal.draw(|f| app.render(f, f.area())).unwrap();

    let content: String = terminal.backend().buffer().content().iter().map(|c| c.symbol()).collect();
    assert!(content.contains("P101"));
    assert!(content.contains("HT01"));
    assert!(content.contains("/phong-hoc"));
    assert!(content.contains("Page 1/1"));
}
