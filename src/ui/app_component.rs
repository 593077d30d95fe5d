use crate::classroom::check_deletable;
use crate::constants::{
    ERROR_CLASSROOM_CREATE_FAILED, ERROR_CLASSROOM_DELETE_FAILED, ERROR_CLASSROOM_NOT_FOUND,
    ERROR_CLASSROOM_UPDATE_FAILED, ERROR_LOAD_FAILED, SUCCESS_CLASSROOM_CREATED, SUCCESS_CLASSROOM_DELETED,
    SUCCESS_CLASSROOM_UPDATED,
};
use crate::icons::IconTheme;
use crate::listing::ListingView;
use crate::logger::Logger;
use crate::routes::Route;
use crate::service::ClassroomService;
use crate::ui::components::{ClassroomTableComponent, DialogComponent, StatusBar, StatusInfo, ToolbarComponent};
use crate::ui::core::{
    actions::{Action, DialogType},
    event_handler::EventType,
    task_manager::TaskManager,
    Component,
};
use crate::ui::layout::LayoutManager;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{layout::Rect, Frame};
use std::sync::Arc;
use tokio::sync::mpsc;

pub struct AppComponent {
    // Component composition
    toolbar: ToolbarComponent,
    table: ClassroomTableComponent,
    dialog: DialogComponent,

    // Services
    service: Arc<dyn ClassroomService>,
    task_manager: TaskManager,
    background_action_rx: mpsc::UnboundedReceiver<Action>,
    logger: Logger,

    // Simple UI state
    route: Route,
    /// Route to open once the first list has loaded
    start_route: Option<Route>,
    /// A create or update from the form is waiting for the service
    saving_form: bool,
    status: StatusInfo,
    should_quit: bool,
}

impl AppComponent {
    pub fn new(service: Arc<dyn ClassroomService>, view: ListingView, logger: Logger) -> Self {
        let (task_manager, background_action_rx) = TaskManager::new();

        let mut toolbar = ToolbarComponent::new();
        toolbar.category = view.filter().category;

        let mut dialog = DialogComponent::new();
        dialog.set_logger(logger.clone());

        Self {
            toolbar,
            table: ClassroomTableComponent::new(view),
            dialog,
            service,
            task_manager,
            background_action_rx,
            logger,
            route: Route::List,
            start_route: None,
            saving_form: false,
            status: StatusInfo::default(),
            should_quit: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn route(&self) -> &Route {
        &self.route
    }

    pub fn view(&self) -> &ListingView {
        &self.table.view
    }

    pub fn dialog_type(&self) -> Option<&DialogType> {
        self.dialog.dialog_type.as_ref()
    }

    pub fn logger(&self) -> &Logger {
        &self.logger
    }

    /// Check if any background operations are running
    pub fn is_busy(&self) -> bool {
        self.task_manager.task_count() > 0
    }

    pub fn set_icon_theme(&mut self, theme: IconTheme) {
        self.toolbar.icons.set_theme(theme);
        self.table.icons.set_theme(theme);
        self.dialog.icons.set_theme(theme);
    }

    /// Open `route` after the initial load, when the records it needs are cached
    pub fn set_start_route(&mut self, route: Route) {
        self.start_route = Some(route);
    }

    fn success_message(&self, message: &str) -> String {
        format!("{} {}", self.table.icons.success(), message)
    }

    fn error_message(&self, message: &str) -> String {
        format!("{} {}", self.table.icons.error(), message)
    }

    fn cycle_icon_theme(&mut self) {
        self.table.icons.cycle_icon_theme();
        let theme = self.table.icons.theme();
        self.logger.log(format!("Icons: switched to {:?} theme", theme));
        self.set_icon_theme(theme);
    }

    /// Fetch the classroom list on startup
    pub fn trigger_initial_load(&mut self) {
        self.logger.log("AppComponent: Starting initial load".to_string());
        self.schedule_data_fetch();
        self.sync_component_data();
    }

    /// Keep derived component state in step with the table's view
    fn sync_component_data(&mut self) {
        // A form route without an open form falls back to the list
        if self.route.is_form() && !self.dialog.is_form_open() {
            self.route = Route::List;
        }
        self.toolbar.category = self.table.view.filter().category;
        self.table.loading = self.task_manager.is_loading();
        self.status.route = self.route.clone();
        self.status.loading = self.table.loading;
        self.status.busy_operations = self
            .task_manager
            .task_count()
            .saturating_sub(usize::from(self.table.loading));
    }

    /// Handle global keyboard shortcuts that aren't component-specific
    fn handle_global_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('q') => {
                self.logger.log("Global key: 'q' - quitting application".to_string());
                Action::Quit
            }
            KeyCode::Char('?') => {
                self.logger.log("Global key: '?' - opening help dialog".to_string());
                Action::ShowDialog(DialogType::Help)
            }
            KeyCode::Char('G') => {
                self.logger.log("Global key: 'G' - opening logs dialog".to_string());
                Action::ShowDialog(DialogType::Logs)
            }
            KeyCode::Char('r') => {
                self.logger.log("Global key: 'r' - reloading classrooms".to_string());
                Action::RefreshData
            }
            KeyCode::Char('i') => {
                self.cycle_icon_theme();
                Action::None
            }
            _ => Action::None,
        }
    }

    /// Handle app-level actions that require business logic.
    ///
    /// Returns a follow-up action, or [`Action::None`] when nothing is left to do.
    pub fn handle_app_action(&mut self, action: Action) -> Action {
        match action {
            Action::Quit => {
                self.should_quit = true;
                Action::None
            }
            Action::RefreshData => {
                self.schedule_data_fetch();
                Action::None
            }
            Action::Navigate(route) => self.navigate(route),
            Action::DeleteClassroom(code) => self.delete_classroom(code),
            Action::CreateClassroom(_) | Action::UpdateClassroom(_) if self.saving_form => {
                self.logger.log("Form: save already in progress".to_string());
                Action::None
            }
            Action::CreateClassroom(classroom) => {
                let service = Arc::clone(&self.service);
                let description = format!("Create classroom: {}", classroom.code);
                self.logger.log(format!("Background: Spawning '{}'", description));
                self.task_manager.spawn_operation(
                    move || async move {
                        service
                            .create(classroom)
                            .await
                            .map(|()| SUCCESS_CLASSROOM_CREATED.to_string())
                            .map_err(|e| format!("{}: {}", ERROR_CLASSROOM_CREATE_FAILED, e))
                    },
                    description,
                );
                // The form stays open until the service answers
                self.saving_form = true;
                Action::None
            }
            Action::UpdateClassroom(classroom) => {
                let service = Arc::clone(&self.service);
                let description = format!("Update classroom: {}", classroom.code);
                self.logger.log(format!("Background: Spawning '{}'", description));
                self.task_manager.spawn_operation(
                    move || async move {
                        service
                            .update(classroom)
                            .await
                            .map(|()| SUCCESS_CLASSROOM_UPDATED.to_string())
                            .map_err(|e| format!("{}: {}", ERROR_CLASSROOM_UPDATE_FAILED, e))
                    },
                    description,
                );
                // The form stays open until the service answers
                self.saving_form = true;
                Action::None
            }
            Action::OperationCompleted(message) => {
                self.logger.log(format!("Operation completed: {}", message));
                let message = self.success_message(&message);
                self.status.last_message = Some(message.clone());
                self.schedule_data_fetch();

                if self.saving_form {
                    self.saving_form = false;
                    self.route = Route::List;
                } else if self.dialog.is_form_open() {
                    // Keep a form the user is still filling in
                    return Action::None;
                }
                Action::ShowDialog(DialogType::Info(message))
            }
            Action::OperationFailed(message) => {
                self.logger.log(format!("Operation failed: {}", message));
                log::error!("{}", message);
                if self.saving_form && self.dialog.is_form_open() {
                    // Leave the form filled in so the user can correct it
                    self.saving_form = false;
                    self.dialog.form.error = Some(message);
                    return Action::None;
                }
                self.saving_form = false;
                Action::ShowDialog(DialogType::Error(self.error_message(&message)))
            }
            Action::DataLoaded(classrooms) => {
                self.logger.log(format!("Data: Loaded {} classrooms", classrooms.len()));
                self.dialog
                    .update_existing_codes(classrooms.iter().map(|c| c.code.clone()).collect());
                self.table.set_records(classrooms);
                match self.start_route.take() {
                    Some(route) => Action::Navigate(route),
                    None => Action::None,
                }
            }
            Action::LoadFailed(error) => {
                self.logger.log(format!("Data: Load failed: {}", error));
                log::error!("Loading classrooms failed: {}", error);
                let message = self.error_message(&format!("{}: {}", ERROR_LOAD_FAILED, error));
                Action::ShowDialog(DialogType::Error(message))
            }
            // Everything else was consumed by a component or needs nothing here
            _ => Action::None,
        }
    }

    fn navigate(&mut self, route: Route) -> Action {
        self.logger.log(format!("Route: {} -> {}", self.route, route));
        match route {
            Route::List => {
                self.route = Route::List;
                Action::None
            }
            Route::Create => {
                self.route = Route::Create;
                Action::ShowDialog(DialogType::ClassroomForm { existing: None })
            }
            Route::Edit(code) => match self.table.view.find(&code).cloned() {
                Some(classroom) => {
                    self.route = Route::Edit(code);
                    Action::ShowDialog(DialogType::ClassroomForm {
                        existing: Some(classroom),
                    })
                }
                None => {
                    log::warn!("Edit requested for unknown classroom {}", code);
                    self.route = Route::List;
                    let message = self.error_message(&format!("{}: {}", ERROR_CLASSROOM_NOT_FOUND, code));
                    Action::ShowDialog(DialogType::Error(message))
                }
            },
        }
    }

    /// Run a confirmed delete. The seat rule is checked here, before the service is called;
    /// a code missing from the cache cannot be checked and is refused.
    fn delete_classroom(&mut self, code: String) -> Action {
        let Some(classroom) = self.table.view.find(&code) else {
            self.logger.log(format!("Delete: refused for {} (not in the loaded list)", code));
            log::warn!("Delete requested for uncached classroom {}", code);
            let message = self.error_message(&format!("{}: {}", ERROR_CLASSROOM_NOT_FOUND, code));
            return Action::ShowDialog(DialogType::Error(message));
        };
        if let Err(rejected) = check_deletable(classroom) {
            self.logger.log(format!(
                "Delete: refused for {} ({} seats)",
                rejected.code, rejected.seat_count
            ));
            return Action::ShowDialog(DialogType::Warning(rejected.to_string()));
        }

        let service = Arc::clone(&self.service);
        let description = format!("Delete classroom: {}", code);
        self.logger.log(format!("Background: Spawning '{}'", description));
        self.task_manager.spawn_operation(
            move || async move {
                service
                    .delete_by_code(&code)
                    .await
                    .map(|()| SUCCESS_CLASSROOM_DELETED.to_string())
                    .map_err(|e| format!("{}: {}", ERROR_CLASSROOM_DELETE_FAILED, e))
            },
            description,
        );
        Action::None
    }

    /// Schedule a background fetch of the full list
    fn schedule_data_fetch(&mut self) {
        let _task_id = self.task_manager.spawn_data_load(Arc::clone(&self.service));
    }

    /// Process background actions from task manager
    pub fn process_background_actions(&mut self) -> Vec<Action> {
        let mut actions = Vec::new();

        while let Ok(action) = self.background_action_rx.try_recv() {
            self.logger.log(format!("Background: Received action {}", describe(&action)));
            actions.push(action);
        }

        let cleaned = self.task_manager.cleanup_finished_tasks();
        if cleaned > 0 {
            self.logger.log(format!("Background: Cleaned up {} finished tasks", cleaned));
        }

        actions
    }

    /// Wait for the next background result and apply it
    pub async fn process_next_background_action(&mut self) -> bool {
        match self.background_action_rx.recv().await {
            Some(action) => {
                self.dispatch(action);
                self.task_manager.cleanup_finished_tasks();
                self.sync_component_data();
                true
            }
            None => false,
        }
    }

    /// Run an action through the component hierarchy, then through the app,
    /// until nothing is left.
    pub fn dispatch(&mut self, mut action: Action) {
        while !matches!(action, Action::None) {
            let next = self.dialog.update(action);
            let next = self.toolbar.update(next);
            let next = self.table.update(next);
            action = self.handle_app_action(next);
        }
    }

    /// Process an event through the component hierarchy
    pub fn handle_event(&mut self, event_type: EventType) -> anyhow::Result<()> {
        match event_type {
            EventType::Key(key) => {
                let action = self.handle_key_events(key);
                self.dispatch(action);
            }
            EventType::Tick => {
                for action in self.process_background_actions() {
                    self.dispatch(action);
                }
            }
            EventType::Resize(_, _) | EventType::Other => {}
        }

        self.sync_component_data();
        Ok(())
    }
}

/// Short form of an action for the log; record lists are not dumped
fn describe(action: &Action) -> String {
    match action {
        Action::DataLoaded(classrooms) => format!("DataLoaded({} classrooms)", classrooms.len()),
        other => format!("{:?}", other),
    }
}

impl Component for AppComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.logger.log("Global key: Ctrl+C - quitting application".to_string());
            return Action::Quit;
        }

        // Dialog has priority when visible
        if self.dialog.is_visible() {
            return self.dialog.handle_key_events(key);
        }

        let toolbar_action = self.toolbar.handle_key_events(key);
        if !matches!(toolbar_action, Action::None) {
            return toolbar_action;
        }

        let table_action = self.table.handle_key_events(key);
        if !matches!(table_action, Action::None) {
            return table_action;
        }

        self.handle_global_key(key)
    }

    fn update(&mut self, action: Action) -> Action {
        let action = self.dialog.update(action);
        let action = self.toolbar.update(action);
        self.table.update(action)
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let chunks = LayoutManager::main_layout(rect);

        self.toolbar.render(f, chunks[0]);
        self.table.render(f, chunks[1]);
        StatusBar::render(f, chunks[2], &self.status);

        if self.dialog.is_visible() {
            self.dialog.render(f, rect);
        }
    }
}
