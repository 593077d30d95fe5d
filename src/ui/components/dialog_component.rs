//! Modal dialog component for the classroom screen.
//!
//! Hosts every overlay the screen can show:
//!
//! - **Classroom form** - create and edit, with inline validation
//! - **Delete confirmation** - the seat rule is checked after confirming
//! - **Search** - text input applied to the table on Enter
//! - **Messages** - info, warning and error; any key closes them
//! - **Help and logs** - scrollable panels
//!
//! Rendering lives in the [`dialogs`](crate::ui::components::dialogs) modules;
//! this component owns the input state and turns keys into actions.

use crate::icons::IconService;
use crate::logger::Logger;
use crate::routes::Route;
use crate::ui::components::dialogs::{
    common, form_dialog, system_dialogs, ClassroomForm, MessageKind, ScrollState,
};
use crate::ui::core::{
    actions::{Action, DialogType},
    Component,
};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{layout::Rect, Frame};

pub struct DialogComponent {
    pub dialog_type: Option<DialogType>,
    /// Search input
    pub input_buffer: String,
    pub cursor_position: usize,
    pub form: ClassroomForm,
    /// Codes already stored, for the uniqueness check on create
    pub existing_codes: Vec<String>,
    pub icons: IconService,
    pub scroll: ScrollState,
    logger: Logger,
}

impl Default for DialogComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl DialogComponent {
    pub fn new() -> Self {
        Self {
            dialog_type: None,
            input_buffer: String::new(),
            cursor_position: 0,
            form: ClassroomForm::default(),
            existing_codes: Vec::new(),
            icons: IconService::default(),
            scroll: ScrollState::default(),
            logger: Logger::new(),
        }
    }

    pub fn set_logger(&mut self, logger: Logger) {
        self.logger = logger;
    }

    pub fn update_existing_codes(&mut self, codes: Vec<String>) {
        self.existing_codes = codes;
    }

    pub fn is_visible(&self) -> bool {
        self.dialog_type.is_some()
    }

    pub fn is_form_open(&self) -> bool {
        matches!(self.dialog_type, Some(DialogType::ClassroomForm { .. }))
    }

    fn show(&mut self, dialog_type: DialogType) {
        self.clear_dialog();
        match &dialog_type {
            DialogType::ClassroomForm { existing } => self.form = ClassroomForm::new(existing.as_ref()),
            DialogType::Search { current } => {
                self.input_buffer = current.clone();
                self.cursor_position = current.chars().count();
            }
            _ => {}
        }
        self.dialog_type = Some(dialog_type);
    }

    fn clear_dialog(&mut self) {
        self.dialog_type = None;
        self.input_buffer.clear();
        self.cursor_position = 0;
        self.form = ClassroomForm::default();
        self.scroll.reset();
    }

    fn handle_form_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Esc => Action::Navigate(Route::List),
            KeyCode::Enter => match self.form.validate(&self.existing_codes) {
                Ok(classroom) if self.form.is_editing() => Action::UpdateClassroom(classroom),
                Ok(classroom) => Action::CreateClassroom(classroom),
                Err(message) => {
                    self.logger.log(format!("Form: validation failed: {}", message));
                    self.form.error = Some(message);
                    Action::None
                }
            },
            _ => {
                self.form.handle_key(key);
                Action::None
            }
        }
    }

    fn handle_search_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Esc => Action::HideDialog,
            KeyCode::Enter => {
                let action = Action::ApplySearch(self.input_buffer.trim().to_string());
                self.clear_dialog();
                action
            }
            KeyCode::Char(c) => {
                common::insert_char(&mut self.input_buffer, &mut self.cursor_position, c);
                Action::None
            }
            KeyCode::Backspace => {
                common::remove_char_before(&mut self.input_buffer, &mut self.cursor_position);
                Action::None
            }
            KeyCode::Delete => {
                common::remove_char_at(&mut self.input_buffer, self.cursor_position);
                Action::None
            }
            KeyCode::Left => {
                self.cursor_position = self.cursor_position.saturating_sub(1);
                Action::None
            }
            KeyCode::Right => {
                self.cursor_position = (self.cursor_position + 1).min(self.input_buffer.chars().count());
                Action::None
            }
            KeyCode::Home => {
                self.cursor_position = 0;
                Action::None
            }
            KeyCode::End => {
                self.cursor_position = self.input_buffer.chars().count();
                Action::None
            }
            _ => Action::None,
        }
    }
}

impl Component for DialogComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        let Some(dialog_type) = self.dialog_type.clone() else {
            return Action::None;
        };

        match dialog_type {
            DialogType::ClassroomForm { .. } => self.handle_form_key(key),
            DialogType::Search { .. } => self.handle_search_key(key),
            DialogType::DeleteConfirmation { code, .. } => match key.code {
                KeyCode::Enter | KeyCode::Char('y') => {
                    self.clear_dialog();
                    Action::DeleteClassroom(code)
                }
                KeyCode::Esc | KeyCode::Char('n') => Action::HideDialog,
                _ => Action::None,
            },
            DialogType::Info(_) | DialogType::Warning(_) | DialogType::Error(_) => {
                if self.scroll.handle_key(key) {
                    Action::None
                } else {
                    // Any other key dismisses the dialog
                    Action::HideDialog
                }
            }
            DialogType::Help => match key.code {
                KeyCode::Esc | KeyCode::Char('?') => Action::HideDialog,
                _ => {
                    self.scroll.handle_key(key);
                    Action::None
                }
            },
            DialogType::Logs => match key.code {
                KeyCode::Esc | KeyCode::Char('G') | KeyCode::Char('q') => Action::HideDialog,
                _ => {
                    self.scroll.handle_key(key);
                    Action::None
                }
            },
        }
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::ShowDialog(dialog_type) => {
                self.show(dialog_type);
                Action::None
            }
            Action::HideDialog => {
                self.clear_dialog();
                Action::None
            }
            Action::Navigate(Route::List) => {
                if self.is_form_open() {
                    self.clear_dialog();
                }
                action
            }
            _ => action,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let Some(dialog_type) = self.dialog_type.clone() else {
            return;
        };

        match dialog_type {
            DialogType::ClassroomForm { .. } => {
                form_dialog::render_classroom_form_dialog(f, rect, &self.icons, &self.form);
            }
            DialogType::DeleteConfirmation { code, name } => {
                system_dialogs::render_delete_confirmation_dialog(f, rect, &self.icons, &code, &name);
            }
            DialogType::Search { .. } => {
                system_dialogs::render_search_dialog(f, rect, &self.icons, &self.input_buffer, self.cursor_position);
            }
            DialogType::Info(message) => {
                system_dialogs::render_message_dialog(f, rect, &self.icons, MessageKind::Info, &message, &mut self.scroll);
            }
            DialogType::Warning(message) => {
                system_dialogs::render_message_dialog(
                    f,
                    rect,
                    &self.icons,
                    MessageKind::Warning,
                    &message,
                    &mut self.scroll,
                );
            }
            DialogType::Error(message) => {
                system_dialogs::render_message_dialog(f, rect, &self.icons, MessageKind::Error, &message, &mut self.scroll);
            }
            DialogType::Help => system_dialogs::render_help_dialog(f, rect, &mut self.scroll),
            DialogType::Logs => system_dialogs::render_logs_dialog(f, rect, &self.logger, &mut self.scroll),
        }
    }
}
