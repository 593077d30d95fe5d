//! Create / edit form for a single classroom.

use super::common::{self, shortcuts};
use crate::classroom::{Classroom, RoomCategory};
use crate::constants::{
    ERROR_CODE_EXISTS, ERROR_CODE_REQUIRED, ERROR_NAME_REQUIRED, ERROR_RESPONSIBLE_REQUIRED, ERROR_SEATS_INVALID,
};
use crate::icons::IconService;
use crate::ui::layout::LayoutManager;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Code,
    Name,
    SeatCount,
    Category,
    ResponsiblePerson,
}

impl FormField {
    const ORDER: [FormField; 5] = [
        FormField::Code,
        FormField::Name,
        FormField::SeatCount,
        FormField::Category,
        FormField::ResponsiblePerson,
    ];

    fn title(&self) -> &'static str {
        match self {
            FormField::Code => "Room code",
            FormField::Name => "Room name",
            FormField::SeatCount => "Seats",
            FormField::Category => "Room type",
            FormField::ResponsiblePerson => "Responsible person",
        }
    }
}

/// Editable state of the classroom form
#[derive(Debug, Clone, PartialEq)]
pub struct ClassroomForm {
    /// Code of the record being edited; `None` when creating
    pub original_code: Option<String>,
    pub code: String,
    pub name: String,
    pub seat_count: String,
    pub category: RoomCategory,
    pub responsible_person: String,
    pub focus: FormField,
    pub cursor: usize,
    pub error: Option<String>,
}

impl Default for ClassroomForm {
    fn default() -> Self {
        Self::new(None)
    }
}

impl ClassroomForm {
    pub fn new(existing: Option<&Classroom>) -> Self {
        let mut form = match existing {
            Some(classroom) => Self {
                original_code: Some(classroom.code.clone()),
                code: classroom.code.clone(),
                name: classroom.name.clone(),
                seat_count: classroom.seat_count.to_string(),
                category: classroom.category,
                responsible_person: classroom.responsible_person.clone(),
                focus: FormField::Name,
                cursor: 0,
                error: None,
            },
            None => Self {
                original_code: None,
                code: String::new(),
                name: String::new(),
                seat_count: String::new(),
                category: RoomCategory::Theory,
                responsible_person: String::new(),
                focus: FormField::Code,
                cursor: 0,
                error: None,
            },
        };
        form.cursor = form.focused_len();
        form
    }

    pub fn is_editing(&self) -> bool {
        self.original_code.is_some()
    }

    fn is_read_only(&self, field: FormField) -> bool {
        field == FormField::Code && self.is_editing()
    }

    fn field_mut(&mut self, field: FormField) -> Option<&mut String> {
        match field {
            FormField::Code => Some(&mut self.code),
            FormField::Name => Some(&mut self.name),
            FormField::SeatCount => Some(&mut self.seat_count),
            FormField::ResponsiblePerson => Some(&mut self.responsible_person),
            FormField::Category => None,
        }
    }

    fn field_value(&self, field: FormField) -> String {
        match field {
            FormField::Code => self.code.clone(),
            FormField::Name => self.name.clone(),
            FormField::SeatCount => self.seat_count.clone(),
            FormField::Category => self.category.label().to_string(),
            FormField::ResponsiblePerson => self.responsible_person.clone(),
        }
    }

    fn focused_len(&self) -> usize {
        self.field_value(self.focus).chars().count()
    }

    fn move_focus(&mut self, forward: bool) {
        let len = FormField::ORDER.len();
        let mut index = FormField::ORDER.iter().position(|f| *f == self.focus).unwrap_or(0);
        loop {
            index = if forward { (index + 1) % len } else { (index + len - 1) % len };
            if !self.is_read_only(FormField::ORDER[index]) {
                break;
            }
        }
        self.focus = FormField::ORDER[index];
        self.cursor = self.focused_len();
    }

    pub fn next_field(&mut self) {
        self.move_focus(true);
    }

    pub fn previous_field(&mut self) {
        self.move_focus(false);
    }

    /// Apply an editing key to the focused field; returns false when the key was not used
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Tab | KeyCode::Down => self.next_field(),
            KeyCode::BackTab | KeyCode::Up => self.previous_field(),
            KeyCode::Left if self.focus == FormField::Category => self.category = self.category.previous(),
            KeyCode::Right if self.focus == FormField::Category => self.category = self.category.next(),
            KeyCode::Left => self.cursor = self.cursor.saturating_sub(1),
            KeyCode::Right => self.cursor = (self.cursor + 1).min(self.focused_len()),
            KeyCode::Home => self.cursor = 0,
            KeyCode::End => self.cursor = self.focused_len(),
            KeyCode::Char(c) => {
                let mut cursor = self.cursor;
                if let Some(buffer) = self.field_mut(self.focus) {
                    common::insert_char(buffer, &mut cursor, c);
                }
                self.cursor = cursor;
            }
            KeyCode::Backspace => {
                let mut cursor = self.cursor;
                if let Some(buffer) = self.field_mut(self.focus) {
                    common::remove_char_before(buffer, &mut cursor);
                }
                self.cursor = cursor;
            }
            KeyCode::Delete => {
                let cursor = self.cursor;
                if let Some(buffer) = self.field_mut(self.focus) {
                    common::remove_char_at(buffer, cursor);
                }
            }
            _ => return false,
        }
        self.error = None;
        true
    }

    /// Validate the fields and build the record to save.
    ///
    /// `existing_codes` are the codes already stored; a new code must not be one of them.
    pub fn validate(&self, existing_codes: &[String]) -> Result<Classroom, String> {
        let code = self.code.trim();
        if code.is_empty() {
            return Err(ERROR_CODE_REQUIRED.to_string());
        }
        if !self.is_editing() && existing_codes.iter().any(|existing| existing == code) {
            return Err(ERROR_CODE_EXISTS.to_string());
        }

        let name = self.name.trim();
        if name.is_empty() {
            return Err(ERROR_NAME_REQUIRED.to_string());
        }

        let seat_count = match self.seat_count.trim().parse::<i32>() {
            Ok(seats) if seats > 0 => seats,
            _ => return Err(ERROR_SEATS_INVALID.to_string()),
        };

        let responsible_person = self.responsible_person.trim();
        if responsible_person.is_empty() {
            return Err(ERROR_RESPONSIBLE_REQUIRED.to_string());
        }

        Ok(Classroom::new(code, name, seat_count, self.category, responsible_person))
    }
}

pub fn render_classroom_form_dialog(f: &mut Frame, area: Rect, icons: &IconService, form: &ClassroomForm) {
    let dialog_area = LayoutManager::centered_rect_lines(60, 22, area);
    f.render_widget(Clear, dialog_area);

    let title = if form.is_editing() {
        format!(" {} Edit classroom ", icons.edit())
    } else {
        format!(" {} New classroom ", icons.add())
    };
    let main_block = common::create_dialog_block(title, Color::Cyan);

    let inner_area = main_block.inner(dialog_area);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(inner_area);

    f.render_widget(main_block, dialog_area);

    for (index, field) in FormField::ORDER.iter().enumerate() {
        let focused = form.focus == *field;
        let widget = if *field == FormField::Category {
            category_selector(form.category, focused)
        } else if form.is_read_only(*field) {
            read_only_field(&form.field_value(*field), field.title())
        } else {
            common::create_input_paragraph(&form.field_value(*field), Some(form.cursor), field.title(), focused)
        };
        f.render_widget(widget, chunks[index]);
    }

    if let Some(error) = &form.error {
        let error_line = Paragraph::new(Line::from(Span::styled(
            format!("{} {}", icons.error(), error),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )));
        f.render_widget(error_line, chunks[5]);
    }

    let instructions = common::create_instructions_paragraph(&[
        shortcuts::ENTER_SUBMIT,
        shortcuts::SEPARATOR,
        shortcuts::TAB_NEXT,
        shortcuts::SEPARATOR,
        shortcuts::ARROWS_CATEGORY,
        shortcuts::SEPARATOR,
        shortcuts::ESC_CANCEL,
    ]);
    f.render_widget(instructions, chunks[6]);
}

fn category_selector(category: RoomCategory, focused: bool) -> Paragraph<'static> {
    let border_color = if focused { Color::Cyan } else { Color::Gray };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(format!(" {} ", FormField::Category.title()))
        .title_style(Style::default().fg(Color::White))
        .style(Style::default().fg(border_color));

    Paragraph::new(Line::from(vec![
        Span::styled("◀ ", Style::default().fg(Color::DarkGray)),
        Span::styled(category.label(), Style::default().fg(Color::White)),
        Span::styled(" ▶", Style::default().fg(Color::DarkGray)),
    ]))
    .block(block)
}

fn read_only_field(value: &str, title: &str) -> Paragraph<'static> {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(format!(" {} (read-only) ", title))
        .style(Style::default().fg(Color::DarkGray));
    Paragraph::new(value.to_string()).block(block)
}
