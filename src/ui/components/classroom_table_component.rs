//! Sortable, paginated classroom table.

use crate::classroom::Classroom;
use crate::constants::{
    COLUMN_ACTIONS, COLUMN_CATEGORY, COLUMN_CODE, COLUMN_NAME, COLUMN_RESPONSIBLE, COLUMN_SEATS,
    EMPTY_TABLE_MESSAGE,
};
use crate::icons::IconService;
use crate::listing::{ListingView, SortColumn};
use crate::routes::Route;
use crate::ui::core::{
    actions::{Action, DialogType},
    Component,
};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

pub struct ClassroomTableComponent {
    pub view: ListingView,
    pub table_state: TableState,
    pub icons: IconService,
    pub loading: bool,
}

impl Default for ClassroomTableComponent {
    fn default() -> Self {
        Self::new(ListingView::default())
    }
}

impl ClassroomTableComponent {
    pub fn new(view: ListingView) -> Self {
        Self {
            view,
            table_state: TableState::default(),
            icons: IconService::default(),
            loading: false,
        }
    }

    pub fn set_records(&mut self, records: Vec<Classroom>) {
        self.view.set_records(records);
        self.update_table_state();
    }

    pub fn selected(&self) -> Option<&Classroom> {
        self.view.selected()
    }

    fn update_table_state(&mut self) {
        self.table_state.select(self.view.selected_in_page());
    }

    fn header_cell(&self, title: &str, column: Option<(SortColumn, char)>) -> Cell<'static> {
        let mut spans = Vec::new();
        if let Some((column, key)) = column {
            spans.push(Span::styled(format!("{} ", key), Style::default().fg(Color::DarkGray)));
            spans.push(Span::raw(title.to_string()));
            if let Some(indicator) = self.view.sort().indicator(column) {
                spans.push(Span::styled(format!(" {}", indicator), Style::default().fg(Color::Cyan)));
            }
        } else {
            spans.push(Span::raw(title.to_string()));
        }
        Cell::from(Line::from(spans))
    }

    fn create_header(&self) -> Row<'static> {
        Row::new(vec![
            self.header_cell(COLUMN_CODE, Some((SortColumn::Code, '1'))),
            self.header_cell(COLUMN_NAME, Some((SortColumn::Name, '2'))),
            self.header_cell(COLUMN_SEATS, Some((SortColumn::SeatCount, '3'))),
            self.header_cell(COLUMN_CATEGORY, None),
            self.header_cell(COLUMN_RESPONSIBLE, None),
            self.header_cell(COLUMN_ACTIONS, None),
        ])
        .style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD))
        .bottom_margin(1)
    }

    fn create_row(&self, classroom: &Classroom) -> Row<'static> {
        let delete_span = if classroom.can_delete() {
            Span::styled(
                format!("{} Delete", self.icons.delete()),
                Style::default().fg(Color::Red),
            )
        } else {
            Span::styled(
                format!("{} Delete", self.icons.locked()),
                Style::default().fg(Color::DarkGray),
            )
        };

        let actions = Line::from(vec![
            Span::styled(format!("{} Edit", self.icons.edit()), Style::default().fg(Color::Cyan)),
            Span::raw("  "),
            delete_span,
        ]);

        Row::new(vec![
            Cell::from(classroom.code.clone()),
            Cell::from(classroom.name.clone()),
            Cell::from(Line::from(classroom.seat_count.to_string()).alignment(Alignment::Right)),
            Cell::from(classroom.category.label()),
            Cell::from(classroom.responsible_person.clone()),
            Cell::from(actions),
        ])
    }

    fn create_block(&self) -> Block<'static> {
        let total = self.view.records().len();
        let visible = self.view.visible_count();
        let title = if self.view.filter().is_active() {
            format!(" {} Classrooms ({} of {}) ", self.icons.table_title(), visible, total)
        } else {
            format!(" {} Classrooms ({}) ", self.icons.table_title(), total)
        };

        let pager = format!(
            " ← Page {}/{} → ",
            self.view.current_page() + 1,
            self.view.page_count()
        );

        Block::default()
            .borders(Borders::ALL)
            .title(title)
            .title_bottom(Line::from(pager).right_aligned())
    }
}

impl Component for ClassroomTableComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => Action::PreviousRow,
            KeyCode::Down | KeyCode::Char('j') => Action::NextRow,
            KeyCode::Left | KeyCode::PageUp => Action::PreviousPage,
            KeyCode::Right | KeyCode::PageDown => Action::NextPage,
            KeyCode::Home | KeyCode::Char('g') => Action::FirstRow,
            KeyCode::End => Action::LastRow,
            KeyCode::Char('1') => Action::ToggleSort(SortColumn::Code),
            KeyCode::Char('2') => Action::ToggleSort(SortColumn::Name),
            KeyCode::Char('3') => Action::ToggleSort(SortColumn::SeatCount),
            KeyCode::Enter | KeyCode::Char('e') => match self.selected() {
                Some(classroom) => Action::Navigate(Route::Edit(classroom.code.clone())),
                None => Action::None,
            },
            KeyCode::Char('d') => match self.selected() {
                Some(classroom) => Action::ShowDialog(DialogType::DeleteConfirmation {
                    code: classroom.code.clone(),
                    name: classroom.name.clone(),
                }),
                None => Action::None,
            },
            _ => Action::None,
        }
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::NextRow => self.view.select_next(),
            Action::PreviousRow => self.view.select_previous(),
            Action::NextPage => self.view.next_page(),
            Action::PreviousPage => self.view.previous_page(),
            Action::FirstRow => self.view.select_first(),
            Action::LastRow => self.view.select_last(),
            Action::ApplySearch(ref text) => self.view.apply_search(text),
            Action::CycleCategoryFilter => {
                self.view.cycle_category();
            }
            Action::SetCategoryFilter(category) => self.view.set_category(category),
            Action::ClearFilters => self.view.clear_filters(),
            Action::ToggleSort(column) => self.view.toggle_sort(column),
            _ => return action,
        }
        self.update_table_state();
        Action::None
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let block = self.create_block();

        if self.view.visible_count() == 0 {
            let message = if self.loading {
                format!("{} Loading...", self.icons.loading())
            } else {
                EMPTY_TABLE_MESSAGE.to_string()
            };
            let empty = Paragraph::new(message)
                .style(Style::default().fg(Color::Gray))
                .alignment(Alignment::Center)
                .block(block);
            f.render_widget(empty, rect);
            return;
        }

        let rows: Vec<Row> = self.view.page_rows().into_iter().map(|c| self.create_row(c)).collect();
        let widths = [
            Constraint::Length(10),
            Constraint::Min(16),
            Constraint::Length(9),
            Constraint::Length(12),
            Constraint::Min(16),
            Constraint::Length(18),
        ];

        let table = Table::new(rows, widths)
            .header(self.create_header())
            .block(block)
            .column_spacing(2)
            .row_highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD));

        self.update_table_state();
        f.render_stateful_widget(table, rect, &mut self.table_state);
    }
}
