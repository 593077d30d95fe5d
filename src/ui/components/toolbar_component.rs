//! Search box, category filter and add button above the table.

use crate::classroom::RoomCategory;
use crate::constants::{CATEGORY_PLACEHOLDER, SEARCH_PLACEHOLDER};
use crate::icons::IconService;
use crate::routes::Route;
use crate::ui::core::{
    actions::{Action, DialogType},
    Component,
};
use crate::ui::layout::LayoutManager;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

#[derive(Default)]
pub struct ToolbarComponent {
    /// Search text as the user typed it
    pub search_input: String,
    pub category: Option<RoomCategory>,
    pub icons: IconService,
}

impl ToolbarComponent {
    pub fn new() -> Self {
        Self::default()
    }

    fn field_block(title: &str, active: bool) -> Block<'static> {
        let color = if active { Color::Cyan } else { Color::Gray };
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(format!(" {} ", title))
            .style(Style::default().fg(color))
    }

    fn value_or_placeholder(value: Option<String>, placeholder: &str) -> Line<'static> {
        match value {
            Some(value) => Line::from(Span::styled(value, Style::default().fg(Color::White))),
            None => Line::from(Span::styled(
                placeholder.to_string(),
                Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
            )),
        }
    }
}

impl Component for ToolbarComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('/') => Action::ShowDialog(DialogType::Search {
                current: self.search_input.clone(),
            }),
            KeyCode::Char('c') => Action::CycleCategoryFilter,
            KeyCode::Char('x') => Action::ClearFilters,
            KeyCode::Char('a') => Action::Navigate(Route::Create),
            _ => Action::None,
        }
    }

    fn update(&mut self, action: Action) -> Action {
        // Record what was typed, then let the table apply the filter
        match &action {
            Action::ApplySearch(text) => self.search_input = text.clone(),
            Action::ClearFilters => self.search_input.clear(),
            _ => {}
        }
        action
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let chunks = LayoutManager::toolbar_layout(rect);

        let search_value = (!self.search_input.is_empty()).then(|| self.search_input.clone());
        let search_active = search_value.is_some();
        let search = Paragraph::new(Self::value_or_placeholder(search_value, SEARCH_PLACEHOLDER))
            .block(Self::field_block(&format!("{} Search [/]", self.icons.search()), search_active));
        f.render_widget(search, chunks[0]);

        let category_value = self.category.map(|c| c.label().to_string());
        let category_active = category_value.is_some();
        let category = Paragraph::new(Self::value_or_placeholder(category_value, CATEGORY_PLACEHOLDER))
            .block(Self::field_block(&format!("{} Room type [c]", self.icons.filter()), category_active));
        f.render_widget(category, chunks[1]);

        let add_button = Paragraph::new(Line::from(Span::styled(
            format!("{} Add new", self.icons.add()),
            Style::default().fg(Color::Black).bg(Color::Cyan).add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center)
        .block(Self::field_block("[a]", true));
        f.render_widget(add_button, chunks[2]);
    }
}
