//! Status bar component

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::routes::Route;

/// What the status bar shows besides the key hints
#[derive(Debug, Clone, Default)]
pub struct StatusInfo {
    pub route: Route,
    pub loading: bool,
    pub busy_operations: usize,
    pub last_message: Option<String>,
}

/// Status bar component
pub struct StatusBar;

impl StatusBar {
    /// Render the status bar
    pub fn render(f: &mut Frame, area: Rect, status: &StatusInfo) {
        let chunks = Layout::horizontal([Constraint::Min(0), Constraint::Length(30)]).split(area);

        let status_text = if status.loading {
            "Loading classrooms...".to_string()
        } else if status.busy_operations > 0 {
            "Saving changes...".to_string()
        } else if let Some(message) = &status.last_message {
            message.clone()
        } else {
            "/ search • c room type • a add • e edit • d delete • ? help • q quit".to_string()
        };

        let status_color = if status.loading || status.busy_operations > 0 {
            Color::Yellow
        } else {
            Color::Gray
        };

        f.render_widget(
            Paragraph::new(status_text).style(Style::default().fg(status_color)),
            chunks[0],
        );

        let route = Paragraph::new(Line::from(Span::styled(
            status.route.path(),
            Style::default().fg(Color::Cyan),
        )))
        .right_aligned();
        f.render_widget(route, chunks[1]);
    }
}
