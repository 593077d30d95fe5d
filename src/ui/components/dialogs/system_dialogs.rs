use super::common::{self, shortcuts};
use super::scroll_behavior::ScrollState;
use crate::constants::{CONFIRM_DELETE_QUESTION, DIALOG_TITLE_LOGS, SEARCH_PLACEHOLDER};
use crate::icons::IconService;
use crate::logger::Logger;
use crate::ui::layout::LayoutManager;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Scrollbar, ScrollbarOrientation, Wrap},
    Frame,
};

const HELP_TEXT: &str = r"
CLASSROOM ADMIN
===============

TABLE
-----
j/k ↑↓        Move selection down/up
←/→           Previous/next page
PgUp/PgDn     Previous/next page
g/Home, End   First/last row
1 / 2 / 3     Sort by code / name / seats (asc, desc, off)

SEARCH & FILTER
---------------
/             Search by room code or name
c             Cycle room type filter
x             Clear search and room type filter

CLASSROOMS
----------
a             Add a classroom
e/Enter       Edit selected classroom
d             Delete selected classroom (confirmation)
              Only rooms with fewer than 30 seats can be deleted
r             Reload classrooms

FORM
----
Tab/Shift+Tab Next/previous field
←/→           Change room type
Enter         Save
Esc           Back to the list

GENERAL
-------
?             Toggle this help
G             Show logs
q, Ctrl+C     Quit

HELP SCROLLING
--------------
j/k ↑↓        Scroll
PgUp/PgDn     Page through help
Home/End      Jump to top/bottom

Press 'Esc' or '?' to close this help
";

/// Severity of a message dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Info,
    Warning,
    Error,
}

impl MessageKind {
    fn color(&self) -> Color {
        match self {
            MessageKind::Info => Color::Blue,
            MessageKind::Warning => Color::Yellow,
            MessageKind::Error => Color::Red,
        }
    }

    fn title(&self, icons: &IconService) -> String {
        match self {
            MessageKind::Info => format!(" {} Info ", icons.info()),
            MessageKind::Warning => format!(" {} Warning ", icons.warning()),
            MessageKind::Error => format!(" {} Error ", icons.error()),
        }
    }
}

pub fn render_delete_confirmation_dialog(f: &mut Frame, area: Rect, icons: &IconService, code: &str, name: &str) {
    let dialog_area = LayoutManager::centered_rect_lines(50, 8, area);
    f.render_widget(Clear, dialog_area);

    let block = common::create_dialog_block(format!(" {} Confirm delete ", icons.warning()), Color::Red);
    let inner_area = block.inner(dialog_area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([Constraint::Length(1), Constraint::Length(2), Constraint::Length(1)])
        .split(inner_area);

    let question = Paragraph::new(CONFIRM_DELETE_QUESTION)
        .style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);

    let target = Paragraph::new(Line::from(vec![
        Span::styled(code.to_string(), Style::default().fg(Color::Cyan)),
        Span::raw(" - "),
        Span::raw(name.to_string()),
    ]))
    .style(Style::default().fg(Color::Gray))
    .alignment(Alignment::Center);

    let instructions = common::create_instructions_paragraph(&[
        ("Enter/y", Color::Green, " Delete"),
        shortcuts::SEPARATOR,
        ("Esc/n", Color::Red, " Cancel"),
    ]);

    f.render_widget(block, dialog_area);
    f.render_widget(question, chunks[0]);
    f.render_widget(target, chunks[1]);
    f.render_widget(instructions, chunks[2]);
}

pub fn render_message_dialog(
    f: &mut Frame,
    area: Rect,
    icons: &IconService,
    kind: MessageKind,
    message: &str,
    scroll: &mut ScrollState,
) {
    let height = if kind == MessageKind::Error { 12 } else { 10 };
    let dialog_area = LayoutManager::centered_rect_lines(60, height, area);
    f.render_widget(Clear, dialog_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(kind.title(icons))
        .style(Style::default().fg(kind.color()));

    let content_area = Rect::new(
        dialog_area.x + 1,
        dialog_area.y + 1,
        dialog_area.width.saturating_sub(2),
        dialog_area.height.saturating_sub(4),
    );

    let instructions_area = Rect::new(
        dialog_area.x + 1,
        dialog_area.y + dialog_area.height.saturating_sub(2),
        dialog_area.width.saturating_sub(2),
        1,
    );

    let lines: Vec<&str> = message.lines().collect();
    let total_lines = lines.len();
    let visible_height = content_area.height as usize;
    let offset = scroll.clamp(total_lines, visible_height);

    let message_text = lines.iter().skip(offset).take(visible_height).copied().collect::<Vec<_>>().join("\n");

    let message_paragraph = Paragraph::new(message_text)
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Left)
        .wrap(Wrap { trim: true });

    let instructions_paragraph = Paragraph::new("Press any key to continue • j/k to scroll if needed")
        .style(Style::default().fg(Color::Gray))
        .alignment(Alignment::Center);

    f.render_widget(block, dialog_area);
    f.render_widget(message_paragraph, content_area);
    f.render_widget(instructions_paragraph, instructions_area);

    if total_lines > visible_height {
        render_scrollbar(f, content_area, scroll);
    }
}

pub fn render_search_dialog(f: &mut Frame, area: Rect, icons: &IconService, input_buffer: &str, cursor: usize) {
    let dialog_area = LayoutManager::centered_rect_lines(60, 9, area);
    f.render_widget(Clear, dialog_area);

    let block = common::create_dialog_block(format!(" {} Search ", icons.search()), Color::Cyan);
    let inner_area = block.inner(dialog_area);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([Constraint::Length(3), Constraint::Length(1)])
        .split(inner_area);

    let input = common::create_input_paragraph(input_buffer, Some(cursor), SEARCH_PLACEHOLDER, true);
    let instructions = common::create_instructions_paragraph(&[
        shortcuts::ENTER_SEARCH,
        shortcuts::SEPARATOR,
        shortcuts::ESC_CANCEL,
    ]);

    f.render_widget(block, dialog_area);
    f.render_widget(input, chunks[0]);
    f.render_widget(instructions, chunks[1]);
}

pub fn render_help_dialog(f: &mut Frame, area: Rect, scroll: &mut ScrollState) {
    render_scrollable_panel(f, area, "📖 Help - Press 'Esc' or '?' to close", HELP_TEXT, scroll);
}

pub fn render_logs_dialog(f: &mut Frame, area: Rect, logger: &Logger, scroll: &mut ScrollState) {
    let logs = logger.get_logs();
    let content = if logs.is_empty() {
        "No logs available".to_string()
    } else {
        logs.join("\n")
    };
    render_scrollable_panel(f, area, DIALOG_TITLE_LOGS, &content, scroll);
}

fn render_scrollable_panel(f: &mut Frame, area: Rect, title: &str, content: &str, scroll: &mut ScrollState) {
    let panel_area = LayoutManager::centered_rect(90, 90, area);
    f.render_widget(Clear, panel_area);

    let margin_x = 2;
    let margin_y = 1;
    let content_area = Rect::new(
        panel_area.x + margin_x,
        panel_area.y + margin_y,
        panel_area.width.saturating_sub(margin_x * 2),
        panel_area.height.saturating_sub(margin_y * 2),
    );

    let lines: Vec<&str> = content.lines().collect();
    let total_lines = lines.len();
    let visible_height = content_area.height.saturating_sub(2) as usize;
    let offset = scroll.clamp(total_lines, visible_height);

    let text = lines.iter().skip(offset).take(visible_height).copied().collect::<Vec<_>>().join("\n");

    let paragraph = Paragraph::new(text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(title.to_string())
                .title_alignment(Alignment::Center),
        )
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Left);

    f.render_widget(paragraph, content_area);

    if total_lines > visible_height {
        render_scrollbar(f, content_area, scroll);
    }
}

fn render_scrollbar(f: &mut Frame, area: Rect, scroll: &mut ScrollState) {
    let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
        .begin_symbol(Some("↑"))
        .end_symbol(Some("↓"))
        .track_symbol(Some("│"))
        .thumb_symbol("▐")
        .style(Style::default().fg(Color::Gray))
        .thumb_style(Style::default().fg(Color::White));

    f.render_stateful_widget(scrollbar, area, &mut scroll.scrollbar);
}
