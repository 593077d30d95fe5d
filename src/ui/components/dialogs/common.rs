use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

/// Creates a styled main dialog block
pub fn create_dialog_block(title: String, theme_color: Color) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(title)
        .title_style(Style::default().fg(theme_color).add_modifier(Modifier::BOLD))
        .style(Style::default().fg(theme_color))
}

/// Creates an input field with a visual cursor at `cursor_position` (in chars)
pub fn create_input_paragraph(
    input_buffer: &str,
    cursor_position: Option<usize>,
    field_title: &str,
    focused: bool,
) -> Paragraph<'static> {
    let border_color = if focused { Color::Cyan } else { Color::Gray };
    let input_block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(format!(" {} ", field_title))
        .title_style(Style::default().fg(Color::White))
        .style(Style::default().fg(border_color));

    let line = match cursor_position {
        Some(position) if focused => {
            let before: String = input_buffer.chars().take(position).collect();
            let after: String = input_buffer.chars().skip(position).collect();
            Line::from(vec![
                Span::raw(before),
                Span::styled("█", Style::default().fg(Color::Cyan)),
                Span::raw(after),
            ])
        }
        _ => Line::from(input_buffer.to_string()),
    };

    Paragraph::new(line).block(input_block).style(Style::default().fg(Color::White))
}

/// Instruction shortcut definition: (key, color, description)
pub type InstructionShortcut = (&'static str, Color, &'static str);

/// Creates a paragraph with color-coded instruction shortcuts
pub fn create_instructions_paragraph(instructions: &[InstructionShortcut]) -> Paragraph<'static> {
    let mut instruction_text = Vec::new();
    for (key, color, desc) in instructions {
        instruction_text.push(Span::styled(
            *key,
            Style::default().fg(*color).add_modifier(Modifier::BOLD),
        ));
        instruction_text.push(Span::styled(*desc, Style::default().fg(Color::Gray)));
    }

    Paragraph::new(Line::from(instruction_text)).alignment(Alignment::Center)
}

/// Common instruction shortcuts used across dialogs
pub mod shortcuts {
    use super::*;

    pub const SEPARATOR: InstructionShortcut = (" • ", Color::Gray, "");
    pub const ESC_CANCEL: InstructionShortcut = ("Esc", Color::Red, " Cancel");
    pub const ENTER_SUBMIT: InstructionShortcut = ("Enter", Color::Green, " Save");
    pub const ENTER_SEARCH: InstructionShortcut = ("Enter", Color::Green, " Search");
    pub const TAB_NEXT: InstructionShortcut = ("Tab", Color::Cyan, " Next field");
    pub const ARROWS_CATEGORY: InstructionShortcut = ("←/→", Color::Cyan, " Room type");
}

/// Insert `c` at the char position `cursor` and advance the cursor
pub fn insert_char(buffer: &mut String, cursor: &mut usize, c: char) {
    let byte_pos: usize = buffer.chars().take(*cursor).map(|ch| ch.len_utf8()).sum();
    buffer.insert(byte_pos, c);
    *cursor += 1;
}

/// Remove the char before the cursor (backspace)
pub fn remove_char_before(buffer: &mut String, cursor: &mut usize) {
    if *cursor == 0 {
        return;
    }
    let byte_pos: usize = buffer.chars().take(*cursor - 1).map(|ch| ch.len_utf8()).sum();
    buffer.remove(byte_pos);
    *cursor -= 1;
}

/// Remove the char under the cursor (delete)
pub fn remove_char_at(buffer: &mut String, cursor: usize) {
    if cursor < buffer.chars().count() {
        let byte_pos: usize = buffer.chars().take(cursor).map(|ch| ch.len_utf8()).sum();
        buffer.remove(byte_pos);
    }
}
