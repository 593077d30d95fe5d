use crossterm::event::{KeyCode, KeyEvent};
use ratatui::widgets::ScrollbarState;

/// Lines moved by PageUp/PageDown
const PAGE_STEP: usize = 10;

/// Scroll position shared by the help, logs and message dialogs.
///
/// The offset is only clamped at render time, once the visible height is known.
#[derive(Debug, Default, Clone)]
pub struct ScrollState {
    pub offset: usize,
    pub scrollbar: ScrollbarState,
}

impl ScrollState {
    pub fn reset(&mut self) {
        self.offset = 0;
        self.scrollbar = ScrollbarState::new(0);
    }

    pub fn scroll_up(&mut self) {
        self.set(self.offset.saturating_sub(1));
    }

    pub fn scroll_down(&mut self) {
        self.set(self.offset.saturating_add(1));
    }

    pub fn page_up(&mut self) {
        self.set(self.offset.saturating_sub(PAGE_STEP));
    }

    pub fn page_down(&mut self) {
        self.set(self.offset.saturating_add(PAGE_STEP));
    }

    pub fn scroll_to_top(&mut self) {
        self.set(0);
    }

    pub fn scroll_to_bottom(&mut self) {
        self.set(usize::MAX);
    }

    /// Apply a scrolling key; returns false when the key is not a scroll key
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.scroll_up(),
            KeyCode::Down | KeyCode::Char('j') => self.scroll_down(),
            KeyCode::PageUp => self.page_up(),
            KeyCode::PageDown => self.page_down(),
            KeyCode::Home => self.scroll_to_top(),
            KeyCode::End => self.scroll_to_bottom(),
            _ => return false,
        }
        true
    }

    /// Clamp the offset to the content and sync the scrollbar; returns the clamped offset
    pub fn clamp(&mut self, total_lines: usize, visible_height: usize) -> usize {
        let max_scroll = total_lines.saturating_sub(visible_height);
        self.offset = self.offset.min(max_scroll);
        self.scrollbar = self
            .scrollbar
            .content_length(total_lines)
            .viewport_content_length(visible_height)
            .position(self.offset);
        self.offset
    }

    fn set(&mut self, offset: usize) {
        self.offset = offset;
        self.scrollbar = self.scrollbar.position(offset);
    }
}
