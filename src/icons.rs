//! Icon service for managing different icon themes
//!
//! This module provides a centralized way to manage icons throughout the application,
//! supporting different themes like emoji, Unicode, and ASCII fallbacks.

use serde::{Deserialize, Serialize};

/// Icon theme variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum IconTheme {
    /// Emoji icons (colorful, modern look)
    Emoji,
    /// Unicode symbols (clean, native look)
    Unicode,
    /// ASCII characters (maximum compatibility)
    #[default]
    Ascii,
}

/// UI element icons
#[derive(Debug, Clone)]
pub struct UiIcons {
    pub table_title: &'static str,
    pub error: &'static str,
    pub info: &'static str,
    pub warning: &'static str,
    pub success: &'static str,
}

/// Toolbar and row action icons
#[derive(Debug, Clone)]
pub struct ActionIcons {
    pub search: &'static str,
    pub filter: &'static str,
    pub add: &'static str,
    pub edit: &'static str,
    pub delete: &'static str,
    pub locked: &'static str,
    pub loading: &'static str,
}

/// Complete icon set for a specific theme
#[derive(Debug, Clone)]
pub struct IconSet {
    pub ui: UiIcons,
    pub actions: ActionIcons,
}

/// Icon service for managing themes and providing icons
#[derive(Debug, Clone, Default)]
pub struct IconService {
    current_theme: IconTheme,
}

impl IconService {
    /// Create a new icon service with the specified theme
    #[must_use]
    pub fn new(theme: IconTheme) -> Self {
        Self { current_theme: theme }
    }

    #[must_use]
    pub fn theme(&self) -> IconTheme {
        self.current_theme
    }

    pub fn set_theme(&mut self, theme: IconTheme) {
        self.current_theme = theme;
    }

    /// Cycle to the next icon theme in the sequence: Ascii -> Unicode -> Emoji -> Ascii
    pub fn cycle_icon_theme(&mut self) {
        self.current_theme = match self.current_theme {
            IconTheme::Ascii => IconTheme::Unicode,
            IconTheme::Unicode => IconTheme::Emoji,
            IconTheme::Emoji => IconTheme::Ascii,
        };
    }

    /// Get the complete icon set for the current theme
    #[must_use]
    pub fn icons(&self) -> IconSet {
        match self.current_theme {
            IconTheme::Emoji => Self::emoji_icons(),
            IconTheme::Unicode => Self::unicode_icons(),
            IconTheme::Ascii => Self::ascii_icons(),
        }
    }

    fn emoji_icons() -> IconSet {
        IconSet {
            ui: UiIcons {
                table_title: "🏫",
                error: "❌",
                info: "💡",
                warning: "⚠️",
                success: "✅",
            },
            actions: ActionIcons {
                search: "🔍",
                filter: "🏷️",
                add: "➕",
                edit: "✏️",
                delete: "🗑️",
                locked: "🔒",
                loading: "🔄",
            },
        }
    }

    fn unicode_icons() -> IconSet {
        IconSet {
            ui: UiIcons {
                table_title: "▶",
                error: "✗",
                info: "ⓘ",
                warning: "⚠",
                success: "✓",
            },
            actions: ActionIcons {
                search: "⌕",
                filter: "◆",
                add: "✚",
                edit: "✎",
                delete: "✗",
                locked: "⊘",
                loading: "⟳",
            },
        }
    }

    fn ascii_icons() -> IconSet {
        IconSet {
            ui: UiIcons {
                table_title: ">",
                error: "X",
                info: "i",
                warning: "!",
                success: "+",
            },
            actions: ActionIcons {
                search: "?",
                filter: "#",
                add: "+",
                edit: "e",
                delete: "d",
                locked: "-",
                loading: "...",
            },
        }
    }

    #[must_use]
    pub fn table_title(&self) -> &'static str {
        self.icons().ui.table_title
    }

    #[must_use]
    pub fn error(&self) -> &'static str {
        self.icons().ui.error
    }

    #[must_use]
    pub fn info(&self) -> &'static str {
        self.icons().ui.info
    }

    #[must_use]
    pub fn warning(&self) -> &'static str {
        self.icons().ui.warning
    }

    #[must_use]
    pub fn success(&self) -> &'static str {
        self.icons().ui.success
    }

    #[must_use]
    pub fn search(&self) -> &'static str {
        self.icons().actions.search
    }

    #[must_use]
    pub fn filter(&self) -> &'static str {
        self.icons().actions.filter
    }

    #[must_use]
    pub fn add(&self) -> &'static str {
        self.icons().actions.add
    }

    #[must_use]
    pub fn edit(&self) -> &'static str {
        self.icons().actions.edit
    }

    #[must_use]
    pub fn delete(&self) -> &'static str {
        self.icons().actions.delete
    }

    /// Shown in place of the delete action when the seat rule forbids it
    #[must_use]
    pub fn locked(&self) -> &'static str {
        self.icons().actions.locked
    }

    #[must_use]
    pub fn loading(&self) -> &'static str {
        self.icons().actions.loading
    }
}
