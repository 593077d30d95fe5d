//! Reusable UI components

// Component architecture
pub mod classroom_table_component;
pub mod dialog_component;
pub mod dialogs;
pub mod status_bar;
pub mod toolbar_component;

// Component exports
pub use classroom_table_component::ClassroomTableComponent;
pub use dialog_component::DialogComponent;
pub use status_bar::{StatusBar, StatusInfo};
pub use toolbar_component::ToolbarComponent;
