//! Dialog rendering and form state

pub mod common;
pub mod form_dialog;
pub mod scroll_behavior;
pub mod system_dialogs;

pub use form_dialog::{ClassroomForm, FormField};
pub use scroll_behavior::ScrollState;
pub use system_dialogs::MessageKind;
