//! Core UI functionality for the classroom admin screen.
//!
//! This module contains the building blocks every component relies on:
//!
//! - [`actions`] - Action definitions and UI state transitions
//! - [`component`] - Base component trait
//! - [`event_handler`] - Terminal event polling
//! - [`task_manager`] - Background service calls reported back as actions
//!
//! Components turn key events into [`Action`]s, pass actions they do not own
//! through [`Component::update`], and the app component performs whatever is
//! left, spawning service calls through the [`TaskManager`].

pub mod actions;
pub mod component;
pub mod event_handler;
pub mod task_manager;

pub use actions::{Action, DialogType};
pub use component::Component;
pub use event_handler::{EventHandler, EventType};
pub use task_manager::{TaskId, TaskManager};
