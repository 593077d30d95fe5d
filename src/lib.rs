//! Classroom Admin - a terminal screen for managing classroom records
//!
//! This library provides the listing screen of a classroom administration
//! tool: a paginated, sortable table with search and room type filtering,
//! create and edit forms, and deletion guarded by the seat-count rule. Data
//! is kept in a local SQLite database behind an async service trait.
//!
//! # Modules
//!
//! The library is organized into several key modules:
//!
//! * [`classroom`] - Classroom records, room categories and the delete rule
//! * [`listing`] - Search, filter, sort and pagination of the loaded records
//! * [`routes`] - Screen routes for the list, create and edit views
//! * [`service`] - Data-access trait and its local implementation
//! * [`storage`] - Local database and data persistence
//! * [`config`] - Application configuration management
//! * [`ui`] - Terminal user interface components

/// Classroom domain types
pub mod classroom;

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// SeaORM entity models for database tables
pub mod entities;

/// Icon definitions for visual representation in the TUI
pub mod icons;

/// Search, filter, sort and pagination over the loaded records
pub mod listing;

/// Logging utilities for debugging and error tracking
pub mod logger;

/// Repository layer for database operations
pub mod repositories;

/// Screen routes
pub mod routes;

/// Data-access service used by the UI
pub mod service;

/// Local SQLite storage
pub mod storage;

/// Terminal user interface components and rendering
pub mod ui;

pub use classroom::{Classroom, RoomCategory};
