//! Local storage module for classroom persistence
//!
//! SQLite through SeaORM: connection setup, schema bootstrap and JSON seed import.

pub mod db;

pub use db::LocalStorage;
