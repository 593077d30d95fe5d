//! Constants used throughout the application
//!
//! This module centralizes magic strings, UI text, and other constant values
//! to improve maintainability and consistency.

// Business rules
/// Rooms with this many seats or more cannot be deleted from the listing screen
pub const DELETE_SEAT_LIMIT: i32 = 30;

// Routes
pub const ROUTE_LIST: &str = "/phong-hoc";
pub const ROUTE_CREATE: &str = "/phong-hoc/them-moi";
pub const ROUTE_EDIT_PREFIX: &str = "/phong-hoc/chinh-sua/";

// Column titles
pub const COLUMN_CODE: &str = "Code";
pub const COLUMN_NAME: &str = "Name";
pub const COLUMN_SEATS: &str = "Seats";
pub const COLUMN_CATEGORY: &str = "Category";
pub const COLUMN_RESPONSIBLE: &str = "Responsible";
pub const COLUMN_ACTIONS: &str = "Actions";

// Placeholders
pub const SEARCH_PLACEHOLDER: &str = "Search by room code or name";
pub const CATEGORY_PLACEHOLDER: &str = "Filter by room type";

// Success Messages (shown with the theme's success icon)
pub const SUCCESS_CLASSROOM_DELETED: &str = "Classroom deleted";
pub const SUCCESS_CLASSROOM_CREATED: &str = "Classroom created";
pub const SUCCESS_CLASSROOM_UPDATED: &str = "Classroom updated";

// Warning Messages
pub const WARNING_DELETE_SEAT_LIMIT: &str = "Only rooms with fewer than 30 seats can be deleted";
pub const CONFIRM_DELETE_QUESTION: &str = "Are you sure you want to delete?";

// Error Messages (shown with the theme's error icon)
pub const ERROR_CLASSROOM_DELETE_FAILED: &str = "Failed to delete classroom";
pub const ERROR_CLASSROOM_CREATE_FAILED: &str = "Failed to create classroom";
pub const ERROR_CLASSROOM_UPDATE_FAILED: &str = "Failed to update classroom";
pub const ERROR_LOAD_FAILED: &str = "Failed to load classrooms";
pub const ERROR_CLASSROOM_NOT_FOUND: &str = "Classroom not found";

// Validation Error Messages
pub const ERROR_CODE_REQUIRED: &str = "Room code is required";
pub const ERROR_CODE_EXISTS: &str = "Room code already exists";
pub const ERROR_NAME_REQUIRED: &str = "Room name is required";
pub const ERROR_SEATS_INVALID: &str = "Seat count must be a positive whole number";
pub const ERROR_RESPONSIBLE_REQUIRED: &str = "Responsible person is required";

// UI Messages
pub const CONFIG_GENERATED: &str = "✅ Generated default configuration file";
pub const DIALOG_TITLE_LOGS: &str = "🔍 Logs - Press 'Esc', 'G' or 'q' to close";
pub const EMPTY_TABLE_MESSAGE: &str = "No data";

// UI Layout Constants
/// Default number of rows per table page
pub const DEFAULT_PAGE_SIZE: usize = 5;
/// Largest accepted page size
pub const MAX_PAGE_SIZE: usize = 100;
/// Height of the toolbar (search box, category filter, add button)
pub const TOOLBAR_HEIGHT: u16 = 3;
