use crate::classroom::{Classroom, RoomCategory};
use crate::listing::SortColumn;
use crate::routes::Route;

#[derive(Debug, Clone)]
pub enum Action {
    // Table navigation
    NextRow,
    PreviousRow,
    NextPage,
    PreviousPage,
    FirstRow,
    LastRow,

    // Search, filter and sort
    ApplySearch(String),
    CycleCategoryFilter,
    SetCategoryFilter(Option<RoomCategory>),
    ClearFilters,
    ToggleSort(SortColumn),

    // Routing between the list and the create/edit screens
    Navigate(Route),

    // Classroom operations
    /// Confirmed delete; the seat rule is still checked before the service is called
    DeleteClassroom(String),
    CreateClassroom(Classroom),
    UpdateClassroom(Classroom),

    // Data loading
    RefreshData,
    DataLoaded(Vec<Classroom>),
    LoadFailed(String),
    OperationCompleted(String),
    OperationFailed(String),

    // UI operations
    ShowDialog(DialogType),
    HideDialog,

    // App control
    Quit,
    None,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DialogType {
    /// Create (`existing == None`) or edit form
    ClassroomForm {
        existing: Option<Classroom>,
    },
    DeleteConfirmation {
        code: String,
        name: String,
    },
    Search {
        current: String,
    },
    Warning(String),
    Error(String),
    Info(String),
    Help,
    Logs,
}
