//! Classroom domain types.
//!
//! A [`Classroom`] is what the listing screen displays and what the
//! [`ClassroomService`](crate::service::ClassroomService) hands back. The screen
//! never owns the authoritative copy; it re-fetches after every mutation.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::constants::{DELETE_SEAT_LIMIT, WARNING_DELETE_SEAT_LIMIT};

/// Room category. The label is both the stored and the displayed form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoomCategory {
    #[serde(rename = "Lý thuyết")]
    Theory,
    #[serde(rename = "Thực hành")]
    Practice,
    #[serde(rename = "Hội trường")]
    Hall,
}

impl RoomCategory {
    /// All categories in display order.
    pub const ALL: [RoomCategory; 3] = [RoomCategory::Theory, RoomCategory::Practice, RoomCategory::Hall];

    pub fn label(&self) -> &'static str {
        match self {
            RoomCategory::Theory => "Lý thuyết",
            RoomCategory::Practice => "Thực hành",
            RoomCategory::Hall => "Hội trường",
        }
    }

    /// Next category in display order, wrapping around.
    pub fn next(&self) -> RoomCategory {
        let index = Self::ALL.iter().position(|c| c == self).unwrap_or(0);
        Self::ALL[(index + 1) % Self::ALL.len()]
    }

    /// Previous category in display order, wrapping around.
    pub fn previous(&self) -> RoomCategory {
        let index = Self::ALL.iter().position(|c| c == self).unwrap_or(0);
        Self::ALL[(index + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    /// Step through an optional category filter: none, then each category, then none again.
    pub fn cycle_filter(current: Option<RoomCategory>) -> Option<RoomCategory> {
        match current {
            None => Some(Self::ALL[0]),
            Some(category) => {
                let index = Self::ALL.iter().position(|c| *c == category).unwrap_or(0);
                Self::ALL.get(index + 1).copied()
            }
        }
    }
}

impl fmt::Display for RoomCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error returned when a string is not one of the category labels.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown room category: '{0}'")]
pub struct UnknownCategory(pub String);

impl FromStr for RoomCategory {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .find(|category| category.label() == s)
            .copied()
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

/// A classroom record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classroom {
    #[serde(alias = "maPhong")]
    pub code: String,
    #[serde(alias = "tenPhong")]
    pub name: String,
    #[serde(alias = "soChoNgoi")]
    pub seat_count: i32,
    #[serde(alias = "loaiPhong")]
    pub category: RoomCategory,
    #[serde(alias = "nguoiPhuTrach")]
    pub responsible_person: String,
}

impl Classroom {
    pub fn new(
        code: impl Into<String>,
        name: impl Into<String>,
        seat_count: i32,
        category: RoomCategory,
        responsible_person: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            seat_count,
            category,
            responsible_person: responsible_person.into(),
        }
    }

    /// Rooms at or above the seat limit cannot be deleted from the listing screen.
    pub fn can_delete(&self) -> bool {
        self.seat_count < DELETE_SEAT_LIMIT
    }
}

/// Deletion refused by the seat-count rule.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{}", WARNING_DELETE_SEAT_LIMIT)]
pub struct DeleteRejected {
    pub code: String,
    pub seat_count: i32,
}

/// Check the seat-count rule before any delete reaches the service.
pub fn check_deletable(classroom: &Classroom) -> Result<(), DeleteRejected> {
    if classroom.can_delete() {
        Ok(())
    } else {
        Err(DeleteRejected {
            code: classroom.code.clone(),
            seat_count: classroom.seat_count,
        })
    }
}
