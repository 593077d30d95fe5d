//! Client-side search and category filter.

use crate::classroom::{Classroom, RoomCategory};

/// Search text plus an optional exact-match category.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassroomFilter {
    search_text: String,
    pub category: Option<RoomCategory>,
}

impl ClassroomFilter {
    pub fn new(search: &str, category: Option<RoomCategory>) -> Self {
        let mut filter = Self {
            search_text: String::new(),
            category,
        };
        filter.set_search(search);
        filter
    }

    /// Store the submitted search text. Kept lower-cased.
    pub fn set_search(&mut self, text: &str) {
        self.search_text = text.to_lowercase();
    }

    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    pub fn is_active(&self) -> bool {
        !self.search_text.is_empty() || self.category.is_some()
    }

    pub fn clear(&mut self) {
        self.search_text.clear();
        self.category = None;
    }

    pub fn matches(&self, classroom: &Classroom) -> bool {
        let matches_search = classroom.code.to_lowercase().contains(&self.search_text)
            || classroom.name.to_lowercase().contains(&self.search_text);
        let matches_category = self.category.map_or(true, |category| classroom.category == category);
        matches_search && matches_category
    }

    /// Keep the matching records in their original order.
    pub fn apply<'a>(&self, classrooms: &'a [Classroom]) -> Vec<&'a Classroom> {
        classrooms.iter().filter(|c| self.matches(c)).collect()
    }
}
