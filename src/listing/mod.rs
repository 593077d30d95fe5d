//! In-memory view over the fetched classroom list.
//!
//! [`ListingView`] is the screen's read-mostly cache: the records last returned
//! by the service, the active search/category filter, the column sort, and the
//! selected row. Pagination is derived from the selection so the selected row
//! is always on the current page.

pub mod filter;
pub mod sort;

pub use filter::ClassroomFilter;
pub use sort::{SortColumn, SortOrder, SortState};

use crate::classroom::{Classroom, RoomCategory};
use crate::constants::DEFAULT_PAGE_SIZE;

#[derive(Debug, Clone)]
pub struct ListingView {
    records: Vec<Classroom>,
    filter: ClassroomFilter,
    sort: SortState,
    page_size: usize,
    selected: usize,
}

impl Default for ListingView {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl ListingView {
    pub fn new(page_size: usize) -> Self {
        Self {
            records: Vec::new(),
            filter: ClassroomFilter::default(),
            sort: SortState::default(),
            page_size: page_size.max(1),
            selected: 0,
        }
    }

    /// Replace the cached records. The selection follows the previously
    /// selected code when it is still visible.
    pub fn set_records(&mut self, records: Vec<Classroom>) {
        let selected_code = self.selected().map(|c| c.code.clone());
        self.records = records;

        let position = selected_code.and_then(|code| self.visible().iter().position(|c| c.code == code));
        match position {
            Some(index) => self.selected = index,
            None => self.clamp_selection(),
        }
    }

    pub fn records(&self) -> &[Classroom] {
        &self.records
    }

    pub fn find(&self, code: &str) -> Option<&Classroom> {
        self.records.iter().find(|c| c.code == code)
    }

    pub fn contains_code(&self, code: &str) -> bool {
        self.find(code).is_some()
    }

    /// Filtered, then sorted.
    pub fn visible(&self) -> Vec<&Classroom> {
        let mut rows = self.filter.apply(&self.records);
        self.sort.apply(&mut rows);
        rows
    }

    pub fn visible_count(&self) -> usize {
        self.records.iter().filter(|c| self.filter.matches(c)).count()
    }

    pub fn filter(&self) -> &ClassroomFilter {
        &self.filter
    }

    pub fn apply_search(&mut self, text: &str) {
        self.filter.set_search(text);
        self.selected = 0;
    }

    pub fn set_category(&mut self, category: Option<RoomCategory>) {
        self.filter.category = category;
        self.selected = 0;
    }

    pub fn cycle_category(&mut self) -> Option<RoomCategory> {
        let next = RoomCategory::cycle_filter(self.filter.category);
        self.set_category(next);
        next
    }

    pub fn clear_filters(&mut self) {
        self.filter.clear();
        self.selected = 0;
    }

    pub fn sort(&self) -> SortState {
        self.sort
    }

    pub fn toggle_sort(&mut self, column: SortColumn) {
        self.sort.toggle(column);
        self.selected = 0;
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn set_page_size(&mut self, page_size: usize) {
        self.page_size = page_size.max(1);
    }

    /// Number of pages, never zero.
    pub fn page_count(&self) -> usize {
        self.visible_count().div_ceil(self.page_size).max(1)
    }

    /// Zero-based page holding the selected row.
    pub fn current_page(&self) -> usize {
        self.selected / self.page_size
    }

    /// Rows of the current page.
    pub fn page_rows(&self) -> Vec<&Classroom> {
        self.visible()
            .into_iter()
            .skip(self.current_page() * self.page_size)
            .take(self.page_size)
            .collect()
    }

    /// Index of the selected row within [`page_rows`](Self::page_rows).
    pub fn selected_in_page(&self) -> Option<usize> {
        if self.visible_count() == 0 {
            None
        } else {
            Some(self.selected % self.page_size)
        }
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn selected(&self) -> Option<&Classroom> {
        self.visible().get(self.selected).copied()
    }

    pub fn select_next(&mut self) {
        let count = self.visible_count();
        if count > 0 {
            self.selected = (self.selected + 1) % count;
        }
    }

    pub fn select_previous(&mut self) {
        let count = self.visible_count();
        if count > 0 {
            self.selected = if self.selected == 0 { count - 1 } else { self.selected - 1 };
        }
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    pub fn select_last(&mut self) {
        self.selected = self.visible_count().saturating_sub(1);
    }

    /// Jump to the first row of the next page; stays put on the last page.
    pub fn next_page(&mut self) {
        let next = self.current_page() + 1;
        if next < self.page_count() {
            self.selected = next * self.page_size;
        }
    }

    /// Jump to the first row of the previous page.
    pub fn previous_page(&mut self) {
        let page = self.current_page();
        self.selected = page.saturating_sub(1) * self.page_size;
    }

    fn clamp_selection(&mut self) {
        let count = self.visible_count();
        if self.selected >= count {
            self.selected = count.saturating_sub(1);
        }
    }
}
