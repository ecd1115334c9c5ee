//! Search results and pagination.

use crate::catalog::Room;
use serde::{Deserialize, Serialize};

/// Pagination info.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Pagination {
    /// Current page (1-indexed).
    pub page: i64,
    /// Items per page.
    pub per_page: i64,
    /// Total number of items.
    pub total: i64,
    /// Total number of pages.
    pub total_pages: i64,
    /// Whether there's a next page.
    pub has_next: bool,
    /// Whether there's a previous page.
    pub has_prev: bool,
}

impl Pagination {
    /// Create pagination info.
    ///
    /// `page` and `per_page` are clamped to at least 1 here, not just in
    /// the query builder: `RoomQuery` is deserializable, so a wire-shaped
    /// query can carry a zero page size straight into this constructor.
    pub fn new(page: i64, per_page: i64, total: i64) -> Self {
        let page = page.max(1);
        let per_page = per_page.max(1);
        let total_pages = if total == 0 {
            1
        } else {
            (total + per_page - 1) / per_page
        };

        Self {
            page,
            per_page,
            total,
            total_pages,
            has_next: page < total_pages,
            has_prev: page > 1,
        }
    }

    /// Offset of the first item on the current page.
    pub fn offset(&self) -> i64 {
        (self.page - 1) * self.per_page
    }

    /// Page numbers to render in a pager (e.g., `[3, 4, 5, 6, 7]`).
    pub fn page_numbers(&self, max_visible: usize) -> Vec<i64> {
        if self.total_pages as usize <= max_visible {
            return (1..=self.total_pages).collect();
        }

        let half = (max_visible / 2) as i64;
        let end = (self.page + half).min(self.total_pages);
        let start = (end - max_visible as i64 + 1).max(1);

        (start..start + max_visible as i64).collect()
    }

    /// Check if on the first page.
    pub fn is_first(&self) -> bool {
        self.page == 1
    }

    /// Check if on the last page.
    pub fn is_last(&self) -> bool {
        self.page >= self.total_pages
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(1, crate::search::query::DEFAULT_ROOMS_PER_PAGE, 0)
    }
}

/// One page of room search results.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomSearchResults {
    /// Rooms on the current page.
    pub rooms: Vec<Room>,
    /// Pagination info for the full result set.
    pub pagination: Pagination,
}

impl RoomSearchResults {
    /// Check if the whole result set is empty.
    pub fn is_empty(&self) -> bool {
        self.pagination.total == 0
    }
}
