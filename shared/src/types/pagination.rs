//! Pagination related types for list endpoints

use serde::{Deserialize, Serialize};

/// Pagination parameters for list queries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    /// Current page number (0-indexed)
    #[serde(default)]
    pub page: u32,

    /// Number of items per page
    #[serde(default = "default_per_page")]
    pub per_page: u32,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: 0,
            per_page: default_per_page(),
        }
    }
}

impl Pagination {
    /// Create a new pagination with custom values
    pub fn new(page: u32, per_page: u32) -> Self {
        Self {
            page,
            per_page: per_page.max(MIN_PER_PAGE),
        }
    }

    /// Build the page that contains the `from` offset.
    ///
    /// Offsets are rounded down to a page boundary: `from = 3, size = 2`
    /// yields the page covering items 2 and 3.
    pub fn from_offset(from: u32, size: u32) -> Self {
        let per_page = size.max(MIN_PER_PAGE);
        Self::new(from / per_page, per_page)
    }

    /// Calculate the offset for queries
    pub fn offset(&self) -> usize {
        self.page as usize * self.per_page as usize
    }

    /// Get the limit for queries
    pub fn limit(&self) -> usize {
        self.per_page as usize
    }

    /// Check if this is the first page
    pub fn is_first_page(&self) -> bool {
        self.page == 0
    }

    /// Cut the current page out of an already ordered sequence
    pub fn apply<T>(&self, items: impl IntoIterator<Item = T>) -> Vec<T> {
        items
            .into_iter()
            .skip(self.offset())
            .take(self.limit())
            .collect()
    }
}

const MIN_PER_PAGE: u32 = 1;

fn default_per_page() -> u32 {
    10
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pagination_defaults() {
        let pagination = Pagination::default();
        assert_eq!(pagination.page, 0);
        assert_eq!(pagination.per_page, 10);
        assert!(pagination.is_first_page());
    }

    #[test]
    fn test_from_offset_rounds_down_to_page() {
        let pagination = Pagination::from_offset(3, 2);
        assert_eq!(pagination.page, 1);
        assert_eq!(pagination.offset(), 2);
        assert_eq!(pagination.limit(), 2);
    }

    #[test]
    fn test_from_offset_zero_size_is_clamped() {
        let pagination = Pagination::from_offset(5, 0);
        assert_eq!(pagination.per_page, 1);
        assert_eq!(pagination.page, 5);
    }

    #[test]
    fn test_from_offset_keeps_large_sizes() {
        let pagination = Pagination::from_offset(0, 5000);
        assert_eq!(pagination.limit(), 5000);
    }

    #[test]
    fn test_apply_slices_page() {
        let items: Vec<u32> = (0..7).collect();
        assert_eq!(Pagination::from_offset(0, 3).apply(items.clone()), vec![0, 1, 2]);
        assert_eq!(Pagination::from_offset(6, 3).apply(items.clone()), vec![6]);
        assert!(Pagination::from_offset(9, 3).apply(items).is_empty());
    }
}
