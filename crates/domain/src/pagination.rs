// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Pagination metadata.
//!
//! Pagination is server-driven: the data source computes authoritative
//! metadata for every fetch and the client never slices results locally.
//! The only client-side arithmetic permitted is the display math in
//! [`PaginationMeta::display_range`].

use serde::{Deserialize, Serialize};

/// Authoritative pagination metadata returned with every fetched page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationMeta {
    /// The 1-indexed page this response covers.
    pub current_page: u32,
    /// The requested page size.
    pub page_size: u32,
    /// Total records matching the filter, across all pages.
    pub total_records: u64,
    /// Total pages. Never 0: an empty result set is one empty page.
    pub total_pages: u32,
    /// Whether a later page exists.
    pub has_next_page: bool,
    /// Whether an earlier page exists.
    pub has_prev_page: bool,
}

impl PaginationMeta {
    /// Computes metadata for a page request against a known total.
    ///
    /// Boundary rule: `total_records == 0` yields `total_pages == 1` (never
    /// a degenerate "page 0 of 0") with both navigation flags false.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)] // clamped to u32::MAX first
    pub fn compute(current_page: u32, page_size: u32, total_records: u64) -> Self {
        let page_size = page_size.max(1);
        let current_page = current_page.max(1);
        let total_pages = if total_records == 0 {
            1
        } else {
            total_records
                .div_ceil(u64::from(page_size))
                .min(u64::from(u32::MAX)) as u32
        };
        Self {
            current_page,
            page_size,
            total_records,
            total_pages,
            has_next_page: current_page < total_pages,
            has_prev_page: current_page > 1 && total_records > 0,
        }
    }

    /// Metadata for an unpaginated (export) fetch: one page holding the
    /// entire result set.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)] // clamped to u32::MAX first
    pub fn unpaginated(total_records: u64) -> Self {
        Self {
            current_page: 1,
            page_size: total_records.min(u64::from(u32::MAX)).max(1) as u32,
            total_records,
            total_pages: 1,
            has_next_page: false,
            has_prev_page: false,
        }
    }

    /// Display math: the 1-indexed ordinals of the first and last record on
    /// this page, clamped to the total (`min(page * size, total)`).
    ///
    /// Returns `(0, 0)` when there are no records.
    #[must_use]
    pub fn display_range(&self) -> (u64, u64) {
        if self.total_records == 0 {
            return (0, 0);
        }
        let page = u64::from(self.current_page);
        let size = u64::from(self.page_size);
        let first = ((page - 1) * size + 1).min(self.total_records);
        let last = (page * size).min(self.total_records);
        (first, last)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_records_is_one_empty_page() {
        let meta = PaginationMeta::compute(1, 50, 0);
        assert_eq!(meta.total_pages, 1);
        assert!(!meta.has_next_page);
        assert!(!meta.has_prev_page);
        assert_eq!(meta.display_range(), (0, 0));
    }

    #[test]
    fn test_exact_multiple_of_page_size() {
        let meta = PaginationMeta::compute(2, 50, 100);
        assert_eq!(meta.total_pages, 2);
        assert!(!meta.has_next_page);
        assert!(meta.has_prev_page);
        assert_eq!(meta.display_range(), (51, 100));
    }

    #[test]
    fn test_partial_last_page() {
        let meta = PaginationMeta::compute(3, 50, 101);
        assert_eq!(meta.total_pages, 3);
        assert!(!meta.has_next_page);
        assert_eq!(meta.display_range(), (101, 101));
    }

    #[test]
    fn test_first_of_many() {
        let meta = PaginationMeta::compute(1, 25, 80);
        assert_eq!(meta.total_pages, 4);
        assert!(meta.has_next_page);
        assert!(!meta.has_prev_page);
        assert_eq!(meta.display_range(), (1, 25));
    }

    #[test]
    fn test_zero_inputs_are_clamped() {
        let meta = PaginationMeta::compute(0, 0, 10);
        assert_eq!(meta.current_page, 1);
        assert_eq!(meta.page_size, 1);
        assert_eq!(meta.total_pages, 10);
    }

    #[test]
    fn test_unpaginated_is_single_page() {
        let meta = PaginationMeta::unpaginated(420);
        assert_eq!(meta.total_pages, 1);
        assert_eq!(meta.total_records, 420);
        assert!(!meta.has_next_page);
        assert!(!meta.has_prev_page);
    }
}
