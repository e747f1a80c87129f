//! Page slicing and the view handed to the presentation layer.
//!
//! Pages hold [`PAGE_SIZE`] results. Each page renders as two columns,
//! split at [`COLUMN_SPLIT`]: the first five results on the left, up to
//! five more on the right.

use std::ops::Range;

use finder_api::Problem;
use serde::Serialize;

use crate::session::{SearchSession, SearchStatus};

/// Results per page.
pub const PAGE_SIZE: usize = 10;

/// Index within a page where the second column starts.
pub const COLUMN_SPLIT: usize = 5;

/// Number of pages needed for `result_count` results.
pub fn total_pages(result_count: usize) -> usize {
    result_count.div_ceil(PAGE_SIZE)
}

/// Index range of `page` (1-indexed) within `result_count` results.
///
/// The range is clamped to the result count, so it is empty for pages
/// past the end and never reaches beyond the last result.
pub fn page_bounds(page: usize, result_count: usize) -> Range<usize> {
    let start = page.saturating_sub(1).saturating_mul(PAGE_SIZE).min(result_count);
    let end = start.saturating_add(PAGE_SIZE).min(result_count);
    start..end
}

/// `true` if `page` lies within `1..=total_pages(result_count)`.
pub fn is_valid_page(page: usize, result_count: usize) -> bool {
    (1..=total_pages(result_count)).contains(&page)
}

/// Split a page of results into its left and right columns.
pub fn split_columns(page: &[Problem]) -> (&[Problem], &[Problem]) {
    page.split_at(page.len().min(COLUMN_SPLIT))
}

/// Snapshot of everything the presentation layer renders.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageView<'a> {
    /// Status of the latest search.
    pub status: SearchStatus,
    /// Message to display when `status` is `Error`.
    pub error_message: Option<&'a str>,
    /// First column: results 1–5 of the current page.
    pub left_column: &'a [Problem],
    /// Second column: results 6–10 of the current page.
    pub right_column: &'a [Problem],
    /// Current page, 1-indexed.
    pub current_page: usize,
    /// Total number of pages (0 when there are no results).
    pub total_pages: usize,
    /// Whether the Previous control is enabled.
    pub has_previous: bool,
    /// Whether the Next control is enabled.
    pub has_next: bool,
    /// Whether the result block is shown at all.
    pub show_results: bool,
}

impl<'a> PageView<'a> {
    /// Build the view for the current state of `session`.
    pub fn of(session: &'a SearchSession) -> Self {
        let (left_column, right_column) = split_columns(session.current_page_results());
        let total_pages = session.total_pages();
        let current_page = session.current_page();
        Self {
            status: session.status(),
            error_message: session.error_message(),
            left_column,
            right_column,
            current_page,
            total_pages,
            has_previous: current_page > 1,
            has_next: current_page < total_pages,
            show_results: session.status() == SearchStatus::Success
                && !session.results().is_empty(),
        }
    }

    /// The "Page N of M" caption.
    pub fn caption(&self) -> String {
        format!("Page {} of {}", self.current_page, self.total_pages)
    }
}
