//! Display pagination over sorted result rows
//!
//! Slices a sorted row set into fixed-size pages with clamped page
//! numbers. Sorting uses a stable sort so rows sharing a date keep their
//! generation order, making repeated pagination calls over identical
//! input deterministic.

use crate::app::models::Sample;

/// One display page over a row slice
#[derive(Debug, Clone, PartialEq)]
pub struct Page<'a> {
    /// Rows on this page
    pub rows: &'a [Sample],

    /// Resolved (clamped) page number, 1-based
    pub page: usize,

    /// Page size the slice was computed with
    pub page_size: usize,

    /// Index of the first row on this page within the full set
    pub start_index: usize,

    /// Exclusive end index within the full set
    pub end_index: usize,

    /// Total number of pages (`0` for an empty row set)
    pub total_pages: usize,

    /// Total number of rows across all pages
    pub total_rows: usize,
}

/// Sort rows by date descending, newest first.
///
/// The sort is stable: rows sharing a date keep their original
/// generation order.
pub fn sort_rows_desc(rows: &mut [Sample]) {
    rows.sort_by(|a, b| b.date.cmp(&a.date));
}

/// Slice a sorted row set into one display page.
///
/// `total_pages = ceil(total / page_size)`; the requested page is clamped
/// into `[1, total_pages]` (`[1, 1]` when the row set is empty). A zero
/// page size is treated as 1.
pub fn paginate(rows: &[Sample], page_size: usize, page: usize) -> Page<'_> {
    let page_size = page_size.max(1);
    let total_rows = rows.len();
    let total_pages = total_rows.div_ceil(page_size);

    let page = page.clamp(1, total_pages.max(1));
    let start_index = (page - 1) * page_size;
    let end_index = (start_index + page_size).min(total_rows);

    Page {
        rows: &rows[start_index.min(total_rows)..end_index],
        page,
        page_size,
        start_index: start_index.min(total_rows),
        end_index,
        total_pages,
        total_rows,
    }
}
