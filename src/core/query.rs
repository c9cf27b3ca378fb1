//! Pagination parameter parsing

use std::collections::HashMap;

/// Default name of the page-number query parameter
pub const DEFAULT_PAGE_PARAM: &str = "p";

/// Read the 1-based page number from raw query parameters.
///
/// Absent or non-numeric values fall back to page 1; the result is
/// clamped to at least 1. Out-of-range pages are not an error here,
/// slicing just yields an empty page.
pub fn page_number(query: &HashMap<String, String>, param: &str) -> usize {
    query
        .get(param)
        .and_then(|raw| raw.parse::<usize>().ok())
        .unwrap_or(1)
        .max(1)
}

/// Offset of the first item on a 1-based page.
///
/// Saturates on overflow: an absurdly large page number lands past
/// the end of any collection and pages out as empty.
pub fn page_offset(page: usize, page_size: usize) -> usize {
    page.saturating_sub(1).saturating_mul(page_size)
}
