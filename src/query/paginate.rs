use std::ops::Range;

/// Index range of page `page` (1-based) clamped to `total` rows.
///
/// Pages past the end yield an empty range at `total`.
pub fn page_range(total: usize, page: usize, page_size: usize) -> Range<usize> {
    let start = page.saturating_sub(1).saturating_mul(page_size).min(total);
    let end = start.saturating_add(page_size).min(total);
    start..end
}

/// `ceil(total / page_size)`, 0 when there are no rows.
pub fn total_pages(total: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    total.div_ceil(page_size)
}
