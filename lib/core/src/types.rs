/// Pagination arithmetic for page-numbered listings.
///
/// The page count is `ceil(total_records / page_size)`, clamped to at
/// least 1 so an empty table still renders as "page 1 of 1". The
/// requested page is clamped into `1..=page_count` — asking for page 0
/// or a page past the end is answered with the nearest valid page, not
/// an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    /// The resolved (clamped) page number, 1-based.
    pub page: usize,
    /// Total number of pages, at least 1.
    pub page_count: usize,
    /// Total number of records across all pages.
    pub total_records: usize,
    /// Records per page.
    pub page_size: usize,
}

impl Pagination {
    /// Resolve a requested page number against the record count.
    ///
    /// `requested` comes straight from the query string and may be zero
    /// or negative.
    pub fn for_page(requested: i64, total_records: usize, page_size: usize) -> Self {
        let page_size = page_size.max(1);
        let page_count = total_records.div_ceil(page_size).max(1);
        let page = (requested.max(1) as usize).min(page_count);
        Self {
            page,
            page_count,
            total_records,
            page_size,
        }
    }

    /// SQL OFFSET for the resolved page.
    pub fn offset(&self) -> usize {
        (self.page - 1) * self.page_size
    }

    /// SQL LIMIT for the resolved page.
    pub fn limit(&self) -> usize {
        self.page_size
    }

    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.page_count
    }
}

/// Get the current time as an RFC 3339 string.
pub fn now_rfc3339() -> String {
    chrono::Utc::now().to_rfc3339()
}
