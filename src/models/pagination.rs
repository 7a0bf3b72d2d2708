/// Pagination cursor of the users list.
///
/// `total_pages` is whatever the last successful fetch reported; nothing
/// keeps `page` inside it except the navigation helpers below.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: u32,
    pub limit: u32,
    pub total_pages: u32,
}

impl Pagination {
    pub fn new(limit: u32) -> Self {
        Self {
            page: 1,
            limit,
            total_pages: 1,
        }
    }

    /// Highest page navigation may reach. An empty collection still has page 1.
    pub fn last_page(&self) -> u32 {
        self.total_pages.max(1)
    }

    pub fn clamp(&self, page: u32) -> u32 {
        page.max(1).min(self.last_page())
    }

    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.last_page()
    }

    /// Target of a "next" click, `None` at the last page.
    pub fn next_page(&self) -> Option<u32> {
        self.has_next().then(|| self.page + 1)
    }

    /// Target of a "previous" click, `None` at page 1.
    pub fn prev_page(&self) -> Option<u32> {
        self.has_prev().then(|| self.page - 1)
    }
}
