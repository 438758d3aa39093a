//! Page metadata derived from the result count

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pagination {
    pub current_page: u32,
    pub total_results: u32,
    pub results_per_page: u32,
}

impl Pagination {
    pub fn new(results_per_page: u32) -> Self {
        Self {
            current_page: 1,
            total_results: 0,
            results_per_page: results_per_page.max(1),
        }
    }

    pub fn total_pages(&self) -> u32 {
        self.total_results.div_ceil(self.results_per_page)
    }

    /// First and last result number shown on the current page, 1-based and inclusive
    pub fn display_range(&self) -> (u32, u32) {
        let start = (self.current_page - 1) * self.results_per_page + 1;
        let end = (self.current_page * self.results_per_page).min(self.total_results);
        (start, end)
    }

    pub fn prev_enabled(&self, loading: bool) -> bool {
        self.current_page > 1 && !loading
    }

    pub fn next_enabled(&self, loading: bool) -> bool {
        self.current_page < self.total_pages() && self.total_results > 0 && !loading
    }

    /// Controls are only drawn when there is more than one page
    pub fn is_visible(&self) -> bool {
        !(self.total_results == 0 || self.total_results <= self.results_per_page)
    }

    pub fn contains_page(&self, page: u32) -> bool {
        page >= 1 && page <= self.total_pages()
    }

    pub fn summary(&self) -> String {
        let (start, end) = self.display_range();
        format!("Showing {} to {} of {} results", start, end, self.total_results)
    }

    pub fn page_label(&self) -> String {
        format!("Page {} / {}", self.current_page, self.total_pages())
    }
}
