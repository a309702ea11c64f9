use serde::Serialize;

/// Page cursor for a paginated list. The page is 1-based and always within
/// `[1, total_pages]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Pagination {
    page: u32,
    per_page: u32,
    total: u64,
}

impl Pagination {
    /// A cursor at page 1 with no known rows. `per_page` of 0 is raised to 1.
    #[must_use]
    pub fn new(per_page: u32) -> Self {
        Self {
            page: 1,
            per_page: per_page.max(1),
            total: 0,
        }
    }

    #[must_use]
    pub const fn page(&self) -> u32 {
        self.page
    }

    #[must_use]
    pub const fn per_page(&self) -> u32 {
        self.per_page
    }

    #[must_use]
    pub const fn total(&self) -> u64 {
        self.total
    }

    /// Number of pages, never less than 1 (an empty list still has one page).
    #[must_use]
    pub fn total_pages(&self) -> u32 {
        let pages = self.total.div_ceil(u64::from(self.per_page)).max(1);
        u32::try_from(pages).unwrap_or(u32::MAX)
    }

    /// Record the row count reported by the server, pulling the cursor back
    /// if the list shrank.
    pub fn set_total(&mut self, total: u64) {
        self.total = total;
        self.page = self.page.min(self.total_pages());
    }

    /// Advance one page. No-op on the last page.
    pub fn next(&mut self) {
        if self.page < self.total_pages() {
            self.page += 1;
        }
    }

    /// Go back one page. No-op on page 1.
    pub fn previous(&mut self) {
        if self.page > 1 {
            self.page -= 1;
        }
    }

    /// Jump to `page`, clamped into range.
    pub fn go_to(&mut self, page: u32) {
        self.page = page.clamp(1, self.total_pages());
    }

    pub fn set_per_page(&mut self, per_page: u32) {
        self.per_page = per_page.max(1);
        self.page = 1;
    }

    pub const fn reset(&mut self) {
        self.page = 1;
    }

    #[must_use]
    pub fn has_next(&self) -> bool {
        self.page < self.total_pages()
    }

    #[must_use]
    pub const fn has_previous(&self) -> bool {
        self.page > 1
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    fn with_total(per_page: u32, total: u64) -> Pagination {
        let mut p = Pagination::new(per_page);
        p.set_total(total);
        p
    }

    #[rstest]
    #[case(50, 0, 1)]
    #[case(50, 1, 1)]
    #[case(50, 50, 1)]
    #[case(50, 51, 2)]
    #[case(10, 95, 10)]
    fn total_pages_is_at_least_one(#[case] per_page: u32, #[case] total: u64, #[case] pages: u32) {
        assert_eq!(with_total(per_page, total).total_pages(), pages);
    }

    #[test]
    fn next_on_last_page_is_noop() {
        let mut p = with_total(10, 30);
        p.go_to(3);
        p.next();
        assert_eq!(p.page(), 3);
        assert!(!p.has_next());
    }

    #[test]
    fn previous_on_first_page_is_noop() {
        let mut p = with_total(10, 30);
        p.previous();
        assert_eq!(p.page(), 1);
        assert!(!p.has_previous());
    }

    #[rstest]
    #[case(0, 1)]
    #[case(2, 2)]
    #[case(99, 4)]
    fn go_to_clamps(#[case] target: u32, #[case] expected: u32) {
        let mut p = with_total(25, 100);
        p.go_to(target);
        assert_eq!(p.page(), expected);
    }

    #[test]
    fn shrinking_total_pulls_cursor_back() {
        let mut p = with_total(10, 100);
        p.go_to(9);
        p.set_total(25);
        assert_eq!(p.page(), 3);
    }

    #[test]
    fn zero_per_page_is_raised() {
        let p = Pagination::new(0);
        assert_eq!(p.per_page(), 1);
    }
}
