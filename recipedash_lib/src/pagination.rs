//! Page arithmetic and navigation control state.

/// `ceil(total / limit)`; zero when there is nothing to show.
pub fn total_pages(total: i64, limit: i64) -> i64 {
    if total <= 0 || limit <= 0 {
        return 0;
    }
    (total + limit - 1) / limit
}

/// Whether the previous/next controls accept input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavControls {
    pub previous_enabled: bool,
    pub next_enabled: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pagination {
    /// 1-indexed.
    pub current_page: i64,
    pub limit: i64,
    pub total_pages: i64,
}

impl Pagination {
    pub fn new(limit: i64) -> Self {
        Self {
            current_page: 1,
            limit,
            total_pages: 1,
        }
    }

    /// Recomputes the page count from a server-declared total.
    pub fn update_from_total(&mut self, total: i64) {
        self.total_pages = total_pages(total, self.limit);
    }

    /// Recomputes the page count from the number of results in the current
    /// response. Search responses carry no total, so this undercounts whenever
    /// the server caps the result set.
    pub fn update_from_result_count(&mut self, count: usize) {
        self.total_pages = total_pages(count as i64, self.limit);
    }

    pub fn nav_controls(&self) -> NavControls {
        NavControls {
            previous_enabled: self.current_page > 1,
            next_enabled: self.current_page < self.total_pages,
        }
    }

    /// Steps back one page. Returns `false` when already on the first page.
    pub fn previous(&mut self) -> bool {
        if self.current_page > 1 {
            self.current_page -= 1;
            true
        } else {
            false
        }
    }

    /// Steps forward one page. Returns `false` when already on the last page.
    pub fn next(&mut self) -> bool {
        if self.current_page < self.total_pages {
            self.current_page += 1;
            true
        } else {
            false
        }
    }

    pub fn reset(&mut self) {
        self.current_page = 1;
    }

    /// Changes the page size and returns to the first page.
    pub fn set_limit(&mut self, limit: i64) {
        self.limit = limit;
        self.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_pages_ceiling() {
        assert_eq!(total_pages(45, 15), 3);
        assert_eq!(total_pages(46, 15), 4);
        assert_eq!(total_pages(1, 15), 1);
        assert_eq!(total_pages(0, 15), 0);
        assert_eq!(total_pages(10, 0), 0);
    }

    #[test]
    fn last_page_disables_next() {
        let mut pagination = Pagination::new(15);
        pagination.update_from_total(45);
        assert_eq!(pagination.total_pages, 3);
        pagination.current_page = 3;
        assert_eq!(
            pagination.nav_controls(),
            NavControls {
                previous_enabled: true,
                next_enabled: false
            }
        );
    }

    #[test]
    fn first_page_disables_previous() {
        let mut pagination = Pagination::new(15);
        pagination.update_from_total(45);
        assert_eq!(
            pagination.nav_controls(),
            NavControls {
                previous_enabled: false,
                next_enabled: true
            }
        );
    }

    #[test]
    fn zero_results_disable_both() {
        let mut pagination = Pagination::new(15);
        pagination.update_from_result_count(0);
        assert_eq!(pagination.total_pages, 0);
        assert_eq!(
            pagination.nav_controls(),
            NavControls {
                previous_enabled: false,
                next_enabled: false
            }
        );
    }

    #[test]
    fn zero_total_disables_next() {
        let mut pagination = Pagination::new(10);
        pagination.update_from_total(0);
        assert!(!pagination.nav_controls().next_enabled);
        assert!(!pagination.next());
    }

    #[test]
    fn steps_stay_in_bounds() {
        let mut pagination = Pagination::new(10);
        pagination.update_from_total(25);
        assert!(!pagination.previous());
        assert!(pagination.next());
        assert!(pagination.next());
        assert!(!pagination.next());
        assert_eq!(pagination.current_page, 3);
        assert!(pagination.previous());
        assert_eq!(pagination.current_page, 2);
    }

    #[test]
    fn set_limit_resets_page() {
        let mut pagination = Pagination::new(10);
        pagination.update_from_total(100);
        pagination.current_page = 4;
        pagination.set_limit(50);
        assert_eq!(pagination.current_page, 1);
        assert_eq!(pagination.limit, 50);
    }
}
