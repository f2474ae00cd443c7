//! Generic list-view state
//!
//! Every panel composes one of these per listed entity: current page of
//! items, pagination, the query that produced them, a loading flag and the
//! last error. Transitions are explicit so a failed refresh keeps the
//! previous page on screen.

use shared::{ListQuery, PaginatedData, Pagination};

#[derive(Debug, Clone)]
pub struct ListState<T> {
    pub items: Vec<T>,
    pub pagination: Pagination,
    pub query: ListQuery,
    pub loading: bool,
    pub error: Option<String>,
}

impl<T> Default for ListState<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            pagination: Pagination::new(1, 10, 0),
            query: ListQuery::new(),
            loading: false,
            error: None,
        }
    }
}

impl<T> ListState<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a refresh in flight; clears the previous error
    pub fn begin(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Install a fetched page
    pub fn finish(&mut self, page: PaginatedData<T>) {
        self.items = page.items;
        self.pagination = page.pagination;
        self.loading = false;
    }

    /// Record a failed refresh; items from the previous page are kept
    pub fn fail(&mut self, message: impl Into<String>) {
        self.loading = false;
        self.error = Some(message.into());
    }

    /// Jump to a page, keeping the current page size
    pub fn set_page(&mut self, page: u32) {
        let per_page = self.query.per_page.unwrap_or(10);
        self.query = std::mem::take(&mut self.query).paginate(page, per_page);
    }

    /// Replace the search term (empty clears it)
    pub fn set_search(&mut self, term: impl Into<String>) {
        self.query.search = Some(term.into());
    }

    /// Set or replace an entity filter
    pub fn set_filter(&mut self, key: &str, value: impl Into<String>) {
        self.query.filters.retain(|(k, _)| k != key);
        self.query.filters.push((key.to_string(), value.into()));
    }

    /// Drop an entity filter
    pub fn clear_filter(&mut self, key: &str) {
        self.query.filters.retain(|(k, _)| k != key);
    }
}
