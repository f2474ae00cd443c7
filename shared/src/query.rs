//! List query types
//!
//! One query shape for every list endpoint: pagination, free-text search,
//! and entity-specific filters carried as query parameters.

use serde::{Deserialize, Serialize};

/// Query for a paginated list endpoint
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListQuery {
    /// Page number (1-based)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    /// Items per page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_page: Option<u32>,
    /// Free-text search over the entity's searchable fields
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    /// Entity-specific filters (e.g. `category_id`, `stock_status`)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub filters: Vec<(String, String)>,
}

impl ListQuery {
    /// Query for the first page with backend defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set pagination
    pub fn paginate(mut self, page: u32, per_page: u32) -> Self {
        self.page = Some(page);
        self.per_page = Some(per_page);
        self
    }

    /// Set the free-text search term
    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    /// Add an entity-specific filter
    pub fn filter(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.filters.push((key.into(), value.into()));
        self
    }

    /// Flatten into query parameters for the HTTP client
    pub fn to_params(&self) -> Vec<(String, String)> {
        let mut params = Vec::new();
        if let Some(page) = self.page {
            params.push(("page".to_string(), page.to_string()));
        }
        if let Some(per_page) = self.per_page {
            params.push(("per_page".to_string(), per_page.to_string()));
        }
        if let Some(search) = &self.search {
            if !search.is_empty() {
                params.push(("search".to_string(), search.clone()));
            }
        }
        for (key, value) in &self.filters {
            params.push((key.clone(), value.clone()));
        }
        params
    }
}
