//! List queries and result pages.

use super::status::EventStatus;
use serde::{Deserialize, Serialize};

/// Default number of rows on an admin list page.
pub const DEFAULT_PER_PAGE: u32 = 10;

/// Filters and pagination for a resource list. Pages are 1-based.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceQuery {
    #[serde(default)]
    pub search: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub status: Option<EventStatus>,
    pub page: u32,
    pub per_page: u32,
}

impl Default for ResourceQuery {
    fn default() -> Self {
        Self {
            search: None,
            category: None,
            status: None,
            page: 1,
            per_page: DEFAULT_PER_PAGE,
        }
    }
}

impl ResourceQuery {
    /// Query string parameters in the form list endpoints expect.
    ///
    /// Blank filters are left out.
    ///
    /// # Example
    ///
    /// ```
    /// use contentquill::resources::{EventStatus, ResourceQuery};
    ///
    /// let query = ResourceQuery {
    ///     search: Some("festival".to_string()),
    ///     status: Some(EventStatus::Upcoming),
    ///     ..ResourceQuery::default()
    /// };
    /// let pairs = query.to_query_pairs();
    /// assert_eq!(pairs[0], ("search", "festival".to_string()));
    /// assert_eq!(pairs[1], ("status", "upcoming".to_string()));
    /// ```
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(search) = non_blank(&self.search) {
            pairs.push(("search", search.to_string()));
        }
        if let Some(category) = non_blank(&self.category) {
            pairs.push(("category", category.to_string()));
        }
        if let Some(status) = self.status {
            pairs.push(("status", status.to_string()));
        }
        pairs.push(("page", self.page.max(1).to_string()));
        pairs.push(("limit", self.per_page.max(1).to_string()));
        pairs
    }

    /// The search term, trimmed, if it is not blank.
    pub fn search_term(&self) -> Option<&str> {
        non_blank(&self.search)
    }

    pub fn category_filter(&self) -> Option<&str> {
        non_blank(&self.category)
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

/// One page of list results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: u32,
    pub per_page: u32,
    /// Number of matching rows across all pages
    pub total: usize,
}

impl<T> Page<T> {
    /// Number of pages; at least one, even when nothing matched.
    pub fn total_pages(&self) -> u32 {
        let per_page = self.per_page.max(1) as usize;
        (self.total.div_ceil(per_page)).max(1) as u32
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages()
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }
}
