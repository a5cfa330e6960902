//! State behind a paginated, filterable resource list screen.

use super::query::{Page, ResourceQuery};
use super::status::EventStatus;
use anyhow::Result;
use tracing::debug;

/// Anything that can answer a list query.
pub trait ResourceSource<T> {
    fn fetch(&self, query: &ResourceQuery) -> Result<Page<T>>;
}

/// Keeps the current query and the last page fetched for it.
///
/// Changing any filter returns to the first page, because the old page
/// number means nothing against a different result set.
#[derive(Debug)]
pub struct ResourceListController<T, S> {
    source: S,
    query: ResourceQuery,
    current: Option<Page<T>>,
}

impl<T, S: ResourceSource<T>> ResourceListController<T, S> {
    pub fn new(source: S, per_page: u32) -> Self {
        Self::with_query(
            source,
            ResourceQuery {
                per_page,
                ..ResourceQuery::default()
            },
        )
    }

    /// Starts from a complete query without fetching anything.
    ///
    /// Use this when all filters are known up front, so that the first
    /// `refresh` or `go_to_page` is the only round trip to the source.
    pub fn with_query(source: S, mut query: ResourceQuery) -> Self {
        query.per_page = query.per_page.max(1);
        query.page = query.page.max(1);
        if query.search_term().is_none() {
            query.search = None;
        }
        Self {
            source,
            query,
            current: None,
        }
    }

    pub fn query(&self) -> &ResourceQuery {
        &self.query
    }

    /// The last fetched page, if any.
    pub fn page(&self) -> Option<&Page<T>> {
        self.current.as_ref()
    }

    pub fn items(&self) -> &[T] {
        self.current.as_ref().map(|p| p.items.as_slice()).unwrap_or(&[])
    }

    /// Fetches the page for the current query.
    pub fn refresh(&mut self) -> Result<&Page<T>> {
        debug!(page = self.query.page, "fetching resource page");
        let page = self.source.fetch(&self.query)?;
        Ok(&*self.current.insert(page))
    }

    pub fn search(&mut self, term: impl Into<String>) -> Result<&Page<T>> {
        let term = term.into();
        self.query.search = if term.trim().is_empty() { None } else { Some(term) };
        self.first_page()
    }

    pub fn filter_category(&mut self, category: Option<String>) -> Result<&Page<T>> {
        self.query.category = category;
        self.first_page()
    }

    pub fn filter_status(&mut self, status: Option<EventStatus>) -> Result<&Page<T>> {
        self.query.status = status;
        self.first_page()
    }

    fn first_page(&mut self) -> Result<&Page<T>> {
        self.query.page = 1;
        self.refresh()
    }

    /// Jumps to `page`, clamped to the pages that exist.
    ///
    /// Fetches once, or twice when the requested page lies past the end of
    /// a result set whose size was not known yet.
    pub fn go_to_page(&mut self, page: u32) -> Result<&Page<T>> {
        let known_last = self.current.as_ref().map_or(u32::MAX, |p| p.total_pages());
        self.query.page = page.clamp(1, known_last);
        debug!(page = self.query.page, "fetching resource page");
        let mut fetched = self.source.fetch(&self.query)?;

        let last = fetched.total_pages();
        if self.query.page > last {
            self.query.page = last;
            debug!(page = last, "requested page past the end, fetching last page");
            fetched = self.source.fetch(&self.query)?;
        }
        Ok(&*self.current.insert(fetched))
    }

    pub fn next_page(&mut self) -> Result<&Page<T>> {
        let page = self.query.page.saturating_add(1);
        self.go_to_page(page)
    }

    pub fn previous_page(&mut self) -> Result<&Page<T>> {
        let page = self.query.page.saturating_sub(1);
        self.go_to_page(page)
    }

    pub fn into_source(self) -> S {
        self.source
    }
}
