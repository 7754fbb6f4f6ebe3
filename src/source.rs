//! The page source interface consumed by the pager.
//!
//! A page source hands out one bounded batch of records per call together
//! with a continuation cursor. The pager calls it with `None` for the first
//! page and with the cursor from the previous response afterwards. A
//! response without a next cursor means the collection is exhausted.
//!
//! Any `Fn(Option<C>) -> impl Future<Output = Result<Page<R, C>>>` closure is a
//! page source, so HTTP clients, RPC stubs, or database queries can be plugged
//! in without a wrapper type:
//!
//! ```rust
//! use bubbletea_pager::source::{Page, PageSource};
//! use bubbletea_pager::PageError;
//!
//! let source = |cursor: Option<u32>| async move {
//!     let page = cursor.unwrap_or(0);
//!     let records: Vec<String> = (0..3).map(|i| format!("row {}", page * 3 + i)).collect();
//!     let next_cursor = if page < 2 { Some(page + 1) } else { None };
//!     Ok::<_, PageError>(Page::new(records, next_cursor))
//! };
//!
//! // Futures returned by a source are `Send + 'static` and can be awaited anywhere.
//! let _future = source.fetch_page(None);
//! ```

use crate::error::Result;
use std::future::Future;
use std::pin::Pin;

/// One batch of records returned by a [`PageSource`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<R, C> {
    /// Records in the order they should be appended.
    pub records: Vec<R>,
    /// Cursor identifying the following page, or `None` when this was the last one.
    pub next_cursor: Option<C>,
}

impl<R, C> Page<R, C> {
    /// Creates a page from its records and continuation cursor.
    pub fn new(records: Vec<R>, next_cursor: Option<C>) -> Self {
        Self {
            records,
            next_cursor,
        }
    }

    /// Creates a final page, one with no continuation.
    pub fn last(records: Vec<R>) -> Self {
        Self::new(records, None)
    }

    /// Returns `true` if another page follows this one.
    pub fn has_next(&self) -> bool {
        self.next_cursor.is_some()
    }
}

/// The boxed future a [`PageSource`] returns for a single fetch.
pub type PageFuture<R, C> = Pin<Box<dyn Future<Output = Result<Page<R, C>>> + Send + 'static>>;

/// Provider of pages for a single paginated resource stream.
///
/// `fetch_page` is called synchronously by the pager at the moment a load
/// starts; the returned future is then driven by the bubbletea runtime as a
/// command. Implementations should therefore do their real work inside the
/// future and keep the call itself cheap.
pub trait PageSource<R, C>: Send + Sync {
    /// Starts fetching the page identified by `cursor` (`None` = first page).
    fn fetch_page(&self, cursor: Option<C>) -> PageFuture<R, C>;
}

impl<R, C, F, Fut> PageSource<R, C> for F
where
    F: Fn(Option<C>) -> Fut + Send + Sync,
    Fut: Future<Output = Result<Page<R, C>>> + Send + 'static,
{
    fn fetch_page(&self, cursor: Option<C>) -> PageFuture<R, C> {
        Box::pin(self(cursor))
    }
}

/// An in-memory page source that slices a fixed record set into pages.
///
/// Cursors are zero-based page numbers. Useful for demos, prototyping a
/// display surface, and tests.
///
/// # Examples
///
/// ```rust
/// use bubbletea_pager::source::MemorySource;
///
/// let source = MemorySource::new((1..=45).collect::<Vec<u32>>(), 20);
/// assert_eq!(source.total_pages(), 3);
/// assert_eq!(source.page(2).records.len(), 5);
/// assert!(!source.page(2).has_next());
/// ```
#[derive(Debug, Clone)]
pub struct MemorySource<R> {
    records: Vec<R>,
    per_page: usize,
}

impl<R: Clone> MemorySource<R> {
    /// Creates a source serving `records` in pages of `per_page` (at least 1).
    pub fn new(records: Vec<R>, per_page: usize) -> Self {
        Self {
            records,
            per_page: per_page.max(1),
        }
    }

    /// Number of records per page.
    pub fn per_page(&self) -> usize {
        self.per_page
    }

    /// Number of pages the record set spans. An empty set still has one (empty) page.
    pub fn total_pages(&self) -> usize {
        if self.records.is_empty() {
            1
        } else {
            self.records.len().div_ceil(self.per_page)
        }
    }

    /// Builds page `page` synchronously.
    pub fn page(&self, page: usize) -> Page<R, usize> {
        let start = page.saturating_mul(self.per_page).min(self.records.len());
        let end = start.saturating_add(self.per_page).min(self.records.len());
        let next_cursor = (end < self.records.len()).then_some(page + 1);
        Page::new(self.records[start..end].to_vec(), next_cursor)
    }
}

impl<R> PageSource<R, usize> for MemorySource<R>
where
    R: Clone + Send + Sync + 'static,
{
    fn fetch_page(&self, cursor: Option<usize>) -> PageFuture<R, usize> {
        let page = self.page(cursor.unwrap_or(0));
        Box::pin(std::future::ready(Ok(page)))
    }
}
