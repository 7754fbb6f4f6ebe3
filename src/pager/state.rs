//! The accumulated list state owned by a pager.
//!
//! `ListState` is read-only to everyone but the pager: callers observe it
//! through accessors and signal intent through the pager's operations. The
//! in-flight load is stored as a single `Option<LoadKind>`, so an initial
//! and an incremental load can never be in flight together.

use super::types::{LoadKind, Status};
use crate::error::PageError;
use crate::source::Page;

/// Records loaded so far plus the flags describing what is in flight.
#[derive(Debug, Clone, PartialEq)]
pub struct ListState<R, C> {
    items: Vec<R>,
    page_cursor: Option<C>,
    in_flight: Option<LoadKind>,
    can_load_more: bool,
    last_error: Option<PageError>,
}

impl<R, C> Default for ListState<R, C> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            page_cursor: None,
            in_flight: None,
            can_load_more: true,
            last_error: None,
        }
    }
}

impl<R, C> ListState<R, C> {
    /// Creates an empty state: no records, no cursor, more pages assumed.
    pub fn new() -> Self {
        Self::default()
    }

    /// All records in arrival order.
    pub fn items(&self) -> &[R] {
        &self.items
    }

    /// Cursor for the next page. `None` before the first successful load and
    /// after the last page.
    pub fn page_cursor(&self) -> Option<&C> {
        self.page_cursor.as_ref()
    }

    /// Whether a first load or refresh is in flight.
    pub fn is_loading_initial(&self) -> bool {
        self.in_flight == Some(LoadKind::Initial)
    }

    /// Whether a next-page load is in flight.
    pub fn is_loading_more(&self) -> bool {
        self.in_flight == Some(LoadKind::More)
    }

    /// The kind of load currently in flight, if any.
    pub fn in_flight(&self) -> Option<LoadKind> {
        self.in_flight
    }

    /// `false` once the source has reported that no further pages exist.
    pub fn can_load_more(&self) -> bool {
        self.can_load_more
    }

    /// The error from the most recent failed load, cleared by any success.
    pub fn last_error(&self) -> Option<&PageError> {
        self.last_error.as_ref()
    }

    /// Number of records loaded.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether no records are loaded.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The state machine position these flags describe.
    pub fn status(&self) -> Status {
        match self.in_flight {
            Some(LoadKind::Initial) => Status::LoadingInitial,
            Some(LoadKind::More) => Status::LoadingMore,
            None if !self.can_load_more => Status::Exhausted,
            None => Status::Idle,
        }
    }

    /// Whether a next-page load would be accepted right now.
    pub fn can_start_more(&self) -> bool {
        self.in_flight.is_none() && self.can_load_more
    }

    pub(super) fn begin(&mut self, kind: LoadKind) {
        self.in_flight = Some(kind);
        if kind == LoadKind::Initial {
            self.last_error = None;
        }
    }

    /// Replaces the list with the first page and resets pagination.
    pub(super) fn apply_initial(&mut self, page: Page<R, C>) {
        self.can_load_more = page.has_next();
        self.items = page.records;
        self.page_cursor = page.next_cursor;
        self.last_error = None;
        self.in_flight = None;
    }

    /// Appends a next page, preserving order.
    pub(super) fn apply_more(&mut self, page: Page<R, C>) {
        self.can_load_more = page.has_next();
        self.items.extend(page.records);
        self.page_cursor = page.next_cursor;
        self.last_error = None;
        self.in_flight = None;
    }

    /// Settles an in-flight load without recording anything.
    pub(super) fn abandon(&mut self) {
        self.in_flight = None;
    }

    /// Records a failure. Items, cursor, and exhaustion are left untouched so a
    /// retry requests the same page.
    pub(super) fn fail(&mut self, error: PageError) {
        self.last_error = Some(error);
        self.in_flight = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_is_idle_and_open() {
        let state: ListState<u32, u32> = ListState::new();
        assert!(state.is_empty());
        assert!(state.can_load_more());
        assert!(state.page_cursor().is_none());
        assert!(state.last_error().is_none());
        assert_eq!(state.status(), Status::Idle);
        assert!(state.can_start_more());
    }

    #[test]
    fn test_loading_flags_are_mutually_exclusive() {
        let mut state: ListState<u32, u32> = ListState::new();
        state.begin(LoadKind::More);
        assert!(state.is_loading_more());
        assert!(!state.is_loading_initial());

        state.begin(LoadKind::Initial);
        assert!(state.is_loading_initial());
        assert!(!state.is_loading_more());
        assert_eq!(state.status(), Status::LoadingInitial);
        assert!(!state.can_start_more());
    }

    #[test]
    fn test_initial_replaces_and_more_appends() {
        let mut state: ListState<u32, u32> = ListState::new();
        state.begin(LoadKind::Initial);
        state.apply_initial(Page::new(vec![1, 2, 3], Some(1)));
        assert_eq!(state.items(), &[1, 2, 3]);
        assert_eq!(state.page_cursor(), Some(&1));

        state.begin(LoadKind::More);
        state.apply_more(Page::new(vec![4, 5], None));
        assert_eq!(state.items(), &[1, 2, 3, 4, 5]);
        assert!(!state.can_load_more());
        assert_eq!(state.status(), Status::Exhausted);

        state.begin(LoadKind::Initial);
        state.apply_initial(Page::new(vec![9], Some(1)));
        assert_eq!(state.items(), &[9]);
        assert!(state.can_load_more());
        assert_eq!(state.status(), Status::Idle);
    }

    #[test]
    fn test_failure_keeps_items_and_cursor() {
        let mut state: ListState<u32, u32> = ListState::new();
        state.begin(LoadKind::Initial);
        state.apply_initial(Page::new(vec![1, 2], Some(1)));

        state.begin(LoadKind::More);
        state.fail(PageError::transport("reset"));
        assert_eq!(state.items(), &[1, 2]);
        assert_eq!(state.page_cursor(), Some(&1));
        assert!(!state.is_loading_more());
        assert_eq!(state.last_error(), Some(&PageError::transport("reset")));
    }

    #[test]
    fn test_initial_begin_clears_error_but_more_does_not() {
        let mut state: ListState<u32, u32> = ListState::new();
        state.fail(PageError::decode("bad"));
        state.begin(LoadKind::More);
        assert!(state.last_error().is_some());

        state.fail(PageError::decode("bad"));
        state.begin(LoadKind::Initial);
        assert!(state.last_error().is_none());
    }
}
