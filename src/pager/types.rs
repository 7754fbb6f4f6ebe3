//! Core types for the pager component.
//!
//! This module contains the status enum derived from the list state, the
//! messages the pager exchanges with the bubbletea runtime, and the handle
//! returned when registering an observer.

use crate::error::Result;
use crate::source::Page;
use std::fmt;

/// Which kind of load a fetch belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LoadKind {
    /// A first load or a refresh; replaces the list wholesale.
    Initial,
    /// A next-page load; appends to the list.
    More,
}

impl fmt::Display for LoadKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadKind::Initial => f.write_str("initial"),
            LoadKind::More => f.write_str("more"),
        }
    }
}

/// The pager's state machine position.
///
/// Derived from the list state rather than stored, so it can never disagree
/// with the flags callers observe.
///
/// ```text
/// Idle --load_initial--> LoadingInitial --ok--> Idle | Exhausted
/// Idle --load_more-----> LoadingMore    --ok--> Idle | Exhausted
/// LoadingInitial | LoadingMore --err--> previous resting state
/// Exhausted --load_initial--> LoadingInitial
/// ```
///
/// A failed load returns to `Idle` unless the list was already exhausted.
/// A failed refresh of an exhausted list stays `Exhausted`: the stale
/// records are still the complete set, and reopening pagination would let
/// a `load_more` append the first page to them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    /// Nothing in flight and more pages may follow.
    Idle,
    /// A first load or refresh is in flight.
    LoadingInitial,
    /// A next-page load is in flight.
    LoadingMore,
    /// The source reported no further pages. Only a refresh leaves this state.
    Exhausted,
}

impl Status {
    /// Returns `true` while any fetch is in flight.
    pub fn is_loading(&self) -> bool {
        matches!(self, Status::LoadingInitial | Status::LoadingMore)
    }
}

/// Result of a page fetch, delivered back to the pager through `update`.
///
/// Carries the pager `id`, the request `generation`, and the load `kind` it
/// was issued for. A pager only applies messages matching all three; any
/// other completion is stale and dropped.
#[derive(Debug)]
pub struct PageLoadedMsg<R, C> {
    /// Identifier of the pager that issued the fetch.
    pub id: i64,
    /// Generation counter at the time the fetch started.
    pub generation: u64,
    /// Whether this was an initial or incremental load.
    pub kind: LoadKind,
    /// The page, or the reason it could not be fetched.
    pub result: Result<Page<R, C>>,
}

/// Reports that the record at `index` became visible on screen.
///
/// Display surfaces that prefer message passing over direct method calls can
/// send this instead of calling `notify_visible`. An `id` of zero targets any
/// pager.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisibleMsg {
    /// Target pager id, or 0 for any.
    pub id: i64,
    /// Zero-based index of the visible record.
    pub index: usize,
}

/// Handle for an observer registered with `Model::subscribe`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(pub(crate) u64);
