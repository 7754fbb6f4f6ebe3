//! The pager model: state machine, guards, and page application.

use super::config::Config;
use super::keys::PagerKeyMap;
use super::observe::Observers;
use super::policy;
use super::state::ListState;
use super::style::PagerStyles;
use super::types::{LoadKind, PageLoadedMsg, Status, SubscriptionId, VisibleMsg};
use crate::error::PageError;
use crate::source::{PageFuture, PageSource};
use bubbletea_rs::{Cmd, KeyMsg, Msg};
use std::fmt;
use std::sync::atomic::{AtomicI64, Ordering};
use tracing::{debug, trace, warn};

// Internal ID management for pager instances
static LAST_ID: AtomicI64 = AtomicI64::new(0);

fn next_id() -> i64 {
    LAST_ID.fetch_add(1, Ordering::SeqCst) + 1
}

/// A paginated list controller for one remote resource stream.
///
/// The model owns the accumulated [`ListState`] and pulls pages from a
/// [`PageSource`]. Loads are started by [`load_initial`](Self::load_initial),
/// [`load_more`](Self::load_more), or [`notify_visible`](Self::notify_visible);
/// each returns the fetch as a bubbletea [`Cmd`] whose result comes back to
/// [`update`](Self::update) as a [`PageLoadedMsg`].
///
/// At most one fetch is in flight. A second `load_more` while one is pending
/// is rejected, never queued. A refresh supersedes whatever was in flight
/// and bumps the generation, so a late completion from the older request is
/// dropped instead of resurrecting replaced data.
///
/// # Examples
///
/// ```rust
/// use bubbletea_pager::pager::{Model, Status};
/// use bubbletea_pager::source::MemorySource;
///
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// let source = MemorySource::new((1..=60).collect::<Vec<u32>>(), 20);
/// let mut pager = Model::new(source);
///
/// let cmd = pager.load_initial().expect("first load starts");
/// assert_eq!(pager.status(), Status::LoadingInitial);
///
/// // The bubbletea runtime would run the command and feed the message back.
/// if let Some(msg) = cmd.await {
///     pager.update(msg);
/// }
/// assert_eq!(pager.len(), 20);
/// assert!(pager.can_load_more());
///
/// // Row 15 is inside the look-ahead window of a 20-row list.
/// assert!(pager.notify_visible(15).is_some());
/// # });
/// ```
pub struct Model<R, C> {
    id: i64,
    generation: u64,
    state: ListState<R, C>,
    failed: Option<LoadKind>,
    source: Box<dyn PageSource<R, C>>,
    observers: Observers<R, C>,

    /// Behaviour and text settings.
    pub config: Config,
    /// Key bindings handled by `update`.
    pub keymap: PagerKeyMap,
    /// Styles used by `view`.
    pub styles: PagerStyles,
}

impl<R, C> fmt::Debug for Model<R, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Model")
            .field("id", &self.id)
            .field("generation", &self.generation)
            .field("status", &self.state.status())
            .field("items", &self.state.len())
            .field("observers", &self.observers.len())
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl<R, C> Model<R, C>
where
    R: Send + 'static,
    C: Clone + Send + 'static,
{
    /// Creates an empty pager over `source` with the default configuration.
    pub fn new(source: impl PageSource<R, C> + 'static) -> Self {
        Self::with_config(source, Config::default())
    }

    /// Creates an empty pager over `source` with a custom configuration.
    pub fn with_config(source: impl PageSource<R, C> + 'static, config: Config) -> Self {
        Self {
            id: next_id(),
            generation: 0,
            state: ListState::new(),
            failed: None,
            source: Box::new(source),
            observers: Observers::default(),
            config,
            keymap: PagerKeyMap::default(),
            styles: PagerStyles::default(),
        }
    }

    /// Unique identifier used to route fetch results back to this pager.
    pub fn id(&self) -> i64 {
        self.id
    }

    /// Counter bumped by every initial load; tags outgoing fetches.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Read-only view of the list state.
    pub fn state(&self) -> &ListState<R, C> {
        &self.state
    }

    /// Records loaded so far, in arrival order.
    pub fn items(&self) -> &[R] {
        self.state.items()
    }

    /// Current state machine position.
    pub fn status(&self) -> Status {
        self.state.status()
    }

    /// Whether a first load or refresh is in flight.
    pub fn is_loading_initial(&self) -> bool {
        self.state.is_loading_initial()
    }

    /// Whether a next-page load is in flight.
    pub fn is_loading_more(&self) -> bool {
        self.state.is_loading_more()
    }

    /// `false` once the source has no further pages.
    pub fn can_load_more(&self) -> bool {
        self.state.can_load_more()
    }

    /// Error from the most recent failed load.
    pub fn last_error(&self) -> Option<&PageError> {
        self.state.last_error()
    }

    /// Which kind of load produced the current error, if any.
    pub fn failed_load(&self) -> Option<LoadKind> {
        self.state.last_error().and(self.failed)
    }

    /// Cursor the next `load_more` will request.
    pub fn page_cursor(&self) -> Option<&C> {
        self.state.page_cursor()
    }

    /// Number of records loaded.
    pub fn len(&self) -> usize {
        self.state.len()
    }

    /// Whether no records are loaded.
    pub fn is_empty(&self) -> bool {
        self.state.is_empty()
    }

    /// Changes the prefetch look-ahead distance.
    pub fn set_look_ahead(&mut self, look_ahead: usize) {
        self.config.look_ahead = look_ahead;
    }

    /// Registers an observer called with the state after every transition.
    ///
    /// ```rust
    /// use bubbletea_pager::pager::Model;
    /// use bubbletea_pager::source::MemorySource;
    /// use std::sync::{Arc, Mutex};
    ///
    /// let mut pager = Model::new(MemorySource::new(vec![1, 2, 3], 2));
    /// let seen = Arc::new(Mutex::new(Vec::new()));
    /// let sink = Arc::clone(&seen);
    /// pager.subscribe(move |state| sink.lock().unwrap().push(state.status()));
    ///
    /// let _cmd = pager.load_initial();
    /// assert_eq!(seen.lock().unwrap().len(), 1);
    /// ```
    pub fn subscribe<F>(&mut self, observer: F) -> SubscriptionId
    where
        F: FnMut(&ListState<R, C>) + Send + 'static,
    {
        self.observers.add(Box::new(observer))
    }

    /// Removes an observer. Returns `false` if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.observers.remove(id)
    }

    /// Starts the first load. Equivalent to [`load_initial`](Self::load_initial).
    pub fn init(&mut self) -> Option<Cmd> {
        self.load_initial()
    }

    /// Loads (or reloads) the first page.
    ///
    /// A no-op while an initial load is already in flight. Otherwise any
    /// in-flight next-page load is superseded, the last error is cleared, and
    /// the source is asked for its first page. On success the list is
    /// replaced; on failure the previous records stay visible.
    pub fn load_initial(&mut self) -> Option<Cmd> {
        if self.state.is_loading_initial() {
            trace!(id = self.id, "initial load already in flight");
            return None;
        }
        if self.state.is_loading_more() {
            debug!(
                id = self.id,
                generation = self.generation,
                "refresh supersedes in-flight next-page load"
            );
        }

        self.generation += 1;
        self.failed = None;
        self.state.begin(LoadKind::Initial);
        debug!(id = self.id, generation = self.generation, "starting initial load");

        let fetch = self.source.fetch_page(None);
        self.observers.notify(&self.state);
        Some(self.fetch_cmd(LoadKind::Initial, fetch))
    }

    /// Loads the page after the current cursor and appends it.
    ///
    /// Rejected while any load is in flight or once the source is exhausted;
    /// the source is not called in that case. A failure leaves the records
    /// and cursor untouched, so calling this again retries the same page.
    pub fn load_more(&mut self) -> Option<Cmd> {
        if !self.state.can_start_more() {
            trace!(id = self.id, status = ?self.state.status(), "next-page load rejected");
            return None;
        }

        self.failed = None;
        self.state.begin(LoadKind::More);
        debug!(
            id = self.id,
            generation = self.generation,
            loaded = self.state.len(),
            "starting next-page load"
        );

        let fetch = self.source.fetch_page(self.state.page_cursor().cloned());
        self.observers.notify(&self.state);
        Some(self.fetch_cmd(LoadKind::More, fetch))
    }

    /// Reports that the record at `index` is visible.
    ///
    /// Starts a next-page load when `index` falls inside the look-ahead
    /// window at the end of the list and the load guards allow it. Many
    /// reports in quick succession start at most one fetch.
    pub fn notify_visible(&mut self, index: usize) -> Option<Cmd> {
        let item_count = self.state.len();
        let look_ahead = self.config.look_ahead;
        if !policy::should_prefetch(index, item_count, look_ahead) {
            trace!(id = self.id, index, item_count, look_ahead, "outside prefetch window");
            return None;
        }
        self.load_more()
    }

    /// Repeats the load that last failed. A no-op when there is no error.
    pub fn retry(&mut self) -> Option<Cmd> {
        self.state.last_error()?;
        match self.failed.unwrap_or(LoadKind::Initial) {
            LoadKind::Initial => self.load_initial(),
            LoadKind::More if self.state.is_empty() => self.load_initial(),
            LoadKind::More => self.load_more(),
        }
    }

    /// Handles fetch results, visibility reports, and key presses.
    pub fn update(&mut self, msg: Msg) -> Option<Cmd> {
        let msg = match msg.downcast::<PageLoadedMsg<R, C>>() {
            Ok(loaded) => {
                self.receive(*loaded);
                return None;
            }
            Err(other) => other,
        };

        if let Some(visible) = msg.downcast_ref::<VisibleMsg>() {
            if visible.id != 0 && visible.id != self.id {
                return None;
            }
            return self.notify_visible(visible.index);
        }

        if let Some(key_msg) = msg.downcast_ref::<KeyMsg>() {
            if self.keymap.refresh.matches(key_msg) {
                return self.load_initial();
            }
            if self.keymap.retry.matches(key_msg) {
                return self.retry();
            }
        }

        None
    }

    /// Applies a fetch result.
    ///
    /// Results for another pager are ignored. Results from a superseded
    /// generation, or for a load that is no longer in flight, are stale and
    /// dropped without touching the state.
    pub fn receive(&mut self, msg: PageLoadedMsg<R, C>) {
        if msg.id != self.id {
            return;
        }
        if msg.generation != self.generation || self.state.in_flight() != Some(msg.kind) {
            debug!(
                id = self.id,
                kind = %msg.kind,
                generation = msg.generation,
                current = self.generation,
                reason = %PageError::CancelledStale,
                "discarding stale page"
            );
            return;
        }

        match msg.result {
            Ok(page) => {
                let received = page.records.len();
                match msg.kind {
                    LoadKind::Initial => self.state.apply_initial(page),
                    LoadKind::More => self.state.apply_more(page),
                }
                debug!(
                    id = self.id,
                    kind = %msg.kind,
                    received,
                    total = self.state.len(),
                    exhausted = !self.state.can_load_more(),
                    "page applied"
                );
            }
            Err(error) if !error.is_surfaced() => {
                debug!(id = self.id, kind = %msg.kind, "source cancelled fetch");
                self.state.abandon();
            }
            Err(error) => {
                warn!(id = self.id, kind = %msg.kind, %error, "page load failed");
                self.failed = Some(msg.kind);
                self.state.fail(error);
            }
        }

        self.observers.notify(&self.state);
    }

    fn fetch_cmd(&self, kind: LoadKind, fetch: PageFuture<R, C>) -> Cmd {
        let id = self.id;
        let generation = self.generation;
        Box::pin(async move {
            let result = fetch.await;
            Some(Box::new(PageLoadedMsg {
                id,
                generation,
                kind,
                result,
            }) as Msg)
        })
    }
}
