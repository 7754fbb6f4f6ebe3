#![warn(missing_docs)]
#![doc(html_root_url = "https://docs.rs/bubbletea-pager/")]

//! # bubbletea-pager
//!
//! An infinite-scroll list controller for [bubbletea-rs](https://github.com/joshka/bubbletea-rs)
//! applications. It pulls records from a remote source one page at a time and
//! presents them as a single growing list, coordinating loading state, error
//! state, and end-of-data detection.
//!
//! ## Overview
//!
//! The crate is built around three pieces:
//!
//! - [`PageSource`]: anything that can fetch one page of records for a cursor.
//!   Async closures qualify; [`MemorySource`] serves a fixed record set.
//! - [`Pager`] (`pager::Model`): owns the accumulated list, guarantees a single
//!   fetch in flight, prefetches when the user nears the end, and records
//!   failures without ever dropping loaded data.
//! - Your display surface: renders the records, reports which index is
//!   visible, and forwards messages to the pager.
//!
//! Like every bubbletea component, the pager never blocks. Operations that
//! fetch return a [`Cmd`]; the runtime executes it and delivers the result to
//! `update()`.
//!
//! ## Quick Start
//!
//! ```rust
//! use bubbletea_pager::prelude::*;
//! use bubbletea_rs::{Cmd, Model as BubbleTeaModel, Msg};
//!
//! struct App {
//!     feed: Pager<String, usize>,
//!     cursor: usize,
//! }
//!
//! impl BubbleTeaModel for App {
//!     fn init() -> (Self, Option<Cmd>) {
//!         let rows: Vec<String> = (1..=500).map(|i| format!("story #{i}")).collect();
//!         let mut feed = Pager::new(MemorySource::new(rows, 50));
//!         let cmd = feed.init();
//!         (Self { feed, cursor: 0 }, cmd)
//!     }
//!
//!     fn update(&mut self, msg: Msg) -> Option<Cmd> {
//!         // Moving the cursor would call `self.feed.notify_visible(self.cursor)`.
//!         self.feed.update(msg)
//!     }
//!
//!     fn view(&self) -> String {
//!         self.feed.view()
//!     }
//! }
//! ```
//!
//! ## Error Handling
//!
//! Fetch failures are [`PageError`] values. They are stored as the pager's
//! last error and shown by `view()`; they are never fatal. Retrying is always
//! an explicit call (or the retry key).
//!
//! ## Logging
//!
//! State transitions are reported through [`tracing`](https://docs.rs/tracing)
//! at `debug`/`trace` level and failures at `warn`. The crate never installs a
//! subscriber.

pub mod error;
pub mod key;
pub mod pager;
pub mod source;

use bubbletea_rs::Cmd;

pub use error::PageError;
pub use key::{Binding, Help as KeyHelp, KeyMap, KeyPress};
pub use pager::Model as Pager;
pub use pager::{
    Config as PagerConfig, ListState, LoadKind, PageLoadedMsg, PagerKeyMap, PagerStyles, Status,
    SubscriptionId, VisibleMsg,
};
pub use source::{MemorySource, Page, PageFuture, PageSource};

/// Prelude module for convenient imports.
///
/// ```rust
/// use bubbletea_pager::prelude::*;
///
/// let pager: Pager<u32, usize> = Pager::new(MemorySource::new(vec![1, 2, 3], 2));
/// assert_eq!(pager.status(), Status::Idle);
/// ```
pub mod prelude {
    pub use crate::error::PageError;
    pub use crate::key::{Binding, KeyMap};
    pub use crate::pager::Model as Pager;
    pub use crate::pager::{
        Config as PagerConfig, ListState, LoadKind, PageLoadedMsg, Status, VisibleMsg,
    };
    pub use crate::source::{MemorySource, Page, PageSource};
}

/// Wraps an optional command into one that always resolves.
///
/// Useful when a caller needs a `Cmd` even if the pager had nothing to do,
/// for example when batching with other component commands.
pub fn or_noop(cmd: Option<Cmd>) -> Cmd {
    cmd.unwrap_or_else(|| Box::pin(async { None }))
}
