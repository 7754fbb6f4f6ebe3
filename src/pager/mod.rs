//! Paginated list controller with prefetch, single-flight loading, and error recovery.
//!
//! This module exposes a generic `Model<R, C>` that accumulates records of
//! type `R` from a [`PageSource`](crate::source::PageSource) addressed by
//! cursors of type `C`, plus supporting submodules:
//! - `policy`: the look-ahead prefetch trigger
//! - `keys`: refresh and retry bindings
//! - `style`: footer and banner styles
//!
//! ## Architecture Overview
//!
//! The pager follows the same command/message loop as every bubbletea
//! component:
//!
//! 1. The display surface calls `load_initial()` on mount (or `init()`).
//! 2. The returned `Cmd` runs the fetch; its `PageLoadedMsg` arrives in `update()`.
//! 3. As rows scroll into view the surface calls `notify_visible(index)`
//!    (or sends a `VisibleMsg`). Inside the look-ahead window this starts
//!    `load_more()`, which appends the next page when it resolves.
//! 4. When a page arrives without a next cursor the pager is exhausted and
//!    further visibility reports are ignored until a refresh.
//!
//! ### Guards
//! - **Single flight**: `load_more()` is rejected while any load is in flight.
//! - **Exhaustion**: `load_more()` is rejected once `can_load_more()` is false.
//! - **Generations**: `load_initial()` bumps a counter carried by every fetch;
//!   completions from an older generation are discarded.
//!
//! ### Errors
//! Failures land in `last_error()` and never clear the list. With no records
//! the view shows a full error with a retry hint; with records the error is a
//! single footer line under the intact list.
//!
//! ## Example
//!
//! ```rust
//! use bubbletea_pager::pager::{Model, VisibleMsg};
//! use bubbletea_pager::source::MemorySource;
//! use bubbletea_rs::{Cmd, Msg};
//!
//! struct Feed {
//!     pager: Model<String, usize>,
//! }
//!
//! impl Feed {
//!     fn new() -> (Self, Option<Cmd>) {
//!         let rows: Vec<String> = (1..=100).map(|i| format!("row {i}")).collect();
//!         let mut pager = Model::new(MemorySource::new(rows, 25));
//!         let cmd = pager.init();
//!         (Self { pager }, cmd)
//!     }
//!
//!     fn update(&mut self, msg: Msg) -> Option<Cmd> {
//!         // Page results, visibility reports, and refresh/retry keys.
//!         self.pager.update(msg)
//!     }
//!
//!     fn scrolled_to(&mut self, index: usize) -> Option<Cmd> {
//!         let id = self.pager.id();
//!         self.update(Box::new(VisibleMsg { id, index }))
//!     }
//! }
//!
//! let (mut feed, cmd) = Feed::new();
//! assert!(cmd.is_some());
//! assert!(feed.scrolled_to(0).is_none()); // first page still loading
//! ```

pub mod config;
pub mod keys;
pub mod policy;
pub mod style;

mod model;
mod observe;
mod rendering;
mod state;
mod types;


pub use config::Config;
pub use keys::PagerKeyMap;
pub use model::Model;
pub use state::ListState;
pub use style::PagerStyles;
pub use types::{LoadKind, PageLoadedMsg, Status, SubscriptionId, VisibleMsg};
