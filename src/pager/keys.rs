//! Key bindings for the pager.
//!
//! - **Refresh**: `r` / `f5` reloads the list from the first page.
//! - **Retry**: `enter` repeats the load that last failed.
//!
//! Scrolling keys are intentionally absent: the display surface owns the
//! cursor and reports visibility to the pager.

use crate::key;
use crossterm::event::KeyCode;

/// Key bindings understood by `pager::Model::update`.
#[derive(Debug, Clone)]
pub struct PagerKeyMap {
    /// Reload from the first page.
    pub refresh: key::Binding,
    /// Repeat the failed load.
    pub retry: key::Binding,
}

impl Default for PagerKeyMap {
    fn default() -> Self {
        Self {
            refresh: key::Binding::new(vec![KeyCode::Char('r'), KeyCode::F(5)])
                .with_help("r", "refresh"),
            retry: key::Binding::new(vec![KeyCode::Enter]).with_help("enter", "retry"),
        }
    }
}

impl key::KeyMap for PagerKeyMap {
    fn short_help(&self) -> Vec<&key::Binding> {
        vec![&self.refresh, &self.retry]
    }
}
