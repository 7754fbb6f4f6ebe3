//! Pager configuration.

use super::policy::DEFAULT_LOOK_AHEAD;

/// Tunables for a pager, built with `with_*` methods.
///
/// # Examples
///
/// ```rust
/// use bubbletea_pager::pager::Config;
///
/// let config = Config::default()
///     .with_look_ahead(10)
///     .with_end_text("That's everything.")
///     .with_show_help(false);
/// assert_eq!(config.look_ahead, 10);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Records before the end of the list at which the next page is requested.
    pub look_ahead: usize,
    /// Shown when a completed load produced no records at all.
    pub empty_text: String,
    /// Shown below the last record once the source is exhausted.
    pub end_text: String,
    /// Whether `view` renders a key help line.
    pub show_help: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            look_ahead: DEFAULT_LOOK_AHEAD,
            empty_text: "No items.".to_string(),
            end_text: "No more items.".to_string(),
            show_help: true,
        }
    }
}

impl Config {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the prefetch look-ahead distance.
    pub fn with_look_ahead(mut self, look_ahead: usize) -> Self {
        self.look_ahead = look_ahead;
        self
    }

    /// Sets the text shown for an empty, fully loaded list.
    pub fn with_empty_text(mut self, text: &str) -> Self {
        self.empty_text = text.to_string();
        self
    }

    /// Sets the end-of-list marker text.
    pub fn with_end_text(mut self, text: &str) -> Self {
        self.end_text = text.to_string();
        self
    }

    /// Toggles the help line.
    pub fn with_show_help(mut self, show: bool) -> Self {
        self.show_help = show;
        self
    }
}
