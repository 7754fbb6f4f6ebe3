//! Rendering for the pager.
//!
//! The layout is deliberately plain: one line per record followed by a
//! status footer. What the footer shows depends on the state:
//!
//! | Records | State              | Output                                   |
//! |---------|--------------------|------------------------------------------|
//! | none    | initial load       | loading indicator only                   |
//! | none    | failed             | error message with a retry hint          |
//! | none    | exhausted          | empty text                               |
//! | some    | loading more       | records + "loading more" line            |
//! | some    | failed             | records + one-line error, list untouched |
//! | some    | exhausted          | records + end-of-list marker             |

use super::model::Model;
use super::style::{HELP_SEPARATOR, LOADING_GLYPH};
use super::types::LoadKind;
use crate::key::short_help_view;
use std::fmt::Display;

impl<R, C> Model<R, C>
where
    R: Display + Send + 'static,
    C: Clone + Send + 'static,
{
    /// Renders every record followed by the status line and help.
    pub fn view(&self) -> String {
        self.view_window(0, self.len())
    }

    /// Renders up to `height` records starting at `start`.
    ///
    /// Display surfaces that scroll use this to draw only the visible rows.
    /// The status line appears once the window reaches the end of the list,
    /// which is where loading and end-of-list indicators belong.
    pub fn view_window(&self, start: usize, height: usize) -> String {
        let mut sections = Vec::new();

        let start = start.min(self.len());
        let end = start.saturating_add(height).min(self.len());
        if end > start {
            sections.push(
                self.items()[start..end]
                    .iter()
                    .map(|item| item.to_string())
                    .collect::<Vec<_>>()
                    .join("\n"),
            );
        }

        if end == self.len() {
            let status = self.status_line();
            if !status.is_empty() {
                sections.push(status);
            }
        }

        if self.config.show_help {
            let help = self.help_view();
            if !help.is_empty() {
                sections.push(help);
            }
        }

        sections.join("\n")
    }
}

impl<R, C> Model<R, C>
where
    R: Send + 'static,
    C: Clone + Send + 'static,
{
    /// The line shown below the records: loading, error, or end-of-list
    /// indicators. For an empty list this is the whole body.
    pub fn status_line(&self) -> String {
        if self.is_empty() {
            self.view_empty()
        } else {
            self.view_footer()
        }
    }

    /// The styled key help line.
    pub fn help_view(&self) -> String {
        let help = short_help_view(&self.keymap, HELP_SEPARATOR);
        if help.is_empty() {
            return help;
        }
        self.styles.help.clone().render(&help)
    }

    // Full-screen states for a list with nothing to show yet.
    fn view_empty(&self) -> String {
        if self.is_loading_initial() || self.is_loading_more() {
            return self
                .styles
                .loading
                .clone()
                .render(&format!("{} Loading…", LOADING_GLYPH));
        }
        if let Some(err) = self.last_error() {
            let retry = self.keymap.retry.help();
            return format!(
                "{}\n{}",
                self.styles.error.clone().render(&format!("Couldn't load items: {}", err)),
                self.styles
                    .help
                    .clone()
                    .render(&format!("Press {} to {}.", retry.key, retry.desc))
            );
        }
        if !self.can_load_more() {
            return self.styles.empty.clone().render(&self.config.empty_text);
        }
        String::new()
    }

    fn view_footer(&self) -> String {
        if self.is_loading_initial() {
            return self
                .styles
                .loading
                .clone()
                .render(&format!("{} Refreshing…", LOADING_GLYPH));
        }
        if self.is_loading_more() {
            return self
                .styles
                .loading
                .clone()
                .render(&format!("{} Loading more…", LOADING_GLYPH));
        }
        if let Some(err) = self.last_error() {
            let action = match self.failed_load() {
                Some(LoadKind::Initial) => "refresh",
                _ => "load more",
            };
            return self
                .styles
                .footer_error
                .clone()
                .render(&format!("Couldn't {}: {}", action, err));
        }
        if !self.can_load_more() {
            return self.styles.end_of_list.clone().render(&self.config.end_text);
        }
        String::new()
    }
}
