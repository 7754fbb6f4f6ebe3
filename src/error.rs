//! Error taxonomy for page fetches.
//!
//! Every failure a [`PageSource`](crate::source::PageSource) can report is
//! expressed as a [`PageError`]. The pager never treats these as fatal: a
//! failed fetch is recorded in the list state and control returns to the
//! caller, who may retry.

use thiserror::Error;

/// Errors produced while fetching a page of records.
///
/// The payloads are plain strings so the error can be cloned into list
/// snapshots and compared in tests without dragging the transport's own
/// error types along.
///
/// # Examples
///
/// ```rust
/// use bubbletea_pager::PageError;
///
/// let err = PageError::transport("connection refused");
/// assert_eq!(err.to_string(), "transport error: connection refused");
/// assert!(err.is_surfaced());
/// assert!(!PageError::CancelledStale.is_surfaced());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PageError {
    /// The remote side could not be reached or answered with a failure.
    #[error("transport error: {0}")]
    Transport(String),

    /// The page payload arrived but could not be decoded into records.
    #[error("malformed page payload: {0}")]
    Decode(String),

    /// The fetch completed after a newer load superseded it.
    ///
    /// Internal only: stale completions are discarded and never stored as
    /// the list's last error.
    #[error("fetch superseded by a newer load")]
    CancelledStale,
}

impl PageError {
    /// Builds a [`PageError::Transport`] from any message.
    pub fn transport(message: impl Into<String>) -> Self {
        PageError::Transport(message.into())
    }

    /// Builds a [`PageError::Decode`] from any message.
    pub fn decode(message: impl Into<String>) -> Self {
        PageError::Decode(message.into())
    }

    /// Returns `true` if the error should be shown to the user.
    pub fn is_surfaced(&self) -> bool {
        !matches!(self, PageError::CancelledStale)
    }
}

/// Convenience alias for fallible page results.
pub type Result<T> = std::result::Result<T, PageError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            PageError::decode("missing field `id`").to_string(),
            "malformed page payload: missing field `id`"
        );
        assert_eq!(
            PageError::CancelledStale.to_string(),
            "fetch superseded by a newer load"
        );
    }

    #[test]
    fn test_surfaced_classification() {
        assert!(PageError::transport("timeout").is_surfaced());
        assert!(PageError::decode("bad json").is_surfaced());
        assert!(!PageError::CancelledStale.is_surfaced());
    }
}
