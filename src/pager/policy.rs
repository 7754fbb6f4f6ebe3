//! Prefetch trigger policy.
//!
//! The next page is requested once the user can see a record within
//! `look_ahead` positions of the end of the loaded list, so the fetch
//! overlaps with the remaining scroll instead of starting at the very last
//! row. This module is pure arithmetic; the single-flight and exhaustion
//! guards live on the pager itself.

/// Default number of records before the end at which prefetch starts.
pub const DEFAULT_LOOK_AHEAD: usize = 5;

/// First index that triggers a prefetch: `max(item_count - 1 - look_ahead, 0)`.
///
/// ```rust
/// use bubbletea_pager::pager::policy::trigger_index;
///
/// assert_eq!(trigger_index(20, 5), 14);
/// assert_eq!(trigger_index(3, 5), 0);
/// assert_eq!(trigger_index(0, 5), 0);
/// ```
pub fn trigger_index(item_count: usize, look_ahead: usize) -> usize {
    item_count.saturating_sub(1).saturating_sub(look_ahead)
}

/// Whether seeing the record at `index` should start loading the next page.
pub fn should_prefetch(index: usize, item_count: usize, look_ahead: usize) -> bool {
    index >= trigger_index(item_count, look_ahead)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_window_edges_for_full_page() {
        // 20 records, look-ahead 5: indices 14..=19 are inside the window.
        assert!(!should_prefetch(13, 20, DEFAULT_LOOK_AHEAD));
        assert!(should_prefetch(14, 20, DEFAULT_LOOK_AHEAD));
        assert!(should_prefetch(19, 20, DEFAULT_LOOK_AHEAD));
    }

    #[test]
    fn test_short_lists_always_trigger() {
        for index in 0..4 {
            assert!(should_prefetch(index, 4, DEFAULT_LOOK_AHEAD));
        }
        assert!(should_prefetch(0, 0, DEFAULT_LOOK_AHEAD));
    }

    #[test]
    fn test_zero_look_ahead_only_last_index() {
        assert!(!should_prefetch(8, 10, 0));
        assert!(should_prefetch(9, 10, 0));
    }

    proptest! {
        #[test]
        fn prop_matches_signed_threshold(
            item_count in 0usize..10_000,
            look_ahead in 0usize..64,
            index in 0usize..10_000,
        ) {
            let threshold = (item_count as i64 - 1 - look_ahead as i64).max(0);
            prop_assert_eq!(
                should_prefetch(index, item_count, look_ahead),
                index as i64 >= threshold
            );
        }

        #[test]
        fn prop_index_just_before_window_never_triggers(
            item_count in 7usize..10_000,
            look_ahead in 0usize..6,
        ) {
            let before = item_count - 1 - look_ahead - 1;
            prop_assert!(!should_prefetch(before, item_count, look_ahead));
            prop_assert!(should_prefetch(before + 1, item_count, look_ahead));
        }
    }
}
