//! Styles for the pager's status lines.
//!
//! Records themselves are rendered with their `Display` implementation;
//! these styles only cover the loading indicators, error banners, the
//! end-of-list marker, and the help line.

use lipgloss_extras::prelude::*;

/// Indicator shown while a page is loading.
pub const LOADING_GLYPH: &str = "⋯";

/// Separator placed between help entries.
pub const HELP_SEPARATOR: &str = " • ";

/// Styles applied by `pager::Model::view`.
#[derive(Debug, Clone)]
pub struct PagerStyles {
    /// Loading and refreshing indicators.
    pub loading: Style,
    /// Full error shown when nothing is loaded.
    pub error: Style,
    /// One-line error under a populated list.
    pub footer_error: Style,
    /// End-of-list marker.
    pub end_of_list: Style,
    /// Text for a list that loaded with no records.
    pub empty: Style,
    /// Key help and retry hint.
    pub help: Style,
}

impl Default for PagerStyles {
    fn default() -> Self {
        let subdued_color = AdaptiveColor {
            Light: "#9B9B9B",
            Dark: "#5C5C5C",
        };

        Self {
            loading: Style::new().foreground(AdaptiveColor {
                Light: "#8E8E8E",
                Dark: "#747373",
            }),
            error: Style::new()
                .foreground(AdaptiveColor {
                    Light: "#D7263D",
                    Dark: "#FF5F87",
                })
                .bold(true),
            footer_error: Style::new().foreground(AdaptiveColor {
                Light: "#D7263D",
                Dark: "#FF5F87",
            }),
            end_of_list: Style::new().foreground(subdued_color.clone()),
            empty: Style::new().foreground(subdued_color),
            help: Style::new().foreground(AdaptiveColor {
                Light: "#B2B2B2",
                Dark: "#4A4A4A",
            }),
        }
    }
}
