//! Application-wide constants.
//!
//! Constants are grouped by functionality:
//! - `storage` - Persisted keys and file names
//! - `viewport` - Responsive layout thresholds
//! - `timing` - Debounce delays
//! - `font` - Font scale bounds
//! - `content` - Well-known content parts

/// Application identifier used for data and config directory names.
pub const APP_ID: &str = "gitinbit";

/// Persistence keys and file names.
pub mod storage {
    /// Key under which the font scale is persisted.
    pub const FONT_SIZE_INCREASE_KEY: &str = "font-size-increase";

    /// File name of the key-value store inside the data directory.
    pub const STORAGE_FILE_NAME: &str = "local-storage.json";
}

/// Viewport classification thresholds.
pub mod viewport {
    /// Minimum viewport width (px) classified as a wide screen.
    ///
    /// Matches the large media-query threshold of the site theme.
    pub const WIDE_SCREEN_BREAKPOINT: u32 = 1024;
}

/// Timing constants for event handling and debouncing.
pub mod timing {
    /// Quiet period (ms) after the last resize event before re-classifying.
    pub const RESIZE_DEBOUNCE_MS: u64 = 500;

    /// Event class used for resize debouncing.
    pub const RESIZE_EVENT: &str = "resize";
}

/// Font scale bounds.
pub mod font {
    /// Smallest accepted font scale (inclusive). Also the initial value.
    pub const MIN_FONT_SIZE_INCREASE: f64 = 1.0;

    /// Largest accepted font scale (inclusive).
    pub const MAX_FONT_SIZE_INCREASE: f64 = 1.5;
}

/// Titles of the content parts rendered around articles.
pub mod content {
    /// Part holding the author blurb shown below posts.
    pub const AUTHOR_PART: &str = "author";

    /// Part holding the footnote shown below every article.
    pub const FOOTNOTE_PART: &str = "footnote";
}
