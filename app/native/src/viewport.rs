//! Viewport classification.
//!
//! Decides whether the current viewport is wide enough for the richer side-panel
//! chrome. Classification is a pure function of the width; re-classification on
//! resize is rate-limited by [`crate::throttle`].

use serde::{Deserialize, Serialize};

use crate::constants::viewport::WIDE_SCREEN_BREAKPOINT;

/// Screen class derived from the viewport width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ScreenClass {
    /// Viewport at or above the breakpoint.
    Wide,
    /// Viewport below the breakpoint.
    Narrow,
}

impl ScreenClass {
    /// Returns `true` for [`ScreenClass::Wide`].
    #[must_use]
    pub const fn is_wide(self) -> bool { matches!(self, Self::Wide) }
}

/// Classifies viewport widths against a fixed breakpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewportClassifier {
    breakpoint: u32,
}

impl Default for ViewportClassifier {
    fn default() -> Self { Self::new(WIDE_SCREEN_BREAKPOINT) }
}

impl ViewportClassifier {
    /// Creates a classifier with the given breakpoint in pixels.
    #[must_use]
    pub const fn new(breakpoint: u32) -> Self { Self { breakpoint } }

    /// Returns the configured breakpoint.
    #[must_use]
    pub const fn breakpoint(&self) -> u32 { self.breakpoint }

    /// Classifies a viewport width.
    #[must_use]
    pub const fn classify(&self, width: u32) -> ScreenClass {
        if width >= self.breakpoint {
            ScreenClass::Wide
        } else {
            ScreenClass::Narrow
        }
    }

    /// Shorthand for `classify(width).is_wide()`.
    #[must_use]
    pub const fn is_wide_screen(&self, width: u32) -> bool { self.classify(width).is_wide() }
}

/// Source of the hosting runtime's current viewport width.
pub trait ViewportSource {
    /// Current viewport width in pixels.
    fn width(&self) -> u32;
}

/// A viewport with a width that only changes when told to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FixedViewport {
    width: u32,
}

impl FixedViewport {
    #[must_use]
    pub const fn new(width: u32) -> Self { Self { width } }

    pub const fn set_width(&mut self, width: u32) { self.width = width; }
}

impl ViewportSource for FixedViewport {
    fn width(&self) -> u32 { self.width }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_breakpoint() {
        assert_eq!(ViewportClassifier::default().breakpoint(), 1024);
    }

    #[test]
    fn test_classify_boundaries() {
        let classifier = ViewportClassifier::default();
        assert_eq!(classifier.classify(0), ScreenClass::Narrow);
        assert_eq!(classifier.classify(1023), ScreenClass::Narrow);
        assert_eq!(classifier.classify(1024), ScreenClass::Wide);
        assert_eq!(classifier.classify(u32::MAX), ScreenClass::Wide);
    }

    #[test]
    fn test_classify_is_deterministic() {
        let classifier = ViewportClassifier::new(800);
        for width in (0..2000).step_by(37) {
            assert_eq!(classifier.classify(width), classifier.classify(width));
            assert_eq!(classifier.is_wide_screen(width), width >= 800);
        }
    }

    #[test]
    fn test_zero_breakpoint_is_always_wide() {
        let classifier = ViewportClassifier::new(0);
        assert!(classifier.is_wide_screen(0));
    }

    #[test]
    fn test_fixed_viewport_reports_width() {
        let mut viewport = FixedViewport::new(640);
        assert_eq!(viewport.width(), 640);
        viewport.set_width(1280);
        assert_eq!(viewport.width(), 1280);
    }
}
