// Copyright 2025 the Wayside Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Threshold-based visibility for a back-to-top control.

/// Default scroll depth, in pixels, at which the control appears.
pub const DEFAULT_THRESHOLD: f64 = 300.0;

/// Visibility state for a back-to-top control.
///
/// The control shows once the page has scrolled past a threshold and hides
/// again above it. [`BackToTop::on_scroll`] reports transitions so hosts only
/// touch the presentation when the visibility actually changes. Activating
/// the control requests a smooth scroll back to offset zero; the scroll
/// itself is the host's.
#[derive(Clone, Copy, Debug)]
pub struct BackToTop {
    threshold: f64,
    visible: bool,
}

impl BackToTop {
    /// Creates a control with the default threshold.
    #[must_use]
    pub fn new() -> Self {
        Self::with_threshold(DEFAULT_THRESHOLD)
    }

    /// Creates a control appearing past `threshold` pixels of scroll.
    ///
    /// Pages with taller heroes tune this upward (the gallery page uses 400).
    #[must_use]
    pub fn with_threshold(threshold: f64) -> Self {
        Self {
            threshold,
            visible: false,
        }
    }

    /// Returns `true` while the control should be shown.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Records a new vertical scroll position.
    ///
    /// Returns the new visibility when it changed, `None` otherwise.
    pub fn on_scroll(&mut self, scroll_y: f64) -> Option<bool> {
        let visible = scroll_y > self.threshold;
        if visible == self.visible {
            return None;
        }
        self.visible = visible;
        Some(visible)
    }

    /// The scroll offset an activation should smoothly return to.
    #[must_use]
    pub fn target_offset(&self) -> f64 {
        0.0
    }
}

impl Default for BackToTop {
    fn default() -> Self {
        Self::new()
    }
}
