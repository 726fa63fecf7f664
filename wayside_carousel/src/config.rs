// Copyright 2025 the Wayside Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tunables for a carousel instance.

/// Configuration for a [`CarouselController`](crate::CarouselController).
///
/// Every field has a default that matches common presentation tuning, but all
/// of them are per-instance: different strips on the same page may want
/// different step distances or labels, and those differences belong in
/// configuration rather than in copied code.
///
/// The sensitivity and breakpoint defaults are interaction-feel constants with
/// no deeper rationale; treat them as starting points.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CarouselConfig {
    /// Pixels advanced per step when the viewport is at least
    /// [`wide_breakpoint`](Self::wide_breakpoint) wide.
    pub step_distance_wide: f64,
    /// Pixels advanced per step on narrower viewports.
    pub step_distance_narrow: f64,
    /// Viewport width, in pixels, at which the wide step distance applies.
    pub wide_breakpoint: f64,
    /// Multiplier applied to pointer-drag travel.
    pub pointer_drag_sensitivity: f64,
    /// Multiplier applied to touch-swipe travel. Touch travel is typically
    /// physically shorter than pointer travel, so it gets less amplification
    /// than it would need to feel equivalent, not more.
    pub touch_swipe_sensitivity: f64,
    /// Distance from an edge, in pixels, within which stepping toward that
    /// edge is considered unavailable.
    pub affordance_tolerance: f64,
    /// Quiet window hosts should apply between the last resize event and
    /// recomputing the step distance.
    pub resize_debounce_ms: u64,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            step_distance_wide: 380.0,
            step_distance_narrow: 300.0,
            wide_breakpoint: 992.0,
            pointer_drag_sensitivity: 2.0,
            touch_swipe_sensitivity: 1.5,
            affordance_tolerance: 5.0,
            resize_debounce_ms: 250,
        }
    }
}

impl CarouselConfig {
    /// Returns the step distance for the given viewport width.
    #[must_use]
    pub fn step_distance_for(&self, viewport_width: f64) -> f64 {
        if viewport_width >= self.wide_breakpoint {
            self.step_distance_wide
        } else {
            self.step_distance_narrow
        }
    }
}
