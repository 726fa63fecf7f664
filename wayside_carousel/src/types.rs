// Copyright 2025 the Wayside Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared value types for the carousel controller.

/// Opacity rendered for a step button whose direction cannot advance.
pub const DISABLED_BUTTON_OPACITY: f64 = 0.4;

/// A discrete navigation direction along the track.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    /// Toward the start of the track (decreasing offset).
    Backward,
    /// Toward the end of the track (increasing offset).
    Forward,
}

/// The input modality driving a drag interaction.
///
/// The modality selects both the amplification applied to travel and the sign
/// convention: pointer drags move content with the pointer, touch swipes
/// follow the natural-scroll convention where swiping content leftward
/// advances forward.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragSource {
    /// A mouse or pen drag.
    Pointer,
    /// A touch swipe.
    Touch,
}

/// A scroll the host should perform on the real track.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ScrollRequest {
    /// Scroll by a signed horizontal delta with smooth, eased motion.
    AnimateBy(f64),
    /// Set the offset immediately, without animation. Emitted mid-drag.
    ///
    /// The value is intentionally unclamped; the environment's scroll
    /// primitive self-clamps to its own bounds.
    JumpTo(f64),
}

/// Pointer affordance the host should show over the track.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cursor {
    /// The resting state: content can be grabbed.
    Grab,
    /// A drag is in progress.
    Grabbing,
}

/// A key press observed on a focused track.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    /// The left arrow key.
    ArrowLeft,
    /// The right arrow key.
    ArrowRight,
    /// Any other key; ignored by the controller.
    Other,
}

/// Host-observed geometry of the track.
///
/// Both extents are in logical pixels. The host re-reads these whenever the
/// layout may have changed (content mutation, viewport resize) and hands them
/// to the controller.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrackMetrics {
    /// Total width of the track content.
    pub scroll_extent: f64,
    /// Width of the visible portion of the track.
    pub viewport_extent: f64,
}

impl TrackMetrics {
    /// Creates metrics from content and viewport extents.
    #[must_use]
    pub fn new(scroll_extent: f64, viewport_extent: f64) -> Self {
        Self {
            scroll_extent,
            viewport_extent,
        }
    }

    /// Returns the largest reachable scroll offset.
    ///
    /// Zero when the content fits entirely inside the viewport.
    #[must_use]
    pub fn max_offset(&self) -> f64 {
        (self.scroll_extent - self.viewport_extent).max(0.0)
    }

    /// Returns `true` if the content overflows the visible width.
    #[must_use]
    pub fn overflows(&self) -> bool {
        self.scroll_extent > self.viewport_extent
    }
}

/// Interactive state of one step button.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ButtonAffordance {
    enabled: bool,
}

impl ButtonAffordance {
    pub(crate) fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Returns `true` if stepping in this button's direction is available.
    #[must_use]
    pub fn enabled(&self) -> bool {
        self.enabled
    }

    /// The opacity the host should render the button at.
    #[must_use]
    pub fn opacity(&self) -> f64 {
        if self.enabled {
            1.0
        } else {
            DISABLED_BUTTON_OPACITY
        }
    }

    /// Whether the button should receive pointer input.
    ///
    /// A de-emphasized button is also inert: clicks on it must not step.
    #[must_use]
    pub fn accepts_pointer(&self) -> bool {
        self.enabled
    }
}

/// The affordance state of both step buttons.
///
/// Recomputed after every scroll and resize; hosts without buttons can ignore
/// it (drag, swipe, and keyboard paths remain wired).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Affordances {
    /// State of the backward (left) button.
    pub backward: ButtonAffordance,
    /// State of the forward (right) button.
    pub forward: ButtonAffordance,
}

impl Affordances {
    pub(crate) fn new(can_step_backward: bool, can_step_forward: bool) -> Self {
        Self {
            backward: ButtonAffordance::new(can_step_backward),
            forward: ButtonAffordance::new(can_step_forward),
        }
    }

    /// Returns the affordance for one direction.
    #[must_use]
    pub fn for_direction(&self, direction: Direction) -> ButtonAffordance {
        match direction {
            Direction::Backward => self.backward,
            Direction::Forward => self.forward,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{DISABLED_BUTTON_OPACITY, Affordances, Direction, TrackMetrics};

    #[test]
    fn max_offset_is_never_negative() {
        let fits = TrackMetrics::new(300.0, 500.0);
        assert_eq!(fits.max_offset(), 0.0);
        assert!(!fits.overflows());

        let overflowing = TrackMetrics::new(2000.0, 500.0);
        assert_eq!(overflowing.max_offset(), 1500.0);
        assert!(overflowing.overflows());
    }

    #[test]
    fn exact_fit_does_not_overflow() {
        let metrics = TrackMetrics::new(500.0, 500.0);
        assert!(!metrics.overflows());
        assert_eq!(metrics.max_offset(), 0.0);
    }

    #[test]
    fn disabled_button_is_dimmed_and_inert() {
        let affordances = Affordances::new(false, true);

        let backward = affordances.for_direction(Direction::Backward);
        assert_eq!(backward.opacity(), DISABLED_BUTTON_OPACITY);
        assert!(!backward.accepts_pointer());

        let forward = affordances.for_direction(Direction::Forward);
        assert_eq!(forward.opacity(), 1.0);
        assert!(forward.accepts_pointer());
    }
}
