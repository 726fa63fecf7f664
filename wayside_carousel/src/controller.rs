// Copyright 2025 the Wayside Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Point;

use crate::config::CarouselConfig;
use crate::types::{Affordances, Cursor, Direction, DragSource, Key, ScrollRequest, TrackMetrics};

/// Captured coordinates for an in-progress drag.
///
/// Only meaningful while a drag is active; every drag-end path (pointer up,
/// pointer leave, touch end) discards it.
#[derive(Clone, Copy, Debug)]
struct DragCapture {
    source: DragSource,
    anchor_x: f64,
    captured_offset: f64,
}

/// Headless interaction controller for one horizontally scrollable strip.
///
/// The controller owns the state shared by all four input modalities (button
/// steps, pointer drag, touch swipe, arrow keys) and keeps the step-button
/// [`Affordances`] synchronized with the scroll position the host reports.
/// Construction performs one immediate affordance recomputation so the initial
/// button state matches the initial offset before any interaction.
///
/// Controllers are independent: a page constructs one per scrollable region it
/// finds and nothing is shared between them. See the crate docs for the full
/// host contract.
#[derive(Clone, Debug)]
pub struct CarouselController {
    config: CarouselConfig,
    metrics: TrackMetrics,
    viewport_width: f64,
    offset: f64,
    step_distance: f64,
    drag: Option<DragCapture>,
    affordances: Affordances,
}

impl CarouselController {
    /// Creates a controller for a track with the given geometry.
    ///
    /// `viewport_width` is the page viewport (it selects the step distance);
    /// `metrics` describe the track itself. The initial offset is zero.
    #[must_use]
    pub fn new(config: CarouselConfig, viewport_width: f64, metrics: TrackMetrics) -> Self {
        let mut controller = Self {
            step_distance: config.step_distance_for(viewport_width),
            config,
            metrics,
            viewport_width,
            offset: 0.0,
            drag: None,
            affordances: Affordances::new(false, false),
        };
        controller.recompute_affordances();
        controller
    }

    /// Returns the active configuration.
    #[must_use]
    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    /// Returns the track geometry last reported by the host.
    #[must_use]
    pub fn metrics(&self) -> TrackMetrics {
        self.metrics
    }

    /// Returns the scroll offset last reported by the host.
    #[must_use]
    pub fn offset(&self) -> f64 {
        self.offset
    }

    /// Returns the current per-step distance in pixels.
    #[must_use]
    pub fn step_distance(&self) -> f64 {
        self.step_distance
    }

    /// Returns the current step-button affordances.
    #[must_use]
    pub fn affordances(&self) -> Affordances {
        self.affordances
    }

    /// Returns `true` while a drag or swipe is in progress.
    ///
    /// Hosts suppress the device's default action (text selection, native
    /// panning) while this holds.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Requests one discrete step in `direction`.
    ///
    /// Returns a smooth scroll by the signed step distance, or `None` when the
    /// affordance for that direction is off (a dimmed button is inert, and the
    /// keyboard path is gated identically). Rapid repeated steps are merged by
    /// the environment's smooth-scroll primitive; no debouncing happens here.
    pub fn step(&mut self, direction: Direction) -> Option<ScrollRequest> {
        if !self.affordances.for_direction(direction).enabled() {
            return None;
        }
        let delta = match direction {
            Direction::Backward => -self.step_distance,
            Direction::Forward => self.step_distance,
        };
        Some(ScrollRequest::AnimateBy(delta))
    }

    /// Handles a key press on the focused track.
    ///
    /// Arrow keys map to [`CarouselController::step`]; anything else is
    /// ignored.
    pub fn on_key(&mut self, key: Key) -> Option<ScrollRequest> {
        match key {
            Key::ArrowLeft => self.step(Direction::Backward),
            Key::ArrowRight => self.step(Direction::Forward),
            Key::Other => None,
        }
    }

    /// Begins a drag at the given pointer position.
    ///
    /// Captures the anchor x and the current offset. Starting a new drag
    /// replaces any drag already in progress. Returns the cursor the host
    /// should show (pointer drags switch to a grabbing indicator; touch has no
    /// cursor).
    pub fn begin_drag(&mut self, source: DragSource, position: Point) -> Option<Cursor> {
        self.drag = Some(DragCapture {
            source,
            anchor_x: position.x,
            captured_offset: self.offset,
        });
        match source {
            DragSource::Pointer => Some(Cursor::Grabbing),
            DragSource::Touch => None,
        }
    }

    /// Continues an active drag, returning the offset the track should jump to.
    ///
    /// A no-op (returns `None`) when no drag is active. Only the x coordinate
    /// of `position` is used. The returned offset is unclamped; the
    /// environment's scroll primitive self-clamps.
    pub fn continue_drag(&mut self, position: Point) -> Option<ScrollRequest> {
        let drag = self.drag?;
        let target = match drag.source {
            DragSource::Pointer => {
                let walk = (position.x - drag.anchor_x) * self.config.pointer_drag_sensitivity;
                drag.captured_offset - walk
            }
            DragSource::Touch => {
                // Natural-scroll convention: swiping content leftward
                // advances forward.
                let walk = (drag.anchor_x - position.x) * self.config.touch_swipe_sensitivity;
                drag.captured_offset + walk
            }
        };
        Some(ScrollRequest::JumpTo(target))
    }

    /// Ends the active drag, if any, invalidating the captured anchor.
    ///
    /// Pointer up, pointer leave, and touch end all funnel here. Returns the
    /// resting cursor.
    pub fn end_drag(&mut self) -> Cursor {
        self.drag = None;
        Cursor::Grab
    }

    /// Records the offset the host observed after the environment clamped.
    ///
    /// Call this from every scroll event on the track; affordances are
    /// recomputed in place.
    pub fn set_scroll_offset(&mut self, offset: f64) {
        self.offset = offset;
        self.recompute_affordances();
    }

    /// Records a new viewport width, recomputing the step distance.
    ///
    /// Hosts call this once per resize burst, after the configured debounce
    /// window ([`CarouselConfig::resize_debounce_ms`]) has elapsed.
    pub fn set_viewport_width(&mut self, viewport_width: f64) {
        self.viewport_width = viewport_width;
        self.step_distance = self.config.step_distance_for(viewport_width);
        self.recompute_affordances();
    }

    /// Records re-measured track geometry, recomputing affordances.
    pub fn set_metrics(&mut self, metrics: TrackMetrics) {
        self.metrics = metrics;
        self.recompute_affordances();
    }

    /// Recomputes both affordances from the current offset and geometry.
    ///
    /// Idempotent: with no intervening offset or geometry change, repeated
    /// calls produce identical state. While the content overflows, at least
    /// one direction stays available.
    pub fn recompute_affordances(&mut self) {
        let tolerance = self.config.affordance_tolerance;
        let max_offset = self.metrics.max_offset();

        let mut backward = self.offset > tolerance;
        let mut forward = self.offset < max_offset - tolerance;

        if self.metrics.overflows() && !backward && !forward {
            // Overflow smaller than the tolerance band at both edges: keep
            // whichever direction has more room.
            if max_offset - self.offset >= self.offset {
                forward = true;
            } else {
                backward = true;
            }
        }

        self.affordances = Affordances::new(backward, forward);
    }
}
