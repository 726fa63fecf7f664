// Copyright 2025 the Wayside Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! End-to-end scenarios driving a [`CarouselController`] through a simulated
//! host: the harness plays the environment's role (clamping scroll offsets,
//! echoing them back, debouncing resizes) exactly as a real page would.

use kurbo::Point;
use wayside_carousel::{
    CarouselConfig, CarouselController, Direction, DragSource, Key, ScrollRequest, TrackMetrics,
};
use wayside_timing::Debounce;

/// Minimal stand-in for the environment owning the real scrollable track.
struct Host {
    carousel: CarouselController,
    metrics: TrackMetrics,
    /// The environment's actual (clamped) scroll position.
    scroll_offset: f64,
}

impl Host {
    fn new(viewport_width: f64, metrics: TrackMetrics) -> Self {
        Self {
            carousel: CarouselController::new(CarouselConfig::default(), viewport_width, metrics),
            metrics,
            scroll_offset: 0.0,
        }
    }

    /// Applies a request the way a native scroll primitive would: clamped to
    /// the track's bounds, then reported back through the scroll event.
    fn apply(&mut self, request: Option<ScrollRequest>) {
        let Some(request) = request else { return };
        let target = match request {
            ScrollRequest::AnimateBy(delta) => self.scroll_offset + delta,
            ScrollRequest::JumpTo(offset) => offset,
        };
        self.scroll_offset = target.clamp(0.0, self.metrics.max_offset());
        self.carousel.set_scroll_offset(self.scroll_offset);
    }
}

#[test]
fn forward_steps_walk_to_the_far_edge() {
    // scroll_extent=2000, viewport=500, so max offset 1500 with step 380.
    let mut host = Host::new(1280.0, TrackMetrics::new(2000.0, 500.0));

    assert!(!host.carousel.affordances().backward.enabled());
    assert!(host.carousel.affordances().forward.enabled());

    let request = host.carousel.step(Direction::Forward);
    host.apply(request);
    assert_eq!(host.scroll_offset, 380.0);
    assert!(host.carousel.affordances().backward.enabled());
    assert!(host.carousel.affordances().forward.enabled());

    for _ in 0..3 {
        let request = host.carousel.step(Direction::Forward);
        host.apply(request);
    }

    // 4 * 380 = 1520, clamped by the environment to 1500.
    assert_eq!(host.scroll_offset, 1500.0);
    assert!(host.carousel.affordances().backward.enabled());
    assert!(!host.carousel.affordances().forward.enabled());

    // The far-edge button is inert: a fifth step produces no request.
    assert_eq!(host.carousel.step(Direction::Forward), None);
}

#[test]
fn arrow_key_and_button_move_identically() {
    let mut by_button = Host::new(1280.0, TrackMetrics::new(2000.0, 500.0));
    let mut by_key = Host::new(1280.0, TrackMetrics::new(2000.0, 500.0));

    let request = by_button.carousel.step(Direction::Forward);
    by_button.apply(request);

    let request = by_key.carousel.on_key(Key::ArrowRight);
    by_key.apply(request);

    assert_eq!(by_button.scroll_offset, by_key.scroll_offset);
    assert_eq!(by_button.scroll_offset, 380.0);
}

#[test]
fn pointer_drag_round_trip() {
    let mut host = Host::new(1280.0, TrackMetrics::new(2000.0, 500.0));
    host.apply(Some(ScrollRequest::JumpTo(500.0)));

    host.carousel
        .begin_drag(DragSource::Pointer, Point::new(500.0, 120.0));

    // Drag from x=500 to x=420: Δ=-80 at sensitivity 2.0 scrolls +160.
    let request = host.carousel.continue_drag(Point::new(420.0, 120.0));
    host.apply(request);
    assert_eq!(host.scroll_offset, 660.0);

    host.carousel.end_drag();
    assert!(!host.carousel.is_dragging());
}

#[test]
fn drag_net_change_scales_with_sensitivity_only() {
    let mut host = Host::new(1280.0, TrackMetrics::new(4000.0, 500.0));
    host.apply(Some(ScrollRequest::JumpTo(1000.0)));

    host.carousel
        .begin_drag(DragSource::Touch, Point::new(250.0, 0.0));

    // Intermediate moves do not accumulate; only the current displacement
    // from the anchor matters.
    let request = host.carousel.continue_drag(Point::new(240.0, 0.0));
    host.apply(request);
    let request = host.carousel.continue_drag(Point::new(150.0, 0.0));
    host.apply(request);

    // Net Δ = -100 at touch sensitivity 1.5 → +150 from the captured offset.
    assert_eq!(host.scroll_offset, 1150.0);
}

#[test]
fn environment_clamps_runaway_drags() {
    let mut host = Host::new(1280.0, TrackMetrics::new(2000.0, 500.0));

    host.carousel
        .begin_drag(DragSource::Pointer, Point::new(0.0, 0.0));
    let request = host.carousel.continue_drag(Point::new(2_000.0, 0.0));
    host.apply(request);

    // The controller asked for a negative offset; the environment pinned it.
    assert_eq!(host.scroll_offset, 0.0);
    assert!(!host.carousel.affordances().backward.enabled());
}

#[test]
fn resize_burst_recomputes_once_after_quiet_window() {
    let mut host = Host::new(1280.0, TrackMetrics::new(2000.0, 500.0));
    let mut debounce = Debounce::new(host.carousel.config().resize_debounce_ms);
    let mut recomputations = 0;

    // Ten resize events inside 100ms, ending on a narrow viewport.
    let mut now = 10_000;
    for width in [1200.0, 1150.0, 1100.0, 1050.0, 1000.0, 950.0, 900.0, 850.0, 820.0, 800.0] {
        debounce.notify(now);
        if debounce.fire(now) {
            host.carousel.set_viewport_width(width);
            recomputations += 1;
        }
        now += 11;
    }
    assert_eq!(recomputations, 0);
    assert_eq!(host.carousel.step_distance(), 380.0);

    // Quiet window elapses past the last event.
    now += 250;
    if debounce.fire(now) {
        host.carousel.set_viewport_width(800.0);
        recomputations += 1;
    }
    assert_eq!(recomputations, 1);
    assert_eq!(host.carousel.step_distance(), 300.0);

    // Nothing further fires without new events.
    assert!(!debounce.fire(now + 10_000));
}

#[test]
fn strip_that_fits_has_no_available_direction() {
    let host = Host::new(1280.0, TrackMetrics::new(480.0, 500.0));
    assert!(!host.carousel.affordances().backward.enabled());
    assert!(!host.carousel.affordances().forward.enabled());
}
