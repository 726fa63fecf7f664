// Copyright 2025 the Wayside Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drives a carousel through a short simulated session and prints the state a
//! host would render after each interaction.

use kurbo::Point;
use wayside_carousel::{
    CarouselConfig, CarouselController, Direction, DragSource, ScrollRequest, TrackMetrics,
};

fn main() {
    let metrics = TrackMetrics::new(2000.0, 500.0);
    let mut carousel = CarouselController::new(CarouselConfig::default(), 1280.0, metrics);
    let mut offset = 0.0_f64;

    let mut apply = |carousel: &mut CarouselController, request: Option<ScrollRequest>| {
        if let Some(request) = request {
            let target = match request {
                ScrollRequest::AnimateBy(delta) => offset + delta,
                ScrollRequest::JumpTo(to) => to,
            };
            offset = target.clamp(0.0, metrics.max_offset());
            carousel.set_scroll_offset(offset);
        }
        let affordances = carousel.affordances();
        println!(
            "offset {:7.1}  | back {:.1} opacity  | fwd {:.1} opacity",
            offset,
            affordances.backward.opacity(),
            affordances.forward.opacity(),
        );
    };

    println!("-- three forward steps --");
    for _ in 0..3 {
        let request = carousel.step(Direction::Forward);
        apply(&mut carousel, request);
    }

    println!("-- pointer drag back toward the start --");
    carousel.begin_drag(DragSource::Pointer, Point::new(300.0, 80.0));
    for x in [340.0, 420.0, 520.0] {
        let request = carousel.continue_drag(Point::new(x, 80.0));
        apply(&mut carousel, request);
    }
    carousel.end_drag();

    println!("-- touch swipe to the far edge --");
    carousel.begin_drag(DragSource::Touch, Point::new(400.0, 0.0));
    let request = carousel.continue_drag(Point::new(-800.0, 0.0));
    apply(&mut carousel, request);
    carousel.end_drag();
}
