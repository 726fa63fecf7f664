// Copyright 2025 the Wayside Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Wayside Carousel: a headless controller for horizontally scrollable strips.
//!
//! A carousel here is nothing more than a horizontally overflowing strip of
//! content (the *track*), an optional pair of step buttons, and four input
//! modalities that advance through it: button clicks, pointer drags, touch
//! swipes, and arrow keys. [`CarouselController`] owns the state those
//! modalities share and exposes it as pure transitions; it never touches a
//! document tree, a renderer, or a clock.
//!
//! ## Host contract
//!
//! The host (a DOM layer, a widget toolkit, a test harness) is responsible for:
//!
//! - Locating the track and buttons. A region without a track simply gets no
//!   controller; that is an expected absence, not an error.
//! - Applying returned [`ScrollRequest`] values to the real scroll primitive.
//!   [`ScrollRequest::AnimateBy`] asks for smooth, eased motion;
//!   [`ScrollRequest::JumpTo`] is an immediate offset used mid-drag. The
//!   controller never clamps a request: the environment's scroll primitive is
//!   trusted to keep the offset within its own bounds.
//! - Feeding the observed (post-clamp) offset back via
//!   [`CarouselController::set_scroll_offset`] on every scroll event, and the
//!   viewport width via [`CarouselController::set_viewport_width`] after a
//!   debounced resize (see `wayside_timing::Debounce`).
//! - Rendering [`Affordances`]: a button whose direction cannot step is shown
//!   at reduced opacity and made inert to pointer input.
//! - Making the track focusable and labelling it as a navigable region for
//!   assistive technology, and suppressing the device's default action (text
//!   selection, native panning) while [`CarouselController::is_dragging`].
//!
//! ## Minimal example
//!
//! ```rust
//! use wayside_carousel::{
//!     CarouselConfig, CarouselController, Direction, ScrollRequest, TrackMetrics,
//! };
//!
//! // A 2000px strip seen through a 500px viewport, on a wide screen.
//! let metrics = TrackMetrics::new(2000.0, 500.0);
//! let mut carousel = CarouselController::new(CarouselConfig::default(), 1280.0, metrics);
//!
//! // At offset zero only forward stepping is available.
//! assert!(!carousel.affordances().backward.enabled());
//! assert!(carousel.affordances().forward.enabled());
//!
//! // A forward step requests a smooth scroll by the step distance.
//! let request = carousel.step(Direction::Forward);
//! assert_eq!(request, Some(ScrollRequest::AnimateBy(380.0)));
//!
//! // The host applies the request and reports the offset it observed.
//! carousel.set_scroll_offset(380.0);
//! assert!(carousel.affordances().backward.enabled());
//! ```
//!
//! Pointer positions are [`kurbo::Point`]s; only the x coordinate matters for
//! a horizontal track.
//!
//! This crate is `no_std`.

#![no_std]

mod config;
mod controller;
mod types;

pub use config::CarouselConfig;
pub use controller::CarouselController;
pub use types::{
    Affordances, ButtonAffordance, Cursor, DISABLED_BUTTON_OPACITY, Direction, DragSource, Key,
    ScrollRequest, TrackMetrics,
};
