// Copyright 2025 the Wayside Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Wayside Timing: host-agnostic debounce and frame-step timing primitives.
//!
//! UI hosts own the clock. This crate never reads time itself; every operation
//! takes a caller-supplied monotonic timestamp in milliseconds. That keeps the
//! primitives deterministic and directly testable: a test is just a sequence of
//! timestamps.
//!
//! Two primitives are provided:
//!
//! - [`Debounce`]: a trailing-edge quiet window. Each [`Debounce::notify`]
//!   restarts the window; [`Debounce::fire`] reports (once) when the window has
//!   elapsed with no further notifications. Typical use is collapsing a burst
//!   of viewport resize events into a single recomputation.
//! - [`FrameClock`]: converts irregular host timestamps into a whole number of
//!   fixed-duration frames, carrying the remainder forward. Typical use is
//!   driving stepped animations (counters, staggered reveals) without the host
//!   owning the remainder arithmetic.
//!
//! ## Minimal example
//!
//! ```rust
//! use wayside_timing::Debounce;
//!
//! let mut debounce = Debounce::new(250);
//!
//! // A burst of resize events inside the quiet window.
//! debounce.notify(1_000);
//! debounce.notify(1_050);
//! debounce.notify(1_090);
//!
//! // Nothing fires until 250ms after the *last* notification.
//! assert!(!debounce.fire(1_200));
//! assert!(debounce.fire(1_340));
//!
//! // The deadline is consumed; it does not fire twice.
//! assert!(!debounce.fire(2_000));
//! ```
//!
//! This crate is `no_std` compatible.

#![no_std]

mod debounce;
mod frame_clock;

pub use debounce::Debounce;
pub use frame_clock::FrameClock;
