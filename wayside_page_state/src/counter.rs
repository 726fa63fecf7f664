// Copyright 2025 the Wayside Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Frame-driven count-up animation toward a target value.
//!
//! Statistics counters count from zero to a target over a fixed duration,
//! advancing by a constant amount per animation frame. The animation is
//! frame-counted rather than clocked: hosts advance it by whole frames
//! (typically from `wayside_timing::FrameClock`) and render the value of each
//! returned [`CounterFrame`]. Display formatting — locale separators and the
//! trailing "+" on the finished value — stays with the host.

/// Default animation duration in milliseconds.
pub const DEFAULT_DURATION_MS: u64 = 2_000;

/// Default frame duration in milliseconds.
pub const DEFAULT_FRAME_MS: u64 = 16;

/// The value to render after advancing a counter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CounterFrame {
    /// The value to display.
    pub value: u64,
    /// `true` once the target has been reached; the value stays at the
    /// target from then on.
    pub finished: bool,
}

/// A single count-up animation.
#[derive(Clone, Copy, Debug)]
pub struct CounterAnimation {
    target: u64,
    step: f64,
    current: f64,
    finished: bool,
}

impl CounterAnimation {
    /// Creates a counter with the default duration and frame length.
    #[must_use]
    pub fn new(target: u64) -> Self {
        Self::with_timing(target, DEFAULT_DURATION_MS, DEFAULT_FRAME_MS)
    }

    /// Creates a counter with explicit duration and frame length.
    ///
    /// A target of zero finishes immediately.
    #[must_use]
    pub fn with_timing(target: u64, duration_ms: u64, frame_ms: u64) -> Self {
        let frames = (duration_ms / frame_ms.max(1)).max(1);
        Self {
            target,
            step: target as f64 / frames as f64,
            current: 0.0,
            finished: target == 0,
        }
    }

    /// Returns the target value.
    #[must_use]
    pub fn target(&self) -> u64 {
        self.target
    }

    /// Returns `true` once the counter has reached its target.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Advances by one frame and returns the value to render.
    pub fn tick(&mut self) -> CounterFrame {
        self.advance(1)
    }

    /// Advances by `frames` whole frames and returns the value to render.
    ///
    /// Once finished, further advancing keeps returning the target.
    pub fn advance(&mut self, frames: u64) -> CounterFrame {
        if !self.finished {
            self.current += self.step * frames as f64;
            if self.current >= self.target as f64 {
                self.finished = true;
            }
        }
        #[expect(
            clippy::cast_possible_truncation,
            reason = "truncation is the display convention: 1234.9 shows as 1234"
        )]
        let value = if self.finished {
            self.target
        } else {
            self.current as u64
        };
        CounterFrame {
            value,
            finished: self.finished,
        }
    }
}
