// Copyright 2025 the Wayside Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fixed-step frame accumulation over irregular host timestamps.

/// Turns irregular timestamps into a whole number of fixed-duration frames.
///
/// Hosts call [`FrameClock::advance`] with the current monotonic time whenever
/// they get a chance to animate (for example on each animation-frame callback).
/// The clock returns how many whole frames have elapsed since the previous
/// call and carries the remainder forward, so frame counts stay accurate even
/// when callbacks arrive late or bunched together.
#[derive(Clone, Copy, Debug)]
pub struct FrameClock {
    frame_ms: u64,
    last_ms: Option<u64>,
}

impl FrameClock {
    /// The conventional frame duration for 60Hz-style animation.
    pub const DEFAULT_FRAME_MS: u64 = 16;

    /// Creates a frame clock with the default frame duration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_frame_ms(Self::DEFAULT_FRAME_MS)
    }

    /// Creates a frame clock with a custom frame duration in milliseconds.
    ///
    /// A zero duration is treated as one millisecond.
    #[must_use]
    pub fn with_frame_ms(frame_ms: u64) -> Self {
        Self {
            frame_ms: frame_ms.max(1),
            last_ms: None,
        }
    }

    /// Returns the frame duration in milliseconds.
    #[must_use]
    pub fn frame_ms(&self) -> u64 {
        self.frame_ms
    }

    /// Advances the clock to `now_ms`, returning the whole frames elapsed.
    ///
    /// The first call establishes the reference point and returns zero.
    /// Timestamps that move backwards are ignored.
    pub fn advance(&mut self, now_ms: u64) -> u64 {
        let Some(last) = self.last_ms else {
            self.last_ms = Some(now_ms);
            return 0;
        };
        if now_ms <= last {
            return 0;
        }
        let frames = (now_ms - last) / self.frame_ms;
        // Keep the sub-frame remainder by only advancing by whole frames.
        self.last_ms = Some(last + frames * self.frame_ms);
        frames
    }

    /// Resets the clock so the next [`FrameClock::advance`] re-anchors.
    pub fn reset(&mut self) {
        self.last_ms = None;
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}
