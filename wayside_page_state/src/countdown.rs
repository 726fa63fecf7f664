// Copyright 2025 the Wayside Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Countdown arithmetic toward a target instant.
//!
//! Pure clock math: given a target timestamp and the current time (both epoch
//! milliseconds), split the remaining time into days, hours, minutes, and
//! seconds for display. Once the target has passed the countdown yields
//! nothing, and hosts leave the last rendered segments frozen.

const MS_PER_SECOND: u64 = 1_000;
const MS_PER_MINUTE: u64 = 60 * MS_PER_SECOND;
const MS_PER_HOUR: u64 = 60 * MS_PER_MINUTE;
const MS_PER_DAY: u64 = 24 * MS_PER_HOUR;

/// Zero-padded display width for the days segment.
pub const DAYS_DISPLAY_WIDTH: usize = 3;
/// Zero-padded display width for the hours, minutes, and seconds segments.
pub const SEGMENT_DISPLAY_WIDTH: usize = 2;

/// Remaining time split into display segments.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CountdownParts {
    /// Whole days remaining.
    pub days: u64,
    /// Hours remaining after the days (0..24).
    pub hours: u64,
    /// Minutes remaining after the hours (0..60).
    pub minutes: u64,
    /// Seconds remaining after the minutes (0..60).
    pub seconds: u64,
}

/// A countdown toward one fixed instant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Countdown {
    target_ms: u64,
}

impl Countdown {
    /// Creates a countdown toward `target_ms` (epoch milliseconds).
    #[must_use]
    pub fn new(target_ms: u64) -> Self {
        Self { target_ms }
    }

    /// Returns the target instant in epoch milliseconds.
    #[must_use]
    pub fn target_ms(&self) -> u64 {
        self.target_ms
    }

    /// Splits the remaining time at `now_ms` into display segments.
    ///
    /// Returns `None` once the target has passed (hosts freeze the last
    /// rendered value rather than showing zeros or counting up).
    #[must_use]
    pub fn parts_at(&self, now_ms: u64) -> Option<CountdownParts> {
        if now_ms >= self.target_ms {
            return None;
        }
        let difference = self.target_ms - now_ms;
        Some(CountdownParts {
            days: difference / MS_PER_DAY,
            hours: (difference % MS_PER_DAY) / MS_PER_HOUR,
            minutes: (difference % MS_PER_HOUR) / MS_PER_MINUTE,
            seconds: (difference % MS_PER_MINUTE) / MS_PER_SECOND,
        })
    }

    /// Returns `true` once the target instant has passed.
    #[must_use]
    pub fn is_expired(&self, now_ms: u64) -> bool {
        now_ms >= self.target_ms
    }
}
