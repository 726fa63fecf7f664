// Copyright 2025 the Wayside Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Trailing-edge debounce over caller-supplied timestamps.

/// Collapses a burst of events into a single firing after a quiet window.
///
/// Each call to [`Debounce::notify`] restarts the window, invalidating any
/// pending deadline. [`Debounce::fire`] returns `true` exactly once per burst,
/// the first time it is polled at or after the deadline.
///
/// Hosts that schedule wakeups (rather than polling) can read the pending
/// deadline via [`Debounce::deadline`].
#[derive(Clone, Copy, Debug)]
pub struct Debounce {
    quiet_ms: u64,
    deadline: Option<u64>,
}

impl Debounce {
    /// Creates a debouncer with the given quiet window in milliseconds.
    #[must_use]
    pub fn new(quiet_ms: u64) -> Self {
        Self {
            quiet_ms,
            deadline: None,
        }
    }

    /// Returns the configured quiet window in milliseconds.
    #[must_use]
    pub fn quiet_ms(&self) -> u64 {
        self.quiet_ms
    }

    /// Records an event at `now_ms`, restarting the quiet window.
    ///
    /// Any previously pending deadline is replaced, so only the last event in
    /// a burst determines when [`Debounce::fire`] reports.
    pub fn notify(&mut self, now_ms: u64) {
        self.deadline = Some(now_ms.saturating_add(self.quiet_ms));
    }

    /// Reports whether the quiet window has elapsed, consuming the deadline.
    ///
    /// Returns `true` at most once per burst. Polling before the deadline, or
    /// when no event is pending, returns `false` and leaves state untouched.
    pub fn fire(&mut self, now_ms: u64) -> bool {
        match self.deadline {
            Some(deadline) if now_ms >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    /// Returns the pending deadline, if an event is waiting on the quiet window.
    #[must_use]
    pub fn deadline(&self) -> Option<u64> {
        self.deadline
    }

    /// Returns `true` if an event is pending.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Drops any pending deadline without firing.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }
}

#[cfg(test)]
mod tests {
    use super::Debounce;

    #[test]
    fn fresh_debounce_never_fires() {
        let mut debounce = Debounce::new(250);
        assert!(!debounce.fire(0));
        assert!(!debounce.fire(u64::MAX));
        assert!(!debounce.is_pending());
    }

    #[test]
    fn fires_once_after_quiet_window() {
        let mut debounce = Debounce::new(250);
        debounce.notify(100);

        assert!(!debounce.fire(349));
        assert!(debounce.fire(350));
        assert!(!debounce.fire(351));
    }

    #[test]
    fn burst_collapses_to_single_firing() {
        let mut debounce = Debounce::new(250);

        // Ten events within 100ms.
        for i in 0..10 {
            debounce.notify(1_000 + i * 11);
        }

        // Last event at 1099; deadline at 1349.
        assert!(!debounce.fire(1_348));
        assert!(debounce.fire(1_349));
        assert!(!debounce.fire(1_500));
    }

    #[test]
    fn notify_restarts_pending_window() {
        let mut debounce = Debounce::new(250);
        debounce.notify(0);
        assert_eq!(debounce.deadline(), Some(250));

        // A later event pushes the deadline out.
        debounce.notify(200);
        assert_eq!(debounce.deadline(), Some(450));
        assert!(!debounce.fire(250));
        assert!(debounce.fire(450));
    }

    #[test]
    fn cancel_drops_pending_deadline() {
        let mut debounce = Debounce::new(250);
        debounce.notify(0);
        debounce.cancel();

        assert!(!debounce.is_pending());
        assert!(!debounce.fire(1_000));
    }

    #[test]
    fn deadline_saturates_near_u64_max() {
        let mut debounce = Debounce::new(250);
        debounce.notify(u64::MAX - 10);
        assert_eq!(debounce.deadline(), Some(u64::MAX));
    }
}
