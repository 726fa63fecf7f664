// Copyright 2025 the Wayside Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scroll-reveal sequencing from viewport-intersection reports.
//!
//! Hosts observe regions entering the viewport (an `IntersectionObserver` in a
//! browser, a scroll-position check elsewhere) and call
//! [`RevealState::on_intersection`] with the region's [`RegionProfile`]. The
//! returned [`RevealEvent`]s tell the host what to mark visible and when:
//! the region itself immediately, explicitly delayed children at their own
//! delays, and index-staggered children at a fixed interval apiece.
//!
//! The state manager remembers which one-shot regions have already revealed
//! (card sequences that should only animate once) and which regions have
//! already started their counters, so repeated intersection reports stay
//! idempotent where the presentation requires it.

use alloc::collections::BTreeSet;
use alloc::vec::Vec;

/// Default interval between index-staggered child reveals.
pub const DEFAULT_STAGGER_MS: u64 = 150;

/// Static description of a revealable region.
#[derive(Clone, Debug, Default)]
pub struct RegionProfile {
    /// Explicit per-child delays in milliseconds, in child order.
    pub child_delays_ms: Vec<u64>,
    /// Number of children revealed one stagger interval apart.
    pub staggered_children: usize,
    /// Whether entering this region starts its counter animations.
    pub has_counters: bool,
    /// Whether the region reveals only on its first intersection.
    pub one_shot: bool,
}

/// An action the host should perform in response to an intersection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealEvent<K> {
    /// Mark the region itself visible now.
    Region(K),
    /// Mark child `index` of `region` visible after `delay_ms`.
    Child {
        /// The region owning the child.
        region: K,
        /// Child position within the region.
        index: usize,
        /// Delay before the child becomes visible.
        delay_ms: u64,
    },
    /// Start the region's counter animations.
    StartCounters(K),
}

/// Tracks which regions have revealed across intersection reports.
#[derive(Clone, Debug)]
pub struct RevealState<K: Copy + Ord> {
    stagger_ms: u64,
    spent: BTreeSet<K>,
    counters_started: BTreeSet<K>,
}

impl<K: Copy + Ord> RevealState<K> {
    /// Creates a reveal sequencer with the default stagger interval.
    #[must_use]
    pub fn new() -> Self {
        Self::with_stagger(DEFAULT_STAGGER_MS)
    }

    /// Creates a reveal sequencer with a custom stagger interval.
    #[must_use]
    pub fn with_stagger(stagger_ms: u64) -> Self {
        Self {
            stagger_ms,
            spent: BTreeSet::new(),
            counters_started: BTreeSet::new(),
        }
    }

    /// Returns the interval between staggered child reveals.
    #[must_use]
    pub fn stagger_ms(&self) -> u64 {
        self.stagger_ms
    }

    /// Processes one intersection report for `region`.
    ///
    /// Returns the reveal actions the host should apply, in order. A one-shot
    /// region that already revealed returns no events; counters start at most
    /// once per region either way.
    pub fn on_intersection(&mut self, region: K, profile: &RegionProfile) -> Vec<RevealEvent<K>> {
        if profile.one_shot && !self.spent.insert(region) {
            return Vec::new();
        }

        let mut events = Vec::new();
        events.push(RevealEvent::Region(region));

        for (index, &delay_ms) in profile.child_delays_ms.iter().enumerate() {
            events.push(RevealEvent::Child {
                region,
                index,
                delay_ms,
            });
        }

        for index in 0..profile.staggered_children {
            events.push(RevealEvent::Child {
                region,
                index,
                delay_ms: self.stagger_ms * index as u64,
            });
        }

        if profile.has_counters && self.counters_started.insert(region) {
            events.push(RevealEvent::StartCounters(region));
        }

        events
    }

    /// Returns `true` if a one-shot region has already revealed.
    #[must_use]
    pub fn is_spent(&self, region: K) -> bool {
        self.spent.contains(&region)
    }
}
