// Copyright 2025 the Wayside Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Active-section selection and anchor scroll targets.
//!
//! Two related behaviors for in-page navigation:
//!
//! - [`ScrollSpy`] picks which section's navigation link should be
//!   highlighted for a given scroll position. A section becomes current a
//!   little before its top reaches the viewport top (the activation offset),
//!   and the last section whose activation point has been passed wins.
//! - [`AnchorScroll`] resolves the scroll target for an anchor-link click,
//!   compensating for the fixed header whose height depends on the viewport
//!   breakpoint. Hosts also close the mobile menu on this path (see
//!   [`crate::menu::MenuState::close`]).

/// Default distance above a section top at which it becomes current.
pub const DEFAULT_ACTIVATION_OFFSET: f64 = 200.0;

/// Selects the current section for navigation highlighting.
#[derive(Clone, Copy, Debug)]
pub struct ScrollSpy {
    activation_offset: f64,
}

impl ScrollSpy {
    /// Creates a scroll spy with the default activation offset.
    #[must_use]
    pub fn new() -> Self {
        Self::with_activation_offset(DEFAULT_ACTIVATION_OFFSET)
    }

    /// Creates a scroll spy activating `offset` pixels before a section top.
    #[must_use]
    pub fn with_activation_offset(offset: f64) -> Self {
        Self {
            activation_offset: offset,
        }
    }

    /// Returns the key of the current section, if any.
    ///
    /// `sections` pairs each key with the section's document-space top, in
    /// document order. The last section whose activation point lies at or
    /// above `scroll_y` is current; `None` means the page is above the first
    /// section.
    #[must_use]
    pub fn active_section<K: Copy>(&self, sections: &[(K, f64)], scroll_y: f64) -> Option<K> {
        let mut current = None;
        for &(key, top) in sections {
            if scroll_y >= top - self.activation_offset {
                current = Some(key);
            }
        }
        current
    }
}

impl Default for ScrollSpy {
    fn default() -> Self {
        Self::new()
    }
}

/// Resolves anchor-link clicks to scroll targets under a fixed header.
#[derive(Clone, Copy, Debug)]
pub struct AnchorScroll {
    wide_breakpoint: f64,
    header_offset_wide: f64,
    header_offset_narrow: f64,
}

impl AnchorScroll {
    /// Creates a resolver with the conventional header heights.
    #[must_use]
    pub fn new() -> Self {
        Self {
            wide_breakpoint: 992.0,
            header_offset_wide: 80.0,
            header_offset_narrow: 70.0,
        }
    }

    /// Creates a resolver with custom breakpoint and header heights.
    #[must_use]
    pub fn with_offsets(wide_breakpoint: f64, wide: f64, narrow: f64) -> Self {
        Self {
            wide_breakpoint,
            header_offset_wide: wide,
            header_offset_narrow: narrow,
        }
    }

    /// Returns the header height for the given viewport width.
    #[must_use]
    pub fn header_offset(&self, viewport_width: f64) -> f64 {
        if viewport_width >= self.wide_breakpoint {
            self.header_offset_wide
        } else {
            self.header_offset_narrow
        }
    }

    /// Resolves the document offset to smooth-scroll to.
    ///
    /// `element_top` is the target's position relative to the viewport (a
    /// bounding-rect top); `page_y_offset` is the current scroll position.
    #[must_use]
    pub fn target_offset(&self, element_top: f64, page_y_offset: f64, viewport_width: f64) -> f64 {
        element_top + page_y_offset - self.header_offset(viewport_width)
    }
}

impl Default for AnchorScroll {
    fn default() -> Self {
        Self::new()
    }
}
