// Copyright 2025 the Wayside Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Wayside Page State: common interaction state managers for informational pages.
//!
//! Multi-page sites repeat the same handful of presentational behaviors:
//! sections fading in as they scroll into view, an image lightbox, animated
//! statistics counters, an event countdown, a back-to-top control, a mobile
//! menu, and active-link highlighting. This crate collects those behaviors as
//! small, focused state machines, one module per interaction pattern:
//!
//! - [`reveal`]: sequence visibility reveals (with staggered child delays) from
//!   viewport-intersection reports
//! - [`lightbox`]: modal image viewer state with wraparound navigation
//! - [`counter`]: frame-driven count-up animation toward a target value
//! - [`countdown`]: split a future instant into days/hours/minutes/seconds
//! - [`back_to_top`]: threshold-based visibility for a back-to-top control
//! - [`menu`]: mobile menu open/close state and its icon
//! - [`scroll_spy`]: active-section selection and anchor scroll targets
//!
//! ## Design Philosophy
//!
//! Each state manager is:
//!
//! - **Minimal and focused**: one interaction pattern per module
//! - **Stateful but simple**: just enough state to compute transitions
//! - **Host-agnostic**: no document tree, renderer, or clock access — hosts
//!   feed in observations (intersection reports, scroll positions, timestamps)
//!   and apply the returned events or queries to their own presentation layer
//!
//! Every mutable value these behaviors need lives in an explicit instance
//! owned by the page, never in module-level state. A page constructs the
//! managers it needs once and passes them by reference to whichever handlers
//! use them.
//!
//! ## Usage Patterns
//!
//! ### Lightbox
//!
//! ```rust
//! use wayside_page_state::lightbox::{LightboxImage, LightboxKey, LightboxState};
//!
//! let images = vec![
//!     LightboxImage::new("a.jpg", "Morning assembly"),
//!     LightboxImage::new("b.jpg", "Evening program"),
//! ];
//!
//! let mut lightbox = LightboxState::new();
//! lightbox.open(images, 1);
//! assert!(lightbox.body_scroll_locked());
//!
//! // Arrow navigation wraps around at both ends.
//! lightbox.on_key(LightboxKey::ArrowRight);
//! assert_eq!(lightbox.current_image().unwrap().src, "a.jpg");
//!
//! lightbox.on_key(LightboxKey::Escape);
//! assert!(!lightbox.is_open());
//! ```
//!
//! ### Reveal sequencing
//!
//! ```rust
//! use wayside_page_state::reveal::{RegionProfile, RevealEvent, RevealState};
//!
//! let mut reveal = RevealState::new();
//! let profile = RegionProfile {
//!     staggered_children: 2,
//!     ..RegionProfile::default()
//! };
//!
//! let events = reveal.on_intersection("cards", &profile);
//! assert_eq!(
//!     events,
//!     vec![
//!         RevealEvent::Region("cards"),
//!         RevealEvent::Child { region: "cards", index: 0, delay_ms: 0 },
//!         RevealEvent::Child { region: "cards", index: 1, delay_ms: 150 },
//!     ]
//! );
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod back_to_top;
pub mod countdown;
pub mod counter;
pub mod lightbox;
pub mod menu;
pub mod reveal;
pub mod scroll_spy;
