// Copyright 2025 the Wayside Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Modal image viewer state with wraparound navigation.
//!
//! [`LightboxState`] owns the image list and the current index for one modal
//! viewer. Hosts open it with the images of the section the user clicked in,
//! query [`LightboxState::current_image`] to render, and forward key presses
//! and backdrop clicks. While open, the page body should not scroll; hosts
//! read that through [`LightboxState::body_scroll_locked`].

use alloc::string::String;
use alloc::vec::Vec;

/// One image the lightbox can display.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LightboxImage {
    /// Source of the full-size image.
    pub src: String,
    /// Caption shown under the image.
    pub caption: String,
}

impl LightboxImage {
    /// Creates an image entry.
    pub fn new(src: impl Into<String>, caption: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            caption: caption.into(),
        }
    }
}

/// A key press observed while routing to the lightbox.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LightboxKey {
    /// Closes the viewer.
    Escape,
    /// Navigates to the previous image.
    ArrowLeft,
    /// Navigates to the next image.
    ArrowRight,
    /// Any other key; ignored.
    Other,
}

/// State for one modal image viewer.
#[derive(Clone, Debug, Default)]
pub struct LightboxState {
    images: Vec<LightboxImage>,
    current: usize,
    open: bool,
}

impl LightboxState {
    /// Creates a closed, empty lightbox.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens the viewer on `images`, starting at `index`.
    ///
    /// An out-of-range index is clamped to the last image. Opening with no
    /// images leaves the viewer closed.
    pub fn open(&mut self, images: Vec<LightboxImage>, index: usize) {
        if images.is_empty() {
            return;
        }
        self.current = index.min(images.len() - 1);
        self.images = images;
        self.open = true;
    }

    /// Closes the viewer. The image list is retained for reopening.
    pub fn close(&mut self) {
        self.open = false;
    }

    /// Returns `true` while the viewer is showing.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Returns `true` while the host should prevent page scrolling.
    #[must_use]
    pub fn body_scroll_locked(&self) -> bool {
        self.open
    }

    /// Returns the image currently displayed, if open.
    #[must_use]
    pub fn current_image(&self) -> Option<&LightboxImage> {
        self.open.then(|| &self.images[self.current])
    }

    /// Returns the index of the current image.
    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// Moves by `delta` images, wrapping around at both ends.
    ///
    /// A no-op while closed.
    pub fn navigate(&mut self, delta: isize) {
        if !self.open || self.images.is_empty() {
            return;
        }
        let len = self.images.len() as isize;
        let mut next = self.current as isize + delta;
        if next < 0 {
            next = len - 1;
        }
        if next >= len {
            next = 0;
        }
        // Wrapped into 0..len above.
        self.current = next as usize;
    }

    /// Handles a key press, returning `true` if it was consumed.
    ///
    /// Keys are ignored while the viewer is closed.
    pub fn on_key(&mut self, key: LightboxKey) -> bool {
        if !self.open {
            return false;
        }
        match key {
            LightboxKey::Escape => {
                self.close();
                true
            }
            LightboxKey::ArrowLeft => {
                self.navigate(-1);
                true
            }
            LightboxKey::ArrowRight => {
                self.navigate(1);
                true
            }
            LightboxKey::Other => false,
        }
    }

    /// Handles a click on the viewer, closing when it hit the backdrop.
    ///
    /// Clicks on the image or caption (`on_backdrop == false`) keep the
    /// viewer open.
    pub fn on_click(&mut self, on_backdrop: bool) -> bool {
        if self.open && on_backdrop {
            self.close();
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;
    use alloc::vec::Vec;

    use super::{LightboxImage, LightboxKey, LightboxState};

    fn three_images() -> Vec<LightboxImage> {
        vec![
            LightboxImage::new("a.jpg", "one"),
            LightboxImage::new("b.jpg", "two"),
            LightboxImage::new("c.jpg", "three"),
        ]
    }

    #[test]
    fn open_shows_requested_image_and_locks_scroll() {
        let mut lightbox = LightboxState::new();
        lightbox.open(three_images(), 1);

        assert!(lightbox.is_open());
        assert!(lightbox.body_scroll_locked());
        assert_eq!(lightbox.current_image().unwrap().caption, "two");
    }

    #[test]
    fn open_with_out_of_range_index_clamps() {
        let mut lightbox = LightboxState::new();
        lightbox.open(three_images(), 99);
        assert_eq!(lightbox.current_index(), 2);
    }

    #[test]
    fn open_with_no_images_stays_closed() {
        let mut lightbox = LightboxState::new();
        lightbox.open(Vec::new(), 0);
        assert!(!lightbox.is_open());
        assert_eq!(lightbox.current_image(), None);
    }

    #[test]
    fn navigation_wraps_both_ways() {
        let mut lightbox = LightboxState::new();
        lightbox.open(three_images(), 0);

        lightbox.navigate(-1);
        assert_eq!(lightbox.current_index(), 2);

        lightbox.navigate(1);
        assert_eq!(lightbox.current_index(), 0);
    }

    #[test]
    fn keys_are_ignored_while_closed() {
        let mut lightbox = LightboxState::new();
        assert!(!lightbox.on_key(LightboxKey::Escape));
        assert!(!lightbox.on_key(LightboxKey::ArrowRight));
    }

    #[test]
    fn escape_closes_and_unlocks_scroll() {
        let mut lightbox = LightboxState::new();
        lightbox.open(three_images(), 0);

        assert!(lightbox.on_key(LightboxKey::Escape));
        assert!(!lightbox.is_open());
        assert!(!lightbox.body_scroll_locked());
        assert_eq!(lightbox.current_image(), None);
    }

    #[test]
    fn arrow_keys_navigate() {
        let mut lightbox = LightboxState::new();
        lightbox.open(three_images(), 0);

        assert!(lightbox.on_key(LightboxKey::ArrowRight));
        assert_eq!(lightbox.current_index(), 1);
        assert!(lightbox.on_key(LightboxKey::ArrowLeft));
        assert_eq!(lightbox.current_index(), 0);
        assert!(!lightbox.on_key(LightboxKey::Other));
    }

    #[test]
    fn backdrop_click_closes_but_content_click_does_not() {
        let mut lightbox = LightboxState::new();
        lightbox.open(three_images(), 0);

        assert!(!lightbox.on_click(false));
        assert!(lightbox.is_open());

        assert!(lightbox.on_click(true));
        assert!(!lightbox.is_open());
    }

    #[test]
    fn reopening_after_close_restores_viewing() {
        let mut lightbox = LightboxState::new();
        lightbox.open(three_images(), 2);
        lightbox.close();

        lightbox.open(three_images(), 0);
        assert_eq!(lightbox.current_image().unwrap().src, "a.jpg");
    }
}
