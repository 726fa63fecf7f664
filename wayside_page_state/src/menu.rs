// Copyright 2025 the Wayside Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Mobile menu toggle state.

/// The icon the menu toggle should display.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuIcon {
    /// The hamburger icon, shown while the menu is closed.
    Bars,
    /// The close icon, shown while the menu is open.
    Times,
}

/// Open/closed state of the mobile navigation menu.
#[derive(Clone, Copy, Debug, Default)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    /// Creates a closed menu.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` while the menu is open.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Returns the icon matching the current state.
    #[must_use]
    pub fn icon(&self) -> MenuIcon {
        if self.open {
            MenuIcon::Times
        } else {
            MenuIcon::Bars
        }
    }

    /// Records the toggle's new checked state.
    pub fn set_open(&mut self, open: bool) {
        self.open = open;
    }

    /// Flips the menu and returns the icon to show.
    pub fn toggle(&mut self) -> MenuIcon {
        self.open = !self.open;
        self.icon()
    }

    /// Closes the menu (the anchor-navigation path), returning `true` if it
    /// was open. Hosts also reset the icon when this reports a change.
    pub fn close(&mut self) -> bool {
        let was_open = self.open;
        self.open = false;
        was_open
    }
}

#[cfg(test)]
mod tests {
    use super::{MenuIcon, MenuState};

    #[test]
    fn starts_closed_with_bars_icon() {
        let menu = MenuState::new();
        assert!(!menu.is_open());
        assert_eq!(menu.icon(), MenuIcon::Bars);
    }

    #[test]
    fn toggle_flips_state_and_icon() {
        let mut menu = MenuState::new();
        assert_eq!(menu.toggle(), MenuIcon::Times);
        assert!(menu.is_open());
        assert_eq!(menu.toggle(), MenuIcon::Bars);
        assert!(!menu.is_open());
    }

    #[test]
    fn close_reports_whether_it_changed_anything() {
        let mut menu = MenuState::new();
        assert!(!menu.close());

        menu.set_open(true);
        assert!(menu.close());
        assert_eq!(menu.icon(), MenuIcon::Bars);
    }
}
