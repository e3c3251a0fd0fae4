//! Application State
//!
//! The shared state the input handlers mutate and the render pass reads:
//! the selected hotbar slot, the scrollwheel inversion flag, and the current
//! window sizing. Held in one explicit struct with accessor methods rather
//! than scattered globals.

use crate::game_window::GameWindow;

/// Number of hotbar slots; slot indices are 0..HOTBAR_SLOTS and wrap.
pub const HOTBAR_SLOTS: usize = 9;

pub struct MenuState {
    selected_slot: usize,
    inverted_scrollwheel: bool,
    pub window: GameWindow,
}

impl MenuState {
    pub fn new(window: GameWindow) -> Self {
        MenuState {
            selected_slot: 0,
            inverted_scrollwheel: false,
            window,
        }
    }

    pub fn selected_slot(&self) -> usize {
        self.selected_slot
    }

    /// Selects a slot directly (digit keys). Out-of-range indices are ignored.
    pub fn select_slot(&mut self, slot: usize) {
        if slot < HOTBAR_SLOTS {
            self.selected_slot = slot;
        }
    }

    /// Moves the selection one slot, wrapping modulo the slot count.
    ///
    /// Scrolling up moves forward (slot 8 wraps to 0), scrolling down moves
    /// backward (slot 0 wraps to 8); the inversion flag swaps the direction.
    pub fn scroll_slot(&mut self, up: bool) {
        let forward = up != self.inverted_scrollwheel;
        let step = if forward { 1 } else { HOTBAR_SLOTS - 1 };
        self.selected_slot = (self.selected_slot + step) % HOTBAR_SLOTS;
    }

    pub fn inverted_scrollwheel(&self) -> bool {
        self.inverted_scrollwheel
    }

    /// Flips the inversion flag and returns the new value.
    pub fn toggle_inverted_scrollwheel(&mut self) -> bool {
        self.inverted_scrollwheel = !self.inverted_scrollwheel;
        self.inverted_scrollwheel
    }

    pub fn set_window(&mut self, window: GameWindow) {
        self.window = window;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> MenuState {
        MenuState::new(GameWindow::new(1280, 720, 2))
    }

    #[test]
    fn test_initial_slot_is_zero() {
        assert_eq!(state().selected_slot(), 0);
    }

    #[test]
    fn test_select_slot_in_range() {
        let mut state = state();
        state.select_slot(8);
        assert_eq!(state.selected_slot(), 8);
    }

    #[test]
    fn test_select_slot_out_of_range_ignored() {
        let mut state = state();
        state.select_slot(4);
        state.select_slot(9);
        assert_eq!(state.selected_slot(), 4);
    }

    #[test]
    fn test_scroll_down_wraps_to_last_slot() {
        let mut state = state();
        state.scroll_slot(false);
        assert_eq!(state.selected_slot(), 8);
    }

    #[test]
    fn test_scroll_up_wraps_to_first_slot() {
        let mut state = state();
        state.select_slot(8);
        state.scroll_slot(true);
        assert_eq!(state.selected_slot(), 0);
    }

    #[test]
    fn test_scroll_steps_through_all_slots() {
        let mut state = state();
        for expected in 1..HOTBAR_SLOTS {
            state.scroll_slot(true);
            assert_eq!(state.selected_slot(), expected);
        }
        state.scroll_slot(true);
        assert_eq!(state.selected_slot(), 0);
    }

    #[test]
    fn test_inversion_swaps_scroll_direction() {
        let mut state = state();
        assert!(state.toggle_inverted_scrollwheel());

        // Inverted: scrolling up now moves backward
        state.scroll_slot(true);
        assert_eq!(state.selected_slot(), 8);
        state.scroll_slot(false);
        assert_eq!(state.selected_slot(), 0);

        // Toggling back restores the normal direction
        assert!(!state.toggle_inverted_scrollwheel());
        state.scroll_slot(true);
        assert_eq!(state.selected_slot(), 1);
    }
}
