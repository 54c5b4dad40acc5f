//! Up/down/select key bindings

use crate::constants::{DEFAULT_DOWN_KEY, DEFAULT_SELECT_KEY, DEFAULT_UP_KEY};
use crate::terminal::NavAction;

/// The three characters that drive the menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Keybinds {
    pub up: char,
    pub down: char,
    pub select: char,
}

impl Keybinds {
    pub fn new(up: char, down: char, select: char) -> Self {
        Self { up, down, select }
    }

    /// Classify a raw key. Up wins over down, down over select, when
    /// bindings collide.
    pub fn action_for(&self, key: char) -> NavAction {
        if key == self.up {
            NavAction::Up
        } else if key == self.down {
            NavAction::Down
        } else if key == self.select {
            NavAction::Select
        } else {
            NavAction::None
        }
    }
}

impl Default for Keybinds {
    fn default() -> Self {
        Self::new(DEFAULT_UP_KEY, DEFAULT_DOWN_KEY, DEFAULT_SELECT_KEY)
    }
}
