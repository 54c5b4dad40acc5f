//! Console selection menu
//!
//! A titled, bordered list of labelled actions driven from the keyboard:
//! - [`MenuWidget`] - entries, cursor, rendering and the run loop
//! - [`MenuConfig`] - construction-time settings
//! - [`KeyReader`] / [`ScreenClearer`] - terminal collaborators

pub mod config;
pub mod constants;
pub mod error;
pub mod terminal;
pub mod widget;

pub use config::{ColorPair, ColorSlot, ConfigError, Keybinds, MenuConfig};
pub use error::{ErrorKind, MenuError};
pub use terminal::{CrosstermKeyReader, CrosstermScreen, KeyReader, NavAction, ScreenClearer};
pub use widget::{Action, MenuEntry, MenuState, MenuWidget, Step};
