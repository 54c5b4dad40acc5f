pub mod colors;
pub mod error;
pub mod keybinds;
pub mod menu;

pub use colors::{ColorPair, ColorSlot, wrap_code};
pub use error::ConfigError;
pub use keybinds::Keybinds;
pub use menu::MenuConfig;
