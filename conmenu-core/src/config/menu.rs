use super::keybinds::Keybinds;
use crate::constants::{DEFAULT_HEAD_CODE, DEFAULT_HEADING, DEFAULT_MAX_FIELD_WIDTH};

/// Settings applied when building a [`MenuWidget`](crate::MenuWidget)
///
/// Colours are raw two-character codes here; `None` for the body colour
/// leaves non-selected entries unstyled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuConfig {
    pub max_field_width: i64,
    pub heading: String,
    pub head_color: String,
    pub body_color: Option<String>,
    pub keybinds: Keybinds,
    pub wait_after_action: bool,
}

impl MenuConfig {
    pub fn with_max_field_width(mut self, width: i64) -> Self {
        self.max_field_width = width;
        self
    }

    pub fn with_heading(mut self, heading: impl Into<String>) -> Self {
        self.heading = heading.into();
        self
    }

    pub fn with_colors(mut self, head: impl Into<String>, body: impl Into<String>) -> Self {
        self.head_color = head.into();
        self.body_color = Some(body.into());
        self
    }

    pub fn with_keybinds(mut self, keybinds: Keybinds) -> Self {
        self.keybinds = keybinds;
        self
    }

    pub fn with_wait_after_action(mut self, wait: bool) -> Self {
        self.wait_after_action = wait;
        self
    }
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            max_field_width: DEFAULT_MAX_FIELD_WIDTH as i64,
            heading: DEFAULT_HEADING.to_string(),
            head_color: DEFAULT_HEAD_CODE.to_string(),
            body_color: None,
            keybinds: Keybinds::default(),
            wait_after_action: true,
        }
    }
}
