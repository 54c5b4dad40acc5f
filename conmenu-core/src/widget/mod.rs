//! Menu widget state
//!
//! Holds the ordered entries, the selection cursor and every display
//! setting. Rendering lives in [`render`], the key loop in [`runner`].

mod entry;
mod render;
mod runner;

pub use entry::{Action, MenuEntry};
pub use runner::{MenuState, Step};

use crate::config::{ColorPair, ConfigError, Keybinds, MenuConfig};
use crate::constants::{DEFAULT_HEADING, DEFAULT_MAX_FIELD_WIDTH};
use crate::error::MenuError;
use tracing::{debug, warn};

/// Keyboard-navigable selection menu
///
/// Whenever `entries` is non-empty the cursor points inside it; when it is
/// empty the cursor is unset. Every structural mutation moves the cursor
/// back to the first entry.
#[derive(Debug, Clone)]
pub struct MenuWidget {
    entries: Vec<MenuEntry>,
    cursor: Option<usize>,
    max_field_width: usize,
    colors: ColorPair,
    heading: String,
    keybinds: Keybinds,
    wait_after_action: bool,
    state: MenuState,
}

impl MenuWidget {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            cursor: None,
            max_field_width: DEFAULT_MAX_FIELD_WIDTH,
            colors: ColorPair::default(),
            heading: DEFAULT_HEADING.to_string(),
            keybinds: Keybinds::default(),
            wait_after_action: true,
            state: MenuState::Idle,
        }
    }

    /// Build a widget from explicit settings, validating width and colours
    pub fn from_config(config: MenuConfig) -> Result<Self, MenuError> {
        let max_field_width = validate_width(config.max_field_width)?;
        let colors = match config.body_color.as_deref() {
            Some(body) => ColorPair::from_codes(&config.head_color, body)?,
            None => ColorPair::head_only(&config.head_color)?,
        };

        debug!(
            width = max_field_width,
            heading = %config.heading,
            "Menu widget configured"
        );

        Ok(Self {
            max_field_width,
            colors,
            heading: config.heading,
            keybinds: config.keybinds,
            wait_after_action: config.wait_after_action,
            ..Self::new()
        })
    }

    // ----------------------------------------------------------------------
    // Configuration
    // ----------------------------------------------------------------------

    pub fn max_field_width(&self) -> usize {
        self.max_field_width
    }

    pub fn set_max_field_width(&mut self, width: i64) -> Result<(), MenuError> {
        let width = validate_width(width).inspect_err(|err| {
            warn!(error = %err, "Rejected max field width");
        })?;
        self.max_field_width = width;
        Ok(())
    }

    /// Head and body colours in their wrapped escape form
    pub fn colors(&self) -> ColorPair {
        self.colors.clone()
    }

    pub fn set_colors(&mut self, head: &str, body: &str) -> Result<(), MenuError> {
        let colors = ColorPair::from_codes(head, body).inspect_err(|err| {
            warn!(error = %err, "Rejected menu colors");
        })?;
        self.colors = colors;
        Ok(())
    }

    pub fn heading(&self) -> String {
        self.heading.clone()
    }

    pub fn set_heading(&mut self, heading: impl Into<String>) {
        self.heading = heading.into();
    }

    pub fn keybinds(&self) -> Keybinds {
        self.keybinds
    }

    pub fn set_up_key(&mut self, key: char) {
        self.keybinds.up = key;
    }

    pub fn set_down_key(&mut self, key: char) {
        self.keybinds.down = key;
    }

    pub fn set_select_key(&mut self, key: char) {
        self.keybinds.select = key;
    }

    pub fn wait_after_action(&self) -> bool {
        self.wait_after_action
    }

    /// Whether the loop waits for one extra keypress after an action returns
    pub fn set_wait_after_action(&mut self, wait: bool) {
        self.wait_after_action = wait;
    }

    pub fn state(&self) -> MenuState {
        self.state
    }

    // ----------------------------------------------------------------------
    // Fields
    // ----------------------------------------------------------------------

    pub fn entries(&self) -> &[MenuEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    pub fn selected_label(&self) -> Option<&str> {
        self.cursor
            .and_then(|index| self.entries.get(index))
            .map(MenuEntry::label)
    }

    /// Append an entry. Labels need not be unique.
    pub fn add_field(&mut self, label: impl Into<String>, action: impl Fn() + 'static) {
        let entry = MenuEntry::new(label, Action::new(action));
        debug!(label = %entry.label, position = self.entries.len(), "Adding menu field");
        self.entries.push(entry);
        self.reset_cursor();
    }

    /// Remove the first entry labelled `label`
    pub fn remove_field(&mut self, label: &str) -> Result<(), MenuError> {
        let index = self.position_of(label)?;
        self.entries.remove(index);
        debug!(label, index, "Removed menu field");
        self.reset_cursor();
        Ok(())
    }

    /// Replace the label and action of the first entry labelled `old_label`,
    /// keeping its position.
    pub fn edit_field(
        &mut self,
        old_label: &str,
        new_label: impl Into<String>,
        action: impl Fn() + 'static,
    ) -> Result<(), MenuError> {
        let index = self.position_of(old_label)?;
        let entry = MenuEntry::new(new_label, Action::new(action));
        debug!(old_label, new_label = %entry.label, index, "Edited menu field");
        self.entries[index] = entry;
        self.reset_cursor();
        Ok(())
    }

    pub fn has_field(&self, label: &str) -> bool {
        self.entries.iter().any(|entry| entry.label == label)
    }

    fn position_of(&self, label: &str) -> Result<usize, MenuError> {
        self.entries
            .iter()
            .position(|entry| entry.label == label)
            .ok_or_else(|| {
                warn!(label, "Menu field not found");
                MenuError::NotFound {
                    label: label.to_string(),
                }
            })
    }

    fn reset_cursor(&mut self) {
        self.cursor = if self.entries.is_empty() { None } else { Some(0) };
    }
}

impl Default for MenuWidget {
    fn default() -> Self {
        Self::new()
    }
}

fn validate_width(width: i64) -> Result<usize, ConfigError> {
    if width <= 0 {
        return Err(ConfigError::NonPositiveWidth { width });
    }
    Ok(usize::try_from(width).unwrap_or(usize::MAX))
}
