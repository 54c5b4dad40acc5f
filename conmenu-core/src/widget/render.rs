//! Fixed-width, centred menu rendering

use super::MenuWidget;
use crate::config::ConfigError;
use crate::constants::{BORDER_CHAR, NEUTRAL};
use crate::error::MenuError;
use std::io::Write;

impl MenuWidget {
    /// Centre `text` inside `max_field_width` columns.
    ///
    /// Each visible character is wrapped in `style` followed by the neutral
    /// reset. An odd amount of spare room leaves the extra space on the
    /// right. Text wider than the field shows its centred slice: the padding
    /// goes negative and only the columns inside the field are emitted.
    pub fn render_field(&self, text: &str, style: &str) -> String {
        let chars: Vec<char> = text.chars().collect();
        let width = i64::try_from(self.max_field_width).unwrap_or(i64::MAX);
        let len = chars.len() as i64;
        let pad = (width - len) / 2;

        let mut line = String::new();
        for column in 1..=width {
            if column <= pad || column > pad + len {
                line.push(' ');
            } else {
                line.push_str(style);
                line.push(chars[(column - pad - 1) as usize]);
                line.push_str(NEUTRAL);
            }
        }
        line
    }

    /// Write the bordered heading and one boxed line per entry. The selected
    /// entry is framed with `<` `>` and drawn in the head colour.
    pub fn render_menu<W: Write>(&self, out: &mut W) -> Result<(), MenuError> {
        if self.max_field_width == 0 {
            return Err(ConfigError::NonPositiveWidth { width: 0 }.into());
        }

        let border: String = std::iter::repeat_n(BORDER_CHAR, self.border_len()).collect();

        writeln!(out, "{border}")?;
        writeln!(out, "|{}|", self.render_field(&self.heading, &self.colors.head))?;
        writeln!(out, "{border}")?;

        for (index, entry) in self.entries.iter().enumerate() {
            let selected = self.cursor == Some(index);
            let (open, close, style) = if selected {
                ('<', '>', &self.colors.head)
            } else {
                ('|', '|', &self.colors.body)
            };
            writeln!(out, "{open}{}{close}", self.render_field(&entry.label, style))?;
        }

        writeln!(out, "{border}")?;
        Ok(())
    }

    /// Field width plus the two frame characters
    fn border_len(&self) -> usize {
        self.max_field_width.saturating_add(2)
    }

    /// The two instruction lines shown above the menu
    pub(crate) fn write_instructions<W: Write>(&self, out: &mut W) -> Result<(), MenuError> {
        let keys = self.keybinds;
        writeln!(out, "Press {} and {} to move up and down the menu.", keys.up, keys.down)?;
        writeln!(out, "Press {} to select an item.", keys.select)?;
        Ok(())
    }
}
