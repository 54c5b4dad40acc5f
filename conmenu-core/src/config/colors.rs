//! Head/body colour styling
//!
//! Colours are accepted as two-character ANSI codes such as `"31"` or `"94"`
//! and kept in their wrapped escape form `ESC[0;{code}m`.

use super::error::ConfigError;
use crate::constants::{COLOR_CODE_LEN, DEFAULT_HEAD_CODE};
use std::fmt;

/// Which colour a validation failure refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorSlot {
    Head,
    Body,
}

impl fmt::Display for ColorSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorSlot::Head => f.write_str("head"),
            ColorSlot::Body => f.write_str("body"),
        }
    }
}

/// Wrap a raw code into its terminal styling escape
pub fn wrap_code(code: &str) -> String {
    format!("\x1b[0;{code}m")
}

/// Head colour styles the heading and the selected entry, body colour
/// styles every other entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorPair {
    pub head: String,
    pub body: String,
}

impl ColorPair {
    /// Validate both codes before wrapping either, so a bad body code never
    /// leaves a half-applied pair behind.
    pub fn from_codes(head: &str, body: &str) -> Result<Self, ConfigError> {
        validate_code(ColorSlot::Head, head)?;
        validate_code(ColorSlot::Body, body)?;
        Ok(Self {
            head: wrap_code(head),
            body: wrap_code(body),
        })
    }

    /// Styled head with unstyled body entries
    pub fn head_only(head: &str) -> Result<Self, ConfigError> {
        validate_code(ColorSlot::Head, head)?;
        Ok(Self {
            head: wrap_code(head),
            body: String::new(),
        })
    }
}

impl Default for ColorPair {
    fn default() -> Self {
        Self {
            head: wrap_code(DEFAULT_HEAD_CODE),
            body: String::new(),
        }
    }
}

fn validate_code(slot: ColorSlot, code: &str) -> Result<(), ConfigError> {
    if code.chars().count() != COLOR_CODE_LEN {
        return Err(ConfigError::MalformedColor {
            slot,
            code: code.to_string(),
        });
    }
    Ok(())
}
