use super::colors::ColorSlot;
use thiserror::Error;

/// Errors raised when a width or colour setting is rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("max field width must be positive, got {width}")]
    NonPositiveWidth { width: i64 },

    #[error("{slot} color must be a two-character ANSI code, got {code:?}")]
    MalformedColor { slot: ColorSlot, code: String },
}
