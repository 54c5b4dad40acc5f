use crate::config::ConfigError;
use std::io;
use thiserror::Error;

/// Errors surfaced by [`MenuWidget`](crate::MenuWidget) operations
///
/// A failed operation never leaves the widget partially updated.
#[derive(Debug, Error)]
pub enum MenuError {
    #[error("invalid menu configuration: {0}")]
    InvalidConfig(#[from] ConfigError),

    #[error("no field labelled '{label}' in the menu")]
    NotFound { label: String },

    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),
}

/// Coarse classification of a [`MenuError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidConfig,
    NotFound,
    Io,
}

impl MenuError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            MenuError::InvalidConfig(_) => ErrorKind::InvalidConfig,
            MenuError::NotFound { .. } => ErrorKind::NotFound,
            MenuError::Io(_) => ErrorKind::Io,
        }
    }
}
