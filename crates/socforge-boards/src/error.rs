//! Board lookup and parsing errors.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur resolving or loading board descriptors.
#[derive(Debug, Error)]
pub enum BoardError {
    /// The normalized board name is not in the registry.
    #[error("unknown board: '{name}'. Use --list-boards to see supported boards.")]
    UnknownBoard { name: String },

    /// TOML deserialization error in a board file.
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// TOML serialization error.
    #[error("TOML serialization error: {0}")]
    TomlSer(#[from] toml::ser::Error),

    /// I/O error reading a board file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Board file not found.
    #[error("board file not found: {}", path.display())]
    NotFound { path: PathBuf },

    /// Structural problem in a board definition.
    #[error("invalid board definition: {detail}")]
    Invalid { detail: String },
}

/// Result type for board operations.
pub type Result<T> = std::result::Result<T, BoardError>;
