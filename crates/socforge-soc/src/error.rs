//! SoC attachment surface errors.

use thiserror::Error;

/// Errors raised by implementations of the SoC attachment surface.
#[derive(Debug, Error)]
pub enum SocError {
    /// An attachment call was rejected by the SoC under construction.
    #[error("attaching {peripheral} failed: {message}")]
    Attachment { peripheral: String, message: String },

    /// The SoC plan could not be serialized.
    #[error("plan serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),

    /// I/O error writing the SoC plan.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for SoC surface operations.
pub type Result<T> = std::result::Result<T, SocError>;
