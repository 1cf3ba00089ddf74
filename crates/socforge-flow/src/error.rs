//! Flow errors.

use socforge_assemble::AssembleError;
use socforge_boards::BoardError;
use socforge_soc::SocError;
use thiserror::Error;

/// Errors that can occur while orchestrating a board's build pipeline.
#[derive(Debug, Error)]
pub enum FlowError {
    /// Board resolution or board-file parsing failed.
    #[error(transparent)]
    Board(#[from] BoardError),

    /// Parameter resolution or assembly failed.
    #[error(transparent)]
    Assemble(#[from] AssembleError),

    /// The SoC plan could not be produced.
    #[error(transparent)]
    Soc(#[from] SocError),

    /// I/O error managing build directories or artifacts.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// An external tool could not be invoked or exited non-zero.
    #[error("{tool} failed: {message}")]
    Tool { tool: String, message: String },
}

/// Result type for flow operations.
pub type Result<T> = std::result::Result<T, FlowError>;
