//! Assembly errors.

use socforge_soc::SocError;
use thiserror::Error;

/// Errors that can occur during parameter resolution or assembly.
#[derive(Debug, Error)]
pub enum AssembleError {
    /// A capability's required input is invalid. Raised during precondition
    /// validation, before any attachment call reaches the SoC.
    #[error("configuration error for board '{board}': {detail}")]
    Configuration { board: String, detail: String },

    /// An attachment call failed in the SoC collaborator.
    #[error(transparent)]
    Soc(#[from] SocError),
}

/// Result type for assembly operations.
pub type Result<T> = std::result::Result<T, AssembleError>;
