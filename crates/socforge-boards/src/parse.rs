//! TOML parsing, serialization, and validation for board definitions.
//!
//! Boards outside the built-in registry can be described in `.board.toml`
//! files and passed to the CLI with `--board-file`. The file is a direct
//! serialization of [`BoardDescriptor`].

use std::path::Path;

use crate::capability::Capability;
use crate::descriptor::BoardDescriptor;
use crate::error::{BoardError, Result};

/// Load a board descriptor from a `.board.toml` file.
pub fn load_board_toml(path: &Path) -> Result<BoardDescriptor> {
    if !path.exists() {
        return Err(BoardError::NotFound {
            path: path.to_path_buf(),
        });
    }
    let content = std::fs::read_to_string(path)?;
    parse_board_toml(&content)
}

/// Parse a board descriptor from a TOML string and validate it.
pub fn parse_board_toml(toml_str: &str) -> Result<BoardDescriptor> {
    let board: BoardDescriptor = toml::from_str(toml_str)?;
    validate_board(&board)?;
    Ok(board)
}

/// Serialize a board descriptor to pretty TOML.
pub fn board_to_toml(board: &BoardDescriptor) -> Result<String> {
    Ok(toml::to_string_pretty(board)?)
}

/// Structural validation applied to externally supplied board definitions.
fn validate_board(board: &BoardDescriptor) -> Result<()> {
    if board.name.is_empty() {
        return Err(BoardError::Invalid {
            detail: "board name must not be empty".into(),
        });
    }
    if board.name != crate::registry::normalize(&board.name) {
        return Err(BoardError::Invalid {
            detail: format!("board name '{}' is not in canonical form", board.name),
        });
    }
    if board.soc_class.is_empty() {
        return Err(BoardError::Invalid {
            detail: "soc_class must not be empty".into(),
        });
    }
    if board.has(Capability::SpiFlash) && board.spi_flash.is_none() {
        return Err(BoardError::Invalid {
            detail: "spiflash capability requires [spi_flash] constants".into(),
        });
    }
    Ok(())
}
