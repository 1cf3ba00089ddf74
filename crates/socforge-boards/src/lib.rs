//! Board definitions for socforge.
//!
//! Each supported FPGA board is a declarative [`BoardDescriptor`]: a base SoC
//! class reference, a fixed capability set, board-specific parameter
//! overrides, a bitstream extension, and (where the board needs one) a
//! non-generic load method, SPI-flash constants, platform I/O extensions, or
//! an external-dependency provisioning step. Specialization is data, not
//! code.
//!
//! The [`registry`] maps canonical board names to descriptor constructors and
//! is the single source of the "all boards" ordering. Custom boards can also
//! be loaded from `.board.toml` files via [`parse`].

pub mod boards;
pub mod capability;
pub mod descriptor;
pub mod error;
pub mod parse;
pub mod registry;

pub use capability::Capability;
pub use descriptor::{
    BitstreamExt, BoardDescriptor, LoadMethod, Provision, SpiFlashProfile,
};
pub use error::BoardError;
pub use registry::{board_names, normalize, resolve};
