//! Capability-to-assembly resolution for socforge.
//!
//! Two pure pieces of decision logic live here:
//!
//! - [`resolve::resolve_parameters`] merges global defaults, board overrides,
//!   explicitly set CLI overrides, and capability-forced values into the final
//!   parameter set passed to SoC construction.
//! - [`engine::assemble`] evaluates a fixed, ordered table of
//!   capability→attachment rules against a board's capability set, issuing
//!   one attachment call per present capability, then unconditionally
//!   configures the boot source.
//!
//! Both are single-pass and deterministic: the same board, options, and
//! capability set always produce the same parameter set and the same ordered
//! attachment sequence.

pub mod engine;
pub mod error;
pub mod resolve;
pub mod rules;

pub use engine::{assemble, AssemblyOptions};
pub use error::AssembleError;
pub use resolve::{global_defaults, resolve_parameters, CliOverrides};
