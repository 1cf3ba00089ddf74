//! Build orchestration for socforge.
//!
//! Drives one board (or every registered board, sequentially, in registry
//! order) through the full pipeline: provision external dependencies, resolve
//! the descriptor and parameters, construct and assemble the SoC plan, invoke
//! the gateware builder, generate and compile the device tree, and optionally
//! load the bitstream and build documentation.
//!
//! All external tools are subprocess collaborators with overridable command
//! names; their failures are fatal for the affected board and are never
//! retried here.

pub mod error;
pub mod pipeline;
pub mod provision;
pub mod tools;

pub use error::FlowError;
pub use pipeline::{run, run_board, BuildArtifacts, FlowOptions, TargetSet};
pub use tools::ToolCommands;
