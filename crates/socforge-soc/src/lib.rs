//! SoC-facing model for socforge.
//!
//! Defines the flat key/value parameter vocabulary passed to SoC construction,
//! the capability-indexed attachment surface the assembly engine drives, and
//! the closed table of supported video timings.
//!
//! The SoC/builder toolchain itself is an external collaborator; this crate
//! only models what socforge tells it to do.

pub mod error;
pub mod params;
pub mod soc;
pub mod video;

pub use error::SocError;
pub use params::{ParamValue, ParameterSet};
pub use soc::{Attachment, PlannedSoc, Soc, SocPlan};
pub use video::{resolve_video_mode, video_modes, VideoTiming};
