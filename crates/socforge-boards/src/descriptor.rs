//! Board descriptors.
//!
//! A descriptor is constructed once per invocation when a board name is
//! resolved, is immutable thereafter, and is discarded at process end.
//! Construction is pure: anything with side effects (fetching an external
//! dependency, touching hardware) lives in the flow, never here.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};
use socforge_soc::ParameterSet;

use crate::capability::Capability;

/// Bitstream file extension produced by the board's toolchain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BitstreamExt {
    /// Xilinx / Lattice `.bit`.
    Bit,
    /// Lattice JTAG `.svf`.
    Svf,
    /// Intel/Altera `.sof`.
    Sof,
}

impl BitstreamExt {
    /// The extension including the leading dot.
    pub fn as_str(&self) -> &'static str {
        match self {
            BitstreamExt::Bit => ".bit",
            BitstreamExt::Svf => ".svf",
            BitstreamExt::Sof => ".sof",
        }
    }
}

impl fmt::Display for BitstreamExt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// SPI flash geometry constants attached alongside the flash controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpiFlashProfile {
    /// Flash page size in bytes.
    pub page_size: u64,
    /// Flash sector size in bytes.
    pub sector_size: u64,
    /// Read dummy cycles for the board's flash part.
    pub dummy_cycles: u32,
}

/// How a bitstream gets pushed to the device.
///
/// Most boards use the generic platform programmer; boards whose loader is an
/// external command-line utility declare it here so the flow can dispatch on
/// it as a first-class variation point.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "method", rename_all = "snake_case")]
pub enum LoadMethod {
    /// Generic platform programmer.
    Programmer,
    /// External utility invocation; `{bitstream}` in an argument is replaced
    /// with the bitstream path.
    Command { program: String, args: Vec<String> },
}

impl Default for LoadMethod {
    fn default() -> Self {
        LoadMethod::Programmer
    }
}

/// An external dependency that must be provisioned before SoC construction.
///
/// Provisioning is an explicit, idempotent flow step; descriptor construction
/// itself never performs it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Provision {
    /// Clone a git repository into `dest` (skipped when `dest` exists).
    GitClone {
        url: String,
        branch: String,
        dest: String,
    },
}

/// Immutable per-board record driving SoC assembly and the build flow.
///
/// Field order keeps plain values ahead of tables so the descriptor
/// serializes cleanly to TOML.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoardDescriptor {
    /// Canonical board name (registry key).
    pub name: String,
    /// Opaque reference to the base SoC implementation for this board.
    pub soc_class: String,
    /// Hardware capabilities the board exposes. Fixed at construction.
    pub capabilities: BTreeSet<Capability>,
    /// Bitstream file extension for the board's toolchain.
    pub bitstream_ext: BitstreamExt,
    /// Platform I/O extensions registered before assembly.
    #[serde(default)]
    pub io_extensions: Vec<String>,
    /// Board-specific parameter defaults, layered over global defaults.
    #[serde(default)]
    pub overrides: ParameterSet,
    /// SPI flash constants; present iff the board declares `spiflash`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spi_flash: Option<SpiFlashProfile>,
    /// How to push a bitstream to this board.
    #[serde(default)]
    pub load: LoadMethod,
    /// External dependency fetched before SoC construction.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provision: Option<Provision>,
}

impl BoardDescriptor {
    /// Minimal descriptor with the given name, SoC class, capabilities, and
    /// bitstream extension. Optional fields start empty and are filled with
    /// the builder-style methods below.
    pub fn new(
        name: impl Into<String>,
        soc_class: impl Into<String>,
        capabilities: impl IntoIterator<Item = Capability>,
        bitstream_ext: BitstreamExt,
    ) -> Self {
        Self {
            name: name.into(),
            soc_class: soc_class.into(),
            capabilities: capabilities.into_iter().collect(),
            bitstream_ext,
            io_extensions: Vec::new(),
            overrides: ParameterSet::new(),
            spi_flash: None,
            load: LoadMethod::Programmer,
            provision: None,
        }
    }

    /// Whether the board declares `capability`.
    pub fn has(&self, capability: Capability) -> bool {
        self.capabilities.contains(&capability)
    }

    pub fn with_overrides(mut self, overrides: ParameterSet) -> Self {
        self.overrides = overrides;
        self
    }

    pub fn with_spi_flash(mut self, profile: SpiFlashProfile) -> Self {
        self.spi_flash = Some(profile);
        self
    }

    pub fn with_load(mut self, load: LoadMethod) -> Self {
        self.load = load;
        self
    }

    pub fn with_io_extension(mut self, name: impl Into<String>) -> Self {
        self.io_extensions.push(name.into());
        self
    }

    pub fn with_provision(mut self, provision: Provision) -> Self {
        self.provision = Some(provision);
        self
    }
}
