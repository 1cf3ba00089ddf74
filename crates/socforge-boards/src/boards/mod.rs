//! Built-in board definitions, grouped by FPGA vendor.
//!
//! Each function constructs the descriptor for one board. What used to be a
//! subclass per board in the original tooling is declarative data here; the
//! registry holds these constructors in registration order.

pub mod altera;
pub mod lattice;
pub mod xilinx;

use socforge_soc::ParameterSet;

use crate::descriptor::SpiFlashProfile;

pub(crate) const KB: u64 = 1024;

/// Common 256 B page / 64 KiB sector flash geometry with per-board dummy cycles.
pub(crate) fn spi_flash(dummy_cycles: u32) -> SpiFlashProfile {
    SpiFlashProfile {
        page_size: 256,
        sector_size: 64 * KB,
        dummy_cycles,
    }
}

pub(crate) fn overrides<const N: usize>(
    pairs: [(&str, socforge_soc::ParamValue); N],
) -> ParameterSet {
    pairs.into_iter().collect()
}
