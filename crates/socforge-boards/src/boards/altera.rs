//! Intel/Altera board definitions.

use socforge_soc::ParamValue;

use super::overrides;
use crate::capability::Capability::*;
use crate::descriptor::{BitstreamExt, BoardDescriptor};

pub fn de0nano() -> BoardDescriptor {
    BoardDescriptor::new(
        "de0nano",
        "litex_boards.targets.de0nano",
        [Serial],
        BitstreamExt::Sof,
    )
    .with_overrides(overrides([("integrated_rom_size", ParamValue::Int(0x8000))]))
}

pub fn de10lite() -> BoardDescriptor {
    BoardDescriptor::new(
        "de10lite",
        "litex_boards.targets.de10lite",
        [Serial],
        BitstreamExt::Sof,
    )
}

pub fn de10nano() -> BoardDescriptor {
    BoardDescriptor::new(
        "de10nano",
        "litex_boards.targets.de10nano",
        [Serial, SpiSdCard, Leds, Switches],
        BitstreamExt::Sof,
    )
    // MiSTer SDRAM extension board.
    .with_overrides(overrides([("with_mister_sdram", ParamValue::Bool(true))]))
}

pub fn qmtech_ep4ce15() -> BoardDescriptor {
    BoardDescriptor::new(
        "qmtech_ep4ce15",
        "litex_boards.targets.qmtech_ep4ce15",
        [Serial],
        BitstreamExt::Sof,
    )
    .with_overrides(overrides([
        ("integrated_sram_size", ParamValue::Int(0x800)),
        ("integrated_rom_size", ParamValue::Int(0x8000)),
    ]))
}
