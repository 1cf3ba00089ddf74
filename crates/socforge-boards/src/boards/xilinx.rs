//! Xilinx board definitions.

use socforge_soc::ParamValue;

use super::{overrides, spi_flash};
use crate::capability::Capability::*;
use crate::descriptor::{BitstreamExt, BoardDescriptor};

pub fn acorn_cle_215() -> BoardDescriptor {
    BoardDescriptor::new(
        "acorn_cle_215",
        "litex_boards.targets.acorn_cle_215",
        [Serial, Sata],
        BitstreamExt::Bit,
    )
}

pub fn arty() -> BoardDescriptor {
    BoardDescriptor::new(
        "arty",
        "litex_boards.targets.arty",
        [
            Serial, Ethernet, SpiFlash, SpiSdCard, Leds, RgbLed, Switches, Spi, I2c, Xadc, Mmcm,
            IcapBitstream,
        ],
        BitstreamExt::Bit,
    )
    .with_spi_flash(spi_flash(11))
    .with_io_extension("sdcard_pmod")
}

pub fn arty_a7() -> BoardDescriptor {
    // Same feature set as arty; the A7 flash part needs fewer dummy cycles.
    let mut board = arty().with_spi_flash(spi_flash(7));
    board.name = "arty_a7".into();
    board
}

pub fn arty_s7() -> BoardDescriptor {
    BoardDescriptor::new(
        "arty_s7",
        "litex_boards.targets.arty_s7",
        [
            Serial, SpiFlash, SpiSdCard, Leds, RgbLed, Switches, Spi, I2c, Xadc, Mmcm,
            IcapBitstream,
        ],
        BitstreamExt::Bit,
    )
    .with_spi_flash(spi_flash(11))
}

pub fn netv2() -> BoardDescriptor {
    BoardDescriptor::new(
        "netv2",
        "litex_boards.targets.netv2",
        [Serial, Ethernet, SpiFlash, SpiSdCard, Leds, Framebuffer, Xadc],
        BitstreamExt::Bit,
    )
    .with_spi_flash(spi_flash(11))
}

pub fn genesys2() -> BoardDescriptor {
    BoardDescriptor::new(
        "genesys2",
        "litex_boards.targets.genesys2",
        [UsbFifo, Ethernet, SpiSdCard],
        BitstreamExt::Bit,
    )
}

pub fn kc705() -> BoardDescriptor {
    BoardDescriptor::new(
        "kc705",
        "litex_boards.targets.kc705",
        [Serial, Ethernet, SpiSdCard, Leds, Xadc],
        BitstreamExt::Bit,
    )
    // 1 Mbaud not supported by the CP210x bridge.
    .with_overrides(overrides([("uart_baudrate", ParamValue::Int(500_000))]))
}

pub fn kcu105() -> BoardDescriptor {
    BoardDescriptor::new(
        "kcu105",
        "litex_boards.targets.kcu105",
        [Serial, Ethernet, SpiSdCard],
        BitstreamExt::Bit,
    )
    .with_overrides(overrides([("uart_baudrate", ParamValue::Int(115_200))]))
}

pub fn zcu104() -> BoardDescriptor {
    BoardDescriptor::new(
        "zcu104",
        "litex_boards.targets.zcu104",
        [Serial],
        BitstreamExt::Bit,
    )
}

pub fn nexys4ddr() -> BoardDescriptor {
    BoardDescriptor::new(
        "nexys4ddr",
        "litex_boards.targets.nexys4ddr",
        [Serial, Ethernet, SpiSdCard],
        BitstreamExt::Bit,
    )
}

pub fn nexys_video() -> BoardDescriptor {
    BoardDescriptor::new(
        "nexys_video",
        "litex_boards.targets.nexys_video",
        [UsbFifo, SpiSdCard, Framebuffer],
        BitstreamExt::Bit,
    )
}

pub fn minispartan6() -> BoardDescriptor {
    BoardDescriptor::new(
        "minispartan6",
        "litex_boards.targets.minispartan6",
        [UsbFifo, SpiSdCard],
        BitstreamExt::Bit,
    )
    // Half-rate SDRAM PHY.
    .with_overrides(overrides([("sdram_sys2x", ParamValue::Bool(true))]))
}

pub fn pipistrello() -> BoardDescriptor {
    BoardDescriptor::new(
        "pipistrello",
        "litex_boards.targets.pipistrello",
        [Serial],
        BitstreamExt::Bit,
    )
}

pub fn xcu1525() -> BoardDescriptor {
    BoardDescriptor::new(
        "xcu1525",
        "litex_boards.targets.xcu1525",
        [Serial, Sata],
        BitstreamExt::Bit,
    )
}
