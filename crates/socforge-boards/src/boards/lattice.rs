//! Lattice board definitions.

use socforge_soc::ParamValue;

use super::{overrides, spi_flash};
use crate::capability::Capability::*;
use crate::descriptor::{BitstreamExt, BoardDescriptor, LoadMethod, Provision};

pub fn versa_ecp5() -> BoardDescriptor {
    BoardDescriptor::new(
        "versa_ecp5",
        "litex_boards.targets.versa_ecp5",
        [Serial, Ethernet, SpiFlash],
        BitstreamExt::Svf,
    )
    .with_spi_flash(spi_flash(11))
}

pub fn ulx3s() -> BoardDescriptor {
    BoardDescriptor::new(
        "ulx3s",
        "litex_boards.targets.ulx3s",
        [Serial, SpiSdCard],
        BitstreamExt::Svf,
    )
}

pub fn hadbadge() -> BoardDescriptor {
    BoardDescriptor::new(
        "hadbadge",
        "litex_boards.targets.hadbadge",
        [Serial, SpiFlash],
        BitstreamExt::Bit,
    )
    .with_spi_flash(spi_flash(8))
    .with_load(LoadMethod::Command {
        program: "dfu-util".into(),
        args: vec![
            "--alt".into(),
            "2".into(),
            "--download".into(),
            "{bitstream}".into(),
            "--reset".into(),
        ],
    })
}

pub fn orangecrab() -> BoardDescriptor {
    BoardDescriptor::new(
        "orangecrab",
        "litex_boards.targets.orangecrab",
        [UsbAcm, SpiSdCard],
        BitstreamExt::Bit,
    )
    .with_overrides(overrides([
        // 48 MHz default is too slow for the USB ACM core.
        ("sys_clk_freq", ParamValue::Int(64_000_000)),
        ("integrated_rom_size", ParamValue::Int(0xa000)),
    ]))
    .with_provision(Provision::GitClone {
        url: "https://github.com/litex-hub/valentyusb".into(),
        branch: "hw_cdc_eptri".into(),
        dest: "valentyusb".into(),
    })
}

pub fn camlink_4k() -> BoardDescriptor {
    BoardDescriptor::new(
        "camlink_4k",
        "litex_boards.targets.camlink_4k",
        [Serial],
        BitstreamExt::Bit,
    )
    .with_load(LoadMethod::Command {
        program: "camlink".into(),
        args: vec!["configure".into(), "{bitstream}".into()],
    })
}

pub fn trellisboard() -> BoardDescriptor {
    BoardDescriptor::new(
        "trellisboard",
        "litex_boards.targets.trellisboard",
        [Serial, SpiSdCard],
        BitstreamExt::Svf,
    )
}

pub fn ecpix5() -> BoardDescriptor {
    BoardDescriptor::new(
        "ecpix5",
        "litex_boards.targets.ecpix5",
        [Serial, Ethernet, SdCard],
        BitstreamExt::Svf,
    )
}
