//! Hardware capability tokens.
//!
//! A capability names one hardware feature a board exposes. The vocabulary is
//! closed and board-invariant: the same token always triggers the same
//! attachment action regardless of which board declares it. Tokens without an
//! attachment rule (`serial`, `leds`, the uart transports, `sata`) are inert
//! in the assembly engine and act only through parameter forcing, if at all.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// One hardware feature a board exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Capability {
    // Communication
    Serial,
    Ethernet,
    UsbFifo,
    UsbAcm,
    // Storage
    #[serde(rename = "spiflash")]
    SpiFlash,
    #[serde(rename = "spisdcard")]
    SpiSdCard,
    #[serde(rename = "sdcard")]
    SdCard,
    Sata,
    // GPIOs
    Leds,
    RgbLed,
    Switches,
    // Buses
    Spi,
    I2c,
    // Monitoring
    Xadc,
    // Video
    Framebuffer,
    // Platform-specific extras
    Mmcm,
    IcapBitstream,
}

impl Capability {
    /// The canonical token string for this capability.
    pub fn token(&self) -> &'static str {
        match self {
            Capability::Serial => "serial",
            Capability::Ethernet => "ethernet",
            Capability::UsbFifo => "usb_fifo",
            Capability::UsbAcm => "usb_acm",
            Capability::SpiFlash => "spiflash",
            Capability::SpiSdCard => "spisdcard",
            Capability::SdCard => "sdcard",
            Capability::Sata => "sata",
            Capability::Leds => "leds",
            Capability::RgbLed => "rgb_led",
            Capability::Switches => "switches",
            Capability::Spi => "spi",
            Capability::I2c => "i2c",
            Capability::Xadc => "xadc",
            Capability::Framebuffer => "framebuffer",
            Capability::Mmcm => "mmcm",
            Capability::IcapBitstream => "icap_bitstream",
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for Capability {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "serial" => Ok(Capability::Serial),
            "ethernet" => Ok(Capability::Ethernet),
            "usb_fifo" => Ok(Capability::UsbFifo),
            "usb_acm" => Ok(Capability::UsbAcm),
            "spiflash" => Ok(Capability::SpiFlash),
            "spisdcard" => Ok(Capability::SpiSdCard),
            "sdcard" => Ok(Capability::SdCard),
            "sata" => Ok(Capability::Sata),
            "leds" => Ok(Capability::Leds),
            "rgb_led" => Ok(Capability::RgbLed),
            "switches" => Ok(Capability::Switches),
            "spi" => Ok(Capability::Spi),
            "i2c" => Ok(Capability::I2c),
            "xadc" => Ok(Capability::Xadc),
            "framebuffer" => Ok(Capability::Framebuffer),
            "mmcm" => Ok(Capability::Mmcm),
            "icap_bitstream" => Ok(Capability::IcapBitstream),
            other => Err(format!("unknown capability token: '{other}'")),
        }
    }
}
