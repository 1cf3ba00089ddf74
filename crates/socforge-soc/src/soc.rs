//! The SoC attachment surface.
//!
//! [`Soc`] is the capability-indexed set of operations the assembly engine
//! drives. Each method adds one peripheral or subsystem to a SoC under
//! construction; how the underlying toolchain realizes the attachment is
//! outside socforge.
//!
//! [`PlannedSoc`] is the default implementation: it records every attachment,
//! in call order, into a serializable [`SocPlan`] that the flow hands to the
//! external gateware generator. The same recording makes the engine's call
//! sequence directly observable in tests.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::params::ParameterSet;
use crate::video::VideoTiming;

/// One recorded attachment call, with its arguments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Attachment {
    IoExtension { name: String },
    Mmcm { clk_outs: u32 },
    SpiFlash { dummy_cycles: u32 },
    Constant { name: String, value: u64 },
    SpiSdCard,
    SdCard,
    Ethernet { local_ip: String, remote_ip: String },
    RgbLed,
    Switches,
    Spi { data_width: u32, clk_freq: u64 },
    I2c,
    Xadc,
    Framebuffer { timing: VideoTiming },
    IcapBitstream,
    BootConfig,
}

impl fmt::Display for Attachment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Attachment::IoExtension { name } => write!(f, "io_extension({name})"),
            Attachment::Mmcm { clk_outs } => write!(f, "mmcm({clk_outs})"),
            Attachment::SpiFlash { dummy_cycles } => write!(f, "spiflash(dummy={dummy_cycles})"),
            Attachment::Constant { name, value } => write!(f, "constant({name}={value})"),
            Attachment::SpiSdCard => write!(f, "spisdcard"),
            Attachment::SdCard => write!(f, "sdcard"),
            Attachment::Ethernet { local_ip, remote_ip } => {
                write!(f, "ethernet({local_ip} -> {remote_ip})")
            }
            Attachment::RgbLed => write!(f, "rgb_led"),
            Attachment::Switches => write!(f, "switches"),
            Attachment::Spi { data_width, clk_freq } => {
                write!(f, "spi(width={data_width}, freq={clk_freq})")
            }
            Attachment::I2c => write!(f, "i2c"),
            Attachment::Xadc => write!(f, "xadc"),
            Attachment::Framebuffer { timing } => write!(f, "framebuffer({})", timing.mode),
            Attachment::IcapBitstream => write!(f, "icap_bitstream"),
            Attachment::BootConfig => write!(f, "boot_config"),
        }
    }
}

/// Capability-indexed attachment surface of a SoC under construction.
///
/// Object-safe so orchestration can drive any implementation behind
/// `&mut dyn Soc`.
pub trait Soc {
    /// Register a platform I/O extension (e.g. an SD-card PMOD pinout).
    fn add_io_extension(&mut self, name: &str) -> Result<()>;

    /// Attach a clock multiplier with `clk_outs` derived clock outputs.
    fn add_mmcm(&mut self, clk_outs: u32) -> Result<()>;

    /// Attach the SPI flash controller.
    fn add_spi_flash(&mut self, dummy_cycles: u32) -> Result<()>;

    /// Define a named build-time constant (e.g. flash page/sector size).
    fn add_constant(&mut self, name: &str, value: u64) -> Result<()>;

    /// Attach an SD card in SPI mode.
    fn add_spi_sdcard(&mut self) -> Result<()>;

    /// Attach an SD card in native mode.
    fn add_sdcard(&mut self) -> Result<()>;

    /// Configure the ethernet subsystem with local and remote IP addresses.
    fn configure_ethernet(&mut self, local_ip: &str, remote_ip: &str) -> Result<()>;

    /// Attach the RGB LED controller.
    fn add_rgb_led(&mut self) -> Result<()>;

    /// Attach the user switches.
    fn add_switches(&mut self) -> Result<()>;

    /// Attach a SPI master with the given data width and clock frequency.
    fn add_spi(&mut self, data_width: u32, clk_freq: u64) -> Result<()>;

    /// Attach an I2C master.
    fn add_i2c(&mut self) -> Result<()>;

    /// Attach the analog monitoring block (XADC).
    fn add_xadc(&mut self) -> Result<()>;

    /// Attach the video framebuffer with a validated timing record.
    fn add_framebuffer(&mut self, timing: &VideoTiming) -> Result<()>;

    /// Attach the FPGA configuration interface (ICAP).
    fn add_icap_bitstream(&mut self) -> Result<()>;

    /// Configure the boot source. Invoked once for every board,
    /// unconditionally, after all capability rules.
    fn configure_boot(&mut self) -> Result<()>;
}

/// Serializable build request for the external gateware generator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocPlan {
    /// Opaque reference to the base SoC implementation.
    pub soc_class: String,
    /// Resolved construction parameters.
    pub parameters: ParameterSet,
    /// Attachment calls in the order the engine issued them.
    pub attachments: Vec<Attachment>,
}

/// A SoC under construction, recorded as a plan.
#[derive(Debug, Clone)]
pub struct PlannedSoc {
    plan: SocPlan,
}

impl PlannedSoc {
    /// Construct a SoC from a base class reference and resolved parameters.
    pub fn construct(soc_class: impl Into<String>, parameters: ParameterSet) -> Self {
        Self {
            plan: SocPlan {
                soc_class: soc_class.into(),
                parameters,
                attachments: Vec::new(),
            },
        }
    }

    /// The attachment calls recorded so far, in call order.
    pub fn attachments(&self) -> &[Attachment] {
        &self.plan.attachments
    }

    /// The resolved construction parameters.
    pub fn parameters(&self) -> &ParameterSet {
        &self.plan.parameters
    }

    /// Finish construction and hand over the plan.
    pub fn into_plan(self) -> SocPlan {
        self.plan
    }

    /// Serialize the plan as pretty JSON to `path`.
    pub fn write_plan(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(&self.plan)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    fn record(&mut self, attachment: Attachment) -> Result<()> {
        self.plan.attachments.push(attachment);
        Ok(())
    }
}

impl Soc for PlannedSoc {
    fn add_io_extension(&mut self, name: &str) -> Result<()> {
        self.record(Attachment::IoExtension { name: name.to_string() })
    }

    fn add_mmcm(&mut self, clk_outs: u32) -> Result<()> {
        self.record(Attachment::Mmcm { clk_outs })
    }

    fn add_spi_flash(&mut self, dummy_cycles: u32) -> Result<()> {
        self.record(Attachment::SpiFlash { dummy_cycles })
    }

    fn add_constant(&mut self, name: &str, value: u64) -> Result<()> {
        self.record(Attachment::Constant { name: name.to_string(), value })
    }

    fn add_spi_sdcard(&mut self) -> Result<()> {
        self.record(Attachment::SpiSdCard)
    }

    fn add_sdcard(&mut self) -> Result<()> {
        self.record(Attachment::SdCard)
    }

    fn configure_ethernet(&mut self, local_ip: &str, remote_ip: &str) -> Result<()> {
        self.record(Attachment::Ethernet {
            local_ip: local_ip.to_string(),
            remote_ip: remote_ip.to_string(),
        })
    }

    fn add_rgb_led(&mut self) -> Result<()> {
        self.record(Attachment::RgbLed)
    }

    fn add_switches(&mut self) -> Result<()> {
        self.record(Attachment::Switches)
    }

    fn add_spi(&mut self, data_width: u32, clk_freq: u64) -> Result<()> {
        self.record(Attachment::Spi { data_width, clk_freq })
    }

    fn add_i2c(&mut self) -> Result<()> {
        self.record(Attachment::I2c)
    }

    fn add_xadc(&mut self) -> Result<()> {
        self.record(Attachment::Xadc)
    }

    fn add_framebuffer(&mut self, timing: &VideoTiming) -> Result<()> {
        self.record(Attachment::Framebuffer { timing: timing.clone() })
    }

    fn add_icap_bitstream(&mut self) -> Result<()> {
        self.record(Attachment::IcapBitstream)
    }

    fn configure_boot(&mut self) -> Result<()> {
        self.record(Attachment::BootConfig)
    }
}
