//! The capability→attachment rule table.
//!
//! A single ordered table is the one auditable place for attachment ordering
//! and completeness. Order matters: the clock multiplier must be attached
//! before peripherals that consume a derived clock, and flash attachment
//! supplies its geometry constants in the same step.
//!
//! Capabilities without a rule (`serial`, `usb_fifo`, `usb_acm`, `sata`,
//! `leds`) are inert here: the transports and SATA act through parameter
//! forcing during resolution, and `leds` declares hardware no subsystem
//! attaches to.

use socforge_boards::{BoardDescriptor, Capability};
use socforge_soc::{Soc, VideoTiming};

use crate::error::{AssembleError, Result};

/// Inputs a rule may draw arguments from, fixed for the whole pass.
///
/// `video` is pre-resolved during precondition validation so the framebuffer
/// rule cannot fail mid-traversal.
#[derive(Debug, Clone)]
pub struct RuleContext {
    pub spi_data_width: u32,
    pub spi_clk_freq: u64,
    pub local_ip: String,
    pub remote_ip: String,
    pub video: Option<VideoTiming>,
}

type RuleFn = fn(&mut dyn Soc, &BoardDescriptor, &RuleContext) -> Result<()>;

/// One row of the rule table.
pub struct AttachmentRule {
    /// Capability that triggers the rule.
    pub capability: Capability,
    /// Attachment action issued when the capability is present.
    pub apply: RuleFn,
}

/// The fixed, ordered rule table evaluated once per board.
pub const RULES: &[AttachmentRule] = &[
    AttachmentRule {
        capability: Capability::Mmcm,
        apply: |soc, _, _| Ok(soc.add_mmcm(2)?),
    },
    AttachmentRule {
        capability: Capability::SpiFlash,
        apply: |soc, board, _| {
            let Some(flash) = &board.spi_flash else {
                return Err(AssembleError::Configuration {
                    board: board.name.clone(),
                    detail: "spiflash capability without flash constants".into(),
                });
            };
            soc.add_spi_flash(flash.dummy_cycles)?;
            soc.add_constant("SPIFLASH_PAGE_SIZE", flash.page_size)?;
            soc.add_constant("SPIFLASH_SECTOR_SIZE", flash.sector_size)?;
            Ok(())
        },
    },
    AttachmentRule {
        capability: Capability::SpiSdCard,
        apply: |soc, _, _| Ok(soc.add_spi_sdcard()?),
    },
    AttachmentRule {
        capability: Capability::SdCard,
        apply: |soc, _, _| Ok(soc.add_sdcard()?),
    },
    AttachmentRule {
        capability: Capability::Ethernet,
        apply: |soc, _, ctx| Ok(soc.configure_ethernet(&ctx.local_ip, &ctx.remote_ip)?),
    },
    AttachmentRule {
        capability: Capability::RgbLed,
        apply: |soc, _, _| Ok(soc.add_rgb_led()?),
    },
    AttachmentRule {
        capability: Capability::Switches,
        apply: |soc, _, _| Ok(soc.add_switches()?),
    },
    AttachmentRule {
        capability: Capability::Spi,
        apply: |soc, _, ctx| Ok(soc.add_spi(ctx.spi_data_width, ctx.spi_clk_freq)?),
    },
    AttachmentRule {
        capability: Capability::I2c,
        apply: |soc, _, _| Ok(soc.add_i2c()?),
    },
    AttachmentRule {
        capability: Capability::Xadc,
        apply: |soc, _, _| Ok(soc.add_xadc()?),
    },
    AttachmentRule {
        capability: Capability::Framebuffer,
        apply: |soc, board, ctx| {
            let Some(timing) = &ctx.video else {
                return Err(AssembleError::Configuration {
                    board: board.name.clone(),
                    detail: "framebuffer capability without a validated video mode".into(),
                });
            };
            Ok(soc.add_framebuffer(timing)?)
        },
    },
    AttachmentRule {
        capability: Capability::IcapBitstream,
        apply: |soc, _, _| Ok(soc.add_icap_bitstream()?),
    },
];
