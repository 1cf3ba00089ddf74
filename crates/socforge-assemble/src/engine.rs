//! The capability-driven assembly engine.
//!
//! Single pass, no retries, no persistent state: validate every precondition,
//! register the board's I/O extensions, walk the rule table in order, then
//! configure the boot source. Validation happens before the first attachment,
//! so a failed precondition leaves zero observable calls on the SoC.

use log::debug;
use socforge_boards::{BoardDescriptor, Capability};
use socforge_soc::{resolve_video_mode, Soc};

use crate::error::{AssembleError, Result};
use crate::rules::{RuleContext, RULES};

/// CLI-level inputs to the assembly pass.
#[derive(Debug, Clone)]
pub struct AssemblyOptions {
    /// Maximum transferred bits per SPI transfer.
    pub spi_data_width: u32,
    /// SPI clock frequency in Hz.
    pub spi_clk_freq: u64,
    /// Local IP address for the ethernet subsystem.
    pub local_ip: String,
    /// Remote IP address of the TFTP server.
    pub remote_ip: String,
    /// Requested video mode token (must be in the supported table when the
    /// board has a framebuffer).
    pub video_mode: String,
}

impl Default for AssemblyOptions {
    fn default() -> Self {
        Self {
            spi_data_width: 8,
            spi_clk_freq: 1_000_000,
            local_ip: "192.168.1.50".to_string(),
            remote_ip: "192.168.1.100".to_string(),
            video_mode: "1920x1080_60Hz".to_string(),
        }
    }
}

/// Check every rule precondition and build the fixed per-pass context.
fn validate(board: &BoardDescriptor, opts: &AssemblyOptions) -> Result<RuleContext> {
    let video = if board.has(Capability::Framebuffer) {
        match resolve_video_mode(&opts.video_mode) {
            Some(timing) => Some(timing),
            None => {
                return Err(AssembleError::Configuration {
                    board: board.name.clone(),
                    detail: format!("unsupported video mode '{}'", opts.video_mode),
                })
            }
        }
    } else {
        None
    };

    if board.has(Capability::SpiFlash) && board.spi_flash.is_none() {
        return Err(AssembleError::Configuration {
            board: board.name.clone(),
            detail: "spiflash capability without flash constants".into(),
        });
    }

    Ok(RuleContext {
        spi_data_width: opts.spi_data_width,
        spi_clk_freq: opts.spi_clk_freq,
        local_ip: opts.local_ip.clone(),
        remote_ip: opts.remote_ip.clone(),
        video,
    })
}

/// Run the assembly pass for one board against a freshly constructed SoC.
///
/// The observable effect is the ordered sequence of attachment calls issued
/// to `soc`; identical inputs always produce the identical sequence.
pub fn assemble(soc: &mut dyn Soc, board: &BoardDescriptor, opts: &AssemblyOptions) -> Result<()> {
    let ctx = validate(board, opts)?;

    for name in &board.io_extensions {
        debug!("{}: registering io extension {name}", board.name);
        soc.add_io_extension(name)?;
    }

    for rule in RULES {
        if board.has(rule.capability) {
            debug!("{}: attaching {}", board.name, rule.capability);
            (rule.apply)(soc, board, &ctx)?;
        }
    }

    // Every board boots; this step has no capability precondition.
    soc.configure_boot()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use socforge_boards::resolve;
    use socforge_soc::{Attachment, ParameterSet, PlannedSoc};

    fn assembled(board_name: &str, opts: &AssemblyOptions) -> PlannedSoc {
        let board = resolve(board_name).unwrap();
        let mut soc = PlannedSoc::construct(board.soc_class.clone(), ParameterSet::new());
        assemble(&mut soc, &board, opts).unwrap();
        soc
    }

    #[test]
    fn every_board_ends_with_boot_config() {
        for name in socforge_boards::board_names() {
            let soc = assembled(name, &AssemblyOptions::default());
            assert_eq!(soc.attachments().last(), Some(&Attachment::BootConfig));
        }
    }

    #[test]
    fn mmcm_attaches_before_spiflash() {
        let soc = assembled("arty", &AssemblyOptions::default());
        let pos = |pred: fn(&Attachment) -> bool| soc.attachments().iter().position(pred).unwrap();
        let mmcm = pos(|a| matches!(a, Attachment::Mmcm { .. }));
        let flash = pos(|a| matches!(a, Attachment::SpiFlash { .. }));
        assert!(mmcm < flash);
    }

    #[test]
    fn spiflash_brings_geometry_constants() {
        let soc = assembled("hadbadge", &AssemblyOptions::default());
        assert!(soc.attachments().contains(&Attachment::SpiFlash { dummy_cycles: 8 }));
        assert!(soc.attachments().contains(&Attachment::Constant {
            name: "SPIFLASH_PAGE_SIZE".into(),
            value: 256,
        }));
        assert!(soc.attachments().contains(&Attachment::Constant {
            name: "SPIFLASH_SECTOR_SIZE".into(),
            value: 64 * 1024,
        }));
    }

    #[test]
    fn ethernet_uses_configured_addresses() {
        let opts = AssemblyOptions {
            local_ip: "10.0.0.2".into(),
            remote_ip: "10.0.0.1".into(),
            ..Default::default()
        };
        let soc = assembled("netv2", &opts);
        assert!(soc.attachments().contains(&Attachment::Ethernet {
            local_ip: "10.0.0.2".into(),
            remote_ip: "10.0.0.1".into(),
        }));
    }

    #[test]
    fn spi_rule_draws_cli_parameters() {
        let opts = AssemblyOptions {
            spi_data_width: 16,
            spi_clk_freq: 2_000_000,
            ..Default::default()
        };
        let soc = assembled("arty", &opts);
        assert!(soc
            .attachments()
            .contains(&Attachment::Spi { data_width: 16, clk_freq: 2_000_000 }));
    }

    #[test]
    fn supported_video_mode_selects_matching_timing() {
        let soc = assembled("nexys_video", &AssemblyOptions::default());
        let fb = soc
            .attachments()
            .iter()
            .find_map(|a| match a {
                Attachment::Framebuffer { timing } => Some(timing),
                _ => None,
            })
            .unwrap();
        assert_eq!(fb.mode, "1920x1080_60Hz");
        assert_eq!(fb.pix_clk, 148_500_000);
    }

    #[test]
    fn unsupported_video_mode_fails_with_zero_attachments() {
        let board = resolve("netv2").unwrap();
        let opts = AssemblyOptions {
            video_mode: "999x999_1Hz".into(),
            ..Default::default()
        };
        let mut soc = PlannedSoc::construct(board.soc_class.clone(), ParameterSet::new());
        let err = assemble(&mut soc, &board, &opts).unwrap_err();
        assert!(matches!(err, AssembleError::Configuration { ref board, .. } if board == "netv2"));
        assert!(soc.attachments().is_empty());
    }

    #[test]
    fn video_mode_is_ignored_without_framebuffer() {
        let board = resolve("arty").unwrap();
        let opts = AssemblyOptions {
            video_mode: "999x999_1Hz".into(),
            ..Default::default()
        };
        let mut soc = PlannedSoc::construct(board.soc_class.clone(), ParameterSet::new());
        assemble(&mut soc, &board, &opts).unwrap();
        assert!(!soc.attachments().is_empty());
    }

    #[test]
    fn assembly_is_deterministic_across_fresh_socs() {
        let board = resolve("arty").unwrap();
        let opts = AssemblyOptions::default();

        let mut first = PlannedSoc::construct(board.soc_class.clone(), ParameterSet::new());
        let mut second = PlannedSoc::construct(board.soc_class.clone(), ParameterSet::new());
        assemble(&mut first, &board, &opts).unwrap();
        assemble(&mut second, &board, &opts).unwrap();

        assert_eq!(first.attachments(), second.attachments());
    }

    #[test]
    fn io_extensions_register_before_attachments() {
        let soc = assembled("arty_a7", &AssemblyOptions::default());
        assert_eq!(
            soc.attachments().first(),
            Some(&Attachment::IoExtension { name: "sdcard_pmod".into() })
        );
    }

    #[test]
    fn inert_capabilities_produce_no_attachments() {
        // zcu104 declares only `serial`; the whole pass is just boot config.
        let soc = assembled("zcu104", &AssemblyOptions::default());
        assert_eq!(soc.attachments(), &[Attachment::BootConfig]);
    }
}
