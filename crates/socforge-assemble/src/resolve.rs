//! Layered parameter resolution.
//!
//! Precedence, lowest to highest: global defaults < board overrides <
//! explicitly set CLI overrides < capability-forced values. Later layers
//! overwrite earlier ones per key; every call builds a fresh set from
//! immutable layers, so nothing leaks between boards.

use std::collections::BTreeSet;

use socforge_boards::Capability;
use socforge_soc::{ParamValue, ParameterSet};

/// CLI-supplied parameter overrides.
///
/// `None` means the flag was not passed and must not override a board
/// default; an empty string is still an explicit override.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub device: Option<String>,
    pub variant: Option<String>,
    pub toolchain: Option<String>,
    /// Explicit `--set key=value` overrides; every entry here was set by the
    /// user, so all of them apply.
    pub extra: ParameterSet,
}

/// Transport capabilities that force `uart_name`, highest priority first.
///
/// A board declaring both usb_fifo and usb_acm gets usb_fifo; the choice is
/// fixed here rather than left to set-iteration order.
const TRANSPORT_PRIORITY: &[(Capability, &str)] =
    &[(Capability::UsbFifo, "usb_fifo"), (Capability::UsbAcm, "usb_acm")];

/// Global parameter defaults shared by every board.
pub fn global_defaults() -> ParameterSet {
    [("integrated_rom_size", ParamValue::Int(0x10000))].into_iter().collect()
}

/// Merge the four parameter layers into the final set passed to SoC
/// construction. Pure function; no layer is mutated.
pub fn resolve_parameters(
    global: &ParameterSet,
    board_overrides: &ParameterSet,
    cli: &CliOverrides,
    capabilities: &BTreeSet<Capability>,
) -> ParameterSet {
    let mut params = global.clone();
    params.merge(board_overrides);

    if let Some(device) = &cli.device {
        params.set("device", device.as_str());
    }
    if let Some(variant) = &cli.variant {
        params.set("variant", variant.as_str());
    }
    if let Some(toolchain) = &cli.toolchain {
        params.set("toolchain", toolchain.as_str());
    }
    params.merge(&cli.extra);

    // Capability-forced values overwrite everything above, by definition.
    for (cap, uart_name) in TRANSPORT_PRIORITY {
        if capabilities.contains(cap) {
            params.set("uart_name", *uart_name);
            break;
        }
    }
    if capabilities.contains(&Capability::Ethernet) {
        params.set("with_ethernet", true);
    }
    if capabilities.contains(&Capability::Sata) {
        params.set("with_sata", true);
    }

    params
}

#[cfg(test)]
mod tests {
    use super::*;

    fn caps(list: &[Capability]) -> BTreeSet<Capability> {
        list.iter().copied().collect()
    }

    #[test]
    fn board_overrides_beat_global_defaults() {
        let board: ParameterSet =
            [("integrated_rom_size", ParamValue::Int(0x8000))].into_iter().collect();
        let params =
            resolve_parameters(&global_defaults(), &board, &CliOverrides::default(), &caps(&[]));
        assert_eq!(
            params.get("integrated_rom_size").and_then(ParamValue::as_int),
            Some(0x8000)
        );
    }

    #[test]
    fn unset_cli_flags_do_not_override() {
        let board: ParameterSet = [("device", ParamValue::Str("xc7a100t".into()))]
            .into_iter()
            .collect();
        let params =
            resolve_parameters(&global_defaults(), &board, &CliOverrides::default(), &caps(&[]));
        assert_eq!(params.get("device").and_then(ParamValue::as_str), Some("xc7a100t"));
    }

    #[test]
    fn explicit_cli_flags_override_board_defaults() {
        let board: ParameterSet = [
            ("integrated_rom_size", ParamValue::Int(0x8000)),
            ("device", ParamValue::Str("xc7a35t".into())),
        ]
        .into_iter()
        .collect();
        let cli = CliOverrides {
            device: Some("xc7a100t".into()),
            extra: [("integrated_rom_size", ParamValue::Int(0x4000))].into_iter().collect(),
            ..Default::default()
        };
        let params = resolve_parameters(&global_defaults(), &board, &cli, &caps(&[]));
        assert_eq!(params.get("device").and_then(ParamValue::as_str), Some("xc7a100t"));
        assert_eq!(
            params.get("integrated_rom_size").and_then(ParamValue::as_int),
            Some(0x4000)
        );
    }

    #[test]
    fn ethernet_capability_forces_flag() {
        let mut global = global_defaults();
        global.set("with_ethernet", false);
        let params = resolve_parameters(
            &global,
            &ParameterSet::new(),
            &CliOverrides::default(),
            &caps(&[Capability::Ethernet]),
        );
        assert_eq!(params.get("with_ethernet").and_then(ParamValue::as_bool), Some(true));
    }

    #[test]
    fn sata_capability_forces_flag() {
        let params = resolve_parameters(
            &global_defaults(),
            &ParameterSet::new(),
            &CliOverrides::default(),
            &caps(&[Capability::Sata]),
        );
        assert_eq!(params.get("with_sata").and_then(ParamValue::as_bool), Some(true));
    }

    #[test]
    fn transport_priority_is_usb_fifo_first() {
        let params = resolve_parameters(
            &global_defaults(),
            &ParameterSet::new(),
            &CliOverrides::default(),
            &caps(&[Capability::UsbAcm, Capability::UsbFifo]),
        );
        assert_eq!(params.get("uart_name").and_then(ParamValue::as_str), Some("usb_fifo"));

        let params = resolve_parameters(
            &global_defaults(),
            &ParameterSet::new(),
            &CliOverrides::default(),
            &caps(&[Capability::UsbAcm]),
        );
        assert_eq!(params.get("uart_name").and_then(ParamValue::as_str), Some("usb_acm"));
    }

    #[test]
    fn serial_does_not_force_uart_name() {
        let params = resolve_parameters(
            &global_defaults(),
            &ParameterSet::new(),
            &CliOverrides::default(),
            &caps(&[Capability::Serial]),
        );
        assert!(params.get("uart_name").is_none());
    }

    #[test]
    fn layers_are_not_mutated() {
        let global = global_defaults();
        let board: ParameterSet =
            [("integrated_rom_size", ParamValue::Int(0xa000))].into_iter().collect();
        let _ = resolve_parameters(&global, &board, &CliOverrides::default(), &caps(&[]));
        assert_eq!(
            global.get("integrated_rom_size").and_then(ParamValue::as_int),
            Some(0x10000)
        );
        assert_eq!(board.len(), 1);
    }
}
