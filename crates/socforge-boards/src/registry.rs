//! The board registry.
//!
//! A static, ordered table mapping canonical board names to descriptor
//! constructors. The table order is the registration order and defines the
//! iteration order for "all boards" runs and help text. The registry is
//! read-only; there is no runtime registration.

use crate::boards::{altera, lattice, xilinx};
use crate::descriptor::BoardDescriptor;
use crate::error::{BoardError, Result};

type DescriptorFn = fn() -> BoardDescriptor;

const REGISTRY: &[(&str, DescriptorFn)] = &[
    // Xilinx
    ("acorn_cle_215", xilinx::acorn_cle_215),
    ("arty", xilinx::arty),
    ("arty_a7", xilinx::arty_a7),
    ("arty_s7", xilinx::arty_s7),
    ("netv2", xilinx::netv2),
    ("genesys2", xilinx::genesys2),
    ("kc705", xilinx::kc705),
    ("kcu105", xilinx::kcu105),
    ("zcu104", xilinx::zcu104),
    ("nexys4ddr", xilinx::nexys4ddr),
    ("nexys_video", xilinx::nexys_video),
    ("minispartan6", xilinx::minispartan6),
    ("pipistrello", xilinx::pipistrello),
    ("xcu1525", xilinx::xcu1525),
    // Lattice
    ("versa_ecp5", lattice::versa_ecp5),
    ("ulx3s", lattice::ulx3s),
    ("hadbadge", lattice::hadbadge),
    ("orangecrab", lattice::orangecrab),
    ("camlink_4k", lattice::camlink_4k),
    ("trellisboard", lattice::trellisboard),
    ("ecpix5", lattice::ecpix5),
    // Intel/Altera
    ("de0nano", altera::de0nano),
    ("de10lite", altera::de10lite),
    ("de10nano", altera::de10nano),
    ("qmtech_ep4ce15", altera::qmtech_ep4ce15),
];

/// Normalize a user-supplied board name for registry lookup:
/// lowercase, spaces replaced with underscores.
pub fn normalize(name: &str) -> String {
    name.to_lowercase().replace(' ', "_")
}

/// Resolve a board name (normalized first) to a freshly constructed
/// descriptor.
pub fn resolve(name: &str) -> Result<BoardDescriptor> {
    let normalized = normalize(name);
    REGISTRY
        .iter()
        .find(|(key, _)| *key == normalized)
        .map(|(_, ctor)| ctor())
        .ok_or(BoardError::UnknownBoard { name: normalized })
}

/// All registered board names, in registration order.
pub fn board_names() -> impl Iterator<Item = &'static str> {
    REGISTRY.iter().map(|(name, _)| *name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_registered_name_resolves() {
        for name in board_names() {
            let board = resolve(name).unwrap();
            assert_eq!(board.name, name);
        }
    }

    #[test]
    fn unknown_board_is_an_error() {
        let err = resolve("not_a_board").unwrap_err();
        assert!(matches!(err, BoardError::UnknownBoard { name } if name == "not_a_board"));
    }

    #[test]
    fn normalization_is_case_and_space_insensitive() {
        let canonical = resolve("arty_a7").unwrap();
        assert_eq!(resolve("Arty A7").unwrap(), canonical);
        assert_eq!(resolve("ARTY_A7").unwrap(), canonical);
    }

    #[test]
    fn normalization_is_idempotent() {
        let once = normalize("Arty A7");
        assert_eq!(normalize(&once), once);
        assert_eq!(once, "arty_a7");
    }

    #[test]
    fn registration_order_is_stable() {
        let names: Vec<_> = board_names().collect();
        assert_eq!(names.first(), Some(&"acorn_cle_215"));
        assert_eq!(names.last(), Some(&"qmtech_ep4ce15"));
        assert_eq!(names.len(), 25);
    }

    #[test]
    fn resolution_constructs_fresh_descriptors() {
        let a = resolve("arty").unwrap();
        let mut b = resolve("arty").unwrap();
        b.io_extensions.push("scratch".into());
        assert_ne!(a.io_extensions, b.io_extensions);
        assert_eq!(resolve("arty").unwrap(), a);
    }

    #[test]
    fn spiflash_boards_carry_flash_constants() {
        for name in board_names() {
            let board = resolve(name).unwrap();
            assert_eq!(
                board.has(crate::capability::Capability::SpiFlash),
                board.spi_flash.is_some(),
                "flash constants must accompany the spiflash capability on {name}"
            );
        }
    }
}
