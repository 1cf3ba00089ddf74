//! Supported video framebuffer timings.
//!
//! A closed mapping from a `<width>x<height>_<refresh>Hz` mode string to a
//! structured timing record. Membership in this table is the only validation
//! socforge performs on a requested video mode; everything else is up to the
//! video PHY.

use serde::{Deserialize, Serialize};

/// Video timing record for one supported mode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoTiming {
    /// Mode token, e.g. `1920x1080_60Hz`.
    pub mode: String,
    /// Pixel clock in Hz.
    pub pix_clk: u64,
    pub h_active: u32,
    pub h_blanking: u32,
    pub h_sync: u32,
    pub h_front_porch: u32,
    pub v_active: u32,
    pub v_blanking: u32,
    pub v_sync: u32,
    pub v_front_porch: u32,
}

struct ModeEntry {
    mode: &'static str,
    pix_clk: u64,
    h: (u32, u32, u32, u32),
    v: (u32, u32, u32, u32),
}

const MODES: &[ModeEntry] = &[
    ModeEntry {
        mode: "1920x1080_60Hz",
        pix_clk: 148_500_000,
        h: (1920, 280, 44, 88),
        v: (1080, 45, 5, 4),
    },
    ModeEntry {
        mode: "1920x1080_30Hz",
        pix_clk: 74_250_000,
        h: (1920, 280, 44, 88),
        v: (1080, 45, 5, 4),
    },
    ModeEntry {
        mode: "1280x720_60Hz",
        pix_clk: 74_250_000,
        h: (1280, 370, 40, 110),
        v: (720, 30, 5, 5),
    },
    ModeEntry {
        mode: "640x480_75Hz",
        pix_clk: 31_500_000,
        h: (640, 200, 64, 16),
        v: (480, 20, 3, 1),
    },
];

/// Look up the timing record for a mode string.
///
/// Returns `None` for modes outside the supported table; callers treat that
/// as a configuration error before touching the SoC.
pub fn resolve_video_mode(mode: &str) -> Option<VideoTiming> {
    MODES.iter().find(|m| m.mode == mode).map(|m| VideoTiming {
        mode: m.mode.to_string(),
        pix_clk: m.pix_clk,
        h_active: m.h.0,
        h_blanking: m.h.1,
        h_sync: m.h.2,
        h_front_porch: m.h.3,
        v_active: m.v.0,
        v_blanking: m.v.1,
        v_sync: m.v.2,
        v_front_porch: m.v.3,
    })
}

/// All supported mode tokens, in table order.
pub fn video_modes() -> impl Iterator<Item = &'static str> {
    MODES.iter().map(|m| m.mode)
}
