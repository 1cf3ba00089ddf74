//! socforge CLI — build Linux-capable SoCs for FPGA dev boards.
//!
//! Turns a board name (or `all`) into a configured SoC build request and
//! drives it through build, device-tree generation, optional bitstream load,
//! and optional documentation.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use log::debug;

use socforge_assemble::{AssemblyOptions, CliOverrides};
use socforge_boards::parse::load_board_toml;
use socforge_flow::{run, run_board, FlowOptions, TargetSet};
use socforge_soc::{ParamValue, ParameterSet};

#[derive(Parser, Debug)]
#[command(name = "socforge", version, about = "Linux SoC builder for FPGA dev boards")]
struct Cli {
    /// FPGA board name, or "all" to target every supported board
    #[arg(long)]
    board: Option<String>,

    /// Custom board definition (.board.toml) used instead of the registry
    #[arg(long, value_name = "FILE", conflicts_with = "board")]
    board_file: Option<PathBuf>,

    /// List supported boards and exit
    #[arg(long)]
    list_boards: bool,

    /// FPGA device
    #[arg(long)]
    device: Option<String>,

    /// FPGA board variant
    #[arg(long)]
    variant: Option<String>,

    /// Toolchain used to build
    #[arg(long)]
    toolchain: Option<String>,

    /// Override a SoC construction parameter (repeatable)
    #[arg(long = "set", value_name = "KEY=VALUE")]
    set: Vec<String>,

    /// Build bitstream
    #[arg(long)]
    build: bool,

    /// Load bitstream (to SRAM)
    #[arg(long)]
    load: bool,

    /// Flash bitstream/images (to SPI flash)
    #[arg(long)]
    flash: bool,

    /// Build documentation
    #[arg(long)]
    doc: bool,

    /// Local IP address
    #[arg(long, default_value = "192.168.1.50")]
    local_ip: String,

    /// Remote IP address of the TFTP server
    #[arg(long, default_value = "192.168.1.100")]
    remote_ip: String,

    /// SPI data width (maximum transferred bits per transfer)
    #[arg(long, default_value_t = 8)]
    spi_data_width: u32,

    /// SPI clock frequency
    #[arg(long, default_value_t = 1_000_000)]
    spi_clk_freq: u64,

    /// Video configuration
    #[arg(long, default_value = "1920x1080_60Hz")]
    video: String,

    /// Root of per-board build directories
    #[arg(long, default_value = "build")]
    output_dir: PathBuf,
}

/// Parse one `--set KEY=VALUE` override. Values reading as booleans or
/// integers (decimal or 0x-prefixed) become typed parameters; anything else
/// stays a string.
fn parse_set(arg: &str) -> Result<(String, ParamValue)> {
    let (key, value) = arg
        .split_once('=')
        .with_context(|| format!("--set '{arg}' is not of the form KEY=VALUE"))?;
    if key.is_empty() {
        bail!("--set '{arg}' has an empty key");
    }
    let value = if let Ok(b) = value.parse::<bool>() {
        ParamValue::Bool(b)
    } else if let Some(hex) = value.strip_prefix("0x") {
        match u64::from_str_radix(hex, 16) {
            Ok(i) => ParamValue::Int(i),
            Err(_) => ParamValue::Str(value.to_string()),
        }
    } else if let Ok(i) = value.parse::<u64>() {
        ParamValue::Int(i)
    } else {
        ParamValue::Str(value.to_string())
    };
    Ok((key.to_string(), value))
}

fn flow_options(cli: &Cli) -> Result<FlowOptions> {
    let mut extra = ParameterSet::new();
    for arg in &cli.set {
        let (key, value) = parse_set(arg)?;
        extra.set(key, value);
    }

    Ok(FlowOptions {
        assembly: AssemblyOptions {
            spi_data_width: cli.spi_data_width,
            spi_clk_freq: cli.spi_clk_freq,
            local_ip: cli.local_ip.clone(),
            remote_ip: cli.remote_ip.clone(),
            video_mode: cli.video.clone(),
        },
        cli: CliOverrides {
            device: cli.device.clone(),
            variant: cli.variant.clone(),
            toolchain: cli.toolchain.clone(),
            extra,
        },
        build: cli.build,
        load: cli.load,
        flash: cli.flash,
        doc: cli.doc,
        output_dir: cli.output_dir.clone(),
        ..Default::default()
    })
}

fn list_boards() {
    println!("Supported boards:");
    println!();
    for name in socforge_boards::board_names() {
        println!("  {name}");
    }
    println!();
    println!("Use --board <name>, --board all, or --board-file <file>.");
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();
    debug!("parsed cli arguments: {cli:?}");

    if cli.list_boards {
        list_boards();
        return Ok(());
    }

    let opts = flow_options(&cli)?;

    if let Some(path) = &cli.board_file {
        let board = load_board_toml(path)
            .with_context(|| format!("loading board file {}", path.display()))?;
        run_board(&board, &opts)?;
        return Ok(());
    }

    let Some(board) = &cli.board else {
        bail!("one of --board, --board-file, or --list-boards is required");
    };
    run(&TargetSet::from_arg(board), &opts)?;
    Ok(())
}
