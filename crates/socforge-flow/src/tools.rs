//! Subprocess collaborators.
//!
//! The flow never implements toolchain work itself; it invokes external
//! commands and maps their failures to [`FlowError::Tool`]. Command names are
//! plain data so callers (and tests) can substitute their own.

use std::path::Path;
use std::process::Command;

use log::debug;
use socforge_boards::LoadMethod;

use crate::error::{FlowError, Result};

/// Command names for every external tool the flow invokes.
#[derive(Debug, Clone)]
pub struct ToolCommands {
    /// Gateware generator/builder consuming the `soc.json` plan.
    pub generator: String,
    /// Device-tree source generator consuming the `soc.json` plan.
    pub dts_generator: String,
    /// Device-tree compiler.
    pub dtc: String,
    /// Generic platform bitstream programmer.
    pub programmer: String,
    /// Documentation builder.
    pub doc_builder: String,
    /// Git, for provisioning steps.
    pub git: String,
}

impl Default for ToolCommands {
    fn default() -> Self {
        Self {
            generator: "litex-soc-gen".to_string(),
            dts_generator: "litex-json2dts".to_string(),
            dtc: "dtc".to_string(),
            programmer: "openFPGALoader".to_string(),
            doc_builder: "sphinx-build".to_string(),
            git: "git".to_string(),
        }
    }
}

/// Run one external tool to completion, mapping invocation failure and
/// non-zero exit to [`FlowError::Tool`].
pub fn run_tool(program: &str, args: &[&str]) -> Result<()> {
    debug!("running {program} {}", args.join(" "));
    let output = Command::new(program)
        .args(args)
        .output()
        .map_err(|e| FlowError::Tool {
            tool: program.to_string(),
            message: format!("failed to invoke: {e}"),
        })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(FlowError::Tool {
            tool: program.to_string(),
            message: format!("exited with {}: {}", output.status, stderr.trim()),
        });
    }
    Ok(())
}

/// Push a bitstream to the device using the board's load method.
///
/// The generic path hands the file to the platform programmer; boards with a
/// load override run their own utility, with `{bitstream}` in the declared
/// arguments replaced by the bitstream path.
pub fn load_bitstream(load: &LoadMethod, bitstream: &Path, tools: &ToolCommands) -> Result<()> {
    let bitstream = bitstream.display().to_string();
    match load {
        LoadMethod::Programmer => run_tool(&tools.programmer, &[&bitstream]),
        LoadMethod::Command { program, args } => {
            let args: Vec<String> = args
                .iter()
                .map(|a| a.replace("{bitstream}", &bitstream))
                .collect();
            let args: Vec<&str> = args.iter().map(String::as_str).collect();
            run_tool(program, &args)
        }
    }
}
