//! External-dependency provisioning.
//!
//! Boards that need an external repository (e.g. the OrangeCrab USB core)
//! declare it in their descriptor; the flow provisions it here as an
//! explicit, idempotent step before SoC construction. Descriptor
//! construction itself never fetches anything.

use std::path::Path;

use log::info;
use socforge_boards::Provision;

use crate::error::Result;
use crate::tools::{run_tool, ToolCommands};

/// Ensure a declared dependency is present under `work_dir`.
///
/// Already-present destinations are left untouched, so re-running the flow
/// does not re-fetch.
pub fn ensure(provision: &Provision, work_dir: &Path, tools: &ToolCommands) -> Result<()> {
    match provision {
        Provision::GitClone { url, branch, dest } => {
            let dest_path = work_dir.join(dest);
            if dest_path.exists() {
                info!("provision: {dest} already present, skipping clone");
                return Ok(());
            }
            info!("provision: cloning {url} ({branch}) into {dest}");
            let dest_str = dest_path.display().to_string();
            run_tool(&tools.git, &["clone", "-b", branch, url, &dest_str])
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valentyusb() -> Provision {
        Provision::GitClone {
            url: "https://github.com/litex-hub/valentyusb".into(),
            branch: "hw_cdc_eptri".into(),
            dest: "valentyusb".into(),
        }
    }

    #[test]
    fn skips_when_destination_exists() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("valentyusb")).unwrap();

        // git command set to `false` would fail if invoked.
        let tools = ToolCommands {
            git: "false".into(),
            ..Default::default()
        };
        ensure(&valentyusb(), dir.path(), &tools).unwrap();
    }

    #[test]
    fn clone_failure_propagates() {
        let dir = tempfile::tempdir().unwrap();
        let tools = ToolCommands {
            git: "false".into(),
            ..Default::default()
        };
        let err = ensure(&valentyusb(), dir.path(), &tools).unwrap_err();
        assert!(matches!(err, crate::FlowError::Tool { .. }));
    }

    #[test]
    fn clone_invokes_git_once() {
        let dir = tempfile::tempdir().unwrap();
        // `true` exits zero without creating the directory, so a second call
        // would try again; what matters here is that the invocation succeeds.
        let tools = ToolCommands {
            git: "true".into(),
            ..Default::default()
        };
        ensure(&valentyusb(), dir.path(), &tools).unwrap();
    }
}
