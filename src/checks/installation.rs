//! MCP package installation.

use super::CheckContext;
use crate::error::{Result, ValidateError};
use crate::packages::{import_name, PackageStatus};
use crate::ui::UserInterface;

/// Packages the MCP servers are distributed as.
pub const MCP_PACKAGES: &[&str] = &["gitlab-mcp", "sonar-mcp"];

/// Check that every MCP package is importable.
///
/// Only a definite `Installed` passes; an indeterminate probe is reported
/// with its reason and fails. A package that is present but crashes on import
/// is an error for the whole group.
pub fn validate_mcp_packages(ctx: &CheckContext, ui: &mut dyn UserInterface) -> Result<bool> {
    ui.show_header("MCP Package Installation");

    let mut all_good = true;
    for package in MCP_PACKAGES {
        let module = import_name(package);
        let status = ctx.packages().probe(&module);
        tracing::debug!("{} ({}): {:?}", package, module, status);

        match status {
            PackageStatus::Installed => {
                ui.success(&format!("{} is installed", package));
                continue;
            }
            PackageStatus::NotInstalled => {
                ui.error(&format!("{} is NOT installed", package));
            }
            PackageStatus::Indeterminate { reason } => {
                ui.error(&format!("{} could not be checked: {}", package, reason));
            }
            PackageStatus::ImportFailed { reason } => {
                return Err(ValidateError::PackageImport {
                    package: package.to_string(),
                    reason,
                });
            }
        }
        ui.message(&format!("   Install with: uv pip install {}", package));
        all_good = false;
    }

    Ok(all_good)
}
