//! The validation command.

use std::path::{Path, PathBuf};

use crate::checks::{CheckContext, CHECK_GROUPS};
use crate::error::{Result, ValidateError};
use crate::packages::PythonImportProbe;
use crate::runner::run_groups;
use crate::ui::UserInterface;

/// Banner printed before the first group.
pub const BANNER: &str = "Cline GitLab Feature Workflow Kit - MCP Validation";

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Pick the project root: the explicit `--project` value, else the current
/// directory as reported by `cwd`.
///
/// A `cwd` failure (e.g. the directory was deleted) is returned as
/// [`ValidateError::Io`] rather than becoming an empty path.
pub fn resolve_project_root(
    project: Option<PathBuf>,
    cwd: impl FnOnce() -> std::io::Result<PathBuf>,
) -> Result<PathBuf> {
    match project {
        Some(path) => Ok(path),
        None => Ok(cwd()?),
    }
}

/// Runs every check group against a project and prints the summary.
pub struct ValidateCommand {
    ctx: CheckContext,
}

impl ValidateCommand {
    /// Validate `project_root` using the real environment and `python` for
    /// package probing.
    pub fn new(project_root: &Path, python: PathBuf) -> Result<Self> {
        if !project_root.is_dir() {
            return Err(ValidateError::ProjectRootNotFound {
                path: project_root.to_path_buf(),
            });
        }

        let probe = PythonImportProbe::new(python);
        Ok(Self::with_context(CheckContext::new(project_root, Box::new(probe))))
    }

    /// Validate with a prepared context.
    pub fn with_context(ctx: CheckContext) -> Self {
        Self { ctx }
    }

    /// Execute the command.
    pub fn execute(&self, ui: &mut dyn UserInterface) -> CommandResult {
        tracing::debug!("Validating {}", self.ctx.project_root().display());

        ui.show_header(BANNER);

        let report = run_groups(CHECK_GROUPS, &self.ctx, ui);
        report.render(ui);

        if report.all_passed() {
            CommandResult::success()
        } else {
            CommandResult::failure(report.exit_code())
        }
    }
}
