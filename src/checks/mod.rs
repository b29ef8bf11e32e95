//! Validation checks.
//!
//! Leaf checks ([`check_file_exists`], [`check_env_var`]) report one item and
//! return whether it passed. Group checks combine leaf checks under a section
//! header and return `Result<bool>`: `Ok(false)` for an ordinary failed check,
//! `Err` only when something unexpected stopped the group.
//!
//! # Modules
//!
//! - [`structure`] - Required workflow files
//! - [`memory_bank`] - MR configuration placeholder detection
//! - [`installation`] - MCP package installation
//! - [`mcp_env`] - GitLab and SonarQube MCP environment variables
//! - [`registry`] - The fixed, ordered list of groups

pub mod installation;
pub mod mcp_env;
pub mod memory_bank;
pub mod registry;
pub mod structure;

pub use installation::{validate_mcp_packages, MCP_PACKAGES};
pub use mcp_env::{validate_gitlab_mcp, validate_sonar_mcp, EnvGroup, GITLAB_ENV, SONAR_ENV};
pub use memory_bank::{find_placeholders, validate_memory_bank, MR_CONFIG_PATH, PLACEHOLDER_MARKERS};
pub use registry::{CheckGroup, GroupFn, CHECK_GROUPS};
pub use structure::{validate_project_structure, REQUIRED_FILES};

use std::collections::HashMap;
use std::env::VarError;
use std::path::{Path, PathBuf};

use crate::packages::PackageProbe;
use crate::secrets::mask_preview;
use crate::ui::UserInterface;

/// Environment variable lookup, shaped like [`std::env::var`].
pub type EnvLookup = Box<dyn Fn(&str) -> Result<String, VarError>>;

/// Everything a check needs to look at: the project directory, the
/// environment, and the package probe.
pub struct CheckContext {
    project_root: PathBuf,
    env: EnvLookup,
    packages: Box<dyn PackageProbe>,
}

impl CheckContext {
    /// Context backed by the real process environment.
    pub fn new(project_root: impl Into<PathBuf>, packages: Box<dyn PackageProbe>) -> Self {
        Self::with_env(project_root, packages, Box::new(|key: &str| std::env::var(key)))
    }

    /// Context with a custom env var lookup function.
    ///
    /// This allows testing without modifying actual environment variables.
    pub fn with_env(
        project_root: impl Into<PathBuf>,
        packages: Box<dyn PackageProbe>,
        env: EnvLookup,
    ) -> Self {
        Self {
            project_root: project_root.into(),
            env,
            packages,
        }
    }

    /// Context whose environment is exactly `vars`.
    pub fn with_vars<K, V>(
        project_root: impl Into<PathBuf>,
        packages: Box<dyn PackageProbe>,
        vars: impl IntoIterator<Item = (K, V)>,
    ) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        let vars: HashMap<String, String> = vars
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Self::with_env(
            project_root,
            packages,
            Box::new(move |key: &str| vars.get(key).cloned().ok_or(VarError::NotPresent)),
        )
    }

    /// Directory that relative check paths are resolved against.
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Resolve a project-relative path.
    pub fn resolve(&self, relative: &str) -> PathBuf {
        self.project_root.join(relative)
    }

    /// Look up an environment variable.
    ///
    /// Returns `None` when unset or empty. Non-UTF-8 values count as set.
    pub fn env_var(&self, name: &str) -> Option<String> {
        match (self.env)(name) {
            Ok(value) if !value.is_empty() => Some(value),
            Ok(_) | Err(VarError::NotPresent) => None,
            Err(VarError::NotUnicode(raw)) => Some(raw.to_string_lossy().into_owned()),
        }
    }

    /// The package probe.
    pub fn packages(&self) -> &dyn PackageProbe {
        self.packages.as_ref()
    }
}

impl std::fmt::Debug for CheckContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CheckContext")
            .field("project_root", &self.project_root)
            .finish_non_exhaustive()
    }
}

/// Check that a project-relative path exists.
///
/// Only existence is tested, not readability.
pub fn check_file_exists(
    ctx: &CheckContext,
    ui: &mut dyn UserInterface,
    path: &str,
    label: &str,
) -> bool {
    let exists = ctx.resolve(path).exists();
    tracing::debug!("{} ({}) exists: {}", label, path, exists);

    if exists {
        ui.success(&format!("{}: {}", label, path));
    } else {
        ui.error(&format!("{} NOT FOUND: {}", label, path));
    }
    exists
}

/// Check that an environment variable is set and non-empty.
///
/// The value is only ever shown through [`mask_preview`].
pub fn check_env_var(
    ctx: &CheckContext,
    ui: &mut dyn UserInterface,
    name: &str,
    label: &str,
) -> bool {
    match ctx.env_var(name) {
        Some(value) => {
            ui.success(&format!("{}: {}", label, mask_preview(&value)));
            true
        }
        None => {
            ui.error(&format!("{} NOT SET: {}", label, name));
            false
        }
    }
}
