//! Probes that decide whether a package is importable.
//!
//! [`PythonImportProbe`] asks a real interpreter to import the module.
//! [`StaticProbe`] answers from a fixed table and backs the tests.
//!
//! # Example
//!
//! ```
//! use mcp_validate::packages::{import_name, PackageProbe, PackageStatus, StaticProbe};
//!
//! let probe = StaticProbe::new().with_installed(import_name("gitlab-mcp"));
//! assert_eq!(probe.probe("gitlab_mcp"), PackageStatus::Installed);
//! assert_eq!(probe.probe("sonar_mcp"), PackageStatus::NotInstalled);
//! ```

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use super::status::PackageStatus;

/// Interpreter used when none is configured.
pub const DEFAULT_PYTHON: &str = "python3";

/// Exit code the import script uses when the module raises `ImportError`.
///
/// Any other non-zero exit means the module was found but failed to import.
pub const IMPORT_ERROR_EXIT: i32 = 3;

/// Script run by the interpreter. Only `ImportError` maps to the sentinel.
fn import_script(module: &str) -> String {
    format!(
        "import sys\ntry:\n    import {}\nexcept ImportError:\n    sys.exit({})\n",
        module, IMPORT_ERROR_EXIT
    )
}

/// Last non-empty stderr line, usually the exception summary.
fn last_stderr_line(stderr: &[u8]) -> Option<String> {
    String::from_utf8_lossy(stderr)
        .lines()
        .rev()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .map(str::to_string)
}

/// Something that can tell whether a module is importable.
pub trait PackageProbe {
    /// Probe a module by its import name (e.g. `gitlab_mcp`).
    fn probe(&self, module: &str) -> PackageStatus;
}

/// Convert a distribution name into its import-safe module name.
///
/// ```
/// use mcp_validate::packages::import_name;
///
/// assert_eq!(import_name("sonar-mcp"), "sonar_mcp");
/// ```
pub fn import_name(package: &str) -> String {
    package.replace('-', "_")
}

/// Whether `module` is a dotted Python identifier safe to splice into `import`.
fn is_valid_module_name(module: &str) -> bool {
    !module.is_empty()
        && module.split('.').all(|part| {
            let mut chars = part.chars();
            matches!(chars.next(), Some(c) if c == '_' || c.is_ascii_alphabetic())
                && chars.all(|c| c == '_' || c.is_ascii_alphanumeric())
        })
}

/// Check whether a file has executable permission bits set.
#[cfg(unix)]
pub fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .map(|m| m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

/// On Windows, executability is determined by file extension, not permission bits.
#[cfg(not(unix))]
pub fn is_executable(path: &Path) -> bool {
    path.is_file()
}

/// Resolve a tool's binary path by iterating over PATH entries.
///
/// Returns the first match that exists and is executable.
pub fn resolve_tool_path(tool: &str, path_entries: &[PathBuf]) -> Option<PathBuf> {
    let names: Vec<String> = if cfg!(windows) {
        vec![format!("{}.exe", tool), tool.to_string()]
    } else {
        vec![tool.to_string()]
    };

    for dir in path_entries {
        for name in &names {
            let candidate = dir.join(name);
            if candidate.is_file() && is_executable(&candidate) {
                return Some(candidate);
            }
        }
    }
    None
}

/// Parse the system PATH environment variable into a list of directories.
pub fn parse_system_path() -> Vec<PathBuf> {
    std::env::var_os("PATH")
        .map(|path| std::env::split_paths(&path).collect())
        .unwrap_or_default()
}

/// Probes packages by running `<python> -c "import <module>"`.
#[derive(Debug, Clone)]
pub struct PythonImportProbe {
    interpreter: PathBuf,
    path_entries: Vec<PathBuf>,
}

impl PythonImportProbe {
    /// Create a probe for the given interpreter, searching the system PATH.
    pub fn new(interpreter: impl Into<PathBuf>) -> Self {
        Self::with_path(interpreter, parse_system_path())
    }

    /// Create a probe that searches an explicit list of PATH entries.
    pub fn with_path(interpreter: impl Into<PathBuf>, path_entries: Vec<PathBuf>) -> Self {
        Self {
            interpreter: interpreter.into(),
            path_entries,
        }
    }

    /// The configured interpreter, as given.
    pub fn interpreter(&self) -> &Path {
        &self.interpreter
    }

    /// Locate the interpreter binary.
    ///
    /// Bare names are looked up on PATH; anything with a directory part is
    /// used as-is if it is an executable file.
    pub fn resolve_interpreter(&self) -> Option<PathBuf> {
        let is_bare = self.interpreter.components().count() == 1 && !self.interpreter.is_absolute();
        if is_bare {
            let name = self.interpreter.to_str()?;
            resolve_tool_path(name, &self.path_entries)
        } else if self.interpreter.is_file() && is_executable(&self.interpreter) {
            Some(self.interpreter.clone())
        } else {
            None
        }
    }
}

impl PackageProbe for PythonImportProbe {
    fn probe(&self, module: &str) -> PackageStatus {
        if !is_valid_module_name(module) {
            return PackageStatus::indeterminate(format!("'{}' is not a valid module name", module));
        }

        let Some(python) = self.resolve_interpreter() else {
            return PackageStatus::indeterminate(format!(
                "Python interpreter '{}' not found",
                self.interpreter.display()
            ));
        };

        tracing::debug!("Probing module {} with {}", module, python.display());

        let output = Command::new(&python)
            .arg("-c")
            .arg(import_script(module))
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .output();

        match output {
            Ok(output) if output.status.success() => PackageStatus::Installed,
            Ok(output) if output.status.code() == Some(IMPORT_ERROR_EXIT) => {
                tracing::debug!("import {} raised ImportError", module);
                PackageStatus::NotInstalled
            }
            Ok(output) => {
                let reason = last_stderr_line(&output.stderr).unwrap_or_else(|| {
                    match output.status.code() {
                        Some(code) => format!("interpreter exited with code {}", code),
                        None => "interpreter was terminated by a signal".to_string(),
                    }
                });
                tracing::debug!("import {} failed: {}", module, reason);
                PackageStatus::ImportFailed { reason }
            }
            Err(e) => PackageStatus::indeterminate(format!(
                "failed to run {}: {}",
                python.display(),
                e
            )),
        }
    }
}

/// Probe with fixed answers. Unknown modules report `NotInstalled`.
#[derive(Debug, Clone, Default)]
pub struct StaticProbe {
    answers: HashMap<String, PackageStatus>,
}

impl StaticProbe {
    /// Create an empty probe.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a module as installed.
    pub fn with_installed(mut self, module: impl Into<String>) -> Self {
        self.answers.insert(module.into(), PackageStatus::Installed);
        self
    }

    /// Set an explicit answer for a module.
    pub fn with_status(mut self, module: impl Into<String>, status: PackageStatus) -> Self {
        self.answers.insert(module.into(), status);
        self
    }
}

impl PackageProbe for StaticProbe {
    fn probe(&self, module: &str) -> PackageStatus {
        self.answers
            .get(module)
            .cloned()
            .unwrap_or(PackageStatus::NotInstalled)
    }
}
