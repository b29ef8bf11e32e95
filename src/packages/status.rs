//! Package probe results.

/// The result of probing a single package.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PackageStatus {
    /// The package's module imported successfully.
    Installed,

    /// The import raised `ImportError`: the module is not installed.
    NotInstalled,

    /// The module was found but raised something other than `ImportError`
    /// while importing.
    ImportFailed {
        /// Last line of the interpreter's error output.
        reason: String,
    },

    /// The probe could not reach a verdict (no interpreter, spawn failure,
    /// unusable module name).
    Indeterminate {
        /// Human-readable explanation.
        reason: String,
    },
}

impl PackageStatus {
    /// Whether the package is known to be installed.
    pub fn is_installed(&self) -> bool {
        matches!(self, PackageStatus::Installed)
    }

    /// Build an indeterminate status.
    pub fn indeterminate(reason: impl Into<String>) -> Self {
        PackageStatus::Indeterminate {
            reason: reason.into(),
        }
    }
}
