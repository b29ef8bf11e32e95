//! Package installation probing.
//!
//! The workflow kit relies on MCP server packages installed into a Python
//! environment. This module answers "is package X importable?" without
//! treating a missing package as an error.
//!
//! # Modules
//!
//! - [`probe`] - The [`PackageProbe`] trait and its implementations
//! - [`status`] - The [`PackageStatus`] probe result

pub mod probe;
pub mod status;

pub use probe::{
    import_name, is_executable, parse_system_path, resolve_tool_path, PackageProbe,
    PythonImportProbe, StaticProbe, DEFAULT_PYTHON, IMPORT_ERROR_EXIT,
};
pub use status::PackageStatus;
