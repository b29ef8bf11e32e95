//! Command-line interface.
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`validate`] - The validation command

pub mod args;
pub mod validate;

pub use args::Cli;
pub use validate::{resolve_project_root, CommandResult, ValidateCommand};
