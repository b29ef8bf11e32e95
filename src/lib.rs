//! mcp-validate - Preflight validation for the GitLab/SonarQube MCP workflow kit.
//!
//! Checks that a project has the kit's workflow files, a customized MR
//! configuration, the MCP server packages, and the MCP environment variables,
//! then prints a pass/fail summary.
//!
//! # Modules
//!
//! - [`checks`] - Leaf checks, check groups, and the group registry
//! - [`cli`] - Command-line interface and the validation command
//! - [`error`] - Error types and result aliases
//! - [`packages`] - Package installation probing
//! - [`report`] - Run summary and exit code
//! - [`runner`] - Group execution with per-group failure isolation
//! - [`secrets`] - Masking of secret values for display
//! - [`ui`] - Report output
//!
//! # Example
//!
//! ```
//! use mcp_validate::checks::{CheckContext, CHECK_GROUPS};
//! use mcp_validate::packages::StaticProbe;
//! use mcp_validate::runner::run_groups;
//! use mcp_validate::ui::MockUI;
//!
//! let empty = std::env::temp_dir().join("mcp-validate-doc-empty");
//! let ctx = CheckContext::with_vars(&empty, Box::new(StaticProbe::new()), Vec::<(String, String)>::new());
//! let mut ui = MockUI::new();
//!
//! let report = run_groups(CHECK_GROUPS, &ctx, &mut ui);
//! assert_eq!(report.exit_code(), 1);
//! ```

pub mod checks;
pub mod cli;
pub mod error;
pub mod packages;
pub mod report;
pub mod runner;
pub mod secrets;
pub mod ui;

pub use error::{Result, ValidateError};
