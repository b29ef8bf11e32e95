//! CLI argument definitions.
//!
//! Every flag is optional; running with no arguments validates the current
//! directory.

use clap::Parser;
use std::path::PathBuf;

use crate::packages::DEFAULT_PYTHON;

/// Validate the MCP workflow kit setup in a project.
#[derive(Debug, Parser)]
#[command(name = "mcp-validate")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to project root (overrides current directory)
    #[arg(short, long)]
    pub project: Option<PathBuf>,

    /// Python interpreter used to check MCP package installation
    #[arg(long, env = "MCP_VALIDATE_PYTHON", default_value = DEFAULT_PYTHON)]
    pub python: PathBuf,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_args_uses_defaults() {
        let cli = Cli::try_parse_from(["mcp-validate"]).unwrap();
        assert!(cli.project.is_none());
        assert!(!cli.no_color);
        assert!(!cli.debug);
    }

    #[test]
    fn parses_all_flags() {
        let cli = Cli::try_parse_from([
            "mcp-validate",
            "--project",
            "/work/kit",
            "--python",
            "/opt/venv/bin/python",
            "--no-color",
            "--debug",
        ])
        .unwrap();
        assert_eq!(cli.project, Some(PathBuf::from("/work/kit")));
        assert_eq!(cli.python, PathBuf::from("/opt/venv/bin/python"));
        assert!(cli.no_color);
        assert!(cli.debug);
    }

    #[test]
    fn rejects_positional_arguments() {
        assert!(Cli::try_parse_from(["mcp-validate", "extra"]).is_err());
    }
}
