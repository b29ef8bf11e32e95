//! mcp-validate CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use mcp_validate::cli::{resolve_project_root, Cli, ValidateCommand};
use mcp_validate::ui::create_ui;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is WARN
///
/// Logs go to stderr; stdout carries the report.
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("mcp_validate=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("mcp_validate=warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("mcp-validate starting with args: {:?}", cli);

    let mut ui = create_ui(!cli.no_color);

    let command = match resolve_project_root(cli.project.clone(), std::env::current_dir)
        .and_then(|root| ValidateCommand::new(&root, cli.python.clone()))
    {
        Ok(command) => command,
        Err(e) => {
            ui.error(&format!("Error: {}", e));
            return ExitCode::from(1);
        }
    };

    let result = command.execute(ui.as_mut());
    ExitCode::from(result.exit_code as u8)
}
