//! Required workflow files.

use super::{check_file_exists, CheckContext};
use crate::error::Result;
use crate::ui::UserInterface;

/// Files the workflow kit expects, as (project-relative path, label).
pub const REQUIRED_FILES: &[(&str, &str)] = &[
    (".clinerules/rules.md", "Cline rules"),
    (".clinerules/workflows/start.md", "Start workflow"),
    (".clinerules/workflows/morning.md", "Morning workflow"),
    (".clinerules/workflows/eod.md", "EOD workflow"),
    (".clinerules/workflows/commit.md", "Commit workflow"),
    (".clinerules/workflows/close.md", "Close workflow"),
    ("memory-bank/current-mr.md", "MR configuration"),
    ("memory-bank/handover.md", "Handover template"),
    ("memory-bank/story.md", "Story template"),
    ("memory-bank/retro.md", "Retro template"),
    (".gitlab/merge_request_templates/default.md", "MR template"),
    (".gitignore", "Git ignore file"),
];

/// Check every required file. All entries are reported, even after a miss.
pub fn validate_project_structure(ctx: &CheckContext, ui: &mut dyn UserInterface) -> Result<bool> {
    ui.show_header("Project Structure");

    let mut all_good = true;
    for (path, label) in REQUIRED_FILES {
        if !check_file_exists(ctx, ui, path, label) {
            all_good = false;
        }
    }

    Ok(all_good)
}
