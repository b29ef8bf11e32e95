//! MR configuration placeholder detection.
//!
//! `memory-bank/current-mr.md` ships as a template. Existing is not enough:
//! while it still carries the template's sample values the workflows would
//! target the wrong merge request, so placeholder content fails the check.
//!
//! The markers are literal substrings of the shipped template. If the
//! template's sample values change, [`PLACEHOLDER_MARKERS`] must change too.

use std::fs;

use super::CheckContext;
use crate::error::{Result, ValidateError};
use crate::ui::UserInterface;

/// Project-relative path of the MR configuration file.
pub const MR_CONFIG_PATH: &str = "memory-bank/current-mr.md";

/// Template values that mark the configuration as unedited.
pub const PLACEHOLDER_MARKERS: &[&str] = &["project_id: 123", "feature-x"];

/// Return the placeholder markers present in `content`.
pub fn find_placeholders(content: &str) -> Vec<&'static str> {
    PLACEHOLDER_MARKERS
        .iter()
        .copied()
        .filter(|marker| content.contains(marker))
        .collect()
}

/// Validate the memory-bank MR configuration.
///
/// Missing file or placeholder content returns `Ok(false)`. A file that
/// exists but cannot be read as text is an error.
pub fn validate_memory_bank(ctx: &CheckContext, ui: &mut dyn UserInterface) -> Result<bool> {
    ui.show_header("Memory Bank Configuration");

    let path = ctx.resolve(MR_CONFIG_PATH);
    if !path.exists() {
        ui.error(&format!("{} NOT FOUND", MR_CONFIG_PATH));
        return Ok(false);
    }
    ui.success(&format!("{} exists", MR_CONFIG_PATH));

    let bytes = fs::read(&path).map_err(|source| ValidateError::FileRead {
        path: path.clone(),
        source,
    })?;
    let content =
        String::from_utf8(bytes).map_err(|_| ValidateError::InvalidUtf8 { path: path.clone() })?;

    let found = find_placeholders(&content);
    if found.is_empty() {
        ui.success("Configuration appears to be customized");
        return Ok(true);
    }

    tracing::debug!("Placeholder markers in {}: {:?}", MR_CONFIG_PATH, found);
    ui.warning(&format!(
        "WARNING: {} contains placeholder values",
        MR_CONFIG_PATH
    ));
    ui.message("   Update project_id, mr_iid, and branch names before running workflows");
    Ok(false)
}
