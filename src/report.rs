//! Run summary and exit code.

use crate::ui::{StatusKind, UserInterface};

/// Remediation steps printed when any group fails.
pub const NEXT_STEPS: &[&str] = &[
    "Update memory-bank/current-mr.md with your project details",
    "Configure MCP servers in Cline → MCP Servers",
    "Install missing packages: uv pip install gitlab-mcp sonar-mcp",
    "Run this script again to verify",
];

/// Per-group outcomes, in run order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SummaryReport {
    entries: Vec<(String, bool)>,
}

impl SummaryReport {
    /// Create an empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a group outcome. Recording the same name again replaces it.
    pub fn record(&mut self, name: impl Into<String>, passed: bool) {
        let name = name.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = passed,
            None => self.entries.push((name, passed)),
        }
    }

    /// Outcome of a named group.
    pub fn get(&self, name: &str) -> Option<bool> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, passed)| *passed)
    }

    /// All recorded outcomes.
    pub fn entries(&self) -> &[(String, bool)] {
        &self.entries
    }

    /// Whether every recorded group passed.
    pub fn all_passed(&self) -> bool {
        self.entries.iter().all(|(_, passed)| *passed)
    }

    /// Process exit code: 0 when everything passed, 1 otherwise.
    pub fn exit_code(&self) -> i32 {
        if self.all_passed() {
            0
        } else {
            1
        }
    }

    /// Print the summary table and the closing verdict.
    pub fn render(&self, ui: &mut dyn UserInterface) {
        ui.show_header("Validation Summary");

        for (name, passed) in &self.entries {
            let kind = StatusKind::from_passed(*passed);
            let label = if *passed { "PASS" } else { "FAIL" };
            ui.message(&format!("{} {}: {}", kind.icon(), label, name));
        }

        ui.show_rule();

        if self.all_passed() {
            ui.success("All checks passed! You're ready to use the workflows.");
            return;
        }

        ui.error("Some checks failed. Please review the errors above.");
        ui.message("");
        ui.message("Next steps:");
        for (idx, step) in NEXT_STEPS.iter().enumerate() {
            ui.message(&format!("{}. {}", idx + 1, step));
        }
    }
}
