//! Check group execution.
//!
//! Groups run once each, strictly in order. A group that returns `Err` is
//! reported and recorded as failed; the remaining groups still run.
//!
//! # Example
//!
//! ```
//! use mcp_validate::checks::{CheckContext, CheckGroup};
//! use mcp_validate::packages::StaticProbe;
//! use mcp_validate::runner::run_groups;
//! use mcp_validate::ui::MockUI;
//!
//! let groups = [CheckGroup { name: "Always", run: |_, _| Ok(true) }];
//! let ctx = CheckContext::with_vars(".", Box::new(StaticProbe::new()), Vec::<(String, String)>::new());
//! let mut ui = MockUI::new();
//!
//! let report = run_groups(&groups, &ctx, &mut ui);
//! assert!(report.all_passed());
//! ```

use crate::checks::{CheckContext, CheckGroup};
use crate::report::SummaryReport;
use crate::ui::UserInterface;

/// Run every group and collect the summary.
pub fn run_groups(
    groups: &[CheckGroup],
    ctx: &CheckContext,
    ui: &mut dyn UserInterface,
) -> SummaryReport {
    let mut report = SummaryReport::new();

    for group in groups {
        tracing::debug!("Running check group: {}", group.name);

        let passed = match (group.run)(ctx, ui) {
            Ok(passed) => passed,
            Err(e) => {
                tracing::warn!(group = group.name, error = %e, "check group failed");
                ui.message("");
                ui.error(&format!("Error during {} validation: {}", group.name, e));
                false
            }
        };

        report.record(group.name, passed);
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidateError;
    use crate::packages::StaticProbe;
    use crate::ui::MockUI;

    fn ctx() -> CheckContext {
        CheckContext::with_vars(".", Box::new(StaticProbe::new()), Vec::<(String, String)>::new())
    }

    fn pass(_: &CheckContext, ui: &mut dyn UserInterface) -> crate::error::Result<bool> {
        ui.success("pass ran");
        Ok(true)
    }

    fn fail(_: &CheckContext, ui: &mut dyn UserInterface) -> crate::error::Result<bool> {
        ui.error("fail ran");
        Ok(false)
    }

    fn explode(_: &CheckContext, _: &mut dyn UserInterface) -> crate::error::Result<bool> {
        Err(ValidateError::Other(anyhow::anyhow!("disk on fire")))
    }

    #[test]
    fn all_passing_groups_pass() {
        let groups = [
            CheckGroup { name: "A", run: pass },
            CheckGroup { name: "B", run: pass },
        ];
        let mut ui = MockUI::new();

        let report = run_groups(&groups, &ctx(), &mut ui);
        assert!(report.all_passed());
        assert_eq!(report.exit_code(), 0);
    }

    #[test]
    fn one_failing_group_fails_report() {
        let groups = [
            CheckGroup { name: "A", run: pass },
            CheckGroup { name: "B", run: fail },
            CheckGroup { name: "C", run: pass },
        ];
        let mut ui = MockUI::new();

        let report = run_groups(&groups, &ctx(), &mut ui);
        assert!(!report.all_passed());
        assert_eq!(report.exit_code(), 1);
        assert_eq!(report.get("B"), Some(false));
        assert_eq!(report.get("C"), Some(true));
    }

    #[test]
    fn erroring_group_does_not_stop_later_groups() {
        let groups = [
            CheckGroup { name: "Boom", run: explode },
            CheckGroup { name: "After", run: pass },
        ];
        let mut ui = MockUI::new();

        let report = run_groups(&groups, &ctx(), &mut ui);
        assert_eq!(report.get("Boom"), Some(false));
        assert_eq!(report.get("After"), Some(true));
        assert!(ui.has_error("Error during Boom validation: disk on fire"));
        assert!(ui.has_success("pass ran"));
    }

    #[test]
    fn groups_run_in_given_order() {
        let groups = [
            CheckGroup { name: "First", run: fail },
            CheckGroup { name: "Second", run: pass },
        ];
        let mut ui = MockUI::new();

        let report = run_groups(&groups, &ctx(), &mut ui);
        let names: Vec<&str> = report.entries().iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, ["First", "Second"]);
        assert_eq!(ui.lines(), ["❌ fail ran", "✅ pass ran"]);
    }
}
