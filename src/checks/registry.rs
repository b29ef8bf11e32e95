//! The fixed, ordered list of check groups.

use super::{
    validate_gitlab_mcp, validate_mcp_packages, validate_memory_bank, validate_project_structure,
    validate_sonar_mcp, CheckContext,
};
use crate::error::Result;
use crate::ui::UserInterface;

/// Signature shared by all check groups.
pub type GroupFn = fn(&CheckContext, &mut dyn UserInterface) -> Result<bool>;

/// A named check group.
#[derive(Clone, Copy)]
pub struct CheckGroup {
    /// Name shown in the summary table.
    pub name: &'static str,
    /// The group's check function.
    pub run: GroupFn,
}

impl std::fmt::Debug for CheckGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CheckGroup").field("name", &self.name).finish_non_exhaustive()
    }
}

/// Every check group, in run order.
pub const CHECK_GROUPS: &[CheckGroup] = &[
    CheckGroup {
        name: "Project Structure",
        run: validate_project_structure,
    },
    CheckGroup {
        name: "Memory Bank",
        run: validate_memory_bank,
    },
    CheckGroup {
        name: "MCP Packages",
        run: validate_mcp_packages,
    },
    CheckGroup {
        name: "GitLab MCP",
        run: validate_gitlab_mcp,
    },
    CheckGroup {
        name: "SonarQube MCP",
        run: validate_sonar_mcp,
    },
];
