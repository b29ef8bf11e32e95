//! Visual theme and styling.

use console::Style;

/// Width of the `=` rule drawn around section headers.
pub const RULE_WIDTH: usize = 60;

/// Validator visual theme.
#[derive(Debug, Clone)]
pub struct ValidateTheme {
    /// Style for success icons (green).
    pub success: Style,
    /// Style for warning icons (orange).
    pub warning: Style,
    /// Style for error icons (red bold).
    pub error: Style,
    /// Style for section header titles (bold).
    pub header: Style,
    /// Style for the `=` rules around headers (dim).
    pub border: Style,
}

impl Default for ValidateTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl ValidateTheme {
    /// Create the default theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            warning: Style::new().color256(208),
            error: Style::new().red().bold(),
            header: Style::new().bold(),
            border: Style::new().dim(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            warning: Style::new(),
            error: Style::new(),
            header: Style::new(),
            border: Style::new(),
        }
    }

    /// Horizontal rule used above and below section headers.
    pub fn format_rule(&self) -> String {
        self.border.apply_to("=".repeat(RULE_WIDTH)).to_string()
    }

    /// Format a section header: rule, indented title, rule.
    pub fn format_header(&self, title: &str) -> String {
        format!(
            "{}\n  {}\n{}",
            self.format_rule(),
            self.header.apply_to(title),
            self.format_rule()
        )
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors() -> bool {
    // Check NO_COLOR env var (https://no-color.org/)
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    console::Term::stdout().is_term()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_rule_is_sixty_equals() {
        let theme = ValidateTheme::plain();
        assert_eq!(theme.format_rule(), "=".repeat(60));
    }

    #[test]
    fn plain_header_layout() {
        let theme = ValidateTheme::plain();
        let header = theme.format_header("Project Structure");
        let lines: Vec<&str> = header.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1], "  Project Structure");
        assert_eq!(lines[0], lines[2]);
    }

    #[test]
    fn default_theme_creates_without_panic() {
        let theme = ValidateTheme::default();
        assert!(theme.format_header("Memory Bank").contains("Memory Bank"));
    }
}
