//! Terminal report output.

use console::Term;
use std::io::Write;

use super::{should_use_colors, StatusKind, UserInterface, ValidateTheme};

/// Writes the report to stdout.
pub struct TerminalUI {
    term: Term,
    theme: ValidateTheme,
}

impl TerminalUI {
    /// Create a terminal UI, styled when stdout supports it.
    pub fn new() -> Self {
        let theme = if should_use_colors() {
            ValidateTheme::new()
        } else {
            ValidateTheme::plain()
        };

        Self::with_theme(theme)
    }

    /// Create a terminal UI with an explicit theme.
    pub fn with_theme(theme: ValidateTheme) -> Self {
        Self {
            term: Term::stdout(),
            theme,
        }
    }
}

impl Default for TerminalUI {
    fn default() -> Self {
        Self::new()
    }
}

impl UserInterface for TerminalUI {
    fn message(&mut self, msg: &str) {
        writeln!(self.term, "{}", msg).ok();
    }

    fn success(&mut self, msg: &str) {
        writeln!(self.term, "{}", StatusKind::Success.format(&self.theme, msg)).ok();
    }

    fn warning(&mut self, msg: &str) {
        writeln!(self.term, "{}", StatusKind::Warning.format(&self.theme, msg)).ok();
    }

    fn error(&mut self, msg: &str) {
        writeln!(self.term, "{}", StatusKind::Failed.format(&self.theme, msg)).ok();
    }

    fn show_header(&mut self, title: &str) {
        writeln!(self.term).ok();
        writeln!(self.term, "{}", self.theme.format_header(title)).ok();
    }

    fn show_rule(&mut self) {
        writeln!(self.term).ok();
        writeln!(self.term, "{}", self.theme.format_rule()).ok();
    }
}

/// Create the report UI.
///
/// `color` is the caller's preference; colors are still dropped when stdout
/// is not a terminal or `NO_COLOR` is set.
pub fn create_ui(color: bool) -> Box<dyn UserInterface> {
    if color {
        Box::new(TerminalUI::new())
    } else {
        Box::new(TerminalUI::with_theme(ValidateTheme::plain()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terminal_ui_creation() {
        let ui = TerminalUI::new();
        drop(ui);
    }

    #[test]
    fn create_ui_without_color() {
        let mut ui = create_ui(false);
        ui.message("");
    }
}
