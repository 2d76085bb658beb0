//! Visual theme and styling.
//!
//! One palette serves status lines and rendered diagnostics, so a warning
//! looks the same whether it comes from the CLI or from a report.

use console::Style;

use crate::lint::Severity;

/// The notypos visual theme.
#[derive(Debug, Clone)]
pub struct NotyposTheme {
    /// Success messages (green).
    pub success: Style,
    /// Warning messages and warning-level findings (yellow bold).
    pub warning: Style,
    /// Error messages and error-level findings (red bold).
    pub error: Style,
    /// Hint-level findings (cyan).
    pub hint: Style,
    /// Location arrows and other secondary text (dim).
    pub location: Style,
    /// Headers (cyan bold).
    pub header: Style,
}

impl Default for NotyposTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl NotyposTheme {
    /// Create the default theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            warning: Style::new().yellow().bold(),
            error: Style::new().red().bold(),
            hint: Style::new().cyan(),
            location: Style::new().dim(),
            header: Style::new().bold().cyan(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            warning: Style::new(),
            error: Style::new(),
            hint: Style::new(),
            location: Style::new(),
            header: Style::new(),
        }
    }

    /// Emit ANSI codes even when the target is not a terminal.
    ///
    /// Needed when rendering into a buffer that is printed later.
    pub fn forced(self) -> Self {
        Self {
            success: self.success.force_styling(true),
            warning: self.warning.force_styling(true),
            error: self.error.force_styling(true),
            hint: self.hint.force_styling(true),
            location: self.location.force_styling(true),
            header: self.header.force_styling(true),
        }
    }

    /// Style for a diagnostic of `severity`.
    pub fn severity(&self, severity: Severity) -> &Style {
        match severity {
            Severity::Hint => &self.hint,
            Severity::Warning => &self.warning,
            Severity::Error => &self.error,
        }
    }

    /// Format a success message (icon + text in green).
    pub fn format_success(&self, msg: &str) -> String {
        format!("{}", self.success.apply_to(format!("✓ {}", msg)))
    }

    /// Format a warning message (icon + text in yellow).
    pub fn format_warning(&self, msg: &str) -> String {
        format!("{}", self.warning.apply_to(format!("⚠ {}", msg)))
    }

    /// Format an error message (icon + text in red bold).
    pub fn format_error(&self, msg: &str) -> String {
        format!("{}", self.error.apply_to(format!("✗ {}", msg)))
    }

    /// Format a header banner.
    pub fn format_header(&self, title: &str) -> String {
        format!("{}", self.header.apply_to(title))
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
