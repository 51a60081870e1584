//! Visual theme and styling.

use console::Style;

/// Relcheck's visual theme.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Style for success messages (green).
    pub success: Style,
    /// Style for warning messages (orange).
    pub warning: Style,
    /// Style for error messages (red bold).
    pub error: Style,
    /// Style for dim/secondary text.
    pub dim: Style,
    /// Style for highlighted/important text (bold).
    pub highlight: Style,
    /// Style for key labels in key-value displays (bold).
    pub key: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self::new()
    }
}

impl Theme {
    /// Create the default theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            warning: Style::new().color256(208),
            error: Style::new().red().bold(),
            dim: Style::new().dim(),
            highlight: Style::new().bold(),
            key: Style::new().bold(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            warning: Style::new(),
            error: Style::new(),
            dim: Style::new(),
            highlight: Style::new(),
            key: Style::new(),
        }
    }

    /// Format a success line.
    pub fn format_success(&self, msg: &str) -> String {
        format!("{} {}", self.success.apply_to("✓"), msg)
    }

    /// Format a warning line.
    pub fn format_warning(&self, msg: &str) -> String {
        format!("{} {}", self.warning.apply_to("⚠"), msg)
    }

    /// Format an error line.
    pub fn format_error(&self, msg: &str) -> String {
        format!("{} {}", self.error.apply_to("✗"), msg)
    }
}

/// Whether colored output should be used.
pub fn should_use_colors() -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    console::colors_enabled()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_success_includes_icon_and_message() {
        let theme = Theme::plain();
        assert_eq!(theme.format_success("done"), "✓ done");
    }

    #[test]
    fn format_warning_includes_icon_and_message() {
        let theme = Theme::plain();
        assert_eq!(theme.format_warning("careful"), "⚠ careful");
    }

    #[test]
    fn format_error_includes_icon_and_message() {
        let theme = Theme::plain();
        assert_eq!(theme.format_error("broken"), "✗ broken");
    }

    #[test]
    fn no_color_env_disables_colors() {
        std::env::set_var("NO_COLOR", "1");
        assert!(!should_use_colors());
        std::env::remove_var("NO_COLOR");
    }
}
