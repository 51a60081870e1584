//! Mock UI for tests.

use super::{OutputMode, SpinnerHandle, UserInterface};

/// Records UI output for assertions in tests.
#[derive(Debug, Default)]
pub struct MockUI {
    messages: Vec<String>,
    successes: Vec<String>,
    warnings: Vec<String>,
    errors: Vec<String>,
    interactive: bool,
}

impl MockUI {
    /// Create a non-interactive mock.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock that reports as interactive.
    pub fn interactive() -> Self {
        Self {
            interactive: true,
            ..Self::default()
        }
    }

    /// Recorded plain messages.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Recorded success messages.
    pub fn successes(&self) -> &[String] {
        &self.successes
    }

    /// Recorded warning messages.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Recorded error messages.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// True if any recorded line, of any severity, contains `needle`.
    pub fn has_message(&self, needle: &str) -> bool {
        self.messages
            .iter()
            .chain(&self.successes)
            .chain(&self.warnings)
            .chain(&self.errors)
            .any(|line| line.contains(needle))
    }
}

impl UserInterface for MockUI {
    fn output_mode(&self) -> OutputMode {
        OutputMode::Normal
    }

    fn message(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
    }

    fn success(&mut self, msg: &str) {
        self.successes.push(msg.to_string());
    }

    fn warning(&mut self, msg: &str) {
        self.warnings.push(msg.to_string());
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        self.messages.push(message.to_string());
        Box::new(MockSpinner)
    }

    fn is_interactive(&self) -> bool {
        self.interactive
    }
}

/// Spinner that does nothing.
pub struct MockSpinner;

impl SpinnerHandle for MockSpinner {
    fn set_message(&mut self, _msg: &str) {}
    fn finish_success(&mut self, _msg: &str) {}
    fn finish_error(&mut self, _msg: &str) {}
    fn finish_clear(&mut self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_each_severity() {
        let mut ui = MockUI::new();
        ui.message("plain");
        ui.success("good");
        ui.warning("careful");
        ui.error("bad");

        assert_eq!(ui.messages(), ["plain"]);
        assert_eq!(ui.successes(), ["good"]);
        assert_eq!(ui.warnings(), ["careful"]);
        assert_eq!(ui.errors(), ["bad"]);
    }

    #[test]
    fn has_message_searches_all_severities() {
        let mut ui = MockUI::new();
        ui.warning("update available");
        assert!(ui.has_message("update"));
        assert!(!ui.has_message("missing"));
    }

    #[test]
    fn spinner_message_is_recorded() {
        let mut ui = MockUI::new();
        let mut spinner = ui.start_spinner("Checking acme/widget...");
        spinner.finish_clear();
        assert!(ui.has_message("acme/widget"));
    }

    #[test]
    fn interactivity_flag() {
        assert!(!MockUI::new().is_interactive());
        assert!(MockUI::interactive().is_interactive());
    }
}
