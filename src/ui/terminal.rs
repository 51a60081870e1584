//! Terminal UI.

use std::io::Write;

use console::Term;

use super::{
    should_use_colors, OutputMode, ProgressSpinner, SpinnerHandle, Theme, UserInterface,
};

/// Terminal UI implementation writing to stdout.
pub struct TerminalUI {
    term: Term,
    theme: Theme,
    mode: OutputMode,
    interactive: bool,
}

impl TerminalUI {
    /// Create a new terminal UI.
    pub fn new(interactive: bool, mode: OutputMode) -> Self {
        let theme = if should_use_colors() {
            Theme::new()
        } else {
            Theme::plain()
        };

        Self {
            term: Term::stdout(),
            theme,
            mode,
            interactive,
        }
    }
}

impl UserInterface for TerminalUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.term, "{}", msg).ok();
        }
    }

    fn success(&mut self, msg: &str) {
        writeln!(self.term, "{}", self.theme.format_success(msg)).ok();
    }

    fn warning(&mut self, msg: &str) {
        writeln!(self.term, "{}", self.theme.format_warning(msg)).ok();
    }

    fn error(&mut self, msg: &str) {
        writeln!(self.term, "{}", self.theme.format_error(msg)).ok();
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        if self.interactive && self.mode.shows_spinners() {
            Box::new(ProgressSpinner::new(message))
        } else {
            Box::new(ProgressSpinner::hidden())
        }
    }

    fn is_interactive(&self) -> bool {
        self.interactive && self.term.is_term()
    }
}

/// Create the UI for the current invocation.
pub fn create_ui(interactive: bool, mode: OutputMode) -> Box<dyn UserInterface> {
    Box::new(TerminalUI::new(interactive, mode))
}
