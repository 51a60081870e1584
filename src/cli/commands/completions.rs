//! The `completions` command.

use std::io;

use clap::CommandFactory;
use clap_complete::generate;

use crate::cli::args::{Cli, CompletionsArgs};
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// Generates shell completion scripts.
pub struct CompletionsCommand {
    args: CompletionsArgs,
}

impl CompletionsCommand {
    /// Create a new completions command.
    pub fn new(args: CompletionsArgs) -> Self {
        Self { args }
    }
}

impl Command for CompletionsCommand {
    fn execute(&self, _ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let mut cmd = Cli::command();
        generate(self.args.shell, &mut cmd, "relcheck", &mut io::stdout());
        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;
    use clap_complete::Shell;

    #[test]
    fn generates_without_error() {
        let mut ui = MockUI::new();
        let cmd = CompletionsCommand::new(CompletionsArgs { shell: Shell::Bash });
        let result = cmd.execute(&mut ui).unwrap();
        assert!(result.success);
    }
}
