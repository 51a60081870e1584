//! The `check` command.

use crate::cli::args::CheckArgs;
use crate::error::Result;
use crate::repo::RepoRef;
use crate::ui::UserInterface;

use super::context::FeedOptions;
use super::dispatcher::{Command, CommandResult};

/// Runs an update check and reports the outcome.
///
/// Exits 0 whether or not an update exists; fail-open extends to the
/// process boundary. Only argument errors fail the command.
pub struct CheckCommand {
    options: FeedOptions,
    args: CheckArgs,
}

impl CheckCommand {
    /// Create a new check command.
    pub fn new(options: FeedOptions, args: CheckArgs) -> Self {
        Self { options, args }
    }
}

impl Command for CheckCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let repo: RepoRef = self.args.repo.parse()?;
        let checker = self.options.checker();

        let mut spinner = (!self.args.json)
            .then(|| ui.start_spinner(&format!("Checking {} for updates...", repo)));

        let check = if self.args.fresh {
            checker.check_for_update_fresh(&self.args.current, &repo)
        } else {
            checker.check_for_update(&self.args.current, &repo)
        };

        if let Some(spinner) = spinner.as_mut() {
            spinner.finish_clear();
        }

        if self.args.json {
            let output = serde_json::to_string_pretty(&check).map_err(anyhow::Error::from)?;
            println!("{}", output);
            return Ok(CommandResult::success());
        }

        if check.has_update {
            let new_version = check.new_version.as_deref().unwrap_or_default();
            ui.success(&format!(
                "Update available: {} -> {}",
                check.current, new_version
            ));
            if let Some(url) = &check.package_url {
                ui.message(&format!("  Package: {}", url));
            }
            if let Some(url) = &check.info_url {
                ui.message(&format!("  Release: {}", url));
            }
        } else {
            ui.success(&format!("{} is up to date ({})", repo, check.current));
        }

        if ui.output_mode().shows_detail() {
            ui.message(&format!("  Checked at: {}", check.checked_at));
        }

        Ok(CommandResult::success())
    }
}
