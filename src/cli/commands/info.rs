//! The `info` command.

use crate::checker::PluginIdentity;
use crate::cli::args::InfoArgs;
use crate::error::Result;
use crate::repo::RepoRef;
use crate::ui::UserInterface;

use super::context::FeedOptions;
use super::dispatcher::{Command, CommandResult};

/// Fetches and displays the latest-release snapshot for a repository.
pub struct InfoCommand {
    options: FeedOptions,
    args: InfoArgs,
}

impl InfoCommand {
    /// Create a new info command.
    pub fn new(options: FeedOptions, args: InfoArgs) -> Self {
        Self { options, args }
    }

    fn identity(&self, repo: &RepoRef) -> PluginIdentity {
        let mut identity = PluginIdentity::from_repo(repo);
        if let Some(name) = &self.args.name {
            identity.name = name.clone();
        }
        if let Some(slug) = &self.args.slug {
            identity.slug = slug.clone();
        }
        if let Some(author) = &self.args.author {
            identity.author = author.clone();
        }
        identity
    }
}

impl Command for InfoCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let repo: RepoRef = self.args.repo.parse()?;
        let identity = self.identity(&repo);
        let checker = self.options.checker();

        let mut spinner =
            (!self.args.json).then(|| ui.start_spinner(&format!("Fetching {} info...", repo)));

        let info = if self.args.fresh {
            checker.fetch_plugin_info_fresh(&identity, &repo)
        } else {
            checker.fetch_plugin_info(&identity, &repo)
        };

        if let Some(spinner) = spinner.as_mut() {
            spinner.finish_clear();
        }

        let info = match info {
            Some(info) => info,
            None => {
                // Fail open: absence of information is the whole signal.
                ui.warning(&format!("No release information available for {}", repo));
                return Ok(CommandResult::success());
            }
        };

        if self.args.json {
            let output = serde_json::to_string_pretty(&info).map_err(anyhow::Error::from)?;
            println!("{}", output);
            return Ok(CommandResult::success());
        }

        ui.message(&format!("Name:     {}", info.name));
        ui.message(&format!("Slug:     {}", info.slug));
        ui.message(&format!("Version:  {}", info.version));
        ui.message(&format!("Author:   {}", info.author));
        if let Some(homepage) = &info.homepage {
            ui.message(&format!("Homepage: {}", homepage));
        }
        if let Some(download) = &info.download_link {
            ui.message(&format!("Download: {}", download));
        }

        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;
    use httpmock::prelude::*;

    fn options_for(server: &MockServer, cache_dir: &std::path::Path) -> FeedOptions {
        FeedOptions {
            feed_url: Some(server.base_url()),
            timeout: Some(5),
            cache_dir: Some(cache_dir.to_path_buf()),
            token: None,
        }
    }

    fn args() -> InfoArgs {
        InfoArgs {
            repo: "acme/widget".to_string(),
            name: None,
            slug: None,
            author: None,
            fresh: false,
            json: false,
        }
    }

    #[test]
    fn displays_snapshot_fields() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/repos/acme/widget/releases/latest");
            then.status(200).json_body(serde_json::json!({
                "tag_name": "v2.0.0",
                "html_url": "https://example.com/releases/v2.0.0",
                "zipball_url": "https://example.com/zipball/v2.0.0"
            }));
        });

        let temp = tempfile::TempDir::new().unwrap();
        let mut ui = MockUI::new();
        let cmd = InfoCommand::new(options_for(&server, temp.path()), args());
        let result = cmd.execute(&mut ui).unwrap();

        assert!(result.success);
        assert!(ui.has_message("widget"));
        assert!(ui.has_message("2.0.0"));
        assert!(ui.has_message("https://example.com/releases/v2.0.0"));
    }

    #[test]
    fn identity_overrides_apply() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/repos/acme/widget/releases/latest");
            then.status(200)
                .json_body(serde_json::json!({"tag_name": "v2.0.0"}));
        });

        let temp = tempfile::TempDir::new().unwrap();
        let mut ui = MockUI::new();
        let mut info_args = args();
        info_args.name = Some("Widget Pro".to_string());
        info_args.author = Some("Acme Inc".to_string());

        let cmd = InfoCommand::new(options_for(&server, temp.path()), info_args);
        cmd.execute(&mut ui).unwrap();

        assert!(ui.has_message("Widget Pro"));
        assert!(ui.has_message("Acme Inc"));
    }

    #[test]
    fn feed_failure_warns_and_succeeds() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/repos/acme/widget/releases/latest");
            then.status(404).body("Not Found");
        });

        let temp = tempfile::TempDir::new().unwrap();
        let mut ui = MockUI::new();
        let cmd = InfoCommand::new(options_for(&server, temp.path()), args());
        let result = cmd.execute(&mut ui).unwrap();

        assert!(result.success);
        assert!(ui.has_message("No release information available"));
        assert!(ui.errors().is_empty());
    }
}
