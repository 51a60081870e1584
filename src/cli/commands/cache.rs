//! Cache command implementation.
//!
//! Provides `relcheck cache status` and `relcheck cache clear`.

use chrono::{DateTime, Utc};
use clap::{Args, Subcommand};

use crate::cache::CheckCache;
use crate::error::Result;
use crate::repo::RepoRef;
use crate::ui::UserInterface;

use super::context::FeedOptions;
use super::dispatcher::{Command, CommandResult};

/// Arguments for the cache command.
#[derive(Debug, Clone, Args)]
pub struct CacheArgs {
    #[command(subcommand)]
    pub command: CacheSubcommand,
}

/// Cache subcommands.
#[derive(Debug, Clone, Subcommand)]
pub enum CacheSubcommand {
    /// Show cached check results and their age.
    Status,
    /// Remove cached check results.
    Clear {
        /// Only clear the entry for this repository.
        #[arg(short, long, value_name = "OWNER/REPO")]
        repo: Option<String>,
    },
}

/// The cache command implementation.
pub struct CacheCommand {
    options: FeedOptions,
    args: CacheArgs,
}

impl CacheCommand {
    /// Create a new cache command.
    pub fn new(options: FeedOptions, args: CacheArgs) -> Self {
        Self { options, args }
    }
}

impl Command for CacheCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let cache = match self.options.cache() {
            Some(cache) => cache,
            None => {
                ui.warning("No cache directory available");
                return Ok(CommandResult::success());
            }
        };

        match &self.args.command {
            CacheSubcommand::Status => show_status(&cache, ui),
            CacheSubcommand::Clear { repo } => clear(&cache, repo.as_deref(), ui),
        }
    }
}

fn show_status(cache: &CheckCache, ui: &mut dyn UserInterface) -> Result<CommandResult> {
    let rows = cache.status();

    if rows.is_empty() {
        ui.message("Check cache is empty");
        return Ok(CommandResult::success());
    }

    ui.message(&format!("{} cached entries:\n", rows.len()));
    for row in rows {
        let state = if row.fresh { "fresh" } else { "stale" };
        ui.message(&format!(
            "  {} [{}] fetched {}",
            row.repo,
            state,
            format_age(row.fetched_at)
        ));
    }
    ui.message(&format!("\nLocation: {}", cache.dir().display()));

    Ok(CommandResult::success())
}

fn clear(
    cache: &CheckCache,
    repo: Option<&str>,
    ui: &mut dyn UserInterface,
) -> Result<CommandResult> {
    match repo {
        Some(repo) => {
            let repo: RepoRef = repo.parse()?;
            cache.clear_repo(&repo)?;
            ui.success(&format!("Cleared cache entry for {}", repo));
        }
        None => {
            cache.clear()?;
            ui.success("Check cache cleared");
        }
    }
    Ok(CommandResult::success())
}

/// Render a fetch age like "3m ago" or "2d ago".
fn format_age(fetched_at: DateTime<Utc>) -> String {
    let secs = Utc::now()
        .signed_duration_since(fetched_at)
        .num_seconds()
        .max(0);

    if secs < 60 {
        format!("{}s ago", secs)
    } else if secs < 3600 {
        format!("{}m ago", secs / 60)
    } else if secs < 86400 {
        format!("{}h ago", secs / 3600)
    } else {
        format!("{}d ago", secs / 86400)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::release::Release;
    use crate::ui::MockUI;
    use chrono::Duration;
    use tempfile::TempDir;

    fn release(tag: &str) -> Release {
        Release {
            tag_name: tag.to_string(),
            html_url: None,
            zipball_url: Some(format!("https://example.com/zipball/{}", tag)),
            name: None,
            body: None,
            published_at: None,
            prerelease: false,
            assets: Vec::new(),
        }
    }

    fn command_for(temp: &TempDir, subcommand: CacheSubcommand) -> CacheCommand {
        let options = FeedOptions {
            cache_dir: Some(temp.path().to_path_buf()),
            ..FeedOptions::default()
        };
        CacheCommand::new(
            options,
            CacheArgs {
                command: subcommand,
            },
        )
    }

    #[test]
    fn status_on_empty_cache() {
        let temp = TempDir::new().unwrap();
        let mut ui = MockUI::new();

        let cmd = command_for(&temp, CacheSubcommand::Status);
        let result = cmd.execute(&mut ui).unwrap();

        assert!(result.success);
        assert!(ui.has_message("Check cache is empty"));
    }

    #[test]
    fn status_lists_cached_repos() {
        let temp = TempDir::new().unwrap();
        let cache = CheckCache::with_dir(temp.path());
        cache
            .store(&RepoRef::new("acme", "widget"), &release("v1.0.0"))
            .unwrap();

        let mut ui = MockUI::new();
        let cmd = command_for(&temp, CacheSubcommand::Status);
        cmd.execute(&mut ui).unwrap();

        assert!(ui.has_message("acme/widget"));
        assert!(ui.has_message("fresh"));
    }

    #[test]
    fn clear_empties_the_cache() {
        let temp = TempDir::new().unwrap();
        let cache = CheckCache::with_dir(temp.path());
        cache
            .store(&RepoRef::new("acme", "widget"), &release("v1.0.0"))
            .unwrap();

        let mut ui = MockUI::new();
        let cmd = command_for(&temp, CacheSubcommand::Clear { repo: None });
        cmd.execute(&mut ui).unwrap();

        assert!(ui.has_message("Check cache cleared"));
        assert!(cache.status().is_empty());
    }

    #[test]
    fn clear_single_repo_leaves_others() {
        let temp = TempDir::new().unwrap();
        let cache = CheckCache::with_dir(temp.path());
        cache
            .store(&RepoRef::new("acme", "widget"), &release("v1.0.0"))
            .unwrap();
        cache
            .store(&RepoRef::new("acme", "gadget"), &release("v2.0.0"))
            .unwrap();

        let mut ui = MockUI::new();
        let cmd = command_for(
            &temp,
            CacheSubcommand::Clear {
                repo: Some("acme/widget".to_string()),
            },
        );
        cmd.execute(&mut ui).unwrap();

        let rows = cache.status();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].repo, "acme/gadget");
    }

    #[test]
    fn clear_with_bad_repo_is_an_error() {
        let temp = TempDir::new().unwrap();
        let mut ui = MockUI::new();
        let cmd = command_for(
            &temp,
            CacheSubcommand::Clear {
                repo: Some("nonsense".to_string()),
            },
        );

        assert!(cmd.execute(&mut ui).is_err());
    }

    #[test]
    fn format_age_buckets() {
        let now = Utc::now();
        assert!(format_age(now).ends_with("s ago"));
        assert_eq!(format_age(now - Duration::minutes(5)), "5m ago");
        assert_eq!(format_age(now - Duration::hours(3)), "3h ago");
        assert_eq!(format_age(now - Duration::days(2)), "2d ago");
    }
}
