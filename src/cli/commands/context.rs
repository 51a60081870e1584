//! Shared construction of the feed, cache, and checker from global flags.

use std::path::PathBuf;
use std::time::Duration;

use crate::cache::CheckCache;
use crate::checker::UpdateChecker;
use crate::cli::args::Cli;
use crate::feed::{ReleaseFeed, DEFAULT_TIMEOUT};

/// Global options shared by feed-touching commands.
#[derive(Debug, Clone, Default)]
pub struct FeedOptions {
    /// Feed base URL override.
    pub feed_url: Option<String>,
    /// Request timeout override, in seconds.
    pub timeout: Option<u64>,
    /// Cache directory override.
    pub cache_dir: Option<PathBuf>,
    /// Bearer token for the feed.
    pub token: Option<String>,
}

impl FeedOptions {
    /// Collect the global flags from parsed arguments.
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            feed_url: cli.feed_url.clone(),
            timeout: cli.timeout,
            cache_dir: cli.cache_dir.clone(),
            token: cli.token.clone(),
        }
    }

    /// Build the feed client these options describe.
    pub fn feed(&self) -> ReleaseFeed {
        let timeout = self
            .timeout
            .map(Duration::from_secs)
            .unwrap_or(DEFAULT_TIMEOUT);

        let feed = match &self.feed_url {
            Some(url) => ReleaseFeed::with_base_url(timeout, url),
            None => ReleaseFeed::new(timeout),
        };

        match &self.token {
            Some(token) => feed.with_token(token),
            None => feed,
        }
    }

    /// Build the check cache these options describe.
    ///
    /// `None` when no directory was given and the platform offers no user
    /// cache directory.
    pub fn cache(&self) -> Option<CheckCache> {
        match &self.cache_dir {
            Some(dir) => Some(CheckCache::with_dir(dir)),
            None => CheckCache::new().ok(),
        }
    }

    /// Build a checker over the feed, with the cache attached when one is
    /// available.
    pub fn checker(&self) -> UpdateChecker {
        let checker = UpdateChecker::new(self.feed());
        match self.cache() {
            Some(cache) => checker.with_cache(cache),
            None => checker,
        }
    }
}
