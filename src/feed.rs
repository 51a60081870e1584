//! Release-feed client.
//!
//! One blocking GET per lookup, no retries. The feed is the only layer with
//! typed failures; [`crate::checker`] folds all of them into "no update".

use std::time::Duration;

use thiserror::Error;

use crate::release::Release;
use crate::repo::RepoRef;

/// Default feed host.
pub const DEFAULT_FEED_URL: &str = "https://api.github.com";

/// Default request timeout. The round trip blocks the calling thread, so
/// it stays bounded.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Errors from a single feed round trip.
#[derive(Debug, Error)]
pub enum FeedError {
    /// Connect, DNS, or timeout failure.
    #[error("Transport error fetching {url}: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Non-2xx response.
    #[error("HTTP {status} fetching {url}")]
    Status { url: String, status: u16 },

    /// Body was not the expected release document.
    #[error("Malformed release document from {url}: {message}")]
    Parse { url: String, message: String },
}

/// Blocking client for the latest-release endpoint.
///
/// # Example
///
/// ```no_run
/// use relcheck::feed::ReleaseFeed;
/// use relcheck::repo::RepoRef;
///
/// let feed = ReleaseFeed::default();
/// let repo = RepoRef::new("acme", "widget");
/// let release = feed.latest_release(&repo).unwrap();
/// println!("latest tag: {}", release.tag_name);
/// ```
pub struct ReleaseFeed {
    base_url: String,
    client: reqwest::blocking::Client,
    token: Option<String>,
}

impl ReleaseFeed {
    /// Create a client against the default feed host.
    pub fn new(timeout: Duration) -> Self {
        Self::with_base_url(timeout, DEFAULT_FEED_URL)
    }

    /// Create a client against a custom feed host (mirrors, tests).
    pub fn with_base_url(timeout: Duration, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            client: reqwest::blocking::Client::builder()
                .user_agent(concat!("relcheck/", env!("CARGO_PKG_VERSION")))
                .timeout(timeout)
                .build()
                .expect("Failed to create HTTP client"),
            token: None,
        }
    }

    /// Attach a bearer token for authenticated feed access.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Fetch the latest published release for a repository.
    pub fn latest_release(&self, repo: &RepoRef) -> Result<Release, FeedError> {
        let url = self.release_url(repo);
        tracing::debug!("fetching {}", url);

        let mut request = self.client.get(&url);
        if let Some(token) = &self.token {
            request = request.header("Authorization", format!("Bearer {}", token));
        }

        let response = request.send().map_err(|source| FeedError::Transport {
            url: url.clone(),
            source,
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FeedError::Status {
                url,
                status: status.as_u16(),
            });
        }

        response.json::<Release>().map_err(|err| FeedError::Parse {
            url,
            message: err.to_string(),
        })
    }

    /// The feed base URL this client talks to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn release_url(&self, repo: &RepoRef) -> String {
        format!(
            "{}/repos/{}/{}/releases/latest",
            self.base_url, repo.owner, repo.repo
        )
    }
}

impl Default for ReleaseFeed {
    fn default() -> Self {
        Self::new(DEFAULT_TIMEOUT)
    }
}
