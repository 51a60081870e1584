//! Update reconciliation.
//!
//! The core contract of the crate: given the installed version and a
//! repository, decide whether a newer release is published. Every failure
//! underneath (transport, HTTP status, malformed body) folds into the
//! "no update" answer. Fail open is deliberate: a flaky upstream must
//! never block the caller, so [`UpdateChecker::check_for_update`] is
//! infallible and [`UpdateChecker::fetch_plugin_info`] returns an Option.
//!
//! The two operations are one contract with two trigger points: they share
//! the fetch and differ only in the derived record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::cache::CheckCache;
use crate::feed::ReleaseFeed;
use crate::release::Release;
use crate::repo::RepoRef;
use crate::version::Version;

/// Outcome of a single update check.
///
/// Derived and ephemeral: recomputed on every check, no identity. When
/// `has_update` is set, `new_version` and `package_url` are present and
/// non-empty; use [`UpdateCheck::none`] and [`UpdateCheck::available`] to
/// keep that invariant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateCheck {
    /// Version the caller reported as installed.
    pub current: String,
    /// Whether a newer release exists upstream.
    pub has_update: bool,
    /// Version of the newer release.
    pub new_version: Option<String>,
    /// Archive download link for the newer release.
    pub package_url: Option<String>,
    /// Release page of the newer release.
    pub info_url: Option<String>,
    /// When this check was performed.
    pub checked_at: DateTime<Utc>,
}

impl UpdateCheck {
    /// A "no update available" result. Every failure folds into this shape.
    pub fn none(current: &str) -> Self {
        Self {
            current: current.to_string(),
            has_update: false,
            new_version: None,
            package_url: None,
            info_url: None,
            checked_at: Utc::now(),
        }
    }

    /// An available update. Callers must hold a non-empty version and
    /// package URL; the info URL is optional.
    pub fn available(
        current: &str,
        new_version: impl Into<String>,
        package_url: impl Into<String>,
        info_url: Option<String>,
    ) -> Self {
        Self {
            current: current.to_string(),
            has_update: true,
            new_version: Some(new_version.into()),
            package_url: Some(package_url.into()),
            info_url,
            checked_at: Utc::now(),
        }
    }
}

/// Caller-supplied identity of the plugin being checked.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PluginIdentity {
    /// Display name.
    pub name: String,
    /// Stable slug.
    pub slug: String,
    /// Author name.
    pub author: String,
}

impl PluginIdentity {
    /// Derive an identity from the repository: name and slug from the
    /// repo name, author from the owner.
    pub fn from_repo(repo: &RepoRef) -> Self {
        Self {
            name: repo.repo.clone(),
            slug: repo.repo.clone(),
            author: repo.owner.clone(),
        }
    }
}

/// Display-oriented snapshot of the latest published release.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PluginInfo {
    /// Display name.
    pub name: String,
    /// Stable slug.
    pub slug: String,
    /// Latest published version.
    pub version: String,
    /// Author name.
    pub author: String,
    /// Release page URL.
    pub homepage: Option<String>,
    /// Archive download link.
    pub download_link: Option<String>,
}

/// Checks a repository's release feed for updates.
///
/// Construct one per check with an explicit [`ReleaseFeed`]; attach a
/// [`CheckCache`] to bound live feed calls to one per TTL window.
///
/// # Example
///
/// ```no_run
/// use relcheck::checker::UpdateChecker;
/// use relcheck::feed::ReleaseFeed;
/// use relcheck::repo::RepoRef;
///
/// let checker = UpdateChecker::new(ReleaseFeed::default());
/// let repo = RepoRef::new("acme", "widget");
/// let check = checker.check_for_update("1.0.0", &repo);
/// if check.has_update {
///     println!("update to {}", check.new_version.unwrap());
/// }
/// ```
pub struct UpdateChecker {
    feed: ReleaseFeed,
    cache: Option<CheckCache>,
}

impl UpdateChecker {
    /// Create a checker over a feed, without a cache.
    pub fn new(feed: ReleaseFeed) -> Self {
        Self { feed, cache: None }
    }

    /// Attach a cache consulted before the live feed.
    pub fn with_cache(mut self, cache: CheckCache) -> Self {
        self.cache = Some(cache);
        self
    }

    /// Check whether a release newer than `current` is published.
    ///
    /// Infallible: transport, status and parse failures all yield a
    /// "no update" result. With a cache attached, a fresh entry is served
    /// without a network call, and a stale entry stands in when the live
    /// fetch fails.
    pub fn check_for_update(&self, current: &str, repo: &RepoRef) -> UpdateCheck {
        match self.release(repo) {
            Some(release) => reconcile(current, &release),
            None => UpdateCheck::none(current),
        }
    }

    /// Check against the live feed, ignoring any attached cache.
    pub fn check_for_update_fresh(&self, current: &str, repo: &RepoRef) -> UpdateCheck {
        match self.live_release(repo) {
            Some(release) => reconcile(current, &release),
            None => UpdateCheck::none(current),
        }
    }

    /// Fetch a display snapshot of the latest release.
    ///
    /// Returns `None` on any fetch or parse failure.
    pub fn fetch_plugin_info(
        &self,
        identity: &PluginIdentity,
        repo: &RepoRef,
    ) -> Option<PluginInfo> {
        self.release(repo)
            .map(|release| snapshot(identity, &release))
    }

    /// Fetch a display snapshot from the live feed, ignoring any cache.
    pub fn fetch_plugin_info_fresh(
        &self,
        identity: &PluginIdentity,
        repo: &RepoRef,
    ) -> Option<PluginInfo> {
        self.live_release(repo)
            .map(|release| snapshot(identity, &release))
    }

    /// Latest release via cache-then-live-then-stale policy.
    fn release(&self, repo: &RepoRef) -> Option<Release> {
        if let Some(cache) = &self.cache {
            if let Some(release) = cache.load_fresh(repo) {
                tracing::debug!("serving {} from cache", repo);
                return Some(release);
            }
        }

        match self.live_release(repo) {
            Some(release) => {
                if let Some(cache) = &self.cache {
                    if let Err(err) = cache.store(repo, &release) {
                        tracing::debug!("cache write for {} failed: {}", repo, err);
                    }
                }
                Some(release)
            }
            None => {
                let stale = self.cache.as_ref().and_then(|cache| cache.load_stale(repo));
                if stale.is_some() {
                    tracing::debug!("live fetch for {} failed, serving stale entry", repo);
                }
                stale
            }
        }
    }

    fn live_release(&self, repo: &RepoRef) -> Option<Release> {
        match self.feed.latest_release(repo) {
            Ok(release) => Some(release),
            Err(err) => {
                tracing::debug!("release fetch for {} failed, failing open: {}", repo, err);
                None
            }
        }
    }
}

/// Compare the installed version against a fetched release.
///
/// The fetched tag must be strictly newer AND the release must offer a
/// package archive; anything else is "no update".
fn reconcile(current: &str, release: &Release) -> UpdateCheck {
    let installed = Version::parse(current);
    let published = Version::parse(&release.tag_name);

    if published > installed {
        match release.package_url() {
            Some(package_url) => {
                return UpdateCheck::available(
                    current,
                    release.tag_name.trim_start_matches('v'),
                    package_url,
                    release.html_url.clone(),
                );
            }
            None => {
                tracing::debug!("release {} has no package archive", release.tag_name);
            }
        }
    }

    UpdateCheck::none(current)
}

fn snapshot(identity: &PluginIdentity, release: &Release) -> PluginInfo {
    PluginInfo {
        name: identity.name.clone(),
        slug: identity.slug.clone(),
        version: release.tag_name.trim_start_matches('v').to_string(),
        author: identity.author.clone(),
        homepage: release.html_url.clone(),
        download_link: release.package_url().map(String::from),
    }
}
