//! Release-feed payload model.
//!
//! Typed view of the feed's latest-release document. Only the fields the
//! checker consumes; the upstream document carries many more.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A published release, as returned by the latest-release endpoint.
///
/// Immutable once retrieved, never persisted outside the check cache.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Release {
    /// Release tag, e.g. `v1.0.1`. The one field the feed must provide.
    pub tag_name: String,
    /// Release page URL.
    pub html_url: Option<String>,
    /// Source archive of the tagged tree.
    pub zipball_url: Option<String>,
    /// Human release title.
    pub name: Option<String>,
    /// Release notes.
    pub body: Option<String>,
    /// Publication timestamp.
    pub published_at: Option<DateTime<Utc>>,
    /// Marked as a prerelease upstream.
    #[serde(default)]
    pub prerelease: bool,
    /// Uploaded binary assets.
    #[serde(default)]
    pub assets: Vec<ReleaseAsset>,
}

/// An uploaded release asset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReleaseAsset {
    /// Asset file name.
    pub name: String,
    /// Direct download URL.
    pub browser_download_url: String,
}

impl Release {
    /// The archive to install from: the source zipball when present,
    /// otherwise the first uploaded asset.
    pub fn package_url(&self) -> Option<&str> {
        self.zipball_url
            .as_deref()
            .filter(|url| !url.is_empty())
            .or_else(|| {
                self.assets
                    .first()
                    .map(|asset| asset.browser_download_url.as_str())
            })
    }
}
