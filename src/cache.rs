//! Time-bounded cache of feed lookups.
//!
//! Every admin-surface refresh used to trigger a live feed call; the cache
//! bounds that to one call per repository per TTL window. Entries also
//! serve as a degraded fallback when the live feed fails.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::error::{RelcheckError, Result};
use crate::release::Release;
use crate::repo::RepoRef;

/// How long a cached lookup stays fresh (12 hours).
pub const DEFAULT_TTL_SECS: i64 = 12 * 60 * 60;

/// What gets persisted per repository.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct CacheEntry {
    /// Repository the release belongs to, `owner/repo`.
    repo: String,
    /// When the release was fetched.
    fetched_at: DateTime<Utc>,
    /// The fetched release document.
    release: Release,
}

/// A summary row for one cached repository.
#[derive(Debug, Clone, Serialize)]
pub struct CacheStatus {
    /// Repository, `owner/repo`.
    pub repo: String,
    /// When the entry was written.
    pub fetched_at: DateTime<Utc>,
    /// Still within the freshness window.
    pub fresh: bool,
}

/// On-disk cache of latest-release lookups, one JSON file per repository.
///
/// Unreadable or corrupt entries are treated as absent.
pub struct CheckCache {
    dir: PathBuf,
    ttl_secs: i64,
}

impl CheckCache {
    /// Cache under the user cache directory with the default TTL.
    pub fn new() -> Result<Self> {
        let dir = dirs::cache_dir()
            .ok_or(RelcheckError::NoCacheDir)?
            .join("relcheck");
        Ok(Self {
            dir,
            ttl_secs: DEFAULT_TTL_SECS,
        })
    }

    /// Cache in a custom directory (tests, `--cache-dir`).
    pub fn with_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            ttl_secs: DEFAULT_TTL_SECS,
        }
    }

    /// Override the freshness window.
    pub fn with_ttl_secs(mut self, ttl_secs: i64) -> Self {
        self.ttl_secs = ttl_secs;
        self
    }

    /// The directory entries are stored in.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Cached release for `repo`, if one exists and is still fresh.
    pub fn load_fresh(&self, repo: &RepoRef) -> Option<Release> {
        let entry = self.load_entry(repo)?;
        if self.is_fresh(entry.fetched_at) {
            Some(entry.release)
        } else {
            None
        }
    }

    /// Cached release for `repo` regardless of age. Fallback for when the
    /// live feed fails.
    pub fn load_stale(&self, repo: &RepoRef) -> Option<Release> {
        self.load_entry(repo).map(|entry| entry.release)
    }

    /// Persist a fetched release for `repo`.
    pub fn store(&self, repo: &RepoRef, release: &Release) -> Result<()> {
        fs::create_dir_all(&self.dir)?;
        let entry = CacheEntry {
            repo: repo.to_string(),
            fetched_at: Utc::now(),
            release: release.clone(),
        };
        let content = serde_json::to_string_pretty(&entry).map_err(anyhow::Error::from)?;
        fs::write(self.entry_path(repo), content)?;
        Ok(())
    }

    /// Remove the entry for one repository.
    pub fn clear_repo(&self, repo: &RepoRef) -> Result<()> {
        let path = self.entry_path(repo);
        if path.exists() {
            fs::remove_file(path)?;
        }
        Ok(())
    }

    /// Remove every cached entry.
    pub fn clear(&self) -> Result<()> {
        if self.dir.exists() {
            fs::remove_dir_all(&self.dir)?;
        }
        Ok(())
    }

    /// Summaries of all cached entries, sorted by repository.
    pub fn status(&self) -> Vec<CacheStatus> {
        let entries = match fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(_) => return Vec::new(),
        };

        let mut rows: Vec<CacheStatus> = entries
            .flatten()
            .filter_map(|dirent| {
                let content = fs::read_to_string(dirent.path()).ok()?;
                let entry: CacheEntry = serde_json::from_str(&content).ok()?;
                Some(CacheStatus {
                    fresh: self.is_fresh(entry.fetched_at),
                    repo: entry.repo,
                    fetched_at: entry.fetched_at,
                })
            })
            .collect();
        rows.sort_by(|a, b| a.repo.cmp(&b.repo));
        rows
    }

    fn is_fresh(&self, fetched_at: DateTime<Utc>) -> bool {
        let age = Utc::now().signed_duration_since(fetched_at).num_seconds();
        age < self.ttl_secs
    }

    fn load_entry(&self, repo: &RepoRef) -> Option<CacheEntry> {
        let content = fs::read_to_string(self.entry_path(repo)).ok()?;
        serde_json::from_str(&content).ok()
    }

    fn entry_path(&self, repo: &RepoRef) -> PathBuf {
        let mut hasher = Sha256::new();
        hasher.update(repo.to_string().as_bytes());
        let hash = hex::encode(hasher.finalize());
        self.dir.join(format!("{}.json", hash))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn release(tag: &str) -> Release {
        Release {
            tag_name: tag.to_string(),
            html_url: Some(format!("https://example.com/releases/{}", tag)),
            zipball_url: Some(format!("https://example.com/zipball/{}", tag)),
            name: None,
            body: None,
            published_at: None,
            prerelease: false,
            assets: Vec::new(),
        }
    }

    fn cache_in(temp: &TempDir) -> CheckCache {
        CheckCache::with_dir(temp.path().join("cache"))
    }

    #[test]
    fn store_then_load_fresh() {
        let temp = TempDir::new().unwrap();
        let cache = cache_in(&temp);
        let repo = RepoRef::new("acme", "widget");

        cache.store(&repo, &release("v1.0.0")).unwrap();

        let loaded = cache.load_fresh(&repo).unwrap();
        assert_eq!(loaded.tag_name, "v1.0.0");
    }

    #[test]
    fn missing_entry_loads_none() {
        let temp = TempDir::new().unwrap();
        let cache = cache_in(&temp);
        let repo = RepoRef::new("acme", "widget");

        assert!(cache.load_fresh(&repo).is_none());
        assert!(cache.load_stale(&repo).is_none());
    }

    #[test]
    fn zero_ttl_entry_is_stale_but_loadable() {
        let temp = TempDir::new().unwrap();
        let cache = cache_in(&temp).with_ttl_secs(0);
        let repo = RepoRef::new("acme", "widget");

        cache.store(&repo, &release("v1.0.0")).unwrap();

        assert!(cache.load_fresh(&repo).is_none());
        assert_eq!(cache.load_stale(&repo).unwrap().tag_name, "v1.0.0");
    }

    #[test]
    fn corrupt_entry_reads_as_absent() {
        let temp = TempDir::new().unwrap();
        let cache = cache_in(&temp);
        let repo = RepoRef::new("acme", "widget");

        cache.store(&repo, &release("v1.0.0")).unwrap();
        fs::write(cache.entry_path(&repo), "garbage\x00not json").unwrap();

        assert!(cache.load_fresh(&repo).is_none());
        assert!(cache.load_stale(&repo).is_none());
    }

    #[test]
    fn entries_are_keyed_per_repo() {
        let temp = TempDir::new().unwrap();
        let cache = cache_in(&temp);
        let widget = RepoRef::new("acme", "widget");
        let gadget = RepoRef::new("acme", "gadget");

        cache.store(&widget, &release("v1.0.0")).unwrap();
        cache.store(&gadget, &release("v2.0.0")).unwrap();

        assert_eq!(cache.load_fresh(&widget).unwrap().tag_name, "v1.0.0");
        assert_eq!(cache.load_fresh(&gadget).unwrap().tag_name, "v2.0.0");
    }

    #[test]
    fn clear_repo_removes_only_that_entry() {
        let temp = TempDir::new().unwrap();
        let cache = cache_in(&temp);
        let widget = RepoRef::new("acme", "widget");
        let gadget = RepoRef::new("acme", "gadget");

        cache.store(&widget, &release("v1.0.0")).unwrap();
        cache.store(&gadget, &release("v2.0.0")).unwrap();
        cache.clear_repo(&widget).unwrap();

        assert!(cache.load_stale(&widget).is_none());
        assert!(cache.load_stale(&gadget).is_some());
    }

    #[test]
    fn clear_removes_everything() {
        let temp = TempDir::new().unwrap();
        let cache = cache_in(&temp);
        let repo = RepoRef::new("acme", "widget");

        cache.store(&repo, &release("v1.0.0")).unwrap();
        cache.clear().unwrap();

        assert!(cache.load_stale(&repo).is_none());
        assert!(cache.status().is_empty());
    }

    #[test]
    fn clear_on_empty_cache_is_ok() {
        let temp = TempDir::new().unwrap();
        let cache = cache_in(&temp);
        assert!(cache.clear().is_ok());
    }

    #[test]
    fn status_lists_entries_sorted() {
        let temp = TempDir::new().unwrap();
        let cache = cache_in(&temp);

        cache
            .store(&RepoRef::new("zeta", "tool"), &release("v1.0.0"))
            .unwrap();
        cache
            .store(&RepoRef::new("acme", "widget"), &release("v2.0.0"))
            .unwrap();

        let rows = cache.status();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].repo, "acme/widget");
        assert_eq!(rows[1].repo, "zeta/tool");
        assert!(rows.iter().all(|row| row.fresh));
    }

    #[test]
    fn status_marks_stale_entries() {
        let temp = TempDir::new().unwrap();
        let cache = cache_in(&temp).with_ttl_secs(0);
        let repo = RepoRef::new("acme", "widget");

        cache.store(&repo, &release("v1.0.0")).unwrap();

        let rows = cache.status();
        assert_eq!(rows.len(), 1);
        assert!(!rows[0].fresh);
    }

    #[test]
    fn entry_path_is_deterministic() {
        let temp = TempDir::new().unwrap();
        let cache = cache_in(&temp);
        let repo = RepoRef::new("acme", "widget");

        assert_eq!(cache.entry_path(&repo), cache.entry_path(&repo));
        assert_ne!(
            cache.entry_path(&repo),
            cache.entry_path(&RepoRef::new("acme", "gadget"))
        );
    }
}
