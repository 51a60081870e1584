//! Relcheck - GitHub release update checker for self-hosted plugins.
//!
//! Given a repository identifier and the currently installed version,
//! relcheck asks the release feed for the latest published release and
//! reports whether a newer one exists. Every transport or parse failure
//! folds into "no update available": a flaky upstream never blocks the
//! caller, only the update notification goes missing.
//!
//! # Modules
//!
//! - [`cache`] - Time-bounded cache of feed lookups
//! - [`checker`] - Update reconciliation core
//! - [`cli`] - Command-line interface and argument parsing
//! - [`error`] - Error types and result alias
//! - [`feed`] - Blocking release-feed client
//! - [`release`] - Feed payload model
//! - [`repo`] - Repository identifiers
//! - [`ui`] - Terminal output
//! - [`version`] - Numeric-segment version ordering
//!
//! # Example
//!
//! ```no_run
//! use relcheck::checker::UpdateChecker;
//! use relcheck::feed::ReleaseFeed;
//! use relcheck::repo::RepoRef;
//!
//! let checker = UpdateChecker::new(ReleaseFeed::default());
//! let repo: RepoRef = "acme/widget".parse().unwrap();
//! let check = checker.check_for_update("1.0.0", &repo);
//! if check.has_update {
//!     println!("update to {}", check.new_version.unwrap());
//! }
//! ```

pub mod cache;
pub mod checker;
pub mod cli;
pub mod error;
pub mod feed;
pub mod release;
pub mod repo;
pub mod ui;
pub mod version;

pub use error::{RelcheckError, Result};
