//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! # Architecture
//!
//! Commands are dispatched via [`CommandDispatcher`], which routes CLI
//! subcommands to their implementations. This allows:
//! - Single binary with subcommands (`relcheck check`, `relcheck info`)
//! - Shared feed/cache construction from global flags
//! - Consistent global flag handling

pub mod cache;
pub mod check;
pub mod completions;
pub mod context;
pub mod dispatcher;
pub mod info;

pub use context::FeedOptions;
pub use dispatcher::{Command, CommandDispatcher, CommandResult};
