//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use super::commands::cache::CacheArgs;

/// Relcheck - GitHub release update checker.
#[derive(Debug, Parser)]
#[command(name = "relcheck")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Release-feed base URL (overrides the default feed host)
    #[arg(long, global = true, value_name = "URL")]
    pub feed_url: Option<String>,

    /// Request timeout in seconds
    #[arg(long, global = true, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Cache directory (overrides the user cache directory)
    #[arg(long, global = true, value_name = "DIR")]
    pub cache_dir: Option<PathBuf>,

    /// Bearer token for the release feed
    #[arg(long, global = true, env = "GITHUB_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Check whether a newer release is published
    Check(CheckArgs),

    /// Show latest-release information for a repository
    Info(InfoArgs),

    /// Manage the check cache
    Cache(CacheArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `check` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CheckArgs {
    /// Repository to check, as owner/repo
    #[arg(short, long, value_name = "OWNER/REPO")]
    pub repo: String,

    /// Currently installed version
    #[arg(short, long, value_name = "VERSION")]
    pub current: String,

    /// Bypass the check cache
    #[arg(long)]
    pub fresh: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `info` command.
#[derive(Debug, Clone, clap::Args)]
pub struct InfoArgs {
    /// Repository to inspect, as owner/repo
    #[arg(short, long, value_name = "OWNER/REPO")]
    pub repo: String,

    /// Plugin display name (defaults to the repository name)
    #[arg(long)]
    pub name: Option<String>,

    /// Plugin slug (defaults to the repository name)
    #[arg(long)]
    pub slug: Option<String>,

    /// Plugin author (defaults to the repository owner)
    #[arg(long)]
    pub author: Option<String>,

    /// Bypass the check cache
    #[arg(long)]
    pub fresh: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
