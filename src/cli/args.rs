//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::DEFAULT_REGISTRY_FILE;

/// hostenv - Resolve the runtime environment from the hostname.
#[derive(Debug, Parser)]
#[command(name = "hostenv")]
#[command(author, version, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the registry file
    #[arg(
        short,
        long,
        global = true,
        env = "HOSTENV_CONFIG",
        default_value = DEFAULT_REGISTRY_FILE
    )]
    pub config: PathBuf,

    /// Only print command output and errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Resolve a hostname to its environment and merged config
    Resolve(ResolveArgs),

    /// List environments, hostname rules and the default environment
    List,

    /// Check that a hostname resolves to an environment
    Check(CheckArgs),
}

/// Arguments for the `resolve` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ResolveArgs {
    /// Hostname to resolve (defaults to $HOSTENV_HOSTNAME, then the system hostname)
    pub hostname: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `check` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CheckArgs {
    /// Hostname to resolve
    pub hostname: String,

    /// Expected environment name
    pub environment: String,
}
