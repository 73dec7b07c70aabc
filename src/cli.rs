//! CLI definitions for Cronit.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use cronit_protocols::DEFAULT_GROUP;

/// Cronit CLI.
#[derive(Parser)]
#[command(name = "cronit")]
#[command(about = "Multi-tenant cron job definition registry")]
#[command(version)]
pub(crate) struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = "cronit.toml", global = true)]
    pub config: PathBuf,

    /// Tenant (company) id, overrides the configured default
    #[arg(short, long, env = "CRONIT_TENANT", global = true)]
    pub tenant: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Register a new job definition
    Register {
        /// Job name, unique per tenant
        #[arg(long)]
        name: String,

        /// Job group
        #[arg(long, default_value = DEFAULT_GROUP)]
        group: String,

        /// 5-field cron expression, e.g. "*/5 * * * *"
        #[arg(long)]
        expression: String,

        /// Optional description
        #[arg(long)]
        description: Option<String>,
    },

    /// Check a cron expression and show the values each field matches
    Validate {
        /// 5-field cron expression
        expression: String,
    },

    /// Show a registered job of the tenant
    Show {
        /// Job name
        #[arg(long)]
        name: String,
    },

    /// List the jobs registered by the tenant
    List,
}
