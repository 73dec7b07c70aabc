//! Cronit - multi-tenant cron job definition registry
//!
//! Main entry point for the Cronit CLI.

mod adapters;
mod cli;
mod commands;

use anyhow::{Context, bail};
use clap::Parser;
use tracing::{debug, warn};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use cronit_config::{Config, ConfigLoader, ConfigValidator};

use cli::{Cli, Commands};

/// Initialize console tracing. `RUST_LOG` wins over the configured level.
fn init_tracing(default_level: &str) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_target(true)
                .with_writer(std::io::stderr),
        )
        .init();
}

/// Load the configuration file and apply command line overrides.
fn load_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut config = ConfigLoader::load_or_default(&cli.config)
        .with_context(|| format!("Failed to load configuration from {:?}", cli.config))?;

    if let Some(tenant) = &cli.tenant {
        config.tenant.id = Some(tenant.clone());
    }
    Ok(config)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = load_config(&cli)?;

    init_tracing(&config.logging.level);
    debug!(config = ?cli.config, "Configuration loaded");

    let validation = ConfigValidator::validate(&config);
    for warning in &validation.warnings {
        warn!(path = %warning.path, "{}", warning.message);
    }
    if !validation.is_valid() {
        let errors: Vec<String> = validation
            .errors
            .iter()
            .map(|e| format!("{}: {}", e.path, e.message))
            .collect();
        bail!("Invalid configuration:\n  {}", errors.join("\n  "));
    }

    match cli.command {
        Commands::Validate { expression } => commands::validate(&expression),
        Commands::Register {
            name,
            group,
            expression,
            description,
        } => {
            let service = adapters::build_service(&config).await?;
            commands::register(&service, name, group, expression, description).await
        }
        Commands::Show { name } => {
            let service = adapters::build_service(&config).await?;
            commands::show(&service, &name).await
        }
        Commands::List => {
            let service = adapters::build_service(&config).await?;
            commands::list(&service).await
        }
    }
}
