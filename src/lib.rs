pub mod cli;
pub mod core;
pub mod providers;

use crate::core::config::AppConfig;
use crate::core::{Clock, RateCache, SystemClock};
use anyhow::{Context, Result};
use tracing::{debug, info};

pub enum AppCommand {
    Session,
    Lookup(Vec<String>),
}

/// Builds the cached Bank of Canada provider described by `config`.
pub fn build_provider(
    config: &AppConfig,
) -> Result<providers::CachingRateProvider<providers::BankOfCanadaProvider>> {
    let inner =
        providers::BankOfCanadaProvider::new(&config.provider.base_url, config.provider.timeout())
            .context("Failed to create HTTP client")?;
    let cache = RateCache::new(config.cache_capacity());
    Ok(providers::CachingRateProvider::new(inner, cache))
}

pub async fn run_command(command: AppCommand, config_path: Option<&str>) -> Result<()> {
    run_command_with_clock(command, config_path, &SystemClock).await
}

pub async fn run_command_with_clock(
    command: AppCommand,
    config_path: Option<&str>,
    clock: &dyn Clock,
) -> Result<()> {
    info!("noonrate starting...");

    let config = match config_path {
        Some(path) => AppConfig::load_from_path(path)?,
        None => AppConfig::load()?,
    };
    debug!("Loaded config: {config:#?}");

    let provider = build_provider(&config)?;

    match command {
        AppCommand::Session => cli::session::run(&provider, clock).await,
        AppCommand::Lookup(dates) => {
            cli::lookup::run(&provider, clock, &dates).await;
            Ok(())
        }
    }
}
