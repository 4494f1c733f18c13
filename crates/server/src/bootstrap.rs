use std::sync::Arc;

use gavel_core::config::{AppConfig, ConfigError, LoadOptions};
use gavel_core::errors::RegistryError;
use gavel_core::fees::default_strategies;
use gavel_core::FeeCalculationEngine;
use thiserror::Error;
use tracing::info;

/// Fully wired runtime: validated config plus the shared fee engine.
pub struct Application {
    pub config: AppConfig,
    pub engine: Arc<FeeCalculationEngine>,
}

#[derive(Debug, Error)]
pub enum BootstrapError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("fee engine construction failed: {0}")]
    Registry(#[from] RegistryError),
}

/// Load configuration and assemble the application.
pub fn bootstrap(options: LoadOptions) -> Result<Application, BootstrapError> {
    let config = AppConfig::load(options)?;
    bootstrap_with_config(config)
}

/// Assemble the application from an already validated config.
pub fn bootstrap_with_config(config: AppConfig) -> Result<Application, BootstrapError> {
    info!(
        event_name = "system.bootstrap.start",
        correlation_id = "bootstrap",
        "starting application bootstrap"
    );

    let engine = Arc::new(FeeCalculationEngine::new(default_strategies())?);

    info!(
        event_name = "system.bootstrap.fee_engine_ready",
        correlation_id = "bootstrap",
        strategy_count = engine.strategy_count(),
        "fee calculation engine initialized"
    );

    Ok(Application { config, engine })
}
