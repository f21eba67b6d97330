//! Press upgrade patch runner
//!
//! Opens the local store, runs the upgrade data patches and exits non-zero on
//! the first failure. Configuration comes from the environment, see `config`.

mod config;

use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context, Result};
use press_app::adapters::SqliteStore;
use press_app::AppStateBuilder;
use press_core::error::CoreError;
use press_core::services::PatchOutcome;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use config::Config;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    match run().await {
        Ok(outcome) => {
            tracing::info!("Upgrade complete: {outcome:?}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            let expected = e
                .downcast_ref::<CoreError>()
                .is_some_and(CoreError::is_expected);
            if expected {
                tracing::warn!("Upgrade failed: {e:#}");
            } else {
                tracing::error!("Upgrade failed: {e:#}");
            }
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<PatchOutcome> {
    let config = Config::from_env()?;
    tracing::info!("Using database {}", config.db_path.display());

    let store = Arc::new(
        SqliteStore::new(&config.db_path, Some(config.encryption_key))
            .await
            .context("Failed to open store")?,
    );
    let state = AppStateBuilder::new().with_sqlite_store(&store).build()?;

    Ok(state.run_upgrade().await?)
}
