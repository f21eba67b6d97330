//! Application bootstrap for Press upgrades.
//!
//! Provides `AppState` (patch context holder), `AppStateBuilder` (adapter
//! injection) and the storage adapters in [`adapters`].

pub mod adapters;

use std::sync::Arc;

use press_core::error::{CoreError, CoreResult};
use press_core::services::{CreateRootDomainFromPressSettings, Patch, PatchContext, PatchOutcome};
use press_core::traits::{PressSettingsRepository, RootDomainRepository, SchemaRegistry, Secrets};

/// Platform-agnostic application state.
///
/// Holds the `PatchContext`. Every frontend constructs this once via
/// `AppStateBuilder`.
pub struct AppState {
    /// Patch context (holds all storage adapters)
    pub ctx: Arc<PatchContext>,
}

impl AppState {
    /// Run the upgrade data patches.
    ///
    /// Any error aborts the upgrade and is returned as is for the caller to
    /// report; the patch is safe to re-run once the cause is fixed.
    pub async fn run_upgrade(&self) -> CoreResult<PatchOutcome> {
        let patch = CreateRootDomainFromPressSettings;
        let outcome = patch.execute(&self.ctx).await?;
        log::info!("Patch {} finished: {outcome:?}", patch.name());
        Ok(outcome)
    }
}

/// Builder for constructing `AppState` with platform-specific adapters.
///
/// # Required adapters
/// - `schema_registry`
/// - `press_settings`
/// - `root_domains`
/// - `secrets`
#[derive(Default)]
pub struct AppStateBuilder {
    schema_registry: Option<Arc<dyn SchemaRegistry>>,
    press_settings: Option<Arc<dyn PressSettingsRepository>>,
    root_domains: Option<Arc<dyn RootDomainRepository>>,
    secrets: Option<Arc<dyn Secrets>>,
}

impl AppStateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn schema_registry(mut self, registry: Arc<dyn SchemaRegistry>) -> Self {
        self.schema_registry = Some(registry);
        self
    }

    #[must_use]
    pub fn press_settings(mut self, repo: Arc<dyn PressSettingsRepository>) -> Self {
        self.press_settings = Some(repo);
        self
    }

    #[must_use]
    pub fn root_domains(mut self, repo: Arc<dyn RootDomainRepository>) -> Self {
        self.root_domains = Some(repo);
        self
    }

    #[must_use]
    pub fn secrets(mut self, secrets: Arc<dyn Secrets>) -> Self {
        self.secrets = Some(secrets);
        self
    }

    /// Use one `SqliteStore` for every adapter.
    #[cfg(feature = "sqlite-store")]
    #[must_use]
    pub fn with_sqlite_store(self, store: &Arc<adapters::SqliteStore>) -> Self {
        self.schema_registry(store.clone())
            .press_settings(store.clone())
            .root_domains(store.clone())
            .secrets(store.clone())
    }

    /// Build the `AppState`.
    ///
    /// # Errors
    /// Returns `CoreError::ValidationError` if required adapters are missing.
    pub fn build(self) -> CoreResult<AppState> {
        let schema_registry = self.schema_registry.ok_or_else(|| {
            CoreError::ValidationError("schema_registry is required".to_string())
        })?;
        let press_settings = self.press_settings.ok_or_else(|| {
            CoreError::ValidationError("press_settings is required".to_string())
        })?;
        let root_domains = self
            .root_domains
            .ok_or_else(|| CoreError::ValidationError("root_domains is required".to_string()))?;
        let secrets = self
            .secrets
            .ok_or_else(|| CoreError::ValidationError("secrets is required".to_string()))?;

        Ok(AppState {
            ctx: Arc::new(PatchContext::new(
                schema_registry,
                press_settings,
                root_domains,
                secrets,
            )),
        })
    }
}
