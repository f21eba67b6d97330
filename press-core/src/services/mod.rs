//! Data patches run during an application upgrade

mod root_domain_patch;

pub use root_domain_patch::CreateRootDomainFromPressSettings;

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::CoreResult;
use crate::traits::{PressSettingsRepository, RootDomainRepository, SchemaRegistry, Secrets};

/// 补丁上下文 - 持有所有依赖
///
/// The platform layer builds this once and injects its storage implementations.
pub struct PatchContext {
    /// Record type schema registry
    pub schema_registry: Arc<dyn SchemaRegistry>,
    /// Press Settings singleton
    pub press_settings: Arc<dyn PressSettingsRepository>,
    /// Root Domain records
    pub root_domains: Arc<dyn RootDomainRepository>,
    /// Secret field reader
    pub secrets: Arc<dyn Secrets>,
}

impl PatchContext {
    #[must_use]
    pub fn new(
        schema_registry: Arc<dyn SchemaRegistry>,
        press_settings: Arc<dyn PressSettingsRepository>,
        root_domains: Arc<dyn RootDomainRepository>,
        secrets: Arc<dyn Secrets>,
    ) -> Self {
        Self {
            schema_registry,
            press_settings,
            root_domains,
            secrets,
        }
    }
}

/// What a patch did on this run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatchOutcome {
    /// A record was created
    Created { name: String },
    /// The record was already present; nothing was written
    AlreadyExists { name: String },
}

/// A named, idempotent data patch.
#[async_trait]
pub trait Patch: Send + Sync {
    /// Stable identifier, e.g. `press.patches.v0_0_1.create_root_domain_from_press_settings`
    fn name(&self) -> &'static str;

    /// Apply the patch. Errors are fatal to the upgrade and are not recovered here.
    async fn execute(&self, ctx: &PatchContext) -> CoreResult<PatchOutcome>;
}
