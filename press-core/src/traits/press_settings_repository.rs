//! Press Settings 单例仓库

use async_trait::async_trait;

use crate::error::CoreResult;
use crate::types::{PlaintextSecret, PressSettings};

/// Access to the `Press Settings` singleton.
#[async_trait]
pub trait PressSettingsRepository: Send + Sync {
    /// Load the singleton.
    ///
    /// # Errors
    /// `CoreError::SettingsNotFound` if it has never been saved.
    async fn get_singleton(&self) -> CoreResult<PressSettings>;

    /// Create or replace the singleton.
    ///
    /// # Arguments
    /// * `settings` - plain fields
    /// * `aws_secret_access_key` - new secret; `None` keeps the stored one
    async fn save(
        &self,
        settings: &PressSettings,
        aws_secret_access_key: Option<&PlaintextSecret>,
    ) -> CoreResult<()>;
}
