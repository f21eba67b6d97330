//! Root Domain 仓库

use async_trait::async_trait;

use crate::error::CoreResult;
use crate::types::RootDomain;

/// Persistence for `Root Domain` records, keyed by domain name.
#[async_trait]
pub trait RootDomainRepository: Send + Sync {
    /// Point lookup by primary key.
    async fn exists(&self, name: &str) -> CoreResult<bool>;

    /// Insert a new record. Never overwrites.
    ///
    /// # Errors
    /// `CoreError::DuplicateRecord` if a record with the same name exists.
    async fn insert(&self, root_domain: &RootDomain) -> CoreResult<()>;

    /// Load a record with its secret decrypted.
    ///
    /// # Returns
    /// * `Ok(Some(root_domain))` - record exists
    /// * `Ok(None)` - record does not exist
    async fn find_by_name(&self, name: &str) -> CoreResult<Option<RootDomain>>;
}
