//! 密钥读取能力

use async_trait::async_trait;

use crate::error::CoreResult;
use crate::types::{PlaintextSecret, SecretRef};

/// Capability to read the clear text of a secret field.
///
/// Implementations decrypt whatever is stored at rest; test doubles return
/// fixed values.
#[async_trait]
pub trait Secrets: Send + Sync {
    /// Reveal the decrypted value of `secret`.
    ///
    /// # Errors
    /// * `CoreError::RecordNotFound` - the owning record (or record type) does not exist
    /// * `CoreError::SecretNotSet` - the field has no stored value
    /// * `CoreError::SecretError` - decryption failed
    async fn reveal(&self, secret: &SecretRef) -> CoreResult<PlaintextSecret>;
}
