//! `Secrets` implementation for `SqliteStore`.
//!
//! Looks up the sealed columns of the referenced record and decrypts them
//! with the store's encryption key.

use async_trait::async_trait;
use sea_orm::EntityTrait;

use press_core::crypto::EncryptedSecret;
use press_core::error::{CoreError, CoreResult};
use press_core::traits::Secrets;
use press_core::types::{PlaintextSecret, PressSettings, RootDomain, SecretRef};

use super::entity::{press_settings, root_domain};
use super::{storage_error, SqliteStore};

pub(crate) fn version_from_column(version: i32) -> CoreResult<u32> {
    u32::try_from(version)
        .map_err(|e| CoreError::SerializationError(format!("Invalid secret version: {e}")))
}

impl SqliteStore {
    async fn sealed_press_settings_secret(
        &self,
        secret: &SecretRef,
    ) -> CoreResult<EncryptedSecret> {
        let row = press_settings::Entity::find_by_id(secret.record_name.as_str())
            .one(&self.db)
            .await
            .map_err(storage_error("Failed to query press settings"))?
            .ok_or_else(|| not_found(secret))?;

        match (
            row.aws_secret_access_key_salt,
            row.aws_secret_access_key_nonce,
            row.aws_secret_access_key_ciphertext,
            row.aws_secret_access_key_version,
        ) {
            (Some(salt), Some(nonce), Some(ciphertext), Some(version)) => Ok(EncryptedSecret {
                salt,
                nonce,
                ciphertext,
                version: version_from_column(version)?,
            }),
            _ => Err(CoreError::SecretNotSet(secret.to_string())),
        }
    }

    async fn sealed_root_domain_secret(&self, secret: &SecretRef) -> CoreResult<EncryptedSecret> {
        let row = root_domain::Entity::find_by_id(secret.record_name.as_str())
            .one(&self.db)
            .await
            .map_err(storage_error("Failed to query root domain"))?
            .ok_or_else(|| not_found(secret))?;

        Ok(EncryptedSecret {
            salt: row.aws_secret_access_key_salt,
            nonce: row.aws_secret_access_key_nonce,
            ciphertext: row.aws_secret_access_key_ciphertext,
            version: version_from_column(row.aws_secret_access_key_version)?,
        })
    }
}

fn not_found(secret: &SecretRef) -> CoreError {
    CoreError::RecordNotFound {
        record_type: secret.record_type.clone(),
        name: secret.record_name.clone(),
    }
}

#[async_trait]
impl Secrets for SqliteStore {
    async fn reveal(&self, secret: &SecretRef) -> CoreResult<PlaintextSecret> {
        if secret.field != PressSettings::AWS_SECRET_ACCESS_KEY {
            return Err(CoreError::SecretNotSet(secret.to_string()));
        }

        let sealed = match secret.record_type.as_str() {
            PressSettings::RECORD_TYPE => self.sealed_press_settings_secret(secret).await?,
            RootDomain::RECORD_TYPE => self.sealed_root_domain_secret(secret).await?,
            _ => return Err(not_found(secret)),
        };

        log::debug!("Revealing secret {secret}");
        self.open(&sealed)
    }
}
