//! `RootDomainRepository` implementation for `SqliteStore`.

use async_trait::async_trait;
use sea_orm::{ActiveValue::Set, EntityTrait, SqlErr};

use press_core::crypto::EncryptedSecret;
use press_core::error::{CoreError, CoreResult};
use press_core::traits::RootDomainRepository;
use press_core::types::RootDomain;

use super::entity::root_domain;
use super::secrets::version_from_column;
use super::{storage_error, SqliteStore};

impl SqliteStore {
    /// Convert a row into a `RootDomain`, decrypting the secret column.
    fn decode_root_domain(&self, row: root_domain::Model) -> CoreResult<RootDomain> {
        let sealed = EncryptedSecret {
            salt: row.aws_secret_access_key_salt,
            nonce: row.aws_secret_access_key_nonce,
            ciphertext: row.aws_secret_access_key_ciphertext,
            version: version_from_column(row.aws_secret_access_key_version)?,
        };

        Ok(RootDomain {
            name: row.name,
            dns_provider: row.dns_provider,
            aws_access_key_id: row.aws_access_key_id,
            aws_secret_access_key: self.open(&sealed)?,
        })
    }
}

#[async_trait]
impl RootDomainRepository for SqliteStore {
    async fn exists(&self, name: &str) -> CoreResult<bool> {
        let row = root_domain::Entity::find_by_id(name)
            .one(&self.db)
            .await
            .map_err(storage_error("Failed to query root domain"))?;

        Ok(row.is_some())
    }

    async fn insert(&self, root_domain: &RootDomain) -> CoreResult<()> {
        let sealed = self.seal(&root_domain.aws_secret_access_key)?;
        let version = i32::try_from(sealed.version)
            .map_err(|e| CoreError::SerializationError(format!("Invalid version: {e}")))?;

        let active_model = root_domain::ActiveModel {
            name: Set(root_domain.name.clone()),
            dns_provider: Set(root_domain.dns_provider.clone()),
            aws_access_key_id: Set(root_domain.aws_access_key_id.clone()),
            aws_secret_access_key_salt: Set(sealed.salt),
            aws_secret_access_key_nonce: Set(sealed.nonce),
            aws_secret_access_key_ciphertext: Set(sealed.ciphertext),
            aws_secret_access_key_version: Set(version),
        };

        root_domain::Entity::insert(active_model)
            .exec(&self.db)
            .await
            .map_err(|e| {
                if matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) {
                    CoreError::DuplicateRecord {
                        record_type: RootDomain::RECORD_TYPE.to_string(),
                        name: root_domain.name.clone(),
                    }
                } else {
                    CoreError::StorageError(format!("Failed to insert root domain: {e}"))
                }
            })?;

        log::info!("Root domain inserted: {}", root_domain.name);
        Ok(())
    }

    async fn find_by_name(&self, name: &str) -> CoreResult<Option<RootDomain>> {
        let row = root_domain::Entity::find_by_id(name)
            .one(&self.db)
            .await
            .map_err(storage_error("Failed to query root domain"))?;

        row.map(|r| self.decode_root_domain(r)).transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use press_core::traits::SchemaRegistry;
    use press_core::types::{PlaintextSecret, SchemaRef};

    #[tokio::test]
    async fn secret_is_encrypted_at_rest() {
        let tmp = tempfile::tempdir().unwrap();
        let store = SqliteStore::new(&tmp.path().join("press.db"), Some("key".to_string()))
            .await
            .unwrap();
        store.reload_schema(&SchemaRef::ROOT_DOMAIN).await.unwrap();

        let domain = RootDomain {
            name: "example.com".to_string(),
            dns_provider: "generic".to_string(),
            aws_access_key_id: "AKIAEXAMPLE".to_string(),
            aws_secret_access_key: PlaintextSecret::new("s3cr3t"),
        };
        store.insert(&domain).await.unwrap();

        let row = root_domain::Entity::find_by_id("example.com")
            .one(&store.db)
            .await
            .unwrap()
            .unwrap();
        assert!(!row.aws_secret_access_key_ciphertext.contains("s3cr3t"));
        assert_ne!(row.aws_secret_access_key_ciphertext, "s3cr3t");
        assert_eq!(
            store.decode_root_domain(row).unwrap().aws_secret_access_key,
            PlaintextSecret::new("s3cr3t")
        );
    }
}
