//! `PressSettingsRepository` implementation for `SqliteStore`.

use async_trait::async_trait;
use sea_orm::{sea_query::OnConflict, ActiveValue::Set, EntityTrait};

use press_core::error::{CoreError, CoreResult};
use press_core::traits::PressSettingsRepository;
use press_core::types::{PlaintextSecret, PressSettings};

use super::entity::press_settings;
use super::{storage_error, SqliteStore};

impl press_settings::Model {
    fn into_settings(self) -> PressSettings {
        PressSettings {
            domain: self.domain,
            dns_provider: self.dns_provider,
            aws_access_key_id: self.aws_access_key_id,
        }
    }
}

#[async_trait]
impl PressSettingsRepository for SqliteStore {
    async fn get_singleton(&self) -> CoreResult<PressSettings> {
        let row = press_settings::Entity::find_by_id(PressSettings::INSTANCE_NAME)
            .one(&self.db)
            .await
            .map_err(storage_error("Failed to query press settings"))?;

        row.map(press_settings::Model::into_settings)
            .ok_or_else(|| CoreError::SettingsNotFound(PressSettings::INSTANCE_NAME.to_string()))
    }

    async fn save(
        &self,
        settings: &PressSettings,
        aws_secret_access_key: Option<&PlaintextSecret>,
    ) -> CoreResult<()> {
        let mut active_model = press_settings::ActiveModel {
            name: Set(PressSettings::INSTANCE_NAME.to_string()),
            domain: Set(settings.domain.clone()),
            dns_provider: Set(settings.dns_provider.clone()),
            aws_access_key_id: Set(settings.aws_access_key_id.clone()),
            aws_secret_access_key_salt: Set(None),
            aws_secret_access_key_nonce: Set(None),
            aws_secret_access_key_ciphertext: Set(None),
            aws_secret_access_key_version: Set(None),
        };

        let mut update_columns = vec![
            press_settings::Column::Domain,
            press_settings::Column::DnsProvider,
            press_settings::Column::AwsAccessKeyId,
        ];

        if let Some(secret) = aws_secret_access_key {
            let sealed = self.seal(secret)?;
            let version = i32::try_from(sealed.version)
                .map_err(|e| CoreError::SerializationError(format!("Invalid version: {e}")))?;
            active_model.aws_secret_access_key_salt = Set(Some(sealed.salt));
            active_model.aws_secret_access_key_nonce = Set(Some(sealed.nonce));
            active_model.aws_secret_access_key_ciphertext = Set(Some(sealed.ciphertext));
            active_model.aws_secret_access_key_version = Set(Some(version));
            update_columns.extend([
                press_settings::Column::AwsSecretAccessKeySalt,
                press_settings::Column::AwsSecretAccessKeyNonce,
                press_settings::Column::AwsSecretAccessKeyCiphertext,
                press_settings::Column::AwsSecretAccessKeyVersion,
            ]);
        }

        press_settings::Entity::insert(active_model)
            .on_conflict(
                OnConflict::column(press_settings::Column::Name)
                    .update_columns(update_columns)
                    .to_owned(),
            )
            .exec(&self.db)
            .await
            .map_err(storage_error("Failed to save press settings"))?;

        log::info!("Press settings saved (domain: {})", settings.domain);
        Ok(())
    }
}
