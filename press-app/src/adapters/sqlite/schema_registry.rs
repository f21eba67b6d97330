//! `SchemaRegistry` implementation for `SqliteStore`.
//!
//! Record types introduced by patches are created here on demand rather than
//! in the base migrations, so `reload_schema` is what makes them queryable.

use async_trait::async_trait;
use sea_orm_migration::prelude::*;

use press_core::error::{CoreError, CoreResult};
use press_core::traits::SchemaRegistry;
use press_core::types::SchemaRef;

use super::{storage_error, SqliteStore};

fn root_domain_table() -> TableCreateStatement {
    Table::create()
        .table(RootDomain::Table)
        .if_not_exists()
        .col(
            ColumnDef::new(RootDomain::Name)
                .string()
                .not_null()
                .primary_key(),
        )
        .col(ColumnDef::new(RootDomain::DnsProvider).string().not_null())
        .col(ColumnDef::new(RootDomain::AwsAccessKeyId).string().not_null())
        .col(
            ColumnDef::new(RootDomain::AwsSecretAccessKeySalt)
                .string()
                .not_null(),
        )
        .col(
            ColumnDef::new(RootDomain::AwsSecretAccessKeyNonce)
                .string()
                .not_null(),
        )
        .col(
            ColumnDef::new(RootDomain::AwsSecretAccessKeyCiphertext)
                .string()
                .not_null(),
        )
        .col(
            ColumnDef::new(RootDomain::AwsSecretAccessKeyVersion)
                .integer()
                .not_null(),
        )
        .to_owned()
}

#[async_trait]
impl SchemaRegistry for SqliteStore {
    async fn reload_schema(&self, schema: &SchemaRef) -> CoreResult<()> {
        let statement = if *schema == SchemaRef::ROOT_DOMAIN {
            root_domain_table()
        } else {
            return Err(CoreError::SchemaNotFound(schema.to_string()));
        };

        SchemaManager::new(&self.db)
            .create_table(statement)
            .await
            .map_err(storage_error("Failed to reload schema"))?;

        log::info!("Reloaded schema {schema}");
        Ok(())
    }
}

#[derive(DeriveIden)]
enum RootDomain {
    #[sea_orm(iden = "root_domain")]
    Table,
    Name,
    DnsProvider,
    AwsAccessKeyId,
    AwsSecretAccessKeySalt,
    AwsSecretAccessKeyNonce,
    AwsSecretAccessKeyCiphertext,
    AwsSecretAccessKeyVersion,
}
