use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PressSettings::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(PressSettings::Name)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(PressSettings::Domain).string().not_null())
                    .col(ColumnDef::new(PressSettings::DnsProvider).string().not_null())
                    .col(
                        ColumnDef::new(PressSettings::AwsAccessKeyId)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(PressSettings::AwsSecretAccessKeySalt)
                            .string()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(PressSettings::AwsSecretAccessKeyNonce)
                            .string()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(PressSettings::AwsSecretAccessKeyCiphertext)
                            .string()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(PressSettings::AwsSecretAccessKeyVersion)
                            .integer()
                            .null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PressSettings::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum PressSettings {
    #[sea_orm(iden = "press_settings")]
    Table,
    Name,
    Domain,
    DnsProvider,
    AwsAccessKeyId,
    AwsSecretAccessKeySalt,
    AwsSecretAccessKeyNonce,
    AwsSecretAccessKeyCiphertext,
    AwsSecretAccessKeyVersion,
}
