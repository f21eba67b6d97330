//! `SeaORM` entity for the `press_settings` singleton table.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "press_settings")]
/// Database row model for the settings singleton. The secret columns are
/// null until a secret has been saved.
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub name: String,
    pub domain: String,
    pub dns_provider: String,
    pub aws_access_key_id: String,
    pub aws_secret_access_key_salt: Option<String>,
    pub aws_secret_access_key_nonce: Option<String>,
    pub aws_secret_access_key_ciphertext: Option<String>,
    pub aws_secret_access_key_version: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
