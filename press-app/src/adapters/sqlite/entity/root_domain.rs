use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "root_domain")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub name: String,
    pub dns_provider: String,
    pub aws_access_key_id: String,
    pub aws_secret_access_key_salt: String,
    pub aws_secret_access_key_nonce: String,
    pub aws_secret_access_key_ciphertext: String,
    pub aws_secret_access_key_version: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
