//! SQLite-based unified store using `SeaORM`.
//!
//! A single `SqliteStore` implements `SchemaRegistry`, `PressSettingsRepository`,
//! `RootDomainRepository` and `Secrets`, backed by a local `SQLite` database.
//! Secret fields are encrypted with AES-256-GCM using a key provided at construction.

mod press_settings_repo;
mod root_domain_repo;
mod schema_registry;
mod secrets;

pub(crate) mod entity;
mod migration;

use std::path::Path;

use press_core::crypto::{self, EncryptedSecret};
use press_core::error::{CoreError, CoreResult};
use press_core::types::PlaintextSecret;
use sea_orm::{Database, DatabaseConnection};
use sea_orm_migration::MigratorTrait;

use migration::Migrator;

/// SQLite-based store for Press records.
///
/// Opening the store applies the base schema (`press_settings`). Record types
/// registered later, such as `root_domain`, are created on `reload_schema`.
///
/// If `encryption_key` is `None`, every operation that reads or writes a
/// secret field fails with `CoreError::SecretError`.
pub struct SqliteStore {
    /// Shared `SeaORM` database connection.
    pub(crate) db: DatabaseConnection,
    /// Optional key used to seal secret fields.
    pub(crate) encryption_key: Option<String>,
}

impl SqliteStore {
    /// Open (or create) a `SQLite` store.
    ///
    /// - `db_path`: Path to the `SQLite` database file (created if not exists).
    /// - `encryption_key`: Key for encrypting/decrypting secret fields.
    ///
    /// # Errors
    /// Returns `CoreError::StorageError` if directory creation, database
    /// connection, or schema migration fails.
    pub async fn new(db_path: &Path, encryption_key: Option<String>) -> CoreResult<Self> {
        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| CoreError::StorageError(format!("Failed to create directory: {e}")))?;
        }

        let db_url = format!("sqlite://{}?mode=rwc", db_path.display());
        let db = Database::connect(&db_url)
            .await
            .map_err(|e| CoreError::StorageError(format!("Failed to connect to SQLite: {e}")))?;

        let store = Self { db, encryption_key };

        Migrator::up(&store.db, None)
            .await
            .map_err(|e| CoreError::StorageError(format!("Failed to run migrations: {e}")))?;

        log::info!("Opened Press store at {}", db_path.display());
        Ok(store)
    }

    fn encryption_key(&self) -> CoreResult<&str> {
        self.encryption_key.as_deref().ok_or_else(|| {
            CoreError::SecretError("Encryption key not configured for SqliteStore".into())
        })
    }

    pub(crate) fn seal(&self, secret: &PlaintextSecret) -> CoreResult<EncryptedSecret> {
        crypto::encrypt(secret.expose().as_bytes(), self.encryption_key()?)
    }

    pub(crate) fn open(&self, sealed: &EncryptedSecret) -> CoreResult<PlaintextSecret> {
        let plaintext = crypto::decrypt(sealed, self.encryption_key()?)?;
        String::from_utf8(plaintext)
            .map(PlaintextSecret::new)
            .map_err(|e| CoreError::SecretError(format!("Invalid UTF-8 in secret: {e}")))
    }
}

/// Map a `SeaORM` error to a storage error with context.
pub(crate) fn storage_error(context: &str) -> impl FnOnce(sea_orm::DbErr) -> CoreError + '_ {
    move |e| CoreError::StorageError(format!("{context}: {e}"))
}
