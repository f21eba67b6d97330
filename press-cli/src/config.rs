//! Environment configuration

use std::path::PathBuf;

use anyhow::{bail, Context, Result};

/// Database file location, overrides the platform data directory
pub const DB_PATH_VAR: &str = "PRESS_DB_PATH";

/// Key used to encrypt secret fields at rest
pub const ENCRYPTION_KEY_VAR: &str = "PRESS_ENCRYPTION_KEY";

#[derive(Debug, Clone)]
pub struct Config {
    pub db_path: PathBuf,
    pub encryption_key: String,
}

impl Config {
    /// Read the configuration from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let db_path = match lookup(DB_PATH_VAR).filter(|v| !v.is_empty()) {
            Some(path) => PathBuf::from(path),
            None => default_db_path()?,
        };

        let Some(encryption_key) = lookup(ENCRYPTION_KEY_VAR).filter(|v| !v.is_empty()) else {
            bail!("{ENCRYPTION_KEY_VAR} must be set");
        };

        Ok(Self {
            db_path,
            encryption_key,
        })
    }
}

fn default_db_path() -> Result<PathBuf> {
    let data_dir = dirs::data_dir()
        .context("Could not determine the platform data directory; set PRESS_DB_PATH")?;
    Ok(data_dir.join("press").join("press.db"))
}
