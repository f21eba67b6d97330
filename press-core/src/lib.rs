//! Press Core Library
//!
//! Record types, storage traits and data patches for the Press platform.
//!
//! The storage layer is abstracted behind traits so that patches can run
//! against the `SQLite` store in `press-app` or against in-memory doubles.

pub mod crypto;
pub mod error;
pub mod services;
pub mod traits;
pub mod types;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use error::{CoreError, CoreResult};
pub use services::{CreateRootDomainFromPressSettings, Patch, PatchContext, PatchOutcome};
pub use traits::{PressSettingsRepository, RootDomainRepository, SchemaRegistry, Secrets};
