//! Storage layer abstraction trait definition

mod press_settings_repository;
mod root_domain_repository;
mod schema_registry;
mod secrets;

pub use press_settings_repository::PressSettingsRepository;
pub use root_domain_repository::RootDomainRepository;
pub use schema_registry::SchemaRegistry;
pub use secrets::Secrets;
