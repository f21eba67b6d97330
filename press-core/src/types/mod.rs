//! 类型定义模块

mod press_settings;
mod root_domain;
mod schema;
mod secret;

pub use press_settings::PressSettings;
pub use root_domain::RootDomain;
pub use schema::SchemaRef;
pub use secret::{PlaintextSecret, SecretRef};
