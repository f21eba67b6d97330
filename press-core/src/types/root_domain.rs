//! Root Domain 记录

use super::{PlaintextSecret, PressSettings};

/// A base DNS domain together with the credentials needed to manage its records.
///
/// Keyed by `name`; at most one record exists per domain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RootDomain {
    /// Domain name, primary key
    pub name: String,
    pub dns_provider: String,
    pub aws_access_key_id: String,
    pub aws_secret_access_key: PlaintextSecret,
}

impl RootDomain {
    /// Record type name
    pub const RECORD_TYPE: &'static str = "Root Domain";

    /// Build a root domain from the settings singleton and its revealed secret.
    #[must_use]
    pub fn from_press_settings(settings: &PressSettings, secret: PlaintextSecret) -> Self {
        Self {
            name: settings.domain.clone(),
            dns_provider: settings.dns_provider.clone(),
            aws_access_key_id: settings.aws_access_key_id.clone(),
            aws_secret_access_key: secret,
        }
    }
}
