//! Press Settings 单例记录

use super::SecretRef;

/// Platform-wide configuration record. Exactly one instance exists.
///
/// The AWS secret is not a field here: it is only reachable
/// through [`crate::traits::Secrets::reveal`] with [`PressSettings::secret_ref`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PressSettings {
    /// Default root domain served by the platform
    pub domain: String,
    /// DNS provider identifier
    pub dns_provider: String,
    pub aws_access_key_id: String,
}

impl PressSettings {
    /// Record type name
    pub const RECORD_TYPE: &'static str = "Press Settings";

    /// Name of the single instance
    pub const INSTANCE_NAME: &'static str = "Press Settings";

    /// Field holding the AWS secret access key
    pub const AWS_SECRET_ACCESS_KEY: &'static str = "aws_secret_access_key";

    #[must_use]
    pub fn new(
        domain: impl Into<String>,
        dns_provider: impl Into<String>,
        aws_access_key_id: impl Into<String>,
    ) -> Self {
        Self {
            domain: domain.into(),
            dns_provider: dns_provider.into(),
            aws_access_key_id: aws_access_key_id.into(),
        }
    }

    /// Reference to a secret field on the settings singleton.
    #[must_use]
    pub fn secret_ref(field: &str) -> SecretRef {
        SecretRef::new(Self::RECORD_TYPE, Self::INSTANCE_NAME, field)
    }
}
