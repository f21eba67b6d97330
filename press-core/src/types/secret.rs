//! Secret field types

use std::fmt;

/// A decrypted secret value.
///
/// `Debug` and `Display` are redacted so the value cannot leak into logs by
/// accident; call [`PlaintextSecret::expose`] where the clear text is needed.
#[derive(Clone, PartialEq, Eq)]
pub struct PlaintextSecret(String);

impl PlaintextSecret {
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Borrow the clear text.
    #[must_use]
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for PlaintextSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PlaintextSecret(***)")
    }
}

impl fmt::Display for PlaintextSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("***")
    }
}

/// Identifies one secret field on one record.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SecretRef {
    /// Record type, e.g. `"Press Settings"`
    pub record_type: String,
    /// Primary key of the record
    pub record_name: String,
    /// Field name, e.g. `"aws_secret_access_key"`
    pub field: String,
}

impl SecretRef {
    #[must_use]
    pub fn new(
        record_type: impl Into<String>,
        record_name: impl Into<String>,
        field: impl Into<String>,
    ) -> Self {
        Self {
            record_type: record_type.into(),
            record_name: record_name.into(),
            field: field.into(),
        }
    }
}

impl fmt::Display for SecretRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}.{}", self.record_type, self.record_name, self.field)
    }
}
