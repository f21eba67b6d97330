//! Record type schema identity

use std::fmt;

/// Identity of a record-type definition: owning module, category and type name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SchemaRef {
    pub module: &'static str,
    pub category: &'static str,
    pub record_type: &'static str,
}

impl SchemaRef {
    /// Schema of the `Root Domain` record type
    pub const ROOT_DOMAIN: Self = Self::new("press", "doctype", "root_domain");

    #[must_use]
    pub const fn new(
        module: &'static str,
        category: &'static str,
        record_type: &'static str,
    ) -> Self {
        Self {
            module,
            category,
            record_type,
        }
    }
}

impl fmt::Display for SchemaRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.module, self.category, self.record_type)
    }
}
