//! Record type schema registration

use async_trait::async_trait;

use crate::error::CoreResult;
use crate::types::SchemaRef;

/// Registers or refreshes record-type definitions in the underlying store.
#[async_trait]
pub trait SchemaRegistry: Send + Sync {
    /// Make the record type described by `schema` queryable.
    ///
    /// Must be idempotent: reloading an already registered schema is a no-op
    /// for the data it holds.
    ///
    /// # Errors
    /// `CoreError::SchemaNotFound` if the store has no definition for `schema`.
    async fn reload_schema(&self, schema: &SchemaRef) -> CoreResult<()>;
}
