//! Attachment store abstraction
//!
//! The batch processor only talks to a store through [`AttachmentStore`], so
//! the same normalization runs against the bundled SQLite database, an
//! in-memory collection, or any other backend a host application supplies.

pub mod memory;
pub mod sqlite;

pub use memory::MemoryAttachmentStore;
pub use sqlite::SqliteAttachmentStore;

use crate::models::{AttachmentField, AttachmentId, AttachmentRecord};
use async_trait::async_trait;
use bim_common::Result;
use std::collections::BTreeMap;

/// Field name -> new value mapping applied by [`AttachmentStore::update_record`]
pub type FieldUpdates = BTreeMap<AttachmentField, String>;

/// External attachment store
///
/// Implementations must be safe to share, but the processor never issues
/// concurrent calls: every call is awaited before the next one starts.
#[async_trait]
pub trait AttachmentStore: Send + Sync {
    /// Store identifier for log output
    fn name(&self) -> &'static str;

    /// Enumerate every attachment regardless of status, in the store's natural order
    async fn query_all(&self) -> Result<Vec<AttachmentRecord>>;

    /// Read a single text field
    ///
    /// # Errors
    /// `Error::NotFound` if no attachment has this id
    async fn get_field(&self, id: AttachmentId, field: AttachmentField) -> Result<String>;

    /// Apply all `fields` to one attachment and return the updated record
    ///
    /// # Errors
    /// `Error::NotFound` if no attachment has this id; any backend error
    /// otherwise. A failed update must leave the record unchanged.
    async fn update_record(&self, id: AttachmentId, fields: &FieldUpdates) -> Result<AttachmentRecord>;
}
