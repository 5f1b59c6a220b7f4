//! In-memory attachment store
//!
//! Keeps records in insertion order, which is its natural enumeration order.

use super::{AttachmentStore, FieldUpdates};
use crate::models::{AttachmentField, AttachmentId, AttachmentRecord};
use async_trait::async_trait;
use bim_common::{Error, Result};
use tokio::sync::RwLock;

#[derive(Debug, Default)]
pub struct MemoryAttachmentStore {
    records: RwLock<Vec<AttachmentRecord>>,
}

impl MemoryAttachmentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from records; a repeated id replaces the earlier record
    pub fn from_records(records: impl IntoIterator<Item = AttachmentRecord>) -> Self {
        let mut unique: Vec<AttachmentRecord> = Vec::new();
        for record in records {
            match unique.iter_mut().find(|r| r.id == record.id) {
                Some(existing) => *existing = record,
                None => unique.push(record),
            }
        }
        Self {
            records: RwLock::new(unique),
        }
    }

    /// Copy of the current records
    pub async fn snapshot(&self) -> Vec<AttachmentRecord> {
        self.records.read().await.clone()
    }

    pub async fn get(&self, id: AttachmentId) -> Option<AttachmentRecord> {
        self.records.read().await.iter().find(|r| r.id == id).cloned()
    }
}

#[async_trait]
impl AttachmentStore for MemoryAttachmentStore {
    fn name(&self) -> &'static str {
        "memory"
    }

    async fn query_all(&self) -> Result<Vec<AttachmentRecord>> {
        Ok(self.snapshot().await)
    }

    async fn get_field(&self, id: AttachmentId, field: AttachmentField) -> Result<String> {
        self.get(id)
            .await
            .map(|record| record.field(field).to_string())
            .ok_or_else(|| Error::NotFound(format!("attachment {}", id)))
    }

    async fn update_record(&self, id: AttachmentId, fields: &FieldUpdates) -> Result<AttachmentRecord> {
        let mut records = self.records.write().await;
        let record = records
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| Error::NotFound(format!("attachment {}", id)))?;

        for (field, value) in fields {
            record.set_field(*field, value.clone());
        }

        Ok(record.clone())
    }
}
