//! Store fault injection
//!
//! Wraps a `MemoryAttachmentStore` and fails selected calls, to exercise the
//! processor's continue-on-error and empty-on-reread-failure paths.

use async_trait::async_trait;
use bim_common::{Error, Result};
use bim_meta::store::FieldUpdates;
use bim_meta::{AttachmentField, AttachmentId, AttachmentRecord, AttachmentStore, MemoryAttachmentStore};
use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};

#[derive(Default)]
pub struct FaultyStore {
    pub inner: MemoryAttachmentStore,
    fail_enumeration: bool,
    fail_updates: HashSet<AttachmentId>,
    fail_reads: HashSet<(AttachmentId, AttachmentField)>,
    update_calls: AtomicUsize,
}

impl FaultyStore {
    pub fn new(records: impl IntoIterator<Item = AttachmentRecord>) -> Self {
        Self {
            inner: MemoryAttachmentStore::from_records(records),
            ..Default::default()
        }
    }

    pub fn failing_enumeration(mut self) -> Self {
        self.fail_enumeration = true;
        self
    }

    pub fn failing_update(mut self, id: i64) -> Self {
        self.fail_updates.insert(AttachmentId(id));
        self
    }

    pub fn failing_read(mut self, id: i64, field: AttachmentField) -> Self {
        self.fail_reads.insert((AttachmentId(id), field));
        self
    }

    /// Number of update_record calls received, failed ones included
    pub fn update_calls(&self) -> usize {
        self.update_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl AttachmentStore for FaultyStore {
    fn name(&self) -> &'static str {
        "faulty"
    }

    async fn query_all(&self) -> Result<Vec<AttachmentRecord>> {
        if self.fail_enumeration {
            return Err(Error::Internal("enumeration unavailable".to_string()));
        }
        self.inner.query_all().await
    }

    async fn get_field(&self, id: AttachmentId, field: AttachmentField) -> Result<String> {
        if self.fail_reads.contains(&(id, field)) {
            return Err(Error::Internal(format!("cannot read {} of {}", field, id)));
        }
        self.inner.get_field(id, field).await
    }

    async fn update_record(&self, id: AttachmentId, fields: &FieldUpdates) -> Result<AttachmentRecord> {
        self.update_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_updates.contains(&id) {
            return Err(Error::InvalidInput(format!("attachment {} is locked", id)));
        }
        self.inner.update_record(id, fields).await
    }
}
