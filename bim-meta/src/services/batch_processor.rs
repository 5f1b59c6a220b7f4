//! Batch processing of attachment metadata
//!
//! One routine serves all four modes. REPORT_* modes only read; COMMIT writes
//! each record, re-reads it and moves on. Records are handled strictly one
//! after another: every store call is awaited before the next one starts.

use crate::models::{
    AttachmentField, AttachmentId, AttachmentRecord, BatchSummary, CleaningResult, EntryOutcome,
    MetaSnapshot, ReportEntry, ReportMode,
};
use crate::store::{AttachmentStore, FieldUpdates};
use bim_common::Result;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

/// Which fields COMMIT writes besides title and alt text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitPolicy {
    /// Also write the inferred alt text into the description (default: true)
    pub overwrite_description: bool,
    /// Also write the inferred alt text into the caption (default: false)
    pub overwrite_caption: bool,
}

impl Default for CommitPolicy {
    fn default() -> Self {
        Self {
            overwrite_description: true,
            overwrite_caption: false,
        }
    }
}

impl CommitPolicy {
    /// Fields written for one record
    ///
    /// Always `title <- cleaned_title` and `alt_text <- inferred_alt`;
    /// description and caption receive the inferred alt when enabled.
    pub fn field_updates(&self, cleaning: &CleaningResult) -> FieldUpdates {
        let mut fields = FieldUpdates::new();
        fields.insert(AttachmentField::Title, cleaning.cleaned_title.clone());
        fields.insert(AttachmentField::AltText, cleaning.inferred_alt.clone());
        if self.overwrite_description {
            fields.insert(AttachmentField::Description, cleaning.inferred_alt.clone());
        }
        if self.overwrite_caption {
            fields.insert(AttachmentField::Caption, cleaning.inferred_alt.clone());
        }
        fields
    }
}

/// Metadata normalizer and updater
pub struct BatchProcessor<'a, S: AttachmentStore + ?Sized> {
    store: &'a S,
    policy: CommitPolicy,
}

impl<'a, S: AttachmentStore + ?Sized> BatchProcessor<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self {
            store,
            policy: CommitPolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: CommitPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn policy(&self) -> CommitPolicy {
        self.policy
    }

    /// Enumerate the store and process every record
    ///
    /// # Errors
    /// Only enumeration failures are returned. Per-record write failures are
    /// reported inside the entries.
    pub async fn run(&self, mode: ReportMode) -> Result<Vec<ReportEntry>> {
        let records = self.store.query_all().await?;
        Ok(self.process(&records, mode).await)
    }

    /// Process already enumerated records in the given order
    pub async fn process(&self, records: &[AttachmentRecord], mode: ReportMode) -> Vec<ReportEntry> {
        info!(
            mode = %mode,
            records = records.len(),
            store = self.store.name(),
            "Processing attachments"
        );
        if !mode.is_read_only() {
            info!(
                overwrite_description = self.policy.overwrite_description,
                overwrite_caption = self.policy.overwrite_caption,
                "Commit policy"
            );
        }

        let mut entries = Vec::with_capacity(records.len());
        for record in records {
            let entry = match mode {
                ReportMode::ReportMissing => {
                    if !record.is_missing_meta() {
                        continue;
                    }
                    ReportEntry::listing(record, mode)
                }
                ReportMode::ReportAll => ReportEntry::listing(record, mode),
                ReportMode::ReportProposed => {
                    let mut entry = ReportEntry::listing(record, mode);
                    entry.proposed = Some(CleaningResult::derive(record));
                    entry
                }
                ReportMode::Commit => self.commit_record(record).await,
            };
            entries.push(entry);
        }

        let summary = BatchSummary::from_entries(&entries);
        if summary.failed > 0 {
            warn!(mode = %mode, "Finished with failures: {}", summary);
        } else {
            info!(mode = %mode, "Finished: {}", summary);
        }

        entries
    }

    /// Write cleaned values for one record, then re-read it
    async fn commit_record(&self, record: &AttachmentRecord) -> ReportEntry {
        let cleaning = CleaningResult::derive(record);
        let fields = self.policy.field_updates(&cleaning);

        debug!(
            id = %record.id,
            title = %cleaning.cleaned_title,
            alt = %cleaning.inferred_alt,
            "Updating attachment"
        );

        let mut entry = ReportEntry::listing(record, ReportMode::Commit);
        entry.proposed = Some(cleaning);

        match self.store.update_record(record.id, &fields).await {
            Ok(_) => {
                entry.updated = Some(self.reread(record.id).await);
                entry.outcome = EntryOutcome::Committed;
            }
            Err(e) => {
                warn!(id = %record.id, error = %e, "Attachment update failed, continuing with next record");
                entry.outcome = EntryOutcome::Failed {
                    error: e.to_string(),
                };
            }
        }

        entry
    }

    /// Read the stored values back field by field
    ///
    /// A field that cannot be read is reported as empty.
    async fn reread(&self, id: AttachmentId) -> MetaSnapshot {
        let mut snapshot = MetaSnapshot::default();
        for field in AttachmentField::ALL {
            let value = match self.store.get_field(id, field).await {
                Ok(value) => value,
                Err(e) => {
                    warn!(id = %id, field = %field, error = %e, "Re-read failed, reporting empty value");
                    String::new()
                }
            };
            match field {
                AttachmentField::Title => snapshot.title = value,
                AttachmentField::Caption => snapshot.caption = value,
                AttachmentField::AltText => snapshot.alt_text = value,
                AttachmentField::Description => snapshot.description = value,
            }
        }
        snapshot
    }
}
