//! Report entries produced by the batch processor
//!
//! Entries are plain data. Rendering them (text listing, JSON, a web page) is
//! left to the caller; see [`crate::render`] for the bundled renderers.

use super::attachment::{AttachmentId, AttachmentRecord};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Processing mode for one batch run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReportMode {
    /// List records whose alt text or caption is empty
    ReportMissing,
    /// List every record with its current values
    ReportAll,
    /// List every record with current and proposed values
    ReportProposed,
    /// Write cleaned/inferred values and list old vs new
    Commit,
}

impl ReportMode {
    pub const ALL: [ReportMode; 4] = [
        ReportMode::ReportMissing,
        ReportMode::ReportAll,
        ReportMode::ReportProposed,
        ReportMode::Commit,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ReportMode::ReportMissing => "REPORT_MISSING",
            ReportMode::ReportAll => "REPORT_ALL",
            ReportMode::ReportProposed => "REPORT_PROPOSED",
            ReportMode::Commit => "COMMIT",
        }
    }

    /// True for the REPORT_* modes, which never touch the store
    pub fn is_read_only(&self) -> bool {
        !matches!(self, ReportMode::Commit)
    }
}

impl fmt::Display for ReportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Cleaned title/caption and the alt text inferred from them
///
/// Derived per record and never persisted on its own.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CleaningResult {
    pub cleaned_title: String,
    pub cleaned_caption: String,
    pub inferred_alt: String,
}

/// Text metadata of one attachment at a point in time
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetaSnapshot {
    pub title: String,
    pub caption: String,
    pub alt_text: String,
    pub description: String,
}

impl From<&AttachmentRecord> for MetaSnapshot {
    fn from(record: &AttachmentRecord) -> Self {
        Self {
            title: record.title.clone(),
            caption: record.caption.clone(),
            alt_text: record.alt_text.clone(),
            description: record.description.clone(),
        }
    }
}

/// Per-record result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum EntryOutcome {
    /// Read-only listing
    Reported,
    /// Write succeeded
    Committed,
    /// Write rejected by the store; later records were still processed
    Failed { error: String },
}

/// One line item of a batch report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportEntry {
    pub id: AttachmentId,
    pub mode: ReportMode,
    /// Values before processing
    pub current: MetaSnapshot,
    /// Cleaned/inferred values (REPORT_PROPOSED and COMMIT)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proposed: Option<CleaningResult>,
    /// Values re-read from the store after a successful write (COMMIT)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated: Option<MetaSnapshot>,
    pub outcome: EntryOutcome,
}

impl ReportEntry {
    /// Read-only entry without proposed values
    pub fn listing(record: &AttachmentRecord, mode: ReportMode) -> Self {
        Self {
            id: record.id,
            mode,
            current: MetaSnapshot::from(record),
            proposed: None,
            updated: None,
            outcome: EntryOutcome::Reported,
        }
    }
}

/// Counts over a finished batch
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchSummary {
    pub total: usize,
    pub reported: usize,
    pub committed: usize,
    pub failed: usize,
}

impl BatchSummary {
    pub fn from_entries(entries: &[ReportEntry]) -> Self {
        entries.iter().fold(
            Self {
                total: entries.len(),
                ..Default::default()
            },
            |mut summary, entry| {
                match entry.outcome {
                    EntryOutcome::Reported => summary.reported += 1,
                    EntryOutcome::Committed => summary.committed += 1,
                    EntryOutcome::Failed { .. } => summary.failed += 1,
                }
                summary
            },
        )
    }
}

impl fmt::Display for BatchSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} entries ({} reported, {} committed, {} failed)",
            self.total, self.reported, self.committed, self.failed
        )
    }
}
