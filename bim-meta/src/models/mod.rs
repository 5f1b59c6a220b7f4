//! Data models for attachment metadata processing

pub mod attachment;
pub mod report;

pub use attachment::{AttachmentField, AttachmentId, AttachmentRecord};
pub use report::{BatchSummary, CleaningResult, EntryOutcome, MetaSnapshot, ReportEntry, ReportMode};
