//! bim-meta library interface
//!
//! Cleans attachment titles and captions, infers missing alt text and applies
//! the result to an attachment store. The binary in `main.rs` is a thin host
//! around these modules.

pub mod config;
pub mod models;
pub mod render;
pub mod services;
pub mod store;

pub use models::{AttachmentField, AttachmentId, AttachmentRecord, ReportEntry, ReportMode};
pub use services::{clean, infer_alt, BatchProcessor, CommitPolicy};
pub use store::{AttachmentStore, MemoryAttachmentStore, SqliteAttachmentStore};
