//! Metadata normalization services
//!
//! - `text_cleaner`: title/caption cleaning
//! - `alt_inference`: alt text decision policy
//! - `batch_processor`: the four processing modes over an attachment store

pub mod alt_inference;
pub mod batch_processor;
pub mod text_cleaner;

pub use alt_inference::infer_alt;
pub use batch_processor::{BatchProcessor, CommitPolicy};
pub use text_cleaner::clean;
