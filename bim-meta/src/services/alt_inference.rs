//! Alt text inference
//!
//! Decides the replacement alt text for an attachment from its cleaned caption
//! and title. An existing alt text is never cleared or replaced.

use super::text_cleaner::clean;
use crate::models::{AttachmentRecord, CleaningResult};

/// Infer the alt text for one attachment
///
/// **Decision order (first match wins):**
/// 1. `current_alt` empty and `cleaned_caption` non-empty: the cleaned caption
/// 2. `current_alt` empty and `cleaned_title` non-empty: the cleaned title
/// 3. otherwise: `current_alt` unchanged
///
/// Rule 3 covers both "already has alt" and "nothing usable". Total function,
/// no error conditions.
pub fn infer_alt(current_alt: &str, cleaned_caption: &str, cleaned_title: &str) -> String {
    if current_alt.is_empty() && !cleaned_caption.is_empty() {
        cleaned_caption.to_string()
    } else if current_alt.is_empty() && !cleaned_title.is_empty() {
        cleaned_title.to_string()
    } else {
        current_alt.to_string()
    }
}

impl CleaningResult {
    /// Clean title and caption of a record and infer its alt text
    pub fn derive(record: &AttachmentRecord) -> Self {
        let cleaned_title = clean(&record.title);
        let cleaned_caption = clean(&record.caption);
        let inferred_alt = infer_alt(&record.alt_text, &cleaned_caption, &cleaned_title);

        Self {
            cleaned_title,
            cleaned_caption,
            inferred_alt,
        }
    }
}
