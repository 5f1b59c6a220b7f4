//! Attachment record and field identifiers

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque attachment identifier (the host CMS uses integer post ids)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AttachmentId(pub i64);

impl fmt::Display for AttachmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for AttachmentId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

/// Text fields an attachment store can read and write
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttachmentField {
    Title,
    Caption,
    AltText,
    Description,
}

impl AttachmentField {
    pub const ALL: [AttachmentField; 4] = [
        AttachmentField::Title,
        AttachmentField::Caption,
        AttachmentField::AltText,
        AttachmentField::Description,
    ];

    /// Field name as used in update mappings and storage columns
    pub fn as_str(&self) -> &'static str {
        match self {
            AttachmentField::Title => "title",
            AttachmentField::Caption => "caption",
            AttachmentField::AltText => "alt_text",
            AttachmentField::Description => "description",
        }
    }
}

impl fmt::Display for AttachmentField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One image attachment with its text metadata
///
/// Every text field uses empty-string semantics: a missing caption is `""`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttachmentRecord {
    pub id: AttachmentId,
    pub title: String,
    pub caption: String,
    pub alt_text: String,
    pub description: String,
}

impl AttachmentRecord {
    /// Create a record with all text fields empty
    pub fn new(id: i64) -> Self {
        Self {
            id: AttachmentId(id),
            ..Default::default()
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = caption.into();
        self
    }

    pub fn with_alt_text(mut self, alt_text: impl Into<String>) -> Self {
        self.alt_text = alt_text.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn field(&self, field: AttachmentField) -> &str {
        match field {
            AttachmentField::Title => &self.title,
            AttachmentField::Caption => &self.caption,
            AttachmentField::AltText => &self.alt_text,
            AttachmentField::Description => &self.description,
        }
    }

    pub fn set_field(&mut self, field: AttachmentField, value: String) {
        match field {
            AttachmentField::Title => self.title = value,
            AttachmentField::Caption => self.caption = value,
            AttachmentField::AltText => self.alt_text = value,
            AttachmentField::Description => self.description = value,
        }
    }

    /// Alt text or caption is empty
    pub fn is_missing_meta(&self) -> bool {
        self.alt_text.is_empty() || self.caption.is_empty()
    }
}
