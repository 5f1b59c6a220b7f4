//! SQLite-backed attachment store
//!
//! Reads and writes the `attachments` table created by
//! `bim_common::db::init_database`. Natural enumeration order is ascending id.

use super::{AttachmentStore, FieldUpdates};
use crate::models::{AttachmentField, AttachmentId, AttachmentRecord};
use async_trait::async_trait;
use bim_common::{Error, Result};
use sqlx::SqlitePool;

type AttachmentRow = (i64, String, String, String, String);

fn record_from_row(row: AttachmentRow) -> AttachmentRecord {
    let (id, title, caption, alt_text, description) = row;
    AttachmentRecord {
        id: AttachmentId(id),
        title,
        caption,
        alt_text,
        description,
    }
}

/// Column holding a field (column names match the field names)
fn column(field: AttachmentField) -> &'static str {
    field.as_str()
}

#[derive(Debug, Clone)]
pub struct SqliteAttachmentStore {
    db: SqlitePool,
}

impl SqliteAttachmentStore {
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }

    /// Insert a record, replacing all text fields if the id already exists
    pub async fn save_record(&self, record: &AttachmentRecord) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO attachments (id, title, caption, alt_text, description, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, CURRENT_TIMESTAMP, CURRENT_TIMESTAMP)
            ON CONFLICT(id) DO UPDATE SET
                title = excluded.title,
                caption = excluded.caption,
                alt_text = excluded.alt_text,
                description = excluded.description,
                updated_at = CURRENT_TIMESTAMP
            "#,
        )
        .bind(record.id.0)
        .bind(&record.title)
        .bind(&record.caption)
        .bind(&record.alt_text)
        .bind(&record.description)
        .execute(&self.db)
        .await?;

        Ok(())
    }

    /// Load one record by id
    pub async fn load_record(&self, id: AttachmentId) -> Result<Option<AttachmentRecord>> {
        let row: Option<AttachmentRow> = sqlx::query_as(
            r#"
            SELECT id, title, caption, alt_text, description
            FROM attachments
            WHERE id = ?
            "#,
        )
        .bind(id.0)
        .fetch_optional(&self.db)
        .await?;

        Ok(row.map(record_from_row))
    }

    /// Count attachments
    pub async fn count(&self) -> Result<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM attachments")
            .fetch_one(&self.db)
            .await?;
        Ok(count)
    }
}

#[async_trait]
impl AttachmentStore for SqliteAttachmentStore {
    fn name(&self) -> &'static str {
        "sqlite"
    }

    async fn query_all(&self) -> Result<Vec<AttachmentRecord>> {
        let rows: Vec<AttachmentRow> = sqlx::query_as(
            r#"
            SELECT id, title, caption, alt_text, description
            FROM attachments
            ORDER BY id
            "#,
        )
        .fetch_all(&self.db)
        .await?;

        Ok(rows.into_iter().map(record_from_row).collect())
    }

    async fn get_field(&self, id: AttachmentId, field: AttachmentField) -> Result<String> {
        let sql = format!("SELECT {} FROM attachments WHERE id = ?", column(field));
        let value: Option<String> = sqlx::query_scalar(&sql)
            .bind(id.0)
            .fetch_optional(&self.db)
            .await?;

        value.ok_or_else(|| Error::NotFound(format!("attachment {}", id)))
    }

    async fn update_record(&self, id: AttachmentId, fields: &FieldUpdates) -> Result<AttachmentRecord> {
        if !fields.is_empty() {
            let assignments: Vec<String> = fields
                .keys()
                .map(|field| format!("{} = ?", column(*field)))
                .collect();
            let sql = format!(
                "UPDATE attachments SET {}, updated_at = CURRENT_TIMESTAMP WHERE id = ?",
                assignments.join(", ")
            );

            // Values bind in BTreeMap order, same as the assignments above
            let mut query = sqlx::query(&sql);
            for value in fields.values() {
                query = query.bind(value);
            }
            let result = query.bind(id.0).execute(&self.db).await?;

            if result.rows_affected() == 0 {
                return Err(Error::NotFound(format!("attachment {}", id)));
            }
        }

        self.load_record(id)
            .await?
            .ok_or_else(|| Error::NotFound(format!("attachment {}", id)))
    }
}
