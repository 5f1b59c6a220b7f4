//! Database Test Utilities

use anyhow::Result;
use bim_meta::{AttachmentRecord, SqliteAttachmentStore};
use sqlx::SqlitePool;
use tempfile::TempDir;

/// Create temporary test database with the attachment schema applied
///
/// Returns (TempDir, SqlitePool) - TempDir must be kept alive for duration of test
pub async fn create_test_db() -> Result<(TempDir, SqlitePool)> {
    let temp_dir = TempDir::new()?;
    let db_path = temp_dir.path().join("test_bim.db");

    let pool = bim_common::db::init_database(&db_path).await?;

    Ok((temp_dir, pool))
}

/// Seed database with attachment records
pub async fn seed_attachments(store: &SqliteAttachmentStore, records: &[AttachmentRecord]) -> Result<()> {
    for record in records {
        store.save_record(record).await?;
    }
    Ok(())
}
