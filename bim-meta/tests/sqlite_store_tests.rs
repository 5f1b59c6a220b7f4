//! End-to-end runs against the SQLite attachment store
//!
//! Uses a real database file created by `init_database` in a temp dir.

mod helpers;

use bim_meta::models::EntryOutcome;
use bim_meta::render::render_text;
use bim_meta::{
    AttachmentField, AttachmentId, AttachmentRecord, AttachmentStore, BatchProcessor, CommitPolicy,
    ReportMode, SqliteAttachmentStore,
};
use helpers::{create_test_db, seed_attachments};

#[tokio::test]
async fn test_commit_persists_to_database() {
    let (_temp_dir, pool) = create_test_db().await.unwrap();
    let store = SqliteAttachmentStore::new(pool);
    seed_attachments(
        &store,
        &[
            AttachmentRecord::new(1).with_title("hello-world").with_description("x"),
            AttachmentRecord::new(2)
                .with_title("IMG-0042")
                .with_caption("Sunset over the bay."),
        ],
    )
    .await
    .unwrap();

    let entries = BatchProcessor::new(&store).run(ReportMode::Commit).await.unwrap();

    assert!(entries.iter().all(|e| e.outcome == EntryOutcome::Committed));

    let first = store.load_record(AttachmentId(1)).await.unwrap().unwrap();
    assert_eq!(first.title, "Hello world");
    assert_eq!(first.alt_text, "Hello world");
    assert_eq!(first.description, "Hello world");

    let second = store.load_record(AttachmentId(2)).await.unwrap().unwrap();
    assert_eq!(second.title, "IMG 0042");
    assert_eq!(second.alt_text, "Sunset over the bay");
    assert_eq!(second.caption, "Sunset over the bay.");
}

#[tokio::test]
async fn test_commit_with_caption_overwrite() {
    let (_temp_dir, pool) = create_test_db().await.unwrap();
    let store = SqliteAttachmentStore::new(pool);
    seed_attachments(&store, &[AttachmentRecord::new(5).with_title("old-mill")])
        .await
        .unwrap();

    let policy = CommitPolicy {
        overwrite_description: false,
        overwrite_caption: true,
    };
    let entries = BatchProcessor::new(&store)
        .with_policy(policy)
        .run(ReportMode::Commit)
        .await
        .unwrap();

    let updated = entries[0].updated.as_ref().unwrap();
    assert_eq!(updated.caption, "Old mill");
    assert_eq!(updated.description, "");
    assert_eq!(
        store.get_field(AttachmentId(5), AttachmentField::Caption).await.unwrap(),
        "Old mill"
    );
}

#[tokio::test]
async fn test_second_commit_matches_first() {
    let (_temp_dir, pool) = create_test_db().await.unwrap();
    let store = SqliteAttachmentStore::new(pool);
    seed_attachments(
        &store,
        &[
            AttachmentRecord::new(1).with_title("a-b-c"),
            AttachmentRecord::new(2).with_caption("caption-only!"),
            AttachmentRecord::new(3),
        ],
    )
    .await
    .unwrap();
    let processor = BatchProcessor::new(&store);

    let first = processor.run(ReportMode::Commit).await.unwrap();
    let second = processor.run(ReportMode::Commit).await.unwrap();

    let updated = |entries: &[bim_meta::ReportEntry]| -> Vec<_> {
        entries.iter().map(|e| e.updated.clone().unwrap()).collect()
    };
    assert_eq!(updated(&first), updated(&second));
}

#[tokio::test]
async fn test_missing_report_rendered_as_text() {
    let (_temp_dir, pool) = create_test_db().await.unwrap();
    let store = SqliteAttachmentStore::new(pool);
    seed_attachments(
        &store,
        &[
            AttachmentRecord::new(1)
                .with_title("done")
                .with_caption("c")
                .with_alt_text("a"),
            AttachmentRecord::new(2).with_title("needs-alt").with_caption("c"),
        ],
    )
    .await
    .unwrap();

    let entries = BatchProcessor::new(&store).run(ReportMode::ReportMissing).await.unwrap();
    let mut buf = Vec::new();
    render_text(&mut buf, &entries).unwrap();
    let text = String::from_utf8(buf).unwrap();

    assert_eq!(text, "MISSING META\nID: 2\nTitle: needs-alt\nCaption: c\nAlt: \n\n");
}
