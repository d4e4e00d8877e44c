//! Tests for the out-of-band duplicate-title cleanup.

mod support;

use uuid::Uuid;

use docspace::application::ports::storage_port::StoragePort;
use docspace::application::use_cases::documents::upload_document::UploadDocument;
use docspace::application::use_cases::maintenance::cleanup_duplicates::CleanupDuplicates;
use docspace::domain::files::document::Document;
use support::{InMemoryStorage, InMemoryStore};

async fn upload(
    store: &InMemoryStore,
    storage: &InMemoryStorage,
    owner: Uuid,
    title: &str,
) -> Document {
    UploadDocument {
        repo: store,
        folders: store,
        storage,
    }
    .execute(owner, title, b"content", None)
    .await
    .unwrap()
}

#[tokio::test]
async fn cleanup_keeps_the_newest_document_per_title() {
    let store = InMemoryStore::default();
    let storage = InMemoryStorage::default();
    let owner = Uuid::new_v4();
    let oldest = upload(&store, &storage, owner, "Report.pdf").await;
    let middle = upload(&store, &storage, owner, "Report.pdf").await;
    let newest = upload(&store, &storage, owner, "Report.pdf").await;
    let unrelated = upload(&store, &storage, owner, "Notes.txt").await;

    let report = CleanupDuplicates {
        repo: &store,
        storage: &storage,
    }
    .execute()
    .await
    .unwrap();

    assert_eq!(report.duplicated_titles, 1);
    assert_eq!(report.deleted_documents, 2);
    assert!(!store.document_exists(oldest.id));
    assert!(!store.document_exists(middle.id));
    assert!(store.document_exists(newest.id));
    assert!(store.document_exists(unrelated.id));
    // Stale files are reclaimed, the keeper's content stays.
    assert!(!storage.contains(&oldest.file_path));
    assert!(!storage.contains(&middle.file_path));
    assert!(storage.contains(&newest.file_path));
    assert!(storage.contains(&unrelated.file_path));
}

#[tokio::test]
async fn cleanup_tolerates_already_missing_files() {
    let store = InMemoryStore::default();
    let storage = InMemoryStorage::default();
    let owner = Uuid::new_v4();
    let stale = upload(&store, &storage, owner, "Report.pdf").await;
    let keeper = upload(&store, &storage, owner, "Report.pdf").await;

    // The stale document's physical file vanished out-of-band.
    storage.delete(&stale.file_path).await.unwrap();

    let report = CleanupDuplicates {
        repo: &store,
        storage: &storage,
    }
    .execute()
    .await
    .unwrap();

    assert_eq!(report.deleted_documents, 1);
    assert!(!store.document_exists(stale.id));
    assert!(store.document_exists(keeper.id));
}

#[tokio::test]
async fn cleanup_is_a_noop_without_duplicates() {
    let store = InMemoryStore::default();
    let storage = InMemoryStorage::default();
    let owner = Uuid::new_v4();
    let a = upload(&store, &storage, owner, "One.txt").await;
    let b = upload(&store, &storage, owner, "Two.txt").await;

    let report = CleanupDuplicates {
        repo: &store,
        storage: &storage,
    }
    .execute()
    .await
    .unwrap();

    assert_eq!(report.duplicated_titles, 0);
    assert_eq!(report.deleted_documents, 0);
    assert!(store.document_exists(a.id));
    assert!(store.document_exists(b.id));
    assert_eq!(storage.file_count(), 2);
}
