use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::files::document::Document;

#[async_trait]
pub trait DocumentRepository: Send + Sync {
    async fn insert(
        &self,
        owner_id: Uuid,
        title: &str,
        file_path: &str,
        folder_id: Option<Uuid>,
    ) -> anyhow::Result<Document>;

    async fn get_by_id(&self, id: Uuid) -> anyhow::Result<Option<Document>>;

    // Returns None if no document with this id is owned by `owner_id`
    async fn rename_owned(
        &self,
        id: Uuid,
        owner_id: Uuid,
        title: &str,
    ) -> anyhow::Result<Option<Document>>;

    // folder_id None moves the document to root placement
    async fn move_owned(
        &self,
        id: Uuid,
        owner_id: Uuid,
        folder_id: Option<Uuid>,
    ) -> anyhow::Result<Option<Document>>;

    async fn delete_owned(&self, id: Uuid, owner_id: Uuid) -> anyhow::Result<bool>;

    async fn list_roots(&self, owner_id: Uuid) -> anyhow::Result<Vec<Document>>;

    async fn list_in_folder(
        &self,
        owner_id: Uuid,
        folder_id: Uuid,
    ) -> anyhow::Result<Vec<Document>>;

    // Maintenance queries, not scoped to an owner: titles carried by more
    // than one document, and every document for one title, newest first.
    async fn duplicated_titles(&self) -> anyhow::Result<Vec<String>>;

    async fn list_by_title_newest_first(&self, title: &str) -> anyhow::Result<Vec<Document>>;
}
