use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::files::folder::Folder;

#[async_trait]
pub trait FolderRepository: Send + Sync {
    async fn create(
        &self,
        owner_id: Uuid,
        name: &str,
        parent_id: Option<Uuid>,
    ) -> anyhow::Result<Folder>;

    async fn get_by_id(&self, id: Uuid) -> anyhow::Result<Option<Folder>>;

    // Returns None if no folder with this id is owned by `owner_id`
    async fn rename_owned(
        &self,
        id: Uuid,
        owner_id: Uuid,
        name: &str,
    ) -> anyhow::Result<Option<Folder>>;

    // Deletes the folder; the store cascades the removal through the whole
    // subtree (descendant folders and their documents). Returns false when
    // nothing matched.
    async fn delete_owned(&self, id: Uuid, owner_id: Uuid) -> anyhow::Result<bool>;

    async fn list_roots(&self, owner_id: Uuid) -> anyhow::Result<Vec<Folder>>;

    async fn list_children(&self, owner_id: Uuid, parent_id: Uuid)
    -> anyhow::Result<Vec<Folder>>;
}
