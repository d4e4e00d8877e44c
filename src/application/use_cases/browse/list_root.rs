use uuid::Uuid;

use crate::application::error::ServiceError;
use crate::application::ports::document_repository::DocumentRepository;
use crate::application::ports::folder_repository::FolderRepository;
use crate::domain::files::document::Document;
use crate::domain::files::folder::Folder;

pub struct ListRoot<'a, F, D>
where
    F: FolderRepository + ?Sized,
    D: DocumentRepository + ?Sized,
{
    pub folders: &'a F,
    pub documents: &'a D,
}

pub struct RootListing {
    pub folders: Vec<Folder>,
    pub documents: Vec<Document>,
}

impl<'a, F, D> ListRoot<'a, F, D>
where
    F: FolderRepository + ?Sized,
    D: DocumentRepository + ?Sized,
{
    pub async fn execute(&self, owner_id: Uuid) -> Result<RootListing, ServiceError> {
        let folders = self.folders.list_roots(owner_id).await?;
        let documents = self.documents.list_roots(owner_id).await?;
        Ok(RootListing { folders, documents })
    }
}
