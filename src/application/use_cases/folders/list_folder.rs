use uuid::Uuid;

use crate::application::error::ServiceError;
use crate::application::ports::document_repository::DocumentRepository;
use crate::application::ports::folder_repository::FolderRepository;
use crate::domain::files::document::Document;
use crate::domain::files::folder::Folder;

pub struct ListFolder<'a, F, D>
where
    F: FolderRepository + ?Sized,
    D: DocumentRepository + ?Sized,
{
    pub folders: &'a F,
    pub documents: &'a D,
}

/// One level of the tree: the folder itself, its direct child folders and
/// its direct documents.
#[derive(Debug)]
pub struct FolderListing {
    pub folder: Folder,
    pub subfolders: Vec<Folder>,
    pub documents: Vec<Document>,
}

impl<'a, F, D> ListFolder<'a, F, D>
where
    F: FolderRepository + ?Sized,
    D: DocumentRepository + ?Sized,
{
    pub async fn execute(
        &self,
        owner_id: Uuid,
        folder_id: Uuid,
    ) -> Result<FolderListing, ServiceError> {
        let folder = self
            .folders
            .get_by_id(folder_id)
            .await?
            .ok_or_else(|| ServiceError::not_found(format!("folder {folder_id}")))?;
        if folder.owner_id != owner_id {
            return Err(ServiceError::forbidden(format!("folder {folder_id}")));
        }
        let subfolders = self.folders.list_children(owner_id, folder_id).await?;
        let documents = self.documents.list_in_folder(owner_id, folder_id).await?;
        Ok(FolderListing {
            folder,
            subfolders,
            documents,
        })
    }
}
