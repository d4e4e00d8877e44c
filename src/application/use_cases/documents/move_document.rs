use uuid::Uuid;

use crate::application::error::ServiceError;
use crate::application::ports::document_repository::DocumentRepository;
use crate::application::ports::folder_repository::FolderRepository;
use crate::domain::files::document::Document;

pub struct MoveDocument<'a, R, F>
where
    R: DocumentRepository + ?Sized,
    F: FolderRepository + ?Sized,
{
    pub repo: &'a R,
    pub folders: &'a F,
}

impl<'a, R, F> MoveDocument<'a, R, F>
where
    R: DocumentRepository + ?Sized,
    F: FolderRepository + ?Sized,
{
    // A None target always moves the document to the root; a Some target
    // must resolve to a folder the caller owns.
    pub async fn execute(
        &self,
        owner_id: Uuid,
        document_id: Uuid,
        target_folder_id: Option<Uuid>,
    ) -> Result<Document, ServiceError> {
        let existing = self
            .repo
            .get_by_id(document_id)
            .await?
            .ok_or_else(|| ServiceError::not_found(format!("document {document_id}")))?;
        if existing.owner_id != owner_id {
            return Err(ServiceError::forbidden(format!("document {document_id}")));
        }
        if let Some(target) = target_folder_id {
            let folder = self
                .folders
                .get_by_id(target)
                .await?
                .ok_or_else(|| ServiceError::not_found(format!("folder {target}")))?;
            if folder.owner_id != owner_id {
                return Err(ServiceError::forbidden(format!("folder {target}")));
            }
        }
        let document = self
            .repo
            .move_owned(document_id, owner_id, target_folder_id)
            .await?
            .ok_or_else(|| ServiceError::not_found(format!("document {document_id}")))?;
        Ok(document)
    }
}
