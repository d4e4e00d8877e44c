use uuid::Uuid;

use crate::application::error::ServiceError;
use crate::application::ports::folder_repository::FolderRepository;

pub struct DeleteFolder<'a, R: FolderRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: FolderRepository + ?Sized> DeleteFolder<'a, R> {
    // Removes the folder and its whole subtree, documents included. Stored
    // file content stays behind; the cleanup job reclaims orphaned files.
    pub async fn execute(&self, owner_id: Uuid, folder_id: Uuid) -> Result<(), ServiceError> {
        let existing = self
            .repo
            .get_by_id(folder_id)
            .await?
            .ok_or_else(|| ServiceError::not_found(format!("folder {folder_id}")))?;
        if existing.owner_id != owner_id {
            return Err(ServiceError::forbidden(format!("folder {folder_id}")));
        }
        if !self.repo.delete_owned(folder_id, owner_id).await? {
            return Err(ServiceError::not_found(format!("folder {folder_id}")));
        }
        Ok(())
    }
}
