use uuid::Uuid;

use crate::application::error::ServiceError;
use crate::application::ports::folder_repository::FolderRepository;
use crate::domain::files::folder::Folder;

pub struct RenameFolder<'a, R: FolderRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: FolderRepository + ?Sized> RenameFolder<'a, R> {
    pub async fn execute(
        &self,
        owner_id: Uuid,
        folder_id: Uuid,
        new_name: &str,
    ) -> Result<Folder, ServiceError> {
        let existing = self
            .repo
            .get_by_id(folder_id)
            .await?
            .ok_or_else(|| ServiceError::not_found(format!("folder {folder_id}")))?;
        if existing.owner_id != owner_id {
            return Err(ServiceError::forbidden(format!("folder {folder_id}")));
        }
        let new_name = new_name.trim();
        if new_name.is_empty() {
            return Err(ServiceError::validation("folder name must not be empty"));
        }
        let folder = self
            .repo
            .rename_owned(folder_id, owner_id, new_name)
            .await?
            .ok_or_else(|| ServiceError::not_found(format!("folder {folder_id}")))?;
        Ok(folder)
    }
}
