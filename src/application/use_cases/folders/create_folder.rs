use uuid::Uuid;

use crate::application::error::ServiceError;
use crate::application::ports::folder_repository::FolderRepository;
use crate::domain::files::folder::Folder;

pub struct CreateFolder<'a, R: FolderRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: FolderRepository + ?Sized> CreateFolder<'a, R> {
    pub async fn execute(
        &self,
        owner_id: Uuid,
        name: &str,
        parent_id: Option<Uuid>,
    ) -> Result<Folder, ServiceError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ServiceError::validation("folder name must not be empty"));
        }
        // A parent always pre-exists and folders are never reparented, so
        // the parent graph stays acyclic without a cycle walk.
        if let Some(parent_id) = parent_id {
            let parent = self
                .repo
                .get_by_id(parent_id)
                .await?
                .ok_or_else(|| ServiceError::not_found(format!("folder {parent_id}")))?;
            if parent.owner_id != owner_id {
                return Err(ServiceError::forbidden(format!("folder {parent_id}")));
            }
        }
        let folder = self.repo.create(owner_id, name, parent_id).await?;
        Ok(folder)
    }
}
