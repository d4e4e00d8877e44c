use uuid::Uuid;

use crate::application::error::ServiceError;
use crate::application::ports::document_repository::DocumentRepository;

pub struct DeleteDocument<'a, R: DocumentRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: DocumentRepository + ?Sized> DeleteDocument<'a, R> {
    // Deletes the record only. Stored content stays behind; the cleanup
    // job reclaims orphaned files.
    pub async fn execute(&self, owner_id: Uuid, document_id: Uuid) -> Result<(), ServiceError> {
        let existing = self
            .repo
            .get_by_id(document_id)
            .await?
            .ok_or_else(|| ServiceError::not_found(format!("document {document_id}")))?;
        if existing.owner_id != owner_id {
            return Err(ServiceError::forbidden(format!("document {document_id}")));
        }
        if !self.repo.delete_owned(document_id, owner_id).await? {
            return Err(ServiceError::not_found(format!("document {document_id}")));
        }
        Ok(())
    }
}
