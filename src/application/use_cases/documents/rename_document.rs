use uuid::Uuid;

use crate::application::error::ServiceError;
use crate::application::ports::document_repository::DocumentRepository;
use crate::domain::files::document::Document;

pub struct RenameDocument<'a, R: DocumentRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: DocumentRepository + ?Sized> RenameDocument<'a, R> {
    pub async fn execute(
        &self,
        owner_id: Uuid,
        document_id: Uuid,
        new_title: &str,
    ) -> Result<Document, ServiceError> {
        let existing = self
            .repo
            .get_by_id(document_id)
            .await?
            .ok_or_else(|| ServiceError::not_found(format!("document {document_id}")))?;
        if existing.owner_id != owner_id {
            return Err(ServiceError::forbidden(format!("document {document_id}")));
        }
        let new_title = new_title.trim();
        if new_title.is_empty() {
            return Err(ServiceError::validation("document title must not be empty"));
        }
        let document = self
            .repo
            .rename_owned(document_id, owner_id, new_title)
            .await?
            .ok_or_else(|| ServiceError::not_found(format!("document {document_id}")))?;
        Ok(document)
    }
}
