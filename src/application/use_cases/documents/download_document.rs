use uuid::Uuid;

use crate::application::error::ServiceError;
use crate::application::ports::document_repository::DocumentRepository;
use crate::application::ports::storage_port::StoragePort;

pub struct DownloadDocument<'a, R, S>
where
    R: DocumentRepository + ?Sized,
    S: StoragePort + ?Sized,
{
    pub repo: &'a R,
    pub storage: &'a S,
}

pub struct DocumentDownload {
    pub title: String,
    pub file_path: String,
    pub bytes: Vec<u8>,
}

impl<'a, R, S> DownloadDocument<'a, R, S>
where
    R: DocumentRepository + ?Sized,
    S: StoragePort + ?Sized,
{
    pub async fn execute(
        &self,
        owner_id: Uuid,
        document_id: Uuid,
    ) -> Result<DocumentDownload, ServiceError> {
        let document = self
            .repo
            .get_by_id(document_id)
            .await?
            .ok_or_else(|| ServiceError::not_found(format!("document {document_id}")))?;
        if document.owner_id != owner_id {
            return Err(ServiceError::forbidden(format!("document {document_id}")));
        }
        let bytes = self
            .storage
            .read(&document.file_path)
            .await
            .map_err(ServiceError::Storage)?;
        Ok(DocumentDownload {
            title: document.title,
            file_path: document.file_path,
            bytes,
        })
    }
}
