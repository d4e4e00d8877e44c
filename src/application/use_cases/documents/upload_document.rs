use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::application::error::ServiceError;
use crate::application::ports::document_repository::DocumentRepository;
use crate::application::ports::folder_repository::FolderRepository;
use crate::application::ports::storage_port::StoragePort;
use crate::domain::files::document::Document;

pub struct UploadDocument<'a, R, F, S>
where
    R: DocumentRepository + ?Sized,
    F: FolderRepository + ?Sized,
    S: StoragePort + ?Sized,
{
    pub repo: &'a R,
    pub folders: &'a F,
    pub storage: &'a S,
}

impl<'a, R, F, S> UploadDocument<'a, R, F, S>
where
    R: DocumentRepository + ?Sized,
    F: FolderRepository + ?Sized,
    S: StoragePort + ?Sized,
{
    pub async fn execute(
        &self,
        owner_id: Uuid,
        title: &str,
        bytes: &[u8],
        folder_id: Option<Uuid>,
    ) -> Result<Document, ServiceError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(ServiceError::validation("document title must not be empty"));
        }
        if bytes.is_empty() {
            return Err(ServiceError::validation("uploaded file must not be empty"));
        }
        // A bad folder reference rejects the upload before anything is
        // written; nothing is created or stored on failure.
        if let Some(folder_id) = folder_id {
            let folder = self
                .folders
                .get_by_id(folder_id)
                .await?
                .ok_or_else(|| ServiceError::not_found(format!("folder {folder_id}")))?;
            if folder.owner_id != owner_id {
                return Err(ServiceError::forbidden(format!("folder {folder_id}")));
            }
        }

        let filename = upload_filename(title, Utc::now());
        let path = self.storage.store(&filename, bytes).await.map_err(|err| {
            tracing::error!(error = ?err, owner_id = %owner_id, "document_store_failed");
            ServiceError::Storage(err)
        })?;
        let document = self.repo.insert(owner_id, title, &path, folder_id).await?;
        Ok(document)
    }
}

// Filename derived from the title and an upload timestamp; the storage
// backend resolves any residual collision.
fn upload_filename(title: &str, at: DateTime<Utc>) -> String {
    let mut slug: String = title
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') {
                c.to_ascii_lowercase()
            } else {
                '-'
            }
        })
        .collect();
    slug.truncate(64);
    let slug = slug.trim_matches('-');
    let slug = if slug.is_empty() { "document" } else { slug };
    format!("{}-{}", at.format("%Y%m%d%H%M%S%3f"), slug)
}
