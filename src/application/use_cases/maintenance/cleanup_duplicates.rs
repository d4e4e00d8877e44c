use crate::application::ports::document_repository::DocumentRepository;
use crate::application::ports::storage_port::StoragePort;

pub struct CleanupDuplicates<'a, R, S>
where
    R: DocumentRepository + ?Sized,
    S: StoragePort + ?Sized,
{
    pub repo: &'a R,
    pub storage: &'a S,
}

#[derive(Debug, Default, Clone, Copy)]
pub struct CleanupReport {
    pub duplicated_titles: usize,
    pub deleted_documents: usize,
}

impl<'a, R, S> CleanupDuplicates<'a, R, S>
where
    R: DocumentRepository + ?Sized,
    S: StoragePort + ?Sized,
{
    // For every title carried by more than one document, keeps the most
    // recently uploaded one and deletes the rest: stored file first
    // (best-effort), then the record, through the same repository delete
    // the live path uses.
    pub async fn execute(&self) -> anyhow::Result<CleanupReport> {
        let titles = self.repo.duplicated_titles().await?;
        let mut report = CleanupReport {
            duplicated_titles: titles.len(),
            deleted_documents: 0,
        };
        for title in &titles {
            let docs = self.repo.list_by_title_newest_first(title).await?;
            let Some((keeper, stale)) = docs.split_first() else {
                continue;
            };
            tracing::info!(title = %title, keeper = %keeper.id, stale = stale.len(), "deduplicating_title");
            for doc in stale {
                if let Err(err) = self.storage.delete(&doc.file_path).await {
                    tracing::warn!(error = ?err, path = %doc.file_path, "stale_file_removal_failed");
                }
                if self.repo.delete_owned(doc.id, doc.owner_id).await? {
                    report.deleted_documents += 1;
                }
            }
        }
        Ok(report)
    }
}
