//! Out-of-band maintenance job: collapse documents sharing a title down to
//! the most recently uploaded one. Not part of the live request path.

use dotenvy::dotenv;
use tracing::info;

use docspace::application::use_cases::maintenance::cleanup_duplicates::CleanupDuplicates;
use docspace::bootstrap::config::Config;
use docspace::infrastructure::db;
use docspace::infrastructure::db::repositories::document_repository_sqlx::SqlxDocumentRepository;
use docspace::infrastructure::storage::FsStorage;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(std::env::var("RUST_LOG").unwrap_or_else(|_| "docspace=info".into()))
        .init();

    let cfg = Config::from_env()?;
    let pool = db::connect_pool(&cfg.database_url).await?;
    db::migrate(&pool).await?;

    let repo = SqlxDocumentRepository::new(pool);
    let storage = FsStorage::new(&cfg.uploads_dir);
    let uc = CleanupDuplicates {
        repo: &repo,
        storage: &storage,
    };
    let report = uc.execute().await?;
    info!(
        duplicated_titles = report.duplicated_titles,
        deleted_documents = report.deleted_documents,
        "duplicate cleanup finished"
    );
    Ok(())
}
