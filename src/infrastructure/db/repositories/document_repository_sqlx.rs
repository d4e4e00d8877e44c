use async_trait::async_trait;
use sqlx::Row;
use sqlx::postgres::PgRow;
use uuid::Uuid;

use crate::application::ports::document_repository::DocumentRepository;
use crate::domain::files::document::Document;
use crate::infrastructure::db::PgPool;

pub struct SqlxDocumentRepository {
    pub pool: PgPool,
}

impl SqlxDocumentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn map_document(r: &PgRow) -> Document {
    Document {
        id: r.get("id"),
        title: r.get("title"),
        file_path: r.get("file_path"),
        folder_id: r.get("folder_id"),
        owner_id: r.get("owner_id"),
        uploaded_at: r.get("uploaded_at"),
    }
}

#[async_trait]
impl DocumentRepository for SqlxDocumentRepository {
    async fn insert(
        &self,
        owner_id: Uuid,
        title: &str,
        file_path: &str,
        folder_id: Option<Uuid>,
    ) -> anyhow::Result<Document> {
        let row = sqlx::query(
            r#"INSERT INTO documents (title, file_path, folder_id, owner_id)
               VALUES ($1, $2, $3, $4)
               RETURNING id, title, file_path, folder_id, owner_id, uploaded_at"#,
        )
        .bind(title)
        .bind(file_path)
        .bind(folder_id)
        .bind(owner_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(map_document(&row))
    }

    async fn get_by_id(&self, id: Uuid) -> anyhow::Result<Option<Document>> {
        let row = sqlx::query(
            r#"SELECT id, title, file_path, folder_id, owner_id, uploaded_at
               FROM documents WHERE id = $1"#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.as_ref().map(map_document))
    }

    async fn rename_owned(
        &self,
        id: Uuid,
        owner_id: Uuid,
        title: &str,
    ) -> anyhow::Result<Option<Document>> {
        let row = sqlx::query(
            r#"UPDATE documents SET title = $1
               WHERE id = $2 AND owner_id = $3
               RETURNING id, title, file_path, folder_id, owner_id, uploaded_at"#,
        )
        .bind(title)
        .bind(id)
        .bind(owner_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.as_ref().map(map_document))
    }

    async fn move_owned(
        &self,
        id: Uuid,
        owner_id: Uuid,
        folder_id: Option<Uuid>,
    ) -> anyhow::Result<Option<Document>> {
        let row = sqlx::query(
            r#"UPDATE documents SET folder_id = $1
               WHERE id = $2 AND owner_id = $3
               RETURNING id, title, file_path, folder_id, owner_id, uploaded_at"#,
        )
        .bind(folder_id)
        .bind(id)
        .bind(owner_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.as_ref().map(map_document))
    }

    async fn delete_owned(&self, id: Uuid, owner_id: Uuid) -> anyhow::Result<bool> {
        let res = sqlx::query(r#"DELETE FROM documents WHERE id = $1 AND owner_id = $2"#)
            .bind(id)
            .bind(owner_id)
            .execute(&self.pool)
            .await?;
        Ok(res.rows_affected() > 0)
    }

    async fn list_roots(&self, owner_id: Uuid) -> anyhow::Result<Vec<Document>> {
        let rows = sqlx::query(
            r#"SELECT id, title, file_path, folder_id, owner_id, uploaded_at
               FROM documents
               WHERE owner_id = $1 AND folder_id IS NULL
               ORDER BY uploaded_at DESC"#,
        )
        .bind(owner_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows.iter().map(map_document).collect())
    }

    async fn list_in_folder(
        &self,
        owner_id: Uuid,
        folder_id: Uuid,
    ) -> anyhow::Result<Vec<Document>> {
        let rows = sqlx::query(
            r#"SELECT id, title, file_path, folder_id, owner_id, uploaded_at
               FROM documents
               WHERE owner_id = $1 AND folder_id = $2
               ORDER BY uploaded_at DESC"#,
        )
        .bind(owner_id)
        .bind(folder_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows.iter().map(map_document).collect())
    }

    async fn duplicated_titles(&self) -> anyhow::Result<Vec<String>> {
        let rows = sqlx::query(
            r#"SELECT title FROM documents
               GROUP BY title HAVING COUNT(*) > 1
               ORDER BY title"#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows.into_iter().map(|r| r.get("title")).collect())
    }

    async fn list_by_title_newest_first(&self, title: &str) -> anyhow::Result<Vec<Document>> {
        let rows = sqlx::query(
            r#"SELECT id, title, file_path, folder_id, owner_id, uploaded_at
               FROM documents
               WHERE title = $1
               ORDER BY uploaded_at DESC"#,
        )
        .bind(title)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows.iter().map(map_document).collect())
    }
}
