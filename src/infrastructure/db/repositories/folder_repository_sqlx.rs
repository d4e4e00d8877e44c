use async_trait::async_trait;
use sqlx::Row;
use sqlx::postgres::PgRow;
use uuid::Uuid;

use crate::application::ports::folder_repository::FolderRepository;
use crate::domain::files::folder::Folder;
use crate::infrastructure::db::PgPool;

pub struct SqlxFolderRepository {
    pub pool: PgPool,
}

impl SqlxFolderRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn map_folder(r: &PgRow) -> Folder {
    Folder {
        id: r.get("id"),
        name: r.get("name"),
        owner_id: r.get("owner_id"),
        parent_id: r.get("parent_id"),
        created_at: r.get("created_at"),
    }
}

#[async_trait]
impl FolderRepository for SqlxFolderRepository {
    async fn create(
        &self,
        owner_id: Uuid,
        name: &str,
        parent_id: Option<Uuid>,
    ) -> anyhow::Result<Folder> {
        let row = sqlx::query(
            r#"INSERT INTO folders (name, owner_id, parent_id)
               VALUES ($1, $2, $3)
               RETURNING id, name, owner_id, parent_id, created_at"#,
        )
        .bind(name)
        .bind(owner_id)
        .bind(parent_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(map_folder(&row))
    }

    async fn get_by_id(&self, id: Uuid) -> anyhow::Result<Option<Folder>> {
        let row = sqlx::query(
            r#"SELECT id, name, owner_id, parent_id, created_at
               FROM folders WHERE id = $1"#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.as_ref().map(map_folder))
    }

    async fn rename_owned(
        &self,
        id: Uuid,
        owner_id: Uuid,
        name: &str,
    ) -> anyhow::Result<Option<Folder>> {
        let row = sqlx::query(
            r#"UPDATE folders SET name = $1
               WHERE id = $2 AND owner_id = $3
               RETURNING id, name, owner_id, parent_id, created_at"#,
        )
        .bind(name)
        .bind(id)
        .bind(owner_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.as_ref().map(map_folder))
    }

    async fn delete_owned(&self, id: Uuid, owner_id: Uuid) -> anyhow::Result<bool> {
        // ON DELETE CASCADE on folders.parent_id and documents.folder_id
        // takes the whole subtree with this row.
        let res = sqlx::query(r#"DELETE FROM folders WHERE id = $1 AND owner_id = $2"#)
            .bind(id)
            .bind(owner_id)
            .execute(&self.pool)
            .await?;
        Ok(res.rows_affected() > 0)
    }

    async fn list_roots(&self, owner_id: Uuid) -> anyhow::Result<Vec<Folder>> {
        let rows = sqlx::query(
            r#"SELECT id, name, owner_id, parent_id, created_at
               FROM folders
               WHERE owner_id = $1 AND parent_id IS NULL
               ORDER BY name"#,
        )
        .bind(owner_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows.iter().map(map_folder).collect())
    }

    async fn list_children(
        &self,
        owner_id: Uuid,
        parent_id: Uuid,
    ) -> anyhow::Result<Vec<Folder>> {
        let rows = sqlx::query(
            r#"SELECT id, name, owner_id, parent_id, created_at
               FROM folders
               WHERE owner_id = $1 AND parent_id = $2
               ORDER BY name"#,
        )
        .bind(owner_id)
        .bind(parent_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows.iter().map(map_folder).collect())
    }
}
