use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct Document {
    pub id: Uuid,
    pub title: String,
    pub file_path: String,
    pub folder_id: Option<Uuid>,
    pub owner_id: Uuid,
    pub uploaded_at: chrono::DateTime<chrono::Utc>,
}
