use axum::{
    Json, Router,
    extract::{Multipart, Path, State},
    http::{HeaderMap, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, patch, post},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::use_cases::documents::delete_document::DeleteDocument;
use crate::application::use_cases::documents::download_document::DownloadDocument;
use crate::application::use_cases::documents::move_document::MoveDocument;
use crate::application::use_cases::documents::rename_document::RenameDocument;
use crate::application::use_cases::documents::upload_document::UploadDocument;
use crate::bootstrap::app_context::AppContext;
use crate::domain::files::document::Document;
use crate::presentation::http::ApiError;
use crate::presentation::http::auth::{self, Bearer};

#[derive(Debug, Serialize, ToSchema)]
pub struct DocumentItem {
    pub id: Uuid,
    pub title: String,
    pub file_path: String,
    pub folder_id: Option<Uuid>,
    pub uploaded_at: chrono::DateTime<chrono::Utc>,
}

impl From<Document> for DocumentItem {
    fn from(d: Document) -> Self {
        Self {
            id: d.id,
            title: d.title,
            file_path: d.file_path,
            folder_id: d.folder_id,
            uploaded_at: d.uploaded_at,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct RenameDocumentRequest {
    pub title: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct MoveDocumentRequest {
    // None moves the document back to the root
    pub folder_id: Option<Uuid>,
}

#[derive(ToSchema)]
#[allow(dead_code)]
pub struct UploadDocumentMultipart {
    /// Document title
    title: String,
    /// Target folder ID (optional)
    #[schema(value_type = Option<String>, format = Uuid)]
    folder: Option<String>,
    /// File to upload
    #[schema(value_type = String, format = Binary)]
    file: String,
}

/// POST /api/documents (multipart/form-data)
/// Fields:
/// - title: document title (required)
/// - folder: target folder uuid (optional, empty means root)
/// - file: binary file (required)
#[utoipa::path(
    post,
    path = "/api/documents",
    tag = "Documents",
    request_body(
        content = UploadDocumentMultipart,
        content_type = "multipart/form-data",
    ),
    responses((status = 200, body = DocumentItem))
)]
pub async fn upload_document(
    State(ctx): State<AppContext>,
    bearer: Bearer,
    mut multipart: Multipart,
) -> Result<Json<DocumentItem>, ApiError> {
    let owner = auth::require_owner(&ctx.cfg, bearer)?;

    let mut title: Option<String> = None;
    let mut folder_id: Option<Uuid> = None;
    let mut file_bytes: Option<Vec<u8>> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|_| ApiError::BadRequest("malformed multipart body"))?
    {
        let name = field.name().map(|s| s.to_string());
        match name.as_deref() {
            Some("title") => {
                let t = field
                    .text()
                    .await
                    .map_err(|_| ApiError::BadRequest("malformed multipart body"))?;
                title = Some(t);
            }
            Some("folder") => {
                let t = field
                    .text()
                    .await
                    .map_err(|_| ApiError::BadRequest("malformed multipart body"))?;
                let t = t.trim().to_string();
                if !t.is_empty() {
                    folder_id = Some(
                        Uuid::parse_str(&t).map_err(|_| ApiError::BadRequest("invalid folder id"))?,
                    );
                }
            }
            Some("file") => {
                let data = field
                    .bytes()
                    .await
                    .map_err(|_| ApiError::BadRequest("malformed multipart body"))?;
                // Enforce configured max upload size (additional safety besides DefaultBodyLimit)
                if data.len() > ctx.cfg.upload_max_bytes {
                    return Err(ApiError::PayloadTooLarge);
                }
                file_bytes = Some(data.to_vec());
            }
            _ => { /* ignore additional fields */ }
        }
    }

    let title = title.ok_or(ApiError::BadRequest("missing title field"))?;
    let bytes = file_bytes.ok_or(ApiError::BadRequest("missing file field"))?;

    let repo = ctx.document_repo();
    let folders = ctx.folder_repo();
    let storage = ctx.storage();
    let uc = UploadDocument {
        repo: repo.as_ref(),
        folders: folders.as_ref(),
        storage: storage.as_ref(),
    };
    let document = uc.execute(owner, &title, &bytes, folder_id).await?;
    Ok(Json(document.into()))
}

#[utoipa::path(patch, path = "/api/documents/{id}", tag = "Documents",
    params(("id" = Uuid, Path, description = "Document ID")),
    request_body = RenameDocumentRequest,
    responses((status = 200, body = DocumentItem)))]
pub async fn rename_document(
    State(ctx): State<AppContext>,
    bearer: Bearer,
    Path(id): Path<Uuid>,
    Json(req): Json<RenameDocumentRequest>,
) -> Result<Json<DocumentItem>, ApiError> {
    let owner = auth::require_owner(&ctx.cfg, bearer)?;
    let repo = ctx.document_repo();
    let uc = RenameDocument {
        repo: repo.as_ref(),
    };
    let document = uc.execute(owner, id, &req.title).await?;
    Ok(Json(document.into()))
}

#[utoipa::path(post, path = "/api/documents/{id}/move", tag = "Documents",
    params(("id" = Uuid, Path, description = "Document ID")),
    request_body = MoveDocumentRequest,
    responses((status = 200, body = DocumentItem)))]
pub async fn move_document(
    State(ctx): State<AppContext>,
    bearer: Bearer,
    Path(id): Path<Uuid>,
    Json(req): Json<MoveDocumentRequest>,
) -> Result<Json<DocumentItem>, ApiError> {
    let owner = auth::require_owner(&ctx.cfg, bearer)?;
    let repo = ctx.document_repo();
    let folders = ctx.folder_repo();
    let uc = MoveDocument {
        repo: repo.as_ref(),
        folders: folders.as_ref(),
    };
    let document = uc.execute(owner, id, req.folder_id).await?;
    Ok(Json(document.into()))
}

#[utoipa::path(delete, path = "/api/documents/{id}", tag = "Documents",
    params(("id" = Uuid, Path, description = "Document ID")),
    responses((status = 204)))]
pub async fn delete_document(
    State(ctx): State<AppContext>,
    bearer: Bearer,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    let owner = auth::require_owner(&ctx.cfg, bearer)?;
    let repo = ctx.document_repo();
    let uc = DeleteDocument {
        repo: repo.as_ref(),
    };
    uc.execute(owner, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/api/documents/{id}/download",
    tag = "Documents",
    params(("id" = Uuid, Path, description = "Document ID")),
    responses(
        (status = 200, description = "Stored file content", body = Vec<u8>, content_type = "application/octet-stream"),
        (status = 404, description = "Document not found")
    )
)]
pub async fn download_document(
    State(ctx): State<AppContext>,
    bearer: Bearer,
    Path(id): Path<Uuid>,
) -> Result<Response, ApiError> {
    let owner = auth::require_owner(&ctx.cfg, bearer)?;
    let repo = ctx.document_repo();
    let storage = ctx.storage();
    let uc = DownloadDocument {
        repo: repo.as_ref(),
        storage: storage.as_ref(),
    };
    let download = uc.execute(owner, id).await?;

    let guessed = mime_guess::from_path(&download.file_path).first_or_octet_stream();
    let mut headers = HeaderMap::new();
    headers.insert(
        axum::http::header::CONTENT_TYPE,
        HeaderValue::from_str(guessed.essence_str())
            .unwrap_or(HeaderValue::from_static("application/octet-stream")),
    );
    headers.insert(
        axum::http::header::HeaderName::from_static("x-content-type-options"),
        HeaderValue::from_static("nosniff"),
    );
    let disposition = format!("attachment; filename=\"{}\"", download.file_path);
    headers.insert(
        axum::http::header::CONTENT_DISPOSITION,
        HeaderValue::from_str(&disposition)
            .unwrap_or(HeaderValue::from_static("attachment")),
    );
    Ok((headers, download.bytes).into_response())
}

pub fn routes(ctx: AppContext) -> Router {
    Router::new()
        .route("/documents", post(upload_document))
        .route(
            "/documents/:id",
            patch(rename_document).delete(delete_document),
        )
        .route("/documents/:id/move", post(move_document))
        .route("/documents/:id/download", get(download_document))
        .with_state(ctx)
}
