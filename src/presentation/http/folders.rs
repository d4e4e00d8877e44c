use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::use_cases::folders::create_folder::CreateFolder;
use crate::application::use_cases::folders::delete_folder::DeleteFolder;
use crate::application::use_cases::folders::list_folder::ListFolder;
use crate::application::use_cases::folders::rename_folder::RenameFolder;
use crate::bootstrap::app_context::AppContext;
use crate::domain::files::folder::Folder;
use crate::presentation::http::ApiError;
use crate::presentation::http::auth::{self, Bearer};
use crate::presentation::http::documents::DocumentItem;

#[derive(Debug, Serialize, ToSchema)]
pub struct FolderItem {
    pub id: Uuid,
    pub name: String,
    pub parent_id: Option<Uuid>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl From<Folder> for FolderItem {
    fn from(f: Folder) -> Self {
        Self {
            id: f.id,
            name: f.name,
            parent_id: f.parent_id,
            created_at: f.created_at,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateFolderRequest {
    pub name: String,
    pub parent_id: Option<Uuid>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct RenameFolderRequest {
    pub name: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct FolderListingResponse {
    pub folder: FolderItem,
    pub subfolders: Vec<FolderItem>,
    pub documents: Vec<DocumentItem>,
}

#[utoipa::path(post, path = "/api/folders", tag = "Folders", request_body = CreateFolderRequest,
    responses((status = 200, body = FolderItem)))]
pub async fn create_folder(
    State(ctx): State<AppContext>,
    bearer: Bearer,
    Json(req): Json<CreateFolderRequest>,
) -> Result<Json<FolderItem>, ApiError> {
    let owner = auth::require_owner(&ctx.cfg, bearer)?;
    let repo = ctx.folder_repo();
    let uc = CreateFolder {
        repo: repo.as_ref(),
    };
    let folder = uc.execute(owner, &req.name, req.parent_id).await?;
    Ok(Json(folder.into()))
}

#[utoipa::path(get, path = "/api/folders/{id}", tag = "Folders",
    params(("id" = Uuid, Path, description = "Folder ID")),
    responses((status = 200, body = FolderListingResponse)))]
pub async fn get_folder(
    State(ctx): State<AppContext>,
    bearer: Bearer,
    Path(id): Path<Uuid>,
) -> Result<Json<FolderListingResponse>, ApiError> {
    let owner = auth::require_owner(&ctx.cfg, bearer)?;
    let folders = ctx.folder_repo();
    let documents = ctx.document_repo();
    let uc = ListFolder {
        folders: folders.as_ref(),
        documents: documents.as_ref(),
    };
    let listing = uc.execute(owner, id).await?;
    Ok(Json(FolderListingResponse {
        folder: listing.folder.into(),
        subfolders: listing.subfolders.into_iter().map(Into::into).collect(),
        documents: listing.documents.into_iter().map(Into::into).collect(),
    }))
}

#[utoipa::path(patch, path = "/api/folders/{id}", tag = "Folders",
    params(("id" = Uuid, Path, description = "Folder ID")),
    request_body = RenameFolderRequest,
    responses((status = 200, body = FolderItem)))]
pub async fn rename_folder(
    State(ctx): State<AppContext>,
    bearer: Bearer,
    Path(id): Path<Uuid>,
    Json(req): Json<RenameFolderRequest>,
) -> Result<Json<FolderItem>, ApiError> {
    let owner = auth::require_owner(&ctx.cfg, bearer)?;
    let repo = ctx.folder_repo();
    let uc = RenameFolder {
        repo: repo.as_ref(),
    };
    let folder = uc.execute(owner, id, &req.name).await?;
    Ok(Json(folder.into()))
}

#[utoipa::path(delete, path = "/api/folders/{id}", tag = "Folders",
    params(("id" = Uuid, Path, description = "Folder ID")),
    responses((status = 204)))]
pub async fn delete_folder(
    State(ctx): State<AppContext>,
    bearer: Bearer,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    let owner = auth::require_owner(&ctx.cfg, bearer)?;
    let repo = ctx.folder_repo();
    let uc = DeleteFolder {
        repo: repo.as_ref(),
    };
    uc.execute(owner, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub fn routes(ctx: AppContext) -> Router {
    Router::new()
        .route("/folders", post(create_folder))
        .route(
            "/folders/:id",
            get(get_folder).patch(rename_folder).delete(delete_folder),
        )
        .with_state(ctx)
}
