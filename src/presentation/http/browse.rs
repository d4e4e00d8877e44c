use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;
use utoipa::ToSchema;

use crate::application::use_cases::browse::list_root::ListRoot;
use crate::bootstrap::app_context::AppContext;
use crate::presentation::http::ApiError;
use crate::presentation::http::auth::{self, Bearer};
use crate::presentation::http::documents::DocumentItem;
use crate::presentation::http::folders::FolderItem;

#[derive(Debug, Serialize, ToSchema)]
pub struct BrowseResponse {
    pub folders: Vec<FolderItem>,
    pub documents: Vec<DocumentItem>,
}

/// Root-level view: the caller's folders with no parent and documents
/// with no folder.
#[utoipa::path(get, path = "/api/browse", tag = "Browse",
    responses((status = 200, body = BrowseResponse)))]
pub async fn list_root(
    State(ctx): State<AppContext>,
    bearer: Bearer,
) -> Result<Json<BrowseResponse>, ApiError> {
    let owner = auth::require_owner(&ctx.cfg, bearer)?;
    let folders = ctx.folder_repo();
    let documents = ctx.document_repo();
    let uc = ListRoot {
        folders: folders.as_ref(),
        documents: documents.as_ref(),
    };
    let listing = uc.execute(owner).await?;
    Ok(Json(BrowseResponse {
        folders: listing.folders.into_iter().map(Into::into).collect(),
        documents: listing.documents.into_iter().map(Into::into).collect(),
    }))
}

pub fn routes(ctx: AppContext) -> Router {
    Router::new().route("/browse", get(list_root)).with_state(ctx)
}
