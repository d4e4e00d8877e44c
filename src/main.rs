use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use axum::extract::{DefaultBodyLimit, MatchedPath};
use dotenvy::dotenv;
use http::HeaderValue;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use docspace::bootstrap::app_context::{AppContext, AppServices};
use docspace::bootstrap::config::Config;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
        paths(
            docspace::presentation::http::auth::register,
            docspace::presentation::http::auth::login,
            docspace::presentation::http::auth::logout,
            docspace::presentation::http::auth::me,
            docspace::presentation::http::browse::list_root,
            docspace::presentation::http::folders::create_folder,
            docspace::presentation::http::folders::get_folder,
            docspace::presentation::http::folders::rename_folder,
            docspace::presentation::http::folders::delete_folder,
            docspace::presentation::http::documents::upload_document,
            docspace::presentation::http::documents::rename_document,
            docspace::presentation::http::documents::move_document,
            docspace::presentation::http::documents::delete_document,
            docspace::presentation::http::documents::download_document,
            docspace::presentation::http::health::health,
        ),
        components(schemas(
            docspace::presentation::http::auth::RegisterRequest,
            docspace::presentation::http::auth::LoginRequest,
            docspace::presentation::http::auth::LoginResponse,
            docspace::presentation::http::auth::UserResponse,
            docspace::presentation::http::browse::BrowseResponse,
            docspace::presentation::http::folders::FolderItem,
            docspace::presentation::http::folders::CreateFolderRequest,
            docspace::presentation::http::folders::RenameFolderRequest,
            docspace::presentation::http::folders::FolderListingResponse,
            docspace::presentation::http::documents::DocumentItem,
            docspace::presentation::http::documents::RenameDocumentRequest,
            docspace::presentation::http::documents::MoveDocumentRequest,
            docspace::presentation::http::documents::UploadDocumentMultipart,
            docspace::presentation::http::health::HealthResp,
        )),
        tags(
            (name = "Auth", description = "Authentication"),
            (name = "Browse", description = "Root-level listing"),
            (name = "Folders", description = "Folder management"),
            (name = "Documents", description = "Document management"),
            (name = "Health", description = "System health checks")
        )
    )]
struct ApiDoc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "docspace=debug,axum=info,tower_http=info".into()),
        )
        .init();

    let cfg = Config::from_env()?;
    info!(?cfg, "Starting docspace backend");

    // Database
    let pool = docspace::infrastructure::db::connect_pool(&cfg.database_url).await?;
    docspace::infrastructure::db::migrate(&pool).await?;

    // Ensure uploads dir exists
    if let Err(e) = tokio::fs::create_dir_all(&cfg.uploads_dir).await {
        tracing::warn!(error = ?e, dir = %cfg.uploads_dir, "Failed to create uploads dir");
    }

    let folder_repo = Arc::new(
        docspace::infrastructure::db::repositories::folder_repository_sqlx::SqlxFolderRepository::new(
            pool.clone(),
        ),
    );
    let document_repo = Arc::new(
        docspace::infrastructure::db::repositories::document_repository_sqlx::SqlxDocumentRepository::new(
            pool.clone(),
        ),
    );
    let user_repo = Arc::new(
        docspace::infrastructure::db::repositories::user_repository_sqlx::SqlxUserRepository::new(
            pool.clone(),
        ),
    );
    let storage = Arc::new(docspace::infrastructure::storage::FsStorage::new(
        &cfg.uploads_dir,
    ));

    let services = AppServices::new(folder_repo, document_repo, user_repo, storage);
    let ctx = AppContext::new(cfg.clone(), services);

    // Build CORS
    let cors = if let Some(origin) = cfg.frontend_url.clone() {
        match HeaderValue::from_str(&origin) {
            Ok(v) => CorsLayer::new()
                .allow_origin(v)
                .allow_methods([
                    http::Method::GET,
                    http::Method::POST,
                    http::Method::PATCH,
                    http::Method::DELETE,
                    http::Method::OPTIONS,
                ])
                .allow_headers([http::header::CONTENT_TYPE, http::header::AUTHORIZATION])
                .allow_credentials(true),
            Err(_) => CorsLayer::new()
                .allow_origin(AllowOrigin::mirror_request())
                .allow_methods([
                    http::Method::GET,
                    http::Method::POST,
                    http::Method::PATCH,
                    http::Method::DELETE,
                    http::Method::OPTIONS,
                ])
                .allow_headers([http::header::CONTENT_TYPE, http::header::AUTHORIZATION])
                .allow_credentials(true),
        }
    } else {
        // Development convenience
        CorsLayer::new()
            .allow_origin(AllowOrigin::mirror_request())
            .allow_methods([
                http::Method::GET,
                http::Method::POST,
                http::Method::PATCH,
                http::Method::DELETE,
                http::Method::OPTIONS,
            ])
            .allow_headers([http::header::CONTENT_TYPE, http::header::AUTHORIZATION])
            .allow_credentials(true)
    };

    // Build API router
    let app = Router::new()
        .nest(
            "/api",
            docspace::presentation::http::health::routes(pool.clone()),
        )
        .nest(
            "/api/auth",
            docspace::presentation::http::auth::routes(ctx.clone()),
        )
        .nest(
            "/api",
            docspace::presentation::http::browse::routes(ctx.clone()),
        )
        .nest(
            "/api",
            docspace::presentation::http::folders::routes(ctx.clone()),
        )
        .nest(
            "/api",
            docspace::presentation::http::documents::routes(ctx.clone()),
        )
        .merge(SwaggerUi::new("/api/docs").url("/api/openapi.json", ApiDoc::openapi()))
        .layer(cors)
        // Global body size limit for uploads (configurable)
        .layer(DefaultBodyLimit::max(cfg.upload_max_bytes))
        .layer(
            TraceLayer::new_for_http().make_span_with(|req: &http::Request<_>| {
                let method = req.method().clone();
                let uri = req.uri().clone();
                let matched = req
                    .extensions()
                    .get::<MatchedPath>()
                    .map(|p| p.as_str().to_string())
                    .unwrap_or_default();
                tracing::info_span!("http", %method, %uri, matched_path = %matched)
            }),
        );

    let api_addr = SocketAddr::from(([0, 0, 0, 0], cfg.api_port));
    info!(%api_addr, "HTTP API listening");
    let listener = tokio::net::TcpListener::bind(api_addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
