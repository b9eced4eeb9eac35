use axum::{
    extract::Request,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::db::SqliteRepository;
use crate::likes::RefTables;

#[derive(Clone)]
pub struct AppState {
    pub db: Arc<SqliteRepository>,
    pub reftables: Arc<RefTables>,
}

impl AppState {
    pub fn new(db: Arc<SqliteRepository>, reftables: RefTables) -> Self {
        Self {
            db,
            reftables: Arc::new(reftables),
        }
    }
}

pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/api/sync-likes", post(crate::likes::sync_likes))
        .route("/api/top-genres", get(crate::likes::top_genres))
        .route("/api/top-languages", get(crate::likes::top_languages))
        .route("/api/decade-stats", get(crate::likes::decade_stats));

    let app = Router::new()
        .route("/robots.txt", get(robots_txt_handler))
        .merge(api_routes)
        .fallback(fallback_handler)
        .layer(axum::middleware::from_fn(crate::middleware::log_request))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Path normalization must run before route matching; a layer on the
    // routing router itself would only run after the match, so wrap the
    // whole router as a fallback service instead.
    Router::new()
        .fallback_service(app)
        .layer(axum::middleware::from_fn(crate::middleware::normalize_path))
}

async fn robots_txt_handler() -> &'static str {
    "User-agent: *\nDisallow: /\n"
}

async fn fallback_handler(req: Request<axum::body::Body>) -> impl IntoResponse {
    // CORS preflight for unmatched paths still needs a 200.
    if req.method() == axum::http::Method::OPTIONS {
        return StatusCode::OK.into_response();
    }
    StatusCode::NOT_FOUND.into_response()
}
