//! Router assembly: common routes at the root, catalog routes under `/api/v1`.

mod common;
mod package;

pub use common::common_routes;
pub use package::package_routes;

use crate::config::AppConfig;
use crate::error::ErrorBody;
use crate::response::error_body;
use crate::state::AppState;
use axum::extract::DefaultBodyLimit;
use axum::http::{StatusCode, Uri};
use axum::{Json, Router};
use tower_http::trace::TraceLayer;

async fn not_found(uri: Uri) -> (StatusCode, Json<ErrorBody>) {
    (
        StatusCode::NOT_FOUND,
        Json(error_body("not_found", format!("no route for {}", uri.path()), None)),
    )
}

/// Full application router.
///
/// The body limit is applied by the body extractors, so an oversized request is rejected
/// through `SnakeJson` with the JSON `payload_too_large` envelope, whether or not it
/// declares a `Content-Length`.
pub fn app_router(state: AppState, config: &AppConfig) -> Router {
    Router::new()
        .merge(common_routes())
        .nest("/api/v1", package_routes(state))
        .fallback(not_found)
        .layer(DefaultBodyLimit::max(config.body_limit_bytes))
        .layer(TraceLayer::new_for_http())
}
