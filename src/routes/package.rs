//! Travel-package routes.

use crate::handlers::package::{create, delete as delete_handler, list, read, update};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn package_routes(state: AppState) -> Router {
    Router::new()
        .route("/packages", get(list).post(create))
        .route(
            "/packages/:id",
            get(read).patch(update).delete(delete_handler),
        )
        .with_state(state)
}
