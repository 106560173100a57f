//! Liveness and build metadata, mounted at the root without state.

use axum::{routing::get, Json, Router};
use serde::Serialize;

#[derive(Serialize)]
struct Health {
    status: &'static str,
}

/// Crate name and version baked in at compile time.
#[derive(Serialize)]
struct BuildInfo {
    name: &'static str,
    version: &'static str,
}

const BUILD_INFO: BuildInfo = BuildInfo {
    name: env!("CARGO_PKG_NAME"),
    version: env!("CARGO_PKG_VERSION"),
};

pub fn common_routes() -> Router {
    Router::new()
        .route("/health", get(|| async { Json(Health { status: "ok" }) }))
        .route("/version", get(|| async { Json(BUILD_INFO) }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_info_names_this_crate() {
        let v = serde_json::to_value(BUILD_INFO).unwrap();
        assert_eq!(v["name"], "case-bridge");
        assert_eq!(v["version"], env!("CARGO_PKG_VERSION"));
    }
}
