use axum::{Router, routing::get};

use crate::handlers::{health_handler, not_found_handler, ready_handler};

/// Probe routes and the fallback every service carries. The root path is
/// left to the service's own feature routes.
pub fn base_routes<S>(cargo_pkg_name: &'static str, cargo_pkg_version: &'static str) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    let name = cargo_pkg_name;
    let version = cargo_pkg_version;

    Router::new()
        .route(
            "/health",
            get(move |connect_info| health_handler(name, version, connect_info)),
        )
        .route("/ready", get(ready_handler))
        .fallback(not_found_handler)
}
