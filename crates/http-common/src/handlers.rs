use std::net::SocketAddr;

use axum::{Json, extract::ConnectInfo, http::StatusCode, response::IntoResponse};
use serde_json::json;
use tracing::{info, instrument};

/// Liveness probe. Also reports which service and version is answering,
/// since `/` belongs to the service's own contract.
#[instrument(name = "health_handler", skip_all)]
pub async fn health_handler(
    cargo_pkg_name: &'static str,
    cargo_pkg_version: &'static str,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
) -> impl IntoResponse {
    info!(%addr, "client connected");
    Json(json!({
        "service": cargo_pkg_name,
        "version": cargo_pkg_version,
        "status": "healthy"
    }))
}

#[instrument(name = "ready_handler", skip_all)]
pub async fn ready_handler(ConnectInfo(addr): ConnectInfo<SocketAddr>) -> impl IntoResponse {
    info!(%addr, "client connected");
    Json(json!({ "status": "ready" }))
}

#[instrument(name = "not_found_handler", skip_all, fields(addr = %addr))]
pub async fn not_found_handler(ConnectInfo(addr): ConnectInfo<SocketAddr>) -> impl IntoResponse {
    info!(%addr, "client connected");
    (StatusCode::NOT_FOUND, Json(json!({ "error": "route not found" })))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn connect_info() -> ConnectInfo<SocketAddr> {
        ConnectInfo(SocketAddr::from(([127, 0, 0, 1], 1337)))
    }

    #[tokio::test]
    async fn health_returns_200() {
        let response = health_handler("svc", "0.1.0", connect_info())
            .await
            .into_response();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn ready_returns_200() {
        let response = ready_handler(connect_info()).await.into_response();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn fallback_returns_404() {
        let response = not_found_handler(connect_info()).await.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
