use std::net::SocketAddr;

use axum::{
    extract::{ConnectInfo, State},
    response::IntoResponse,
};
use tracing::{info, instrument};

use crate::features::schemas::GreetingResponse;
use crate::utilities::app_state::AppState;

/// `GET /` — the greeting contract. Nothing about the request is consulted.
#[instrument(name = "greeting_handler", skip_all)]
pub async fn greeting_handler(
    State(state): State<AppState>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
) -> impl IntoResponse {
    info!(%addr, "client connected");
    GreetingResponse::new(state.config.greeting)
}
