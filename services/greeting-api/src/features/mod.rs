pub mod handlers;
pub mod schemas;

use crate::utilities::app_state::AppState;

use axum::{Router, routing::get};

pub fn get_routes() -> Router<AppState> {
    Router::new().route("/", get(handlers::greeting_handler))
}
