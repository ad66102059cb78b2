use axum::Router;
use http_common::router::base_routes;
use http_common::trace_layer::{CustomMakeSpan, CustomOnResponse};
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::features;
use crate::utilities::app_state::AppState;

pub fn app(
    cargo_pkg_name: &'static str,
    cargo_pkg_version: &'static str,
    config: &Config,
) -> Router {
    let app_state = AppState::init(config);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(CustomMakeSpan)
        .on_response(CustomOnResponse);

    axum::Router::new()
        .merge(features::get_routes())
        .merge(base_routes(cargo_pkg_name, cargo_pkg_version))
        .with_state(app_state)
        .layer(trace_layer)
}
