use std::sync::Arc;

use anyhow::Context;
use axum::{
    http::{HeaderValue, StatusCode},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::{config::Config, main_lib::AppState};

mod municipalities;
mod status;

pub fn app_router(state: Arc<AppState>, config: &Config) -> anyhow::Result<Router> {
    let api = Router::new()
        .merge(status::router())
        .merge(municipalities::router());

    with_layers(Router::new().nest("/api/v1", api).with_state(state), config)
}

/// CORS, request timeout and tracing around the routes.
fn with_layers(router: Router, config: &Config) -> anyhow::Result<Router> {
    let cors = if config.cors_allow.iter().any(|o| o == "*") {
        CorsLayer::new().allow_origin(Any)
    } else {
        let origins = config
            .cors_allow
            .iter()
            .map(|o| o.parse::<HeaderValue>())
            .collect::<Result<Vec<_>, _>>()
            .context("Invalid KOMMUNESTAT_CORS_ALLOW_ORIGINS")?;
        CorsLayer::new().allow_origin(origins)
    };

    Ok(router
        .layer(cors)
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            config.request_timeout,
        ))
        .layer(TraceLayer::new_for_http()))
}
