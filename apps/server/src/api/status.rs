use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use kommunestat_core::consistency::ConsistencyReport;
use kommunestat_core::dataset::{DatasetStatusEntry, Readiness};
use serde::Serialize;

use crate::{
    error::{ApiError, ApiResult},
    main_lib::AppState,
};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct StatusResponse {
    readiness: Readiness,
    datasets: Vec<DatasetStatusEntry>,
}

/// Fails unless every dataset has loaded.
pub(crate) fn ensure_ready(state: &AppState) -> ApiResult<()> {
    match state.statistics_service.readiness() {
        Readiness::Ready => Ok(()),
        Readiness::Loading { loaded, total } => Err(ApiError::Unavailable(format!(
            "Datasets are still loading ({}/{} done)",
            loaded, total
        ))),
        Readiness::Failed { dataset, reason } => Err(ApiError::Unavailable(format!(
            "Loading the {} dataset failed: {}",
            dataset, reason
        ))),
    }
}

async fn healthz() -> &'static str {
    "ok"
}

async fn get_status(State(state): State<Arc<AppState>>) -> Json<StatusResponse> {
    Json(StatusResponse {
        readiness: state.statistics_service.readiness(),
        datasets: state.statistics_service.dataset_statuses(),
    })
}

async fn get_consistency(State(state): State<Arc<AppState>>) -> ApiResult<Json<ConsistencyReport>> {
    ensure_ready(&state)?;
    Ok(Json(state.statistics_service.check_datasets()?))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/healthz", get(healthz))
        .route("/status", get(get_status))
        .route("/consistency", get(get_consistency))
}
