use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use kommunestat_core::errors::Error as CoreError;
use kommunestat_core::statistics::Municipality;
use kommunestat_core::views::{
    self, messages, Comparison, MunicipalityDetails, OverviewRow,
};
use serde::Deserialize;

use super::status::ensure_ready;
use crate::{
    error::{ApiError, ApiResult},
    main_lib::AppState,
};

#[derive(Deserialize)]
struct ComparisonQuery {
    first: String,
    second: String,
}

async fn get_overview(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<OverviewRow>>> {
    ensure_ready(&state)?;
    Ok(Json(views::overview(state.statistics_service.as_ref())?))
}

async fn list_municipalities(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<Municipality>>> {
    ensure_ready(&state)?;
    Ok(Json(state.statistics_service.municipalities()?))
}

async fn get_municipality_details(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<MunicipalityDetails>> {
    ensure_ready(&state)?;
    let details = views::municipality_details(state.statistics_service.as_ref(), id.trim())
        .map_err(|e| match e {
            CoreError::InvalidMunicipality(_) => {
                ApiError::NotFound(messages::NO_MATCH_DETAILS.to_string())
            }
            e => e.into(),
        })?;
    Ok(Json(details))
}

async fn get_comparison(
    Query(query): Query<ComparisonQuery>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Comparison>> {
    ensure_ready(&state)?;
    let comparison = views::compare(
        state.statistics_service.as_ref(),
        query.first.trim(),
        query.second.trim(),
    )
    .map_err(|e| match e {
        CoreError::SameMunicipality(_) => ApiError::BadRequest(messages::SAME_NUMBERS.to_string()),
        CoreError::InvalidMunicipality(_) => {
            ApiError::NotFound(messages::NO_MATCH_COMPARISON.to_string())
        }
        e => e.into(),
    })?;
    Ok(Json(comparison))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/overview", get(get_overview))
        .route("/municipalities", get(list_municipalities))
        .route("/municipalities/{id}", get(get_municipality_details))
        .route("/comparison", get(get_comparison))
}
