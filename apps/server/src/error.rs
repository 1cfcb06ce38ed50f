use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use kommunestat_core::errors::Error as CoreError;
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    Core(#[from] CoreError),
    /// Datasets are loading or failed to load.
    #[error("{0}")]
    Unavailable(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    BadRequest(String),
}

#[derive(Serialize)]
struct ErrorBody {
    code: u16,
    message: String,
}

fn core_status(error: &CoreError) -> StatusCode {
    match error {
        CoreError::NotLoaded(_) | CoreError::Fetch { .. } | CoreError::Parse { .. } => {
            StatusCode::SERVICE_UNAVAILABLE
        }
        CoreError::NotFound { .. } | CoreError::InvalidMunicipality(_) => StatusCode::NOT_FOUND,
        CoreError::SameMunicipality(_) => StatusCode::BAD_REQUEST,
        CoreError::AlreadyLoaded(_) => StatusCode::CONFLICT,
        CoreError::MissingField { .. }
        | CoreError::HttpClient(_)
        | CoreError::DivisionByZero(_)
        | CoreError::InvalidValue(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::Core(e) => core_status(e),
            ApiError::Unavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
        };
        if status.is_server_error() {
            tracing::error!("Request failed: {}", self);
        }
        let body = Json(ErrorBody {
            code: status.as_u16(),
            message: self.to_string(),
        });
        (status, body).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
