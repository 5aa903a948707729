//! API error responses

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use jsonflow_core::FlowError;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Request text is not valid JSON.
    #[error(transparent)]
    InvalidJson(FlowError),

    /// Submitted records do not form a tree rooted at `$`.
    #[error(transparent)]
    MalformedFlow(FlowError),
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidJson(_) => StatusCode::BAD_REQUEST,
            ApiError::MalformedFlow(_) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::warn!("Request rejected: {}", self);
        let body = ErrorBody {
            error: self.to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}
