use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::repositories::lead_repository::LeadStoreError;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Unknown collection: {0}")]
    UnknownCollection(String),

    #[error("Malformed record: {0}")]
    MalformedRecord(String),

    #[error(transparent)]
    Storage(#[from] LeadStoreError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::UnknownCollection(_) => StatusCode::NOT_FOUND,
            ApiError::MalformedRecord(_) => StatusCode::BAD_REQUEST,
            ApiError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("{}", self);
        } else {
            tracing::warn!("{}", self);
        }
        (status, Json(json!({"error": self.to_string()}))).into_response()
    }
}
