//! Response envelope and error mapping for the API

use crate::error::EatsyError;
use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// API response wrapper
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn error(message: String) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message),
        }
    }
}

/// Registry error carried out of a handler
#[derive(Debug)]
pub struct ApiError(pub EatsyError);

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self.0 {
            EatsyError::InvalidRecipe(_) => StatusCode::BAD_REQUEST,
            EatsyError::NotFound(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<EatsyError> for ApiError {
    fn from(err: EatsyError) -> Self {
        Self(err)
    }
}

/// Bodies that do not decode into a recipe record are invalid recipes
impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self(EatsyError::invalid_recipe(rejection.body_text()))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            warn!("Request failed: {}", self.0);
        }
        let body = ApiResponse::<()>::error(self.0.user_message());
        (status, Json(body)).into_response()
    }
}
