//! JSON error envelope for every endpoint.
//!
//! Client input errors carry their message on the wire. Internal
//! failures get a fixed message; the real error goes to the log only.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use sentio_core::CoreError;
use serde_json::json;

#[derive(Debug)]
pub enum ApiError {
    /// 400 with a human-readable message.
    BadRequest(String),
    /// 500 with a generic body; details are logged, never leaked.
    Internal,
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}

impl ApiError {
    /// Log an internal failure and return the opaque 500 variant.
    pub fn internal(err: anyhow::Error) -> Self {
        tracing::error!(error = %err, "Internal error while handling request");
        ApiError::Internal
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(message) => (StatusCode::BAD_REQUEST, message),
            ApiError::Internal => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "An internal error occurred".to_string(),
            ),
        };
        (status, Json(json!({ "error": message }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bad_request_keeps_message() {
        let response = ApiError::from(CoreError::EmptyText).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_internal_is_opaque() {
        let response = ApiError::internal(anyhow::anyhow!("secret detail")).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
