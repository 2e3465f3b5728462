use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;
use tracing::error;

use crate::core::DeriveError;

/// Error taxonomy exposed over HTTP. Client faults get 4xx and a specific
/// message; upstream generation faults get 502; everything else is a 500
/// whose detail stays in the server log.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    Unauthorized(String),
    #[error("{0}")]
    Upstream(String),
    /// Faults that must not leak detail to the client.
    #[allow(dead_code)]
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::Upstream(_) => StatusCode::BAD_GATEWAY,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<DeriveError> for ApiError {
    fn from(err: DeriveError) -> Self {
        match err {
            DeriveError::Client(msg) => Self::BadRequest(msg),
            DeriveError::Backend(msg) => Self::Upstream(msg),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match self {
            Self::Internal(detail) => {
                error!("internal error: {detail}");
                "Internal server error".to_string()
            }
            other => other.to_string(),
        };
        (status, Json(json!({ "success": false, "error": message }))).into_response()
    }
}

pub fn unauthorized() -> ApiError {
    ApiError::Unauthorized(
        "Not authenticated with Google. Please connect your Google account first.".to_string(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derive_errors_map_to_the_right_status() {
        let client: ApiError = DeriveError::client("bad input").into();
        assert_eq!(client.status(), StatusCode::BAD_REQUEST);

        let backend: ApiError = DeriveError::backend("model died").into();
        assert_eq!(backend.status(), StatusCode::BAD_GATEWAY);
    }
}
