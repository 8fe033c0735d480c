use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

/// The two failure kinds the service reports.
///
/// `Validation` maps to 400 with the message as-is. `Internal` maps to 500
/// with a message prefixed by the operation name; the cause is logged, not
/// leaked in detail beyond its display form.
#[derive(Debug)]
pub enum ApiError {
    Validation(String),
    Internal {
        op: &'static str,
        source: anyhow::Error,
    },
}

impl ApiError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn internal(op: &'static str, source: anyhow::Error) -> Self {
        Self::Internal { op, source }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::Validation(message) => {
                log::debug!("Rejected request: {message}");
                (StatusCode::BAD_REQUEST, message)
            }
            Self::Internal { op, source } => {
                log::error!("{op} failed: {source:#}");
                (StatusCode::INTERNAL_SERVER_ERROR, format!("{op} failed: {source}"))
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_maps_to_bad_request() {
        let response = ApiError::validation("Missing text field").into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn internal_maps_to_server_error() {
        let response =
            ApiError::internal("Prediction", anyhow::anyhow!("boom")).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
