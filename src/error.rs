use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tracing::warn;

use crate::models::MessageResponse;

pub type AppResult<T> = Result<T, AppError>;

/// Every failure a request can end in. None of them are retried; the
/// variant maps straight onto the response status and `{"message": ...}` body.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Path segment did not parse as an integer id.
    #[error("Invalid ID")]
    InvalidId,

    /// Request body was not JSON matching the record's field types.
    #[error("Invalid JSON format")]
    InvalidPayload(#[source] serde_json::Error),

    /// No record with the requested id. Holds the record label, e.g. "Product".
    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("Method not allowed")]
    MethodNotAllowed,
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::InvalidId | AppError::InvalidPayload(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            AppError::InvalidPayload(source) => {
                warn!(status = status.as_u16(), error = %source, "Rejected request body")
            }
            other => warn!(status = status.as_u16(), "{}", other),
        }

        (status, Json(MessageResponse::new(self.to_string()))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload_error() -> AppError {
        let err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        AppError::InvalidPayload(err)
    }

    #[test]
    fn client_errors_map_to_400() {
        assert_eq!(AppError::InvalidId.status(), StatusCode::BAD_REQUEST);
        assert_eq!(payload_error().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn not_found_message_names_the_record() {
        let err = AppError::NotFound("Category");
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.to_string(), "Category not found");
    }

    #[test]
    fn payload_error_hides_parser_detail() {
        assert_eq!(payload_error().to_string(), "Invalid JSON format");
    }

    #[tokio::test]
    async fn response_body_is_message_json() {
        let response = AppError::MethodNotAllowed.into_response();
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json, serde_json::json!({ "message": "Method not allowed" }));
    }
}
