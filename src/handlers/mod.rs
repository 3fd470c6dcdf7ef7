pub mod categories;
pub mod products;

use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::{request::Parts, StatusCode},
    Json,
};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{AppError, AppResult};
use crate::models::HealthResponse;

#[utoipa::path(
    get, path = "/health", tag = "Health",
    responses((status = 200, description = "Service is up", body = HealthResponse))
)]
pub async fn health() -> (StatusCode, Json<HealthResponse>) {
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "OK".to_string(),
            message: "API Running".to_string(),
        }),
    )
}

/// Method fallback for routes that exist but do not serve the verb.
pub async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}

/// Router fallback for paths that match nothing.
pub async fn not_found() -> AppError {
    AppError::NotFound("Resource")
}

/// Parse the `{id}` path segment. Leading `+`/`-` signs are accepted.
pub(crate) fn parse_id(raw: &str) -> AppResult<i64> {
    raw.parse().map_err(|_| AppError::InvalidId)
}

/// Id taken from everything after the collection prefix. A missing segment,
/// a suffix with more slashes, or bytes that are not UTF-8 all end up as
/// `InvalidId`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordId(pub i64);

#[async_trait]
impl<S> FromRequestParts<S> for RecordId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| AppError::InvalidId)?;
        parse_id(&raw).map(RecordId)
    }
}

/// Decode a request body whatever its Content-Type header says.
///
/// Only a JSON object is a record; `null` stands for a record with every
/// field at its zero value. Arrays and scalars are rejected.
pub(crate) fn parse_payload<T: DeserializeOwned + Default>(body: &[u8]) -> AppResult<T> {
    match serde_json::from_slice(body).map_err(AppError::InvalidPayload)? {
        Value::Null => Ok(T::default()),
        value @ Value::Object(_) => serde_json::from_value(value).map_err(AppError::InvalidPayload),
        _ => Err(AppError::InvalidPayload(<serde_json::Error as serde::de::Error>::custom(
            "expected a JSON object",
        ))),
    }
}
