use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    Json,
};
use tracing::info;

use super::{parse_payload, RecordId};
use crate::{
    error::{AppError, AppResult},
    models::{Category, MessageResponse},
    AppState,
};

#[utoipa::path(
    get, path = "/categories", tag = "Categories",
    responses((status = 200, description = "All categories in insertion order", body = [Category]))
)]
pub async fn list_categories(
    State(state): State<AppState>,
) -> (StatusCode, Json<Vec<Category>>) {
    let categories = state.categories.read().await.list();
    info!(count = categories.len(), "Listed categories");
    (StatusCode::OK, Json(categories))
}

#[utoipa::path(
    post, path = "/categories", tag = "Categories",
    request_body = Category,
    responses(
        (status = 201, description = "Category created", body = Category),
        (status = 400, description = "Invalid JSON format", body = ErrorBody)
    )
)]
pub async fn create_category(
    State(state): State<AppState>,
    body: Bytes,
) -> AppResult<(StatusCode, Json<Category>)> {
    let payload: Category = parse_payload(&body)?;
    let category = state.categories.write().await.create(payload);

    info!(id = category.id, name = %category.name, "Created category");

    Ok((StatusCode::CREATED, Json(category)))
}

#[utoipa::path(
    get, path = "/categories/{id}", tag = "Categories",
    params(("id" = i64, Path, description = "Category ID")),
    responses(
        (status = 200, description = "Category found", body = Category),
        (status = 400, description = "Invalid ID", body = ErrorBody),
        (status = 404, description = "Category not found", body = ErrorBody)
    )
)]
pub async fn get_category(
    State(state): State<AppState>,
    RecordId(id): RecordId,
) -> AppResult<(StatusCode, Json<Category>)> {
    let category = state.categories.read().await.get(id)?;
    Ok((StatusCode::OK, Json(category)))
}

#[utoipa::path(
    put, path = "/categories/{id}", tag = "Categories",
    params(("id" = i64, Path, description = "Category ID")),
    request_body = Category,
    responses(
        (status = 200, description = "Category updated", body = Category),
        (status = 400, description = "Invalid ID or JSON format", body = ErrorBody),
        (status = 404, description = "Category not found", body = ErrorBody)
    )
)]
pub async fn update_category(
    State(state): State<AppState>,
    RecordId(id): RecordId,
    body: Bytes,
) -> AppResult<(StatusCode, Json<Category>)> {
    let mut categories = state.categories.write().await;
    categories.get(id)?;
    let payload: Category = parse_payload(&body)?;
    let category = categories.update(id, payload)?;
    drop(categories);

    info!(id, name = %category.name, "Updated category");

    Ok((StatusCode::OK, Json(category)))
}

#[utoipa::path(
    delete, path = "/categories/{id}", tag = "Categories",
    params(("id" = i64, Path, description = "Category ID")),
    responses(
        (status = 200, description = "Category deleted", body = MessageResponse),
        (status = 400, description = "Invalid ID", body = ErrorBody),
        (status = 404, description = "Category not found", body = ErrorBody)
    )
)]
pub async fn delete_category(
    State(state): State<AppState>,
    RecordId(id): RecordId,
) -> AppResult<(StatusCode, Json<MessageResponse>)> {
    let removed = state.categories.write().await.delete(id)?;

    info!(id, name = %removed.name, "Deleted category");

    Ok((
        StatusCode::OK,
        Json(MessageResponse::new("Category deleted successfully")),
    ))
}

/// Bad id (400) and unknown id (404) take precedence over the 405.
pub async fn item_method_not_allowed(
    State(state): State<AppState>,
    RecordId(id): RecordId,
) -> AppError {
    state
        .categories
        .read()
        .await
        .get(id)
        .err()
        .unwrap_or(AppError::MethodNotAllowed)
}
