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
    models::{MessageResponse, Product},
    AppState,
};

// Mounted under `/api/products` (cashier) or `/api/produk`; the docs describe
// the cashier paths.

// ── List ──────────────────────────────────────────────────────────────────────

#[utoipa::path(
    get, path = "/api/products", tag = "Products",
    responses((status = 200, description = "All products in insertion order", body = [Product]))
)]
pub async fn list_products(State(state): State<AppState>) -> (StatusCode, Json<Vec<Product>>) {
    let products = state.products.read().await.list();
    info!(count = products.len(), "Listed products");
    (StatusCode::OK, Json(products))
}

// ── Create ────────────────────────────────────────────────────────────────────

#[utoipa::path(
    post, path = "/api/products", tag = "Products",
    request_body = Product,
    responses(
        (status = 201, description = "Product created", body = Product),
        (status = 400, description = "Invalid JSON format", body = ErrorBody)
    )
)]
pub async fn create_product(
    State(state): State<AppState>,
    body: Bytes,
) -> AppResult<(StatusCode, Json<Product>)> {
    let payload: Product = parse_payload(&body)?;
    let product = state.products.write().await.create(payload);

    info!(id = product.id, name = %product.name, "Created product");

    Ok((StatusCode::CREATED, Json(product)))
}

// ── Get by ID ─────────────────────────────────────────────────────────────────

#[utoipa::path(
    get, path = "/api/products/{id}", tag = "Products",
    params(("id" = i64, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Product found", body = Product),
        (status = 400, description = "Invalid ID", body = ErrorBody),
        (status = 404, description = "Product not found", body = ErrorBody)
    )
)]
pub async fn get_product(
    State(state): State<AppState>,
    RecordId(id): RecordId,
) -> AppResult<(StatusCode, Json<Product>)> {
    let product = state.products.read().await.get(id)?;
    Ok((StatusCode::OK, Json(product)))
}

// ── Update ────────────────────────────────────────────────────────────────────

#[utoipa::path(
    put, path = "/api/products/{id}", tag = "Products",
    params(("id" = i64, Path, description = "Product ID")),
    request_body = Product,
    responses(
        (status = 200, description = "Product updated", body = Product),
        (status = 400, description = "Invalid ID or JSON format", body = ErrorBody),
        (status = 404, description = "Product not found", body = ErrorBody)
    )
)]
pub async fn update_product(
    State(state): State<AppState>,
    RecordId(id): RecordId,
    body: Bytes,
) -> AppResult<(StatusCode, Json<Product>)> {
    // Existence is checked before the body so an unknown id wins over bad JSON.
    let mut products = state.products.write().await;
    products.get(id)?;
    let payload: Product = parse_payload(&body)?;
    let product = products.update(id, payload)?;
    drop(products);

    info!(id, name = %product.name, "Updated product");

    Ok((StatusCode::OK, Json(product)))
}

// ── Delete ────────────────────────────────────────────────────────────────────

#[utoipa::path(
    delete, path = "/api/products/{id}", tag = "Products",
    params(("id" = i64, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Product deleted", body = MessageResponse),
        (status = 400, description = "Invalid ID", body = ErrorBody),
        (status = 404, description = "Product not found", body = ErrorBody)
    )
)]
pub async fn delete_product(
    State(state): State<AppState>,
    RecordId(id): RecordId,
) -> AppResult<(StatusCode, Json<MessageResponse>)> {
    let removed = state.products.write().await.delete(id)?;

    info!(id, name = %removed.name, "Deleted product");

    Ok((
        StatusCode::OK,
        Json(MessageResponse::new("Product deleted successfully")),
    ))
}

/// Method fallback for item routes. The id is parsed and looked up first, so
/// a bad or unknown id is reported before the unsupported verb.
pub async fn item_method_not_allowed(
    State(state): State<AppState>,
    RecordId(id): RecordId,
) -> AppError {
    state
        .products
        .read()
        .await
        .get(id)
        .err()
        .unwrap_or(AppError::MethodNotAllowed)
}
