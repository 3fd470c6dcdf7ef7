use std::sync::Arc;

use axum::{
    routing::{get, MethodRouter},
    Router,
};
use tokio::sync::RwLock;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod openapi;
pub mod seed;
pub mod store;

use crate::config::Variant;
use crate::models::{Category, Product};
use crate::store::Collection;

/// Shared application state — cheap to clone (all heap behind Arc).
#[derive(Clone)]
pub struct AppState {
    pub products: Arc<RwLock<Collection<Product>>>,
    pub categories: Arc<RwLock<Collection<Category>>>,
}

impl AppState {
    pub fn new(products: Collection<Product>, categories: Collection<Category>) -> Self {
        Self {
            products: Arc::new(RwLock::new(products)),
            categories: Arc::new(RwLock::new(categories)),
        }
    }

    /// State holding the fixed startup rows.
    pub fn seeded() -> Self {
        Self::new(seed::seed_products(), seed::seed_categories())
    }
}

fn or_405(route: MethodRouter<AppState>) -> MethodRouter<AppState> {
    route.fallback(handlers::method_not_allowed)
}

pub fn build_router(state: AppState, variant: Variant) -> Router {
    let products = variant.products_path();

    // Item routes take the whole suffix so `1/extra` or an empty id is
    // reported as a bad id, not an unknown path.
    let product_item = get(handlers::products::get_product)
        .put(handlers::products::update_product)
        .delete(handlers::products::delete_product)
        .fallback(handlers::products::item_method_not_allowed);

    let mut router = Router::new()
        // ── Health ──────────────────────────────────────────────────────────
        .route("/health", or_405(get(handlers::health)))

        // ── Products CRUD ───────────────────────────────────────────────────
        .route(
            products,
            or_405(
                get(handlers::products::list_products)
                    .post(handlers::products::create_product),
            ),
        )
        .route(&format!("{}/", products), product_item.clone())
        .route(&format!("{}/*id", products), product_item);

    // ── Categories CRUD ─────────────────────────────────────────────────────
    if variant.serves_categories() {
        let category_item = get(handlers::categories::get_category)
            .put(handlers::categories::update_category)
            .delete(handlers::categories::delete_category)
            .fallback(handlers::categories::item_method_not_allowed);

        router = router
            .route(
                "/categories",
                or_405(
                    get(handlers::categories::list_categories)
                        .post(handlers::categories::create_category),
                ),
            )
            .route("/categories/", category_item.clone())
            .route("/categories/*id", category_item);
    }

    // ── API docs ────────────────────────────────────────────────────────────
    if variant.serves_docs() {
        router = router.merge(
            SwaggerUi::new("/swagger").url("/api-docs/openapi.json", openapi::ApiDoc::openapi()),
        );
    }

    // ── Middleware ──────────────────────────────────────────────────────────
    router
        .fallback(handlers::not_found)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
