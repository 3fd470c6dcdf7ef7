use utoipa::{OpenApi, ToSchema};

use crate::models::{Category, HealthResponse, MessageResponse, Product};

/// Documentation shape of an error reply; the wire type is `MessageResponse`.
#[derive(ToSchema)]
pub struct ErrorBody {
    #[schema(example = "Product not found")]
    pub message: String,
}

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Kasir API",
        version = "1.0",
        description = "API Kasir Toko (In-Memory)"
    ),
    paths(
        crate::handlers::health,
        crate::handlers::products::list_products,
        crate::handlers::products::create_product,
        crate::handlers::products::get_product,
        crate::handlers::products::update_product,
        crate::handlers::products::delete_product,
        crate::handlers::categories::list_categories,
        crate::handlers::categories::create_category,
        crate::handlers::categories::get_category,
        crate::handlers::categories::update_category,
        crate::handlers::categories::delete_category,
    ),
    components(schemas(Product, Category, MessageResponse, ErrorBody, HealthResponse)),
    tags(
        (name = "Products", description = "Product inventory"),
        (name = "Categories", description = "Product categories"),
        (name = "Health")
    )
)]
pub struct ApiDoc;
