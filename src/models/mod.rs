mod category;
mod product;

pub use category::Category;
pub use product::Product;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// What the in-memory store needs to know about an entity.
pub trait Record: Clone + Send + Sync + 'static {
    /// Singular name used in not-found messages ("Product", "Category").
    const LABEL: &'static str;

    fn id(&self) -> i64;

    fn set_id(&mut self, id: i64);

    /// Overwrite every field except `id` with the values from `update`.
    fn apply(&mut self, update: Self);
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    #[schema(example = "Item deleted successfully")]
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    #[schema(example = "OK")]
    pub status: String,
    #[schema(example = "API Running")]
    pub message: String,
}
