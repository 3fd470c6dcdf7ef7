use tracing::info;

use crate::models::{Category, Product, Record};
use crate::store::Collection;

static PRODUCTS: &[(&str, i64, i64)] = &[
    ("Indomie Godog", 3500, 10),
    ("Teh Pucuk", 4000, 20),
];

static CATEGORIES: &[(&str, &str)] = &[
    ("Makanan ringan", "Kerupuk dan cemilan"),
    ("Minuman ringan", "Es teh, es kopi, dan es buah"),
];

/// Rows present at process start, numbered from 1 in table order.
pub fn seed_products() -> Collection<Product> {
    let rows = PRODUCTS.iter().zip(1..).map(|(&(name, price, stock), id)| {
        let mut p = Product::new(name, price, stock);
        p.set_id(id);
        p
    });
    let products = Collection::with_records(rows);
    info!(count = products.len(), "Seeded products");
    products
}

pub fn seed_categories() -> Collection<Category> {
    let rows = CATEGORIES.iter().zip(1..).map(|(&(name, description), id)| {
        let mut c = Category::new(name, description);
        c.set_id(id);
        c
    });
    let categories = Collection::with_records(rows);
    info!(count = categories.len(), "Seeded categories");
    categories
}
