use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::Record;

/// Item sold at the till. Prices and stock are whole units (rupiah, pieces).
///
/// Missing fields in a request body decode to zero values and any `id` sent
/// by the client is overwritten by the store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct Product {
    #[schema(example = 3)]
    pub id: i64,
    #[schema(example = "Teh botol")]
    pub name: String,
    #[schema(example = 3000)]
    pub price: i64,
    #[schema(example = 100)]
    pub stock: i64,
}

impl Product {
    pub fn new(name: impl Into<String>, price: i64, stock: i64) -> Self {
        Self {
            id: 0,
            name: name.into(),
            price,
            stock,
        }
    }
}

impl Record for Product {
    const LABEL: &'static str = "Product";

    fn id(&self) -> i64 {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = id;
    }

    fn apply(&mut self, update: Self) {
        self.name = update.name;
        self.price = update.price;
        self.stock = update.stock;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_decode_to_zero_values() {
        let p: Product = serde_json::from_str(r#"{"name":"X"}"#).unwrap();
        assert_eq!(p.name, "X");
        assert_eq!(p.price, 0);
        assert_eq!(p.stock, 0);
        assert_eq!(p.id, 0);
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let p: Product =
            serde_json::from_str(r#"{"name":"Kopi","price":5000,"stock":3,"colour":"brown"}"#)
                .unwrap();
        assert_eq!(p, Product::new("Kopi", 5000, 3));
    }

    #[test]
    fn wrong_field_type_is_rejected() {
        assert!(serde_json::from_str::<Product>(r#"{"price":"mahal"}"#).is_err());
        assert!(serde_json::from_str::<Product>(r#"{"stock":1.5}"#).is_err());
    }

    #[test]
    fn apply_keeps_id() {
        let mut p = Product::new("Old", 1, 1);
        p.set_id(7);
        let mut update = Product::new("New", 2, 3);
        update.set_id(99);

        p.apply(update);

        assert_eq!(p.id, 7);
        assert_eq!(p.name, "New");
        assert_eq!((p.price, p.stock), (2, 3));
    }

    #[test]
    fn serializes_with_wire_field_names() {
        let mut p = Product::new("Teh Pucuk", 4000, 20);
        p.set_id(2);
        let json = serde_json::to_value(&p).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "id": 2, "name": "Teh Pucuk", "price": 4000, "stock": 20 })
        );
    }
}
