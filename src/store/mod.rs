use indexmap::IndexMap;

use crate::error::{AppError, AppResult};
use crate::models::Record;

/// Ordered, id-addressed collection of records.
///
/// `IndexMap` keeps insertion order for listing while giving O(1) lookup by
/// id; deletes use `shift_remove` so the remaining records keep their order.
/// Ids come from a counter that only moves forward, so an id is never handed
/// out twice even after deletions.
#[derive(Debug, Clone)]
pub struct Collection<T: Record> {
    records: IndexMap<i64, T>,
    next_id: i64,
}

impl<T: Record> Default for Collection<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Record> Collection<T> {
    pub fn new() -> Self {
        Self {
            records: IndexMap::new(),
            next_id: 1,
        }
    }

    /// Build a collection from rows that already carry their ids. The counter
    /// starts after the highest seeded id. A later row with a duplicate id
    /// replaces the earlier one.
    pub fn with_records(rows: impl IntoIterator<Item = T>) -> Self {
        let mut collection = Self::new();
        for row in rows {
            let id = row.id();
            collection.next_id = collection.next_id.max(id.saturating_add(1));
            collection.records.insert(id, row);
        }
        collection
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn contains(&self, id: i64) -> bool {
        self.records.contains_key(&id)
    }

    /// All records in insertion order.
    pub fn list(&self) -> Vec<T> {
        self.records.values().cloned().collect()
    }

    /// Stamp the next id onto `record`, append it, and return the stored copy.
    pub fn create(&mut self, mut record: T) -> T {
        let id = self.next_id;
        self.next_id += 1;
        record.set_id(id);
        self.records.insert(id, record.clone());
        record
    }

    pub fn get(&self, id: i64) -> AppResult<T> {
        self.records
            .get(&id)
            .cloned()
            .ok_or(AppError::NotFound(T::LABEL))
    }

    /// Overwrite every field but the id of the record with `id`.
    pub fn update(&mut self, id: i64, payload: T) -> AppResult<T> {
        let record = self
            .records
            .get_mut(&id)
            .ok_or(AppError::NotFound(T::LABEL))?;
        record.apply(payload);
        Ok(record.clone())
    }

    /// Remove the record with `id`, shifting later records down. Returns the
    /// removed record.
    pub fn delete(&mut self, id: i64) -> AppResult<T> {
        self.records
            .shift_remove(&id)
            .ok_or(AppError::NotFound(T::LABEL))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Product};

    fn seeded() -> Collection<Product> {
        let mut a = Product::new("Indomie Godog", 3500, 10);
        a.set_id(1);
        let mut b = Product::new("Teh Pucuk", 4000, 20);
        b.set_id(2);
        Collection::with_records([a, b])
    }

    fn names(c: &Collection<Product>) -> Vec<String> {
        c.list().into_iter().map(|p| p.name).collect()
    }

    // ── Create / list ──────────────────────────────────────────────────────────

    #[test]
    fn list_after_creates_keeps_creation_order() {
        let mut c = seeded();
        for name in ["Zebra", "Alpha", "Mango"] {
            c.create(Product::new(name, 1, 1));
        }
        assert_eq!(c.len(), 5);
        assert_eq!(
            names(&c),
            vec!["Indomie Godog", "Teh Pucuk", "Zebra", "Alpha", "Mango"]
        );
    }

    #[test]
    fn create_ignores_client_supplied_id() {
        let mut c = seeded();
        let mut p = Product::new("Kopi", 5000, 3);
        p.set_id(1);
        let created = c.create(p);
        assert_eq!(created.id, 3);
        assert_eq!(c.get(1).unwrap().name, "Indomie Godog");
    }

    #[test]
    fn empty_collection_starts_at_one() {
        let mut c: Collection<Category> = Collection::new();
        assert!(c.is_empty());
        assert_eq!(c.create(Category::new("Soda", "Minuman Soda")).id, 1);
    }

    #[test]
    fn counter_starts_after_highest_seed_id() {
        let mut p = Product::new("Sparse", 1, 1);
        p.set_id(10);
        let mut c = Collection::with_records([p]);
        assert_eq!(c.create(Product::new("Next", 1, 1)).id, 11);
    }

    // ── Lookup / update ────────────────────────────────────────────────────────

    #[test]
    fn get_missing_id_is_not_found() {
        let c = seeded();
        let err = c.get(999).unwrap_err();
        assert!(matches!(err, AppError::NotFound("Product")));
    }

    #[test]
    fn update_preserves_id_and_position() {
        let mut c = seeded();
        let mut payload = Product::new("Y", 1, 1);
        payload.set_id(42);

        let updated = c.update(1, payload).unwrap();

        assert_eq!(updated.id, 1);
        assert_eq!(updated.name, "Y");
        assert_eq!(names(&c), vec!["Y", "Teh Pucuk"]);
        assert!(!c.contains(42));
    }

    #[test]
    fn update_missing_id_leaves_collection_untouched() {
        let mut c = seeded();
        assert!(c.update(7, Product::new("Ghost", 0, 0)).is_err());
        assert_eq!(names(&c), vec!["Indomie Godog", "Teh Pucuk"]);
    }

    // ── Delete ─────────────────────────────────────────────────────────────────

    #[test]
    fn delete_shrinks_by_one_and_keeps_order() {
        let mut c = seeded();
        c.create(Product::new("Kopi", 5000, 3));

        let removed = c.delete(1).unwrap();

        assert_eq!(removed.name, "Indomie Godog");
        assert_eq!(c.len(), 2);
        assert_eq!(names(&c), vec!["Teh Pucuk", "Kopi"]);
        assert!(c.get(1).is_err());
    }

    #[test]
    fn delete_missing_id_is_not_found() {
        let mut c = seeded();
        assert!(matches!(c.delete(3), Err(AppError::NotFound(_))));
        assert_eq!(c.len(), 2);
    }

    #[test]
    fn ids_are_not_reused_after_delete() {
        let mut c = seeded();
        c.delete(1).unwrap();
        let created = c.create(Product::new("Fresh", 1, 1));
        // length + 1 would have produced 2, which is still taken
        assert_eq!(created.id, 3);
        assert_eq!(c.get(2).unwrap().name, "Teh Pucuk");
    }
}
