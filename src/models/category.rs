use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::Record;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct Category {
    #[schema(example = 1)]
    pub id: i64,
    #[schema(example = "Soda")]
    pub name: String,
    #[schema(example = "Minuman Soda")]
    pub description: String,
}

impl Category {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: 0,
            name: name.into(),
            description: description.into(),
        }
    }
}

impl Record for Category {
    const LABEL: &'static str = "Category";

    fn id(&self) -> i64 {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = id;
    }

    fn apply(&mut self, update: Self) {
        self.name = update.name;
        self.description = update.description;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_decodes_to_defaults() {
        let c: Category = serde_json::from_str("{}").unwrap();
        assert_eq!(c, Category::default());
    }

    #[test]
    fn apply_overwrites_name_and_description() {
        let mut c = Category::new("Makanan ringan", "Kerupuk dan cemilan");
        c.set_id(1);
        c.apply(Category::new("Snack", ""));
        assert_eq!(c.id, 1);
        assert_eq!(c.name, "Snack");
        assert_eq!(c.description, "");
    }
}
