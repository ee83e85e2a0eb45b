use serde::{Deserialize, Serialize};

/// A single ingredient line of a menu item.
///
/// `amount` is a free-form display string with the unit embedded ("120g", "10ml").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    pub name: String,

    #[serde(default)]
    pub amount: String,

    #[serde(default)]
    pub calories: i64,
}

impl Ingredient {
    pub fn new(name: &str, amount: &str, calories: i64) -> Self {
        Self {
            name: name.to_string(),
            amount: amount.to_string(),
            calories,
        }
    }
}

/// A menu entry as supplied by the catalog.
///
/// `price` is opaque display text. `calories`, when present, overrides the
/// ingredient sum.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    pub id: String,

    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default)]
    pub price: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    #[serde(default)]
    pub ingredients: Vec<Ingredient>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calories: Option<i64>,
}

impl MenuItem {
    /// Bare item with only the required fields set.
    pub fn new(id: &str, name: &str, price: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            description: None,
            price: price.to_string(),
            category: None,
            image: None,
            ingredients: Vec::new(),
            calories: None,
        }
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }

    pub fn with_category(mut self, category: &str) -> Self {
        self.category = Some(category.to_string());
        self
    }

    pub fn with_image(mut self, image: &str) -> Self {
        self.image = Some(image.to_string());
        self
    }

    pub fn with_ingredients(mut self, ingredients: Vec<Ingredient>) -> Self {
        self.ingredients = ingredients;
        self
    }

    pub fn with_calories(mut self, calories: i64) -> Self {
        self.calories = Some(calories);
        self
    }

    /// Whether the item carries any ingredient detail to show when expanded.
    pub fn has_ingredients(&self) -> bool {
        !self.ingredients.is_empty()
    }
}
