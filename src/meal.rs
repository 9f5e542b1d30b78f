//! Raw records as TheMealDB sends them.
//!
//! Only the fields the finder reads are named. The numbered
//! `strIngredientN` / `strMeasureN` pairs and anything else the service adds
//! land in [`MealRecord::slots`].

use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;

/// Number of ingredient/measure slot pairs in a record
pub const INGREDIENT_SLOTS: usize = 20;

/// Body of a `search.php` response. `meals` is missing or `null` when nothing matched.
#[derive(Debug, Default, Deserialize)]
pub struct MealSearchResponse {
    #[serde(default)]
    pub meals: Option<Vec<MealRecord>>,
}

/// One dish in the provider's native shape
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MealRecord {
    #[serde(rename = "idMeal", default)]
    pub id: Option<Value>,
    #[serde(rename = "strMeal", default)]
    pub name: Option<String>,
    #[serde(rename = "strCategory", default)]
    pub category: Option<String>,
    #[serde(rename = "strInstructions", default)]
    pub instructions: Option<String>,
    #[serde(rename = "strMealThumb", default)]
    pub thumbnail: Option<String>,
    #[serde(flatten)]
    pub slots: HashMap<String, Value>,
}

impl MealRecord {
    /// The provider's identifier, if it sent a usable one
    pub fn native_id(&self) -> Option<String> {
        match self.id.as_ref()? {
            Value::String(id) if !id.is_empty() => Some(id.clone()),
            Value::Number(n) if n.as_f64() != Some(0.0) => Some(n.to_string()),
            _ => None,
        }
    }

    /// Ingredient name in slot `slot` (1-based), when it is a string
    pub fn ingredient(&self, slot: usize) -> Option<&str> {
        self.slot_text("strIngredient", slot)
    }

    /// Measure in slot `slot` (1-based), when it is a string
    pub fn measure(&self, slot: usize) -> Option<&str> {
        self.slot_text("strMeasure", slot)
    }

    fn slot_text(&self, prefix: &str, slot: usize) -> Option<&str> {
        self.slots
            .get(&format!("{}{}", prefix, slot))
            .and_then(Value::as_str)
    }
}
