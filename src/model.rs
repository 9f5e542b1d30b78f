use serde::Serialize;
use std::fmt;

/// Preparation time shown for every recipe. TheMealDB publishes no timing data.
pub const PLACEHOLDER_TIME_MINUTES: u32 = 30;

/// Difficulty shown for every recipe. TheMealDB publishes no difficulty data.
pub const PLACEHOLDER_DIFFICULTY: &str = "Medium";

/// Category used when the provider leaves it blank
pub const DEFAULT_CATEGORY: &str = "Other";

/// Instructions used when the provider has none
pub const MISSING_INSTRUCTIONS: &str = "No instructions available.";

/// Identifier of a recipe: the provider's own id, or the position in the
/// batch it arrived in when the provider did not send one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum RecipeId {
    Native(String),
    Position(usize),
}

impl fmt::Display for RecipeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecipeId::Native(id) => write!(f, "{}", id),
            RecipeId::Position(index) => write!(f, "{}", index),
        }
    }
}

/// A recipe as displayed. Built once by the normalizer and never modified.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recipe {
    pub id: RecipeId,
    pub name: String,
    pub category: String,
    pub time: u32,
    pub difficulty: String,
    pub ingredients: Vec<String>,
    pub instructions: String,
    pub image: String,
}

impl Recipe {
    /// Lowercased name followed by all ingredients, the text free-text search looks in
    pub fn searchable_text(&self) -> String {
        format!("{} {}", self.name, self.ingredients.join(" ")).to_lowercase()
    }
}
