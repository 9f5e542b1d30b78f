use crate::model::Recipe;
use log::info;

/// The recipes from the most recent fetch.
///
/// Contents are only ever swapped as a whole; there is no way to add or
/// edit a single recipe.
#[derive(Debug, Default)]
pub struct RecipeStore {
    recipes: Vec<Recipe>,
}

impl RecipeStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Discard the current recipes and keep `recipes` instead
    pub fn replace(&mut self, recipes: Vec<Recipe>) {
        info!(
            "Replacing {} stored recipes with {}",
            self.recipes.len(),
            recipes.len()
        );
        self.recipes = recipes;
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}
