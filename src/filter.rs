//! Narrowing the stored recipes down to what the user asked to see.

use crate::model::Recipe;
use std::fmt;

/// Category selector value. `All` is the wildcard.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Named(String),
}

impl CategoryFilter {
    /// `"all"` in any case, or an empty value, is the wildcard; anything else names a category
    pub fn parse(value: &str) -> Self {
        let value = value.trim();
        if value.is_empty() || value.eq_ignore_ascii_case("all") {
            CategoryFilter::All
        } else {
            CategoryFilter::Named(value.to_string())
        }
    }

    pub fn matches(&self, category: &str) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Named(name) => name.to_lowercase() == category.to_lowercase(),
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryFilter::All => write!(f, "all"),
            CategoryFilter::Named(name) => write!(f, "{}", name),
        }
    }
}

/// What the user currently wants to see. Rebuilt from input state, never stored with recipes.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterCriteria {
    pub search_text: String,
    pub category: CategoryFilter,
    /// Upper bound on preparation minutes; `None` is unbounded
    pub max_time: Option<u32>,
}

impl FilterCriteria {
    /// True when `recipe` passes the category, time and search checks
    pub fn matches(&self, recipe: &Recipe) -> bool {
        self.category.matches(&recipe.category)
            && self.max_time.map_or(true, |max| recipe.time <= max)
            && self.matches_search(recipe)
    }

    fn matches_search(&self, recipe: &Recipe) -> bool {
        let needle = self.search_text.trim().to_lowercase();
        needle.is_empty() || recipe.searchable_text().contains(&needle)
    }
}

/// Select the recipes that match `criteria`, keeping their order
pub fn apply_filters<'a>(recipes: &'a [Recipe], criteria: &FilterCriteria) -> Vec<&'a Recipe> {
    recipes.iter().filter(|r| criteria.matches(r)).collect()
}
