//! Search TheMealDB and narrow the results by category, preparation time and text.
//!
//! The pieces, from the wire inwards:
//! [`MealDbProvider`] fetches raw records and normalizes them into [`Recipe`]s,
//! [`RecipeStore`] keeps the latest batch, [`apply_filters`] selects what to
//! show, and a [`View`] shows it. [`Controller`] drives all of them from user
//! events.

pub mod config;
pub mod controller;
pub mod error;
pub mod filter;
pub mod ingredients;
pub mod meal;
pub mod model;
pub mod normalizer;
pub mod provider;
pub mod render;
pub mod store;

pub use config::FinderConfig;
pub use controller::Controller;
pub use error::FinderError;
pub use filter::{apply_filters, CategoryFilter, FilterCriteria};
pub use model::{Recipe, RecipeId};
pub use provider::{MealDbProvider, RecipeProvider};
pub use render::{HtmlView, TextView, View};
pub use store::RecipeStore;

/// Fetch recipes for `query` from TheMealDB using configuration from the environment.
///
/// Provider failures come back as an empty list; only configuration problems are errors.
pub async fn search_recipes(query: &str) -> Result<Vec<Recipe>, FinderError> {
    let config = FinderConfig::load()?;
    let provider = MealDbProvider::new(&config)?;
    Ok(provider.fetch_recipes(query).await)
}
