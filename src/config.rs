use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Settings for the recipe finder
#[derive(Debug, Deserialize, Clone)]
pub struct FinderConfig {
    /// Base URL of TheMealDB API, without the trailing `/search.php`
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Query sent when the search text is blank. A single letter returns a broad set.
    #[serde(default = "default_query")]
    pub default_query: String,
    /// Categories offered by the category filter, besides "all"
    #[serde(default = "default_categories")]
    pub categories: Vec<String>,
}

impl Default for FinderConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            default_query: default_query(),
            categories: default_categories(),
        }
    }
}

// Default value functions
fn default_base_url() -> String {
    "https://www.themealdb.com/api/json/v1/1".to_string()
}

fn default_query() -> String {
    "a".to_string()
}

fn default_categories() -> Vec<String> {
    [
        "Beef",
        "Breakfast",
        "Chicken",
        "Dessert",
        "Goat",
        "Lamb",
        "Miscellaneous",
        "Pasta",
        "Pork",
        "Seafood",
        "Side",
        "Starter",
        "Vegan",
        "Vegetarian",
    ]
    .iter()
    .map(|c| c.to_string())
    .collect()
}

impl FinderConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with RECIPE_FINDER__ prefix
    /// 2. recipe-finder.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: RECIPE_FINDER__BASE_URL
    pub fn load() -> Result<Self, ConfigError> {
        load_config()
    }

    /// Case-insensitive lookup in the configured category list.
    /// Returns the configured spelling.
    pub fn find_category(&self, name: &str) -> Option<&str> {
        self.categories
            .iter()
            .find(|c| c.eq_ignore_ascii_case(name.trim()))
            .map(String::as_str)
    }
}

/// Load configuration from file and environment variables
///
/// See [`FinderConfig::load`] for the source priority.
pub fn load_config() -> Result<FinderConfig, ConfigError> {
    let settings = Config::builder()
        // Optional config file (can be missing)
        .add_source(File::with_name("recipe-finder").required(false))
        .add_source(
            Environment::with_prefix("RECIPE_FINDER")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    settings.try_deserialize()
}
