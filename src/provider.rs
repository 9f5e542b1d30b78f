use crate::config::FinderConfig;
use crate::meal::MealSearchResponse;
use crate::model::Recipe;
use crate::normalizer::normalize_all;
use crate::FinderError;
use async_trait::async_trait;
use log::{debug, error};
use reqwest::Client;

/// Source of recipes for the controller
#[async_trait]
pub trait RecipeProvider: Send + Sync {
    /// Get the provider name (e.g., "themealdb")
    fn provider_name(&self) -> &str;

    /// Search for recipes matching `query`.
    ///
    /// Never fails: when the provider has a problem the failure is logged and
    /// the result is empty, the same as when nothing matched.
    async fn fetch_recipes(&self, query: &str) -> Vec<Recipe>;
}

/// Client for TheMealDB `search.php` endpoint
pub struct MealDbProvider {
    client: Client,
    base_url: String,
    default_query: String,
}

impl MealDbProvider {
    /// Create a provider from configuration
    pub fn new(config: &FinderConfig) -> Result<Self, FinderError> {
        let client = Client::builder()
            .user_agent(concat!("recipe-finder/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(MealDbProvider {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            default_query: config.default_query.clone(),
        })
    }

    #[doc(hidden)]
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let defaults = FinderConfig::default();
        MealDbProvider {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            default_query: defaults.default_query,
        }
    }

    /// The query actually sent: the trimmed text, or the default query when blank
    pub fn effective_query<'a>(&'a self, query: &'a str) -> &'a str {
        let trimmed = query.trim();
        if trimmed.is_empty() {
            &self.default_query
        } else {
            trimmed
        }
    }

    /// Search and report failures.
    ///
    /// `Ok(vec![])` means the service answered and found nothing. `Err` means
    /// the request failed, the status was not a success, or the body was not
    /// the expected JSON.
    pub async fn search(&self, query: &str) -> Result<Vec<Recipe>, FinderError> {
        let query = self.effective_query(query);
        let url = format!("{}/search.php", self.base_url);
        debug!("Searching {} for {:?}", url, query);

        let body = self
            .client
            .get(&url)
            .query(&[("s", query)])
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        let response: MealSearchResponse = serde_json::from_str(&body)?;
        let recipes = match response.meals {
            Some(meals) => normalize_all(&meals),
            None => Vec::new(),
        };
        debug!("Provider returned {} recipes for {:?}", recipes.len(), query);

        Ok(recipes)
    }
}

#[async_trait]
impl RecipeProvider for MealDbProvider {
    fn provider_name(&self) -> &str {
        "themealdb"
    }

    async fn fetch_recipes(&self, query: &str) -> Vec<Recipe> {
        match self.search(query).await {
            Ok(recipes) => recipes,
            Err(e) => {
                error!("API error: {}", e);
                Vec::new()
            }
        }
    }
}
