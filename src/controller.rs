use crate::filter::{apply_filters, CategoryFilter, FilterCriteria};
use crate::model::Recipe;
use crate::provider::RecipeProvider;
use crate::render::View;
use crate::store::RecipeStore;
use log::debug;

/// Connects user input to fetching, filtering and rendering.
///
/// The controller owns the store and is the only thing that changes it.
/// Event methods take `&mut self`, so a fetch always completes and lands in
/// the store before the next event is handled.
pub struct Controller<V: View> {
    provider: Box<dyn RecipeProvider>,
    store: RecipeStore,
    criteria: FilterCriteria,
    view: V,
}

impl<V: View> Controller<V> {
    pub fn new(provider: Box<dyn RecipeProvider>, view: V) -> Self {
        Self {
            provider,
            store: RecipeStore::new(),
            criteria: FilterCriteria::default(),
            view,
        }
    }

    /// First activation: fetch the default set with a blank query, then render
    pub async fn initial_load(&mut self) {
        self.fetch("").await;
        self.refresh();
    }

    /// The search text changed: always fetch again with the new text, then filter and render
    pub async fn on_search_text_changed(&mut self, text: &str) {
        self.criteria.search_text = text.to_string();
        self.fetch(text).await;
        self.refresh();
    }

    /// Category or time changed: filter the recipes already fetched and render
    pub fn on_filter_criteria_changed(&mut self, category: CategoryFilter, max_time: Option<u32>) {
        self.criteria.category = category;
        self.criteria.max_time = max_time;
        self.refresh();
    }

    pub fn on_category_changed(&mut self, category: CategoryFilter) {
        let max_time = self.criteria.max_time;
        self.on_filter_criteria_changed(category, max_time);
    }

    pub fn on_max_time_changed(&mut self, max_time: Option<u32>) {
        let category = self.criteria.category.clone();
        self.on_filter_criteria_changed(category, max_time);
    }

    /// Recipes that pass the current criteria, in store order
    pub fn visible(&self) -> Vec<&Recipe> {
        apply_filters(self.store.recipes(), &self.criteria)
    }

    pub fn store(&self) -> &RecipeStore {
        &self.store
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn into_view(self) -> V {
        self.view
    }

    /// Keep the store and criteria but show them through `view` from now on.
    /// Nothing is rendered until the next event or [`Controller::refresh`].
    pub fn with_view<W: View>(self, view: W) -> Controller<W> {
        Controller {
            provider: self.provider,
            store: self.store,
            criteria: self.criteria,
            view,
        }
    }

    async fn fetch(&mut self, query: &str) {
        debug!(
            "Fetching recipes from {} for {:?}",
            self.provider.provider_name(),
            query
        );
        let recipes = self.provider.fetch_recipes(query).await;
        self.store.replace(recipes);
    }

    /// Filter the stored recipes with the current criteria and render them
    pub fn refresh(&mut self) {
        let visible = apply_filters(self.store.recipes(), &self.criteria);
        debug!("{} of {} recipes visible", visible.len(), self.store.len());
        self.view.render(&visible);
    }
}
