use mockito::{Matcher, Server};
use recipe_finder::normalizer::normalize;
use recipe_finder::{
    apply_filters, CategoryFilter, Controller, FilterCriteria, HtmlView, MealDbProvider,
    RecipeProvider,
};

const BATCH_A: &str = r#"{
    "meals": [
        {"idMeal": "52768", "strMeal": "Apple Frangipan Tart", "strCategory": "Dessert",
         "strInstructions": "Preheat the oven to 200C.", "strMealThumb": "https://img/1.jpg",
         "strIngredient1": "digestive biscuits", "strMeasure1": "175g",
         "strIngredient2": "butter", "strMeasure2": "75g"},
        {"idMeal": "52767", "strMeal": "Bakewell tart", "strCategory": "Dessert",
         "strInstructions": "Make the pastry.", "strMealThumb": "https://img/2.jpg",
         "strIngredient1": "plain flour", "strMeasure1": "175g"},
        {"idMeal": "52965", "strMeal": "Breakfast Potatoes", "strCategory": "Breakfast",
         "strInstructions": "Boil the potatoes.", "strMealThumb": "https://img/3.jpg",
         "strIngredient1": "Potatoes", "strMeasure1": "3 Medium"}
    ]
}"#;

const CAKE: &str = r#"{
    "meals": [
        {"idMeal": "52776", "strMeal": "Carrot Cake", "strCategory": "Dessert",
         "strInstructions": "Preheat the oven to 180C.", "strMealThumb": "https://img/4.jpg",
         "strIngredient1": "Carrots", "strMeasure1": "2"}
    ]
}"#;

#[test]
fn test_record_without_id_uses_position() {
    let record = serde_json::from_str(
        r#"{"strMeal":"Soup","strCategory":"","strInstructions":"","strIngredient1":"Salt","strMeasure1":"1 tsp"}"#,
    )
    .unwrap();

    let recipe = normalize(&record, 3);
    let json = serde_json::to_value(&recipe).unwrap();
    assert_eq!(json["id"], 3);
    assert_eq!(json["name"], "Soup");
    assert_eq!(json["category"], "Other");
    assert_eq!(json["time"], 30);
    assert_eq!(json["difficulty"], "Medium");
    assert_eq!(json["ingredients"], serde_json::json!(["1 tsp Salt"]));
    assert_eq!(json["instructions"], "No instructions available.");
}

#[tokio::test]
async fn test_empty_response_shows_no_results() {
    let mut server = Server::new_async().await;
    let _m = server
        .mock("GET", "/search.php")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body("{}")
        .create_async()
        .await;

    let provider = MealDbProvider::with_base_url(server.url());
    assert!(provider.fetch_recipes("xyz").await.is_empty());

    let mut controller = Controller::new(Box::new(provider), HtmlView::new());
    controller.initial_load().await;

    assert!(controller.store().is_empty());
    assert!(controller.view().is_no_results_visible());
    assert!(controller.view().cards().is_empty());
}

#[tokio::test]
async fn test_category_filter_ignores_case() {
    let mut server = Server::new_async().await;
    let _m = server
        .mock("GET", "/search.php")
        .match_query(Matcher::UrlEncoded("s".into(), "a".into()))
        .with_status(200)
        .with_body(BATCH_A)
        .create_async()
        .await;

    let provider = MealDbProvider::with_base_url(server.url());
    let recipes = provider.fetch_recipes("").await;
    let criteria = FilterCriteria {
        category: CategoryFilter::parse("dessert"),
        max_time: None,
        search_text: String::new(),
    };

    let names: Vec<&str> = apply_filters(&recipes, &criteria)
        .into_iter()
        .map(|r| r.name.as_str())
        .collect();
    assert_eq!(names, vec!["Apple Frangipan Tart", "Bakewell tart"]);
}

#[tokio::test]
async fn test_search_text_change_replaces_store() {
    let mut server = Server::new_async().await;
    let initial = server
        .mock("GET", "/search.php")
        .match_query(Matcher::UrlEncoded("s".into(), "a".into()))
        .with_status(200)
        .with_body(BATCH_A)
        .expect(1)
        .create_async()
        .await;
    let cake = server
        .mock("GET", "/search.php")
        .match_query(Matcher::UrlEncoded("s".into(), "cake".into()))
        .with_status(200)
        .with_body(CAKE)
        .expect(1)
        .create_async()
        .await;

    let provider = MealDbProvider::with_base_url(server.url());
    let mut controller = Controller::new(Box::new(provider), HtmlView::new());

    controller.initial_load().await;
    assert_eq!(controller.store().len(), 3);
    assert_eq!(controller.view().cards().len(), 3);

    controller.on_search_text_changed("cake").await;
    assert_eq!(controller.store().len(), 1);
    assert_eq!(controller.store().recipes()[0].name, "Carrot Cake");
    assert_eq!(controller.view().cards().len(), 1);
    assert!(!controller.view().to_html().contains("Bakewell"));

    initial.assert_async().await;
    cake.assert_async().await;
}

#[tokio::test]
async fn test_filter_changes_reuse_the_store() {
    let mut server = Server::new_async().await;
    let search = server
        .mock("GET", "/search.php")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(BATCH_A)
        .expect(1)
        .create_async()
        .await;

    let provider = MealDbProvider::with_base_url(server.url());
    let mut controller = Controller::new(Box::new(provider), HtmlView::new());
    controller.initial_load().await;

    controller.on_category_changed(CategoryFilter::parse("Breakfast"));
    assert_eq!(controller.view().cards().len(), 1);
    assert!(controller.view().cards()[0].contains("Breakfast Potatoes"));

    controller.on_max_time_changed(Some(15));
    assert!(controller.view().is_no_results_visible());

    controller.on_filter_criteria_changed(CategoryFilter::All, Some(30));
    assert_eq!(controller.view().cards().len(), 3);

    search.assert_async().await;
}
