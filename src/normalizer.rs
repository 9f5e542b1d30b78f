use crate::ingredients::extract_ingredients;
use crate::meal::MealRecord;
use crate::model::{
    Recipe, RecipeId, DEFAULT_CATEGORY, MISSING_INSTRUCTIONS, PLACEHOLDER_DIFFICULTY,
    PLACEHOLDER_TIME_MINUTES,
};

/// Longest instructions text kept before it is cut and marked with an ellipsis
pub const MAX_INSTRUCTIONS_CHARS: usize = 250;

const ELLIPSIS: &str = "...";

/// Map one provider record into a [`Recipe`].
///
/// `index` is the record's position in its batch and becomes the id when the
/// provider sent none. Missing fields fall back to defaults; this never fails.
pub fn normalize(record: &MealRecord, index: usize) -> Recipe {
    let id = record
        .native_id()
        .map(RecipeId::Native)
        .unwrap_or(RecipeId::Position(index));

    let category = record
        .category
        .as_deref()
        .filter(|c| !c.trim().is_empty())
        .unwrap_or(DEFAULT_CATEGORY)
        .to_string();

    Recipe {
        id,
        name: record.name.clone().unwrap_or_default(),
        category,
        time: PLACEHOLDER_TIME_MINUTES,
        difficulty: PLACEHOLDER_DIFFICULTY.to_string(),
        ingredients: extract_ingredients(record),
        instructions: shorten_instructions(record.instructions.as_deref()),
        image: record.thumbnail.clone().unwrap_or_default(),
    }
}

/// Normalize a whole batch, using each record's position as its fallback id
pub fn normalize_all(records: &[MealRecord]) -> Vec<Recipe> {
    records
        .iter()
        .enumerate()
        .map(|(index, record)| normalize(record, index))
        .collect()
}

fn shorten_instructions(raw: Option<&str>) -> String {
    match raw {
        None | Some("") => MISSING_INSTRUCTIONS.to_string(),
        Some(text) if text.chars().count() > MAX_INSTRUCTIONS_CHARS => {
            let mut short: String = text.chars().take(MAX_INSTRUCTIONS_CHARS).collect();
            short.push_str(ELLIPSIS);
            short
        }
        Some(text) => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: serde_json::Value) -> MealRecord {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_record_without_id_uses_position() {
        let meal = record(json!({
            "strMeal": "Soup",
            "strCategory": "",
            "strInstructions": "",
            "strIngredient1": "Salt",
            "strMeasure1": "1 tsp",
        }));

        let recipe = normalize(&meal, 3);
        assert_eq!(
            recipe,
            Recipe {
                id: RecipeId::Position(3),
                name: "Soup".to_string(),
                category: "Other".to_string(),
                time: 30,
                difficulty: "Medium".to_string(),
                ingredients: vec!["1 tsp Salt".to_string()],
                instructions: "No instructions available.".to_string(),
                image: String::new(),
            }
        );
    }

    #[test]
    fn test_native_fields_are_kept() {
        let meal = record(json!({
            "idMeal": "52874",
            "strMeal": "Beef and Mustard Pie",
            "strCategory": "Beef",
            "strInstructions": "Preheat the oven to 150C/300F/Gas 2.",
            "strMealThumb": "https://www.themealdb.com/images/media/meals/sytuqu1511553755.jpg",
        }));

        let recipe = normalize(&meal, 0);
        assert_eq!(recipe.id, RecipeId::Native("52874".to_string()));
        assert_eq!(recipe.category, "Beef");
        assert_eq!(recipe.instructions, "Preheat the oven to 150C/300F/Gas 2.");
        assert_eq!(
            recipe.image,
            "https://www.themealdb.com/images/media/meals/sytuqu1511553755.jpg"
        );
    }

    #[test]
    fn test_long_instructions_are_cut_to_250_plus_ellipsis() {
        let long = "Stir gently. ".repeat(40);
        let meal = record(json!({"strMeal": "Risotto", "strInstructions": long}));

        let recipe = normalize(&meal, 0);
        assert_eq!(recipe.instructions.chars().count(), 253);
        assert!(recipe.instructions.starts_with(&long[..250]));
        assert!(recipe.instructions.ends_with("..."));
    }

    #[test]
    fn test_instructions_at_limit_are_unchanged() {
        let exact = "x".repeat(250);
        let meal = record(json!({"strInstructions": exact}));
        assert_eq!(normalize(&meal, 0).instructions, exact);
    }

    #[test]
    fn test_truncation_counts_characters_not_bytes() {
        let long = "é".repeat(300);
        let meal = record(json!({"strInstructions": long}));

        let instructions = normalize(&meal, 0).instructions;
        assert_eq!(instructions.chars().count(), 253);
        assert_eq!(instructions, format!("{}...", "é".repeat(250)));
    }

    #[test]
    fn test_missing_instructions_and_category() {
        let meal = record(json!({"strMeal": "Toast", "strCategory": null}));
        let recipe = normalize(&meal, 0);
        assert_eq!(recipe.instructions, "No instructions available.");
        assert_eq!(recipe.category, "Other");
    }

    #[test]
    fn test_normalize_all_assigns_positions() {
        let meals = vec![
            record(json!({"idMeal": "1", "strMeal": "A"})),
            record(json!({"strMeal": "B"})),
            record(json!({"idMeal": "", "strMeal": "C"})),
        ];

        let ids: Vec<RecipeId> = normalize_all(&meals).into_iter().map(|r| r.id).collect();
        assert_eq!(
            ids,
            vec![
                RecipeId::Native("1".to_string()),
                RecipeId::Position(1),
                RecipeId::Position(2),
            ]
        );
    }
}
