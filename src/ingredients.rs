use crate::meal::{MealRecord, INGREDIENT_SLOTS};

/// Collect the display lines for a record's numbered ingredient slots.
///
/// Slots are read in order 1..=20. A slot whose ingredient name is missing or
/// blank is skipped; otherwise the line is `"<measure> <name>"`, or just the
/// name when the measure is missing or blank. Both parts are trimmed.
pub fn extract_ingredients(record: &MealRecord) -> Vec<String> {
    (1..=INGREDIENT_SLOTS)
        .filter_map(|slot| {
            let name = non_blank(record.ingredient(slot))?;
            Some(match non_blank(record.measure(slot)) {
                Some(measure) => format!("{} {}", measure, name),
                None => name.to_string(),
            })
        })
        .collect()
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
