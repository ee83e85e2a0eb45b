use crate::models::MenuItem;

/// Effective calorie total of an item.
///
/// A present `calories` field wins, even when zero. Otherwise the ingredient
/// calories are summed; an empty list yields 0. Negative inputs pass through.
pub fn effective_calories(item: &MenuItem) -> i64 {
    match item.calories {
        Some(calories) => calories,
        None => item.ingredients.iter().map(|ing| ing.calories).sum(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Ingredient;

    fn dosa() -> MenuItem {
        MenuItem::new("1", "Plain Dosa", "₹60").with_ingredients(vec![
            Ingredient::new("Batter", "120g", 210),
            Ingredient::new("Oil", "10ml", 120),
            Ingredient::new("Chutney", "40g", 90),
            Ingredient::new("Curry Leaves", "2g", 0),
        ])
    }

    #[test]
    fn test_sum_of_ingredients() {
        assert_eq!(effective_calories(&dosa()), 420);
    }

    #[test]
    fn test_explicit_zero_overrides_sum() {
        let item = dosa().with_calories(0);
        assert_eq!(effective_calories(&item), 0);
    }

    #[test]
    fn test_no_ingredients_is_zero() {
        let item = MenuItem::new("2", "Water", "$0");
        assert_eq!(effective_calories(&item), 0);
    }

    #[test]
    fn test_negative_values_pass_through() {
        let item = MenuItem::new("3", "Odd", "$1").with_ingredients(vec![
            Ingredient::new("A", "1g", 50),
            Ingredient::new("B", "1g", -80),
        ]);
        assert_eq!(effective_calories(&item), -30);
    }
}
