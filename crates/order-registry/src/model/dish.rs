//! Dish records placed as orders.

use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::model::CuisineType;

/// Ingredient count at which a dish starts counting as elaborate.
pub const ELABORATE_MIN_INGREDIENTS: usize = 5;

/// Preparation time, in minutes, at which a dish starts counting as elaborate.
pub const ELABORATE_MIN_PREP_TIME: u32 = 60;

/// A single dish on order.
///
/// Dishes are immutable once constructed and compared field by field, so two
/// orders for the same menu entry are equal while any difference, down to
/// ingredient order, makes them distinct.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dish {
    name: String,
    ingredients: Vec<String>,
    prep_time: u32,
    price: f64,
    cuisine: CuisineType,
}

impl Dish {
    /// Creates a new Dish instance.
    ///
    /// # Arguments
    /// * `name` - Menu name of the dish
    /// * `ingredients` - Ingredient list, order included in equality
    /// * `prep_time` - Preparation time in minutes
    /// * `price` - Menu price
    /// * `cuisine` - Cuisine the dish belongs to
    pub fn new(
        name: impl Into<String>,
        ingredients: Vec<String>,
        prep_time: u32,
        price: f64,
        cuisine: CuisineType,
    ) -> Self {
        Self {
            name: name.into(),
            ingredients,
            prep_time,
            price,
            cuisine,
        }
    }

    /// Menu name of the dish.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Ingredients in declaration order.
    pub fn ingredients(&self) -> &[String] {
        &self.ingredients
    }

    /// Preparation time in minutes.
    pub fn prep_time(&self) -> u32 {
        self.prep_time
    }

    /// Menu price.
    pub fn price(&self) -> f64 {
        self.price
    }

    /// Cuisine the dish belongs to.
    pub fn cuisine(&self) -> CuisineType {
        self.cuisine
    }

    /// `true` for dishes with at least [`ELABORATE_MIN_INGREDIENTS`]
    /// ingredients and a preparation time of at least
    /// [`ELABORATE_MIN_PREP_TIME`] minutes.
    pub fn is_elaborate(&self) -> bool {
        self.ingredients.len() >= ELABORATE_MIN_INGREDIENTS
            && self.prep_time >= ELABORATE_MIN_PREP_TIME
    }
}

impl Display for Dish {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} [{}] {} min, ${:.2}",
            self.name, self.cuisine, self.prep_time, self.price
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ingredients(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn test_equality_covers_every_field() {
        let base = Dish::new(
            "Pizza",
            ingredients(&["Dough", "Tomato"]),
            30,
            11.0,
            CuisineType::Italian,
        );
        assert_eq!(base, base.clone());

        let renamed = Dish::new(
            "Calzone",
            ingredients(&["Dough", "Tomato"]),
            30,
            11.0,
            CuisineType::Italian,
        );
        assert_ne!(base, renamed);

        let repriced = Dish::new(
            "Pizza",
            ingredients(&["Dough", "Tomato"]),
            30,
            12.0,
            CuisineType::Italian,
        );
        assert_ne!(base, repriced);

        let reordered = Dish::new(
            "Pizza",
            ingredients(&["Tomato", "Dough"]),
            30,
            11.0,
            CuisineType::Italian,
        );
        assert_ne!(base, reordered, "ingredient order participates in equality");
    }

    #[test]
    fn test_elaborate_requires_both_thresholds() {
        let many = ingredients(&["a", "b", "c", "d", "e"]);
        let few = ingredients(&["a", "b", "c", "d"]);

        assert!(Dish::new("Stew", many.clone(), 60, 9.0, CuisineType::Other).is_elaborate());
        assert!(!Dish::new("Stew", many.clone(), 59, 9.0, CuisineType::Other).is_elaborate());
        assert!(!Dish::new("Stew", few, 120, 9.0, CuisineType::Other).is_elaborate());
        assert!(
            Dish::new("Stew", many, ELABORATE_MIN_PREP_TIME, 9.0, CuisineType::Other)
                .is_elaborate(),
            "both thresholds are inclusive"
        );
    }

    #[test]
    fn test_display_shows_name_and_cuisine() {
        let dish = Dish::new("Tacos", ingredients(&["Tortilla"]), 15, 8.75, CuisineType::Mexican);
        let rendered = dish.to_string();
        assert!(rendered.contains("Tacos"));
        assert!(rendered.contains("MEXICAN"));
        assert!(rendered.contains("$8.75"));
    }
}
