//! Plain-text registry report.

use crate::model::CuisineType;
use crate::registry::OrderRegistry;

impl OrderRegistry {
    /// Renders the cuisine tallies plus the two derived figures.
    ///
    /// The layout is stable: one `LABEL: count` line per cuisine in
    /// [`CuisineType::ALL`] order, a blank separator line, the rounded
    /// average preparation time and the elaborate share with exactly two
    /// decimals. Every line ends in a newline, so the result can be written
    /// to stdout or a log sink as-is.
    pub fn format_report(&self) -> String {
        let mut report = String::new();
        for cuisine in CuisineType::ALL {
            report.push_str(&format!(
                "{}: {}\n",
                cuisine,
                self.tally_by_cuisine(cuisine.label())
            ));
        }
        report.push('\n');
        report.push_str(&format!("AVERAGE PREP TIME: {}\n", self.average_prep_time()));
        report.push_str(&format!("ELABORATE: {:.2}%\n", self.elaborate_percentage()));
        report
    }
}

#[cfg(test)]
mod tests {
    use crate::model::{CuisineType, Dish};
    use crate::registry::OrderRegistry;

    fn dish(name: &str, ingredient_count: usize, prep_time: u32, cuisine: CuisineType) -> Dish {
        let ingredients = (0..ingredient_count)
            .map(|n| format!("ingredient {n}"))
            .collect();
        Dish::new(name, ingredients, prep_time, 9.50, cuisine)
    }

    #[test]
    fn test_report_for_empty_registry() {
        let expected = concat!(
            "ITALIAN: 0\n",
            "MEXICAN: 0\n",
            "CHINESE: 0\n",
            "INDIAN: 0\n",
            "AMERICAN: 0\n",
            "FRENCH: 0\n",
            "OTHER: 0\n",
            "\n",
            "AVERAGE PREP TIME: 0\n",
            "ELABORATE: 0.00%\n",
        );
        assert_eq!(OrderRegistry::new().format_report(), expected);
    }

    #[test]
    fn test_report_layout_is_byte_exact() {
        let mut registry = OrderRegistry::new();
        assert!(registry.place_order(dish("Spaghetti", 3, 20, CuisineType::Italian)));
        assert!(registry.place_order(dish("Beef Stew", 5, 90, CuisineType::American)));
        assert!(registry.place_order(dish("Tacos", 3, 15, CuisineType::Mexican)));
        assert!(registry.place_order(dish("Pizza", 3, 30, CuisineType::Italian)));

        let expected = concat!(
            "ITALIAN: 2\n",
            "MEXICAN: 1\n",
            "CHINESE: 0\n",
            "INDIAN: 0\n",
            "AMERICAN: 1\n",
            "FRENCH: 0\n",
            "OTHER: 0\n",
            "\n",
            "AVERAGE PREP TIME: 39\n",
            "ELABORATE: 25.00%\n",
        );
        assert_eq!(registry.format_report(), expected);
    }

    #[test]
    fn test_report_tracks_releases() {
        let mut registry = OrderRegistry::new();
        assert!(registry.place_order(dish("Spaghetti", 3, 20, CuisineType::Italian)));
        assert!(registry.place_order(dish("Tacos", 3, 15, CuisineType::Mexican)));

        registry.release_by_cuisine("ITALIAN");

        let report = registry.format_report();
        assert!(report.contains("ITALIAN: 0\n"));
        assert!(report.contains("MEXICAN: 1\n"));
        assert!(report.contains("AVERAGE PREP TIME: 15\n"));
    }
}
