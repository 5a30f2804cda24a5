//! Domain model shared by the registry and its callers.

mod cuisine;
mod dish;

pub use cuisine::{CuisineType, ParseCuisineError};
pub use dish::{Dish, ELABORATE_MIN_INGREDIENTS, ELABORATE_MIN_PREP_TIME};
