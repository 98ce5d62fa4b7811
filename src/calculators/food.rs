//! Diet emissions
//!
//! Σ weekly kg × 52 × per-food factor, over the groups present.

use crate::factors::{food_factor, WEEKS_PER_YEAR};
use crate::input::FoodIntake;

/// Annual kg CO2 from food
pub fn calculate_food(food: &FoodIntake) -> f64 {
    food.iter()
        .map(|(category, kg)| kg * WEEKS_PER_YEAR * food_factor(*category))
        .sum()
}
