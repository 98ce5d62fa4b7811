//! Category calculators
//!
//! Each category is a pure function from its slice of the lifestyle record to
//! annual kg CO2. They are independent of one another and evaluation order
//! does not matter; `compute_breakdown` runs all four and sums them.

pub mod transportation;
pub mod energy;
pub mod food;
pub mod waste;

pub use transportation::calculate_transportation;
pub use energy::{calculate_energy, calculate_heating};
pub use food::calculate_food;
pub use waste::calculate_waste;

use serde::{Deserialize, Serialize};

use crate::input::LifestyleInput;

/// Emission category, in the order the form collects them
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EmissionCategory {
    Transportation,
    Energy,
    Food,
    Waste,
}

impl EmissionCategory {
    pub const ALL: [EmissionCategory; 4] = [
        EmissionCategory::Transportation,
        EmissionCategory::Energy,
        EmissionCategory::Food,
        EmissionCategory::Waste,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            EmissionCategory::Transportation => "Transportation",
            EmissionCategory::Energy => "Home Energy",
            EmissionCategory::Food => "Food",
            EmissionCategory::Waste => "Waste",
        }
    }
}

/// Annual kg CO2 per category
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CategoryBreakdown {
    pub transportation: f64,
    pub energy: f64,
    pub food: f64,
    pub waste: f64,
}

impl CategoryBreakdown {
    /// Unrounded sum of the four categories
    pub fn total(&self) -> f64 {
        self.transportation + self.energy + self.food + self.waste
    }

    pub fn get(&self, category: EmissionCategory) -> f64 {
        match category {
            EmissionCategory::Transportation => self.transportation,
            EmissionCategory::Energy => self.energy,
            EmissionCategory::Food => self.food,
            EmissionCategory::Waste => self.waste,
        }
    }

    /// Percentage share of each category (all zero when the total is zero)
    pub fn shares(&self) -> [(EmissionCategory, f64); 4] {
        let total = self.total();
        EmissionCategory::ALL.map(|category| {
            let share = if total > 0.0 {
                self.get(category) / total * 100.0
            } else {
                0.0
            };
            (category, share)
        })
    }
}

/// Run all four category calculators
pub fn compute_breakdown(input: &LifestyleInput) -> CategoryBreakdown {
    CategoryBreakdown {
        transportation: calculate_transportation(&input.transportation),
        energy: calculate_energy(&input.energy),
        food: calculate_food(&input.food),
        waste: calculate_waste(&input.waste),
    }
}
