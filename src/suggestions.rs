//! Reduction Suggestions
//!
//! Independent threshold checks, each contributing at most one block of
//! static tips. Blocks keep the order the checks run in:
//!
//! 1. Transportation: car without the "I drive" toggle, else > 100 km/week
//! 2. Home Energy: > 300 kWh/month
//! 3. Diet: red meat + legumes + poultry > 5 kg/week
//! 4. Waste Management: landfill exceeds recycled + composted
//! 5. General: only when fewer than two blocks fired

use serde::{Deserialize, Serialize};

use crate::input::{FoodCategory, LifestyleInput, TransportMode};

pub const HIGH_DISTANCE_KM_PER_WEEK: f64 = 100.0;
pub const HIGH_ELECTRICITY_KWH_PER_MONTH: f64 = 300.0;
pub const HIGH_DIET_KG_PER_WEEK: f64 = 5.0;
/// Below this many blocks the General block is appended
pub const MIN_SPECIFIC_BLOCKS: usize = 2;

const VEHICLE_TIPS: &[&str] = &[
    "Switch to an electric or hybrid vehicle to reduce emissions",
    "Consider carpooling or using public transportation when possible",
    "Combine errands to reduce the number of trips",
];

const DISTANCE_TIPS: &[&str] = &[
    "Consider working from home a few days a week if possible",
    "Look for closer options for regular activities",
    "Use video conferencing instead of traveling for meetings",
];

const ENERGY_TIPS: &[&str] = &[
    "Switch to LED bulbs throughout your home",
    "Unplug electronics when not in use to reduce phantom energy usage",
    "Consider installing a programmable thermostat",
    "Look into renewable energy options for your home",
];

const DIET_TIPS: &[&str] = &[
    "Try having one or more meatless days per week",
    "Reduce red meat consumption and opt for poultry or fish instead",
    "Buy locally-produced food to reduce transportation emissions",
    "Reduce food waste by planning meals and using leftovers",
];

const WASTE_TIPS: &[&str] = &[
    "Increase recycling efforts for paper, plastic, glass, and metal",
    "Start composting food scraps and yard waste",
    "Reduce use of single-use plastics and disposable items",
    "Choose products with minimal or recyclable packaging",
];

const GENERAL_TIPS: &[&str] = &[
    "Use reusable bags, bottles, and containers",
    "Support sustainable businesses and products",
    "Educate yourself and others about climate change",
    "Consider carbon offsets for unavoidable emissions",
];

/// Named group of advice tied to one input category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestionBlock {
    pub category: String,
    pub tips: Vec<String>,
}

impl SuggestionBlock {
    fn new(category: &str, tips: &[&str]) -> Self {
        Self {
            category: category.to_string(),
            tips: tips.iter().map(|t| t.to_string()).collect(),
        }
    }
}

fn transportation_block(input: &LifestyleInput) -> Option<SuggestionBlock> {
    let t = &input.transportation;
    if t.mode == TransportMode::Car && !t.is_car {
        Some(SuggestionBlock::new("Transportation", VEHICLE_TIPS))
    } else if t.weekly_distance_km > HIGH_DISTANCE_KM_PER_WEEK {
        Some(SuggestionBlock::new("Transportation", DISTANCE_TIPS))
    } else {
        None
    }
}

fn energy_block(input: &LifestyleInput) -> Option<SuggestionBlock> {
    (input.energy.monthly_electricity_kwh > HIGH_ELECTRICITY_KWH_PER_MONTH)
        .then(|| SuggestionBlock::new("Home Energy", ENERGY_TIPS))
}

fn diet_block(input: &LifestyleInput) -> Option<SuggestionBlock> {
    let heavy = input.food_kg(FoodCategory::RedMeat)
        + input.food_kg(FoodCategory::Legumes)
        + input.food_kg(FoodCategory::Poultry);
    (heavy > HIGH_DIET_KG_PER_WEEK).then(|| SuggestionBlock::new("Diet", DIET_TIPS))
}

fn waste_block(input: &LifestyleInput) -> Option<SuggestionBlock> {
    let w = &input.waste;
    (w.weekly_landfill_kg > w.weekly_recycled_kg + w.weekly_composted_kg)
        .then(|| SuggestionBlock::new("Waste Management", WASTE_TIPS))
}

/// Select advice blocks for a lifestyle record.
///
/// Tips depend only on the inputs; the total is accepted so callers pass
/// what they display, and is only logged.
pub fn select_suggestions(
    input: &LifestyleInput,
    total_annual_kg_co2: f64,
) -> Vec<SuggestionBlock> {
    let mut suggestions: Vec<SuggestionBlock> = [
        transportation_block(input),
        energy_block(input),
        diet_block(input),
        waste_block(input),
    ]
    .into_iter()
    .flatten()
    .collect();

    if suggestions.len() < MIN_SPECIFIC_BLOCKS {
        suggestions.push(SuggestionBlock::new("General", GENERAL_TIPS));
    }

    tracing::debug!(
        "Selected {} suggestion blocks for total {:.1} kg CO2",
        suggestions.len(),
        total_annual_kg_co2
    );

    suggestions
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::LifestyleInput;

    fn categories(blocks: &[SuggestionBlock]) -> Vec<&str> {
        blocks.iter().map(|b| b.category.as_str()).collect()
    }

    /// Record that triggers nothing specific
    fn quiet_input() -> LifestyleInput {
        let mut input = LifestyleInput::default();
        input.food.clear();
        input.waste.weekly_landfill_kg = 1.0;
        input
    }

    #[test]
    fn test_default_record() {
        let blocks = select_suggestions(&LifestyleInput::default(), 22_752.4);
        // redMeat 2 + legumes 2 + poultry 3 = 7 > 5; landfill 8 > 7
        assert_eq!(categories(&blocks), vec!["Diet", "Waste Management"]);
    }

    #[test]
    fn test_fallback_when_nothing_fires() {
        let blocks = select_suggestions(&quiet_input(), 0.0);
        assert_eq!(categories(&blocks), vec!["General"]);
        assert_eq!(blocks[0].tips.len(), 4);
    }

    #[test]
    fn test_fallback_follows_single_block() {
        let mut input = quiet_input();
        input.energy.monthly_electricity_kwh = 301.0;
        let blocks = select_suggestions(&input, 0.0);
        assert_eq!(categories(&blocks), vec!["Home Energy", "General"]);
    }

    #[test]
    fn test_electricity_threshold_is_strict() {
        let input = quiet_input();
        assert_eq!(input.energy.monthly_electricity_kwh, 300.0);
        assert!(energy_block(&input).is_none());
    }

    #[test]
    fn test_car_without_toggle_beats_distance() {
        let mut input = quiet_input();
        input.transportation.is_car = false;
        input.transportation.weekly_distance_km = 500.0;
        let block = transportation_block(&input).unwrap();
        assert_eq!(block.tips[0], VEHICLE_TIPS[0]);
    }

    #[test]
    fn test_high_distance_tips() {
        let mut input = quiet_input();
        input.transportation.mode = TransportMode::Train;
        input.transportation.weekly_distance_km = 150.0;
        let block = transportation_block(&input).unwrap();
        assert_eq!(block.tips[0], DISTANCE_TIPS[0]);
    }

    #[test]
    fn test_waste_tie_does_not_fire() {
        let mut input = quiet_input();
        input.waste.weekly_landfill_kg = 7.0;
        input.waste.weekly_recycled_kg = 5.0;
        input.waste.weekly_composted_kg = 2.0;
        assert!(waste_block(&input).is_none());
    }

    #[test]
    fn test_everything_fires_without_general() {
        let mut input = LifestyleInput::default();
        input.transportation.is_car = false;
        input.energy.monthly_electricity_kwh = 450.0;
        let blocks = select_suggestions(&input, 0.0);
        assert_eq!(
            categories(&blocks),
            vec!["Transportation", "Home Energy", "Diet", "Waste Management"]
        );
    }
}
