//! Waste emissions

use crate::factors::{
    COMPOSTED_KG_PER_KG, LANDFILL_KG_PER_KG, RECYCLED_KG_PER_KG, WEEKS_PER_YEAR,
};
use crate::input::WasteInput;

/// Annual kg CO2 from household waste
pub fn calculate_waste(input: &WasteInput) -> f64 {
    let landfill = input.weekly_landfill_kg * WEEKS_PER_YEAR * LANDFILL_KG_PER_KG;
    let recycled = input.weekly_recycled_kg * WEEKS_PER_YEAR * RECYCLED_KG_PER_KG;
    let composted = input.weekly_composted_kg * WEEKS_PER_YEAR * COMPOSTED_KG_PER_KG;

    landfill + recycled + composted
}
