//! Transportation emissions
//!
//! weekly km × 52 × per-km factor of the chosen mode.

use crate::factors::{transport_factor, WEEKS_PER_YEAR};
use crate::input::{TransportMode, TransportationInput};

/// Annual kg CO2 from commuting
pub fn calculate_transportation(input: &TransportationInput) -> f64 {
    if input.mode == TransportMode::Bike {
        return 0.0;
    }
    let factor = transport_factor(input.mode, input.car_variant);
    input.weekly_distance_km * WEEKS_PER_YEAR * factor
}
