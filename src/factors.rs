//! Emission Factor Tables
//!
//! Fixed coefficients converting a physical quantity to kg CO2e.
//! Values are kept exactly as published so totals stay comparable
//! with earlier estimates.

use crate::input::{CarVariant, FoodCategory, HeatingFuel, TransportMode};

/// Weekly inputs are annualised with this.
pub const WEEKS_PER_YEAR: f64 = 52.0;
/// Monthly inputs are annualised with this.
pub const MONTHS_PER_YEAR: f64 = 12.0;

// ============================================================================
// TRANSPORTATION (kg CO2 per km)
// ============================================================================

pub const CAR_KG_PER_KM: f64 = 0.4;
pub const ELECTRIC_CAR_KG_PER_KM: f64 = 0.1;
pub const BUS_KG_PER_KM: f64 = 0.14;
pub const TRAIN_KG_PER_KM: f64 = 0.08;
pub const PLANE_KG_PER_KM: f64 = 0.25;
pub const BIKE_KG_PER_KM: f64 = 0.0;

// ============================================================================
// HOME ENERGY
// ============================================================================

/// kg CO2 per kWh
pub const ELECTRICITY_KG_PER_KWH: f64 = 0.4;
/// kg CO2 per therm
pub const NATURAL_GAS_KG_PER_THERM: f64 = 5.3;
/// kg CO2 per gallon
pub const HEATING_OIL_KG_PER_GALLON: f64 = 10.4;
/// kg CO2 per gallon
pub const PROPANE_KG_PER_GALLON: f64 = 6.2;

// ============================================================================
// WASTE (kg CO2 per kg)
// ============================================================================

pub const LANDFILL_KG_PER_KG: f64 = 3.0;
pub const RECYCLED_KG_PER_KG: f64 = 0.5;
pub const COMPOSTED_KG_PER_KG: f64 = 0.1;

/// Per-km coefficient for a mode of transport.
///
/// Only an electric car variant changes the car coefficient; every other
/// variant uses the standard car factor.
pub fn transport_factor(mode: TransportMode, car_variant: Option<CarVariant>) -> f64 {
    match mode {
        TransportMode::Car => match car_variant {
            Some(CarVariant::Electric) => ELECTRIC_CAR_KG_PER_KM,
            _ => CAR_KG_PER_KM,
        },
        TransportMode::Bus => BUS_KG_PER_KM,
        TransportMode::Train => TRAIN_KG_PER_KM,
        TransportMode::Plane => PLANE_KG_PER_KM,
        TransportMode::Bike => BIKE_KG_PER_KM,
    }
}

pub fn heating_factor(fuel: HeatingFuel) -> f64 {
    match fuel {
        HeatingFuel::Oil => HEATING_OIL_KG_PER_GALLON,
        HeatingFuel::Propane => PROPANE_KG_PER_GALLON,
    }
}

/// kg CO2 per kg of food
pub fn food_factor(category: FoodCategory) -> f64 {
    match category {
        FoodCategory::RedMeat => 60.0,
        FoodCategory::Legumes => 7.0,
        FoodCategory::Poultry => 6.0,
        FoodCategory::Fish => 5.0,
        FoodCategory::Dairy => 6.0,
        FoodCategory::Eggs => 4.5,
        FoodCategory::Grains => 1.5,
        FoodCategory::Vegetables => 2.0,
        FoodCategory::Fruits => 1.5,
        FoodCategory::Processed => 5.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_car_variants() {
        assert_eq!(transport_factor(TransportMode::Car, None), 0.4);
        assert_eq!(transport_factor(TransportMode::Car, Some(CarVariant::Hybrid)), 0.4);
        assert_eq!(transport_factor(TransportMode::Car, Some(CarVariant::Large)), 0.4);
        assert_eq!(transport_factor(TransportMode::Car, Some(CarVariant::Electric)), 0.1);
    }

    #[test]
    fn test_non_car_modes_ignore_variant() {
        let electric = Some(CarVariant::Electric);
        assert_eq!(transport_factor(TransportMode::Bus, electric), 0.14);
        assert_eq!(transport_factor(TransportMode::Train, electric), 0.08);
        assert_eq!(transport_factor(TransportMode::Plane, electric), 0.25);
        assert_eq!(transport_factor(TransportMode::Bike, electric), 0.0);
    }

    #[test]
    fn test_food_factors() {
        let total: f64 = FoodCategory::ALL.iter().map(|c| food_factor(*c)).sum();
        // 60 + 7 + 6 + 5 + 6 + 4.5 + 1.5 + 2 + 1.5 + 5
        assert_eq!(total, 98.5);
        assert_eq!(food_factor(FoodCategory::RedMeat), 60.0);
    }

    #[test]
    fn test_heating_factors() {
        assert_eq!(heating_factor(HeatingFuel::Oil), 10.4);
        assert_eq!(heating_factor(HeatingFuel::Propane), 6.2);
    }
}
