//! Home energy emissions
//!
//! Monthly electricity, natural gas and optional fuel heating, × 12.

use crate::factors::{
    heating_factor, ELECTRICITY_KG_PER_KWH, MONTHS_PER_YEAR, NATURAL_GAS_KG_PER_THERM,
};
use crate::input::{EnergyInput, HeatingInput};

/// Annual kg CO2 from heating fuel (0 when the home has none)
pub fn calculate_heating(heating: Option<&HeatingInput>) -> f64 {
    match heating {
        Some(h) => h.monthly_amount_gallons * MONTHS_PER_YEAR * heating_factor(h.fuel),
        None => 0.0,
    }
}

/// Annual kg CO2 from home energy use
pub fn calculate_energy(input: &EnergyInput) -> f64 {
    let electricity = input.monthly_electricity_kwh * MONTHS_PER_YEAR * ELECTRICITY_KG_PER_KWH;
    let natural_gas = input.monthly_natural_gas_therms * MONTHS_PER_YEAR * NATURAL_GAS_KG_PER_THERM;
    let heating = calculate_heating(input.heating.as_ref());

    electricity + natural_gas + heating
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::HeatingFuel;
    use approx::assert_relative_eq;

    #[test]
    fn test_default_household() {
        let input = EnergyInput {
            monthly_electricity_kwh: 300.0,
            monthly_natural_gas_therms: 50.0,
            heating: Some(HeatingInput {
                fuel: HeatingFuel::Oil,
                monthly_amount_gallons: 30.0,
            }),
        };
        // 1440 + 3180 + 3744
        assert_relative_eq!(calculate_energy(&input), 8364.0, epsilon = 1e-9);
    }

    #[test]
    fn test_propane_heating() {
        let heating = HeatingInput {
            fuel: HeatingFuel::Propane,
            monthly_amount_gallons: 10.0,
        };
        // 10 × 12 × 6.2 = 744
        assert_relative_eq!(calculate_heating(Some(&heating)), 744.0, epsilon = 1e-9);
    }

    #[test]
    fn test_absent_heating_contributes_nothing() {
        let input = EnergyInput {
            monthly_electricity_kwh: 300.0,
            monthly_natural_gas_therms: 50.0,
            heating: None,
        };
        assert_eq!(calculate_heating(None), 0.0);
        assert_relative_eq!(calculate_energy(&input), 1440.0 + 3180.0, epsilon = 1e-9);
    }
}
