//! Typed lifestyle input
//!
//! Closed enumerations for every category key, so the calculators never see
//! an unknown mode, fuel or food. Construct values directly or convert a
//! `LifestyleForm` (see `form.rs`), which performs the validation.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::error::{check_quantity, EstimateError};

/// Primary mode of transport
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TransportMode {
    Car,
    Bus,
    Train,
    Plane,
    Bike,
}

impl TransportMode {
    pub const ALL: [TransportMode; 5] = [
        TransportMode::Car,
        TransportMode::Bus,
        TransportMode::Train,
        TransportMode::Plane,
        TransportMode::Bike,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            TransportMode::Car => "car",
            TransportMode::Bus => "bus",
            TransportMode::Train => "train",
            TransportMode::Plane => "plane",
            TransportMode::Bike => "bike",
        }
    }
}

impl FromStr for TransportMode {
    type Err = EstimateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TransportMode::ALL
            .into_iter()
            .find(|mode| mode.key() == s)
            .ok_or_else(|| EstimateError::unrecognized("transport mode", s))
    }
}

/// Car size / drivetrain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CarVariant {
    Small,
    Medium,
    Large,
    Hybrid,
    Electric,
}

impl CarVariant {
    pub const ALL: [CarVariant; 5] = [
        CarVariant::Small,
        CarVariant::Medium,
        CarVariant::Large,
        CarVariant::Hybrid,
        CarVariant::Electric,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            CarVariant::Small => "small",
            CarVariant::Medium => "medium",
            CarVariant::Large => "large",
            CarVariant::Hybrid => "hybrid",
            CarVariant::Electric => "electric",
        }
    }
}

impl FromStr for CarVariant {
    type Err = EstimateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CarVariant::ALL
            .into_iter()
            .find(|variant| variant.key() == s)
            .ok_or_else(|| EstimateError::unrecognized("car variant", s))
    }
}

/// Fuel burned for home heating
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum HeatingFuel {
    Oil,
    Propane,
}

impl HeatingFuel {
    pub fn key(&self) -> &'static str {
        match self {
            HeatingFuel::Oil => "oil",
            HeatingFuel::Propane => "propane",
        }
    }
}

impl FromStr for HeatingFuel {
    type Err = EstimateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "oil" => Ok(HeatingFuel::Oil),
            "propane" => Ok(HeatingFuel::Propane),
            _ => Err(EstimateError::unrecognized("heating fuel", s)),
        }
    }
}

/// Food group tracked by the diet step
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FoodCategory {
    RedMeat,
    Legumes,
    Poultry,
    Fish,
    Dairy,
    Eggs,
    Grains,
    Vegetables,
    Fruits,
    Processed,
}

impl FoodCategory {
    pub const ALL: [FoodCategory; 10] = [
        FoodCategory::RedMeat,
        FoodCategory::Legumes,
        FoodCategory::Poultry,
        FoodCategory::Fish,
        FoodCategory::Dairy,
        FoodCategory::Eggs,
        FoodCategory::Grains,
        FoodCategory::Vegetables,
        FoodCategory::Fruits,
        FoodCategory::Processed,
    ];

    /// Canonical camelCase key
    pub fn key(&self) -> &'static str {
        match self {
            FoodCategory::RedMeat => "redMeat",
            FoodCategory::Legumes => "legumes",
            FoodCategory::Poultry => "poultry",
            FoodCategory::Fish => "fish",
            FoodCategory::Dairy => "dairy",
            FoodCategory::Eggs => "eggs",
            FoodCategory::Grains => "grains",
            FoodCategory::Vegetables => "vegetables",
            FoodCategory::Fruits => "fruits",
            FoodCategory::Processed => "processed",
        }
    }
}

impl FromStr for FoodCategory {
    type Err = EstimateError;

    /// Accepts the canonical keys plus the capitalized `RedMeat` / `Legumes`
    /// spellings older forms still submit.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "RedMeat" => return Ok(FoodCategory::RedMeat),
            "Legumes" => return Ok(FoodCategory::Legumes),
            _ => {}
        }
        FoodCategory::ALL
            .into_iter()
            .find(|category| category.key() == s)
            .ok_or_else(|| EstimateError::unrecognized("food", s))
    }
}

impl fmt::Display for FoodCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Transportation step
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransportationInput {
    pub mode: TransportMode,
    pub weekly_distance_km: f64,
    /// "I drive a car" toggle; only consulted by the suggestion selector
    pub is_car: bool,
    pub car_variant: Option<CarVariant>,
}

/// Optional fuel-based heating
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeatingInput {
    pub fuel: HeatingFuel,
    pub monthly_amount_gallons: f64,
}

/// Home energy step
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnergyInput {
    pub monthly_electricity_kwh: f64,
    pub monthly_natural_gas_therms: f64,
    pub heating: Option<HeatingInput>,
}

/// Diet step: weekly kilograms per food group
pub type FoodIntake = BTreeMap<FoodCategory, f64>;

/// Waste step (weekly kilograms)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WasteInput {
    pub weekly_landfill_kg: f64,
    pub weekly_recycled_kg: f64,
    pub weekly_composted_kg: f64,
}

/// Complete lifestyle record consumed by the estimator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LifestyleInput {
    pub transportation: TransportationInput,
    pub energy: EnergyInput,
    pub food: FoodIntake,
    pub waste: WasteInput,
}

impl LifestyleInput {
    /// Weekly kilograms for a food group (0 when absent)
    pub fn food_kg(&self, category: FoodCategory) -> f64 {
        self.food.get(&category).copied().unwrap_or(0.0)
    }

    /// Check every quantity is finite and non-negative
    pub fn validate(&self) -> Result<(), EstimateError> {
        check_quantity(
            "transportation.distance",
            self.transportation.weekly_distance_km,
        )?;

        check_quantity("energy.electricity", self.energy.monthly_electricity_kwh)?;
        check_quantity("energy.naturalGas", self.energy.monthly_natural_gas_therms)?;
        if let Some(heating) = &self.energy.heating {
            check_quantity("energy.heating.amount", heating.monthly_amount_gallons)?;
        }

        for (category, kg) in &self.food {
            check_quantity(&format!("food.{}", category.key()), *kg)?;
        }

        check_quantity("waste.landfill", self.waste.weekly_landfill_kg)?;
        check_quantity("waste.recycled", self.waste.weekly_recycled_kg)?;
        check_quantity("waste.composted", self.waste.weekly_composted_kg)?;

        Ok(())
    }
}

impl Default for LifestyleInput {
    /// The calculator's starting record, also restored by "Start Over"
    fn default() -> Self {
        let food: FoodIntake = [
            (FoodCategory::RedMeat, 2.0),
            (FoodCategory::Legumes, 2.0),
            (FoodCategory::Poultry, 3.0),
            (FoodCategory::Fish, 1.0),
            (FoodCategory::Dairy, 5.0),
            (FoodCategory::Eggs, 1.0),
            (FoodCategory::Grains, 5.0),
            (FoodCategory::Vegetables, 5.0),
            (FoodCategory::Fruits, 4.0),
            (FoodCategory::Processed, 3.0),
        ]
        .into_iter()
        .collect();

        Self {
            transportation: TransportationInput {
                mode: TransportMode::Car,
                weekly_distance_km: 50.0,
                is_car: true,
                car_variant: None,
            },
            energy: EnergyInput {
                monthly_electricity_kwh: 300.0,
                monthly_natural_gas_therms: 50.0,
                heating: Some(HeatingInput {
                    fuel: HeatingFuel::Oil,
                    monthly_amount_gallons: 30.0,
                }),
            },
            food,
            waste: WasteInput {
                weekly_landfill_kg: 8.0,
                weekly_recycled_kg: 5.0,
                weekly_composted_kg: 2.0,
            },
        }
    }
}
