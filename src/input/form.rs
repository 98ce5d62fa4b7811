//! Form-state input boundary
//!
//! `LifestyleForm` mirrors the record a multi-step form keeps while the user
//! fills it in: string enums, a string-keyed food map, camelCase JSON names.
//! Converting it into a `LifestyleInput` is where unknown keys and bad
//! quantities are rejected.

use anyhow::{Context, Result};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use super::types::*;
use crate::error::EstimateError;

/// Transportation step as submitted
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransportationForm {
    #[serde(rename = "type")]
    pub mode: String,
    pub distance: f64,
    #[serde(default)]
    pub is_car: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub car_variant: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeatingForm {
    #[serde(rename = "type")]
    pub fuel: String,
    pub amount: f64,
}

/// Energy step as submitted
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnergyForm {
    pub electricity: f64,
    pub natural_gas: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heating: Option<HeatingForm>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WasteForm {
    pub landfill: f64,
    pub recycled: f64,
    pub composted: f64,
}

/// Loosely typed lifestyle record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LifestyleForm {
    pub transportation: TransportationForm,
    pub energy: EnergyForm,
    #[serde(default)]
    pub food: FxHashMap<String, f64>,
    pub waste: WasteForm,
}

impl LifestyleForm {
    /// Load a form from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read lifestyle form: {:?}", path))?;

        let form = Self::from_json_str(&contents)
            .with_context(|| format!("Failed to parse lifestyle form: {:?}", path))?;

        tracing::info!("Loaded lifestyle form from {:?}", path);
        Ok(form)
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Invalid lifestyle form JSON")
    }

    /// Validate and convert into the typed record
    pub fn to_input(&self) -> Result<LifestyleInput, EstimateError> {
        LifestyleInput::try_from(self)
    }
}

impl Default for LifestyleForm {
    fn default() -> Self {
        LifestyleForm::from(&LifestyleInput::default())
    }
}

impl TryFrom<&LifestyleForm> for LifestyleInput {
    type Error = EstimateError;

    fn try_from(form: &LifestyleForm) -> Result<Self, Self::Error> {
        let t = &form.transportation;
        let car_variant = t
            .car_variant
            .as_deref()
            .map(str::parse::<CarVariant>)
            .transpose()?;

        let transportation = TransportationInput {
            mode: t.mode.parse()?,
            weekly_distance_km: t.distance,
            is_car: t.is_car,
            car_variant,
        };

        let heating = form
            .energy
            .heating
            .as_ref()
            .map(|h| -> Result<HeatingInput, EstimateError> {
                Ok(HeatingInput {
                    fuel: h.fuel.parse()?,
                    monthly_amount_gallons: h.amount,
                })
            })
            .transpose()?;

        let energy = EnergyInput {
            monthly_electricity_kwh: form.energy.electricity,
            monthly_natural_gas_therms: form.energy.natural_gas,
            heating,
        };

        // Sorted so the same bad form always reports the same key first
        let mut entries: Vec<(&String, &f64)> = form.food.iter().collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));

        let mut food = FoodIntake::new();
        for (key, kg) in entries {
            let category: FoodCategory = key.parse()?;
            // RedMeat and redMeat land on the same entry
            *food.entry(category).or_insert(0.0) += *kg;
        }

        let waste = WasteInput {
            weekly_landfill_kg: form.waste.landfill,
            weekly_recycled_kg: form.waste.recycled,
            weekly_composted_kg: form.waste.composted,
        };

        // Merged aliases can mask a negative entry
        for (key, kg) in &form.food {
            crate::error::check_quantity(&format!("food.{}", key), *kg)?;
        }

        let input = LifestyleInput {
            transportation,
            energy,
            food,
            waste,
        };
        input.validate()?;

        Ok(input)
    }
}

impl From<&LifestyleInput> for LifestyleForm {
    fn from(input: &LifestyleInput) -> Self {
        let t = &input.transportation;
        LifestyleForm {
            transportation: TransportationForm {
                mode: t.mode.key().to_string(),
                distance: t.weekly_distance_km,
                is_car: t.is_car,
                car_variant: t.car_variant.map(|v| v.key().to_string()),
            },
            energy: EnergyForm {
                electricity: input.energy.monthly_electricity_kwh,
                natural_gas: input.energy.monthly_natural_gas_therms,
                heating: input.energy.heating.as_ref().map(|h| HeatingForm {
                    fuel: h.fuel.key().to_string(),
                    amount: h.monthly_amount_gallons,
                }),
            },
            food: input
                .food
                .iter()
                .map(|(category, kg)| (category.key().to_string(), *kg))
                .collect(),
            waste: WasteForm {
                landfill: input.waste.weekly_landfill_kg,
                recycled: input.waste.weekly_recycled_kg,
                composted: input.waste.weekly_composted_kg,
            },
        }
    }
}
