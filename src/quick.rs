//! Quick Footprint Estimate
//!
//! Coarse profile-based estimate: five categories, each a single choice
//! times a fixed factor. Diet, waste and flight factors are tonnes per year
//! and are converted to kilograms.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::{check_quantity, EstimateError};

const KG_PER_TONNE: f64 = 1000.0;
/// Tonnes CO2 per return flight
const FLIGHT_TONNES: f64 = 0.2;

/// Below this many profile tips the general tips are appended
const MIN_PROFILE_TIPS: usize = 3;

const GENERAL_TIPS: [&str; 2] = [
    "Use reusable bags, bottles, and containers to reduce single-use plastic waste.",
    "Support local and sustainable businesses in your community.",
];

macro_rules! keyed_enum {
    (
        $(#[$meta:meta])* $name:ident, $category:literal,
        { $($variant:ident => $key:tt),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(#[serde(rename = $key)] $variant),+
        }

        impl $name {
            pub fn key(&self) -> &'static str {
                match self {
                    $($name::$variant => $key),+
                }
            }
        }

        impl FromStr for $name {
            type Err = EstimateError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($key => Ok($name::$variant),)+
                    _ => Err(EstimateError::unrecognized($category, s)),
                }
            }
        }
    };
}

keyed_enum!(
    /// Everyday commute
    CommuteMode, "commute", {
        CarGasoline => "car-gasoline",
        CarElectric => "car-electric",
        PublicTransit => "public-transit",
        WalkBike => "walk-bike",
    }
);

keyed_enum!(
    HomeEnergySource, "home energy", {
        Electricity => "electricity",
        NaturalGas => "natural-gas",
        Renewable => "renewable",
    }
);

keyed_enum!(
    DietType, "diet", {
        Vegan => "vegan",
        Vegetarian => "vegetarian",
        Pescatarian => "pescatarian",
        Omnivore => "omnivore",
    }
);

keyed_enum!(
    RecyclingHabit, "recycling", {
        Extensive => "extensive",
        Moderate => "some",
        Minimal => "minimal",
    }
);

impl CommuteMode {
    /// kg CO2 per distance unit
    pub fn factor(&self) -> f64 {
        match self {
            CommuteMode::CarGasoline => 0.404,
            CommuteMode::CarElectric => 0.1,
            CommuteMode::PublicTransit => 0.14,
            CommuteMode::WalkBike => 0.0,
        }
    }
}

impl HomeEnergySource {
    /// kg CO2 per square foot per year
    pub fn factor(&self) -> f64 {
        match self {
            HomeEnergySource::Electricity => 0.92,
            HomeEnergySource::NaturalGas => 0.65,
            HomeEnergySource::Renewable => 0.2,
        }
    }
}

impl DietType {
    /// Tonnes CO2 per year
    pub fn tonnes(&self) -> f64 {
        match self {
            DietType::Vegan => 1.5,
            DietType::Vegetarian => 1.7,
            DietType::Pescatarian => 1.9,
            DietType::Omnivore => 2.5,
        }
    }
}

impl RecyclingHabit {
    /// Tonnes CO2 per year
    pub fn tonnes(&self) -> f64 {
        match self {
            RecyclingHabit::Extensive => 0.1,
            RecyclingHabit::Moderate => 0.3,
            RecyclingHabit::Minimal => 0.5,
        }
    }
}

/// Profile answered by the quick estimate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuickProfile {
    pub commute: CommuteMode,
    pub annual_distance: f64,
    pub home_energy: HomeEnergySource,
    pub home_size_sq_ft: f64,
    pub diet: DietType,
    pub recycling: RecyclingHabit,
    pub flights_per_year: f64,
}

impl QuickProfile {
    pub fn validate(&self) -> Result<(), EstimateError> {
        check_quantity("annualDistance", self.annual_distance)?;
        check_quantity("homeSizeSqFt", self.home_size_sq_ft)?;
        check_quantity("flightsPerYear", self.flights_per_year)?;
        Ok(())
    }
}

impl Default for QuickProfile {
    fn default() -> Self {
        Self {
            commute: CommuteMode::CarGasoline,
            annual_distance: 10_000.0,
            home_energy: HomeEnergySource::Electricity,
            home_size_sq_ft: 1_500.0,
            diet: DietType::Omnivore,
            recycling: RecyclingHabit::Moderate,
            flights_per_year: 2.0,
        }
    }
}

/// Per-category kg CO2 for a quick profile
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QuickResults {
    pub transportation: f64,
    pub home: f64,
    pub food: f64,
    pub waste: f64,
    pub flights: f64,
    pub total: f64,
}

pub fn estimate_quick(profile: &QuickProfile) -> QuickResults {
    let transportation = profile.annual_distance * profile.commute.factor();
    let home = profile.home_size_sq_ft * profile.home_energy.factor();
    let food = profile.diet.tonnes() * KG_PER_TONNE;
    let waste = profile.recycling.tonnes() * KG_PER_TONNE;
    let flights = profile.flights_per_year * FLIGHT_TONNES * KG_PER_TONNE;

    QuickResults {
        transportation,
        home,
        food,
        waste,
        flights,
        total: transportation + home + food + waste + flights,
    }
}

/// Validate then estimate
pub fn try_estimate_quick(profile: &QuickProfile) -> Result<QuickResults, EstimateError> {
    profile.validate()?;
    Ok(estimate_quick(profile))
}

/// One tip per category over its threshold, padded with general tips
pub fn quick_reduction_tips(results: &QuickResults) -> Vec<&'static str> {
    let mut tips = Vec::new();

    if results.transportation > 1000.0 {
        tips.push(
            "Consider carpooling, using public transportation, or switching to an electric vehicle.",
        );
    }
    if results.home > 1000.0 {
        tips.push(
            "Install energy-efficient appliances and LED lighting to reduce your home energy usage.",
        );
    }
    if results.food > 1500.0 {
        tips.push(
            "Try having more plant-based meals during the week to reduce emissions from your diet.",
        );
    }
    if results.waste > 200.0 {
        tips.push("Increase your recycling efforts and consider composting food waste.");
    }
    if results.flights > 500.0 {
        tips.push(
            "Consider alternatives to flying or purchase carbon offsets for necessary flights.",
        );
    }

    if tips.len() < MIN_PROFILE_TIPS {
        tips.extend(GENERAL_TIPS);
    }

    tips
}
