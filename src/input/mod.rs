//! Lifestyle input
//!
//! - `types`: the typed record the estimator consumes
//! - `form`: the string-keyed form state and its validating conversion

pub mod types;
pub mod form;

pub use types::{
    CarVariant, EnergyInput, FoodCategory, FoodIntake, HeatingFuel, HeatingInput,
    LifestyleInput, TransportMode, TransportationInput, WasteInput,
};
pub use form::{EnergyForm, HeatingForm, LifestyleForm, TransportationForm, WasteForm};
