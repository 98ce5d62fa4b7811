//! Carbon Footprint Estimator
//!
//! Estimates an individual's annual CO2 footprint from lifestyle inputs using
//! fixed linear emission factors, rates the total and picks reduction advice.
//!
//! Module layout:
//! - `factors`: emission factor tables
//! - `input`: typed lifestyle record and the form-state boundary
//! - `calculators`: transportation, energy, food and waste calculators
//! - `rating`: severity bands
//! - `suggestions`: threshold-driven advice blocks
//! - `estimator`: single and batch estimation
//! - `quick`: coarse profile-based estimate
//! - `report`: markdown / JSON output
//! - `config`: command-line run configuration

pub mod error;
pub mod factors;
pub mod input;
pub mod calculators;
pub mod rating;
pub mod suggestions;
pub mod estimator;
pub mod quick;
pub mod report;
#[cfg(feature = "cli")]
pub mod config;

// Re-export commonly used types
pub use error::EstimateError;
pub use input::{FoodCategory, LifestyleForm, LifestyleInput, TransportMode};
pub use calculators::{compute_breakdown, CategoryBreakdown, EmissionCategory};
pub use rating::{classify_rating, Rating, RatingBand};
pub use suggestions::{select_suggestions, SuggestionBlock};
pub use estimator::{
    compute_emissions, compute_emissions_from_form, estimate_batch, try_compute_emissions,
    EmissionsResult,
};
pub use quick::{estimate_quick, quick_reduction_tips, QuickProfile, QuickResults};
pub use report::{JsonFormatter, MarkdownFormatter};
