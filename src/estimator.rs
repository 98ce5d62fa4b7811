//! Footprint Estimator - main entry point
//!
//! Runs the category calculators, aggregates, rates and selects suggestions
//! in one pass. Includes both sequential and parallel (Rayon) batch paths.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::calculators::{compute_breakdown, CategoryBreakdown};
use crate::error::EstimateError;
use crate::input::{LifestyleForm, LifestyleInput};
use crate::rating::{classify_rating, Rating};
use crate::suggestions::{select_suggestions, SuggestionBlock};

/// Result of one "Calculate" action
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmissionsResult {
    /// Unrounded annual total (kg CO2)
    pub total_annual_kg_co2: f64,
    pub breakdown: CategoryBreakdown,
    pub rating: Rating,
    pub suggestions: Vec<SuggestionBlock>,
}

impl EmissionsResult {
    /// Total rounded to whole kilograms for display
    pub fn display_total_kg(&self) -> i64 {
        self.total_annual_kg_co2.round() as i64
    }
}

/// Estimate emissions for a validated lifestyle record.
///
/// Never fails: the typed input cannot carry unknown categories. Callers
/// holding unchecked quantities should `validate()` first or go through
/// `compute_emissions_from_form`.
pub fn compute_emissions(input: &LifestyleInput) -> EmissionsResult {
    let breakdown = compute_breakdown(input);
    let total = breakdown.total();

    tracing::debug!(
        "Breakdown: transportation={:.1} energy={:.1} food={:.1} waste={:.1} total={:.1}",
        breakdown.transportation,
        breakdown.energy,
        breakdown.food,
        breakdown.waste,
        total
    );

    EmissionsResult {
        total_annual_kg_co2: total,
        breakdown,
        rating: classify_rating(total),
        suggestions: select_suggestions(input, total),
    }
}

/// Validate a typed record, then estimate
pub fn try_compute_emissions(input: &LifestyleInput) -> Result<EmissionsResult, EstimateError> {
    input.validate()?;
    Ok(compute_emissions(input))
}

/// Validate and convert form state, then estimate
pub fn compute_emissions_from_form(form: &LifestyleForm) -> Result<EmissionsResult, EstimateError> {
    let input = form.to_input().map_err(|e| {
        tracing::warn!("Rejected lifestyle form: {}", e);
        e
    })?;
    Ok(compute_emissions(&input))
}

/// Estimate many records sequentially
pub fn estimate_batch_sequential(inputs: &[LifestyleInput]) -> Vec<EmissionsResult> {
    inputs.iter().map(compute_emissions).collect()
}

/// Estimate many records in parallel; output order matches input order
pub fn estimate_batch(inputs: &[LifestyleInput]) -> Vec<EmissionsResult> {
    tracing::info!("Estimating {} lifestyle records in parallel", inputs.len());
    inputs.par_iter().map(compute_emissions).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::TransportMode;
    use crate::rating::RatingBand;
    use approx::assert_relative_eq;

    #[test]
    fn test_default_record_scenario() {
        let result = compute_emissions(&LifestyleInput::default());
        assert_relative_eq!(result.total_annual_kg_co2, 22_752.4, epsilon = 1e-6);
        assert_eq!(result.display_total_kg(), 22_752);
        assert_eq!(result.rating.band, RatingBand::SignificantlyAboveAverage);
        assert_eq!(result.suggestions.len(), 2);
    }

    #[test]
    fn test_total_equals_breakdown_sum() {
        let mut input = LifestyleInput::default();
        input.transportation.mode = TransportMode::Plane;
        let result = compute_emissions(&input);
        assert_eq!(result.total_annual_kg_co2, result.breakdown.total());
    }

    #[test]
    fn test_deterministic() {
        let input = LifestyleInput::default();
        assert_eq!(compute_emissions(&input), compute_emissions(&input));
    }

    #[test]
    fn test_try_compute_rejects_negative() {
        let mut input = LifestyleInput::default();
        input.waste.weekly_recycled_kg = -1.0;
        assert!(matches!(
            try_compute_emissions(&input),
            Err(EstimateError::NegativeQuantity { .. })
        ));
    }

    #[test]
    fn test_from_form_rejects_unknown_food() {
        let mut form = LifestyleForm::default();
        form.food.insert("beef".to_string(), 3.0);
        assert!(compute_emissions_from_form(&form).is_err());
    }

    #[test]
    fn test_batch_matches_sequential() {
        let mut inputs = vec![LifestyleInput::default(); 8];
        for (i, input) in inputs.iter_mut().enumerate() {
            input.transportation.weekly_distance_km = 25.0 * i as f64;
        }
        assert_eq!(estimate_batch(&inputs), estimate_batch_sequential(&inputs));
    }
}
