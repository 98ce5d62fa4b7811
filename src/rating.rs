//! Footprint Rating Bands
//!
//! Maps an annual total (kg CO2) to one of five ordered severity bands.
//! Bands are half-open `[low, high)`, so a boundary value belongs to the
//! higher band.
//!
//! | Band | Ordinal | Range (kg CO2 / year) |
//! |------|---------|-----------------------|
//! | Excellent | 0 | < 5,000 |
//! | Good | 1 | 5,000 - 10,000 |
//! | Average | 2 | 10,000 - 15,000 |
//! | Above average | 3 | 15,000 - 20,000 |
//! | Significantly above average | 4 | ≥ 20,000 |

use serde::{Deserialize, Serialize};

/// Severity band, ordered from best to worst
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RatingBand {
    Excellent,
    Good,
    Average,
    AboveAverage,
    SignificantlyAboveAverage,
}

impl RatingBand {
    pub const ALL: [RatingBand; 5] = [
        RatingBand::Excellent,
        RatingBand::Good,
        RatingBand::Average,
        RatingBand::AboveAverage,
        RatingBand::SignificantlyAboveAverage,
    ];

    /// Classify an annual total
    pub fn from_total(total_annual_kg_co2: f64) -> Self {
        match total_annual_kg_co2 {
            t if t < 5_000.0 => RatingBand::Excellent,
            t if t < 10_000.0 => RatingBand::Good,
            t if t < 15_000.0 => RatingBand::Average,
            t if t < 20_000.0 => RatingBand::AboveAverage,
            _ => RatingBand::SignificantlyAboveAverage,
        }
    }

    /// 0 (best) through 4 (worst)
    pub fn ordinal(&self) -> u8 {
        *self as u8
    }

    /// Inclusive lower bound of the band
    pub fn lower_bound(&self) -> f64 {
        match self {
            RatingBand::Excellent => 0.0,
            RatingBand::Good => 5_000.0,
            RatingBand::Average => 10_000.0,
            RatingBand::AboveAverage => 15_000.0,
            RatingBand::SignificantlyAboveAverage => 20_000.0,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RatingBand::Excellent => "Excellent",
            RatingBand::Good => "Good",
            RatingBand::Average => "Average",
            RatingBand::AboveAverage => "Above average",
            RatingBand::SignificantlyAboveAverage => "Significantly above average",
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            RatingBand::Excellent => "Excellent! Your carbon footprint is well below average.",
            RatingBand::Good => "Good job! Your carbon footprint is below average.",
            RatingBand::Average => "Your carbon footprint is about average.",
            RatingBand::AboveAverage => {
                "Your carbon footprint is above average. Consider making some changes."
            }
            RatingBand::SignificantlyAboveAverage => {
                concat!(
                    "Your carbon footprint is significantly above average. ",
                    "Consider making substantial changes."
                )
            }
        }
    }
}

/// Rating attached to an estimate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    pub band: RatingBand,
    pub ordinal: u8,
    pub label: String,
    pub message: String,
}

impl From<RatingBand> for Rating {
    fn from(band: RatingBand) -> Self {
        Rating {
            band,
            ordinal: band.ordinal(),
            label: band.label().to_string(),
            message: band.message().to_string(),
        }
    }
}

/// Classify an annual total into a rating
pub fn classify_rating(total_annual_kg_co2: f64) -> Rating {
    RatingBand::from_total(total_annual_kg_co2).into()
}
