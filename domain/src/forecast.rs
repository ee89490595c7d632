//! Outcome forecast normalization
//!
//! A forecaster (a language model in production) predicts the winning
//! probability of each option, with no guarantee the numbers sum to 100 or
//! are even sensibly bounded. The engine's only obligation is to repair the
//! list into a valid distribution.

use serde::{Deserialize, Serialize};

/// A predicted probability for one voting option. Ephemeral — never
/// persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutcomePrediction {
    pub option: String,
    pub probability: f64,
}

impl OutcomePrediction {
    pub fn new(option: impl Into<String>, probability: f64) -> Self {
        Self {
            option: option.into(),
            probability,
        }
    }
}

/// Repair raw predictions into a distribution summing to exactly 100.
///
/// Input order and option identities are preserved, and no output value is
/// negative (negative raw weights count as zero weight). Two passes:
///
/// 1. scale every entry by `100 / sum`;
/// 2. add the floating-point remainder `100 - Σ` to the entry with the
///    maximum probability (the first such entry if tied), so the final sum
///    is exact without perturbing the relative ranking of other entries.
///
/// Naive per-entry rounding can leave the total off by a point or more;
/// concentrating the correction on the largest entry keeps the relative
/// distortion smallest.
///
/// If the raw weights sum to zero or less there is no distribution to
/// normalize and the input is returned unchanged — a documented degenerate
/// case, not an error.
pub fn normalize(predictions: Vec<OutcomePrediction>) -> Vec<OutcomePrediction> {
    let weights: Vec<f64> = predictions
        .iter()
        .map(|p| p.probability.max(0.0))
        .collect();
    let sum: f64 = weights.iter().sum();
    if sum <= 0.0 {
        return predictions;
    }

    let mut normalized: Vec<OutcomePrediction> = predictions
        .into_iter()
        .zip(weights)
        .map(|(p, weight)| OutcomePrediction {
            option: p.option,
            probability: weight / sum * 100.0,
        })
        .collect();

    let total: f64 = normalized.iter().map(|p| p.probability).sum();
    let remainder = 100.0 - total;
    if remainder != 0.0 {
        let mut max_index = 0;
        for (i, p) in normalized.iter().enumerate() {
            if p.probability > normalized[max_index].probability {
                max_index = i;
            }
        }
        normalized[max_index].probability += remainder;
    }

    normalized
}
