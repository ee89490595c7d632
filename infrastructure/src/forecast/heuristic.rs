//! Trend-extrapolating forecast gateway
//!
//! A deterministic, local stand-in for the production forecaster (a
//! language model behind the same port). It reads the tally straight from
//! the structured request and applies the two historical biases the prompt
//! describes: the first-configured option usually leads, and the runner-up
//! gains momentum on Fridays.
//!
//! The emitted weights deliberately do not sum to 100 — like a model's raw
//! answer, they are only meaningful after normalization.

use agora_application::ports::forecast_gateway::{ForecastError, ForecastGateway, ForecastRequest};
use agora_domain::OutcomePrediction;
use async_trait::async_trait;
use chrono::{Datelike, Weekday};
use tracing::debug;

/// Forecast gateway that extrapolates from the live tally.
#[derive(Debug, Clone)]
pub struct HeuristicForecastGateway {
    leader_bias: f64,
    friday_momentum: f64,
}

impl Default for HeuristicForecastGateway {
    fn default() -> Self {
        Self {
            leader_bias: 1.15,
            friday_momentum: 1.25,
        }
    }
}

impl HeuristicForecastGateway {
    /// `leader_bias` scales the first-configured option; `friday_momentum`
    /// scales the second one when the request falls on a Friday.
    pub fn new(leader_bias: f64, friday_momentum: f64) -> Self {
        Self {
            leader_bias,
            friday_momentum,
        }
    }
}

#[async_trait]
impl ForecastGateway for HeuristicForecastGateway {
    async fn predict(
        &self,
        request: &ForecastRequest,
    ) -> Result<Vec<OutcomePrediction>, ForecastError> {
        let entries = request.tally.entries();
        if entries.is_empty() {
            return Err(ForecastError::EmptyForecast);
        }

        let friday = request.as_of.weekday() == Weekday::Fri;
        let predictions = entries
            .iter()
            .enumerate()
            .map(|(i, entry)| {
                // Add-one smoothing keeps a cold room forecastable.
                let mut weight = (entry.count + 1) as f64;
                if i == 0 {
                    weight *= self.leader_bias;
                }
                if i == 1 && friday {
                    weight *= self.friday_momentum;
                }
                OutcomePrediction::new(entry.option.clone(), weight * 10.0)
            })
            .collect();

        debug!(topic = %request.topic, friday, "heuristic forecast produced");
        Ok(predictions)
    }
}
