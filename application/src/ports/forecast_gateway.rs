//! Forecast gateway port
//!
//! Defines the interface to the collaborator that produces raw outcome
//! probabilities (a language model in production). The engine only consumes
//! the output and repairs it into a valid distribution; how the prediction
//! is produced is entirely the adapter's business.

use agora_domain::{OutcomePrediction, Tally};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use thiserror::Error;

/// Errors that can occur while obtaining a forecast.
#[derive(Error, Debug)]
pub enum ForecastError {
    #[error("forecast request failed: {0}")]
    RequestFailed(String),

    #[error("the forecaster returned no predictions")]
    EmptyForecast,
}

/// What the forecaster gets to work with: the live tally plus qualitative
/// trend hints.
///
/// Carried structured so local adapters can read the numbers directly; a
/// language-model adapter renders [`to_prompt`](ForecastRequest::to_prompt)
/// instead.
#[derive(Debug, Clone)]
pub struct ForecastRequest {
    pub topic: String,
    pub tally: Tally,
    pub trend_hint: String,
    pub as_of: DateTime<Utc>,
}

impl ForecastRequest {
    /// Render the request as the free-text prompt a model adapter sends.
    pub fn to_prompt(&self) -> String {
        format!(
            "Current voting data for {}: {}. Historical trend: {} \
             Predict the final probability for each option.",
            self.topic,
            self.tally.summary(),
            self.trend_hint,
        )
    }
}

/// Gateway to the outcome forecaster.
///
/// The returned list carries no guarantees: probabilities may not sum to
/// 100 and magnitudes are arbitrary. Callers repair the output with
/// [`agora_domain::normalize`].
#[async_trait]
pub trait ForecastGateway: Send + Sync {
    async fn predict(
        &self,
        request: &ForecastRequest,
    ) -> Result<Vec<OutcomePrediction>, ForecastError>;
}
