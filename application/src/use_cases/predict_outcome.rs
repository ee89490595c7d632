//! Predict Outcome use case
//!
//! Builds the forecast request from the live tally, asks the forecaster for
//! raw winning probabilities, and repairs the answer into a distribution
//! summing to exactly 100.

use super::shared;
use super::OperationError;
use crate::config::EngineConfig;
use crate::ports::forecast_gateway::{ForecastGateway, ForecastRequest};
use crate::ports::store::DocumentStore;
use agora_domain::{OutcomePrediction, Tally, VotingOptions, forecast};
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tracing::debug;

/// Use case for forecasting the final outcome
pub struct PredictOutcomeUseCase<S, G> {
    store: Arc<S>,
    gateway: Arc<G>,
    config: EngineConfig,
}

impl<S: DocumentStore, G: ForecastGateway> PredictOutcomeUseCase<S, G> {
    pub fn new(store: Arc<S>, gateway: Arc<G>, config: EngineConfig) -> Self {
        Self {
            store,
            gateway,
            config,
        }
    }

    pub async fn execute(
        &self,
        room_id: &str,
        now: DateTime<Utc>,
    ) -> Result<Vec<OutcomePrediction>, OperationError> {
        let room = shared::load_room(self.store.as_ref(), room_id).await?;
        let votes = self.store.votes(&room.id).await?;
        let options = self.config.options();

        let request = ForecastRequest {
            topic: room.topic.clone(),
            tally: Tally::of(&votes, &options),
            trend_hint: trend_hint(&options),
            as_of: now,
        };

        let raw = self.gateway.predict(&request).await?;
        debug!(room_id = %room.id, predictions = raw.len(), "forecast received");

        Ok(forecast::normalize(raw))
    }
}

/// The qualitative trend hint handed to the forecaster alongside the tally.
fn trend_hint(options: &VotingOptions) -> String {
    let mut names = options.iter();
    match (names.next(), names.next()) {
        (Some(first), Some(second)) => format!(
            "The \"{first}\" option usually has more votes, but \"{second}\" \
             can gain momentum on Fridays."
        ),
        (Some(only), None) => format!("The \"{only}\" option is the historical default."),
        _ => String::new(),
    }
}
