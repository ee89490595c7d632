//! Engine use cases
//!
//! One coarse-grained use case per operation family, each generic over the
//! ports it needs. Every mutation verifies the acting profile's permission
//! before touching state, takes `now` once at the boundary, and commits
//! through the store port — atomically where the contract demands it.

pub mod announce_winner;
pub mod cast_vote;
pub mod create_room;
pub mod manage_room;
pub mod predict_outcome;
pub mod refill_quota;
pub mod register_profile;
pub mod reset_session;
pub mod view_results;

pub(crate) mod shared;

#[cfg(test)]
pub(crate) mod support;

use crate::ports::forecast_gateway::ForecastError;
use crate::ports::store::StoreError;
use agora_domain::EngineError;
use thiserror::Error;

/// Errors surfaced by engine operations.
///
/// `Rejected` carries the expected, user-facing conditions of the engine's
/// error vocabulary; the remaining variants are collaborator failures,
/// terminal for the requested operation.
#[derive(Error, Debug)]
pub enum OperationError {
    #[error(transparent)]
    Rejected(#[from] EngineError),

    #[error("no unused room code after {0} attempts")]
    CodeSpaceExhausted(u32),

    #[error("store error: {0}")]
    Store(#[from] StoreError),

    #[error("forecast error: {0}")]
    Forecast(#[from] ForecastError),
}

impl OperationError {
    /// The engine rejection inside, if this is one.
    pub fn rejection(&self) -> Option<&EngineError> {
        match self {
            OperationError::Rejected(e) => Some(e),
            _ => None,
        }
    }
}
