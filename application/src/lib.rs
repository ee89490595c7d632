//! Application layer for agoravote
//!
//! This crate contains the engine's use cases, port definitions, and
//! behavior configuration. It depends only on the domain layer; adapters for
//! the ports live in the infrastructure layer.
//!
//! Every operation is a short-lived request/response against the document
//! store port: the engine suspends only at the store boundary, guarantees
//! committed state is internally consistent, and leaves live-update fan-out
//! to a push layer that re-invokes the plain query operations.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::EngineConfig;
pub use ports::{
    audit_log::{AuditEvent, AuditLogger, NoAuditLogger},
    forecast_gateway::{ForecastError, ForecastGateway, ForecastRequest},
    store::{DocumentStore, StoreError},
};
pub use use_cases::{
    OperationError,
    announce_winner::{AnnounceWinnerOutput, AnnounceWinnerUseCase},
    cast_vote::{CastVoteInput, CastVoteUseCase},
    create_room::{CreateRoomInput, CreateRoomOutput, CreateRoomUseCase},
    manage_room::ManageRoomUseCase,
    predict_outcome::PredictOutcomeUseCase,
    refill_quota::RefillQuotaUseCase,
    register_profile::RegisterProfileUseCase,
    reset_session::{ResetSessionOutput, ResetSessionUseCase},
    view_results::{RoomResults, ViewResultsUseCase},
};
