//! Domain layer for agoravote
//!
//! This crate contains the core voting rules, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Room
//!
//! A room is a single vote session with a unique six-character join code,
//! owned by one admin. The admin opens and closes voting, resets the session
//! (archiving the votes cast so far), and announces the winner.
//!
//! ## Session start
//!
//! Creating a room or resetting its votes is a "session start" and consumes
//! one unit of the admin's daily quota. The quota logic is a pure decision
//! over `(count, last timestamp, now)` — all persistence is delegated to the
//! caller so the cap is independently testable.
//!
//! ## Ledger
//!
//! Votes are keyed by `(room, voter)`, so a voter holds at most one vote per
//! room. The ledger derives tallies and a time-ordered cumulative series
//! from the raw votes; it never mutates them.

pub mod core;
pub mod forecast;
pub mod ledger;
pub mod profile;
pub mod quota;
pub mod room;
pub mod winner;

// Re-export commonly used types
pub use crate::core::error::EngineError;
pub use forecast::{OutcomePrediction, normalize};
pub use ledger::{
    tally::{SeriesPoint, Tally, TallyEntry, cumulative_series},
    vote::{ArchivedVote, Vote, cast},
};
pub use profile::{Role, UserProfile};
pub use quota::{DEFAULT_SESSION_START_LIMIT, QuotaTracker};
pub use room::{
    code::{CODE_ALPHABET, CODE_LENGTH, RoomCode},
    entities::{DEFAULT_LECTURE_TIME, DEFAULT_TOPIC, Room},
    options::VotingOptions,
};
pub use winner::{announce, resolve};
