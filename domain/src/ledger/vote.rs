//! Vote entities and the cast decision

use crate::core::error::EngineError;
use crate::room::entities::Room;
use crate::room::options::VotingOptions;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single participant's vote in a room.
///
/// Keyed by `(room_id, voter_id)`, so a voter holds at most one vote per
/// room; `id` equals `voter_id` so a retried cast targets the same document
/// and the write is naturally idempotent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vote {
    pub id: String,
    pub room_id: String,
    pub voter_id: String,
    pub vote_option: String,
    pub timestamp: DateTime<Utc>,
}

impl Vote {
    pub fn new(
        room_id: impl Into<String>,
        voter_id: impl Into<String>,
        vote_option: impl Into<String>,
        timestamp: DateTime<Utc>,
    ) -> Self {
        let voter_id = voter_id.into();
        Self {
            id: voter_id.clone(),
            room_id: room_id.into(),
            voter_id,
            vote_option: vote_option.into(),
            timestamp,
        }
    }
}

/// An immutable copy of a vote taken at reset time.
///
/// Stored under a room-scoped archive namespace, keyed by the original
/// vote's identity. Audit trail only — never read back by the live engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArchivedVote {
    pub id: String,
    pub room_id: String,
    pub voter_id: String,
    pub vote_option: String,
    pub timestamp: DateTime<Utc>,
}

impl From<Vote> for ArchivedVote {
    fn from(vote: Vote) -> Self {
        Self {
            id: vote.id,
            room_id: vote.room_id,
            voter_id: vote.voter_id,
            vote_option: vote.vote_option,
            timestamp: vote.timestamp,
        }
    }
}

/// Decide a cast: produce the vote to persist, or the reason it is rejected.
///
/// Preconditions are checked in order:
/// 1. voting must be open, else [`EngineError::VotingClosed`]
/// 2. the voter must not already hold a vote, else [`EngineError::AlreadyVoted`]
/// 3. the option must be configured, else [`EngineError::InvalidOption`]
pub fn cast(
    room: &Room,
    options: &VotingOptions,
    voter_id: &str,
    option: &str,
    existing: Option<&Vote>,
    now: DateTime<Utc>,
) -> Result<Vote, EngineError> {
    if !room.is_voting_open {
        return Err(EngineError::VotingClosed);
    }
    if existing.is_some() {
        return Err(EngineError::AlreadyVoted);
    }
    if !options.contains(option) {
        return Err(EngineError::InvalidOption(option.to_string()));
    }
    Ok(Vote::new(room.id.clone(), voter_id, option, now))
}
