//! User profile types
//!
//! The profile record is owned by the identity subsystem; the engine only
//! reads the role and reads/writes the two quota fields.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Role of a user within the voting system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Moderator: creates rooms, opens/closes voting, announces winners.
    Admin,
    /// Participant: joins rooms by code and casts votes.
    Joinee,
    /// Internal role with no engine-level privileges.
    Developer,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Admin => write!(f, "admin"),
            Role::Joinee => write!(f, "joinee"),
            Role::Developer => write!(f, "developer"),
        }
    }
}

/// Identity-scoped record carrying the per-admin quota fields.
///
/// `daily_vote_count` is meaningful only relative to `last_quota_timestamp`'s
/// calendar day: a stale count from a prior day is logically zero. The engine
/// never interprets the count without going through
/// [`QuotaTracker`](crate::quota::QuotaTracker).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: String,
    pub role: Role,
    pub daily_vote_count: u32,
    pub last_quota_timestamp: DateTime<Utc>,
}

impl UserProfile {
    /// Bootstrap a profile with zero quota usage.
    pub fn new(id: impl Into<String>, role: Role, now: DateTime<Utc>) -> Self {
        Self {
            id: id.into(),
            role,
            daily_vote_count: 0,
            last_quota_timestamp: now,
        }
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    /// Copy of this profile with the quota fields replaced.
    ///
    /// The caller persists the result together with whatever state change
    /// consumed the quota, as one atomic unit.
    pub fn with_quota(&self, count: u32, timestamp: DateTime<Utc>) -> Self {
        Self {
            daily_vote_count: count,
            last_quota_timestamp: timestamp,
            ..self.clone()
        }
    }
}
