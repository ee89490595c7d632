//! Engine behavior configuration

use agora_domain::{
    DEFAULT_LECTURE_TIME, DEFAULT_SESSION_START_LIMIT, DEFAULT_TOPIC, QuotaTracker, VotingOptions,
};
use serde::{Deserialize, Serialize};

/// Tunable engine behavior, shared by every use case.
///
/// The limit and option set are configuration, not contract: the engine
/// logic never hardwires either.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Session starts (room creation or reset) per admin per calendar day.
    pub session_start_limit: u32,
    /// The configured voting options, in display and tie-break order.
    pub voting_options: Vec<String>,
    /// Topic a fresh room starts with.
    pub default_topic: String,
    /// Lecture time a fresh room starts with.
    pub default_lecture_time: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            session_start_limit: DEFAULT_SESSION_START_LIMIT,
            voting_options: VotingOptions::default().as_slice().to_vec(),
            default_topic: DEFAULT_TOPIC.to_string(),
            default_lecture_time: DEFAULT_LECTURE_TIME.to_string(),
        }
    }
}

impl EngineConfig {
    /// The quota decision logic configured with this limit.
    pub fn quota(&self) -> QuotaTracker {
        QuotaTracker::new(self.session_start_limit)
    }

    /// The configured option set.
    ///
    /// # Panics
    /// Panics if the configured list is empty; config loading validates
    /// this before the engine runs.
    pub fn options(&self) -> VotingOptions {
        VotingOptions::new(self.voting_options.clone())
    }
}
