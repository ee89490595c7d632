//! Cast Vote use case
//!
//! Records a participant's single vote. The vote document is keyed by
//! `(room_id, voter_id)`, so even a retried cast targets the same key and
//! can never produce a second vote.

use super::shared;
use super::OperationError;
use crate::config::EngineConfig;
use crate::ports::audit_log::{AuditEvent, AuditLogger, NoAuditLogger};
use crate::ports::store::DocumentStore;
use agora_domain::{Vote, ledger};
use chrono::{DateTime, Utc};
use serde_json::json;
use std::sync::Arc;
use tracing::info;

/// Input for the CastVote use case
#[derive(Debug, Clone)]
pub struct CastVoteInput {
    pub room_id: String,
    pub voter_id: String,
    pub option: String,
}

impl CastVoteInput {
    pub fn new(
        room_id: impl Into<String>,
        voter_id: impl Into<String>,
        option: impl Into<String>,
    ) -> Self {
        Self {
            room_id: room_id.into(),
            voter_id: voter_id.into(),
            option: option.into(),
        }
    }
}

/// Use case for casting a vote
pub struct CastVoteUseCase<S> {
    store: Arc<S>,
    config: EngineConfig,
    audit: Arc<dyn AuditLogger>,
}

impl<S: DocumentStore> CastVoteUseCase<S> {
    pub fn new(store: Arc<S>, config: EngineConfig) -> Self {
        Self {
            store,
            config,
            audit: Arc::new(NoAuditLogger),
        }
    }

    pub fn with_audit(mut self, audit: Arc<dyn AuditLogger>) -> Self {
        self.audit = audit;
        self
    }

    pub async fn execute(
        &self,
        input: CastVoteInput,
        now: DateTime<Utc>,
    ) -> Result<Vote, OperationError> {
        let room = shared::load_room(self.store.as_ref(), &input.room_id).await?;
        let existing = self.store.vote(&room.id, &input.voter_id).await?;

        let vote = ledger::cast(
            &room,
            &self.config.options(),
            &input.voter_id,
            &input.option,
            existing.as_ref(),
            now,
        )?;
        self.store.put_vote(&vote).await?;

        info!(room_id = %room.id, voter = %vote.voter_id, option = %vote.vote_option, "vote cast");
        self.audit.log(AuditEvent::new(
            "vote_cast",
            json!({
                "roomId": vote.room_id,
                "voterId": vote.voter_id,
                "voteOption": vote.vote_option,
            }),
        ));

        Ok(vote)
    }
}
