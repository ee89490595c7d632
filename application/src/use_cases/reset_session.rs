//! Reset Session use case
//!
//! A session start: archives every live vote, clears the ledger, and
//! consumes one unit of the admin's daily quota — all committed as one
//! unit. Resetting an empty room is a no-op archive but still costs the
//! quota unit: starting a new session has a price independent of outcome.

use super::shared;
use super::OperationError;
use crate::config::EngineConfig;
use crate::ports::audit_log::{AuditEvent, AuditLogger, NoAuditLogger};
use crate::ports::store::DocumentStore;
use chrono::{DateTime, Utc};
use serde_json::json;
use std::sync::Arc;
use tracing::info;

/// Output of the ResetSession use case
#[derive(Debug, Clone)]
pub struct ResetSessionOutput {
    /// Votes copied into the archive namespace (equals the votes cleared).
    pub archived_count: usize,
    /// Session starts the admin has left today after this one.
    pub remaining_starts: u32,
}

/// Use case for resetting a room's voting session
pub struct ResetSessionUseCase<S> {
    store: Arc<S>,
    config: EngineConfig,
    audit: Arc<dyn AuditLogger>,
}

impl<S: DocumentStore> ResetSessionUseCase<S> {
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
        room_id: &str,
        acting_user: &str,
        now: DateTime<Utc>,
    ) -> Result<ResetSessionOutput, OperationError> {
        let profile = shared::load_admin(self.store.as_ref(), acting_user).await?;
        let room = shared::load_room(self.store.as_ref(), room_id).await?;
        shared::ensure_owner(&room, &profile)?;

        let quota = self.config.quota();
        let new_count = quota.consume(&profile, now)?;

        // Archive-and-clear plus the quota increment land as one unit.
        let updated = profile.with_quota(new_count, now);
        let archived_count = self.store.commit_session_reset(&room.id, &updated).await?;

        info!(room_id = %room.id, archived = archived_count, "session reset");
        self.audit.log(AuditEvent::new(
            "session_reset",
            json!({ "roomId": room.id, "archivedCount": archived_count }),
        ));

        Ok(ResetSessionOutput {
            archived_count,
            remaining_starts: quota.limit() - new_count,
        })
    }
}
