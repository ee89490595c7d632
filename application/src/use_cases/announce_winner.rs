//! Announce Winner use case

use super::shared;
use super::OperationError;
use crate::config::EngineConfig;
use crate::ports::audit_log::{AuditEvent, AuditLogger, NoAuditLogger};
use crate::ports::store::DocumentStore;
use agora_domain::{Room, Tally, winner};
use serde_json::json;
use std::sync::Arc;
use tracing::info;

/// Output of the AnnounceWinner use case
#[derive(Debug, Clone)]
pub struct AnnounceWinnerOutput {
    pub room: Room,
    pub winner: String,
    pub tally: Tally,
}

/// Use case for resolving and announcing the winning option
pub struct AnnounceWinnerUseCase<S> {
    store: Arc<S>,
    config: EngineConfig,
    audit: Arc<dyn AuditLogger>,
}

impl<S: DocumentStore> AnnounceWinnerUseCase<S> {
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
    ) -> Result<AnnounceWinnerOutput, OperationError> {
        let profile = shared::load_admin(self.store.as_ref(), acting_user).await?;
        let mut room = shared::load_room(self.store.as_ref(), room_id).await?;
        shared::ensure_owner(&room, &profile)?;

        let votes = self.store.votes(&room.id).await?;
        let tally = Tally::of(&votes, &self.config.options());

        let winner = winner::announce(&mut room, &tally)?;
        self.store.put_room(&room).await?;

        info!(room_id = %room.id, winner = %winner, "winner announced");
        self.audit.log(AuditEvent::new(
            "winner_announced",
            json!({ "roomId": room.id, "winnerOption": winner }),
        ));

        Ok(AnnounceWinnerOutput {
            room,
            winner,
            tally,
        })
    }
}
