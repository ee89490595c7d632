//! Create Room use case
//!
//! A session start: consumes one unit of the admin's daily quota and
//! commits the fresh room together with the quota increment as one unit.

use super::shared;
use super::OperationError;
use crate::config::EngineConfig;
use crate::ports::audit_log::{AuditEvent, AuditLogger, NoAuditLogger};
use crate::ports::store::{DocumentStore, StoreError};
use agora_domain::{Room, RoomCode};
use chrono::{DateTime, Utc};
use serde_json::json;
use std::sync::Arc;
use tracing::{debug, info};

/// Draws before giving up on an unused code. At 35^6 codes a single retry
/// is already vanishingly unlikely.
const MAX_CODE_ATTEMPTS: u32 = 8;

/// Input for the CreateRoom use case
#[derive(Debug, Clone)]
pub struct CreateRoomInput {
    /// The admin creating the room.
    pub owner_id: String,
}

impl CreateRoomInput {
    pub fn new(owner_id: impl Into<String>) -> Self {
        Self {
            owner_id: owner_id.into(),
        }
    }
}

/// Output of the CreateRoom use case
#[derive(Debug, Clone)]
pub struct CreateRoomOutput {
    pub room: Room,
    /// Session starts the admin has left today after this one.
    pub remaining_starts: u32,
}

/// Use case for creating a voting room
pub struct CreateRoomUseCase<S> {
    store: Arc<S>,
    config: EngineConfig,
    audit: Arc<dyn AuditLogger>,
}

impl<S: DocumentStore> CreateRoomUseCase<S> {
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
        input: CreateRoomInput,
        now: DateTime<Utc>,
    ) -> Result<CreateRoomOutput, OperationError> {
        let profile = shared::load_admin(self.store.as_ref(), &input.owner_id).await?;

        let quota = self.config.quota();
        let new_count = quota.consume(&profile, now)?;

        let code = self.fresh_code().await?;
        let mut room = Room::new(uuid::Uuid::now_v7().to_string(), code, &profile.id, now);
        room.update_details(&self.config.default_topic, &self.config.default_lecture_time);

        // Quota increment and room creation land as one unit.
        let updated = profile.with_quota(new_count, now);
        self.store.commit_room_creation(&room, &updated).await?;

        info!(room_id = %room.id, code = %room.code, owner = %profile.id, "room created");
        self.audit.log(AuditEvent::new(
            "room_created",
            json!({
                "roomId": room.id,
                "code": room.code.as_str(),
                "ownerId": profile.id,
            }),
        ));

        Ok(CreateRoomOutput {
            room,
            remaining_starts: quota.limit() - new_count,
        })
    }

    /// Draw codes until one is unused among active rooms.
    async fn fresh_code(&self) -> Result<RoomCode, OperationError> {
        for _ in 0..MAX_CODE_ATTEMPTS {
            let code = RoomCode::random();
            match self.store.room_by_code(&code).await {
                Err(StoreError::NotFound) => return Ok(code),
                Ok(_) => {
                    debug!(code = %code, "room code collision, drawing again");
                    continue;
                }
                Err(e) => return Err(e.into()),
            }
        }
        Err(OperationError::CodeSpaceExhausted(MAX_CODE_ATTEMPTS))
    }
}
