//! Manage Room use case
//!
//! The owner-only moderation operations: toggling the voting state, editing
//! room details, removing a participant's vote, and deleting the room.

use super::shared;
use super::OperationError;
use crate::ports::audit_log::{AuditEvent, AuditLogger, NoAuditLogger};
use crate::ports::store::DocumentStore;
use agora_domain::Room;
use serde_json::json;
use std::sync::Arc;
use tracing::info;

/// Use case for room moderation by its owner
pub struct ManageRoomUseCase<S> {
    store: Arc<S>,
    audit: Arc<dyn AuditLogger>,
}

impl<S: DocumentStore> ManageRoomUseCase<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self {
            store,
            audit: Arc::new(NoAuditLogger),
        }
    }

    pub fn with_audit(mut self, audit: Arc<dyn AuditLogger>) -> Self {
        self.audit = audit;
        self
    }

    /// Flip the room's voting state. Opening *and* closing both invalidate
    /// any prior winner announcement.
    pub async fn toggle_voting(
        &self,
        room_id: &str,
        acting_user: &str,
    ) -> Result<Room, OperationError> {
        let mut room = self.owned_room(room_id, acting_user).await?;
        room.toggle_voting();
        self.store.put_room(&room).await?;

        info!(room_id = %room.id, open = room.is_voting_open, "voting toggled");
        self.audit.log(AuditEvent::new(
            "voting_toggled",
            json!({ "roomId": room.id, "isVotingOpen": room.is_voting_open }),
        ));
        Ok(room)
    }

    /// Edit the room's topic and lecture time. No quota interaction, no
    /// effect on voting state.
    pub async fn update_details(
        &self,
        room_id: &str,
        acting_user: &str,
        topic: &str,
        lecture_time: &str,
    ) -> Result<Room, OperationError> {
        let mut room = self.owned_room(room_id, acting_user).await?;
        room.update_details(topic, lecture_time);
        self.store.put_room(&room).await?;
        info!(room_id = %room.id, "room details updated");
        Ok(room)
    }

    /// Delete a single participant's vote (admin moderation).
    pub async fn remove_vote(
        &self,
        room_id: &str,
        acting_user: &str,
        voter_id: &str,
    ) -> Result<(), OperationError> {
        let room = self.owned_room(room_id, acting_user).await?;
        self.store.delete_vote(&room.id, voter_id).await?;

        info!(room_id = %room.id, voter = voter_id, "vote removed");
        self.audit.log(AuditEvent::new(
            "vote_removed",
            json!({ "roomId": room.id, "voterId": voter_id }),
        ));
        Ok(())
    }

    /// Owner-initiated delete: removes the room and cascades to its live
    /// and archived votes.
    pub async fn delete_room(
        &self,
        room_id: &str,
        acting_user: &str,
    ) -> Result<(), OperationError> {
        let room = self.owned_room(room_id, acting_user).await?;
        self.store.delete_room(&room.id).await?;

        info!(room_id = %room.id, "room deleted");
        self.audit.log(AuditEvent::new(
            "room_deleted",
            json!({ "roomId": room.id }),
        ));
        Ok(())
    }

    async fn owned_room(&self, room_id: &str, acting_user: &str) -> Result<Room, OperationError> {
        let profile = shared::load_admin(self.store.as_ref(), acting_user).await?;
        let room = shared::load_room(self.store.as_ref(), room_id).await?;
        shared::ensure_owner(&room, &profile)?;
        Ok(room)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::use_cases::support::{FakeStore, admin, room};
    use agora_domain::{EngineError, Vote};
    use chrono::Utc;

    fn seeded() -> (Arc<FakeStore>, ManageRoomUseCase<FakeStore>) {
        let now = Utc::now();
        let store = Arc::new(FakeStore::new());
        store.seed_profile(admin("admin-1", now));
        store.seed_profile(admin("admin-2", now));
        store.seed_room(room("room-1", "AB12CD", "admin-1", now));
        let use_case = ManageRoomUseCase::new(Arc::clone(&store));
        (store, use_case)
    }

    #[tokio::test]
    async fn test_toggle_persists_and_clears_winner() {
        let (store, use_case) = seeded();
        let mut announced = store.stored_room("room-1").unwrap();
        announced.winner_announced = true;
        announced.winner_option = Some("Attend Class".to_string());
        store.seed_room(announced);

        let room = use_case.toggle_voting("room-1", "admin-1").await.unwrap();
        assert!(!room.is_voting_open);
        assert!(!room.winner_announced);
        assert_eq!(room.winner_option, None);
        assert_eq!(store.stored_room("room-1").unwrap(), room);
    }

    #[tokio::test]
    async fn test_update_details() {
        let (store, use_case) = seeded();
        let room = use_case
            .update_details("room-1", "admin-1", "Databases", "Mon 9:00")
            .await
            .unwrap();
        assert_eq!(room.topic, "Databases");
        assert_eq!(store.stored_room("room-1").unwrap().lecture_time, "Mon 9:00");
    }

    #[tokio::test]
    async fn test_remove_vote() {
        let (store, use_case) = seeded();
        store.seed_vote(Vote::new("room-1", "voter-1", "Attend Class", Utc::now()));
        store.seed_vote(Vote::new("room-1", "voter-2", "Bunk Class", Utc::now()));

        use_case
            .remove_vote("room-1", "admin-1", "voter-1")
            .await
            .unwrap();

        assert_eq!(store.live_vote_count("room-1"), 1);
    }

    #[tokio::test]
    async fn test_delete_room_cascades() {
        let (store, use_case) = seeded();
        store.seed_vote(Vote::new("room-1", "voter-1", "Attend Class", Utc::now()));

        use_case.delete_room("room-1", "admin-1").await.unwrap();

        assert!(store.stored_room("room-1").is_none());
        assert_eq!(store.live_vote_count("room-1"), 0);
    }

    #[tokio::test]
    async fn test_non_owner_admin_is_denied() {
        let (store, use_case) = seeded();
        let err = use_case.toggle_voting("room-1", "admin-2").await.unwrap_err();
        assert_eq!(err.rejection(), Some(&EngineError::PermissionDenied));
        // Untouched.
        assert!(store.stored_room("room-1").unwrap().is_voting_open);
    }
}
