//! Room entity

use super::code::RoomCode;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Topic shown until the admin edits the room details.
pub const DEFAULT_TOPIC: &str = "Undecided";

/// Lecture time shown until the admin edits the room details.
pub const DEFAULT_LECTURE_TIME: &str = "Not set";

/// A single vote session, owned by one admin.
///
/// Created on behalf of an admin with voting open and no winner; mutated by
/// the lifecycle operations (toggle, edit, reset) and by winner resolution.
/// The engine never deletes a room except through an explicit owner-initiated
/// delete, which cascades to the room's votes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    pub id: String,
    pub code: RoomCode,
    pub owner_id: String,
    pub is_voting_open: bool,
    pub topic: String,
    pub lecture_time: String,
    pub winner_announced: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub winner_option: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Room {
    /// Create a fresh room: voting open, default details, no winner.
    pub fn new(
        id: impl Into<String>,
        code: RoomCode,
        owner_id: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            code,
            owner_id: owner_id.into(),
            is_voting_open: true,
            topic: DEFAULT_TOPIC.to_string(),
            lecture_time: DEFAULT_LECTURE_TIME.to_string(),
            winner_announced: false,
            winner_option: None,
            created_at,
        }
    }

    /// Flip the voting state.
    ///
    /// Turning voting on *or* off always invalidates any prior announcement:
    /// `winner_announced` is forced to false and the winner cleared.
    pub fn toggle_voting(&mut self) {
        self.is_voting_open = !self.is_voting_open;
        self.winner_announced = false;
        self.winner_option = None;
    }

    /// Update the editable details. No effect on voting state or quota.
    pub fn update_details(&mut self, topic: impl Into<String>, lecture_time: impl Into<String>) {
        self.topic = topic.into();
        self.lecture_time = lecture_time.into();
    }

    /// Check whether `user_id` owns this room.
    pub fn is_owned_by(&self, user_id: &str) -> bool {
        self.owner_id == user_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn room() -> Room {
        Room::new(
            "room-1",
            RoomCode::try_parse("AB12CD").unwrap(),
            "admin-1",
            Utc::now(),
        )
    }

    #[test]
    fn test_new_room_defaults() {
        let room = room();
        assert!(room.is_voting_open);
        assert!(!room.winner_announced);
        assert_eq!(room.winner_option, None);
        assert_eq!(room.topic, DEFAULT_TOPIC);
        assert_eq!(room.lecture_time, DEFAULT_LECTURE_TIME);
    }

    #[test]
    fn test_toggle_clears_winner_in_both_directions() {
        let mut room = room();
        room.winner_announced = true;
        room.winner_option = Some("Attend Class".to_string());

        // open -> closed
        room.toggle_voting();
        assert!(!room.is_voting_open);
        assert!(!room.winner_announced);
        assert_eq!(room.winner_option, None);

        room.winner_announced = true;
        room.winner_option = Some("Bunk Class".to_string());

        // closed -> open
        room.toggle_voting();
        assert!(room.is_voting_open);
        assert!(!room.winner_announced);
        assert_eq!(room.winner_option, None);
    }

    #[test]
    fn test_update_details_leaves_voting_state_alone() {
        let mut room = room();
        room.toggle_voting();
        room.update_details("Databases", "Mon 9:00");
        assert_eq!(room.topic, "Databases");
        assert_eq!(room.lecture_time, "Mon 9:00");
        assert!(!room.is_voting_open);
    }

    #[test]
    fn test_ownership() {
        let room = room();
        assert!(room.is_owned_by("admin-1"));
        assert!(!room.is_owned_by("someone-else"));
    }

    #[test]
    fn test_serde_uses_camel_case_fields() {
        let json = serde_json::to_value(room()).unwrap();
        assert!(json.get("isVotingOpen").is_some());
        assert!(json.get("ownerId").is_some());
        assert!(json.get("winnerAnnounced").is_some());
        assert!(json.get("createdAt").is_some());
        // absent winner is omitted entirely
        assert!(json.get("winnerOption").is_none());
    }
}
