//! Document store port
//!
//! The engine runs against an abstract document store: profiles, rooms,
//! and per-room vote collections, with two multi-write commits for the
//! operations that must be all-or-nothing. Implementations (adapters)
//! live in the infrastructure layer.

use agora_domain::{ArchivedVote, Room, RoomCode, UserProfile, Vote};
use async_trait::async_trait;
use thiserror::Error;

/// Errors surfaced by the document store.
///
/// The store either fully succeeds or fully fails before reaching engine
/// logic; transient-failure retries are the adapter's concern, never the
/// engine's.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("document not found")]
    NotFound,

    #[error("the store denied access to the document")]
    PermissionDenied,

    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// The abstract document store the engine runs against.
///
/// Vote documents are keyed by `(room_id, voter_id)`; archived votes live in
/// a separate room-scoped namespace and are never read back by the live
/// engine. The two `commit_*` methods are the store's multi-write
/// transaction primitive: each is committed as a single all-or-nothing unit.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    // --- profiles ---

    async fn profile(&self, user_id: &str) -> Result<UserProfile, StoreError>;

    async fn put_profile(&self, profile: &UserProfile) -> Result<(), StoreError>;

    // --- rooms ---

    async fn room(&self, room_id: &str) -> Result<Room, StoreError>;

    /// Look a room up by its join code.
    async fn room_by_code(&self, code: &RoomCode) -> Result<Room, StoreError>;

    /// All rooms owned by `owner_id`, for the admin dashboard.
    async fn rooms_owned_by(&self, owner_id: &str) -> Result<Vec<Room>, StoreError>;

    async fn put_room(&self, room: &Room) -> Result<(), StoreError>;

    /// Delete a room, cascading to its live and archived votes.
    async fn delete_room(&self, room_id: &str) -> Result<(), StoreError>;

    // --- votes ---

    /// The voter's vote in this room, if any. Absence is a normal outcome,
    /// not an error: it is what permits a first cast.
    async fn vote(&self, room_id: &str, voter_id: &str) -> Result<Option<Vote>, StoreError>;

    async fn put_vote(&self, vote: &Vote) -> Result<(), StoreError>;

    async fn delete_vote(&self, room_id: &str, voter_id: &str) -> Result<(), StoreError>;

    async fn votes(&self, room_id: &str) -> Result<Vec<Vote>, StoreError>;

    async fn archived_votes(&self, room_id: &str) -> Result<Vec<ArchivedVote>, StoreError>;

    // --- atomic units ---

    /// Persist a fresh room together with the owner's quota increment as
    /// one unit: both writes land or neither does.
    async fn commit_room_creation(
        &self,
        room: &Room,
        profile: &UserProfile,
    ) -> Result<(), StoreError>;

    /// Archive every live vote of the room, clear the live ledger, and
    /// persist the admin's quota increment, all as one unit. Returns the
    /// number of votes archived (zero is valid — the quota is still spent).
    async fn commit_session_reset(
        &self,
        room_id: &str,
        profile: &UserProfile,
    ) -> Result<usize, StoreError>;
}
