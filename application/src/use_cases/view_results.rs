//! View Results use case
//!
//! The engine's plain query operations. A push layer re-invokes these on
//! every store change notification to feed live views; the engine itself
//! holds no subscription state.

use super::shared;
use super::OperationError;
use crate::config::EngineConfig;
use crate::ports::store::{DocumentStore, StoreError};
use agora_domain::{EngineError, Room, RoomCode, SeriesPoint, Tally, Vote, ledger};
use std::sync::Arc;

/// A consistent snapshot of a room's live results.
#[derive(Debug, Clone)]
pub struct RoomResults {
    pub room: Room,
    pub tally: Tally,
    pub series: Vec<SeriesPoint>,
    pub votes: Vec<Vote>,
}

impl RoomResults {
    pub fn total_votes(&self) -> u64 {
        self.tally.total()
    }
}

/// Use case for the read-only room queries
pub struct ViewResultsUseCase<S> {
    store: Arc<S>,
    config: EngineConfig,
}

impl<S: DocumentStore> ViewResultsUseCase<S> {
    pub fn new(store: Arc<S>, config: EngineConfig) -> Self {
        Self { store, config }
    }

    /// Tally, cumulative series, and participant votes for a room.
    pub async fn results(&self, room_id: &str) -> Result<RoomResults, OperationError> {
        let room = shared::load_room(self.store.as_ref(), room_id).await?;
        let votes = self.store.votes(&room.id).await?;
        let options = self.config.options();

        Ok(RoomResults {
            tally: Tally::of(&votes, &options),
            series: ledger::cumulative_series(&votes, &options),
            room,
            votes,
        })
    }

    /// Join-by-code lookup. Input is normalized the way participants type
    /// codes: surrounding whitespace and lowercase are tolerated.
    pub async fn room_by_code(&self, input: &str) -> Result<Room, OperationError> {
        let code = RoomCode::try_parse(input).ok_or(EngineError::RoomNotFound)?;
        match self.store.room_by_code(&code).await {
            Ok(room) => Ok(room),
            Err(StoreError::NotFound) => Err(EngineError::RoomNotFound.into()),
            Err(e) => Err(e.into()),
        }
    }

    /// All rooms owned by an admin, for the dashboard listing.
    pub async fn rooms_owned_by(&self, owner_id: &str) -> Result<Vec<Room>, OperationError> {
        Ok(self.store.rooms_owned_by(owner_id).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::use_cases::support::{FakeStore, room};
    use chrono::{Duration, Utc};

    fn use_case(store: Arc<FakeStore>) -> ViewResultsUseCase<FakeStore> {
        ViewResultsUseCase::new(store, EngineConfig::default())
    }

    #[tokio::test]
    async fn test_results_snapshot() {
        let now = Utc::now();
        let store = Arc::new(FakeStore::new());
        store.seed_room(room("room-1", "AB12CD", "admin-1", now));
        store.seed_vote(Vote::new("room-1", "v1", "Attend Class", now));
        store.seed_vote(Vote::new(
            "room-1",
            "v2",
            "Attend Class",
            now + Duration::seconds(5),
        ));

        let results = use_case(store).results("room-1").await.unwrap();

        assert_eq!(results.total_votes(), 2);
        assert_eq!(results.tally.count("Attend Class"), 2);
        assert_eq!(results.tally.count("Bunk Class"), 0);
        assert_eq!(results.series.len(), 2);
        assert_eq!(results.votes.len(), 2);
    }

    #[tokio::test]
    async fn test_missing_room_is_room_not_found() {
        let store = Arc::new(FakeStore::new());
        let err = use_case(store).results("nowhere").await.unwrap_err();
        assert_eq!(err.rejection(), Some(&EngineError::RoomNotFound));
    }

    #[tokio::test]
    async fn test_room_by_code_normalizes_input() {
        let now = Utc::now();
        let store = Arc::new(FakeStore::new());
        store.seed_room(room("room-1", "AB12CD", "admin-1", now));

        let found = use_case(store).room_by_code(" ab12cd ").await.unwrap();
        assert_eq!(found.id, "room-1");
    }

    #[tokio::test]
    async fn test_room_by_code_rejects_malformed_codes_as_not_found() {
        let store = Arc::new(FakeStore::new());
        let err = use_case(store).room_by_code("!!!").await.unwrap_err();
        assert_eq!(err.rejection(), Some(&EngineError::RoomNotFound));
    }

    #[tokio::test]
    async fn test_rooms_owned_by() {
        let now = Utc::now();
        let store = Arc::new(FakeStore::new());
        store.seed_room(room("room-1", "AB12CD", "admin-1", now));
        store.seed_room(room("room-2", "EF34GH", "admin-1", now));
        store.seed_room(room("room-3", "JK56LM", "admin-2", now));

        let rooms = use_case(store).rooms_owned_by("admin-1").await.unwrap();
        assert_eq!(rooms.len(), 2);
    }
}
