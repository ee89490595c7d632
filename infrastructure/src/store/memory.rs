//! In-memory document store

use agora_application::ports::store::{DocumentStore, StoreError};
use agora_domain::{ArchivedVote, Room, RoomCode, UserProfile, Vote};
use async_trait::async_trait;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

#[derive(Debug, Default, Clone)]
struct State {
    profiles: BTreeMap<String, UserProfile>,
    rooms: BTreeMap<String, Room>,
    votes: BTreeMap<String, BTreeMap<String, Vote>>,
    archived_votes: BTreeMap<String, BTreeMap<String, ArchivedVote>>,
}

/// Process-local [`DocumentStore`] adapter.
///
/// All state lives behind one `RwLock`, so the multi-write commits are
/// trivially all-or-nothing: every write within a commit happens under a
/// single write guard.
#[derive(Debug, Default)]
pub struct InMemoryDocumentStore {
    state: RwLock<State>,
}

impl InMemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DocumentStore for InMemoryDocumentStore {
    async fn profile(&self, user_id: &str) -> Result<UserProfile, StoreError> {
        self.state
            .read()
            .await
            .profiles
            .get(user_id)
            .cloned()
            .ok_or(StoreError::NotFound)
    }

    async fn put_profile(&self, profile: &UserProfile) -> Result<(), StoreError> {
        let mut state = self.state.write().await;
        state.profiles.insert(profile.id.clone(), profile.clone());
        Ok(())
    }

    async fn room(&self, room_id: &str) -> Result<Room, StoreError> {
        self.state
            .read()
            .await
            .rooms
            .get(room_id)
            .cloned()
            .ok_or(StoreError::NotFound)
    }

    async fn room_by_code(&self, code: &RoomCode) -> Result<Room, StoreError> {
        self.state
            .read()
            .await
            .rooms
            .values()
            .find(|r| r.code == *code)
            .cloned()
            .ok_or(StoreError::NotFound)
    }

    async fn rooms_owned_by(&self, owner_id: &str) -> Result<Vec<Room>, StoreError> {
        Ok(self
            .state
            .read()
            .await
            .rooms
            .values()
            .filter(|r| r.is_owned_by(owner_id))
            .cloned()
            .collect())
    }

    async fn put_room(&self, room: &Room) -> Result<(), StoreError> {
        let mut state = self.state.write().await;
        state.rooms.insert(room.id.clone(), room.clone());
        Ok(())
    }

    async fn delete_room(&self, room_id: &str) -> Result<(), StoreError> {
        let mut state = self.state.write().await;
        state.rooms.remove(room_id).ok_or(StoreError::NotFound)?;
        state.votes.remove(room_id);
        state.archived_votes.remove(room_id);
        Ok(())
    }

    async fn vote(&self, room_id: &str, voter_id: &str) -> Result<Option<Vote>, StoreError> {
        Ok(self
            .state
            .read()
            .await
            .votes
            .get(room_id)
            .and_then(|votes| votes.get(voter_id))
            .cloned())
    }

    async fn put_vote(&self, vote: &Vote) -> Result<(), StoreError> {
        let mut state = self.state.write().await;
        state
            .votes
            .entry(vote.room_id.clone())
            .or_default()
            .insert(vote.voter_id.clone(), vote.clone());
        Ok(())
    }

    async fn delete_vote(&self, room_id: &str, voter_id: &str) -> Result<(), StoreError> {
        self.state
            .write()
            .await
            .votes
            .get_mut(room_id)
            .and_then(|votes| votes.remove(voter_id))
            .map(|_| ())
            .ok_or(StoreError::NotFound)
    }

    async fn votes(&self, room_id: &str) -> Result<Vec<Vote>, StoreError> {
        Ok(self
            .state
            .read()
            .await
            .votes
            .get(room_id)
            .map(|votes| votes.values().cloned().collect())
            .unwrap_or_default())
    }

    async fn archived_votes(&self, room_id: &str) -> Result<Vec<ArchivedVote>, StoreError> {
        Ok(self
            .state
            .read()
            .await
            .archived_votes
            .get(room_id)
            .map(|votes| votes.values().cloned().collect())
            .unwrap_or_default())
    }

    async fn commit_room_creation(
        &self,
        room: &Room,
        profile: &UserProfile,
    ) -> Result<(), StoreError> {
        let mut state = self.state.write().await;
        state.rooms.insert(room.id.clone(), room.clone());
        state.profiles.insert(profile.id.clone(), profile.clone());
        Ok(())
    }

    async fn commit_session_reset(
        &self,
        room_id: &str,
        profile: &UserProfile,
    ) -> Result<usize, StoreError> {
        let mut state = self.state.write().await;
        if !state.rooms.contains_key(room_id) {
            return Err(StoreError::NotFound);
        }
        let live = state.votes.remove(room_id).unwrap_or_default();
        let archived = live.len();
        let archive = state.archived_votes.entry(room_id.to_string()).or_default();
        for (voter_id, vote) in live {
            archive.insert(voter_id, ArchivedVote::from(vote));
        }
        state.profiles.insert(profile.id.clone(), profile.clone());
        Ok(archived)
    }
}
