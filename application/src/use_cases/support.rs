//! In-memory fake store and fixtures for use-case tests

use crate::ports::store::{DocumentStore, StoreError};
use agora_domain::{ArchivedVote, Role, Room, RoomCode, UserProfile, Vote};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::{BTreeMap, HashMap};
use std::sync::Mutex;

#[derive(Default)]
struct State {
    profiles: HashMap<String, UserProfile>,
    rooms: HashMap<String, Room>,
    votes: HashMap<String, BTreeMap<String, Vote>>,
    archives: HashMap<String, BTreeMap<String, ArchivedVote>>,
}

/// Hashmap-backed [`DocumentStore`] for tests. A plain mutex is enough:
/// no lock is ever held across an await point.
#[derive(Default)]
pub(crate) struct FakeStore {
    state: Mutex<State>,
}

impl FakeStore {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn seed_profile(&self, profile: UserProfile) {
        let mut state = self.state.lock().unwrap();
        state.profiles.insert(profile.id.clone(), profile);
    }

    pub(crate) fn seed_room(&self, room: Room) {
        let mut state = self.state.lock().unwrap();
        state.rooms.insert(room.id.clone(), room);
    }

    pub(crate) fn seed_vote(&self, vote: Vote) {
        let mut state = self.state.lock().unwrap();
        state
            .votes
            .entry(vote.room_id.clone())
            .or_default()
            .insert(vote.voter_id.clone(), vote);
    }

    pub(crate) fn stored_profile(&self, user_id: &str) -> Option<UserProfile> {
        self.state.lock().unwrap().profiles.get(user_id).cloned()
    }

    pub(crate) fn stored_room(&self, room_id: &str) -> Option<Room> {
        self.state.lock().unwrap().rooms.get(room_id).cloned()
    }

    pub(crate) fn live_vote_count(&self, room_id: &str) -> usize {
        self.state
            .lock()
            .unwrap()
            .votes
            .get(room_id)
            .map_or(0, BTreeMap::len)
    }

    pub(crate) fn archived_vote_count(&self, room_id: &str) -> usize {
        self.state
            .lock()
            .unwrap()
            .archives
            .get(room_id)
            .map_or(0, BTreeMap::len)
    }
}

#[async_trait]
impl DocumentStore for FakeStore {
    async fn profile(&self, user_id: &str) -> Result<UserProfile, StoreError> {
        self.state
            .lock()
            .unwrap()
            .profiles
            .get(user_id)
            .cloned()
            .ok_or(StoreError::NotFound)
    }

    async fn put_profile(&self, profile: &UserProfile) -> Result<(), StoreError> {
        self.seed_profile(profile.clone());
        Ok(())
    }

    async fn room(&self, room_id: &str) -> Result<Room, StoreError> {
        self.state
            .lock()
            .unwrap()
            .rooms
            .get(room_id)
            .cloned()
            .ok_or(StoreError::NotFound)
    }

    async fn room_by_code(&self, code: &RoomCode) -> Result<Room, StoreError> {
        self.state
            .lock()
            .unwrap()
            .rooms
            .values()
            .find(|r| r.code == *code)
            .cloned()
            .ok_or(StoreError::NotFound)
    }

    async fn rooms_owned_by(&self, owner_id: &str) -> Result<Vec<Room>, StoreError> {
        Ok(self
            .state
            .lock()
            .unwrap()
            .rooms
            .values()
            .filter(|r| r.is_owned_by(owner_id))
            .cloned()
            .collect())
    }

    async fn put_room(&self, room: &Room) -> Result<(), StoreError> {
        self.seed_room(room.clone());
        Ok(())
    }

    async fn delete_room(&self, room_id: &str) -> Result<(), StoreError> {
        let mut state = self.state.lock().unwrap();
        state.rooms.remove(room_id).ok_or(StoreError::NotFound)?;
        state.votes.remove(room_id);
        state.archives.remove(room_id);
        Ok(())
    }

    async fn vote(&self, room_id: &str, voter_id: &str) -> Result<Option<Vote>, StoreError> {
        Ok(self
            .state
            .lock()
            .unwrap()
            .votes
            .get(room_id)
            .and_then(|votes| votes.get(voter_id))
            .cloned())
    }

    async fn put_vote(&self, vote: &Vote) -> Result<(), StoreError> {
        self.seed_vote(vote.clone());
        Ok(())
    }

    async fn delete_vote(&self, room_id: &str, voter_id: &str) -> Result<(), StoreError> {
        self.state
            .lock()
            .unwrap()
            .votes
            .get_mut(room_id)
            .and_then(|votes| votes.remove(voter_id))
            .map(|_| ())
            .ok_or(StoreError::NotFound)
    }

    async fn votes(&self, room_id: &str) -> Result<Vec<Vote>, StoreError> {
        Ok(self
            .state
            .lock()
            .unwrap()
            .votes
            .get(room_id)
            .map(|votes| votes.values().cloned().collect())
            .unwrap_or_default())
    }

    async fn archived_votes(&self, room_id: &str) -> Result<Vec<ArchivedVote>, StoreError> {
        Ok(self
            .state
            .lock()
            .unwrap()
            .archives
            .get(room_id)
            .map(|votes| votes.values().cloned().collect())
            .unwrap_or_default())
    }

    async fn commit_room_creation(
        &self,
        room: &Room,
        profile: &UserProfile,
    ) -> Result<(), StoreError> {
        let mut state = self.state.lock().unwrap();
        state.rooms.insert(room.id.clone(), room.clone());
        state.profiles.insert(profile.id.clone(), profile.clone());
        Ok(())
    }

    async fn commit_session_reset(
        &self,
        room_id: &str,
        profile: &UserProfile,
    ) -> Result<usize, StoreError> {
        let mut state = self.state.lock().unwrap();
        if !state.rooms.contains_key(room_id) {
            return Err(StoreError::NotFound);
        }
        let live = state.votes.remove(room_id).unwrap_or_default();
        let archived = live.len();
        let archive = state.archives.entry(room_id.to_string()).or_default();
        for (voter_id, vote) in live {
            archive.insert(voter_id, ArchivedVote::from(vote));
        }
        state.profiles.insert(profile.id.clone(), profile.clone());
        Ok(archived)
    }
}

// --- fixtures ---

pub(crate) fn admin(id: &str, now: DateTime<Utc>) -> UserProfile {
    UserProfile::new(id, Role::Admin, now)
}

pub(crate) fn joinee(id: &str, now: DateTime<Utc>) -> UserProfile {
    UserProfile::new(id, Role::Joinee, now)
}

pub(crate) fn room(id: &str, code: &str, owner_id: &str, now: DateTime<Utc>) -> Room {
    Room::new(id, RoomCode::try_parse(code).unwrap(), owner_id, now)
}
