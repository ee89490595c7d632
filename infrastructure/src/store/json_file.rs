//! JSON-file document store
//!
//! Persists the whole document tree as one pretty-printed JSON file. Every
//! mutation rewrites the file through a temp-file-and-rename, so a crash
//! mid-write never leaves a torn state on disk — this is the store-level
//! primitive the engine's atomic commits rely on.

use agora_application::ports::store::{DocumentStore, StoreError};
use agora_domain::{ArchivedVote, Room, RoomCode, UserProfile, Vote};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tokio::sync::RwLock;
use tracing::debug;

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(default)]
struct StoreState {
    profiles: BTreeMap<String, UserProfile>,
    rooms: BTreeMap<String, Room>,
    votes: BTreeMap<String, BTreeMap<String, Vote>>,
    archived_votes: BTreeMap<String, BTreeMap<String, ArchivedVote>>,
}

/// File-backed [`DocumentStore`] adapter.
///
/// The state is held in memory behind an `RwLock` and flushed on every
/// mutation. Mutations run against a copy: only once the copy has been
/// persisted does it replace the in-memory state, so a failed write leaves
/// both disk and memory untouched.
pub struct JsonFileDocumentStore {
    path: PathBuf,
    state: RwLock<StoreState>,
}

impl JsonFileDocumentStore {
    /// Open the store at `path`, creating parent directories as needed.
    /// A missing file starts empty; it is created on the first commit.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(unavailable)?;
        }

        let state = if path.exists() {
            let raw = fs::read_to_string(&path).map_err(unavailable)?;
            serde_json::from_str(&raw).map_err(unavailable)?
        } else {
            StoreState::default()
        };

        debug!(path = %path.display(), "opened document store");
        Ok(Self {
            path,
            state: RwLock::new(state),
        })
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Run a mutation as one unit: mutate a copy, persist it, then swap it
    /// in. Nothing changes anywhere unless the persist succeeded.
    async fn mutate<T>(
        &self,
        f: impl FnOnce(&mut StoreState) -> Result<T, StoreError>,
    ) -> Result<T, StoreError> {
        let mut guard = self.state.write().await;
        let mut next = guard.clone();
        let out = f(&mut next)?;
        persist(&self.path, &next)?;
        *guard = next;
        Ok(out)
    }
}

fn persist(path: &Path, state: &StoreState) -> Result<(), StoreError> {
    let json = serde_json::to_string_pretty(state).map_err(unavailable)?;
    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, json).map_err(unavailable)?;
    fs::rename(&tmp, path).map_err(unavailable)?;
    Ok(())
}

fn unavailable(e: impl std::fmt::Display) -> StoreError {
    StoreError::Unavailable(e.to_string())
}

#[async_trait]
impl DocumentStore for JsonFileDocumentStore {
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
        self.mutate(|state| {
            state.profiles.insert(profile.id.clone(), profile.clone());
            Ok(())
        })
        .await
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
        self.mutate(|state| {
            state.rooms.insert(room.id.clone(), room.clone());
            Ok(())
        })
        .await
    }

    async fn delete_room(&self, room_id: &str) -> Result<(), StoreError> {
        self.mutate(|state| {
            state.rooms.remove(room_id).ok_or(StoreError::NotFound)?;
            state.votes.remove(room_id);
            state.archived_votes.remove(room_id);
            Ok(())
        })
        .await
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
        self.mutate(|state| {
            state
                .votes
                .entry(vote.room_id.clone())
                .or_default()
                .insert(vote.voter_id.clone(), vote.clone());
            Ok(())
        })
        .await
    }

    async fn delete_vote(&self, room_id: &str, voter_id: &str) -> Result<(), StoreError> {
        self.mutate(|state| {
            state
                .votes
                .get_mut(room_id)
                .and_then(|votes| votes.remove(voter_id))
                .map(|_| ())
                .ok_or(StoreError::NotFound)
        })
        .await
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
        self.mutate(|state| {
            state.rooms.insert(room.id.clone(), room.clone());
            state.profiles.insert(profile.id.clone(), profile.clone());
            Ok(())
        })
        .await
    }

    async fn commit_session_reset(
        &self,
        room_id: &str,
        profile: &UserProfile,
    ) -> Result<usize, StoreError> {
        self.mutate(|state| {
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
        })
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use agora_domain::Role;
    use chrono::Utc;

    fn room(id: &str, code: &str, owner: &str) -> Room {
        Room::new(id, RoomCode::try_parse(code).unwrap(), owner, Utc::now())
    }

    #[tokio::test]
    async fn test_state_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");
        let now = Utc::now();

        {
            let store = JsonFileDocumentStore::open(&path).unwrap();
            store.put_room(&room("r1", "AB12CD", "admin")).await.unwrap();
            store
                .put_vote(&Vote::new("r1", "v1", "Attend Class", now))
                .await
                .unwrap();
            store
                .put_profile(&UserProfile::new("admin", Role::Admin, now))
                .await
                .unwrap();
        }

        let reopened = JsonFileDocumentStore::open(&path).unwrap();
        assert_eq!(reopened.room("r1").await.unwrap().id, "r1");
        assert_eq!(reopened.votes("r1").await.unwrap().len(), 1);
        assert!(reopened.profile("admin").await.unwrap().is_admin());
    }

    #[tokio::test]
    async fn test_missing_file_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileDocumentStore::open(dir.path().join("fresh.json")).unwrap();
        assert!(matches!(store.room("r1").await, Err(StoreError::NotFound)));
    }

    #[tokio::test]
    async fn test_open_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b").join("store.json");
        let store = JsonFileDocumentStore::open(&nested).unwrap();
        store.put_room(&room("r1", "AB12CD", "admin")).await.unwrap();
        assert!(nested.exists());
    }

    #[tokio::test]
    async fn test_failed_mutation_leaves_state_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");
        let store = JsonFileDocumentStore::open(&path).unwrap();
        let now = Utc::now();
        store
            .put_profile(&UserProfile::new("admin", Role::Admin, now))
            .await
            .unwrap();

        // Reset against a missing room: the whole unit fails, including the
        // profile write bundled into it.
        let updated = UserProfile::new("admin", Role::Admin, now).with_quota(1, now);
        assert!(store.commit_session_reset("missing", &updated).await.is_err());
        assert_eq!(store.profile("admin").await.unwrap().daily_vote_count, 0);
    }

    #[tokio::test]
    async fn test_reset_roundtrip_on_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");
        let now = Utc::now();

        {
            let store = JsonFileDocumentStore::open(&path).unwrap();
            store.put_room(&room("r1", "AB12CD", "admin")).await.unwrap();
            for i in 0..2 {
                store
                    .put_vote(&Vote::new("r1", format!("v{i}"), "Bunk Class", now))
                    .await
                    .unwrap();
            }
            let profile = UserProfile::new("admin", Role::Admin, now).with_quota(1, now);
            assert_eq!(store.commit_session_reset("r1", &profile).await.unwrap(), 2);
        }

        let reopened = JsonFileDocumentStore::open(&path).unwrap();
        assert!(reopened.votes("r1").await.unwrap().is_empty());
        assert_eq!(reopened.archived_votes("r1").await.unwrap().len(), 2);
        assert_eq!(reopened.profile("admin").await.unwrap().daily_vote_count, 1);
    }
}
