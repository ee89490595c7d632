//! Helpers shared by the use cases

use super::OperationError;
use crate::ports::store::{DocumentStore, StoreError};
use agora_domain::{EngineError, Room, UserProfile};

/// Fetch a room, translating the store's missing-document error into the
/// user-facing `RoomNotFound` rejection.
pub(crate) async fn load_room<S: DocumentStore + ?Sized>(
    store: &S,
    room_id: &str,
) -> Result<Room, OperationError> {
    match store.room(room_id).await {
        Ok(room) => Ok(room),
        Err(StoreError::NotFound) => Err(EngineError::RoomNotFound.into()),
        Err(e) => Err(e.into()),
    }
}

/// Fetch the acting user's profile and require the admin role.
///
/// A missing profile reads as `PermissionDenied`, same as a non-admin one:
/// the caller has no business knowing which.
pub(crate) async fn load_admin<S: DocumentStore + ?Sized>(
    store: &S,
    user_id: &str,
) -> Result<UserProfile, OperationError> {
    let profile = match store.profile(user_id).await {
        Ok(profile) => profile,
        Err(StoreError::NotFound) => return Err(EngineError::PermissionDenied.into()),
        Err(e) => return Err(e.into()),
    };
    if !profile.is_admin() {
        return Err(EngineError::PermissionDenied.into());
    }
    Ok(profile)
}

/// Require that the admin owns the room.
pub(crate) fn ensure_owner(room: &Room, profile: &UserProfile) -> Result<(), OperationError> {
    if !room.is_owned_by(&profile.id) {
        return Err(EngineError::PermissionDenied.into());
    }
    Ok(())
}
