//! Register Profile use case
//!
//! Bootstraps a user profile on first contact. The identity subsystem owns
//! authentication; the engine only needs the role and zeroed quota fields
//! to exist.

use super::OperationError;
use crate::ports::store::{DocumentStore, StoreError};
use agora_domain::{Role, UserProfile};
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tracing::info;

/// Use case for bootstrapping a user profile
pub struct RegisterProfileUseCase<S> {
    store: Arc<S>,
}

impl<S: DocumentStore> RegisterProfileUseCase<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Create the profile if it does not exist. Idempotent: an existing
    /// profile is returned as-is, its role untouched.
    pub async fn execute(
        &self,
        user_id: &str,
        role: Role,
        now: DateTime<Utc>,
    ) -> Result<UserProfile, OperationError> {
        match self.store.profile(user_id).await {
            Ok(existing) => Ok(existing),
            Err(StoreError::NotFound) => {
                let profile = UserProfile::new(user_id, role, now);
                self.store.put_profile(&profile).await?;
                info!(user = user_id, role = %role, "profile registered");
                Ok(profile)
            }
            Err(e) => Err(e.into()),
        }
    }
}
