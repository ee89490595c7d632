//! Refill Quota use case
//!
//! Models a quota grant: the admin's daily count is reset to zero, giving
//! them the full allowance again. How the grant is paid for (if at all) is
//! outside the engine.

use super::OperationError;
use crate::config::EngineConfig;
use crate::ports::store::DocumentStore;
use agora_domain::UserProfile;
use std::sync::Arc;
use tracing::info;

/// Use case for granting an admin a fresh set of session starts
pub struct RefillQuotaUseCase<S> {
    store: Arc<S>,
    config: EngineConfig,
}

impl<S: DocumentStore> RefillQuotaUseCase<S> {
    pub fn new(store: Arc<S>, config: EngineConfig) -> Self {
        Self { store, config }
    }

    /// Reset the profile's count and return the restored allowance.
    pub async fn execute(&self, user_id: &str) -> Result<u32, OperationError> {
        let profile = self.store.profile(user_id).await?;
        let quota = self.config.quota();

        // The timestamp stays put: a zero count is effective on any day.
        let updated = UserProfile {
            daily_vote_count: quota.grant(),
            ..profile
        };
        self.store.put_profile(&updated).await?;

        info!(user = user_id, "quota refilled");
        Ok(quota.limit())
    }
}
