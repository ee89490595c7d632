//! Daily session-start quota
//!
//! A "session start" is creating a room or resetting its votes. Each admin
//! gets a fixed number per calendar day. The tracker is a pure decision
//! function: it computes outcomes from `(profile, now)` and leaves every
//! mutation to the caller, which persists the new count together with the
//! quota-consuming state change as one atomic unit.

use crate::core::error::EngineError;
use crate::profile::UserProfile;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Default number of session starts per admin per calendar day.
pub const DEFAULT_SESSION_START_LIMIT: u32 = 3;

/// Pure decision logic for the per-admin daily session-start cap.
///
/// # Example
///
/// ```
/// use agora_domain::{QuotaTracker, Role, UserProfile};
/// use chrono::Utc;
///
/// let quota = QuotaTracker::default();
/// let now = Utc::now();
/// let profile = UserProfile::new("admin", Role::Admin, now);
///
/// assert_eq!(quota.current_count(&profile, now), 0);
/// assert_eq!(quota.consume(&profile, now).unwrap(), 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuotaTracker {
    limit: u32,
}

impl Default for QuotaTracker {
    fn default() -> Self {
        Self {
            limit: DEFAULT_SESSION_START_LIMIT,
        }
    }
}

impl QuotaTracker {
    pub fn new(limit: u32) -> Self {
        Self { limit }
    }

    pub fn limit(&self) -> u32 {
        self.limit
    }

    /// The *effective* daily count.
    ///
    /// If the profile's last quota timestamp falls on the same UTC calendar
    /// day as `now`, the stored count applies; otherwise the day has rolled
    /// over and the effective count is zero. The rollover needs no explicit
    /// write — the reset is materialized lazily on the next consumption.
    pub fn current_count(&self, profile: &UserProfile, now: DateTime<Utc>) -> u32 {
        if profile.last_quota_timestamp.date_naive() == now.date_naive() {
            profile.daily_vote_count
        } else {
            0
        }
    }

    /// Session starts left today.
    pub fn remaining(&self, profile: &UserProfile, now: DateTime<Utc>) -> u32 {
        self.limit.saturating_sub(self.current_count(profile, now))
    }

    /// Decide a consumption: the new count to persist, or `QuotaExceeded`.
    ///
    /// Performs no mutation. On success the caller persists the returned
    /// count together with `last_quota_timestamp = now`.
    pub fn consume(
        &self,
        profile: &UserProfile,
        now: DateTime<Utc>,
    ) -> Result<u32, EngineError> {
        let current = self.current_count(profile, now);
        if current >= self.limit {
            return Err(EngineError::QuotaExceeded { limit: self.limit });
        }
        Ok(current + 1)
    }

    /// Decide a refill: the count to persist after a grant. Always zero.
    pub fn grant(&self) -> u32 {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::Role;
    use chrono::{Duration, TimeZone};

    fn profile_with(count: u32, at: DateTime<Utc>) -> UserProfile {
        UserProfile {
            id: "admin".to_string(),
            role: Role::Admin,
            daily_vote_count: count,
            last_quota_timestamp: at,
        }
    }

    #[test]
    fn test_same_day_count_applies() {
        let quota = QuotaTracker::default();
        let now = Utc.with_ymd_and_hms(2026, 8, 7, 15, 0, 0).unwrap();
        let profile = profile_with(2, now - Duration::hours(3));
        assert_eq!(quota.current_count(&profile, now), 2);
        assert_eq!(quota.remaining(&profile, now), 1);
    }

    #[test]
    fn test_stale_count_from_prior_day_is_zero() {
        let quota = QuotaTracker::default();
        let now = Utc.with_ymd_and_hms(2026, 8, 7, 0, 30, 0).unwrap();
        let profile = profile_with(3, now - Duration::hours(2)); // yesterday
        assert_eq!(quota.current_count(&profile, now), 0);
        assert_eq!(quota.remaining(&profile, now), 3);
    }

    #[test]
    fn test_consume_succeeds_below_limit_and_fails_at_limit() {
        let quota = QuotaTracker::default();
        let now = Utc::now();
        for count in 0..3 {
            let profile = profile_with(count, now);
            assert_eq!(quota.consume(&profile, now).unwrap(), count + 1);
        }
        let profile = profile_with(3, now);
        assert_eq!(
            quota.consume(&profile, now),
            Err(EngineError::QuotaExceeded { limit: 3 })
        );
    }

    #[test]
    fn test_consume_after_rollover_starts_from_zero() {
        let quota = QuotaTracker::default();
        let now = Utc.with_ymd_and_hms(2026, 8, 7, 9, 0, 0).unwrap();
        let profile = profile_with(3, now - Duration::days(1));
        assert_eq!(quota.consume(&profile, now).unwrap(), 1);
    }

    #[test]
    fn test_grant_resets_to_zero() {
        let quota = QuotaTracker::new(5);
        assert_eq!(quota.grant(), 0);
        assert_eq!(quota.limit(), 5);
    }
}
