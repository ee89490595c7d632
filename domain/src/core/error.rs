//! Domain error types

use thiserror::Error;

/// Engine-level errors.
///
/// Every rejection carries a human-readable reason distinguishing "you
/// already acted" from "the action is currently disallowed" from "limits
/// reached", so a presentation layer can render distinct messaging without
/// reinterpreting error codes.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("daily session-start limit of {limit} reached")]
    QuotaExceeded { limit: u32 },

    #[error("you have already voted in this session")]
    AlreadyVoted,

    #[error("the admin has closed voting for this room")]
    VotingClosed,

    #[error("\"{0}\" is not one of this room's voting options")]
    InvalidOption(String),

    #[error("cannot announce a result with zero votes")]
    NoVotesCast,

    #[error("this room does not exist or you do not have permission to view it")]
    RoomNotFound,

    #[error("you do not have permission to perform this action")]
    PermissionDenied,
}

impl EngineError {
    /// Check whether this error is terminal for the requested operation
    /// (as opposed to an expected, user-recoverable rejection).
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            EngineError::RoomNotFound | EngineError::PermissionDenied
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejections_are_not_terminal() {
        assert!(!EngineError::QuotaExceeded { limit: 3 }.is_terminal());
        assert!(!EngineError::AlreadyVoted.is_terminal());
        assert!(!EngineError::VotingClosed.is_terminal());
        assert!(!EngineError::NoVotesCast.is_terminal());
    }

    #[test]
    fn test_store_level_errors_are_terminal() {
        assert!(EngineError::RoomNotFound.is_terminal());
        assert!(EngineError::PermissionDenied.is_terminal());
    }

    #[test]
    fn test_messages_are_distinct() {
        let already = EngineError::AlreadyVoted.to_string();
        let closed = EngineError::VotingClosed.to_string();
        let quota = EngineError::QuotaExceeded { limit: 3 }.to_string();
        assert_ne!(already, closed);
        assert_ne!(closed, quota);
        assert!(quota.contains('3'));
    }
}
