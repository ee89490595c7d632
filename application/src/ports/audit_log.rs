//! Port for the structured audit trail.
//!
//! Defines the [`AuditLogger`] trait for recording committed engine events
//! (room created, vote cast, session reset, winner announced, ...) to a
//! structured log.
//!
//! This is separate from `tracing`-based operation logs: tracing handles
//! human-readable diagnostics, while this port captures a machine-readable
//! record of every committed mutation.

use serde_json::Value;

/// A structured audit event.
pub struct AuditEvent {
    /// Event type identifier (e.g., "room_created", "vote_cast").
    pub event_type: &'static str,
    /// JSON payload with event-specific fields.
    pub payload: Value,
}

impl AuditEvent {
    pub fn new(event_type: &'static str, payload: Value) -> Self {
        Self {
            event_type,
            payload,
        }
    }
}

/// Port for recording audit events.
///
/// The `log` method is intentionally synchronous and non-fallible: the
/// audit trail must never disrupt a committed operation, so write failures
/// are the adapter's problem to swallow.
pub trait AuditLogger: Send + Sync {
    fn log(&self, event: AuditEvent);
}

/// No-op implementation for tests and when auditing is disabled.
pub struct NoAuditLogger;

impl AuditLogger for NoAuditLogger {
    fn log(&self, _event: AuditEvent) {}
}
