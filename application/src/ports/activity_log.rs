//! Port for the structured activity journal.
//!
//! Defines the [`ActivityLogger`] trait for recording what the bot did
//! (logins, drafts, published posts, account actions) as machine-readable
//! records.
//!
//! This is separate from `tracing`-based operation logs: tracing handles
//! human-readable diagnostics, while this port keeps an audit trail of
//! account activity.

use serde_json::Value;

/// A structured activity event.
///
/// Each event has a type string and a JSON payload with event-specific fields.
pub struct ActivityEvent {
    /// Event type identifier (e.g., "login", "action", "post_published").
    pub event_type: &'static str,
    /// JSON payload with event-specific data.
    pub payload: Value,
}

impl ActivityEvent {
    pub fn new(event_type: &'static str, payload: Value) -> Self {
        Self {
            event_type,
            payload,
        }
    }
}

/// Port for logging activity events.
///
/// The `log` method is synchronous and non-fallible: a journal failure must
/// never interrupt an account action.
pub trait ActivityLogger: Send + Sync {
    fn log(&self, event: ActivityEvent);
}

/// No-op implementation for tests and when the journal is disabled.
pub struct NoActivityLogger;

impl ActivityLogger for NoActivityLogger {
    fn log(&self, _event: ActivityEvent) {}
}
