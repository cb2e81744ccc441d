//! Listener interface for per-identifier event notification
//!
//! Generation is decoupled from any global event bus: a listener is
//! registered explicitly on the generator and only consulted when the
//! `emit_events` option is enabled.

/// Event name passed to the listener for every generated identifier
pub const EVENT_ID_GENERATED: &str = "id.generated";

/// Sink notified synchronously after each identifier is generated
pub trait IdListener: Send + Sync {
    fn on_id(&self, event: &str, id: u128);
}
