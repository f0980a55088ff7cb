//! Outbound application events.
//!
//! The [`Monitor`](super::service::Monitor) emits these through the
//! [`EventSink`](super::ports::EventSink) port at every observable
//! transition. The stock adapter writes them to the log; they are
//! informational, not a protocol.

/// Structured events emitted by the monitor core.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEvent {
    /// Startup pattern finished; waiting for the first START/RESET press.
    Loaded,
    /// START/RESET pressed: armed and awaiting an event.
    Armed,
    /// Alert email went out. `test` distinguishes a manual TEST trigger
    /// from a genuine charger-done event.
    EmailSent { test: bool },
    /// The send failed; charger state was left unchanged.
    EmailFailed,
    /// Shutdown chord detected; terminate pattern about to play.
    ShutdownRequested,
    /// Poll loop ended. The only exit path.
    Terminated,
}
