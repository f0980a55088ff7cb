//! Port traits — the boundary between the monitor core and the outside world.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ Monitor (domain)
//! ```
//!
//! Driven adapters (GPIO lines, SMTP mailer, log sink, system clock)
//! implement these traits. The [`Monitor`](super::service::Monitor)
//! consumes them via generics, so the control loop never touches hardware
//! or the network directly and the whole core tests on any host.

use std::time::Duration;

use crate::machine::InputSample;

// ───────────────────────────────────────────────────────────────
// Input port (driven adapter: GPIO inputs → domain)
// ───────────────────────────────────────────────────────────────

/// Read-side port: one sample of the three input lines per poll iteration.
///
/// Reads are raw — no debounce. The adapter folds away electrical
/// polarity, so `true` always means "energized" / "pressed".
pub trait InputPort {
    fn sample(&mut self) -> InputSample;
}

// ───────────────────────────────────────────────────────────────
// LED port (driven adapter: domain → GPIO output)
// ───────────────────────────────────────────────────────────────

/// Write-side port for the single status LED.
pub trait LedPort {
    /// Drive the LED line. Takes effect immediately.
    fn set(&mut self, on: bool);

    /// The most recently written level. The shutdown chord in the state
    /// machine is gated on this rather than on a second button read.
    fn is_on(&self) -> bool;
}

// ───────────────────────────────────────────────────────────────
// Notifier port (driven adapter: domain → mail relay)
// ───────────────────────────────────────────────────────────────

/// Outbound notification: one authenticated session, one message, no
/// retry. The message is fixed at adapter construction and reused
/// unchanged for every send.
pub trait NotifierPort {
    fn send_alert(&mut self) -> Result<(), NotifyError>;
}

// ───────────────────────────────────────────────────────────────
// Event sink port (driven adapter: domain → logging)
// ───────────────────────────────────────────────────────────────

/// The monitor emits structured [`AppEvent`](super::events::AppEvent)s
/// through this port; the adapter decides where they go.
pub trait EventSink {
    fn emit(&mut self, event: &super::events::AppEvent);
}

// ───────────────────────────────────────────────────────────────
// Wait port (driven adapter: domain → time)
// ───────────────────────────────────────────────────────────────

/// Blocking delay. Every sleep in the control loop and the LED patterns
/// flows through this, so tests run instantly and can assert on timing.
pub trait WaitPort {
    fn wait(&mut self, dur: Duration);
}

// ───────────────────────────────────────────────────────────────
// Error types
// ───────────────────────────────────────────────────────────────

/// Errors from [`NotifierPort::send_alert`] and notifier construction.
///
/// The monitor's policy on a failed send: log it, leave the charger
/// state unchanged so a retry can happen via another TEST press or a
/// re-armed event, and keep polling.
#[derive(Debug)]
pub enum NotifyError {
    /// Could not reach or negotiate a session with the relay.
    Connection(String),
    /// The relay refused the message or the session. A bad login
    /// surfaces here with the relay's response text.
    Rejected(String),
    /// The configured addresses or message could not be composed.
    Compose(String),
}

impl std::fmt::Display for NotifyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Connection(msg) => write!(f, "relay connection failed: {msg}"),
            Self::Rejected(msg) => write!(f, "relay rejected the message: {msg}"),
            Self::Compose(msg) => write!(f, "message composition failed: {msg}"),
        }
    }
}

impl std::error::Error for NotifyError {}
