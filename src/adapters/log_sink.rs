//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing each [`AppEvent`] to the logger as
//! the human-readable status lines operators know from the console.

use log::{info, warn};

use crate::app::events::AppEvent;
use crate::app::ports::EventSink;

/// Adapter that logs every [`AppEvent`].
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &AppEvent) {
        match event {
            AppEvent::Loaded => {
                info!("Emailer loaded. Press START when charger cycle has begun.");
            }
            AppEvent::Armed => info!("Reset. Awaiting event ..."),
            AppEvent::EmailSent { test: false } => info!("Email sent"),
            AppEvent::EmailSent { test: true } => info!("Test email sent"),
            AppEvent::EmailFailed => warn!("Email failed; still awaiting event"),
            AppEvent::ShutdownRequested => info!("Hold BOTH buttons until LED is off"),
            AppEvent::Terminated => info!("Charger emailer terminated"),
        }
    }
}
