//! Wall-clock wait adapter.

use std::time::Duration;

use crate::app::ports::WaitPort;

/// Production [`WaitPort`]: plain blocking sleeps on the OS clock.
pub struct SystemClock;

impl SystemClock {
    pub fn new() -> Self {
        Self
    }
}

impl WaitPort for SystemClock {
    fn wait(&mut self, dur: Duration) {
        std::thread::sleep(dur);
    }
}
