//! Blocking LED feedback patterns.
//!
//! Each pattern is a deterministic pulse train on the single status LED,
//! played to completion with no interruption. The terminal level is
//! applied after the last pulse, and [`LedPort::is_on`] then reflects it
//! until the next signaling action — which is what the shutdown chord in
//! the state machine keys off.
//!
//! | Pattern          | Pulses | On/Off | Terminal LED |
//! |------------------|--------|--------|--------------|
//! | `READY`          | 5      | 500ms  | off          |
//! | `RESET_CONFIRM`  | 5      | 100ms  | off          |
//! | `ALERT`          | 15     | 33ms   | **on**       |
//! | `TERMINATE`      | 15     | 33ms   | off          |

use std::time::Duration;

use crate::app::ports::{LedPort, WaitPort};

/// A fixed pulse train with a defined terminal LED level.
#[derive(Debug, Clone, Copy)]
pub struct BlinkPattern {
    pub pulses: u32,
    pub on: Duration,
    pub off: Duration,
    /// LED level left behind once the train completes.
    pub terminal_on: bool,
}

/// Slow 1Hz blink on startup: "loaded and ready".
pub const READY: BlinkPattern = BlinkPattern {
    pulses: 5,
    on: Duration::from_millis(500),
    off: Duration::from_millis(500),
    terminal_on: false,
};

/// Quick 5Hz blink confirming a START/RESET press.
pub const RESET_CONFIRM: BlinkPattern = BlinkPattern {
    pulses: 5,
    on: Duration::from_millis(100),
    off: Duration::from_millis(100),
    terminal_on: false,
};

/// Rapid 15Hz flutter after an email went out; LED stays on until re-arm.
pub const ALERT: BlinkPattern = BlinkPattern {
    pulses: 15,
    on: Duration::from_millis(33),
    off: Duration::from_millis(33),
    terminal_on: true,
};

/// Same flutter on shutdown, but the LED ends (and is forced) off.
pub const TERMINATE: BlinkPattern = BlinkPattern {
    pulses: 15,
    on: Duration::from_millis(33),
    off: Duration::from_millis(33),
    terminal_on: false,
};

/// Play a pattern to completion. Blocks for
/// `pulses * (on + off)` before applying the terminal level.
pub fn play(pattern: &BlinkPattern, led: &mut impl LedPort, clock: &mut impl WaitPort) {
    for _ in 0..pattern.pulses {
        led.set(true);
        clock.wait(pattern.on);
        led.set(false);
        clock.wait(pattern.off);
    }
    led.set(pattern.terminal_on);
}
