//! GPIO pin assignments (BCM numbering).
//!
//! Single source of truth — the GPIO adapter references this module
//! rather than hard-coding pin numbers. Deployment wiring, not core
//! contract.

/// Buzzer sense line — physical pin 7, connected to the (+) side of the
/// charger's piezo buzzer. Pulled down; any beep reads HIGH.
pub const ALARM_GPIO: u8 = 4;

/// START/RESET button — physical pin 3. The board's fixed 1.8k pull-up
/// makes this active-low.
pub const RESET_GPIO: u8 = 2;

/// TEST button — physical pin 38, internal pull-up, active-low.
pub const TEST_GPIO: u8 = 20;

/// Status LED anode via a 1k resistor — physical pin 40, active-high.
pub const LED_GPIO: u8 = 21;
