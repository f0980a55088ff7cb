//! Chargewatch library.
//!
//! Watches a battery charger's buzzer line on a Raspberry Pi, drives a
//! status LED, and sends a notification email when a charge cycle
//! completes. The control core (state machine, signaling, monitor
//! service) is pure logic behind port traits; everything
//! hardware-specific lives in `adapters` and is gated on the `rpi`
//! feature so the core builds and tests on any host.

#![deny(unused_must_use)]

pub mod adapters;
pub mod app;
pub mod config;
pub mod machine;
pub mod pins;
pub mod signaling;
