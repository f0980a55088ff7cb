//! Application layer: port traits, outbound events, and the monitor service.

pub mod events;
pub mod ports;
pub mod service;
