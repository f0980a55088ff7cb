//! Outer-ring adapters bridging the port traits to the real world.

#[cfg(feature = "rpi")]
pub mod gpio;
pub mod log_sink;
pub mod mailer;
pub mod time;
