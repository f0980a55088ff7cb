//! Monitor and mail configuration.
//!
//! There is no configuration file. Timing parameters are compile-time
//! defaults, and everything the notifier needs (relay, credentials,
//! recipients) is read from the environment once at startup and handed to
//! the adapters at construction time.

use std::env;
use std::time::Duration;

/// Fixed body of every alert email.
pub const ALERT_BODY: &str = "\nCycle completed.\n\n\n=)\n\n";

// ───────────────────────────────────────────────────────────────
// Poll loop timing
// ───────────────────────────────────────────────────────────────

/// Control loop timing. The heartbeat period is expressed in poll ticks,
/// so the observable blink period is `heartbeat_period_ticks *
/// poll_interval` (14 × 150ms ≈ 2.1s).
#[derive(Debug, Clone, Copy)]
pub struct MonitorConfig {
    /// Idle wait between polls.
    pub poll_interval: Duration,
    /// Armed idle ticks between heartbeat pulses.
    pub heartbeat_period_ticks: u32,
    /// How long the heartbeat pulse holds the LED on.
    pub heartbeat_pulse: Duration,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            poll_interval: Duration::from_millis(150),
            heartbeat_period_ticks: 14,
            heartbeat_pulse: Duration::from_millis(60),
        }
    }
}

// ───────────────────────────────────────────────────────────────
// Mail settings
// ───────────────────────────────────────────────────────────────

/// Authenticated SMTP relay endpoint.
#[derive(Debug, Clone)]
pub struct RelayConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
}

/// The one message every send transmits, assembled once at startup.
#[derive(Debug, Clone)]
pub struct NotificationMessage {
    pub sender: String,
    pub recipients: Vec<String>,
    pub subject: String,
    pub body: String,
}

/// Everything the notifier adapter needs.
#[derive(Debug, Clone)]
pub struct MailConfig {
    pub relay: RelayConfig,
    pub message: NotificationMessage,
}

impl MailConfig {
    /// Assemble mail settings from `CHARGEWATCH_*` environment variables.
    ///
    /// Required: `CHARGEWATCH_SMTP_USER`, `CHARGEWATCH_SMTP_PASSWORD`,
    /// `CHARGEWATCH_TO` (comma-separated). Optional with defaults:
    /// `CHARGEWATCH_SMTP_HOST` (smtp.gmail.com), `CHARGEWATCH_SMTP_PORT`
    /// (587), `CHARGEWATCH_FROM` (the SMTP user), `CHARGEWATCH_SUBJECT`
    /// ("LiPo Charger").
    pub fn from_env() -> Result<Self, ConfigError> {
        let host = optional("CHARGEWATCH_SMTP_HOST").unwrap_or_else(|| "smtp.gmail.com".into());
        let port = match optional("CHARGEWATCH_SMTP_PORT") {
            Some(raw) => raw
                .parse::<u16>()
                .map_err(|_| ConfigError::Invalid("CHARGEWATCH_SMTP_PORT"))?,
            None => 587,
        };
        let username = required("CHARGEWATCH_SMTP_USER")?;
        let password = required("CHARGEWATCH_SMTP_PASSWORD")?;
        let sender = optional("CHARGEWATCH_FROM").unwrap_or_else(|| username.clone());
        let recipients = parse_recipients(&required("CHARGEWATCH_TO")?)
            .ok_or(ConfigError::Invalid("CHARGEWATCH_TO"))?;
        let subject = optional("CHARGEWATCH_SUBJECT").unwrap_or_else(|| "LiPo Charger".into());

        Ok(Self {
            relay: RelayConfig {
                host,
                port,
                username,
                password,
            },
            message: NotificationMessage {
                sender,
                recipients,
                subject,
                body: ALERT_BODY.to_owned(),
            },
        })
    }
}

/// Split a comma-separated recipient list, trimming whitespace.
/// Returns `None` when no non-empty entry remains.
pub fn parse_recipients(raw: &str) -> Option<Vec<String>> {
    let list: Vec<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
        .collect();
    if list.is_empty() { None } else { Some(list) }
}

fn required(var: &'static str) -> Result<String, ConfigError> {
    optional(var).ok_or(ConfigError::Missing(var))
}

fn optional(var: &str) -> Option<String> {
    match env::var(var) {
        Ok(v) if !v.trim().is_empty() => Some(v),
        _ => None,
    }
}

// ───────────────────────────────────────────────────────────────
// Error type
// ───────────────────────────────────────────────────────────────

/// Startup configuration failures. Always fatal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// A required environment variable is unset or empty.
    Missing(&'static str),
    /// An environment variable is set but unparseable.
    Invalid(&'static str),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Missing(var) => write!(f, "required environment variable {var} is not set"),
            Self::Invalid(var) => write!(f, "environment variable {var} has an invalid value"),
        }
    }
}

impl std::error::Error for ConfigError {}
