//! Chargewatch — main entry point.
//!
//! Wiring order: logger → configuration → adapters → monitor loop.
//! The only exit path is the shutdown chord (TEST held with the LED
//! off); hardware or mail-setup failures abort at startup instead.

use anyhow::{Context, Result};
use env_logger::Env;
use log::info;

use chargewatch::adapters::gpio::GpioLines;
use chargewatch::adapters::log_sink::LogEventSink;
use chargewatch::adapters::mailer::SmtpNotifier;
use chargewatch::adapters::time::SystemClock;
use chargewatch::app::service::Monitor;
use chargewatch::config::{MailConfig, MonitorConfig};

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    info!("chargewatch v{}", env!("CARGO_PKG_VERSION"));

    let mail = MailConfig::from_env().context("mail configuration")?;
    info!(
        "relay {}:{}, {} recipient(s)",
        mail.relay.host,
        mail.relay.port,
        mail.message.recipients.len()
    );

    let mut hw = GpioLines::new().context("GPIO setup")?;
    let mut notifier = SmtpNotifier::new(&mail).context("SMTP setup")?;
    let mut sink = LogEventSink::new();
    let mut clock = SystemClock::new();

    let mut monitor = Monitor::new(MonitorConfig::default());
    monitor.run(&mut hw, &mut notifier, &mut sink, &mut clock);

    Ok(())
}
