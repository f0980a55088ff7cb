//! SMTP notifier adapter.
//!
//! Implements [`NotifierPort`] over a `lettre` STARTTLS relay session.
//! The message is composed once at construction from the fixed mail
//! settings and reused unchanged for every send; each send opens an
//! authenticated session, transmits once, and closes. No retry.

use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Message, SmtpTransport, Transport};

use crate::app::ports::{NotifierPort, NotifyError};
use crate::config::MailConfig;

/// One relay, one prebuilt message.
pub struct SmtpNotifier {
    transport: SmtpTransport,
    message: Message,
}

impl SmtpNotifier {
    /// Compose the message and prepare the relay transport. Fails fast on
    /// unparseable addresses or an unusable relay host, so a broken mail
    /// setup is caught at startup rather than at the first alarm.
    pub fn new(cfg: &MailConfig) -> Result<Self, NotifyError> {
        let sender: Mailbox = cfg
            .message
            .sender
            .parse()
            .map_err(|e| NotifyError::Compose(format!("sender: {e}")))?;

        let mut builder = Message::builder()
            .from(sender)
            .subject(cfg.message.subject.clone());
        for recipient in &cfg.message.recipients {
            let mailbox: Mailbox = recipient
                .parse()
                .map_err(|e| NotifyError::Compose(format!("recipient {recipient}: {e}")))?;
            builder = builder.to(mailbox);
        }
        let message = builder
            .body(cfg.message.body.clone())
            .map_err(|e| NotifyError::Compose(e.to_string()))?;

        let transport = SmtpTransport::starttls_relay(&cfg.relay.host)
            .map_err(|e| NotifyError::Connection(e.to_string()))?
            .port(cfg.relay.port)
            .credentials(Credentials::new(
                cfg.relay.username.clone(),
                cfg.relay.password.clone(),
            ))
            .build();

        Ok(Self { transport, message })
    }
}

impl NotifierPort for SmtpNotifier {
    fn send_alert(&mut self) -> Result<(), NotifyError> {
        match self.transport.send(&self.message) {
            Ok(_) => Ok(()),
            Err(e) if e.is_response() => Err(NotifyError::Rejected(e.to_string())),
            Err(e) => Err(NotifyError::Connection(e.to_string())),
        }
    }
}
