//! Mailers sending account notifications.

use async_trait::async_trait;
use lettre::message::Mailbox;
use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

use crate::application::error::{CatchExt, Result};
use crate::application::ports::outbound::Mailer;
use crate::config::Mail;
use crate::domain::account::EmailAddress;

/// Default SMTP submission port.
pub const DEFAULT_SMTP_PORT: u16 = 587;

type SmtpTransport = AsyncSmtpTransport<Tokio1Executor>;

/// SMTP mailer delivering plain-text messages through a STARTTLS relay.
#[derive(Clone)]
pub struct SmtpMailer {
    transport: SmtpTransport,
    from: Mailbox,
}

impl SmtpMailer {
    /// Create a new [`SmtpMailer`].
    ///
    /// No connection is opened until the first message is sent.
    pub fn new(config: &Mail) -> Result<Self> {
        let from = config.from.parse::<Mailbox>().catch_notification()?;

        let credentials =
            Credentials::new(config.username.clone(), config.password.clone());
        let transport = SmtpTransport::starttls_relay(&config.host)
            .catch_notification()?
            .credentials(credentials)
            .port(config.port.unwrap_or(DEFAULT_SMTP_PORT))
            .build();

        tracing::info!(host = %config.host, "smtp relay configured");

        Ok(Self { transport, from })
    }
}

fn build_message(
    from: &Mailbox,
    to: &EmailAddress,
    subject: &str,
    body: &str,
) -> Result<Message> {
    let to = to.as_str().parse::<Mailbox>().catch_notification()?;

    Message::builder()
        .from(from.clone())
        .to(to)
        .subject(subject)
        .header(ContentType::TEXT_PLAIN)
        .body(body.to_owned())
        .catch_notification()
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn send(
        &self,
        to: &EmailAddress,
        subject: &str,
        body: &str,
    ) -> Result<()> {
        let message = build_message(&self.from, to, subject, body)?;

        self.transport.send(message).await.catch_notification()?;
        tracing::debug!(%to, subject, "email sent");

        Ok(())
    }
}

/// Mailer used when no transport is configured: messages are only logged.
#[derive(Debug, Default, Clone)]
pub struct LogMailer;

impl LogMailer {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Mailer for LogMailer {
    async fn send(
        &self,
        to: &EmailAddress,
        subject: &str,
        _body: &str,
    ) -> Result<()> {
        tracing::debug!(%to, subject, "no mail transport, email dropped");
        Ok(())
    }
}
