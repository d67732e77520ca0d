//! In-memory mailer recording every message.

use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;

use crate::application::error::Result;
use crate::application::ports::outbound::Mailer;
use crate::domain::account::EmailAddress;

/// A message handed to [`MemoryMailer`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentMail {
    pub to: String,
    pub subject: String,
    pub body: String,
}

/// Mailer that keeps messages instead of delivering them.
#[derive(Debug, Default)]
pub struct MemoryMailer {
    sent: Mutex<Vec<SentMail>>,
}

impl MemoryMailer {
    /// Create a new [`MemoryMailer`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Messages sent so far, oldest first.
    pub fn sent(&self) -> Vec<SentMail> {
        self.sent
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

#[async_trait]
impl Mailer for MemoryMailer {
    async fn send(
        &self,
        to: &EmailAddress,
        subject: &str,
        body: &str,
    ) -> Result<()> {
        self.sent
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(SentMail {
                to: to.to_string(),
                subject: subject.to_owned(),
                body: body.to_owned(),
            });

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_messages_are_recorded_in_order() {
        let mailer = MemoryMailer::new();
        let to = EmailAddress::parse("john.doe@gmail.com".into()).unwrap();

        mailer.send(&to, "Welcome", "first").await.unwrap();
        mailer.send(&to, "Welcome", "second").await.unwrap();

        let sent = mailer.sent();
        assert_eq!(sent.len(), 2);
        assert_eq!(sent[0].body, "first");
        assert_eq!(sent[1].to, "john.doe@gmail.com");
    }
}
