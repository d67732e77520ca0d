//! Interface for email operations.

use async_trait::async_trait;

use crate::application::error::Result;
use crate::domain::account::EmailAddress;

/// Port for sending emails.
#[async_trait]
pub trait Mailer: Send + Sync {
    /// Send a message to `to`.
    async fn send(&self, to: &EmailAddress, subject: &str, body: &str)
    -> Result<()>;
}
