//! Account signup use case port.

use async_trait::async_trait;

use crate::application::dto::{AccountDto, SignupRequestDto};
use crate::application::error::Result;

/// Inbound port for account signup.
#[async_trait]
pub trait Signup: Send + Sync {
    /// Validate the request, persist a new account and welcome its owner.
    ///
    /// # Errors
    ///
    /// A failed welcome email is returned as
    /// [`ApplicationError::Notification`](crate::application::error::ApplicationError::Notification)
    /// even though the account is already persisted. The error does not
    /// carry the new account id. A retry with the same email then fails
    /// with `AccountAlreadyExists`.
    async fn execute(&self, request: SignupRequestDto) -> Result<AccountDto>;
}
