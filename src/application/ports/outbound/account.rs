//! Account repository port.

use async_trait::async_trait;

use crate::application::error::Result;
use crate::domain::account::{Account, AccountId, EmailAddress};

/// Port for account persistence operations.
///
/// Implementations should reject a second account with an email already
/// stored by returning
/// [`ApplicationError::AccountAlreadyExists`](crate::application::error::ApplicationError::AccountAlreadyExists)
/// from [`save`](AccountRepository::save): the lookup done by the signup use
/// case is not atomic with the write.
#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Find an account by email address.
    async fn find_by_email(
        &self,
        email: &EmailAddress,
    ) -> Result<Option<Account>>;

    /// Find an account by identifier.
    async fn find_by_id(&self, id: &AccountId) -> Result<Option<Account>>;

    /// Persist a new account.
    async fn save(&self, account: &Account) -> Result<()>;
}
