//! In-memory implementation for account repository.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::application::error::{ApplicationError, Result};
use crate::application::ports::outbound::AccountRepository;
use crate::domain::account::{Account, AccountId, EmailAddress};

/// Account repository keeping every account in process memory.
///
/// Email uniqueness is checked under the same write lock as the insert, so
/// concurrent signups cannot both store an account for one address.
#[derive(Debug, Default)]
pub struct MemoryAccountRepository {
    accounts: RwLock<HashMap<AccountId, Account>>,
}

impl MemoryAccountRepository {
    /// Create a new, empty [`MemoryAccountRepository`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored accounts.
    pub async fn len(&self) -> usize {
        self.accounts.read().await.len()
    }

    /// Whether no account was stored yet.
    pub async fn is_empty(&self) -> bool {
        self.accounts.read().await.is_empty()
    }
}

#[async_trait]
impl AccountRepository for MemoryAccountRepository {
    async fn find_by_email(
        &self,
        email: &EmailAddress,
    ) -> Result<Option<Account>> {
        let accounts = self.accounts.read().await;

        Ok(accounts
            .values()
            .find(|account| account.email() == email)
            .cloned())
    }

    async fn find_by_id(&self, id: &AccountId) -> Result<Option<Account>> {
        Ok(self.accounts.read().await.get(id).cloned())
    }

    async fn save(&self, account: &Account) -> Result<()> {
        let mut accounts = self.accounts.write().await;

        if accounts
            .values()
            .any(|stored| stored.email() == account.email())
        {
            return Err(ApplicationError::AccountAlreadyExists);
        }

        accounts.insert(account.id().clone(), account.clone());
        tracing::trace!(account_id = %account.id(), "account kept in memory");

        Ok(())
    }
}
