//! Account lookup use case port.

use async_trait::async_trait;

use crate::application::dto::{AccountDto, GetAccountRequestDto};
use crate::application::error::Result;

/// Inbound port for account retrieval.
#[async_trait]
pub trait GetAccount: Send + Sync {
    /// Fetch an account by its identifier.
    async fn execute(&self, request: GetAccountRequestDto)
    -> Result<AccountDto>;
}
