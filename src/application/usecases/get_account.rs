//! Account lookup use case implementation.

use std::sync::Arc;

use async_trait::async_trait;

use crate::application::dto::{AccountDto, GetAccountRequestDto};
use crate::application::error::{ApplicationError, Result};
use crate::application::ports::inbound::GetAccount;
use crate::application::ports::outbound::AccountRepository;
use crate::domain::account::AccountId;

/// Account lookup use case service.
pub struct GetAccountUseCase {
    account_repo: Arc<dyn AccountRepository>,
}

impl GetAccountUseCase {
    pub fn new(account_repo: Arc<dyn AccountRepository>) -> Self {
        Self { account_repo }
    }
}

#[async_trait]
impl GetAccount for GetAccountUseCase {
    async fn execute(
        &self,
        request: GetAccountRequestDto,
    ) -> Result<AccountDto> {
        let id = AccountId::from(request.account_id);

        let account = self
            .account_repo
            .find_by_id(&id)
            .await?
            .ok_or(ApplicationError::AccountNotFound)?;

        Ok(AccountDto::from(&account))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::outbound::memory::MemoryAccountRepository;
    use crate::domain::account::{
        Account, CarPlate, EmailAddress, IdentityNumber, Name,
    };

    fn account() -> Account {
        Account::builder()
            .id(AccountId::generate())
            .name(Name::parse("Ana Maria Souza".into()).unwrap())
            .email(EmailAddress::parse("ana@example.com".into()).unwrap())
            .identity_number(IdentityNumber::parse("71428793860".into()).unwrap())
            .passenger(true)
            .driver(Some(CarPlate::parse("XYZ9876".into()).unwrap()))
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn test_get_account_returns_stored_account() {
        let repo = Arc::new(MemoryAccountRepository::new());
        let account = account();
        repo.save(&account).await.unwrap();

        let get_account = GetAccountUseCase::new(repo);
        let output = get_account
            .execute(GetAccountRequestDto {
                account_id: account.id().to_string(),
            })
            .await
            .unwrap();

        assert_eq!(output, AccountDto::from(&account));
        assert!(output.is_passenger);
        assert!(output.is_driver);
        assert_eq!(output.car_plate.as_deref(), Some("XYZ9876"));
    }

    #[tokio::test]
    async fn test_get_account_not_found() {
        let get_account =
            GetAccountUseCase::new(Arc::new(MemoryAccountRepository::new()));

        let err = get_account
            .execute(GetAccountRequestDto {
                account_id: AccountId::generate().to_string(),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, ApplicationError::AccountNotFound));
    }
}
