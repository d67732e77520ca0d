//! PostgreSQL implementation for account repository.

use async_trait::async_trait;
use sqlx::PgPool;

use super::models::AccountRecord;
use crate::application::error::{ApplicationError, CatchExt, Result};
use crate::application::ports::outbound::AccountRepository;
use crate::domain::account::{Account, AccountId, EmailAddress};

/// PostgreSQL account repository.
pub struct PgAccountRepository {
    pool: PgPool,
}

impl PgAccountRepository {
    /// Create a new [`PgAccountRepository`].
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AccountRepository for PgAccountRepository {
    async fn find_by_email(
        &self,
        email: &EmailAddress,
    ) -> Result<Option<Account>> {
        let record = sqlx::query_as::<_, AccountRecord>(
            r#"
            SELECT
                account_id, name, email, identity_number,
                is_passenger, is_driver, car_plate
            FROM accounts
            WHERE email = $1
            "#,
        )
        .bind(email.as_str())
        .fetch_optional(&self.pool)
        .await
        .catch_store()?;

        record.map(AccountRecord::try_into_account).transpose()
    }

    async fn find_by_id(&self, id: &AccountId) -> Result<Option<Account>> {
        let record = sqlx::query_as::<_, AccountRecord>(
            r#"
            SELECT
                account_id, name, email, identity_number,
                is_passenger, is_driver, car_plate
            FROM accounts
            WHERE account_id = $1
            "#,
        )
        .bind(id.as_str())
        .fetch_optional(&self.pool)
        .await
        .catch_store()?;

        record.map(AccountRecord::try_into_account).transpose()
    }

    async fn save(&self, account: &Account) -> Result<()> {
        let record = AccountRecord::from(account);

        let result = sqlx::query(
            r#"
            INSERT INTO accounts (
                account_id, name, email, identity_number,
                is_passenger, is_driver, car_plate
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(&record.account_id)
        .bind(&record.name)
        .bind(&record.email)
        .bind(&record.identity_number)
        .bind(record.is_passenger)
        .bind(record.is_driver)
        .bind(&record.car_plate)
        .execute(&self.pool)
        .await;

        match result {
            Ok(_) => Ok(()),
            Err(err) if is_unique_violation(&err) => {
                Err(ApplicationError::AccountAlreadyExists)
            },
            Err(err) => Err(ApplicationError::store(err)),
        }
    }
}

fn is_unique_violation(err: &sqlx::Error) -> bool {
    err.as_database_error()
        .is_some_and(|err| err.is_unique_violation())
}
