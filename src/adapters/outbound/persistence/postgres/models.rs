//! Database models for PostgreSQL.

use sqlx::FromRow;

use crate::application::error::{CatchExt, Result};
use crate::domain::account::{
    Account, AccountId, CarPlate, EmailAddress, IdentityNumber, Name,
};

/// Account record as stored in the database.
#[derive(Debug, Clone, FromRow)]
pub struct AccountRecord {
    pub account_id: String,
    pub name: String,
    pub email: String,
    pub identity_number: String,
    pub is_passenger: bool,
    pub is_driver: bool,
    pub car_plate: Option<String>,
}

impl From<&Account> for AccountRecord {
    fn from(account: &Account) -> Self {
        Self {
            account_id: account.id().to_string(),
            name: account.name().to_string(),
            email: account.email().to_string(),
            identity_number: account.identity_number().to_string(),
            is_passenger: account.is_passenger(),
            is_driver: account.is_driver(),
            car_plate: account.car_plate().map(CarPlate::to_string),
        }
    }
}

impl AccountRecord {
    /// Convert to [`Account`], re-checking every stored value.
    ///
    /// A row that no longer passes validation is reported as a store failure.
    pub fn try_into_account(self) -> Result<Account> {
        let car_plate = match (self.is_driver, self.car_plate) {
            (true, Some(plate)) => Some(CarPlate::parse(plate).catch_store()?),
            _ => None,
        };

        Account::builder()
            .id(AccountId::from(self.account_id))
            .name(Name::parse(self.name).catch_store()?)
            .email(EmailAddress::parse(self.email).catch_store()?)
            .identity_number(
                IdentityNumber::parse(self.identity_number).catch_store()?,
            )
            .passenger(self.is_passenger)
            .driver(car_plate)
            .build()
            .catch_store()
    }
}
