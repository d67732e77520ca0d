//! Data Transfer Objects for the application layer.
//!
//! DTOs are used to transfer data between layers without exposing domain
//! entities. Field names follow the camelCase wire convention.

use serde::{Deserialize, Serialize};

use crate::domain::account::{Account, CarPlate};

/// Request DTO for account signup.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SignupRequestDto {
    /// Full name, first and last.
    pub name: String,
    /// Email address, unique across accounts.
    pub email: String,
    /// 11-digit national identity number.
    #[serde(alias = "cpf")]
    pub identity_number: String,
    pub is_passenger: bool,
    #[serde(default)]
    pub is_driver: bool,
    /// Vehicle plate, required for drivers.
    #[serde(default)]
    pub car_plate: Option<String>,
}

/// Request DTO for account lookup.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetAccountRequestDto {
    pub account_id: String,
}

impl From<&AccountDto> for GetAccountRequestDto {
    fn from(account: &AccountDto) -> Self {
        Self {
            account_id: account.account_id.clone(),
        }
    }
}

/// Account read model returned by the use cases.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountDto {
    pub account_id: String,
    pub name: String,
    pub email: String,
    pub identity_number: String,
    pub is_passenger: bool,
    pub is_driver: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub car_plate: Option<String>,
}

impl From<&Account> for AccountDto {
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
