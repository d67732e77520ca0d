//! Account domain entity.

use crate::domain::account::email::EmailAddress;
use crate::domain::account::id::AccountId;
use crate::domain::account::identity_number::IdentityNumber;
use crate::domain::account::name::Name;
use crate::domain::account::plate::CarPlate;
use crate::domain::error::{DomainError, Result};

/// A passenger and/or driver registered on the platform.
///
/// A driver always owns a valid [`CarPlate`]: [`Account::is_driver`] is
/// derived from the plate's presence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    id: AccountId,
    name: Name,
    email: EmailAddress,
    identity_number: IdentityNumber,
    is_passenger: bool,
    car_plate: Option<CarPlate>,
}

impl Account {
    /// Creates a new [`AccountBuilder`].
    pub fn builder() -> AccountBuilder {
        AccountBuilder::default()
    }

    pub fn id(&self) -> &AccountId {
        &self.id
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn email(&self) -> &EmailAddress {
        &self.email
    }

    pub fn identity_number(&self) -> &IdentityNumber {
        &self.identity_number
    }

    pub fn is_passenger(&self) -> bool {
        self.is_passenger
    }

    pub fn is_driver(&self) -> bool {
        self.car_plate.is_some()
    }

    pub fn car_plate(&self) -> Option<&CarPlate> {
        self.car_plate.as_ref()
    }
}

/// Builder for assembling an [`Account`] from validated parts.
#[derive(Debug, Default)]
pub struct AccountBuilder {
    id: Option<AccountId>,
    name: Option<Name>,
    email: Option<EmailAddress>,
    identity_number: Option<IdentityNumber>,
    is_passenger: bool,
    car_plate: Option<CarPlate>,
}

impl AccountBuilder {
    pub fn id(mut self, id: AccountId) -> Self {
        self.id = Some(id);
        self
    }

    pub fn name(mut self, name: Name) -> Self {
        self.name = Some(name);
        self
    }

    pub fn email(mut self, email: EmailAddress) -> Self {
        self.email = Some(email);
        self
    }

    pub fn identity_number(mut self, identity_number: IdentityNumber) -> Self {
        self.identity_number = Some(identity_number);
        self
    }

    pub fn passenger(mut self, is_passenger: bool) -> Self {
        self.is_passenger = is_passenger;
        self
    }

    /// Marks the account as a driver of the vehicle registered as `plate`.
    /// Passing `None` leaves the account without the driver capability.
    pub fn driver(mut self, plate: Option<CarPlate>) -> Self {
        self.car_plate = plate;
        self
    }

    /// Finalizes the build.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::MissingField`] when the id, name, email or
    /// identity number was never set.
    pub fn build(self) -> Result<Account> {
        Ok(Account {
            id: self.id.ok_or(DomainError::MissingField { field: "account_id" })?,
            name: self.name.ok_or(DomainError::MissingField { field: "name" })?,
            email: self
                .email
                .ok_or(DomainError::MissingField { field: "email" })?,
            identity_number: self.identity_number.ok_or(
                DomainError::MissingField {
                    field: "identity_number",
                },
            )?,
            is_passenger: self.is_passenger,
            car_plate: self.car_plate,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn builder() -> AccountBuilder {
        Account::builder()
            .id(AccountId::from("0a6f6a27-b8fc-4d55-8f0b-3d5c2f06c9ad"))
            .name(Name::parse("John Doe".into()).unwrap())
            .email(EmailAddress::parse("john.doe@gmail.com".into()).unwrap())
            .identity_number(IdentityNumber::parse("87748248800".into()).unwrap())
    }

    #[test]
    fn test_build_passenger() {
        let account = builder().passenger(true).build().unwrap();

        assert_eq!(account.id().as_str(), "0a6f6a27-b8fc-4d55-8f0b-3d5c2f06c9ad");
        assert_eq!(account.name().as_str(), "John Doe");
        assert!(account.is_passenger());
        assert!(!account.is_driver());
        assert!(account.car_plate().is_none());
    }

    #[test]
    fn test_build_driver() {
        let plate = CarPlate::parse("ABC1234".into()).unwrap();
        let account = builder().driver(Some(plate)).build().unwrap();

        assert!(!account.is_passenger());
        assert!(account.is_driver());
        assert_eq!(account.car_plate().map(CarPlate::as_str), Some("ABC1234"));
    }

    #[test]
    fn test_build_missing_fields() {
        let err = Account::builder().build().unwrap_err();
        assert_eq!(err, DomainError::MissingField { field: "account_id" });

        let err = Account::builder()
            .id(AccountId::generate())
            .name(Name::parse("John Doe".into()).unwrap())
            .build()
            .unwrap_err();
        assert_eq!(err, DomainError::MissingField { field: "email" });
    }
}
