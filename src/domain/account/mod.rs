//! Account identity: value objects, their validation rules and the entity.
//!
//! Each value object module exposes a total `validate` function returning a
//! boolean, and a `parse` constructor turning a failed check into a
//! [`DomainError`](crate::domain::DomainError).

pub mod email;
pub mod entity;
pub mod id;
pub mod identity_number;
pub mod name;
pub mod plate;

pub use email::EmailAddress;
pub use email::validate as validate_email;
pub use entity::{Account, AccountBuilder};
pub use id::AccountId;
pub use identity_number::IdentityNumber;
pub use identity_number::validate as validate_identity_number;
pub use name::Name;
pub use name::validate as validate_name;
pub use plate::CarPlate;
pub use plate::validate as validate_plate;
