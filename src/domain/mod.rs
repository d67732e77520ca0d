//! Domain layer: account value objects, validation rules and entity.

pub mod account;
pub mod error;

pub use error::{DomainError, Result};
