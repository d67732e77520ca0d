//! Vehicle plate logic.

use std::fmt;
use std::sync::LazyLock;

use regex_lite::Regex;

use crate::domain::error::{DomainError, Result};

static PLATE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z]{3}[0-9]{4}$").unwrap());

/// Checks that `value` is three uppercase ASCII letters followed by four
/// digits, with no separator.
pub fn validate<'a>(value: impl Into<Option<&'a str>>) -> bool {
    value.into().is_some_and(|plate| PLATE_RE.is_match(plate))
}

/// Value object of a valid car plate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarPlate(String);

impl CarPlate {
    /// Converts a [`String`] into a valid [`CarPlate`].
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidPlate`] if the value is not formatted as
    /// `LLLNNNN`.
    pub fn parse(plate: String) -> Result<Self> {
        if validate(plate.as_str()) {
            Ok(Self(plate))
        } else {
            Err(DomainError::InvalidPlate)
        }
    }

    /// Returns the same string as a string slice `&str`.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CarPlate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
