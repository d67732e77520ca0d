//! National identity number (CPF-like) logic.
//!
//! A valid number is made of exactly 11 ASCII digits. The last two are
//! check digits, each computed from the digits before it with a weighted
//! sum modulo 11.

use std::fmt;

use crate::domain::error::{DomainError, Result};

/// Number of digits of an identity number.
pub const LENGTH: usize = 11;
/// Number of leading digits the first check digit is computed from.
const BODY_LENGTH: usize = 9;

/// Checks the length, format and both check digits of an identity number.
///
/// Never fails hard: absent or malformed input simply yields `false`.
pub fn validate<'a>(value: impl Into<Option<&'a str>>) -> bool {
    let Some(value) = value.into() else {
        return false;
    };

    let Some(digits) = parse_digits(value) else {
        return false;
    };

    // Every digit repeated passes the checksum, but is never issued.
    if digits.iter().all(|&digit| digit == digits[0]) {
        return false;
    }

    let first = check_digit(&digits[..BODY_LENGTH]);
    if first != digits[BODY_LENGTH] {
        return false;
    }

    let second = check_digit(&digits[..=BODY_LENGTH]);
    second == digits[LENGTH - 1]
}

fn parse_digits(value: &str) -> Option<[u32; LENGTH]> {
    if value.len() != LENGTH {
        return None;
    }

    let mut digits = [0; LENGTH];
    for (slot, c) in digits.iter_mut().zip(value.chars()) {
        *slot = c.to_digit(10)?;
    }
    Some(digits)
}

/// Weights `digits` with descending factors ending at 2, then maps the sum
/// modulo 11 to a check digit.
fn check_digit(digits: &[u32]) -> u32 {
    let first_weight = digits.len() as u32 + 1;
    let sum: u32 = digits
        .iter()
        .zip((2..=first_weight).rev())
        .map(|(digit, weight)| digit * weight)
        .sum();

    match sum % 11 {
        remainder if remainder < 2 => 0,
        remainder => 11 - remainder,
    }
}

/// Value object of a valid identity number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentityNumber(String);

impl IdentityNumber {
    /// Converts a [`String`] into a valid [`IdentityNumber`].
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidIdentityNumber`] if the value is not
    /// 11 digits or one of its check digits is wrong.
    pub fn parse(value: String) -> Result<Self> {
        if validate(value.as_str()) {
            Ok(Self(value))
        } else {
            Err(DomainError::InvalidIdentityNumber)
        }
    }

    /// Returns the same string as a string slice `&str`.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for IdentityNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
