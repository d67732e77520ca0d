//! Full name of an account holder.

use std::fmt;

use crate::domain::error::{DomainError, Result};

/// Checks that `value` is a full name: at least two non-empty tokens
/// separated by whitespace.
pub fn validate<'a>(value: impl Into<Option<&'a str>>) -> bool {
    value
        .into()
        .is_some_and(|name| name.split_whitespace().nth(1).is_some())
}

/// Value object of a valid full name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Name(String);

impl Name {
    /// Converts a [`String`] into a valid [`Name`].
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidName`] if the name has a single token.
    pub fn parse(name: String) -> Result<Self> {
        if validate(name.as_str()) {
            Ok(Self(name))
        } else {
            Err(DomainError::InvalidName)
        }
    }

    /// Returns the same string as a string slice `&str`.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_name() {
        assert!(validate("John Doe"));
        assert!(validate("Maria da Silva"));
        assert!(validate("John\tDoe"));

        assert!(!validate("John"));
        assert!(!validate("  John  "));
        assert!(!validate(""));
        assert!(!validate(None::<&str>));
    }

    #[test]
    fn test_parse_keeps_value() {
        let name = Name::parse("John Doe".into()).unwrap();
        assert_eq!(name.as_str(), "John Doe");

        assert_eq!(Name::parse("John".into()), Err(DomainError::InvalidName));
    }
}
