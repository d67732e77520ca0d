//! Email logic management.

use std::fmt;
use std::sync::LazyLock;

use regex_lite::Regex;

use crate::domain::error::{DomainError, Result};

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^@\s]+@[^@\s.]+(\.[^@\s.]+)+$").unwrap()
});

/// Checks that `value` has the `local@domain` shape: one `@`, a non-empty
/// local part and a dotted domain. No whitespace is allowed, Unicode
/// spaces included.
pub fn validate<'a>(value: impl Into<Option<&'a str>>) -> bool {
    value.into().is_some_and(|email| {
        // `\s` only covers ASCII whitespace in `regex_lite`.
        !email.chars().any(char::is_whitespace) && EMAIL_RE.is_match(email)
    })
}

/// Value object of a valid email address.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Converts a [`String`] into a valid [`EmailAddress`].
    ///
    /// The address is kept as submitted, without case folding.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidEmail`] if the string does not look
    /// like an email address.
    pub fn parse(email: String) -> Result<Self> {
        if validate(email.as_str()) {
            Ok(Self(email))
        } else {
            Err(DomainError::InvalidEmail)
        }
    }

    /// Returns the same string as a string slice `&str`.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for EmailAddress {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_email() {
        assert!(validate("john.doe@gmail.com"));
        assert!(validate("john.doe0.123@gmail.com"));
        assert!(validate("a@b.co"));
        assert!(validate("user+tag@mail.example.org"));

        assert!(!validate("john.doe0.123"));
        assert!(!validate("john@gmail"));
        assert!(!validate("@gmail.com"));
        assert!(!validate("john@@gmail.com"));
        assert!(!validate("john@gmail..com"));
        assert!(!validate("john doe@gmail.com"));
        assert!(!validate("john\u{a0}doe@gmail.com"));
        assert!(!validate("john\u{2003}doe@gmail.com"));
        assert!(!validate("john.doe@gmail\u{3000}.com"));
        assert!(!validate(""));
        assert!(!validate(None::<&str>));
    }

    #[test]
    fn test_parse_is_case_preserving() {
        let email = EmailAddress::parse("John.Doe@Gmail.com".into()).unwrap();
        assert_eq!(email.as_str(), "John.Doe@Gmail.com");

        assert_eq!(
            EmailAddress::parse("john.doe".into()),
            Err(DomainError::InvalidEmail)
        );
    }
}
