//! Custom error handler for domain (core).

pub type Result<T> = std::result::Result<T, DomainError>;

/// Enum representing custom domain errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    #[error("invalid name")]
    InvalidName,
    #[error("invalid email")]
    InvalidEmail,
    #[error("invalid identity number")]
    InvalidIdentityNumber,
    #[error("invalid car plate")]
    InvalidPlate,

    #[error("{field} is required")]
    MissingField { field: &'static str },
}

impl DomainError {
    /// Short machine-friendly label, used as a metrics dimension.
    pub fn reason(&self) -> &'static str {
        match self {
            DomainError::InvalidName => "invalid_name",
            DomainError::InvalidEmail => "invalid_email",
            DomainError::InvalidIdentityNumber => "invalid_identity_number",
            DomainError::InvalidPlate => "invalid_plate",
            DomainError::MissingField { .. } => "missing_field",
        }
    }
}
