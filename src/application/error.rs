//! Application-level errors.

use crate::domain::DomainError;

pub type Result<T> = std::result::Result<T, ApplicationError>;

/// Boxed error raised by an outbound adapter.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Errors that can occur in the application layer.
#[derive(Debug, thiserror::Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("account already exists")]
    AccountAlreadyExists,
    #[error("account not found")]
    AccountNotFound,

    #[error("account store failure: {0}")]
    Store(#[source] BoxError),
    #[error("notification gateway failure: {0}")]
    Notification(#[source] BoxError),
}

impl ApplicationError {
    pub fn store<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Store(Box::new(err))
    }

    pub fn notification<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Notification(Box::new(err))
    }
}

/// Tags an adapter error with the collaborator it came from.
pub trait CatchExt<T> {
    fn catch_store(self) -> Result<T>;
    fn catch_notification(self) -> Result<T>;
}

impl<T, E> CatchExt<T> for std::result::Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn catch_store(self) -> Result<T> {
        self.map_err(ApplicationError::store)
    }

    fn catch_notification(self) -> Result<T> {
        self.map_err(ApplicationError::notification)
    }
}
