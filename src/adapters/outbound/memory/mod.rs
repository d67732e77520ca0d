//! In-memory adapters, used by tests and when no backend is configured.

mod account_repository;
mod mailer;

pub use account_repository::MemoryAccountRepository;
pub use mailer::{MemoryMailer, SentMail};
