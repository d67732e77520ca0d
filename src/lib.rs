//! Account signup and lookup core for a ride-hailing platform.
//!
//! Passengers and drivers register with a name, an email address, a national
//! identity number and, for drivers, a car plate. Accounts are persisted in
//! PostgreSQL (or in memory) and greeted with a welcome email.

#![forbid(unsafe_code)]
#![deny(unused_mut)]

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod telemetry;

use std::sync::Arc;

use adapters::outbound::mail::{LogMailer, SmtpMailer};
use adapters::outbound::memory::MemoryAccountRepository;
use adapters::outbound::persistence::postgres::{self, PgAccountRepository};
use adapters::outbound::telemetry::MetricsTelemetry;
use application::ports::inbound::{GetAccount, Signup};
use application::ports::outbound::{AccountRepository, Mailer};
use application::usecases::{GetAccountUseCase, SignupUseCase};

/// State sharing between callers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<config::Configuration>,
    pub signup: Arc<dyn Signup>,
    pub get_account: Arc<dyn GetAccount>,
}

/// Initialize the application state.
pub async fn initialize_state(
    config: Arc<config::Configuration>,
) -> Result<AppState, Box<dyn std::error::Error + Send + Sync>> {
    let account_repo: Arc<dyn AccountRepository> = match &config.postgres {
        Some(cfg) => {
            let pool = postgres::connect(cfg).await?;

            // execute migrations scripts on start.
            postgres::migrate(&pool).await?;

            Arc::new(PgAccountRepository::new(pool))
        },
        None => {
            tracing::warn!(
                "missing `postgres` entry on `config.yaml` file, accounts are kept in memory"
            );
            Arc::new(MemoryAccountRepository::new())
        },
    };

    // handle mail sender.
    let mailer: Arc<dyn Mailer> = match &config.mail {
        Some(cfg) => Arc::new(SmtpMailer::new(cfg)?),
        None => Arc::new(LogMailer::new()),
    };

    let signup = SignupUseCase::new(
        Arc::clone(&account_repo),
        mailer,
        Arc::new(MetricsTelemetry::new()),
    );
    let get_account = GetAccountUseCase::new(account_repo);

    Ok(AppState {
        config,
        signup: Arc::new(signup),
        get_account: Arc::new(get_account),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::dto::GetAccountRequestDto;
    use crate::application::error::ApplicationError;
    use crate::application::usecases::signup::tests::{driver, passenger};

    async fn state() -> AppState {
        initialize_state(Arc::new(config::Configuration::default()))
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_signup_then_get_account() {
        let state = state().await;

        let created = state
            .signup
            .execute(driver("john.doe@gmail.com", Some("ABC1234")))
            .await
            .unwrap();
        let fetched = state
            .get_account
            .execute(GetAccountRequestDto::from(&created))
            .await
            .unwrap();

        assert_eq!(fetched, created);
        assert!(fetched.is_driver);
        assert_eq!(fetched.car_plate.as_deref(), Some("ABC1234"));
    }

    #[tokio::test]
    async fn test_state_shares_one_store() {
        let state = state().await;
        let other = state.clone();

        state
            .signup
            .execute(passenger("john.doe@gmail.com"))
            .await
            .unwrap();
        let err = other
            .signup
            .execute(passenger("john.doe@gmail.com"))
            .await
            .unwrap_err();

        assert!(matches!(err, ApplicationError::AccountAlreadyExists));
    }
}
