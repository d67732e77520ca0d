//! Account signup use case implementation.

use std::sync::Arc;

use async_trait::async_trait;

use crate::application::dto::{AccountDto, SignupRequestDto};
use crate::application::error::{ApplicationError, Result};
use crate::application::ports::inbound::Signup;
use crate::application::ports::outbound::{
    AccountRepository, Mailer, TelemetryPort,
};
use crate::domain::DomainError;
use crate::domain::account::{
    Account, AccountId, CarPlate, EmailAddress, IdentityNumber, Name,
};

/// Subject of the message sent after a successful signup.
pub const WELCOME_SUBJECT: &str = "Welcome";
/// Body of the message sent after a successful signup.
pub const WELCOME_BODY: &str = "Welcome to our platform";

const ACCOUNT_ALREADY_EXISTS: &str = "account_already_exists";

/// Account signup use case service.
pub struct SignupUseCase {
    account_repo: Arc<dyn AccountRepository>,
    mailer: Arc<dyn Mailer>,
    telemetry: Arc<dyn TelemetryPort>,
}

impl SignupUseCase {
    pub fn new(
        account_repo: Arc<dyn AccountRepository>,
        mailer: Arc<dyn Mailer>,
        telemetry: Arc<dyn TelemetryPort>,
    ) -> Self {
        Self {
            account_repo,
            mailer,
            telemetry,
        }
    }
}

/// Signup fields that passed every validation rule.
struct Registration {
    name: Name,
    email: EmailAddress,
    identity_number: IdentityNumber,
    is_passenger: bool,
    car_plate: Option<CarPlate>,
}

impl Registration {
    /// Runs the validation rules in order, stopping at the first failure.
    fn validate(request: SignupRequestDto) -> crate::domain::Result<Self> {
        let name = Name::parse(request.name)?;
        let email = EmailAddress::parse(request.email)?;
        let identity_number = IdentityNumber::parse(request.identity_number)?;

        // A plate sent by a non-driver is ignored.
        let car_plate = if request.is_driver {
            let plate = request.car_plate.ok_or(DomainError::InvalidPlate)?;
            Some(CarPlate::parse(plate)?)
        } else {
            None
        };

        Ok(Self {
            name,
            email,
            identity_number,
            is_passenger: request.is_passenger,
            car_plate,
        })
    }

    fn into_account(self, id: AccountId) -> crate::domain::Result<Account> {
        Account::builder()
            .id(id)
            .name(self.name)
            .email(self.email)
            .identity_number(self.identity_number)
            .passenger(self.is_passenger)
            .driver(self.car_plate)
            .build()
    }
}

#[async_trait]
impl Signup for SignupUseCase {
    async fn execute(&self, request: SignupRequestDto) -> Result<AccountDto> {
        let registration = match Registration::validate(request) {
            Ok(registration) => registration,
            Err(err) => {
                self.telemetry.record_signup_rejected(err.reason());
                return Err(err.into());
            },
        };

        if self
            .account_repo
            .find_by_email(&registration.email)
            .await?
            .is_some()
        {
            self.telemetry.record_signup_rejected(ACCOUNT_ALREADY_EXISTS);
            return Err(ApplicationError::AccountAlreadyExists);
        }

        let account = registration.into_account(AccountId::generate())?;

        // A concurrent signup may have taken the email since the lookup.
        match self.account_repo.save(&account).await {
            Err(ApplicationError::AccountAlreadyExists) => {
                self.telemetry.record_signup_rejected(ACCOUNT_ALREADY_EXISTS);
                return Err(ApplicationError::AccountAlreadyExists);
            },
            res => res?,
        }
        self.telemetry.record_account_created(account.id().as_str());

        // The account stays created even if the welcome email fails.
        if let Err(err) = self
            .mailer
            .send(account.email(), WELCOME_SUBJECT, WELCOME_BODY)
            .await
        {
            tracing::warn!(
                account_id = %account.id(),
                error = %err,
                "welcome email not sent"
            );
            return Err(err);
        }

        Ok(AccountDto::from(&account))
    }
}
