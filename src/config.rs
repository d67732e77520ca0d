//! Configuration manager.

use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationErrors};

const DEFAULT_CONFIG_PATH: &str = "config.yaml";
const DEFAULT_LOG_FILTER: &str = "info";
const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Configuration {
    /// Instance name.
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub version: String,
    #[serde(skip)]
    path: PathBuf,
    /// Related to PostgreSQL configuration.
    /// Accounts are kept in memory when absent.
    #[serde(skip_serializing)]
    #[validate(nested)]
    pub postgres: Option<Postgres>,
    /// Related to welcome mail sending.
    /// Mails are only logged when absent.
    #[serde(skip_serializing)]
    #[validate(nested)]
    pub mail: Option<Mail>,
    /// Related to logging.
    #[serde(default)]
    pub telemetry: Telemetry,
}

/// PostgreSQL configuration.
#[derive(Debug, Default, PartialEq, Clone, Serialize, Deserialize, Validate)]
pub struct Postgres {
    /// Hostname:(?port) for PostgreSQL instance.
    #[validate(length(min = 1))]
    pub address: String,
    /// Database name.
    pub database: Option<String>,
    /// Username credential to connect.
    pub username: Option<String>,
    /// Password credential to connect.
    pub password: Option<String>,
    /// Maximum pool connections.
    #[validate(range(min = 1))]
    pub pool_size: Option<u32>,
}

/// SMTP relay configuration.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Mail {
    /// Relay hostname, reached through STARTTLS.
    #[validate(length(min = 1))]
    pub host: String,
    /// Submission port, 587 by default.
    pub port: Option<u16>,
    pub username: String,
    pub password: String,
    /// Sender address, bare (`no-reply@rides.example`).
    /// A display name (`Rides <no-reply@rides.example>`) is rejected.
    #[validate(email)]
    pub from: String,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Telemetry {
    /// `tracing` filter directive, overridden by `RUST_LOG`.
    pub filter: String,
}

impl Default for Telemetry {
    fn default() -> Self {
        Self {
            filter: DEFAULT_LOG_FILTER.into(),
        }
    }
}

impl Configuration {
    pub fn path(mut self, path: PathBuf) -> Self {
        self.path = path;
        self
    }

    /// Reads the `config.yaml` file from the specified path or the default
    /// location.
    ///
    /// A missing or unreadable file falls back to the default configuration,
    /// an invalid one is rejected.
    pub fn read(self) -> Result<Arc<Self>, ValidationErrors> {
        let file_path = if self.path.is_file() {
            &self.path
        } else {
            &Path::new(DEFAULT_CONFIG_PATH).to_path_buf()
        };

        let mut config: Configuration = match File::open(file_path) {
            Ok(file) => match serde_yaml::from_reader(file) {
                Ok(config) => config,
                Err(err) => return Ok(Arc::new(self.error(err))),
            },
            Err(err) => return Ok(Arc::new(self.error(err))),
        };

        config.validate()?;

        // set app version.
        config.version = VERSION.to_owned();
        config.path = file_path.clone();

        Ok(Arc::new(config))
    }

    /// Return a default configuration as fallback.
    fn error(&self, err: impl std::error::Error) -> Self {
        tracing::error!(error = %err, "`config.yaml` file not readable");
        Self {
            version: VERSION.to_owned(),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CONFIG: &str = r#"
name: rides
postgres:
  address: localhost:5432
  database: accounts
  pool_size: 4
mail:
  host: smtp.example.com
  username: mailer
  password: secret
  from: no-reply@rides.example
telemetry:
  filter: debug
"#;

    #[test]
    fn test_parse_configuration() {
        let config: Configuration = serde_yaml::from_str(CONFIG).unwrap();

        assert!(config.validate().is_ok());
        assert_eq!(config.name, "rides");
        assert_eq!(config.postgres.as_ref().unwrap().pool_size, Some(4));
        assert_eq!(config.mail.as_ref().unwrap().port, None);
        assert_eq!(config.telemetry.filter, "debug");
    }

    #[test]
    fn test_optional_sections() {
        let config: Configuration = serde_yaml::from_str("name: rides").unwrap();

        assert!(config.validate().is_ok());
        assert!(config.postgres.is_none());
        assert!(config.mail.is_none());
        assert_eq!(config.telemetry, Telemetry::default());
    }

    #[test]
    fn test_reject_empty_pool() {
        let mut config: Configuration = serde_yaml::from_str(CONFIG).unwrap();
        if let Some(postgres) = config.postgres.as_mut() {
            postgres.pool_size = Some(0);
        }

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_reject_empty_mail_host() {
        let mut config: Configuration = serde_yaml::from_str(CONFIG).unwrap();
        if let Some(mail) = config.mail.as_mut() {
            mail.host = String::new();
        }

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_reject_invalid_sender() {
        let mut config: Configuration = serde_yaml::from_str(CONFIG).unwrap();
        if let Some(mail) = config.mail.as_mut() {
            mail.from = "no-reply".into();
        }

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_reject_sender_with_display_name() {
        let mut config: Configuration = serde_yaml::from_str(CONFIG).unwrap();
        if let Some(mail) = config.mail.as_mut() {
            mail.from = "Rides <no-reply@rides.example>".into();
        }

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_read_file() {
        let path = std::env::temp_dir()
            .join(format!("accounts-config-{}.yaml", std::process::id()));
        std::fs::write(&path, CONFIG).unwrap();

        let config = Configuration::default().path(path.clone()).read();
        std::fs::remove_file(&path).unwrap();

        let config = config.unwrap();
        assert_eq!(config.version, VERSION);
        assert!(config.postgres.is_some());
    }

    #[test]
    fn test_read_invalid_file() {
        let path = std::env::temp_dir()
            .join(format!("accounts-invalid-{}.yaml", std::process::id()));
        std::fs::write(&path, CONFIG.replace("pool_size: 4", "pool_size: 0"))
            .unwrap();

        let config = Configuration::default().path(path.clone()).read();
        std::fs::remove_file(&path).unwrap();

        assert!(config.is_err());
    }
}
