//! Telemetry port - Interface for observability.

/// Port for recording business events.
pub trait TelemetryPort: Send + Sync {
    /// Record a successfully persisted account.
    fn record_account_created(&self, account_id: &str);

    /// Record a signup refused before anything was written.
    fn record_signup_rejected(&self, reason: &str);
}
