//! Telemetry adapters - Observability implementations.

use crate::application::ports::outbound::TelemetryPort;

/// Telemetry adapter backed by `metrics` counters and `tracing` events.
///
/// Counters are no-ops until a metrics recorder is installed.
#[derive(Debug, Default, Clone)]
pub struct MetricsTelemetry;

impl MetricsTelemetry {
    /// Create a new [`MetricsTelemetry`].
    pub fn new() -> Self {
        metrics::describe_counter!(
            "accounts_created_total",
            "Accounts persisted by the signup use case."
        );
        metrics::describe_counter!(
            "signup_rejections_total",
            "Signups refused before any account was written."
        );

        Self
    }
}

impl TelemetryPort for MetricsTelemetry {
    fn record_account_created(&self, account_id: &str) {
        metrics::counter!("accounts_created_total").increment(1);
        tracing::info!(account_id, "account created");
    }

    fn record_signup_rejected(&self, reason: &str) {
        metrics::counter!("signup_rejections_total", "reason" => reason.to_owned())
            .increment(1);
        tracing::info!(reason, "signup rejected");
    }
}
