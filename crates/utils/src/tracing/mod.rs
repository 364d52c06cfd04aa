//! Tracing setup and structured outcome reporting

use outcome_core::constants::{DEFAULT_LOG_FILTER, OUTCOME_LOG_VAR};
use outcome_core::{Error, Outcome, Result, Status};
use tracing::{debug, error, info, warn};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Subscriber configuration consumed by [`init`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TracingConfig {
    /// `EnvFilter` directives, e.g. `info` or `outcome_core=debug`
    pub filter: String,
    /// Emit ANSI colour codes
    pub ansi: bool,
    /// Include the event target in each line
    pub with_target: bool,
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            filter: DEFAULT_LOG_FILTER.to_string(),
            ansi: is_tty(),
            with_target: false,
        }
    }
}

impl TracingConfig {
    /// Read the filter from `OUTCOME_LOG`, then `RUST_LOG`, then fall back to
    /// `info`
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            filter: resolve_filter(
                std::env::var(OUTCOME_LOG_VAR).ok(),
                std::env::var(EnvFilter::DEFAULT_ENV).ok(),
            ),
            ..Self::default()
        }
    }

    /// Replace the filter directives
    #[must_use]
    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = filter.into();
        self
    }
}

fn resolve_filter(outcome_log: Option<String>, rust_log: Option<String>) -> String {
    outcome_log
        .filter(|value| !value.trim().is_empty())
        .or_else(|| rust_log.filter(|value| !value.trim().is_empty()))
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string())
}

/// Initialize the global tracing subscriber.
///
/// Installs an `EnvFilter` and a compact formatter writing to stderr. Fails
/// with [`Error::Configuration`] when the filter does not parse or a global
/// subscriber is already installed.
pub fn init(config: &TracingConfig) -> Result<()> {
    let filter = EnvFilter::try_new(&config.filter).map_err(|e| {
        Error::configuration(format!("invalid log filter '{}': {e}", config.filter))
    })?;

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(config.ansi)
        .compact()
        .with_target(config.with_target)
        .with_thread_ids(false)
        .with_level(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| Error::configuration(format!("failed to install tracing subscriber: {e}")))
}

/// Check if we're running in a TTY environment
fn is_tty() -> bool {
    std::io::IsTerminal::is_terminal(&std::io::stderr())
}

/// Emit a structured event describing `outcome`.
///
/// Successes log at `info` with one `warn` per attached warning,
/// cancellations at `warn`, failures at `error` with the error's full
/// description. A failure already marked handled is demoted to `debug`.
pub fn report<R>(operation: &str, outcome: &R)
where
    R: Outcome + ?Sized,
{
    match outcome.status() {
        Status::Success => {
            info!(
                operation = %operation,
                outcome_message = outcome.message().unwrap_or_default(),
                "operation_succeeded"
            );
            for warning in outcome.warnings() {
                warn!(operation = %operation, warning = %warning, "operation_warning");
            }
        }
        Status::Cancelled => {
            warn!(operation = %operation, "operation_cancelled");
        }
        Status::Failure => {
            let description = outcome
                .exception()
                .map(|e| format!("{e:#}"))
                .or_else(|| outcome.message().map(str::to_owned))
                .unwrap_or_default();

            if outcome.is_handled() {
                debug!(operation = %operation, error = %description, "operation_failed_handled");
            } else {
                error!(operation = %operation, error = %description, "operation_failed");
            }
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use super::capture::capture;
    use outcome_core::{OperationResult, ServiceResult};

    #[test]
    fn test_filter_resolution_order() {
        assert_eq!(
            resolve_filter(Some("debug".into()), Some("warn".into())),
            "debug"
        );
        assert_eq!(resolve_filter(None, Some("warn".into())), "warn");
        assert_eq!(resolve_filter(Some("  ".into()), None), "info");
        assert_eq!(resolve_filter(None, None), DEFAULT_LOG_FILTER);
    }

    #[test]
    fn test_config_builder() {
        let config = TracingConfig::default().with_filter("outcome_core=trace");
        assert_eq!(config.filter, "outcome_core=trace");
        assert!(!config.with_target);
    }

    #[test]
    fn test_invalid_filter_is_configuration_error() {
        let config = TracingConfig::default().with_filter("outcome_core=loudest");
        let error = init(&config).unwrap_err();
        assert!(matches!(error, Error::Configuration { .. }));
    }

    #[test]
    fn test_report_success_with_warnings() {
        let outcome = OperationResult::success_message("saved").with_warnings(["slow disk"]);
        let output = capture(|| report("save", &outcome));

        assert!(output.contains("INFO"));
        assert!(output.contains("operation_succeeded"));
        assert!(output.contains("outcome_message=\"saved\""));
        assert!(output.contains("WARN"));
        assert!(output.contains("slow disk"));
    }

    #[test]
    fn test_report_failure_includes_cause_chain() {
        let error = anyhow::anyhow!("disk full").context("write failed");
        let outcome = ServiceResult::<()>::failure_with_status(error, 507);
        let output = capture(|| report("save", &outcome));

        assert!(output.contains("ERROR"));
        assert!(output.contains("operation_failed"));
        assert!(output.contains("write failed: disk full"));
    }

    #[test]
    fn test_report_handled_failure_is_debug() {
        let mut outcome: OperationResult = OperationResult::failure_message("expected");
        outcome.set_handled(true);
        let output = capture(|| report("health_check", &outcome));

        assert!(output.contains("DEBUG"));
        assert!(output.contains("operation_failed_handled"));
        assert!(!output.contains("ERROR"));
    }

    #[test]
    fn test_report_cancelled() {
        let outcome: OperationResult = OperationResult::cancelled();
        let output = capture(|| report("sync", &outcome));

        assert!(output.contains("WARN"));
        assert!(output.contains("operation_cancelled"));
    }
}
