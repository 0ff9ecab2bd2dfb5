//! Log subscriber setup.
//!
//! Logs go to stderr and are filtered by the `REVIEW_ANALYZER_LOG`
//! environment variable using `tracing_subscriber::EnvFilter` syntax. The
//! interactive TUI owns the terminal, so it only logs when that variable is
//! set explicitly (typically with stderr redirected to a file).

use std::io;

use review_analyzer::OperationMode;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter.
pub const LOG_ENV_VAR: &str = "REVIEW_ANALYZER_LOG";

const DEFAULT_FILTER: &str = "review_analyzer=warn,warn";

/// Installs the global log subscriber for the given mode.
///
/// Does nothing when a subscriber is already installed.
pub fn init(mode: OperationMode) {
    let configured = EnvFilter::try_from_env(LOG_ENV_VAR).ok();
    let Some(filter) = select_filter(mode, configured) else {
        return;
    };

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(true)
        .try_init();
    if installed.is_err() {
        tracing::debug!("log subscriber already installed");
    }
}

/// Chooses the filter to install, or `None` to leave logging off.
fn select_filter(mode: OperationMode, configured: Option<EnvFilter>) -> Option<EnvFilter> {
    match (mode, configured) {
        (_, Some(filter)) => Some(filter),
        (OperationMode::Interactive, None) => None,
        (_, None) => Some(EnvFilter::new(DEFAULT_FILTER)),
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use tracing_subscriber::EnvFilter;

    use super::*;

    #[test]
    fn interactive_mode_is_silent_by_default() {
        assert!(select_filter(OperationMode::Interactive, None).is_none());
    }

    #[rstest]
    #[case(OperationMode::Analyze)]
    #[case(OperationMode::History)]
    #[case(OperationMode::Health)]
    fn one_shot_modes_log_warnings_by_default(#[case] mode: OperationMode) {
        assert!(select_filter(mode, None).is_some());
    }

    #[test]
    fn explicit_filter_enables_interactive_logging() {
        let filter = select_filter(OperationMode::Interactive, Some(EnvFilter::new("debug")));
        assert!(filter.is_some(), "explicit filter should be used");
    }
}
