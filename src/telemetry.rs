use crate::error::GradeError;
use tracing_subscriber::EnvFilter;

/// Filter directive implied by the command-line verbosity flags, if any.
pub fn level_from_flags(verbose: u8, quiet: bool) -> Option<&'static str> {
    match (quiet, verbose) {
        (true, _) => Some("error"),
        (false, 0) => None,
        (false, 1) => Some("info"),
        (false, _) => Some("debug"),
    }
}

/// Installs the stderr subscriber. `RUST_LOG` wins over the flags, and the
/// flags win over the configured level.
pub fn init(verbose: u8, quiet: bool, configured_level: &str) -> Result<(), GradeError> {
    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => {
            let level = level_from_flags(verbose, quiet).unwrap_or(configured_level);
            EnvFilter::try_new(level)
                .map_err(|e| GradeError::Telemetry(format!("invalid log filter '{level}': {e}")))?
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .with_ansi(false)
        .try_init()
        .map_err(|e| GradeError::Telemetry(e.to_string()))
}
