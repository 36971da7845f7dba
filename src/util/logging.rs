// soapdump - util/logging.rs
//
// Diagnostics for a filter-style CLI. stdout carries nothing but the report,
// so every log line goes to stderr. The default level is warn: a clean run
// writes nothing to stderr, and only mismatched request/response counts or
// config problems show up unasked. Stage counts and timings appear at debug.
// Payload contents (names, addresses, card data) are never logged.

use tracing_subscriber::EnvFilter;

/// Filter directive for this run.
///
/// A non-empty RUST_LOG wins, then `--debug`, then `[logging] level`.
fn directive(rust_log: Option<&str>, debug_flag: bool, config_level: Option<&str>) -> String {
    match rust_log.map(str::trim).filter(|v| !v.is_empty()) {
        Some(env) => env.to_string(),
        None if debug_flag => "debug".to_string(),
        None => config_level
            .unwrap_or(super::constants::DEFAULT_LOG_LEVEL)
            .to_string(),
    }
}

/// Install the stderr subscriber. Safe to call more than once; later calls
/// leave the first subscriber in place.
pub fn init(debug_flag: bool, config_level: Option<&str>) {
    let rust_log = std::env::var("RUST_LOG").ok();
    let filter = EnvFilter::new(directive(rust_log.as_deref(), debug_flag, config_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .compact()
        .try_init();

    tracing::debug!(
        app = super::constants::APP_NAME,
        version = super::constants::APP_VERSION,
        "Logging initialised"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rust_log_beats_flags_and_config() {
        assert_eq!(directive(Some("soapdump=trace"), true, Some("info")), "soapdump=trace");
    }

    #[test]
    fn test_blank_rust_log_is_ignored() {
        assert_eq!(directive(Some("  "), false, Some("info")), "info");
    }

    #[test]
    fn test_debug_flag_beats_config() {
        assert_eq!(directive(None, true, Some("error")), "debug");
    }

    #[test]
    fn test_default_is_warn() {
        assert_eq!(directive(None, false, None), "warn");
    }

    #[test]
    fn test_repeated_init_is_harmless() {
        init(false, None);
        init(true, Some("info"));
    }
}
