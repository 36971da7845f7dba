// soapdump - util/constants.rs
//
// Single source of truth for named constants, markers, limits, and defaults.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "soapdump";

/// Current application version.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Log markers
// =============================================================================

/// Marker preceding an embedded request payload on a log line.
pub const REQUEST_MARKER: &str = "PPAPIService: Request: ";

/// Marker preceding an embedded response payload on a log line.
/// The payload itself must begin with an `<?...?>` declaration.
pub const RESPONSE_MARKER: &str = "PPAPIService: Response: ";

// =============================================================================
// Output
// =============================================================================

/// Delimiter between fields in raw mode.
pub const RAW_DELIMITER: char = '|';

/// Status value counted as successful in the summary.
pub const DEFAULT_SUCCESS_STATUS: &str = "Success";

/// Number of states listed in the summary ranking.
pub const DEFAULT_TOP_STATES: usize = 5;

/// Smallest accepted `[summary] top_states` value.
pub const MIN_TOP_STATES: usize = 1;

/// Largest accepted `[summary] top_states` value.
pub const MAX_TOP_STATES: usize = 50;

// =============================================================================
// Logging
// =============================================================================

/// Default log level when neither RUST_LOG, --debug, nor config sets one.
///
/// Kept at `warn` so that normal runs write nothing to stderr.
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Log levels accepted by `[logging] level`.
pub const VALID_LOG_LEVELS: &[&str] = &["error", "warn", "info", "debug", "trace"];
