// soapdump - platform/config.rs
//
// Optional config.toml loading with validation. The file is only read when
// given explicitly with --config; nothing is looked up implicitly.
//
// Invalid values never abort a run: each produces a warning and the default
// is kept.

use crate::core::report::{OutputFormat, SummaryOptions};
use crate::util::constants;
use crate::util::error::ConfigError;
use std::path::Path;

/// Raw deserialisable shape of config.toml.
///
/// Unknown keys are silently ignored for forward compatibility.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct RawConfig {
    /// `[logging]` section.
    pub logging: LoggingSection,
    /// `[output]` section.
    pub output: OutputSection,
    /// `[summary]` section.
    pub summary: SummarySection,
}

/// `[logging]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    /// Log level: "error", "warn", "info", "debug", "trace".
    pub level: Option<String>,
}

/// `[output]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct OutputSection {
    /// Record format: "raw", "csv" or "json".
    pub format: Option<String>,
}

/// `[summary]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct SummarySection {
    /// Number of states in the ranking.
    pub top_states: Option<usize>,
    /// Status value counted as successful.
    pub success_status: Option<String>,
}

/// Validated application configuration.
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    /// Logging level string (for init before tracing is available).
    pub log_level: Option<String>,
    /// Record format when not overridden on the command line.
    pub format: Option<OutputFormat>,
    /// Summary computation options.
    pub summary: SummaryOptions,
}

/// Load and validate a config file.
///
/// Returns the validated config plus every problem found. An unreadable or
/// unparseable file yields defaults and a single error.
pub fn load_config(path: &Path) -> (AppConfig, Vec<ConfigError>) {
    let content = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(source) => {
            return (
                AppConfig::default(),
                vec![ConfigError::Io {
                    path: path.to_path_buf(),
                    source,
                }],
            )
        }
    };

    match toml::from_str::<RawConfig>(&content) {
        Ok(raw) => validate(raw),
        Err(source) => (
            AppConfig::default(),
            vec![ConfigError::TomlParse {
                path: path.to_path_buf(),
                source,
            }],
        ),
    }
}

/// Validate each field, accumulating all problems.
pub fn validate(raw: RawConfig) -> (AppConfig, Vec<ConfigError>) {
    let mut config = AppConfig::default();
    let mut warnings = Vec::new();

    if let Some(level) = raw.logging.level {
        if constants::VALID_LOG_LEVELS.contains(&level.to_lowercase().as_str()) {
            config.log_level = Some(level.to_lowercase());
        } else {
            warnings.push(ConfigError::ValueOutOfRange {
                field: "[logging] level".to_string(),
                value: level,
                expected: constants::VALID_LOG_LEVELS.join(", "),
            });
        }
    }

    if let Some(format) = raw.output.format {
        match format.parse::<OutputFormat>() {
            Ok(f) => config.format = Some(f),
            Err(_) => warnings.push(ConfigError::ValueOutOfRange {
                field: "[output] format".to_string(),
                value: format,
                expected: "raw, csv, json".to_string(),
            }),
        }
    }

    if let Some(top) = raw.summary.top_states {
        if (constants::MIN_TOP_STATES..=constants::MAX_TOP_STATES).contains(&top) {
            config.summary.top_states = top;
        } else {
            warnings.push(ConfigError::ValueOutOfRange {
                field: "[summary] top_states".to_string(),
                value: top.to_string(),
                expected: format!(
                    "{}-{}",
                    constants::MIN_TOP_STATES,
                    constants::MAX_TOP_STATES
                ),
            });
        }
    }

    if let Some(status) = raw.summary.success_status {
        if status.is_empty() {
            warnings.push(ConfigError::ValueOutOfRange {
                field: "[summary] success_status".to_string(),
                value: status,
                expected: "a non-empty status string".to_string(),
            });
        } else {
            config.summary.success_status = status;
        }
    }

    (config, warnings)
}
