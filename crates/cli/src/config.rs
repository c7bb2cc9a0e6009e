//! Environment-driven configuration.
//!
//! | variable | meaning | default |
//! |---|---|---|
//! | `BACKPACK_ARRAY_CAPACITY` | capacity of the array backpack (1 to 4096) | `10` |
//! | `BACKPACK_LOG` | tracing filter when `RUST_LOG` is unset | `warn` |
//! | `BACKPACK_LOG_FORMAT` | `json` or `pretty` | `json` |

use thiserror::Error;

use backpack_inventory::DEFAULT_CAPACITY;
use backpack_observability::{LogFormat, TracingConfig};

pub const CAPACITY_VAR: &str = "BACKPACK_ARRAY_CAPACITY";
pub const LOG_FILTER_VAR: &str = "BACKPACK_LOG";
pub const LOG_FORMAT_VAR: &str = "BACKPACK_LOG_FORMAT";

/// Largest accepted `BACKPACK_ARRAY_CAPACITY`.
pub const MAX_ARRAY_CAPACITY: usize = 4096;

const DEFAULT_LOG_FILTER: &str = "warn";

/// A variable that was set but could not be used.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error(
        "{key}: expected an integer between 1 and {max}, got '{value}'",
        max = MAX_ARRAY_CAPACITY
    )]
    InvalidCapacity { key: &'static str, value: String },

    #[error("{key}: {reason}")]
    InvalidLogFormat { key: &'static str, reason: String },
}

/// Runtime settings for the interactive program.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackpackConfig {
    pub array_capacity: usize,
    pub tracing: TracingConfig,
}

impl Default for BackpackConfig {
    fn default() -> Self {
        Self {
            array_capacity: DEFAULT_CAPACITY,
            tracing: TracingConfig {
                default_filter: DEFAULT_LOG_FILTER.to_string(),
                format: LogFormat::default(),
            },
        }
    }
}

impl BackpackConfig {
    /// Load from the process environment.
    pub fn from_env() -> (Self, Vec<ConfigError>) {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load using `lookup` to resolve variables.
    ///
    /// Unusable values fall back to their defaults and are returned alongside
    /// the config so the caller can report them once logging is up.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> (Self, Vec<ConfigError>) {
        let mut config = Self::default();
        let mut problems = Vec::new();

        if let Some(raw) = lookup(CAPACITY_VAR) {
            match raw.trim().parse::<usize>() {
                Ok(capacity) if (1..=MAX_ARRAY_CAPACITY).contains(&capacity) => {
                    config.array_capacity = capacity
                }
                _ => problems.push(ConfigError::InvalidCapacity {
                    key: CAPACITY_VAR,
                    value: raw,
                }),
            }
        }

        if let Some(filter) = lookup(LOG_FILTER_VAR).filter(|f| !f.trim().is_empty()) {
            config.tracing.default_filter = filter;
        }

        if let Some(raw) = lookup(LOG_FORMAT_VAR) {
            match raw.parse::<LogFormat>() {
                Ok(format) => config.tracing.format = format,
                Err(reason) => problems.push(ConfigError::InvalidLogFormat {
                    key: LOG_FORMAT_VAR,
                    reason,
                }),
            }
        }

        (config, problems)
    }
}
