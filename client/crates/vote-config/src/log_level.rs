use crate::{ConfigError, DEFAULT_LOG_LEVEL};

use std::fmt;
use std::str::FromStr;

use log::{LevelFilter, warn};
use serde::{Deserialize, Deserializer};

/// Verbosity of the `vote` logger.
///
/// An unknown level in `config.toml` is not fatal: it is reported and the
/// default level is used.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogLevel(pub LevelFilter);

impl Default for LogLevel {
    fn default() -> Self {
        LogLevel(DEFAULT_LOG_LEVEL)
    }
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    #[track_caller]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<LevelFilter>()
            .map(LogLevel)
            .map_err(|_| {
                ConfigError::config(format!(
                    "unknown log level '{}', expected off, error, warn, info, debug or trace",
                    s
                ))
            })
    }
}

impl<'de> Deserialize<'de> for LogLevel {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<String>::deserialize(deserializer).unwrap_or_default();
        Ok(match raw.as_deref().map(str::parse::<LogLevel>) {
            Some(Ok(level)) => level,
            Some(Err(e)) => {
                warn!("{}; using {}", e, LogLevel::default());
                LogLevel::default()
            }
            None => LogLevel::default(),
        })
    }
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        level.0
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.as_str().to_lowercase())
    }
}
