use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_NOTIFICATION_DURATION_MS,
    MAX_NOTIFICATION_DURATION_MS, MIN_NOTIFICATION_DURATION_MS,
};

use std::time::Duration;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct NotificationConfig {
    /// How long a notification stays active before it is dismissed
    pub duration_ms: u64,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            duration_ms: DEFAULT_NOTIFICATION_DURATION_MS,
        }
    }
}

impl NotificationConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.duration_ms < MIN_NOTIFICATION_DURATION_MS
            || self.duration_ms > MAX_NOTIFICATION_DURATION_MS
        {
            return Err(ConfigError::config(format!(
                "notifications.duration_ms must be {}-{}, got {}",
                MIN_NOTIFICATION_DURATION_MS, MAX_NOTIFICATION_DURATION_MS, self.duration_ms
            )));
        }
        Ok(())
    }

    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }
}
