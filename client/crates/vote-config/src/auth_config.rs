use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_LOGIN_REDIRECT_DELAY_MS, MAX_LOGIN_REDIRECT_DELAY_MS,
};

use std::time::Duration;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// Pause between a successful login and the dashboard redirect
    pub login_redirect_delay_ms: u64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            login_redirect_delay_ms: DEFAULT_LOGIN_REDIRECT_DELAY_MS,
        }
    }
}

impl AuthConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.login_redirect_delay_ms > MAX_LOGIN_REDIRECT_DELAY_MS {
            return Err(ConfigError::config(format!(
                "auth.login_redirect_delay_ms must be <= {}, got {}",
                MAX_LOGIN_REDIRECT_DELAY_MS, self.login_redirect_delay_ms
            )));
        }
        Ok(())
    }

    pub fn login_redirect_delay(&self) -> Duration {
        Duration::from_millis(self.login_redirect_delay_ms)
    }
}
