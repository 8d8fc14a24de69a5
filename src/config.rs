//! Runtime configuration loaded from environment variables.

use std::time::Duration;

use thiserror::Error;

pub const DEFAULT_COOKIE_NAME: &str = "todos_session";
pub const DEFAULT_SESSION_TTL: Duration = Duration::from_secs(24 * 60 * 60);

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{var} must be a whole number of seconds, got {value:?}")]
    InvalidDuration { var: &'static str, value: String },
    #[error("{var} must not be empty")]
    Empty { var: &'static str },
}

/// Session and cookie settings shared by the router and middleware.
#[derive(Clone, Debug)]
pub struct AppConfig {
    /// Name of the session cookie (from TODOS_SESSION_COOKIE)
    pub cookie_name: String,
    /// Idle time after which a session is dropped (from TODOS_SESSION_TTL_SECS)
    pub session_ttl: Duration,
    /// Add the `Secure` attribute to the session cookie (from TODOS_SECURE_COOKIES)
    pub secure_cookies: bool,
}

impl AppConfig {
    /// Load configuration from environment variables, falling back to defaults
    /// for anything unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Ok(name) = std::env::var("TODOS_SESSION_COOKIE") {
            let name = name.trim();
            if name.is_empty() {
                return Err(ConfigError::Empty {
                    var: "TODOS_SESSION_COOKIE",
                });
            }
            config.cookie_name = name.to_string();
        }

        if let Ok(value) = std::env::var("TODOS_SESSION_TTL_SECS") {
            let secs = value
                .trim()
                .parse::<u64>()
                .map_err(|_| ConfigError::InvalidDuration {
                    var: "TODOS_SESSION_TTL_SECS",
                    value: value.clone(),
                })?;
            config.session_ttl = Duration::from_secs(secs);
        }

        config.secure_cookies = std::env::var("TODOS_SECURE_COOKIES")
            .map(|v| parse_flag(&v))
            .unwrap_or(false);

        Ok(config)
    }

    pub fn with_cookie_name(mut self, name: impl Into<String>) -> Self {
        self.cookie_name = name.into();
        self
    }

    pub fn with_session_ttl(mut self, ttl: Duration) -> Self {
        self.session_ttl = ttl;
        self
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            cookie_name: DEFAULT_COOKIE_NAME.to_string(),
            session_ttl: DEFAULT_SESSION_TTL,
            secure_cookies: false,
        }
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
