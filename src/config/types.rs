use std::env;

use crate::{secret::SecretKey, settings::ApplicationSettings};

use super::load::{APP_NAME_ENV, LOG_LEVEL_ENV, PORT_ENV};

/// Fully-resolved configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub settings: ApplicationSettings,
    pub log_level: String,
}

/// Values that replace file or default values during resolution.
///
/// `port` stays a raw string so a bad value can be reported against the
/// variable it came from.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub app_name: Option<String>,
    pub port: Option<String>,
    pub log_level: Option<String>,
    pub secret_key: Option<String>,
}

impl Overrides {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build overrides from any name -> value lookup; `from_env` passes the
    /// process environment.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            app_name: lookup(APP_NAME_ENV),
            port: lookup(PORT_ENV),
            log_level: lookup(LOG_LEVEL_ENV),
            secret_key: SecretKey::from_lookup(&lookup).map(|k| k.expose().to_string()),
        }
    }
}
