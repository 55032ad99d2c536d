//! Configuration loading with env-var overrides.

use std::fs;
use std::path::Path;

use crate::{
    error::AppError,
    logger,
    secret::SecretKey,
    settings::{ApplicationSettings, VALIDATION_CODES},
};

use super::raw::RawConfig;
use super::types::{Config, Overrides};

pub const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

pub const APP_NAME_ENV: &str = "DATA_PROCESSOR_APP_NAME";
pub const PORT_ENV: &str = "DATA_PROCESSOR_PORT";
pub const LOG_LEVEL_ENV: &str = "DATA_PROCESSOR_LOG_LEVEL";

/// Load config from the given path, or `config/default.toml`, then apply env-var overrides.
/// If no path is given and `config/default.toml` does not exist, the built-in settings are used.
pub fn load(config_path: Option<&str>) -> Result<Config, AppError> {
    let overrides = Overrides::from_env();

    if let Some(path) = config_path {
        return load_from(Path::new(path), &overrides);
    }

    let default_path = Path::new(DEFAULT_CONFIG_PATH);
    if default_path.exists() {
        load_from(default_path, &overrides)
    } else {
        resolve(RawConfig::default(), &overrides)
    }
}

pub fn load_default() -> Result<Config, AppError> {
    load(None)
}

/// Loader core: explicit path and overrides.
/// Tests pass overrides directly instead of mutating env vars.
pub fn load_from(path: &Path, overrides: &Overrides) -> Result<Config, AppError> {
    let raw = fs::read_to_string(path)
        .map_err(|e| AppError::Config(format!("cannot read {}: {e}", path.display())))?;
    from_toml_str(&raw, &path.display().to_string(), overrides)
}

/// Parse TOML text. `origin` names the source in error messages.
pub fn from_toml_str(text: &str, origin: &str, overrides: &Overrides) -> Result<Config, AppError> {
    let parsed: RawConfig = toml::from_str(text)
        .map_err(|e| AppError::Config(format!("parse error in {origin}: {e}")))?;
    resolve(parsed, overrides)
}

fn resolve(raw: RawConfig, overrides: &Overrides) -> Result<Config, AppError> {
    let port = match overrides.port.as_deref() {
        Some(value) => parse_port(value)?,
        None => raw.app.port,
    };

    let log_level = overrides
        .log_level
        .clone()
        .unwrap_or(raw.runtime.log_level);
    logger::parse_level(&log_level)
        .map_err(|_| AppError::Config(format!("unrecognised log_level '{log_level}'")))?;

    let settings = ApplicationSettings {
        app_name: overrides.app_name.clone().unwrap_or(raw.app.name),
        version: raw.app.version,
        port,
        secret_key: overrides.secret_key.clone().and_then(SecretKey::new),
        validation_codes: VALIDATION_CODES,
    };

    Ok(Config { settings, log_level })
}

fn parse_port(value: &str) -> Result<u16, AppError> {
    value
        .trim()
        .parse::<u16>()
        .map_err(|e| AppError::Config(format!("invalid {PORT_ENV} '{value}': {e}")))
}
