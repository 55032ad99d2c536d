//! Raw TOML shape: `serde` target before resolution.
//!
//! Every key is optional and falls back to the built-in settings. Unknown
//! keys are rejected, which also keeps secrets out of config files.

use serde::Deserialize;

use crate::{
    logger,
    settings::{DEFAULT_APP_NAME, DEFAULT_PORT, DEFAULT_VERSION},
};

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub(super) struct RawConfig {
    #[serde(default)]
    pub app: RawApp,
    #[serde(default)]
    pub runtime: RawRuntime,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub(super) struct RawApp {
    #[serde(default = "default_app_name")]
    pub name: String,
    #[serde(default = "default_version")]
    pub version: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for RawApp {
    fn default() -> Self {
        Self {
            name: default_app_name(),
            version: default_version(),
            port: default_port(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub(super) struct RawRuntime {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for RawRuntime {
    fn default() -> Self {
        Self { log_level: default_log_level() }
    }
}

fn default_app_name() -> String { DEFAULT_APP_NAME.to_string() }
fn default_version() -> String { DEFAULT_VERSION.to_string() }
fn default_port() -> u16 { DEFAULT_PORT }
fn default_log_level() -> String { logger::DEFAULT_LEVEL.to_string() }
