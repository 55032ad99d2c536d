//! Configuration loading with env-var overrides.
//!
//! Reads `config/default.toml` relative to the current working directory
//! (or the path given on the command line), then applies
//! `DATA_PROCESSOR_APP_NAME`, `DATA_PROCESSOR_PORT` and
//! `DATA_PROCESSOR_LOG_LEVEL`. The secret key is read from the environment
//! only.
//!
//! # Module layout
//!
//! - **types**: `Config` and `Overrides`.
//! - **raw**: TOML deserialization types; mirror the file shape, kept private.
//! - **load**: `load`, `load_default`, `load_from`, `from_toml_str`.

mod load;
mod raw;
mod types;

pub use load::{
    APP_NAME_ENV, DEFAULT_CONFIG_PATH, LOG_LEVEL_ENV, PORT_ENV, from_toml_str, load, load_default,
    load_from,
};
pub use types::*;
