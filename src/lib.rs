// Library root: the settings record and everything that builds it.
// The binary entry point is src/main.rs.

pub mod config;
pub mod error;
pub mod logger;
pub mod secret;
pub mod settings;

pub use settings::{ApplicationSettings, get};
