//! The process-wide `ApplicationSettings` record.
//!
//! Built once at startup (by [`init`], or lazily on the first [`get`]) and
//! shared as `&'static ApplicationSettings` afterwards. There is no mutation
//! path once installed.

use std::sync::OnceLock;

use serde::Serialize;
use tracing::{debug, warn};

use crate::{
    config,
    error::AppError,
    secret::{SECRET_KEY_ENV, SecretKey},
};

pub const DEFAULT_APP_NAME: &str = "DataProcessor";
pub const DEFAULT_VERSION: &str = "1.0.0";
pub const DEFAULT_PORT: u16 = 8080;

/// Internal validation codes. Reproduced verbatim; not configurable.
pub const VALIDATION_CODES: [u32; 4] = [68, 65, 84, 65];

static SETTINGS: OnceLock<ApplicationSettings> = OnceLock::new();

/// Application metadata plus the runtime secret.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplicationSettings {
    pub app_name: String,
    /// Free-form; never parsed.
    pub version: String,
    pub port: u16,
    /// From `DATA_PROCESSOR_SECRET_KEY` / `SECRET_KEY` only. `None` when unset.
    pub secret_key: Option<SecretKey>,
    pub validation_codes: [u32; 4],
}

impl Default for ApplicationSettings {
    fn default() -> Self {
        Self {
            app_name: DEFAULT_APP_NAME.to_string(),
            version: DEFAULT_VERSION.to_string(),
            port: DEFAULT_PORT,
            secret_key: None,
            validation_codes: VALIDATION_CODES,
        }
    }
}

impl ApplicationSettings {
    pub fn require_secret_key(&self) -> Result<&SecretKey, AppError> {
        self.secret_key.as_ref().ok_or_else(|| {
            AppError::Config(format!("secret key is not set; export {SECRET_KEY_ENV}"))
        })
    }

    /// ASCII rendering of the validation codes, for display only.
    pub fn validation_codes_text(&self) -> Option<String> {
        self.validation_codes
            .iter()
            .map(|&code| {
                u8::try_from(code)
                    .ok()
                    .filter(|b| (0x20..=0x7e).contains(b))
                    .map(char::from)
            })
            .collect()
    }

    /// Serialisable view with the secret replaced by its fingerprint.
    pub fn summary(&self) -> SettingsSummary<'_> {
        SettingsSummary {
            app_name: &self.app_name,
            version: &self.version,
            port: self.port,
            secret_key: self
                .secret_key
                .as_ref()
                .map(|k| format!("sha256:{}", k.fingerprint())),
            validation_codes: self.validation_codes,
        }
    }
}

/// Field names match the settings object consumers already know
/// (`appName`, `validationCodes`, …).
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsSummary<'a> {
    pub app_name: &'a str,
    pub version: &'a str,
    pub port: u16,
    pub secret_key: Option<String>,
    pub validation_codes: [u32; 4],
}

/// Install the process-wide settings. Fails if they are already installed,
/// either by an earlier `init` or by a [`get`] that loaded them lazily.
pub fn init(settings: ApplicationSettings) -> Result<&'static ApplicationSettings, AppError> {
    let mut installed_now = false;
    let stored = SETTINGS.get_or_init(|| {
        installed_now = true;
        settings
    });
    if installed_now {
        Ok(stored)
    } else {
        Err(AppError::Config("settings already initialised".into()))
    }
}

/// The process-wide settings, loading them from config + env on first use.
pub fn get() -> &'static ApplicationSettings {
    SETTINGS.get_or_init(|| match config::load_default() {
        Ok(cfg) => {
            debug!(app_name = %cfg.settings.app_name, "settings loaded lazily");
            cfg.settings
        }
        Err(e) => {
            warn!(error = %e, "config load failed; using built-in settings");
            ApplicationSettings {
                secret_key: SecretKey::from_env(),
                ..ApplicationSettings::default()
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_published_values() {
        let s = ApplicationSettings::default();
        assert_eq!(s.app_name, "DataProcessor");
        assert_eq!(s.version, "1.0.0");
        assert_eq!(s.port, 8080);
        assert_eq!(s.validation_codes, [68, 65, 84, 65]);
        assert!(s.secret_key.is_none());
    }

    #[test]
    fn validation_codes_render_as_ascii() {
        let s = ApplicationSettings::default();
        assert_eq!(s.validation_codes_text().as_deref(), Some("DATA"));
    }

    #[test]
    fn non_printable_codes_have_no_text() {
        let s = ApplicationSettings {
            validation_codes: [68, 0, 84, 300],
            ..ApplicationSettings::default()
        };
        assert_eq!(s.validation_codes_text(), None);
    }

    #[test]
    fn space_counts_as_printable() {
        let s = ApplicationSettings {
            validation_codes: [68, 32, 65, 126],
            ..ApplicationSettings::default()
        };
        assert_eq!(s.validation_codes_text().as_deref(), Some("D A~"));

        let del = ApplicationSettings {
            validation_codes: [68, 65, 84, 127],
            ..ApplicationSettings::default()
        };
        assert_eq!(del.validation_codes_text(), None);
    }

    #[test]
    fn missing_secret_is_a_config_error() {
        let s = ApplicationSettings::default();
        let err = s.require_secret_key().unwrap_err();
        assert!(err.to_string().contains(SECRET_KEY_ENV));
    }

    #[test]
    fn present_secret_is_returned() {
        let s = ApplicationSettings {
            secret_key: SecretKey::new("k"),
            ..ApplicationSettings::default()
        };
        assert_eq!(s.require_secret_key().unwrap().expose(), "k");
    }

    #[test]
    fn summary_has_exactly_the_five_fields() {
        let s = ApplicationSettings {
            secret_key: SecretKey::new("supersecret"),
            ..ApplicationSettings::default()
        };
        let json = serde_json::to_value(s.summary()).unwrap();
        let obj = json.as_object().unwrap();
        let mut keys: Vec<&str> = obj.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(
            keys,
            ["appName", "port", "secretKey", "validationCodes", "version"]
        );
        assert_eq!(obj["validationCodes"], serde_json::json!([68, 65, 84, 65]));
        assert!(!json.to_string().contains("supersecret"));
    }

    #[test]
    fn get_is_idempotent_and_init_after_get_fails() {
        let first = get();
        let second = get();
        assert!(std::ptr::eq(first, second));
        assert_eq!(first.validation_codes, VALIDATION_CODES);
        assert!(init(ApplicationSettings::default()).is_err());
        assert!(std::ptr::eq(get(), first));
    }
}
