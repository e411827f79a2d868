//! Application-level configuration loading from a JSON file and the environment.

use std::{env, fs, io::ErrorKind, path::PathBuf, time::Duration};

use serde::Deserialize;
use tracing::{info, warn};

/// Default location on disk where the server looks for the JSON configuration.
const DEFAULT_CONFIG_PATH: &str = "config/app.json";
/// Environment variable that overrides [`DEFAULT_CONFIG_PATH`].
const CONFIG_PATH_ENV: &str = "INVENTORY_CONFIG_PATH";

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_DATABASE_URL: &str = "sqlite:inventory.db?mode=rwc";
const DEFAULT_SESSION_TTL: Duration = Duration::from_secs(60 * 60);
const DEFAULT_SWEEP_INTERVAL: Duration = Duration::from_secs(60);
const DEFAULT_COOKIE_NAME: &str = "sid";

/// Which persistence backend serves the games and users.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StorageKind {
    /// Single-file SQLite database.
    Sqlite,
    /// Process-local vectors, lost on restart.
    Memory,
}

/// Immutable runtime configuration shared across the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// TCP port the HTTP server binds on all interfaces.
    pub port: u16,
    /// Selected persistence backend.
    pub storage: StorageKind,
    /// Connection URL for the SQLite backend.
    pub database_url: String,
    /// Lifetime of a session and of its cookie.
    pub session_ttl: Duration,
    /// Period of the expired-session sweep.
    pub session_sweep_interval: Duration,
    /// Name of the cookie carrying the session token.
    pub session_cookie_name: String,
    /// Whether the session cookie carries the `Secure` attribute.
    pub cookie_secure: bool,
}

impl AppConfig {
    /// Load the configuration file, then apply `PORT` and `DATABASE_URL` overrides.
    pub fn load() -> Self {
        let mut config = Self::load_file();

        if let Some(port) = env::var("PORT")
            .ok()
            .and_then(|value| value.parse::<u16>().ok())
        {
            config.port = port;
        }
        if let Some(url) = env::var("DATABASE_URL").ok().filter(|url| !url.is_empty()) {
            config.database_url = url;
        }

        config
    }

    fn load_file() -> Self {
        let path = resolve_config_path();
        match fs::read_to_string(&path) {
            Ok(contents) => match Self::from_json(&contents) {
                Ok(config) => {
                    info!(path = %path.display(), "loaded configuration file");
                    config
                }
                Err(err) => {
                    warn!(
                        path = %path.display(),
                        error = %err,
                        "failed to parse config; falling back to defaults"
                    );
                    Self::default()
                }
            },
            Err(err) if err.kind() == ErrorKind::NotFound => {
                info!(
                    path = %path.display(),
                    "config file not found; using built-in defaults"
                );
                Self::default()
            }
            Err(err) => {
                warn!(
                    path = %path.display(),
                    error = %err,
                    "failed to read config; falling back to defaults"
                );
                Self::default()
            }
        }
    }

    /// Parse a JSON document, keeping defaults for every omitted field.
    pub fn from_json(contents: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str::<RawConfig>(contents).map(Into::into)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            storage: StorageKind::Sqlite,
            database_url: DEFAULT_DATABASE_URL.to_owned(),
            session_ttl: DEFAULT_SESSION_TTL,
            session_sweep_interval: DEFAULT_SWEEP_INTERVAL,
            session_cookie_name: DEFAULT_COOKIE_NAME.to_owned(),
            cookie_secure: false,
        }
    }
}

/// JSON representation of the configuration file located at [`DEFAULT_CONFIG_PATH`].
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct RawConfig {
    port: Option<u16>,
    storage: Option<StorageKind>,
    database_url: Option<String>,
    session_ttl_secs: Option<u64>,
    session_sweep_interval_secs: Option<u64>,
    session_cookie_name: Option<String>,
    cookie_secure: Option<bool>,
}

impl From<RawConfig> for AppConfig {
    fn from(raw: RawConfig) -> Self {
        let defaults = Self::default();
        Self {
            port: raw.port.unwrap_or(defaults.port),
            storage: raw.storage.unwrap_or(defaults.storage),
            database_url: raw.database_url.unwrap_or(defaults.database_url),
            session_ttl: raw
                .session_ttl_secs
                .map(Duration::from_secs)
                .unwrap_or(defaults.session_ttl),
            session_sweep_interval: raw
                .session_sweep_interval_secs
                .filter(|secs| *secs > 0)
                .map(Duration::from_secs)
                .unwrap_or(defaults.session_sweep_interval),
            session_cookie_name: raw
                .session_cookie_name
                .filter(|name| !name.is_empty())
                .unwrap_or(defaults.session_cookie_name),
            cookie_secure: raw.cookie_secure.unwrap_or(defaults.cookie_secure),
        }
    }
}

/// Resolve the configuration path taking the environment override into account.
fn resolve_config_path() -> PathBuf {
    env::var_os(CONFIG_PATH_ENV)
        .map(PathBuf::from)
        .filter(|path| !path.as_os_str().is_empty())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_keeps_defaults() {
        let config = AppConfig::from_json("{}").unwrap();
        assert_eq!(config.port, 3000);
        assert_eq!(config.storage, StorageKind::Sqlite);
        assert_eq!(config.session_ttl, Duration::from_secs(3600));
        assert_eq!(config.session_cookie_name, "sid");
        assert!(!config.cookie_secure);
    }

    #[test]
    fn explicit_fields_override_defaults() {
        let config = AppConfig::from_json(
            r#"{
                "port": 8081,
                "storage": "memory",
                "session_ttl_secs": 120,
                "session_cookie_name": "inventory.sid",
                "cookie_secure": true
            }"#,
        )
        .unwrap();

        assert_eq!(config.port, 8081);
        assert_eq!(config.storage, StorageKind::Memory);
        assert_eq!(config.session_ttl, Duration::from_secs(120));
        assert_eq!(config.session_cookie_name, "inventory.sid");
        assert!(config.cookie_secure);
        assert_eq!(config.database_url, DEFAULT_DATABASE_URL);
    }

    #[test]
    fn zero_sweep_interval_falls_back() {
        let config = AppConfig::from_json(r#"{"session_sweep_interval_secs": 0}"#).unwrap();
        assert_eq!(config.session_sweep_interval, DEFAULT_SWEEP_INTERVAL);
    }

    #[test]
    fn unknown_fields_are_rejected() {
        assert!(AppConfig::from_json(r#"{"colour": "red"}"#).is_err());
        assert!(AppConfig::from_json(r#"{"storage": "postgres"}"#).is_err());
    }
}
