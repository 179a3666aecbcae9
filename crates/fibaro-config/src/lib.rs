//! Shared configuration for fibaro-diag.
//!
//! TOML profiles, credential resolution (env + keyring + plaintext), and
//! translation to `fibaro_core::ControllerConfig` and the `ConfigEntry`
//! describing the integration instance. The CLI adds flag-aware wrappers
//! on top.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

use fibaro_core::{ConfigEntry, ControllerConfig, TlsVerification};

const KEYRING_SERVICE: &str = "fibaro-diag";

// ── Error ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("no password configured for profile '{profile}'")]
    NoCredentials { profile: String },

    #[error("config loading failed: {0}")]
    Figment(Box<figment::Error>),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

// ── TOML config structs ─────────────────────────────────────────────

/// Top-level TOML configuration.
#[derive(Debug, Deserialize, Serialize)]
pub struct Config {
    /// Default profile name.
    pub default_profile: Option<String>,

    /// Global defaults.
    #[serde(default)]
    pub defaults: Defaults,

    /// Named hub profiles.
    #[serde(default)]
    pub profiles: HashMap<String, Profile>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_profile: Some("default".into()),
            defaults: Defaults::default(),
            profiles: HashMap::new(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize)]
pub struct Defaults {
    #[serde(default)]
    pub insecure: bool,

    #[serde(default = "default_timeout")]
    pub timeout: u64,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            insecure: false,
            timeout: default_timeout(),
        }
    }
}

fn default_timeout() -> u64 {
    30
}

/// A named hub profile.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Profile {
    /// Hub URL (e.g., "http://192.168.1.10/api/").
    pub url: String,

    pub username: String,

    /// Password (plaintext; prefer keyring or env var).
    pub password: Option<String>,

    /// Environment variable name containing the password.
    pub password_env: Option<String>,

    /// Display title of the integration instance.
    pub title: Option<String>,

    /// Config entry id; defaults to the profile name.
    pub entry_id: Option<String>,

    /// Config entry unique id, usually the hub serial.
    pub unique_id: Option<String>,

    /// Whether plugin devices are imported alongside native ones.
    #[serde(default)]
    pub import_plugins: bool,

    /// Path to custom CA certificate.
    pub ca_cert: Option<PathBuf>,

    /// Override insecure TLS setting.
    pub insecure: Option<bool>,

    /// Override timeout.
    pub timeout: Option<u64>,
}

// ── Config file path ────────────────────────────────────────────────

/// Resolve the config file path via XDG / platform conventions.
pub fn config_path() -> PathBuf {
    ProjectDirs::from("org", "fibaro-diag", "fibaro-diag").map_or_else(
        || {
            let mut p = dirs_fallback();
            p.push("config.toml");
            p
        },
        |dirs| dirs.config_dir().join("config.toml"),
    )
}

fn dirs_fallback() -> PathBuf {
    let mut p = PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".into()));
    p.push(".config");
    p.push("fibaro-diag");
    p
}

// ── Config loading ──────────────────────────────────────────────────

/// Load the full Config from the canonical file + environment.
pub fn load_config() -> Result<Config, ConfigError> {
    load_config_from(&config_path())
}

/// Load the full Config from `path` + environment.
///
/// `FIBARO_` variables override file values; nested keys use `__`
/// (e.g. `FIBARO_DEFAULTS__TIMEOUT=10`).
pub fn load_config_from(path: &Path) -> Result<Config, ConfigError> {
    let figment = Figment::new()
        .merge(Serialized::defaults(Config::default()))
        .merge(Toml::file(path))
        .merge(Env::prefixed("FIBARO_").split("__"));

    Ok(figment.extract()?)
}

// ── Credential resolution (without CLI flags) ───────────────────────

/// Resolve the hub password from the credential chain.
pub fn resolve_password(profile: &Profile, profile_name: &str) -> Result<SecretString, ConfigError> {
    // 1. Profile's password_env → env var lookup
    if let Some(ref env_name) = profile.password_env {
        if let Ok(val) = std::env::var(env_name) {
            return Ok(SecretString::from(val));
        }
    }

    // 2. System keyring
    if let Ok(entry) = keyring::Entry::new(KEYRING_SERVICE, &format!("{profile_name}/password")) {
        if let Ok(secret) = entry.get_password() {
            return Ok(SecretString::from(secret));
        }
    }

    // 3. Plaintext in config
    if let Some(ref pw) = profile.password {
        return Ok(SecretString::from(pw.clone()));
    }

    Err(ConfigError::NoCredentials {
        profile: profile_name.into(),
    })
}

// ── Translation to core types ───────────────────────────────────────

/// Parse and validate a hub URL.
pub fn parse_hub_url(raw: &str) -> Result<url::Url, ConfigError> {
    let url: url::Url = raw.parse().map_err(|_| ConfigError::Validation {
        field: "url".into(),
        reason: format!("invalid URL: {raw}"),
    })?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(ConfigError::Validation {
            field: "url".into(),
            reason: format!("expected http or https, got '{}'", url.scheme()),
        });
    }
    Ok(url)
}

/// Build a `ControllerConfig` from a profile, without CLI flag overrides.
pub fn profile_to_controller_config(
    profile: &Profile,
    password: SecretString,
    defaults: &Defaults,
) -> Result<ControllerConfig, ConfigError> {
    let url = parse_hub_url(&profile.url)?;

    let tls = if profile.insecure.unwrap_or(defaults.insecure) {
        TlsVerification::DangerAcceptInvalid
    } else if let Some(ref ca_path) = profile.ca_cert {
        TlsVerification::CustomCa(ca_path.clone())
    } else {
        TlsVerification::SystemDefaults
    };

    Ok(ControllerConfig {
        url,
        username: profile.username.clone(),
        password,
        tls,
        timeout: Duration::from_secs(profile.timeout.unwrap_or(defaults.timeout)),
    })
}

/// Describe the integration instance a profile configures.
///
/// The entry carries the connection data as the host would persist it,
/// credentials included; diagnostics redact them on the way out.
pub fn profile_to_config_entry(
    profile: &Profile,
    profile_name: &str,
    password: &SecretString,
) -> ConfigEntry {
    let mut data = Map::new();
    data.insert("url".into(), Value::String(profile.url.clone()));
    data.insert("username".into(), Value::String(profile.username.clone()));
    data.insert(
        "password".into(),
        Value::String(password.expose_secret().to_owned()),
    );
    data.insert("import_plugins".into(), Value::Bool(profile.import_plugins));

    let entry_id = profile.entry_id.as_deref().unwrap_or(profile_name);
    let title = profile.title.as_deref().unwrap_or(profile_name);
    let entry = ConfigEntry::new(entry_id, title, data);

    match profile.unique_id {
        Some(ref unique_id) => entry.with_unique_id(unique_id.clone()),
        None => entry,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    fn profile() -> Profile {
        Profile {
            url: "http://10.0.0.2/api/".into(),
            username: "admin".into(),
            title: Some("Living room".into()),
            unique_id: Some("HC3-00012345".into()),
            import_plugins: true,
            ..Profile::default()
        }
    }

    #[test]
    fn loads_profiles_from_toml() {
        let file = write_config(
            r#"
            default_profile = "home"

            [defaults]
            timeout = 12

            [profiles.home]
            url = "http://10.0.0.2"
            username = "admin"
            password_env = "HOME_HUB_PASSWORD"
            import_plugins = true
            "#,
        );

        let config = load_config_from(file.path()).unwrap();

        assert_eq!(config.default_profile.as_deref(), Some("home"));
        assert_eq!(config.defaults.timeout, 12);
        let home = &config.profiles["home"];
        assert_eq!(home.url, "http://10.0.0.2");
        assert_eq!(home.password_env.as_deref(), Some("HOME_HUB_PASSWORD"));
        assert!(home.import_plugins);
    }

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_config_from(&dir.path().join("absent.toml")).unwrap();

        assert_eq!(config.default_profile.as_deref(), Some("default"));
        assert!(config.profiles.is_empty());
        assert_eq!(config.defaults.timeout, 30);
    }

    #[test]
    fn malformed_file_is_an_error() {
        let file = write_config("[profiles.home\nurl = ");

        let err = load_config_from(file.path()).unwrap_err();

        assert!(matches!(err, ConfigError::Figment(_)), "got: {err:?}");
    }

    #[test]
    fn password_env_takes_priority() {
        let expected = std::env::var("PATH").unwrap();
        let profile = Profile {
            password: Some("from-file".into()),
            password_env: Some("PATH".into()),
            ..profile()
        };

        let password = resolve_password(&profile, "home").unwrap();

        assert_eq!(password.expose_secret(), expected);
    }

    #[test]
    fn controller_config_applies_defaults() {
        let defaults = Defaults {
            insecure: true,
            timeout: 5,
        };

        let config = profile_to_controller_config(
            &profile(),
            SecretString::from("pw".to_string()),
            &defaults,
        )
        .unwrap();

        assert_eq!(config.url.as_str(), "http://10.0.0.2/api/");
        assert_eq!(config.username, "admin");
        assert_eq!(config.tls, TlsVerification::DangerAcceptInvalid);
        assert_eq!(config.timeout, Duration::from_secs(5));
    }

    #[test]
    fn controller_config_uses_custom_ca() {
        let profile = Profile {
            ca_cert: Some(PathBuf::from("/etc/fibaro/ca.pem")),
            insecure: Some(false),
            ..profile()
        };

        let config = profile_to_controller_config(
            &profile,
            SecretString::from("pw".to_string()),
            &Defaults::default(),
        )
        .unwrap();

        assert_eq!(
            config.tls,
            TlsVerification::CustomCa(PathBuf::from("/etc/fibaro/ca.pem"))
        );
    }

    #[test]
    fn rejects_non_http_url() {
        let err = parse_hub_url("ftp://10.0.0.2").unwrap_err();
        assert!(matches!(err, ConfigError::Validation { .. }), "got: {err:?}");
    }

    #[test]
    fn config_entry_carries_connection_data() {
        let entry =
            profile_to_config_entry(&profile(), "home", &SecretString::from("pw".to_string()));

        assert_eq!(entry.entry_id, "home");
        assert_eq!(entry.title, "Living room");
        assert_eq!(entry.unique_id.as_deref(), Some("HC3-00012345"));
        assert_eq!(entry.data["url"], "http://10.0.0.2/api/");
        assert_eq!(entry.data["username"], "admin");
        assert_eq!(entry.data["password"], "pw");
        assert_eq!(entry.data["import_plugins"], true);
    }
}
