//! CLI configuration: a thin wrapper around `fibaro_config` shared types.
//!
//! Adds resolution that respects `GlobalOpts` flag overrides (--url,
//! --username, --password, etc.) on top of the selected profile.

use secrecy::SecretString;

use fibaro_config::{Config, Profile, config_path, load_config};
use fibaro_core::{ConfigEntry, ControllerConfig};

use crate::cli::GlobalOpts;
use crate::error::CliError;

/// Everything a diagnostics command needs: how to reach the hub, and the
/// config entry describing it.
pub struct Resolved {
    pub controller: ControllerConfig,
    pub entry: ConfigEntry,
}

/// Resolve the active profile name from CLI flags and config.
pub fn active_profile_name(global: &GlobalOpts, config: &Config) -> String {
    global
        .profile
        .clone()
        .or_else(|| config.default_profile.clone())
        .unwrap_or_else(|| "default".into())
}

/// Load the config file and merge the active profile with flag overrides.
///
/// A missing file yields the defaults; a malformed one is an error.
pub fn resolve(global: &GlobalOpts) -> Result<Resolved, CliError> {
    let cfg = load_config()?;
    let profile_name = active_profile_name(global, &cfg);
    let profile = select_profile(global, &cfg, &profile_name)?;
    resolve_profile(profile, &profile_name, global, &cfg)
}

fn select_profile(
    global: &GlobalOpts,
    cfg: &Config,
    profile_name: &str,
) -> Result<Profile, CliError> {
    if let Some(profile) = cfg.profiles.get(profile_name) {
        return Ok(profile.clone());
    }

    // An explicitly requested profile must exist.
    if global.profile.is_some() {
        let mut available: Vec<&str> = cfg.profiles.keys().map(String::as_str).collect();
        available.sort_unstable();
        return Err(CliError::ProfileNotFound {
            name: profile_name.into(),
            available: if available.is_empty() {
                "(none)".into()
            } else {
                available.join(", ")
            },
        });
    }

    // No profile -- build from CLI flags / env vars alone
    if global.url.is_none() {
        return Err(CliError::NoConfig {
            path: config_path().display().to_string(),
        });
    }
    Ok(Profile::default())
}

/// Translate a `Profile` + global flags into core types.
///
/// CLI flag overrides take priority over profile values.
fn resolve_profile(
    mut profile: Profile,
    profile_name: &str,
    global: &GlobalOpts,
    cfg: &Config,
) -> Result<Resolved, CliError> {
    if let Some(ref url) = global.url {
        profile.url.clone_from(url);
    }
    if let Some(ref username) = global.username {
        profile.username.clone_from(username);
    }
    if global.insecure {
        profile.insecure = Some(true);
    }
    if global.timeout.is_some() {
        profile.timeout = global.timeout;
    }

    if profile.username.is_empty() {
        return Err(CliError::Validation {
            field: "username".into(),
            reason: "no username in profile or --username".into(),
        });
    }

    let password = match global.password {
        Some(ref pw) => SecretString::from(pw.clone()),
        None => fibaro_config::resolve_password(&profile, profile_name)?,
    };

    let entry = fibaro_config::profile_to_config_entry(&profile, profile_name, &password);
    let controller =
        fibaro_config::profile_to_controller_config(&profile, password, &cfg.defaults)?;

    Ok(Resolved { controller, entry })
}
