//! Configuration module for the tweet CLI.
//!
//! Credentials come from three layers, merged into an immutable map:
//!
//! 1. the process environment,
//! 2. the user config file `~/.config/tweet-cli/.env`,
//! 3. the project config file `.env` in the current directory.
//!
//! The first layer that defines a key wins; later layers only fill in keys that
//! are still absent. The process environment itself is never modified.

use log::{debug, info};
use std::collections::HashMap;
use std::env;
use std::fmt;
use std::path::{Path, PathBuf};

use crate::error::{CliError, Result};

pub const API_KEY: &str = "X_API_KEY";
pub const API_SECRET: &str = "X_API_SECRET";
pub const ACCESS_TOKEN: &str = "X_ACCESS_TOKEN";
pub const ACCESS_TOKEN_SECRET: &str = "X_ACCESS_TOKEN_SECRET";

/// The four keys that must be set, in the order they are reported when missing.
pub const REQUIRED_KEYS: [&str; 4] = [API_KEY, API_SECRET, ACCESS_TOKEN, ACCESS_TOKEN_SECRET];

/// Display form of the user config file location used in messages.
pub const USER_CONFIG_DISPLAY: &str = "~/.config/tweet-cli/.env";

/// Display form of the project config file location used in messages.
pub const PROJECT_CONFIG_DISPLAY: &str = "./.env";

/// Returns `~/.config/tweet-cli/.env`, or `None` when no home directory is known.
pub fn user_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".config").join("tweet-cli").join(".env"))
}

/// Returns `.env` in the current working directory.
pub fn project_config_path() -> Option<PathBuf> {
    env::current_dir().ok().map(|dir| dir.join(".env"))
}

/// Masks a secret for logging, keeping at most the first four characters.
pub(crate) fn mask_secret(secret: &str) -> String {
    let prefix: String = secret.chars().take(4).collect();
    if secret.chars().count() > 8 {
        format!("{}... ({} chars)", prefix, secret.len())
    } else {
        "****".to_string()
    }
}

/// The raw inputs to credential loading, captured up front.
#[derive(Debug, Clone, Default)]
pub struct ConfigSources {
    /// Variables already present in the environment. Highest precedence.
    pub environment: HashMap<String, String>,
    /// The user-level dotenv file, consulted second.
    pub user_file: Option<PathBuf>,
    /// The project-level dotenv file, consulted last.
    pub project_file: Option<PathBuf>,
}

impl ConfigSources {
    /// Snapshots the current process environment and the two standard file locations.
    pub fn from_process() -> Self {
        ConfigSources {
            environment: env::vars().collect(),
            user_file: user_config_path(),
            project_file: project_config_path(),
        }
    }

    /// Merges all layers. A key defined by an earlier layer is never replaced.
    pub fn merge(&self) -> Result<HashMap<String, String>> {
        let mut merged = self.environment.clone();
        for path in [&self.user_file, &self.project_file].into_iter().flatten() {
            for (key, value) in read_env_file(path)? {
                if merged.contains_key(&key) {
                    debug!("Keeping existing value for {} (also set in {})", key, path.display());
                    continue;
                }
                merged.insert(key, value);
            }
        }
        Ok(merged)
    }
}

/// Reads `KEY=VALUE` pairs from a dotenv-style file. A missing file yields no pairs.
fn read_env_file(path: &Path) -> Result<Vec<(String, String)>> {
    if !path.is_file() {
        debug!("Config file {} not found, skipping", path.display());
        return Ok(Vec::new());
    }

    info!("Loading config file {}", path.display());
    let iter = dotenvy::from_path_iter(path).map_err(|e| {
        CliError::Config(format!("Failed to read config file {}: {}", path.display(), e))
    })?;

    iter.map(|item| {
        item.map_err(|e| {
            CliError::Config(format!("Failed to parse config file {}: {}", path.display(), e))
        })
    })
    .collect()
}

/// OAuth 1.0a user credentials for the X API.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    /// Consumer (API) key of the app.
    pub api_key: String,
    /// Consumer (API) secret of the app.
    pub api_secret: String,
    /// Access token of the authorizing user.
    pub access_token: String,
    /// Access token secret of the authorizing user.
    pub access_token_secret: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &mask_secret(&self.api_key))
            .field("api_secret", &mask_secret(&self.api_secret))
            .field("access_token", &mask_secret(&self.access_token))
            .field("access_token_secret", &mask_secret(&self.access_token_secret))
            .finish()
    }
}

impl Credentials {
    /// Loads credentials from the process environment and the standard config files.
    pub fn load() -> Result<Self> {
        Self::load_from(&ConfigSources::from_process())
    }

    /// Loads credentials from explicit sources.
    ///
    /// # Errors
    ///
    /// Returns [`CliError::Config`] naming every required key that is unset or empty
    /// after all layers were merged, or when a config file cannot be parsed.
    pub fn load_from(sources: &ConfigSources) -> Result<Self> {
        let merged = sources.merge()?;
        Self::from_map(&merged)
    }

    /// Builds credentials from an already merged key/value map.
    pub fn from_map(values: &HashMap<String, String>) -> Result<Self> {
        let lookup = |key: &str| values.get(key).filter(|v| !v.is_empty()).cloned();

        let missing: Vec<&str> = REQUIRED_KEYS
            .iter()
            .copied()
            .filter(|key| lookup(*key).is_none())
            .collect();

        if !missing.is_empty() {
            info!("Missing credentials: {}", missing.join(", "));
            return Err(CliError::Config(format!(
                "Missing credentials: {}\n\
                 Set them in {} or {}, or as environment variables.\n\
                 See: tweet-cli --help",
                missing.join(", "),
                USER_CONFIG_DISPLAY,
                PROJECT_CONFIG_DISPLAY
            )));
        }

        let credentials = Credentials {
            api_key: lookup(API_KEY).unwrap_or_default(),
            api_secret: lookup(API_SECRET).unwrap_or_default(),
            access_token: lookup(ACCESS_TOKEN).unwrap_or_default(),
            access_token_secret: lookup(ACCESS_TOKEN_SECRET).unwrap_or_default(),
        };
        debug!("Credentials loaded: {:?}", credentials);
        Ok(credentials)
    }
}
