//! Configuration file loading and locale resolution.
//!
//! Loads configuration from:
//! - Linux: `~/.config/prettytime/config.toml`
//! - macOS: `~/Library/Application Support/prettytime/config.toml`
//! - Windows: `%APPDATA%\prettytime\config\config.toml`
//!
//! ```toml
//! [formatter]
//! locale = "de-DE"
//! ```
//!
//! ## Precedence
//!
//! The locale is resolved with the following precedence (highest first):
//! 1. Explicit argument
//! 2. `PRETTYTIME_LOCALE`
//! 3. Config file (`PRETTYTIME_CONFIG` overrides its path)
//! 4. Built-in default (`en-EN`)

pub mod paths;

use std::fs;
use std::path::Path;

use serde::Deserialize;

pub use paths::AppPaths;

use crate::error::{PrettyTimeError, Result};
use crate::locale;

// =============================================================================
// Environment Variable Names
// =============================================================================

/// Environment variable for the locale key.
pub const ENV_LOCALE: &str = "PRETTYTIME_LOCALE";
/// Environment variable to override config file path.
pub const ENV_CONFIG: &str = "PRETTYTIME_CONFIG";

/// Config key holding the locale, as reported in errors.
const LOCALE_KEY: &str = "formatter.locale";

// =============================================================================
// Config File
// =============================================================================

/// Contents of `config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub formatter: FormatterSection,
}

/// The `[formatter]` table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FormatterSection {
    /// Locale key, e.g. `"de-DE"`.
    pub locale: Option<String>,
}

impl Config {
    /// Load configuration from the default config file path.
    ///
    /// Returns default config if the platform has no config directory or the
    /// file doesn't exist.
    pub fn load() -> Result<Self> {
        AppPaths::new()
            .config_file()
            .map_or_else(|| Ok(Self::default()), |path| Self::load_from(&path))
    }

    /// Load configuration from a specific path.
    ///
    /// Returns default config if the file doesn't exist.
    /// Returns error only if the file exists but is invalid.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(?path, "Config file not found, using defaults");
            return Ok(Self::default());
        }

        tracing::debug!(?path, "Loading config file");
        let content = fs::read_to_string(path)?;
        Self::parse(&content, path)
    }

    fn parse(content: &str, path: &Path) -> Result<Self> {
        toml::from_str(content).map_err(|e| PrettyTimeError::ConfigParse {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Validate configuration values.
    ///
    /// The locale, when present and not blank, must name a registered
    /// phrase set.
    pub fn validate(&self) -> Result<()> {
        if let Some(key) = non_blank(self.formatter.locale.as_deref()) {
            if !locale::is_registered(key) {
                return Err(invalid_locale(LOCALE_KEY, key));
            }
        }
        Ok(())
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

fn invalid_locale(setting: &str, value: &str) -> PrettyTimeError {
    PrettyTimeError::ConfigInvalid {
        key: setting.to_string(),
        value: value.to_string(),
        message: format!(
            "unknown locale \"{value}\". Valid locales: {}",
            locale::available_locales().join(", ")
        ),
    }
}

// =============================================================================
// Resolved Settings
// =============================================================================

/// Where a configuration value came from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ConfigSource {
    /// Passed directly by the caller.
    Explicit,
    /// Value from environment variable.
    Env,
    /// Value from config file.
    ConfigFile,
    /// Built-in default.
    #[default]
    Default,
}

impl std::fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Explicit => write!(f, "explicit argument"),
            Self::Env => write!(f, "environment variable"),
            Self::ConfigFile => write!(f, "config file"),
            Self::Default => write!(f, "default"),
        }
    }
}

/// Final settings after merging arguments, env vars, and config file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedSettings {
    /// Canonical key of a registered locale.
    pub locale: String,
    /// Where `locale` came from.
    pub source: ConfigSource,
}

impl ResolvedSettings {
    /// Resolve settings from the environment and config file.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `PRETTYTIME_CONFIG` names a file that does not exist
    /// - The config file exists but cannot be parsed
    /// - The winning locale is not registered
    ///
    /// A bad file locale is only an error when nothing overrides it.
    pub fn resolve(explicit_locale: Option<&str>) -> Result<Self> {
        let config = Self::load_config()?;
        let env_locale = std::env::var(ENV_LOCALE).ok();
        Self::resolve_with(explicit_locale, env_locale.as_deref(), &config)
    }

    /// Resolve from already-gathered inputs. Blank values are ignored.
    ///
    /// # Errors
    ///
    /// An unregistered explicit locale yields `UnknownLocale`; an
    /// unregistered env or file locale yields `ConfigInvalid`.
    pub fn resolve_with(
        explicit_locale: Option<&str>,
        env_locale: Option<&str>,
        config: &Config,
    ) -> Result<Self> {
        let (locale, source) = if let Some(key) = non_blank(explicit_locale) {
            (locale::resolve(key)?.key, ConfigSource::Explicit)
        } else if let Some(key) = non_blank(env_locale) {
            let phrases = locale::resolve(key).map_err(|_| invalid_locale(ENV_LOCALE, key))?;
            (phrases.key, ConfigSource::Env)
        } else if let Some(key) = non_blank(config.formatter.locale.as_deref()) {
            let phrases = locale::resolve(key).map_err(|_| invalid_locale(LOCALE_KEY, key))?;
            (phrases.key, ConfigSource::ConfigFile)
        } else {
            (locale::DEFAULT_LOCALE, ConfigSource::Default)
        };

        tracing::debug!(locale, %source, "Resolved locale setting");
        Ok(Self {
            locale: locale.to_string(),
            source,
        })
    }

    /// Load config file, respecting the `PRETTYTIME_CONFIG` override.
    fn load_config() -> Result<Config> {
        match std::env::var(ENV_CONFIG) {
            Ok(path) if !path.trim().is_empty() => {
                let path = Path::new(path.trim());
                if !path.exists() {
                    return Err(PrettyTimeError::ConfigNotFound {
                        path: path.display().to_string(),
                    });
                }
                Config::load_from(path)
            }
            _ => Config::load(),
        }
    }
}

impl Default for ResolvedSettings {
    fn default() -> Self {
        Self {
            locale: locale::DEFAULT_LOCALE.to_string(),
            source: ConfigSource::Default,
        }
    }
}
