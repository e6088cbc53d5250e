//! Configuration system for the symcrypt CLI.
//!
//! The configuration only says where to find the key, never the key itself.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// symcrypt CLI configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    /// Key source configuration
    #[serde(default)]
    pub key: KeyConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Key source configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct KeyConfig {
    /// Environment variable holding the hex-encoded key
    #[serde(default = "default_key_env_var")]
    pub env_var: String,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoggingConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    pub level: String,
}

// Default values

fn default_key_env_var() -> String {
    "SYMCRYPT_KEY".to_string()
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for KeyConfig {
    fn default() -> Self {
        Self {
            env_var: default_key_env_var(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl Config {
    /// Load configuration from file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let contents = fs::read_to_string(path)?;
        let config: Self = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Get default config path, if the platform has a user config directory
    #[must_use]
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("symcrypt/config.toml"))
    }

    /// Load config from default path, or fall back to defaults if it doesn't exist
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_or_default() -> anyhow::Result<Self> {
        Self::load_if_present(Self::default_path().as_deref())
    }

    /// Load `path` if it names an existing file, otherwise use defaults
    fn load_if_present(path: Option<&Path>) -> anyhow::Result<Self> {
        match path {
            Some(path) if path.exists() => Self::load(path),
            _ => Ok(Self::default()),
        }
    }

    /// Validate configuration
    ///
    /// # Errors
    ///
    /// Returns an error if configuration is invalid.
    pub fn validate(&self) -> anyhow::Result<()> {
        validate_env_var_name(&self.key.env_var)?;

        // Validate log level
        let valid_log_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_log_levels.contains(&self.logging.level.to_lowercase().as_str()) {
            anyhow::bail!(
                "Invalid log level: {}. Must be one of: {}",
                self.logging.level,
                valid_log_levels.join(", ")
            );
        }

        Ok(())
    }
}

/// Validate an environment variable name (`[A-Za-z_][A-Za-z0-9_]*`)
///
/// # Errors
///
/// Returns an error if the name is empty or contains other characters.
pub fn validate_env_var_name(name: &str) -> anyhow::Result<()> {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        anyhow::bail!("Key environment variable name is empty");
    };

    if !(first.is_ascii_alphabetic() || first == '_')
        || !chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
    {
        anyhow::bail!("Invalid key environment variable name: {name}");
    }

    Ok(())
}
