//! Typed error variants for the lcd-panel-config crate.
//!
//! Loading and saving still return `anyhow::Result` at the file boundary;
//! callers that want to react to a specific failure can downcast.
//!
//! # Example
//!
//! ```rust,no_run
//! use lcd_panel_config::ConfigError;
//!
//! fn check_load_err(e: &anyhow::Error) {
//!     if let Some(cfg_err) = e.downcast_ref::<ConfigError>() {
//!         match cfg_err {
//!             ConfigError::Io(io) => eprintln!("I/O error: {io}"),
//!             ConfigError::Parse(p) => eprintln!("YAML parse error: {p}"),
//!             ConfigError::Toml(t) => eprintln!("TOML parse error: {t}"),
//!             ConfigError::Validation(msg) => eprintln!("Validation: {msg}"),
//!         }
//!     }
//! }
//! ```

use std::fmt;

/// Errors that can occur when reading, writing or validating a panel config.
#[derive(Debug)]
pub enum ConfigError {
    /// An I/O error occurred reading or writing the config file.
    Io(std::io::Error),

    /// The config file contained invalid YAML.
    Parse(serde_yaml_ng::Error),

    /// The config source contained invalid TOML.
    Toml(toml::de::Error),

    /// A field value failed semantic validation.
    ///
    /// The inner string names the field and the accepted range.
    Validation(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "I/O error reading panel config: {e}"),
            ConfigError::Parse(e) => write!(f, "YAML parse error in panel config: {e}"),
            ConfigError::Toml(e) => write!(f, "TOML parse error in panel config: {e}"),
            ConfigError::Validation(msg) => write!(f, "Panel config validation error: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(e) => Some(e),
            ConfigError::Parse(e) => Some(e),
            ConfigError::Toml(e) => Some(e),
            ConfigError::Validation(_) => None,
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}

impl From<serde_yaml_ng::Error> for ConfigError {
    fn from(e: serde_yaml_ng::Error) -> Self {
        ConfigError::Parse(e)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::Toml(e)
    }
}
