//! Configuration for the simulated LCD character panel.
//!
//! This crate provides:
//!
//! - `PanelConfig`: grid geometry, pixel colors and blink rate
//! - Default values used by serde when a field is omitted
//! - The `Color` type shared with the render engine
//! - YAML load/save and TOML parsing with validation

pub mod config;
pub mod defaults;
pub mod error;
mod types;

pub use config::PanelConfig;
pub use error::ConfigError;
pub use types::{Color, ColorParseError};
