//! jars-config
//!
//! User display preferences for the Six Jars shell.
//! Owns the Config data structure plus its JSON file helpers. Calculation
//! state never lands here.

pub mod error;
pub mod manager;
pub mod model;

pub use error::ConfigError;
pub use manager::ConfigManager;
pub use model::{AccessibilitySettings, Config, DisplaySettings, Theme};
