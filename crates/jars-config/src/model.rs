use serde::{de::Deserializer, Deserialize, Serialize};
use std::{fmt, path::PathBuf};

use crate::ConfigError;

/// Directory name used under the platform config dir.
pub const APP_DIR_NAME: &str = "six_jars";

/// Stores user-configurable shell preferences.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "Config::default_locale")]
    pub locale: String,
    #[serde(default)]
    pub theme: Theme,
    #[serde(default)]
    pub accessibility: AccessibilitySettings,
    #[serde(default = "Config::default_true")]
    pub ui_color_enabled: bool,
    /// Recompute the summary after every configuration change.
    #[serde(default = "Config::default_true")]
    pub auto_recompute: bool,
    #[serde(default)]
    pub display: DisplaySettings,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locale: Self::default_locale(),
            theme: Theme::default(),
            accessibility: AccessibilitySettings::default(),
            ui_color_enabled: true,
            auto_recompute: true,
            display: DisplaySettings::default(),
        }
    }
}

impl Config {
    pub fn default_locale() -> String {
        "en-US".into()
    }

    fn default_true() -> bool {
        true
    }

    /// Keys accepted by [`Config::set`].
    pub const KEYS: [&'static str; 9] = [
        "locale",
        "theme",
        "color",
        "auto-recompute",
        "plain-output",
        "high-contrast",
        "decimal-separator",
        "grouping-separator",
        "fraction-digits",
    ];

    /// Resolves the directory holding `config/config.json`.
    ///
    /// An explicit override wins; otherwise the platform config dir is used,
    /// falling back to the home dir and finally the working directory.
    pub fn resolve_base_dir(override_dir: Option<PathBuf>) -> PathBuf {
        if let Some(path) = override_dir {
            return path;
        }
        dirs::config_dir()
            .or_else(dirs::home_dir)
            .unwrap_or_else(|| PathBuf::from("."))
            .join(APP_DIR_NAME)
    }

    /// Colour is used only when enabled and no accessibility mode asks for
    /// plain text.
    pub fn use_color(&self) -> bool {
        self.ui_color_enabled && !self.accessibility.plain_output
    }

    /// Updates one preference from its shell spelling.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let value = value.trim();
        match key.trim().to_ascii_lowercase().as_str() {
            "locale" => self.locale = value.to_string(),
            "theme" => self.theme = Theme::from_str(value),
            "color" => self.ui_color_enabled = parse_flag(key, value)?,
            "auto-recompute" => self.auto_recompute = parse_flag(key, value)?,
            "plain-output" => self.accessibility.plain_output = parse_flag(key, value)?,
            "high-contrast" => self.accessibility.high_contrast = parse_flag(key, value)?,
            "decimal-separator" => self.display.decimal_separator = parse_char(key, value)?,
            "grouping-separator" => self.display.grouping_separator = parse_char(key, value)?,
            "fraction-digits" => {
                let digits = value.parse::<u8>().map_err(|err| invalid(key, value, err))?;
                if digits > DisplaySettings::MAX_FRACTION_DIGITS {
                    return Err(invalid(
                        key,
                        value,
                        format!("at most {}", DisplaySettings::MAX_FRACTION_DIGITS),
                    ));
                }
                self.display.max_fraction_digits = digits;
            }
            other => return Err(ConfigError::UnknownKey(other.to_string())),
        }
        Ok(())
    }

    /// Current preferences as `(key, value)` pairs, in [`Config::KEYS`] order.
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        vec![
            ("locale", self.locale.clone()),
            ("theme", self.theme.to_string()),
            ("color", self.ui_color_enabled.to_string()),
            ("auto-recompute", self.auto_recompute.to_string()),
            ("plain-output", self.accessibility.plain_output.to_string()),
            ("high-contrast", self.accessibility.high_contrast.to_string()),
            (
                "decimal-separator",
                self.display.decimal_separator.to_string(),
            ),
            (
                "grouping-separator",
                self.display.grouping_separator.to_string(),
            ),
            (
                "fraction-digits",
                self.display.max_fraction_digits.to_string(),
            ),
        ]
    }
}

fn invalid(key: &str, value: &str, reason: impl fmt::Display) -> ConfigError {
    ConfigError::InvalidValue {
        key: key.to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

fn parse_flag(key: &str, value: &str) -> Result<bool, ConfigError> {
    match value.to_ascii_lowercase().as_str() {
        "on" | "true" | "yes" | "1" => Ok(true),
        "off" | "false" | "no" | "0" => Ok(false),
        _ => Err(invalid(key, value, "expected on/off")),
    }
}

fn parse_char(key: &str, value: &str) -> Result<char, ConfigError> {
    if value.eq_ignore_ascii_case("space") {
        return Ok(' ');
    }
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) => Ok(ch),
        _ => Err(invalid(key, value, "expected a single character")),
    }
}

/// Label style for jars: icons in front of labels, or text only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Plain,
    Iconic,
}

impl Theme {
    fn from_value(value: Option<String>) -> Self {
        value
            .map(|v| Theme::from_str(v.trim()))
            .unwrap_or_default()
    }

    pub fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "plain" => Theme::Plain,
            _ => Theme::Iconic,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Theme::Iconic
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Theme::Plain => "plain",
            Theme::Iconic => "iconic",
        };
        f.write_str(label)
    }
}

impl<'de> Deserialize<'de> for Theme {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<String>::deserialize(deserializer)?;
        Ok(Theme::from_value(value))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AccessibilitySettings {
    #[serde(default)]
    pub plain_output: bool,
    #[serde(default)]
    pub high_contrast: bool,
}

/// Number rendering used by the summary and configuration views.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplaySettings {
    #[serde(default = "DisplaySettings::default_decimal_separator")]
    pub decimal_separator: char,
    #[serde(default = "DisplaySettings::default_grouping_separator")]
    pub grouping_separator: char,
    #[serde(default = "DisplaySettings::default_fraction_digits")]
    pub max_fraction_digits: u8,
}

impl DisplaySettings {
    /// Amounts are derived with four decimals; showing more is meaningless.
    pub const MAX_FRACTION_DIGITS: u8 = 4;

    fn default_decimal_separator() -> char {
        '.'
    }

    fn default_grouping_separator() -> char {
        ','
    }

    fn default_fraction_digits() -> u8 {
        2
    }
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            decimal_separator: Self::default_decimal_separator(),
            grouping_separator: Self::default_grouping_separator(),
            max_fraction_digits: Self::default_fraction_digits(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_json_yields_defaults() {
        let config: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn unknown_theme_falls_back_to_iconic() {
        let config: Config = serde_json::from_str(r#"{"theme":"neon"}"#).unwrap();
        assert_eq!(config.theme, Theme::Iconic);
        let config: Config = serde_json::from_str(r#"{"theme":null}"#).unwrap();
        assert_eq!(config.theme, Theme::Iconic);
    }

    #[test]
    fn set_updates_known_keys() {
        let mut config = Config::default();
        config.set("theme", "plain").unwrap();
        config.set("auto-recompute", "off").unwrap();
        config.set("grouping-separator", "space").unwrap();
        config.set("fraction-digits", "4").unwrap();

        assert_eq!(config.theme, Theme::Plain);
        assert!(!config.auto_recompute);
        assert_eq!(config.display.grouping_separator, ' ');
        assert_eq!(config.display.max_fraction_digits, 4);
    }

    #[test]
    fn set_rejects_bad_input() {
        let mut config = Config::default();
        assert!(matches!(
            config.set("volume", "11"),
            Err(ConfigError::UnknownKey(key)) if key == "volume"
        ));
        assert!(matches!(
            config.set("color", "maybe"),
            Err(ConfigError::InvalidValue { .. })
        ));
        assert!(matches!(
            config.set("fraction-digits", "9"),
            Err(ConfigError::InvalidValue { .. })
        ));
    }

    #[test]
    fn plain_output_disables_color() {
        let mut config = Config::default();
        assert!(config.use_color());
        config.accessibility.plain_output = true;
        assert!(!config.use_color());
    }

    #[test]
    fn entries_follow_key_order() {
        let keys: Vec<&str> = Config::default()
            .entries()
            .into_iter()
            .map(|(key, _)| key)
            .collect();
        assert_eq!(keys, Config::KEYS);
    }
}
