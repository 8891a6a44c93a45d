//! Application settings

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Visual theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    /// Check if this is the dark theme
    pub fn is_dark(&self) -> bool {
        matches!(self, Self::Dark)
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Light => write!(f, "light"),
            Self::Dark => write!(f, "dark"),
        }
    }
}

impl FromStr for ThemeMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(format!("unknown theme '{}'", other)),
        }
    }
}

/// Persisted user preferences
///
/// Missing fields fall back to their defaults and unknown fields are
/// ignored, so older or newer payloads still load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AppSettings {
    pub theme: ThemeMode,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        assert_eq!(AppSettings::default().theme, ThemeMode::Light);
    }

    #[test]
    fn test_missing_theme_defaults_to_light() {
        let settings: AppSettings = serde_json::from_str(r#"{"currency":"INR"}"#).unwrap();
        assert_eq!(settings.theme, ThemeMode::Light);
    }

    #[test]
    fn test_theme_parse() {
        assert_eq!("Dark".parse::<ThemeMode>().unwrap(), ThemeMode::Dark);
        assert!("sepia".parse::<ThemeMode>().is_err());
    }
}
