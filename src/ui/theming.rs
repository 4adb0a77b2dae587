// SPDX-License-Identifier: MPL-2.0
//! Light/Dark/System theme mode management.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    /// Returns true if the effective theme is dark.
    /// For System mode, detects the actual system theme.
    #[must_use]
    pub fn is_dark(self) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            ThemeMode::System => {
                // Detect system theme; default to dark on detection error
                !matches!(dark_light::detect(), Ok(dark_light::Mode::Light))
            }
        }
    }

    /// Maps the mode to the Iced built-in theme.
    #[must_use]
    pub fn iced_theme(self) -> iced::Theme {
        if self.is_dark() {
            iced::Theme::Dark
        } else {
            iced::Theme::Light
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_modes_do_not_probe_system() {
        assert!(!ThemeMode::Light.is_dark());
        assert!(ThemeMode::Dark.is_dark());
    }

    #[test]
    fn serializes_lowercase() {
        #[derive(Serialize, Deserialize)]
        struct Wrapper {
            mode: ThemeMode,
        }
        let text = toml::to_string(&Wrapper {
            mode: ThemeMode::Dark,
        })
        .expect("serialize");
        assert!(text.contains("\"dark\""));
        let back: Wrapper = toml::from_str("mode = \"light\"").expect("parse");
        assert_eq!(back.mode, ThemeMode::Light);
    }
}
