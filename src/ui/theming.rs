// SPDX-License-Identifier: MPL-2.0
//! Light/Dark/System theme mode management.

use serde::{Deserialize, Serialize};

/// User-selectable theme mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ThemeMode {
    /// Follow the OS preference.
    #[default]
    System,
    Light,
    Dark,
}

impl ThemeMode {
    /// Every mode, in the order the settings screen presents them.
    pub const ALL: [ThemeMode; 3] = [ThemeMode::System, ThemeMode::Light, ThemeMode::Dark];

    /// The i18n message key for this mode's label.
    #[must_use]
    pub fn label_key(self) -> &'static str {
        match self {
            ThemeMode::System => "theme-system",
            ThemeMode::Light => "theme-light",
            ThemeMode::Dark => "theme-dark",
        }
    }

    /// Resolves the effective appearance, consulting the OS for `System`.
    #[must_use]
    pub fn is_dark(self) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            ThemeMode::System => {
                // Default to dark when detection is unavailable.
                !matches!(dark_light::detect(), Ok(dark_light::Mode::Light))
            }
        }
    }

    /// Maps the mode to an Iced theme.
    #[must_use]
    pub fn to_theme(self) -> iced::Theme {
        if self.is_dark() {
            iced::Theme::Dark
        } else {
            iced::Theme::Light
        }
    }
}
