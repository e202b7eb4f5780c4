//! Runtime configuration read from the environment.

use std::path::PathBuf;

use gpui::WindowAppearance;

use crate::theme::{AppearanceMode, Theme};

pub const APPEARANCE_VAR: &str = "STOREFRONT_APPEARANCE";
pub const THEME_VAR: &str = "STOREFRONT_THEME";

/// Whether the shell follows the window's appearance or pins one mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppearancePreference {
    #[default]
    System,
    Fixed(AppearanceMode),
}

impl AppearancePreference {
    /// Parses `light`, `dark` or `system`. Anything else follows the system.
    pub fn parse(value: Option<&str>) -> Self {
        let Some(value) = value.map(str::trim).filter(|value| !value.is_empty()) else {
            return Self::System;
        };

        if value.eq_ignore_ascii_case("light") {
            Self::Fixed(AppearanceMode::Light)
        } else if value.eq_ignore_ascii_case("dark") {
            Self::Fixed(AppearanceMode::Dark)
        } else {
            if !value.eq_ignore_ascii_case("system") {
                tracing::debug!(value, "unrecognized appearance preference, following system");
            }
            Self::System
        }
    }

    /// The mode to render with, given what the window currently reports.
    pub fn resolve(&self, window_appearance: WindowAppearance) -> AppearanceMode {
        match self {
            Self::System => AppearanceMode::from(window_appearance),
            Self::Fixed(mode) => *mode,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StorefrontConfig {
    pub appearance: AppearancePreference,
    /// A JSON theme replacing the built-in one.
    pub theme_path: Option<PathBuf>,
}

impl StorefrontConfig {
    pub fn from_env() -> Self {
        Self::from_vars(|name| std::env::var(name).ok())
    }

    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            appearance: AppearancePreference::parse(lookup(APPEARANCE_VAR).as_deref()),
            theme_path: lookup(THEME_VAR)
                .filter(|path| !path.trim().is_empty())
                .map(PathBuf::from),
        }
    }

    /// Loads the configured theme, or the built-in one when none is set or
    /// the file can't be used.
    pub fn load_theme(&self) -> Theme {
        let Some(path) = self.theme_path.as_ref() else {
            return Theme::storefront().clone();
        };

        match Theme::from_path(path) {
            Ok(theme) => {
                tracing::info!(path = %path.display(), name = %theme.name, "loaded theme");
                theme
            }
            Err(error) => {
                tracing::warn!(
                    path = %path.display(),
                    %error,
                    "failed to load theme, using built-in"
                );
                Theme::storefront().clone()
            }
        }
    }
}
