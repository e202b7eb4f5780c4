use std::fmt;

use gpui::WindowAppearance;
use serde::{Deserialize, Serialize};

/// Which palette variant is active.
///
/// The host reports its appearance as an ambient signal; it is converted into
/// an `AppearanceMode` once per render pass and then passed down explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppearanceMode {
    #[default]
    Light,
    Dark,
}

impl AppearanceMode {
    pub const ALL: [AppearanceMode; 2] = [AppearanceMode::Light, AppearanceMode::Dark];

    /// Interprets a raw appearance signal.
    ///
    /// Anything other than `light` or `dark` (including a missing signal)
    /// resolves to [`AppearanceMode::Light`].
    pub fn from_signal(signal: Option<&str>) -> Self {
        match signal.map(str::trim) {
            Some(value) if value.eq_ignore_ascii_case("light") => Self::Light,
            Some(value) if value.eq_ignore_ascii_case("dark") => Self::Dark,
            other => {
                tracing::debug!(signal = ?other, "unrecognized appearance signal, using light");
                Self::Light
            }
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, Self::Dark)
    }
}

impl fmt::Display for AppearanceMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<WindowAppearance> for AppearanceMode {
    fn from(appearance: WindowAppearance) -> Self {
        match appearance {
            WindowAppearance::Light | WindowAppearance::VibrantLight => Self::Light,
            WindowAppearance::Dark | WindowAppearance::VibrantDark => Self::Dark,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_known_signals() {
        assert_eq!(AppearanceMode::from_signal(Some("light")), AppearanceMode::Light);
        assert_eq!(AppearanceMode::from_signal(Some("dark")), AppearanceMode::Dark);
        assert_eq!(AppearanceMode::from_signal(Some(" DARK ")), AppearanceMode::Dark);
    }

    #[test]
    fn test_missing_signal_falls_back_to_light() {
        assert_eq!(AppearanceMode::from_signal(None), AppearanceMode::Light);
        assert_eq!(AppearanceMode::from_signal(Some("")), AppearanceMode::Light);
        assert_eq!(AppearanceMode::default(), AppearanceMode::Light);
    }

    #[test]
    fn test_window_appearance_mapping() {
        assert_eq!(
            AppearanceMode::from(WindowAppearance::VibrantLight),
            AppearanceMode::Light
        );
        assert_eq!(
            AppearanceMode::from(WindowAppearance::VibrantDark),
            AppearanceMode::Dark
        );
        assert_eq!(AppearanceMode::from(WindowAppearance::Dark), AppearanceMode::Dark);
        assert_eq!(AppearanceMode::from(WindowAppearance::Light), AppearanceMode::Light);
    }

    #[test]
    fn test_serde_uses_lowercase_names() {
        let json = serde_json::to_string(&AppearanceMode::Dark).unwrap();
        assert_eq!(json, "\"dark\"");

        let mode: AppearanceMode = serde_json::from_str("\"light\"").unwrap();
        assert_eq!(mode, AppearanceMode::Light);
    }

    proptest! {
        #[test]
        fn prop_unrecognized_signal_is_light(signal in "\\PC*") {
            let trimmed = signal.trim();
            prop_assume!(!trimmed.eq_ignore_ascii_case("light"));
            prop_assume!(!trimmed.eq_ignore_ascii_case("dark"));

            prop_assert_eq!(AppearanceMode::from_signal(Some(&signal)), AppearanceMode::Light);
        }
    }
}
