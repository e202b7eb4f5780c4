use std::{fs, path::Path, sync::LazyLock};

use gpui::{Global, Rgba, SharedString, rgb};
use serde::Deserialize;

use super::deserializers::{de_color, de_variants};
use crate::{AppearanceMode, ThemeError, same_rgb};

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Theme {
    pub name: SharedString,
    pub brand: BrandColors,
    #[serde(deserialize_with = "de_variants")]
    pub variants: ThemeVariants,
}

static STOREFRONT: LazyLock<Theme> = LazyLock::new(|| {
    const TINT_LIGHT: u32 = 0x0A79DE;
    const TINT_DARK: u32 = 0xFFFFFF;

    Theme {
        name: "Storefront".into(),
        brand: BrandColors {
            primary: rgb(TINT_LIGHT),
            secondary: rgb(0x4B5563),
            accent: rgb(0xE63946),
            white: rgb(0xFFFFFF),
            black: rgb(0x000000),
            gray: rgb(0x9BA1A6),
            rating: rgb(0xFFC107),
        },
        variants: ThemeVariants {
            light: Palette {
                text: rgb(0x11181C),
                background: rgb(0xFFFFFF),
                tint: rgb(TINT_LIGHT),
                icon: rgb(0x687076),
                tab_icon_default: rgb(0x687076),
                tab_icon_selected: rgb(TINT_LIGHT),
                border: rgb(0xE0E0E0),
                card: rgb(0xF5F5F5),
            },
            dark: Palette {
                text: rgb(0xECEDEE),
                background: rgb(0x151718),
                tint: rgb(TINT_DARK),
                icon: rgb(0x9BA1A6),
                tab_icon_default: rgb(0x9BA1A6),
                tab_icon_selected: rgb(TINT_DARK),
                border: rgb(0x393E42),
                card: rgb(0x252A2E),
            },
        },
    }
});

impl Theme {
    /// The built-in storefront theme.
    pub fn storefront() -> &'static Theme {
        &STOREFRONT
    }

    pub fn from_string<S: AsRef<str>>(str: S) -> Result<Theme, ThemeError> {
        Ok(serde_json::from_str(str.as_ref())?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Theme, ThemeError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| ThemeError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_string(contents)
    }

    /// Returns the palette for `mode`. Pure and total over both modes.
    pub fn resolve_palette(&self, mode: AppearanceMode) -> Palette {
        *self.variants.get(mode)
    }

    /// Mode-invariant brand colors.
    pub fn brand(&self) -> &BrandColors {
        &self.brand
    }

    /// Resolves the palette for `mode` together with the brand colors.
    pub fn resolve(&self, mode: AppearanceMode) -> ResolvedColors {
        ResolvedColors {
            mode,
            palette: self.resolve_palette(mode),
            brand: self.brand,
        }
    }
}

impl AsRef<Theme> for Theme {
    fn as_ref(&self) -> &Theme {
        self
    }
}

impl Global for Theme {}

/// Colors that don't change with the appearance mode.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BrandColors {
    #[serde(deserialize_with = "de_color")]
    pub primary: Rgba,
    #[serde(deserialize_with = "de_color")]
    pub secondary: Rgba,
    #[serde(deserialize_with = "de_color")]
    pub accent: Rgba,
    #[serde(deserialize_with = "de_color")]
    pub white: Rgba,
    #[serde(deserialize_with = "de_color")]
    pub black: Rgba,
    #[serde(deserialize_with = "de_color")]
    pub gray: Rgba,
    #[serde(deserialize_with = "de_color")]
    pub rating: Rgba,
}

impl BrandColors {
    pub fn all(&self) -> [Rgba; 7] {
        [
            self.primary,
            self.secondary,
            self.accent,
            self.white,
            self.black,
            self.gray,
            self.rating,
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThemeVariants {
    pub light: Palette,
    pub dark: Palette,
}

impl ThemeVariants {
    pub fn get(&self, mode: AppearanceMode) -> &Palette {
        match mode {
            AppearanceMode::Light => &self.light,
            AppearanceMode::Dark => &self.dark,
        }
    }

    /// Builds the variant pair from a list holding exactly one entry per mode.
    pub fn from_list(
        variants: impl IntoIterator<Item = ThemeVariant>,
    ) -> Result<ThemeVariants, ThemeError> {
        let mut light = None;
        let mut dark = None;

        for variant in variants {
            let slot = match variant.kind {
                AppearanceMode::Light => &mut light,
                AppearanceMode::Dark => &mut dark,
            };

            if slot.replace(variant.colors).is_some() {
                return Err(ThemeError::DuplicateVariant(variant.kind));
            }
        }

        Ok(ThemeVariants {
            light: light.ok_or(ThemeError::MissingVariant(AppearanceMode::Light))?,
            dark: dark.ok_or(ThemeError::MissingVariant(AppearanceMode::Dark))?,
        })
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ThemeVariant {
    pub kind: AppearanceMode,
    pub colors: Palette,
}

/// Semantic colors for one appearance mode.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Palette {
    #[serde(deserialize_with = "de_color")]
    pub text: Rgba,
    #[serde(deserialize_with = "de_color")]
    pub background: Rgba,
    #[serde(deserialize_with = "de_color")]
    pub tint: Rgba,
    #[serde(deserialize_with = "de_color")]
    pub icon: Rgba,
    #[serde(deserialize_with = "de_color")]
    pub tab_icon_default: Rgba,
    #[serde(deserialize_with = "de_color")]
    pub tab_icon_selected: Rgba,
    #[serde(deserialize_with = "de_color")]
    pub border: Rgba,
    #[serde(deserialize_with = "de_color")]
    pub card: Rgba,
}

impl Palette {
    pub fn get(&self, role: PaletteRole) -> Rgba {
        match role {
            PaletteRole::Text => self.text,
            PaletteRole::Background => self.background,
            PaletteRole::Tint => self.tint,
            PaletteRole::Icon => self.icon,
            PaletteRole::TabIconDefault => self.tab_icon_default,
            PaletteRole::TabIconSelected => self.tab_icon_selected,
            PaletteRole::Border => self.border,
            PaletteRole::Card => self.card,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (PaletteRole, Rgba)> + '_ {
        PaletteRole::ALL.into_iter().map(|role| (role, self.get(role)))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaletteRole {
    Text,
    Background,
    Tint,
    Icon,
    TabIconDefault,
    TabIconSelected,
    Border,
    Card,
}

impl PaletteRole {
    pub const ALL: [PaletteRole; 8] = [
        PaletteRole::Text,
        PaletteRole::Background,
        PaletteRole::Tint,
        PaletteRole::Icon,
        PaletteRole::TabIconDefault,
        PaletteRole::TabIconSelected,
        PaletteRole::Border,
        PaletteRole::Card,
    ];

    /// The key used for this role in theme files.
    pub fn name(&self) -> &'static str {
        match self {
            PaletteRole::Text => "text",
            PaletteRole::Background => "background",
            PaletteRole::Tint => "tint",
            PaletteRole::Icon => "icon",
            PaletteRole::TabIconDefault => "tab_icon_default",
            PaletteRole::TabIconSelected => "tab_icon_selected",
            PaletteRole::Border => "border",
            PaletteRole::Card => "card",
        }
    }
}

/// A palette resolved for one mode, paired with the brand colors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedColors {
    pub mode: AppearanceMode,
    pub palette: Palette,
    pub brand: BrandColors,
}

impl ResolvedColors {
    /// Whether `color` is one of the palette or brand colors.
    ///
    /// Alpha is ignored so translucent brand tints still count.
    pub fn provides(&self, color: Rgba) -> bool {
        self.palette
            .iter()
            .map(|(_, candidate)| candidate)
            .chain(self.brand.all())
            .any(|candidate| same_rgb(candidate, color))
    }
}
