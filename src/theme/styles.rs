use gpui::{BoxShadow, Rgba, Styled, point, px};
pub use indexmap::IndexMap;

use crate::theme::{AppearanceMode, ResolvedColors, Theme};

/// The colors a single named style rule applies.
///
/// Layout lives with the element; a rule only carries the role-bound colors
/// so every one of them can be traced back to the resolved palette.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct StyleRule {
    pub color: Option<Rgba>,
    pub background: Option<Rgba>,
    pub border: Option<Rgba>,
    pub shadow: Option<Rgba>,
}

impl StyleRule {
    pub const fn new() -> Self {
        Self {
            color: None,
            background: None,
            border: None,
            shadow: None,
        }
    }

    pub fn color(mut self, color: Rgba) -> Self {
        self.color = Some(color);
        self
    }

    pub fn background(mut self, color: Rgba) -> Self {
        self.background = Some(color);
        self
    }

    pub fn border(mut self, color: Rgba) -> Self {
        self.border = Some(color);
        self
    }

    pub fn shadow(mut self, color: Rgba) -> Self {
        self.shadow = Some(color);
        self
    }

    /// Every color this rule sets.
    pub fn colors(&self) -> impl Iterator<Item = Rgba> {
        [self.color, self.background, self.border, self.shadow]
            .into_iter()
            .flatten()
    }
}

/// Exposes a style sheet's rules by name.
///
/// Implemented by [`style_sheet!`](crate::style_sheet).
pub trait NamedRules {
    fn rules(&self) -> IndexMap<&'static str, StyleRule>;
}

/// A screen's style rules, derived from a resolved palette.
pub trait StyleSheet: NamedRules + Sized {
    fn from_colors(colors: &ResolvedColors) -> Self;

    /// Resolves the palette for `mode` once and derives the sheet from it.
    fn derive(theme: &Theme, mode: AppearanceMode) -> Self {
        Self::from_colors(&theme.resolve(mode))
    }
}

/// Declares a style sheet struct with one [`StyleRule`] per listed name.
#[macro_export]
macro_rules! style_sheet {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident { $( $rule:ident ),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default, PartialEq)]
        $vis struct $name {
            $( pub $rule: $crate::theme::StyleRule, )+
        }

        impl $crate::theme::NamedRules for $name {
            fn rules(&self) -> $crate::theme::IndexMap<&'static str, $crate::theme::StyleRule> {
                $crate::theme::IndexMap::from([ $( (stringify!($rule), self.$rule) ),+ ])
            }
        }
    };
}

/// Applies a [`StyleRule`] to any styled element.
pub trait StyleRuleExt: Styled + Sized {
    fn rule(mut self, rule: StyleRule) -> Self {
        if let Some(color) = rule.color {
            self = self.text_color(color);
        }
        if let Some(color) = rule.background {
            self = self.bg(color);
        }
        if let Some(color) = rule.border {
            self = self.border_color(color);
        }
        if let Some(color) = rule.shadow {
            self = self.shadow(vec![BoxShadow {
                color: color.into(),
                offset: point(px(0.), px(2.)),
                blur_radius: px(4.),
                spread_radius: px(0.),
            }]);
        }
        self
    }
}

impl<E: Styled> StyleRuleExt for E {}

#[cfg(test)]
pub(crate) mod test_support {
    use gpui::rgb;

    use super::*;
    use crate::theme::{BrandColors, Palette, ThemeVariants, to_hex};

    /// A theme where every color is unique, so a hardcoded literal in a style
    /// function can't accidentally match a palette entry.
    pub fn distinct_theme() -> Theme {
        Theme {
            name: "Distinct".into(),
            brand: BrandColors {
                primary: rgb(0x010101),
                secondary: rgb(0x020202),
                accent: rgb(0x030303),
                white: rgb(0x040404),
                black: rgb(0x050505),
                gray: rgb(0x060606),
                rating: rgb(0x070707),
            },
            variants: ThemeVariants {
                light: Palette {
                    text: rgb(0x101010),
                    background: rgb(0x111111),
                    tint: rgb(0x121212),
                    icon: rgb(0x131313),
                    tab_icon_default: rgb(0x141414),
                    tab_icon_selected: rgb(0x151515),
                    border: rgb(0x161616),
                    card: rgb(0x171717),
                },
                dark: Palette {
                    text: rgb(0x202020),
                    background: rgb(0x212121),
                    tint: rgb(0x222222),
                    icon: rgb(0x232323),
                    tab_icon_default: rgb(0x242424),
                    tab_icon_selected: rgb(0x252525),
                    border: rgb(0x262626),
                    card: rgb(0x272727),
                },
            },
        }
    }

    /// Checks that `S` only uses palette or brand colors and derives the same
    /// rules every time, for both modes and for both the built-in and a
    /// substituted theme.
    pub fn assert_sheet_sourced_from_palette<S: StyleSheet>() {
        for theme in [Theme::storefront().clone(), distinct_theme()] {
            for mode in AppearanceMode::ALL {
                let colors = theme.resolve(mode);
                let rules = S::derive(&theme, mode).rules();

                assert!(!rules.is_empty());
                assert_eq!(rules, S::derive(&theme, mode).rules());

                for (name, rule) in &rules {
                    for color in rule.colors() {
                        assert!(
                            colors.provides(color),
                            "rule `{name}` in {mode} mode uses {} outside the palette",
                            to_hex(color)
                        );
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use gpui::rgb;

    use super::*;
    use crate::style_sheet;

    style_sheet! {
        struct SampleStyles { container, title }
    }

    impl StyleSheet for SampleStyles {
        fn from_colors(colors: &ResolvedColors) -> Self {
            Self {
                container: StyleRule::new().background(colors.palette.background),
                title: StyleRule::new().color(colors.palette.text),
            }
        }
    }

    #[test]
    fn test_rule_colors() {
        let rule = StyleRule::new().color(rgb(0x111111)).border(rgb(0x222222));
        let colors: Vec<_> = rule.colors().collect();

        assert_eq!(colors, vec![rgb(0x111111), rgb(0x222222)]);
        assert_eq!(StyleRule::new().colors().count(), 0);
    }

    #[test]
    fn test_rules_keep_declaration_order() {
        let sheet = SampleStyles::derive(Theme::storefront(), AppearanceMode::Light);
        let names: Vec<_> = sheet.rules().keys().copied().collect();

        assert_eq!(names, vec!["container", "title"]);
    }

    #[test]
    fn test_derive_uses_requested_mode() {
        let theme = Theme::storefront();
        let sheet = SampleStyles::derive(theme, AppearanceMode::Dark);

        assert_eq!(
            sheet.container.background,
            Some(theme.resolve_palette(AppearanceMode::Dark).background)
        );
    }

    #[test]
    fn test_sample_sheet_is_sourced_from_palette() {
        test_support::assert_sheet_sourced_from_palette::<SampleStyles>();
    }
}
