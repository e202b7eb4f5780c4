//! Screens of the storefront shell and the root view that hosts them.

use std::rc::Rc;

use gpui::{App, Window};

use crate::{
    navigation::{Route, Tab},
    theme::{AppearanceMode, StyleSheet, Theme},
};

mod cart;
pub use cart::*;

mod categories;
pub use categories::*;

mod header;
pub use header::*;

mod home;
pub use home::*;

mod profile;
pub use profile::*;

mod storefront;
pub use storefront::*;

mod tab_bar;
pub use tab_bar::*;

/// Asks the root view to navigate somewhere.
pub type Navigate = Rc<dyn Fn(&Route, &mut Window, &mut App) + 'static>;

/// Asks the root view to switch tabs.
pub type SelectTab = Rc<dyn Fn(&Tab, &mut Window, &mut App) + 'static>;

/// Every screen's style sheet for one render pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenStyles {
    pub header: HeaderStyles,
    pub tab_bar: TabBarStyles,
    pub home: HomeStyles,
    pub categories: CategoriesStyles,
    pub cart: CartStyles,
    pub profile: ProfileStyles,
}

impl ScreenStyles {
    /// Resolves the palette once and derives every sheet from it.
    pub fn derive(theme: &Theme, mode: AppearanceMode) -> Self {
        let colors = theme.resolve(mode);

        Self {
            header: HeaderStyles::from_colors(&colors),
            tab_bar: TabBarStyles::from_colors(&colors),
            home: HomeStyles::from_colors(&colors),
            categories: CategoriesStyles::from_colors(&colors),
            cart: CartStyles::from_colors(&colors),
            profile: ProfileStyles::from_colors(&colors),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_screen_styles_match_individual_sheets() {
        let theme = Theme::storefront();

        for mode in AppearanceMode::ALL {
            let styles = ScreenStyles::derive(theme, mode);

            assert_eq!(styles.header, HeaderStyles::derive(theme, mode));
            assert_eq!(styles.tab_bar, TabBarStyles::derive(theme, mode));
            assert_eq!(styles.home, HomeStyles::derive(theme, mode));
            assert_eq!(styles.categories, CategoriesStyles::derive(theme, mode));
            assert_eq!(styles.cart, CartStyles::derive(theme, mode));
            assert_eq!(styles.profile, ProfileStyles::derive(theme, mode));
        }
    }

    #[test]
    fn test_screen_styles_differ_between_modes() {
        let theme = Theme::storefront();

        assert_ne!(
            ScreenStyles::derive(theme, AppearanceMode::Light),
            ScreenStyles::derive(theme, AppearanceMode::Dark)
        );
    }
}
