#![allow(missing_docs)] // Derive macros generate undocumented methods.

use enum_assoc::Assoc;
use gpui::Rgba;

use crate::theme::BrandColors;

/// Brand colors that content (banners, highlights) can refer to by name.
#[derive(Assoc, Debug, Clone, Copy, PartialEq, Eq)]
#[func(pub fn resolve(&self, brand: &BrandColors) -> Rgba)]
pub enum BrandRole {
    /// Main brand blue.
    #[assoc(resolve = brand.primary)]
    Primary,
    /// Neutral slate.
    #[assoc(resolve = brand.secondary)]
    Secondary,
    /// Sales and alerts.
    #[assoc(resolve = brand.accent)]
    Accent,
    #[assoc(resolve = brand.white)]
    White,
    #[assoc(resolve = brand.black)]
    Black,
    #[assoc(resolve = brand.gray)]
    Gray,
    /// Product rating stars.
    #[assoc(resolve = brand.rating)]
    Rating,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::{Theme, to_hex};

    #[test]
    fn test_brand_role_resolves_brand_colors() {
        let brand = Theme::storefront().brand();

        assert_eq!(BrandRole::Primary.resolve(brand), brand.primary);
        assert_eq!(BrandRole::Secondary.resolve(brand), brand.secondary);
        assert_eq!(BrandRole::Accent.resolve(brand), brand.accent);
        assert_eq!(to_hex(BrandRole::Rating.resolve(brand)), "#FFC107");
    }

    #[test]
    fn test_every_role_is_a_brand_color() {
        let brand = Theme::storefront().brand();
        let roles = [
            BrandRole::Primary,
            BrandRole::Secondary,
            BrandRole::Accent,
            BrandRole::White,
            BrandRole::Black,
            BrandRole::Gray,
            BrandRole::Rating,
        ];

        for role in roles {
            assert!(brand.all().contains(&role.resolve(brand)), "{role:?}");
        }
    }
}
