//! Hardcoded storefront content.

use crate::{components::IconKind, navigation::Route, theme::BrandRole};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Product {
    pub id: &'static str,
    pub name: &'static str,
    /// Price in whole kwanza.
    pub price: u64,
    pub old_price: Option<u64>,
    pub rating: f32,
}

impl Product {
    /// Percentage saved against the old price, rounded down.
    pub fn discount_percent(&self) -> Option<u8> {
        let old_price = self.old_price?;
        if old_price <= self.price || old_price == 0 {
            return None;
        }

        Some(((old_price - self.price) * 100 / old_price) as u8)
    }

    pub fn route(&self) -> Route {
        Route::Product(self.id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeroBanner {
    pub id: &'static str,
    pub headline: &'static str,
    pub caption: &'static str,
    pub color: BrandRole,
    pub route: Route,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Category {
    pub id: &'static str,
    pub name: &'static str,
    pub icon: IconKind,
}

pub static HERO_BANNERS: [HeroBanner; 3] = [
    HeroBanner {
        id: "1",
        headline: "50% OFF",
        caption: "Electrónica",
        color: BrandRole::Primary,
        route: Route::Category("electronics"),
    },
    HeroBanner {
        id: "2",
        headline: "Novidades",
        caption: "Moda",
        color: BrandRole::Accent,
        route: Route::Category("clothing"),
    },
    HeroBanner {
        id: "3",
        headline: "Entrega",
        caption: "Grátis",
        color: BrandRole::Secondary,
        route: Route::Deals,
    },
];

pub static DEALS: [Product; 4] = [
    Product {
        id: "p1",
        name: "Smartphone Pro X",
        price: 250_000,
        old_price: Some(350_000),
        rating: 4.5,
    },
    Product {
        id: "p2",
        name: "Laptop Ultra",
        price: 650_000,
        old_price: None,
        rating: 4.8,
    },
    Product {
        id: "p3",
        name: "Fones de Ouvido",
        price: 45_000,
        old_price: Some(60_000),
        rating: 4.2,
    },
    Product {
        id: "p4",
        name: "Smart Watch",
        price: 80_000,
        old_price: None,
        rating: 4.6,
    },
];

pub static RECOMMENDED: [Product; 6] = [
    Product {
        id: "p5",
        name: "Camisa Casual",
        price: 15_000,
        old_price: None,
        rating: 4.0,
    },
    Product {
        id: "p6",
        name: "Sapatilhas Correr",
        price: 32_000,
        old_price: None,
        rating: 4.7,
    },
    Product {
        id: "p7",
        name: "Mochila Viagem",
        price: 25_000,
        old_price: None,
        rating: 4.4,
    },
    Product {
        id: "p8",
        name: "Máquina de Café",
        price: 55_000,
        old_price: Some(70_000),
        rating: 4.9,
    },
    Product {
        id: "p9",
        name: "Livro \"O Vendedor\"",
        price: 8_500,
        old_price: None,
        rating: 4.8,
    },
    Product {
        id: "p10",
        name: "Teclado Mecânico",
        price: 30_000,
        old_price: None,
        rating: 4.6,
    },
];

pub static CATEGORIES: [Category; 14] = [
    Category { id: "1", name: "Electrónicos", icon: IconKind::Chip },
    Category { id: "2", name: "Roupas", icon: IconKind::Shirt },
    Category { id: "3", name: "Alimentos", icon: IconKind::Food },
    Category { id: "4", name: "Acessórios", icon: IconKind::Watch },
    Category { id: "5", name: "Casa e Móveis", icon: IconKind::Home },
    Category { id: "6", name: "Livros", icon: IconKind::Book },
    Category { id: "7", name: "Desporto", icon: IconKind::Ball },
    Category { id: "8", name: "Beleza", icon: IconKind::Sparkles },
    Category { id: "9", name: "Saúde", icon: IconKind::Medkit },
    Category { id: "11", name: "Automóveis e Peças", icon: IconKind::Car },
    Category { id: "12", name: "Ferramentas e Construção", icon: IconKind::Wrench },
    Category { id: "13", name: "Animais de Estimação", icon: IconKind::Paw },
    Category { id: "14", name: "Tecnologia e Gadgets", icon: IconKind::Laptop },
    Category { id: "15", name: "Supermercado", icon: IconKind::Cart },
];

pub fn find_product(id: &str) -> Option<&'static Product> {
    DEALS.iter().chain(RECOMMENDED.iter()).find(|product| product.id == id)
}

/// Formats a kwanza amount the way pt-PT renders currency figures.
///
/// Two decimals after a comma; thousands are grouped with a no-break space,
/// but only once the integer part has five or more digits.
pub fn format_price(price: u64) -> String {
    const GROUP_SEPARATOR: char = '\u{a0}';

    let digits = price.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    if digits.len() < 5 {
        grouped.push_str(&digits);
    } else {
        for (index, digit) in digits.chars().enumerate() {
            if index > 0 && (digits.len() - index) % 3 == 0 {
                grouped.push(GROUP_SEPARATOR);
            }
            grouped.push(digit);
        }
    }

    format!("Kz {grouped},00")
}

/// Formats a rating the way the product cards show it: `4.5`, and `4` for
/// whole ratings.
pub fn format_rating(rating: f32) -> String {
    rating.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_price_groups_large_amounts() {
        assert_eq!(format_price(250_000), "Kz 250\u{a0}000,00");
        assert_eq!(format_price(45_000), "Kz 45\u{a0}000,00");
        assert_eq!(format_price(1_250_000), "Kz 1\u{a0}250\u{a0}000,00");
    }

    #[test]
    fn test_format_price_skips_grouping_below_five_digits() {
        assert_eq!(format_price(8_500), "Kz 8500,00");
        assert_eq!(format_price(0), "Kz 0,00");
        assert_eq!(format_price(999), "Kz 999,00");
    }

    #[test]
    fn test_discount_percent() {
        assert_eq!(DEALS[0].discount_percent(), Some(28));
        assert_eq!(DEALS[1].discount_percent(), None);
        assert_eq!(RECOMMENDED[3].discount_percent(), Some(21));
    }

    #[test]
    fn test_product_ids_are_unique() {
        let mut ids: Vec<_> = DEALS.iter().chain(RECOMMENDED.iter()).map(|p| p.id).collect();
        ids.sort();
        ids.dedup();

        assert_eq!(ids.len(), DEALS.len() + RECOMMENDED.len());
    }

    #[test]
    fn test_find_product() {
        assert_eq!(find_product("p8").map(|p| p.name), Some("Máquina de Café"));
        assert!(find_product("p42").is_none());
    }

    #[test]
    fn test_category_ten_is_absent() {
        assert!(CATEGORIES.iter().all(|category| category.id != "10"));
        assert_eq!(CATEGORIES.first().map(|c| c.name), Some("Electrónicos"));
    }

    #[test]
    fn test_format_rating() {
        assert_eq!(format_rating(4.0), "4");
        assert_eq!(format_rating(4.5), "4.5");
        assert_eq!(format_rating(4.2), "4.2");
        assert_eq!(format_rating(RECOMMENDED[0].rating), "4");
    }
}
