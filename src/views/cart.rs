use gpui::{FontWeight, IntoElement, ParentElement, RenderOnce, Styled, div, px};

use crate::{
    components::{Icon, IconKind, Touchable},
    navigation::{Route, Tab},
    style_sheet,
    theme::{ResolvedColors, StyleRule, StyleRuleExt, StyleSheet},
    views::Navigate,
};

pub const EMPTY_CART_TITLE: &str = "O seu carrinho está vazio";
pub const EMPTY_CART_CAPTION: &str = "Explore as ofertas e adicione produtos ao carrinho.";
pub const BROWSE_PRODUCTS: &str = "Ver produtos";

style_sheet! {
    pub struct CartStyles {
        container,
        empty_icon,
        empty_title,
        empty_caption,
        browse_button,
        browse_button_text,
    }
}

impl StyleSheet for CartStyles {
    fn from_colors(colors: &ResolvedColors) -> Self {
        let palette = &colors.palette;
        let brand = &colors.brand;

        Self {
            container: StyleRule::new().background(palette.background),
            empty_icon: StyleRule::new().color(palette.icon),
            empty_title: StyleRule::new().color(palette.text),
            empty_caption: StyleRule::new().color(palette.icon),
            browse_button: StyleRule::new().background(brand.primary),
            browse_button_text: StyleRule::new().color(brand.white),
        }
    }
}

/// Placeholder shown while the cart has no items.
#[derive(IntoElement)]
pub struct CartScreen {
    styles: CartStyles,
    navigate: Navigate,
}

impl CartScreen {
    pub fn new(styles: CartStyles, navigate: Navigate) -> Self {
        Self { styles, navigate }
    }
}

impl RenderOnce for CartScreen {
    fn render(self, _window: &mut gpui::Window, _cx: &mut gpui::App) -> impl IntoElement {
        let styles = self.styles;
        let navigate = self.navigate;

        div()
            .size_full()
            .p(px(32.))
            .flex()
            .flex_col()
            .items_center()
            .justify_center()
            .rule(styles.container)
            .child(
                div()
                    .rule(styles.empty_icon)
                    .child(Icon::new(IconKind::Cart).size(px(64.))),
            )
            .child(
                div()
                    .mt(px(16.))
                    .text_size(px(20.))
                    .font_weight(FontWeight::BOLD)
                    .rule(styles.empty_title)
                    .child(EMPTY_CART_TITLE),
            )
            .child(
                div()
                    .mt(px(8.))
                    .text_size(px(14.))
                    .rule(styles.empty_caption)
                    .child(EMPTY_CART_CAPTION),
            )
            .child(
                Touchable::new("cart-browse")
                    .mt(px(24.))
                    .px(px(24.))
                    .py(px(12.))
                    .rounded(px(8.))
                    .rule(styles.browse_button)
                    .child(
                        div()
                            .text_size(px(16.))
                            .font_weight(FontWeight::SEMIBOLD)
                            .rule(styles.browse_button_text)
                            .child(BROWSE_PRODUCTS),
                    )
                    .on_click(move |_event, window, cx| {
                        (navigate)(&Route::Tab(Tab::Home), window, cx)
                    }),
            )
    }
}
