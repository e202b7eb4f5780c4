use gpui::{
    Div, ElementId, FontWeight, InteractiveElement, IntoElement, ParentElement, RenderOnce,
    StatefulInteractiveElement, Styled, div, prelude::FluentBuilder, px, relative,
};

use crate::{
    catalog::{DEALS, HERO_BANNERS, HeroBanner, Product, RECOMMENDED, format_price, format_rating},
    components::{Icon, IconKind, Touchable},
    navigation::Route,
    style_sheet,
    theme::{BrandColors, ResolvedColors, StyleRule, StyleRuleExt, StyleSheet},
    views::Navigate,
};

pub const DEALS_TITLE: &str = "Ofertas do Dia";
pub const SEE_ALL: &str = "Ver tudo";
pub const RECOMMENDED_TITLE: &str = "Recomendado para si";

style_sheet! {
    /// Colors for the home feed and its product cards.
    pub struct HomeStyles {
        container,
        hero_banner,
        carousel_title,
        carousel_link,
        product_card,
        product_image,
        product_name,
        product_price,
        product_old_price,
        product_discount,
        product_rating_star,
        product_rating_text,
    }
}

impl StyleSheet for HomeStyles {
    fn from_colors(colors: &ResolvedColors) -> Self {
        let palette = &colors.palette;
        let brand = &colors.brand;

        Self {
            container: StyleRule::new().background(palette.background),
            hero_banner: StyleRule::new().color(brand.white),
            carousel_title: StyleRule::new().color(palette.text),
            carousel_link: StyleRule::new().color(brand.primary),
            product_card: StyleRule::new()
                .background(palette.card)
                .border(palette.border)
                .shadow(brand.black),
            product_image: StyleRule::new()
                .background(palette.border)
                .color(palette.icon),
            product_name: StyleRule::new().color(palette.text),
            product_price: StyleRule::new().color(brand.primary),
            product_old_price: StyleRule::new().color(brand.gray),
            product_discount: StyleRule::new()
                .background(brand.accent)
                .color(brand.white),
            product_rating_star: StyleRule::new().color(brand.rating),
            product_rating_text: StyleRule::new().color(palette.icon),
        }
    }
}

/// The scrollable home feed: banners, today's deals and recommendations.
#[derive(IntoElement)]
pub struct HomeScreen {
    styles: HomeStyles,
    brand: BrandColors,
    navigate: Navigate,
}

impl HomeScreen {
    pub fn new(styles: HomeStyles, brand: BrandColors, navigate: Navigate) -> Self {
        Self {
            styles,
            brand,
            navigate,
        }
    }

    fn hero_banner(&self, banner: &HeroBanner) -> Touchable {
        let navigate = self.navigate.clone();
        let route = banner.route;

        Touchable::new(ElementId::Name(format!("hero-banner-{}", banner.id).into()))
            .flex_none()
            .w(px(300.))
            .h(px(140.))
            .mr(px(12.))
            .p(px(20.))
            .rounded(px(16.))
            .flex()
            .flex_col()
            .justify_center()
            .bg(banner.color.resolve(&self.brand))
            .rule(self.styles.hero_banner)
            .child(
                div()
                    .text_size(px(28.))
                    .font_weight(FontWeight::BOLD)
                    .child(banner.headline),
            )
            .child(div().text_size(px(18.)).child(banner.caption))
            .on_click(move |_event, window, cx| (navigate)(&route, window, cx))
    }

    fn section_title(&self, title: &'static str, link: Option<Route>) -> Div {
        let navigate = self.navigate.clone();

        div()
            .w_full()
            .px(px(16.))
            .mt(px(24.))
            .mb(px(12.))
            .flex()
            .flex_row()
            .items_center()
            .justify_between()
            .child(
                div()
                    .text_size(px(20.))
                    .font_weight(FontWeight::BOLD)
                    .rule(self.styles.carousel_title)
                    .child(title),
            )
            .when_some(link, |this, route| {
                this.child(
                    Touchable::new(ElementId::Name(format!("see-all-{title}").into()))
                        .text_size(px(14.))
                        .font_weight(FontWeight::SEMIBOLD)
                        .rule(self.styles.carousel_link)
                        .child(SEE_ALL)
                        .on_click(move |_event, window, cx| (navigate)(&route, window, cx)),
                )
            })
    }

    fn product_card(&self, product: &'static Product) -> Touchable {
        let styles = self.styles;
        let navigate = self.navigate.clone();

        Touchable::new(ElementId::Name(format!("product-{}", product.id).into()))
            .flex_none()
            .overflow_hidden()
            .rounded(px(12.))
            .border_1()
            .rule(styles.product_card)
            .child(
                div()
                    .relative()
                    .w_full()
                    .h(px(120.))
                    .flex()
                    .items_center()
                    .justify_center()
                    .rule(styles.product_image)
                    .child(Icon::new(IconKind::Cube).size(px(40.)))
                    .when_some(product.discount_percent(), |this, percent| {
                        this.child(
                            div()
                                .absolute()
                                .top(px(8.))
                                .left(px(8.))
                                .px(px(6.))
                                .py(px(2.))
                                .rounded(px(6.))
                                .text_size(px(11.))
                                .font_weight(FontWeight::BOLD)
                                .rule(styles.product_discount)
                                .child(format!("-{percent}%")),
                        )
                    }),
            )
            .child(
                div()
                    .p(px(10.))
                    .flex()
                    .flex_col()
                    .child(
                        div()
                            .text_size(px(14.))
                            .font_weight(FontWeight::MEDIUM)
                            .text_ellipsis()
                            .rule(styles.product_name)
                            .child(product.name),
                    )
                    .child(
                        div()
                            .mt(px(4.))
                            .flex()
                            .flex_row()
                            .items_center()
                            .child(
                                div()
                                    .rule(styles.product_rating_star)
                                    .child(Icon::new(IconKind::Star).size(px(14.)).mr(px(4.))),
                            )
                            .child(
                                div()
                                    .text_size(px(12.))
                                    .rule(styles.product_rating_text)
                                    .child(format_rating(product.rating)),
                            ),
                    )
                    .child(
                        div()
                            .mt(px(6.))
                            .text_size(px(16.))
                            .font_weight(FontWeight::BOLD)
                            .rule(styles.product_price)
                            .child(format_price(product.price)),
                    )
                    .when_some(product.old_price, |this, old_price| {
                        this.child(
                            div()
                                .text_size(px(12.))
                                .line_through()
                                .rule(styles.product_old_price)
                                .child(format_price(old_price)),
                        )
                    }),
            )
            .on_click(move |_event, window, cx| (navigate)(&product.route(), window, cx))
    }
}

impl RenderOnce for HomeScreen {
    fn render(self, _window: &mut gpui::Window, _cx: &mut gpui::App) -> impl IntoElement {
        div()
            .id("home-feed")
            .size_full()
            .overflow_y_scroll()
            .rule(self.styles.container)
            .pb(px(24.))
            .child(
                div()
                    .id("hero-banners")
                    .w_full()
                    .pt(px(16.))
                    .px(px(16.))
                    .flex()
                    .flex_row()
                    .overflow_x_scroll()
                    .children(HERO_BANNERS.iter().map(|banner| self.hero_banner(banner))),
            )
            .child(self.section_title(DEALS_TITLE, Some(Route::Deals)))
            .child(
                div()
                    .id("deals")
                    .w_full()
                    .px(px(16.))
                    .flex()
                    .flex_row()
                    .gap(px(12.))
                    .overflow_x_scroll()
                    .children(
                        DEALS
                            .iter()
                            .map(|product| self.product_card(product).w(px(160.))),
                    ),
            )
            .child(self.section_title(RECOMMENDED_TITLE, None))
            .child(
                div()
                    .w_full()
                    .px(px(16.))
                    .flex()
                    .flex_row()
                    .flex_wrap()
                    .gap(px(12.))
                    .children(
                        RECOMMENDED
                            .iter()
                            .map(|product| self.product_card(product).w(relative(0.47))),
                    ),
            )
    }
}
