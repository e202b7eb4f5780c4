use gpui::{
    FontWeight, IntoElement, ParentElement, RenderOnce, SharedString, Styled, div, px,
};

use crate::{
    components::{Icon, IconKind, Touchable},
    navigation::{Route, Tab},
    style_sheet,
    theme::{ResolvedColors, StyleRule, StyleRuleExt, StyleSheet},
    views::Navigate,
};

pub const SEARCH_PLACEHOLDER: &str = "Search for products...";

style_sheet! {
    /// Colors for the commerce header and the plain titled header.
    pub struct HeaderStyles {
        container,
        logo,
        search,
        search_icon,
        search_placeholder,
        icon_button,
        title_bar,
        title_text,
    }
}

impl StyleSheet for HeaderStyles {
    fn from_colors(colors: &ResolvedColors) -> Self {
        let palette = &colors.palette;

        Self {
            container: StyleRule::new()
                .background(palette.background)
                .border(palette.border),
            logo: StyleRule::new().color(colors.brand.primary),
            search: StyleRule::new().background(palette.card),
            search_icon: StyleRule::new().color(palette.icon),
            search_placeholder: StyleRule::new().color(palette.icon),
            icon_button: StyleRule::new().color(palette.text),
            title_bar: StyleRule::new()
                .background(palette.background)
                .border(palette.border),
            title_text: StyleRule::new().color(palette.text),
        }
    }
}

/// Logo, search field and shortcut buttons shown above the home feed.
#[derive(IntoElement)]
pub struct CommerceHeader {
    styles: HeaderStyles,
    navigate: Navigate,
}

impl CommerceHeader {
    pub fn new(styles: HeaderStyles, navigate: Navigate) -> Self {
        Self { styles, navigate }
    }
}

impl RenderOnce for CommerceHeader {
    fn render(self, _window: &mut gpui::Window, _cx: &mut gpui::App) -> impl IntoElement {
        let styles = self.styles;
        let navigate_home = self.navigate.clone();
        let navigate_wishlist = self.navigate;

        div()
            .w_full()
            .flex_none()
            .border_b_1()
            .rule(styles.container)
            .child(
                div()
                    .h(px(60.))
                    .px(px(16.))
                    .py(px(10.))
                    .flex()
                    .flex_row()
                    .items_center()
                    .child(
                        Touchable::new("header-logo")
                            .mr(px(10.))
                            .child(Icon::new(IconKind::Logo).size(px(28.)))
                            .rule(styles.logo)
                            .on_click(move |_event, window, cx| {
                                (navigate_home)(&Route::Tab(Tab::Home), window, cx)
                            }),
                    )
                    .child(
                        div()
                            .flex_1()
                            .h(px(40.))
                            .px(px(12.))
                            .rounded(px(12.))
                            .flex()
                            .flex_row()
                            .items_center()
                            .rule(styles.search)
                            .child(
                                div()
                                    .rule(styles.search_icon)
                                    .child(Icon::new(IconKind::Search).size(px(20.)).mr(px(8.))),
                            )
                            .child(
                                div()
                                    .flex_1()
                                    .text_size(px(16.))
                                    .text_ellipsis()
                                    .rule(styles.search_placeholder)
                                    .child(SEARCH_PLACEHOLDER),
                            ),
                    )
                    .child(
                        div()
                            .ml(px(12.))
                            .flex()
                            .flex_row()
                            .child(
                                Touchable::new("header-wishlist")
                                    .ml(px(10.))
                                    .p(px(5.))
                                    .rule(styles.icon_button)
                                    .child(Icon::new(IconKind::Heart).size(px(24.)))
                                    .on_click(move |_event, window, cx| {
                                        (navigate_wishlist)(&Route::Wishlist, window, cx)
                                    }),
                            )
                            .child(
                                Touchable::new("header-notifications")
                                    .ml(px(10.))
                                    .p(px(5.))
                                    .rule(styles.icon_button)
                                    .child(Icon::new(IconKind::Bell).size(px(24.)))
                                    .on_click(|_event, _window, _cx| {
                                        tracing::info!("notifications pressed");
                                    }),
                            ),
                    ),
            )
    }
}

/// A plain header bar showing a screen title.
#[derive(IntoElement)]
pub struct TitleBar {
    title: SharedString,
    styles: HeaderStyles,
}

impl TitleBar {
    pub fn new(title: impl Into<SharedString>, styles: HeaderStyles) -> Self {
        Self {
            title: title.into(),
            styles,
        }
    }
}

impl RenderOnce for TitleBar {
    fn render(self, _window: &mut gpui::Window, _cx: &mut gpui::App) -> impl IntoElement {
        div()
            .w_full()
            .flex_none()
            .h(px(56.))
            .px(px(16.))
            .flex()
            .items_center()
            .justify_center()
            .border_b_1()
            .rule(self.styles.title_bar)
            .child(
                div()
                    .text_size(px(17.))
                    .font_weight(FontWeight::SEMIBOLD)
                    .rule(self.styles.title_text)
                    .child(self.title),
            )
    }
}
