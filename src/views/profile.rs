use gpui::{
    Div, ElementId, FontWeight, InteractiveElement, IntoElement, ParentElement, RenderOnce,
    StatefulInteractiveElement, Styled, div, px,
};

use crate::{
    components::{Icon, IconKind, Touchable},
    navigation::Route,
    style_sheet,
    theme::{ResolvedColors, StyleRule, StyleRuleExt, StyleSheet},
    utils::RgbaExt,
    views::Navigate,
};

pub const EDIT_PROFILE: &str = "Editar Perfil";
pub const SIGN_OUT: &str = "Terminar Sessão";

/// The signed-in customer shown at the top of the profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Customer {
    pub name: &'static str,
    pub email: &'static str,
}

impl Customer {
    /// Up to two uppercase initials, from the first and last names.
    pub fn initials(&self) -> String {
        let mut words = self.name.split_whitespace();
        let first = words.next();
        let last = words.next_back();

        first
            .into_iter()
            .chain(last)
            .filter_map(|word| word.chars().next())
            .flat_map(char::to_uppercase)
            .collect()
    }
}

pub static CUSTOMER: Customer = Customer {
    name: "Euclides João",
    email: "euclides@example.com",
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuItem {
    pub icon: IconKind,
    pub label: &'static str,
    pub route: Route,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuGroup {
    pub title: &'static str,
    pub items: &'static [MenuItem],
}

pub static MENU_GROUPS: [MenuGroup; 2] = [
    MenuGroup {
        title: "Minha Conta",
        items: &[
            MenuItem {
                icon: IconKind::Cube,
                label: "Minhas Encomendas",
                route: Route::Orders,
            },
            MenuItem {
                icon: IconKind::Heart,
                label: "Listas de Desejos",
                route: Route::Wishlist,
            },
            MenuItem {
                icon: IconKind::Map,
                label: "Moradas de Envio",
                route: Route::Addresses,
            },
            MenuItem {
                icon: IconKind::Card,
                label: "Métodos de Pagamento",
                route: Route::PaymentMethods,
            },
        ],
    },
    MenuGroup {
        title: "Definições & Ajuda",
        items: &[
            MenuItem {
                icon: IconKind::Settings,
                label: "Definições da App",
                route: Route::Settings,
            },
            MenuItem {
                icon: IconKind::Help,
                label: "Centro de Ajuda",
                route: Route::HelpCenter,
            },
            MenuItem {
                icon: IconKind::Information,
                label: "Sobre Nós",
                route: Route::About,
            },
        ],
    },
];

style_sheet! {
    /// Colors for the profile header, the menu groups and the sign-out row.
    pub struct ProfileStyles {
        container,
        profile_header,
        avatar,
        avatar_text,
        name,
        email,
        edit_button,
        edit_button_text,
        menu_group,
        menu_group_title,
        menu_row,
        menu_row_icon,
        menu_row_text,
        menu_row_chevron,
        logout_section,
        logout_text,
    }
}

impl StyleSheet for ProfileStyles {
    fn from_colors(colors: &ResolvedColors) -> Self {
        let palette = &colors.palette;
        let brand = &colors.brand;

        Self {
            container: StyleRule::new().background(palette.background),
            profile_header: StyleRule::new()
                .background(palette.card)
                .border(palette.border),
            avatar: StyleRule::new().background(brand.primary),
            avatar_text: StyleRule::new().color(brand.white),
            name: StyleRule::new().color(palette.text),
            email: StyleRule::new().color(palette.icon),
            edit_button: StyleRule::new().background(brand.primary.alpha_byte(0x20)),
            edit_button_text: StyleRule::new().color(brand.primary),
            menu_group: StyleRule::new()
                .background(palette.card)
                .border(palette.border),
            menu_group_title: StyleRule::new().color(palette.icon),
            menu_row: StyleRule::new().border(palette.border),
            menu_row_icon: StyleRule::new()
                .background(brand.primary.alpha_byte(0x15))
                .color(brand.primary),
            menu_row_text: StyleRule::new().color(palette.text),
            menu_row_chevron: StyleRule::new().color(brand.gray),
            logout_section: StyleRule::new()
                .background(palette.card)
                .border(palette.border),
            logout_text: StyleRule::new().color(brand.accent),
        }
    }
}

/// Customer summary, account menus and sign-out.
#[derive(IntoElement)]
pub struct ProfileScreen {
    styles: ProfileStyles,
    navigate: Navigate,
}

impl ProfileScreen {
    pub fn new(styles: ProfileStyles, navigate: Navigate) -> Self {
        Self { styles, navigate }
    }

    fn profile_header(&self) -> Div {
        let styles = self.styles;
        let navigate = self.navigate.clone();

        div()
            .w_full()
            .pt(px(48.))
            .pb(px(24.))
            .px(px(16.))
            .flex()
            .flex_col()
            .items_center()
            .border_b_1()
            .rule(styles.profile_header)
            .child(
                div()
                    .size(px(88.))
                    .rounded_full()
                    .flex()
                    .items_center()
                    .justify_center()
                    .rule(styles.avatar)
                    .child(
                        div()
                            .text_size(px(32.))
                            .font_weight(FontWeight::BOLD)
                            .rule(styles.avatar_text)
                            .child(CUSTOMER.initials()),
                    ),
            )
            .child(
                div()
                    .mt(px(12.))
                    .text_size(px(22.))
                    .font_weight(FontWeight::BOLD)
                    .rule(styles.name)
                    .child(CUSTOMER.name),
            )
            .child(
                div()
                    .mt(px(4.))
                    .text_size(px(14.))
                    .rule(styles.email)
                    .child(CUSTOMER.email),
            )
            .child(
                Touchable::new("profile-edit")
                    .mt(px(16.))
                    .px(px(16.))
                    .py(px(8.))
                    .rounded(px(20.))
                    .flex()
                    .flex_row()
                    .items_center()
                    .rule(styles.edit_button)
                    .child(
                        div()
                            .rule(styles.edit_button_text)
                            .child(Icon::new(IconKind::Pencil).size(px(16.)).mr(px(6.))),
                    )
                    .child(
                        div()
                            .text_size(px(14.))
                            .font_weight(FontWeight::SEMIBOLD)
                            .rule(styles.edit_button_text)
                            .child(EDIT_PROFILE),
                    )
                    .on_click(move |_event, window, cx| {
                        (navigate)(&Route::ProfileEdit, window, cx)
                    }),
            )
    }

    fn menu_row(&self, item: &'static MenuItem, is_last: bool) -> Touchable {
        let styles = self.styles;
        let navigate = self.navigate.clone();
        let mut row = Touchable::new(ElementId::Name(format!("menu-{}", item.route).into()))
            .w_full()
            .px(px(16.))
            .py(px(14.))
            .flex()
            .flex_row()
            .items_center()
            .rule(styles.menu_row);

        if !is_last {
            row = row.border_b_1();
        }

        row.child(
            div()
                .size(px(36.))
                .rounded(px(10.))
                .flex()
                .items_center()
                .justify_center()
                .rule(styles.menu_row_icon)
                .child(Icon::new(item.icon).size(px(20.))),
        )
        .child(
            div()
                .flex_1()
                .ml(px(12.))
                .text_size(px(16.))
                .rule(styles.menu_row_text)
                .child(item.label),
        )
        .child(
            div()
                .rule(styles.menu_row_chevron)
                .child(Icon::new(IconKind::ChevronForward).size(px(20.))),
        )
        .on_click(move |_event, window, cx| (navigate)(&item.route, window, cx))
    }

    fn menu_group(&self, group: &'static MenuGroup) -> Div {
        div()
            .w_full()
            .mt(px(24.))
            .px(px(16.))
            .child(
                div()
                    .mb(px(8.))
                    .ml(px(4.))
                    .text_size(px(13.))
                    .font_weight(FontWeight::SEMIBOLD)
                    .rule(self.styles.menu_group_title)
                    .child(group.title.to_uppercase()),
            )
            .child(
                div()
                    .w_full()
                    .rounded(px(12.))
                    .overflow_hidden()
                    .border_1()
                    .rule(self.styles.menu_group)
                    .children(group.items.iter().enumerate().map(|(index, item)| {
                        self.menu_row(item, index + 1 == group.items.len())
                    })),
            )
    }
}

impl RenderOnce for ProfileScreen {
    fn render(self, _window: &mut gpui::Window, _cx: &mut gpui::App) -> impl IntoElement {
        let styles = self.styles;

        div()
            .id("profile")
            .size_full()
            .overflow_y_scroll()
            .pb(px(32.))
            .rule(styles.container)
            .child(self.profile_header())
            .children(MENU_GROUPS.iter().map(|group| self.menu_group(group)))
            .child(
                div().w_full().mt(px(24.)).px(px(16.)).child(
                    Touchable::new("profile-sign-out")
                        .w_full()
                        .py(px(14.))
                        .rounded(px(12.))
                        .border_1()
                        .flex()
                        .flex_row()
                        .items_center()
                        .justify_center()
                        .rule(styles.logout_section)
                        .child(
                            div()
                                .flex()
                                .flex_row()
                                .items_center()
                                .text_size(px(16.))
                                .font_weight(FontWeight::SEMIBOLD)
                                .rule(styles.logout_text)
                                .child(Icon::new(IconKind::LogOut).size(px(20.)).mr(px(8.)))
                                .child(SIGN_OUT),
                        )
                        .on_click(|_event, _window, _cx| {
                            tracing::info!(email = CUSTOMER.email, "sign-out requested");
                        }),
                ),
            )
    }
}
