use std::rc::Rc;

use gpui::{
    AnyElement, Context, IntoElement, ParentElement, Render, Styled, Subscription, Window, div,
    prelude::FluentBuilder,
};

use crate::{
    config::AppearancePreference,
    navigation::{Navigation, Route, Router, Tab, TabHeader},
    theme::{StyleRuleExt, ThemeExt},
    views::{
        CartScreen, CategoriesScreen, CommerceHeader, HomeScreen, Navigate, ProfileScreen,
        ScreenStyles, SelectTab, TabBar, TitleBar,
    },
};

/// The root view: header, the active tab's screen and the tab bar.
pub struct Storefront {
    router: Router,
    appearance: AppearancePreference,
    _appearance_subscription: Subscription,
}

impl Storefront {
    pub fn new(
        appearance: AppearancePreference,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) -> Self {
        let appearance_subscription =
            cx.observe_window_appearance(window, |this, window, cx| {
                tracing::debug!(
                    mode = %this.appearance.resolve(window.appearance()),
                    "window appearance changed"
                );
                cx.notify();
            });

        Self {
            router: Router::new(),
            appearance,
            _appearance_subscription: appearance_subscription,
        }
    }

    pub fn router(&self) -> &Router {
        &self.router
    }

    pub fn navigate(&mut self, route: Route, cx: &mut Context<Self>) {
        if let Navigation::SwitchedTab(_) = self.router.push(route) {
            cx.notify();
        }
    }

    pub fn select_tab(&mut self, tab: Tab, cx: &mut Context<Self>) {
        if self.router.active_tab() != tab {
            self.router.select_tab(tab);
            cx.notify();
        }
    }

    fn screen(&self, styles: &ScreenStyles, navigate: Navigate, cx: &Context<Self>) -> AnyElement {
        match self.router.active_tab() {
            Tab::Home => {
                HomeScreen::new(styles.home, *cx.get_theme().brand(), navigate).into_any_element()
            }
            Tab::Categories => CategoriesScreen::new(styles.categories).into_any_element(),
            Tab::Cart => CartScreen::new(styles.cart, navigate).into_any_element(),
            Tab::Profile => ProfileScreen::new(styles.profile, navigate).into_any_element(),
        }
    }
}

impl Render for Storefront {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let mode = self.appearance.resolve(window.appearance());
        let styles = ScreenStyles::derive(cx.get_theme(), mode);
        let active_tab = self.router.active_tab();

        let navigate: Navigate = Rc::new(cx.listener(|this, route: &Route, _window, cx| {
            this.navigate(*route, cx)
        }));
        let select_tab: SelectTab = Rc::new(cx.listener(|this, tab: &Tab, _window, cx| {
            this.select_tab(*tab, cx)
        }));

        div()
            .size_full()
            .flex()
            .flex_col()
            .rule(styles.home.container)
            .map(|this| match active_tab.header() {
                TabHeader::Commerce => {
                    this.child(CommerceHeader::new(styles.header, navigate.clone()))
                }
                TabHeader::Titled => this.child(TitleBar::new(active_tab.title(), styles.header)),
                TabHeader::None => this,
            })
            .child(
                div()
                    .flex_1()
                    .min_h_0()
                    .child(self.screen(&styles, navigate, cx)),
            )
            .child(TabBar::new(active_tab, styles.tab_bar, select_tab))
    }
}

#[cfg(all(test, feature = "test-support"))]
mod tests {
    use super::*;
    use crate::theme::Theme;
    use gpui::{Modifiers, TestAppContext, VisualTestContext};

    fn open_storefront(
        cx: &mut TestAppContext,
        appearance: AppearancePreference,
    ) -> (gpui::Entity<Storefront>, &mut VisualTestContext) {
        cx.update(|cx| cx.set_theme(Theme::storefront()));
        let (view, cx) =
            cx.add_window_view(|window, cx| Storefront::new(appearance, window, cx));
        (view, cx)
    }

    #[gpui::test]
    fn test_starts_on_home(cx: &mut TestAppContext) {
        let (view, cx) = open_storefront(cx, AppearancePreference::System);

        view.read_with(cx, |storefront, _cx| {
            assert_eq!(storefront.router().active_tab(), Tab::Home);
            assert!(storefront.router().history().is_empty());
        });
    }

    #[gpui::test]
    fn test_tab_routes_switch_tabs(cx: &mut TestAppContext) {
        let (view, cx) = open_storefront(cx, AppearancePreference::System);

        view.update(cx, |storefront, cx| {
            storefront.navigate(Route::Tab(Tab::Profile), cx);
        });
        cx.run_until_parked();

        view.read_with(cx, |storefront, _cx| {
            assert_eq!(storefront.router().active_tab(), Tab::Profile);
        });
    }

    #[gpui::test]
    fn test_unimplemented_routes_keep_the_tab(cx: &mut TestAppContext) {
        let (view, cx) = open_storefront(cx, AppearancePreference::System);

        view.update(cx, |storefront, cx| {
            storefront.select_tab(Tab::Categories, cx);
            storefront.navigate(Route::Product("p1"), cx);
        });
        cx.run_until_parked();

        view.read_with(cx, |storefront, _cx| {
            assert_eq!(storefront.router().active_tab(), Tab::Categories);
            assert_eq!(
                storefront.router().history().back(),
                Some(&Route::Product("p1"))
            );
        });
    }

    #[gpui::test]
    fn test_every_tab_renders(cx: &mut TestAppContext) {
        let (view, cx) = open_storefront(
            cx,
            AppearancePreference::Fixed(crate::theme::AppearanceMode::Dark),
        );

        for tab in Tab::ALL {
            view.update(cx, |storefront, cx| storefront.select_tab(tab, cx));
            cx.run_until_parked();
        }
    }

    #[gpui::test]
    fn test_clicking_tabs_switches_screens(cx: &mut TestAppContext) {
        let (view, cx) = open_storefront(cx, AppearancePreference::System);

        let categories = cx.debug_bounds("tab-1").unwrap().center();
        cx.simulate_click(categories, Modifiers::none());

        view.read_with(cx, |storefront, _cx| {
            assert_eq!(storefront.router().active_tab(), Tab::Categories);
        });

        let profile = cx.debug_bounds("tab-3").unwrap().center();
        cx.simulate_click(profile, Modifiers::none());

        view.read_with(cx, |storefront, _cx| {
            assert_eq!(storefront.router().active_tab(), Tab::Profile);
        });
    }
}
