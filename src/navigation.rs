#![allow(missing_docs)] // Derive macros generate undocumented methods.

use std::{collections::VecDeque, fmt};

use enum_assoc::Assoc;

use crate::components::IconKind;

/// The bottom tabs of the storefront.
#[derive(Assoc, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[func(pub fn title(&self) -> &'static str)]
#[func(pub fn icon(&self) -> IconKind)]
#[func(pub fn slug(&self) -> &'static str)]
#[func(pub fn header(&self) -> TabHeader)]
pub enum Tab {
    #[default]
    #[assoc(title = "Início")]
    #[assoc(icon = IconKind::Home)]
    #[assoc(slug = "index")]
    #[assoc(header = TabHeader::Commerce)]
    Home,
    #[assoc(title = "Categorias")]
    #[assoc(icon = IconKind::Grid)]
    #[assoc(slug = "categories")]
    #[assoc(header = TabHeader::Titled)]
    Categories,
    #[assoc(title = "Carrinho")]
    #[assoc(icon = IconKind::Cart)]
    #[assoc(slug = "cart")]
    #[assoc(header = TabHeader::None)]
    Cart,
    #[assoc(title = "Perfil")]
    #[assoc(icon = IconKind::Person)]
    #[assoc(slug = "profile")]
    #[assoc(header = TabHeader::None)]
    Profile,
}

impl Tab {
    pub const ALL: [Tab; 4] = [Tab::Home, Tab::Categories, Tab::Cart, Tab::Profile];
}

/// Which header a tab shows above its content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabHeader {
    /// Logo, search field and shortcut icons.
    Commerce,
    /// A plain bar with the tab title.
    Titled,
    None,
}

/// A destination the shell can be asked to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Tab(Tab),
    Product(&'static str),
    Category(&'static str),
    Deals,
    ProfileEdit,
    Orders,
    Wishlist,
    Addresses,
    PaymentMethods,
    Settings,
    HelpCenter,
    About,
}

impl Route {
    pub fn path(&self) -> String {
        match self {
            Route::Tab(Tab::Home) => "/(tabs)".to_string(),
            Route::Tab(tab) => format!("/(tabs)/{}", tab.slug()),
            Route::Product(id) => format!("/(tabs)/product/{id}"),
            Route::Category(slug) => format!("/(tabs)/categories/{slug}"),
            Route::Deals => "/(tabs)/deals".to_string(),
            Route::ProfileEdit => "/profile/edit".to_string(),
            Route::Orders => "/orders".to_string(),
            Route::Wishlist => "/wishlist".to_string(),
            Route::Addresses => "/addresses".to_string(),
            Route::PaymentMethods => "/payment-methods".to_string(),
            Route::Settings => "/settings".to_string(),
            Route::HelpCenter => "/help-center".to_string(),
            Route::About => "/about".to_string(),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

/// What a [`Router::push`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    SwitchedTab(Tab),
    /// The route has no screen yet; it is recorded but nothing changes.
    Unimplemented(Route),
}

/// How many requested routes the router remembers.
pub const HISTORY_LIMIT: usize = 32;

/// Tracks the active tab and the most recent routes that were requested.
#[derive(Debug, Clone, Default)]
pub struct Router {
    active_tab: Tab,
    history: VecDeque<Route>,
}

impl Router {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active_tab(&self) -> Tab {
        self.active_tab
    }

    /// Requested routes, oldest first. Holds at most [`HISTORY_LIMIT`] entries.
    pub fn history(&self) -> &VecDeque<Route> {
        &self.history
    }

    fn record(&mut self, route: Route) {
        if self.history.len() == HISTORY_LIMIT {
            self.history.pop_front();
        }
        self.history.push_back(route);
    }

    pub fn select_tab(&mut self, tab: Tab) {
        if self.active_tab != tab {
            tracing::debug!(from = ?self.active_tab, to = ?tab, "tab selected");
            self.record(Route::Tab(tab));
            self.active_tab = tab;
        }
    }

    pub fn push(&mut self, route: Route) -> Navigation {
        tracing::info!(route = %route, "navigate");

        match route {
            Route::Tab(tab) => {
                self.select_tab(tab);
                Navigation::SwitchedTab(tab)
            }
            route => {
                tracing::warn!(route = %route, "route has no screen");
                self.record(route);
                Navigation::Unimplemented(route)
            }
        }
    }

    /// Returns to the most recent tab in the history, if any.
    pub fn back(&mut self) -> Option<Tab> {
        self.history.pop_back()?;

        let previous = self.history.iter().rev().find_map(|route| match route {
            Route::Tab(tab) => Some(*tab),
            _ => None,
        });

        self.active_tab = previous.unwrap_or_default();
        Some(self.active_tab)
    }
}
