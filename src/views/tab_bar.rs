use gpui::{FontWeight, IntoElement, ParentElement, RenderOnce, Styled, div, px};
use smallvec::SmallVec;

use crate::{
    components::{Icon, Touchable},
    navigation::Tab,
    style_sheet,
    theme::{ResolvedColors, StyleRule, StyleRuleExt, StyleSheet},
    views::SelectTab,
};

style_sheet! {
    pub struct TabBarStyles {
        bar,
        active_tab,
        inactive_tab,
    }
}

impl StyleSheet for TabBarStyles {
    fn from_colors(colors: &ResolvedColors) -> Self {
        let palette = &colors.palette;

        Self {
            bar: StyleRule::new()
                .background(palette.background)
                .border(palette.border),
            active_tab: StyleRule::new().color(palette.tab_icon_selected),
            inactive_tab: StyleRule::new().color(palette.tab_icon_default),
        }
    }
}

impl TabBarStyles {
    pub fn tab(&self, is_active: bool) -> StyleRule {
        if is_active {
            self.active_tab
        } else {
            self.inactive_tab
        }
    }
}

/// The bottom bar that switches between the four tabs.
#[derive(IntoElement)]
pub struct TabBar {
    active: Tab,
    styles: TabBarStyles,
    on_select: SelectTab,
}

impl TabBar {
    pub fn new(active: Tab, styles: TabBarStyles, on_select: SelectTab) -> Self {
        Self {
            active,
            styles,
            on_select,
        }
    }
}

impl RenderOnce for TabBar {
    fn render(self, _window: &mut gpui::Window, _cx: &mut gpui::App) -> impl IntoElement {
        let tabs: SmallVec<[Touchable; 4]> = Tab::ALL
            .into_iter()
            .enumerate()
            .map(|(index, tab)| {
                let on_select = self.on_select.clone();

                Touchable::new(("tab", index))
                    .flex_1()
                    .h_full()
                    .flex()
                    .flex_col()
                    .items_center()
                    .justify_center()
                    .rule(self.styles.tab(tab == self.active))
                    .child(Icon::new(tab.icon()).size(px(24.)))
                    .child(
                        div()
                            .mt(px(2.))
                            .text_size(px(11.))
                            .font_weight(FontWeight::MEDIUM)
                            .child(tab.title()),
                    )
                    .on_click(move |_event, window, cx| (on_select)(&tab, window, cx))
            })
            .collect();

        div()
            .w_full()
            .flex_none()
            .h(px(64.))
            .pb(px(6.))
            .flex()
            .flex_row()
            .border_t_1()
            .rule(self.styles.bar)
            .children(tabs)
    }
}
