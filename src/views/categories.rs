use gpui::{
    ElementId, FontWeight, InteractiveElement, IntoElement, ParentElement, RenderOnce,
    StatefulInteractiveElement, Styled, div, px, relative,
};

use crate::{
    catalog::{CATEGORIES, Category},
    components::{Icon, Touchable},
    style_sheet,
    theme::{ResolvedColors, StyleRule, StyleRuleExt, StyleSheet},
};

style_sheet! {
    pub struct CategoriesStyles {
        container,
        category_item,
        category_icon,
        category_text,
    }
}

impl StyleSheet for CategoriesStyles {
    fn from_colors(colors: &ResolvedColors) -> Self {
        let palette = &colors.palette;

        Self {
            container: StyleRule::new().background(palette.background),
            category_item: StyleRule::new()
                .background(palette.card)
                .border(palette.border)
                .shadow(colors.brand.black),
            category_icon: StyleRule::new().color(colors.brand.primary),
            category_text: StyleRule::new().color(palette.text),
        }
    }
}

/// A two-column grid of every product category.
#[derive(IntoElement)]
pub struct CategoriesScreen {
    styles: CategoriesStyles,
}

impl CategoriesScreen {
    pub fn new(styles: CategoriesStyles) -> Self {
        Self { styles }
    }

    fn category_item(&self, category: &'static Category) -> Touchable {
        Touchable::new(ElementId::Name(format!("category-{}", category.id).into()))
            .w(relative(0.47))
            .h(px(120.))
            .p(px(12.))
            .rounded(px(12.))
            .border_1()
            .flex()
            .flex_col()
            .items_center()
            .justify_center()
            .rule(self.styles.category_item)
            .child(
                div()
                    .rule(self.styles.category_icon)
                    .child(Icon::new(category.icon).size(px(40.))),
            )
            .child(
                div()
                    .mt(px(10.))
                    .text_size(px(14.))
                    .font_weight(FontWeight::SEMIBOLD)
                    .rule(self.styles.category_text)
                    .child(category.name),
            )
            .on_click(move |_event, _window, _cx| {
                tracing::info!(id = category.id, name = category.name, "category selected");
            })
    }
}

impl RenderOnce for CategoriesScreen {
    fn render(self, _window: &mut gpui::Window, _cx: &mut gpui::App) -> impl IntoElement {
        div()
            .id("categories")
            .size_full()
            .overflow_y_scroll()
            .rule(self.styles.container)
            .child(
                div()
                    .w_full()
                    .p(px(16.))
                    .flex()
                    .flex_row()
                    .flex_wrap()
                    .justify_between()
                    .gap(px(16.))
                    .children(CATEGORIES.iter().map(|category| self.category_item(category))),
            )
    }
}
