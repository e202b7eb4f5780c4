#![allow(missing_docs)] // Derive macros generate undocumented methods.

use enum_assoc::Assoc;
use gpui::{
    Edges, FontWeight, Hsla, IntoElement, Length, ParentElement, Pixels, RenderOnce, SharedString,
    Styled, div, prelude::FluentBuilder, px,
};

/// Icons used across the storefront, rendered as text glyphs.
#[derive(Assoc, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[func(pub fn glyph(&self) -> &'static str)]
pub enum IconKind {
    #[assoc(glyph = "◆")]
    Logo,
    #[assoc(glyph = "⌕")]
    Search,
    #[assoc(glyph = "♡")]
    Heart,
    #[assoc(glyph = "🔔")]
    Bell,
    #[assoc(glyph = "⌂")]
    Home,
    #[assoc(glyph = "▦")]
    Grid,
    #[assoc(glyph = "🛒")]
    Cart,
    #[assoc(glyph = "👤")]
    Person,
    #[assoc(glyph = "★")]
    Star,
    #[assoc(glyph = "›")]
    ChevronForward,
    #[assoc(glyph = "✎")]
    Pencil,
    #[assoc(glyph = "▣")]
    Cube,
    #[assoc(glyph = "⌖")]
    Map,
    #[assoc(glyph = "▭")]
    Card,
    #[assoc(glyph = "⚙")]
    Settings,
    #[assoc(glyph = "?")]
    Help,
    #[assoc(glyph = "ℹ")]
    Information,
    #[assoc(glyph = "⇥")]
    LogOut,
    #[assoc(glyph = "▤")]
    Chip,
    #[assoc(glyph = "👕")]
    Shirt,
    #[assoc(glyph = "🍔")]
    Food,
    #[assoc(glyph = "⌚")]
    Watch,
    #[assoc(glyph = "📖")]
    Book,
    #[assoc(glyph = "🏀")]
    Ball,
    #[assoc(glyph = "✨")]
    Sparkles,
    #[assoc(glyph = "✚")]
    Medkit,
    #[assoc(glyph = "🚗")]
    Car,
    #[assoc(glyph = "🔧")]
    Wrench,
    #[assoc(glyph = "🐾")]
    Paw,
    #[assoc(glyph = "💻")]
    Laptop,
}

impl From<IconKind> for SharedString {
    fn from(icon: IconKind) -> Self {
        icon.glyph().into()
    }
}

/// A glyph icon with a size, color and margins.
#[derive(IntoElement)]
pub struct Icon {
    kind: IconKind,
    size: Pixels,
    color: Option<Hsla>,
    margin: Edges<Option<Length>>,
}

impl Icon {
    pub fn new(kind: IconKind) -> Self {
        Self {
            kind,
            size: px(14.),
            color: None,
            margin: Edges::default(),
        }
    }

    /// Sets top margin.
    pub fn mt(mut self, margin: impl Into<Length>) -> Self {
        self.margin.top = Some(margin.into());
        self
    }

    /// Sets left margin.
    pub fn ml(mut self, margin: impl Into<Length>) -> Self {
        self.margin.left = Some(margin.into());
        self
    }

    /// Sets right margin.
    pub fn mr(mut self, margin: impl Into<Length>) -> Self {
        self.margin.right = Some(margin.into());
        self
    }

    pub fn size(mut self, size: Pixels) -> Self {
        self.size = size;
        self
    }

    /// Sets the glyph color. Without one the icon inherits the text color.
    pub fn color(mut self, color: impl Into<Hsla>) -> Self {
        self.color = Some(color.into());
        self
    }
}

impl RenderOnce for Icon {
    fn render(self, _window: &mut gpui::Window, _cx: &mut gpui::App) -> impl IntoElement {
        div()
            .flex_none()
            .flex()
            .items_center()
            .justify_center()
            .w(self.size)
            .h(self.size)
            .text_size(self.size * 0.9)
            .line_height(self.size)
            .font_weight(FontWeight::MEDIUM)
            .when_some(self.margin.top, |this, v| this.mt(v))
            .when_some(self.margin.left, |this, v| this.ml(v))
            .when_some(self.margin.right, |this, v| this.mr(v))
            .when_some(self.color, |this, color| this.text_color(color))
            .child(self.kind.glyph())
    }
}

#[cfg(all(test, feature = "test-support"))]
mod tests {
    use super::*;
    use gpui::{AppContext, TestAppContext, VisualTestContext, hsla};

    #[test]
    fn test_every_icon_has_a_glyph() {
        let kinds = [
            IconKind::Logo,
            IconKind::Search,
            IconKind::Heart,
            IconKind::Bell,
            IconKind::Home,
            IconKind::Grid,
            IconKind::Cart,
            IconKind::Person,
            IconKind::Star,
            IconKind::ChevronForward,
        ];

        for kind in kinds {
            assert!(!kind.glyph().is_empty(), "{kind:?} has no glyph");
        }
    }

    #[gpui::test]
    fn test_icon_builder_chain(cx: &mut TestAppContext) {
        cx.update(|_cx| {
            let color = hsla(0.5, 0.5, 0.5, 1.0);
            let icon = Icon::new(IconKind::Star).size(px(32.)).color(color).mr(px(4.));

            assert_eq!(icon.size, px(32.));
            assert!(icon.color.is_some());
            assert!(icon.margin.right.is_some());
        });
    }

    #[gpui::test]
    fn test_icon_renders_in_window(cx: &mut TestAppContext) {
        let window = cx.update(|cx| {
            cx.open_window(Default::default(), |_window, cx| cx.new(|_cx| IconTestView))
                .unwrap()
        });

        let _cx = VisualTestContext::from_window(window.into(), cx);
    }

    /// Test view that contains an Icon
    struct IconTestView;

    impl gpui::Render for IconTestView {
        fn render(
            &mut self,
            _window: &mut gpui::Window,
            _cx: &mut gpui::Context<Self>,
        ) -> impl IntoElement {
            div()
                .size_full()
                .child(Icon::new(IconKind::Cart).size(px(24.)))
        }
    }
}
