use std::rc::Rc;

use gpui::{
    AnyElement, App, ClickEvent, Div, ElementId, InteractiveElement, IntoElement, MouseButton,
    ParentElement, RenderOnce, StatefulInteractiveElement, StyleRefinement, Styled, Window, div,
    prelude::FluentBuilder,
};

use crate::{ElementIdExt, utils::pressed_transition};

type ClickHandler = Box<dyn Fn(&ClickEvent, &mut Window, &mut App) + 'static>;
type PressHandler = Box<dyn Fn(&bool, &mut Window, &mut App) + 'static>;

/// A pressable container that dims while held down.
///
/// Layout and colors are set on it like on a `div`; children go inside.
#[derive(IntoElement)]
pub struct Touchable {
    id: ElementId,
    base: Div,
    disabled: bool,
    on_click: Option<ClickHandler>,
    on_press: Option<PressHandler>,
}

impl Touchable {
    pub fn new(id: impl Into<ElementId>) -> Self {
        Self {
            id: id.into(),
            base: div(),
            disabled: false,
            on_click: None,
            on_press: None,
        }
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn on_click(
        mut self,
        on_click: impl Fn(&ClickEvent, &mut Window, &mut App) + 'static,
    ) -> Self {
        self.on_click = Some(Box::new(on_click));
        self
    }

    /// Called with `true` when a press starts and `false` when it ends.
    pub fn on_press(mut self, on_press: impl Fn(&bool, &mut Window, &mut App) + 'static) -> Self {
        self.on_press = Some(Box::new(on_press));
        self
    }
}

impl Styled for Touchable {
    fn style(&mut self) -> &mut StyleRefinement {
        self.base.style()
    }
}

impl ParentElement for Touchable {
    fn extend(&mut self, elements: impl IntoIterator<Item = AnyElement>) {
        self.base.extend(elements)
    }
}

impl RenderOnce for Touchable {
    fn render(self, window: &mut Window, cx: &mut App) -> impl IntoElement {
        let Touchable {
            id,
            base,
            disabled,
            on_click,
            on_press,
        } = self;

        let is_pressed_state =
            window.use_keyed_state(id.with_suffix("state:pressed"), cx, |_window, _cx| false);
        let is_pressed = *is_pressed_state.read(cx);

        let opacity_transition = pressed_transition(id.clone(), window, cx, is_pressed, disabled);
        let opacity = *opacity_transition.evaluate(window, cx);

        base.id(id.clone())
            .debug_selector(|| id.to_string())
            .opacity(opacity)
            .when(!disabled, |this| {
                let on_press = Rc::new(on_press);
                let on_press_on_mouse_down = on_press.clone();
                let on_press_on_mouse_up_out = on_press.clone();
                let is_pressed_on_mouse_down = is_pressed_state.clone();
                let is_pressed_on_click = is_pressed_state.clone();

                this.cursor_pointer()
                    .on_mouse_down(MouseButton::Left, move |_event, window, cx| {
                        is_pressed_on_mouse_down.update(cx, |this, cx| {
                            *this = true;
                            cx.notify();
                        });

                        if let Some(on_press) = &*on_press_on_mouse_down {
                            (on_press)(&true, window, cx)
                        }
                    })
                    .on_mouse_up_out(MouseButton::Left, move |_event, window, cx| {
                        // Pressed, dragged out of bounds, then released.
                        let was_pressed = is_pressed_state.update(cx, |this, cx| {
                            cx.notify();
                            std::mem::replace(this, false)
                        });

                        if !was_pressed {
                            return;
                        }
                        if let Some(on_press) = &*on_press_on_mouse_up_out {
                            (on_press)(&false, window, cx)
                        }
                    })
                    .on_click(move |event, window, cx| {
                        is_pressed_on_click.update(cx, |this, cx| {
                            *this = false;
                            cx.notify();
                        });

                        if let Some(on_press) = &*on_press {
                            (on_press)(&false, window, cx)
                        }

                        if let Some(on_click) = on_click.as_ref() {
                            (on_click)(event, window, cx)
                        }
                    })
            })
    }
}

#[cfg(all(test, feature = "test-support"))]
mod tests {
    use std::{
        cell::{Cell, RefCell},
        rc::Rc,
    };

    use super::*;
    use crate::utils::{PRESSED_OPACITY, touch_opacity};
    use gpui::{Modifiers, TestAppContext, px};

    #[gpui::test]
    fn test_touchable_creation(cx: &mut TestAppContext) {
        cx.update(|_cx| {
            let touchable = Touchable::new("touchable");

            assert!(!touchable.disabled);
            assert!(touchable.on_click.is_none());
            assert!(touchable.on_press.is_none());
        });
    }

    #[gpui::test]
    fn test_touchable_builder(cx: &mut TestAppContext) {
        cx.update(|_cx| {
            let touchable = Touchable::new("touchable")
                .disabled(true)
                .on_click(|_event, _window, _cx| {})
                .on_press(|_is_pressed, _window, _cx| {})
                .p(px(4.))
                .child("Ver tudo");

            assert!(touchable.disabled);
            assert!(touchable.on_click.is_some());
            assert!(touchable.on_press.is_some());
        });
    }

    #[derive(Default, Clone)]
    struct Recorder {
        clicks: Rc<Cell<usize>>,
        presses: Rc<RefCell<Vec<bool>>>,
    }

    struct TouchableTestView {
        disabled: bool,
        recorder: Recorder,
    }

    impl gpui::Render for TouchableTestView {
        fn render(
            &mut self,
            _window: &mut gpui::Window,
            _cx: &mut gpui::Context<Self>,
        ) -> impl IntoElement {
            let clicks = self.recorder.clicks.clone();
            let presses = self.recorder.presses.clone();

            div().size_full().child(
                Touchable::new("touchable")
                    .size_full()
                    .disabled(self.disabled)
                    .child("Press")
                    .on_press(move |is_pressed, _window, _cx| {
                        presses.borrow_mut().push(*is_pressed)
                    })
                    .on_click(move |_event, _window, _cx| clicks.set(clicks.get() + 1)),
            )
        }
    }

    #[gpui::test]
    fn test_press_then_release_fires_handlers(cx: &mut TestAppContext) {
        let recorder = Recorder::default();
        let view_recorder = recorder.clone();
        let (_view, cx) = cx.add_window_view(|_window, _cx| TouchableTestView {
            disabled: false,
            recorder: view_recorder,
        });

        let center = cx.debug_bounds("touchable").unwrap().center();

        cx.simulate_mouse_down(center, MouseButton::Left, Modifiers::none());
        assert_eq!(*recorder.presses.borrow(), vec![true]);
        assert_eq!(recorder.clicks.get(), 0);

        cx.simulate_mouse_up(center, MouseButton::Left, Modifiers::none());
        assert_eq!(*recorder.presses.borrow(), vec![true, false]);
        assert_eq!(recorder.clicks.get(), 1);
    }

    #[gpui::test]
    fn test_repeated_clicks_each_fire(cx: &mut TestAppContext) {
        let recorder = Recorder::default();
        let view_recorder = recorder.clone();
        let (_view, cx) = cx.add_window_view(|_window, _cx| TouchableTestView {
            disabled: false,
            recorder: view_recorder,
        });

        let center = cx.debug_bounds("touchable").unwrap().center();
        cx.simulate_click(center, Modifiers::none());
        cx.simulate_click(center, Modifiers::none());

        assert_eq!(recorder.clicks.get(), 2);
    }

    #[gpui::test]
    fn test_disabled_touchable_ignores_clicks(cx: &mut TestAppContext) {
        let recorder = Recorder::default();
        let view_recorder = recorder.clone();
        let (_view, cx) = cx.add_window_view(|_window, _cx| TouchableTestView {
            disabled: true,
            recorder: view_recorder,
        });

        let center = cx.debug_bounds("touchable").unwrap().center();
        cx.simulate_click(center, Modifiers::none());

        assert_eq!(recorder.clicks.get(), 0);
        assert!(recorder.presses.borrow().is_empty());
    }

    #[test]
    fn test_pressed_goal_is_pressed_opacity() {
        assert_eq!(touch_opacity(true, false), PRESSED_OPACITY);
        assert_eq!(touch_opacity(false, false), 1.);
    }
}
