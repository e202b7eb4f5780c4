use std::time::Duration;

use gpui::{App, ElementId, Window, ease_out_quint};
use gpui_transitions::{Transition, WindowUseTransition};

use crate::ElementIdExt;

/// Opacity applied while a touchable element is held down.
pub const PRESSED_OPACITY: f32 = 0.2;

/// Opacity of a touchable element for the given interaction state.
pub fn touch_opacity(is_pressed: bool, is_disabled: bool) -> f32 {
    if is_disabled {
        0.45
    } else if is_pressed {
        PRESSED_OPACITY
    } else {
        1.
    }
}

pub fn pressed_transition(
    base_id: impl Into<ElementId>,
    window: &mut Window,
    cx: &mut App,
    is_pressed: bool,
    is_disabled: bool,
) -> Transition<f32> {
    let goal = touch_opacity(is_pressed, is_disabled);

    let transition = window
        .use_keyed_transition(
            base_id.into().with_suffix("state:transition:opacity"),
            cx,
            Duration::from_millis(if is_pressed { 80 } else { 250 }),
            |_window, _cx| goal,
        )
        .with_easing(ease_out_quint());

    if *transition.read_goal(cx) != goal {
        transition.update(cx, |this, cx| {
            *this = goal;
            cx.notify();
        });
    }

    transition
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_touch_opacity() {
        assert_eq!(touch_opacity(false, false), 1.);
        assert_eq!(touch_opacity(true, false), PRESSED_OPACITY);
        assert!(touch_opacity(true, true) > PRESSED_OPACITY);
    }
}
