use crate::core::AppControl;

use super::types::{
    InputEvent, Key, KeyState, MouseButton, MouseButtonState, PointerButtonEvent, PointerMoveEvent,
};

/// Per-event-kind input callbacks.
///
/// Every method defaults to a no-op so implementors only override what they
/// react to. Only key events may request an exit.
pub trait InputHandler {
    /// Drawable area changed, in logical pixels.
    fn on_resize(&mut self, width: f32, height: f32) {
        let _ = (width, height);
    }

    fn on_key(&mut self, key: Key, state: KeyState, repeat: bool) -> AppControl {
        let _ = (key, state, repeat);
        AppControl::Continue
    }

    /// Wheel delta in lines; positive `dy` is scroll-up.
    fn on_scroll(&mut self, dx: f32, dy: f32) {
        let _ = (dx, dy);
    }

    fn on_cursor_moved(&mut self, x: f32, y: f32) {
        let _ = (x, y);
    }

    fn on_mouse_button(&mut self, button: MouseButton, state: MouseButtonState) {
        let _ = (button, state);
    }

    fn on_focus(&mut self, focused: bool) {
        let _ = focused;
    }
}

/// Routes `ev` to the matching `InputHandler` method.
pub fn dispatch<H: InputHandler + ?Sized>(handler: &mut H, ev: &InputEvent) -> AppControl {
    match ev {
        InputEvent::Key { key, state, repeat, .. } => return handler.on_key(*key, *state, *repeat),
        InputEvent::PointerMoved(PointerMoveEvent { x, y }) => handler.on_cursor_moved(*x, *y),
        InputEvent::PointerButton(PointerButtonEvent { button, state, .. }) => {
            handler.on_mouse_button(*button, *state)
        }
        InputEvent::MouseWheel { delta } => {
            let (dx, dy) = delta.in_lines();
            handler.on_scroll(dx, dy);
        }
        InputEvent::Focused(f) => handler.on_focus(*f),
        InputEvent::PointerLeft => {}
    }
    AppControl::Continue
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::MouseWheelDelta;

    #[derive(Default)]
    struct Recorder {
        calls: Vec<String>,
    }

    impl InputHandler for Recorder {
        fn on_key(&mut self, key: Key, state: KeyState, _repeat: bool) -> AppControl {
            self.calls.push(format!("key {key} {state:?}"));
            if key == Key::Q { AppControl::Exit } else { AppControl::Continue }
        }

        fn on_scroll(&mut self, dx: f32, dy: f32) {
            self.calls.push(format!("scroll {dx} {dy}"));
        }

        fn on_cursor_moved(&mut self, x: f32, y: f32) {
            self.calls.push(format!("move {x} {y}"));
        }

        fn on_mouse_button(&mut self, button: MouseButton, state: MouseButtonState) {
            self.calls.push(format!("button {button:?} {state:?}"));
        }
    }

    fn key(key: Key) -> InputEvent {
        InputEvent::Key { key, state: KeyState::Pressed, code: 0, repeat: false }
    }

    #[test]
    fn routes_each_kind() {
        let mut r = Recorder::default();
        dispatch(&mut r, &InputEvent::PointerMoved(PointerMoveEvent { x: 1.0, y: 2.0 }));
        dispatch(
            &mut r,
            &InputEvent::PointerButton(PointerButtonEvent {
                button: MouseButton::Left,
                state: MouseButtonState::Pressed,
                x: 1.0,
                y: 2.0,
            }),
        );
        dispatch(&mut r, &InputEvent::MouseWheel { delta: MouseWheelDelta::Line { x: 0.0, y: 1.0 } });
        dispatch(&mut r, &key(Key::Escape));

        assert_eq!(
            r.calls,
            vec!["move 1 2", "button Left Pressed", "scroll 0 1", "key Escape Pressed"]
        );
    }

    #[test]
    fn key_handler_result_is_returned() {
        let mut r = Recorder::default();
        assert_eq!(dispatch(&mut r, &key(Key::Q)), AppControl::Exit);
        assert_eq!(dispatch(&mut r, &key(Key::W)), AppControl::Continue);
    }

    #[test]
    fn unhandled_events_continue() {
        let mut r = Recorder::default();
        assert_eq!(dispatch(&mut r, &InputEvent::PointerLeft), AppControl::Continue);
        assert_eq!(dispatch(&mut r, &InputEvent::Focused(false)), AppControl::Continue);
        assert!(r.calls.is_empty());
    }
}
