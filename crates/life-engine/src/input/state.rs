use super::types::{InputEvent, PointerMoveEvent};

/// Pointer tracking for a single window.
///
/// winit does not report a position with `MouseInput`, so button events are
/// stamped with the last position seen here.
#[derive(Debug, Default)]
pub struct InputState {
    /// Pointer position in logical pixels, `None` while outside the window.
    pub pointer_pos: Option<(f32, f32)>,
}

impl InputState {
    pub fn apply_event(&mut self, ev: &InputEvent) {
        match ev {
            InputEvent::PointerMoved(PointerMoveEvent { x, y }) => {
                self.pointer_pos = Some((*x, *y));
            }
            InputEvent::PointerLeft => {
                self.pointer_pos = None;
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{Key, KeyState};

    #[test]
    fn follows_pointer_moves() {
        let mut s = InputState::default();
        assert_eq!(s.pointer_pos, None);
        s.apply_event(&InputEvent::PointerMoved(PointerMoveEvent { x: 3.0, y: 4.0 }));
        s.apply_event(&InputEvent::PointerMoved(PointerMoveEvent { x: 7.5, y: -1.0 }));
        assert_eq!(s.pointer_pos, Some((7.5, -1.0)));
    }

    #[test]
    fn pointer_leave_forgets_position() {
        let mut s = InputState::default();
        s.apply_event(&InputEvent::PointerMoved(PointerMoveEvent { x: 3.0, y: 4.0 }));
        s.apply_event(&InputEvent::PointerLeft);
        assert_eq!(s.pointer_pos, None);
    }

    #[test]
    fn other_events_keep_position() {
        let mut s = InputState::default();
        s.apply_event(&InputEvent::PointerMoved(PointerMoveEvent { x: 1.0, y: 2.0 }));
        s.apply_event(&InputEvent::Key { key: Key::Space, state: KeyState::Pressed, code: 0, repeat: false });
        s.apply_event(&InputEvent::Focused(false));
        assert_eq!(s.pointer_pos, Some((1.0, 2.0)));
    }
}
