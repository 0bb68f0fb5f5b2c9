use crate::coords::Vec2;

/// Click-and-drag gesture state.
///
/// The anchor position only exists while a drag is in progress.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub enum DragState {
    #[default]
    Idle,
    Dragging {
        last_cursor: Vec2,
    },
}

impl DragState {
    #[inline]
    pub fn is_active(&self) -> bool {
        matches!(self, DragState::Dragging { .. })
    }

    /// Anchor of the current drag, `None` when idle.
    #[inline]
    pub fn last_cursor(&self) -> Option<Vec2> {
        match self {
            DragState::Idle => None,
            DragState::Dragging { last_cursor } => Some(*last_cursor),
        }
    }

    /// Starts (or re-anchors) a drag at `cursor`.
    pub fn press(&mut self, cursor: Vec2) {
        *self = DragState::Dragging { last_cursor: cursor };
    }

    /// Ends the drag, dropping the anchor.
    pub fn release(&mut self) {
        *self = DragState::Idle;
    }

    /// Moves the anchor to `cursor` and returns `cursor - previous anchor`.
    ///
    /// Returns `None` without side effects when idle.
    pub fn drag_to(&mut self, cursor: Vec2) -> Option<Vec2> {
        match self {
            DragState::Idle => None,
            DragState::Dragging { last_cursor } => {
                let delta = cursor - *last_cursor;
                *last_cursor = cursor;
                Some(delta)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_idle_without_anchor() {
        let d = DragState::default();
        assert!(!d.is_active());
        assert_eq!(d.last_cursor(), None);
    }

    #[test]
    fn press_records_cursor() {
        let mut d = DragState::default();
        d.press(Vec2::new(100.0, 100.0));
        assert!(d.is_active());
        assert_eq!(d.last_cursor(), Some(Vec2::new(100.0, 100.0)));
    }

    #[test]
    fn release_clears_anchor() {
        let mut d = DragState::default();
        d.press(Vec2::new(1.0, 2.0));
        d.release();
        assert_eq!(d, DragState::Idle);
        assert_eq!(d.last_cursor(), None);
    }

    #[test]
    fn idle_move_is_ignored() {
        let mut d = DragState::default();
        assert_eq!(d.drag_to(Vec2::new(50.0, 50.0)), None);
        assert_eq!(d, DragState::Idle);
    }

    #[test]
    fn drag_deltas_telescope() {
        let mut d = DragState::default();
        d.press(Vec2::new(10.0, 10.0));

        let a = d.drag_to(Vec2::new(15.0, 4.0)).unwrap();
        let b = d.drag_to(Vec2::new(30.0, -2.0)).unwrap();

        assert_eq!(a + b, Vec2::new(20.0, -12.0));
        assert_eq!(d.last_cursor(), Some(Vec2::new(30.0, -2.0)));
    }
}
