use life_engine::coords::{Vec2, Viewport};
use life_engine::core::AppControl;
use life_engine::input::{InputHandler, Key, KeyState, MouseButton, MouseButtonState};
use life_engine::view::{DragState, ViewState};

use crate::config::ExitTrigger;

/// Turns input callbacks into view mutations.
///
/// Scroll zooms, a primary-button drag pans, Escape quits (on the configured
/// edge) and `R` resets the view.
#[derive(Debug)]
pub struct InputController {
    view: ViewState,
    drag: DragState,
    viewport: Viewport,
    cursor: Vec2,
    exit_trigger: ExitTrigger,
}

impl InputController {
    pub fn new(exit_trigger: ExitTrigger) -> Self {
        Self {
            view: ViewState::default(),
            drag: DragState::default(),
            viewport: Viewport::default(),
            cursor: Vec2::zero(),
            exit_trigger,
        }
    }

    #[inline]
    pub fn view(&self) -> &ViewState {
        &self.view
    }

    #[inline]
    pub fn drag(&self) -> &DragState {
        &self.drag
    }

    #[inline]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Last known cursor position, tracked whether or not a drag is active.
    #[inline]
    pub fn cursor(&self) -> Vec2 {
        self.cursor
    }
}

impl InputHandler for InputController {
    fn on_resize(&mut self, width: f32, height: f32) {
        self.viewport = Viewport::new(width, height);
    }

    fn on_key(&mut self, key: Key, state: KeyState, repeat: bool) -> AppControl {
        match key {
            Key::Escape if self.exit_trigger.fires_on(state, repeat) => return AppControl::Exit,
            Key::R if state == KeyState::Pressed && !repeat => {
                self.view.reset();
                log::debug!("view reset");
            }
            _ => {}
        }
        AppControl::Continue
    }

    fn on_scroll(&mut self, _dx: f32, dy: f32) {
        self.view.apply_zoom_delta(dy);
    }

    fn on_cursor_moved(&mut self, x: f32, y: f32) {
        self.cursor = Vec2::new(x, y);
        if let Some(delta) = self.drag.drag_to(self.cursor) {
            self.view.apply_drag(delta);
        }
    }

    fn on_mouse_button(&mut self, button: MouseButton, state: MouseButtonState) {
        if button != MouseButton::Left {
            return;
        }
        match state {
            MouseButtonState::Pressed => self.drag.press(self.cursor),
            MouseButtonState::Released => self.drag.release(),
        }
    }

    fn on_focus(&mut self, focused: bool) {
        // The release would be lost while unfocused.
        if !focused {
            self.drag.release();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use life_engine::view::ZOOM_FLOOR;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-5
    }

    fn controller() -> InputController {
        InputController::new(ExitTrigger::Release)
    }

    #[test]
    fn scroll_changes_zoom_and_clamps() {
        let mut c = controller();
        c.on_scroll(0.0, 1.0);
        assert!(approx(c.view().zoom(), 0.9));

        for _ in 0..10 {
            c.on_scroll(0.0, 20.0);
        }
        assert_eq!(c.view().zoom(), ZOOM_FLOOR);
    }

    #[test]
    fn press_then_move_pans_with_flipped_x() {
        let mut c = controller();
        c.on_cursor_moved(100.0, 100.0);
        c.on_mouse_button(MouseButton::Left, MouseButtonState::Pressed);
        assert_eq!(c.drag().last_cursor(), Some(Vec2::new(100.0, 100.0)));

        c.on_cursor_moved(120.0, 90.0);
        // dx = +20 is subtracted, dy = -10 is added.
        assert_eq!(c.view().pan(), Vec2::new(-20.0, -10.0));
        assert_eq!(c.drag().last_cursor(), Some(Vec2::new(120.0, 90.0)));
    }

    #[test]
    fn release_stops_panning() {
        let mut c = controller();
        c.on_cursor_moved(100.0, 100.0);
        c.on_mouse_button(MouseButton::Left, MouseButtonState::Pressed);
        c.on_cursor_moved(120.0, 90.0);
        c.on_mouse_button(MouseButton::Left, MouseButtonState::Released);
        assert_eq!(c.drag().last_cursor(), None);

        let pan = c.view().pan();
        c.on_cursor_moved(300.0, 300.0);
        c.on_cursor_moved(5.0, 5.0);
        assert_eq!(c.view().pan(), pan);
        assert_eq!(c.cursor(), Vec2::new(5.0, 5.0));
    }

    #[test]
    fn idle_moves_never_pan() {
        let mut c = controller();
        for i in 0..5 {
            c.on_cursor_moved(i as f32 * 13.0, i as f32 * -7.0);
        }
        assert_eq!(c.view().pan(), Vec2::zero());
        assert!(!c.drag().is_active());
    }

    #[test]
    fn multi_step_drag_equals_single_delta() {
        let mut stepped = controller();
        stepped.on_cursor_moved(10.0, 10.0);
        stepped.on_mouse_button(MouseButton::Left, MouseButtonState::Pressed);
        stepped.on_cursor_moved(14.0, 30.0);
        stepped.on_cursor_moved(40.0, 22.0);

        let mut direct = controller();
        direct.on_cursor_moved(10.0, 10.0);
        direct.on_mouse_button(MouseButton::Left, MouseButtonState::Pressed);
        direct.on_cursor_moved(40.0, 22.0);

        assert_eq!(stepped.view().pan(), direct.view().pan());
        assert_eq!(direct.view().pan(), Vec2::new(-30.0, 12.0));
    }

    #[test]
    fn other_buttons_do_not_drag() {
        let mut c = controller();
        c.on_mouse_button(MouseButton::Right, MouseButtonState::Pressed);
        c.on_mouse_button(MouseButton::Middle, MouseButtonState::Pressed);
        c.on_cursor_moved(50.0, 50.0);
        assert!(!c.drag().is_active());
        assert_eq!(c.view().pan(), Vec2::zero());
    }

    #[test]
    fn focus_loss_ends_drag() {
        let mut c = controller();
        c.on_mouse_button(MouseButton::Left, MouseButtonState::Pressed);
        c.on_focus(false);
        c.on_cursor_moved(50.0, 50.0);
        assert_eq!(c.view().pan(), Vec2::zero());
    }

    #[test]
    fn resize_is_stored_exactly() {
        let mut c = controller();
        c.on_resize(1.0, 4321.5);
        assert_eq!(c.viewport(), Viewport::new(1.0, 4321.5));
        c.on_resize(0.0, 0.0);
        assert_eq!(c.viewport(), Viewport::new(0.0, 0.0));
        assert_eq!(c.view(), &ViewState::default());
    }

    #[test]
    fn escape_exits_on_configured_edge() {
        let mut release = InputController::new(ExitTrigger::Release);
        assert_eq!(release.on_key(Key::Escape, KeyState::Pressed, false), AppControl::Continue);
        assert_eq!(release.on_key(Key::Escape, KeyState::Released, false), AppControl::Exit);

        let mut press = InputController::new(ExitTrigger::Press);
        assert_eq!(press.on_key(Key::Escape, KeyState::Pressed, false), AppControl::Exit);
    }

    #[test]
    fn other_keys_continue() {
        let mut c = controller();
        assert_eq!(c.on_key(Key::Space, KeyState::Released, false), AppControl::Continue);
    }

    #[test]
    fn r_resets_view() {
        let mut c = controller();
        c.on_scroll(0.0, 4.0);
        c.on_mouse_button(MouseButton::Left, MouseButtonState::Pressed);
        c.on_cursor_moved(9.0, 9.0);
        c.on_key(Key::R, KeyState::Pressed, false);
        assert_eq!(c.view(), &ViewState::default());
    }

    #[test]
    fn scripted_session() {
        let mut c = controller();
        c.on_resize(800.0, 600.0);

        c.on_scroll(0.0, 1.0);
        assert!(approx(c.view().zoom(), 0.9));
        for _ in 0..10 {
            c.on_scroll(0.0, 20.0);
        }
        assert!(approx(c.view().zoom(), 0.1));

        c.on_cursor_moved(100.0, 100.0);
        c.on_mouse_button(MouseButton::Left, MouseButtonState::Pressed);
        c.on_cursor_moved(120.0, 90.0);
        assert_eq!(c.view().pan(), Vec2::new(-20.0, -10.0));

        c.on_mouse_button(MouseButton::Left, MouseButtonState::Released);
        c.on_cursor_moved(200.0, 200.0);
        assert_eq!(c.view().pan(), Vec2::new(-20.0, -10.0));
        assert_eq!(c.on_key(Key::Escape, KeyState::Released, false), AppControl::Exit);
    }
}
