use crate::coords::Vec2;

/// Zoom change per scroll line.
pub const ZOOM_STEP: f32 = 0.1;

/// Smallest zoom value; keeps the projection positive and non-degenerate.
pub const ZOOM_FLOOR: f32 = 0.1;

/// Pan/zoom of the view.
///
/// `zoom` is always `>= ZOOM_FLOOR`. `pan` is in logical pixels and is not
/// scaled by zoom or viewport size.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ViewState {
    zoom: f32,
    pan: Vec2,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            zoom: 1.0,
            pan: Vec2::zero(),
        }
    }
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    #[inline]
    pub fn pan(&self) -> Vec2 {
        self.pan
    }

    /// Applies a scroll delta: `zoom = max(zoom - d * ZOOM_STEP, ZOOM_FLOOR)`.
    ///
    /// Positive `d` lowers the zoom value (zoom out).
    pub fn apply_zoom_delta(&mut self, d: f32) {
        self.zoom = (self.zoom - d * ZOOM_STEP).max(ZOOM_FLOOR);
    }

    /// Adds a raw offset to the pan vector.
    pub fn apply_pan_delta(&mut self, dx: f32, dy: f32) {
        self.pan += Vec2::new(dx, dy);
    }

    /// Applies a screen-space cursor drag delta, flipping into view space.
    pub fn apply_drag(&mut self, delta: Vec2) {
        self.apply_pan_delta(-delta.x, delta.y);
    }

    /// Restores zoom 1 and a centered pan.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
