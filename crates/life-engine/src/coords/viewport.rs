/// Drawable size in logical pixels, as last reported by a resize.
///
/// Values are stored exactly as reported; a minimized window may produce a
/// zero-sized viewport, which `is_valid` rejects.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn is_valid(self) -> bool {
        self.width > 0.0 && self.height > 0.0 && self.width.is_finite() && self.height.is_finite()
    }

    /// Aspect-preserving scale: the shorter edge maps to one view unit.
    #[inline]
    pub fn uniform_scale(self) -> f32 {
        self.width.min(self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniform_scale_picks_shorter_edge() {
        assert_eq!(Viewport::new(800.0, 600.0).uniform_scale(), 600.0);
        assert_eq!(Viewport::new(300.0, 900.0).uniform_scale(), 300.0);
    }

    #[test]
    fn zero_size_is_invalid() {
        assert!(!Viewport::new(0.0, 600.0).is_valid());
        assert!(Viewport::new(1.0, 1.0).is_valid());
    }
}
