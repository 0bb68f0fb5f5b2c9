use std::time::Instant;

/// Frame timing snapshot.
#[derive(Debug, Copy, Clone)]
pub struct FrameTime {
    /// Seconds since the clock origin. Monotonic and unclamped.
    pub elapsed: f64,
}

/// Frame clock producing `FrameTime` snapshots.
///
/// One clock per window. The origin is re-baselined with [`FrameClock::reset`]
/// once window and GPU setup is done, so setup time is not reported as frame time.
#[derive(Debug, Clone)]
pub struct FrameClock {
    origin: Instant,
}

impl FrameClock {
    pub fn new() -> Self {
        Self { origin: Instant::now() }
    }

    /// Moves the origin to now; the next tick reads close to zero.
    pub fn reset(&mut self) {
        self.reset_at(Instant::now());
    }

    pub fn tick(&mut self) -> FrameTime {
        self.tick_at(Instant::now())
    }

    fn reset_at(&mut self, now: Instant) {
        self.origin = now;
    }

    fn tick_at(&self, now: Instant) -> FrameTime {
        FrameTime {
            elapsed: now.saturating_duration_since(self.origin).as_secs_f64(),
        }
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn elapsed_counts_from_origin() {
        let clock = FrameClock::new();
        let origin = clock.origin;

        assert_eq!(clock.tick_at(origin + Duration::from_secs(2)).elapsed, 2.0);
        assert_eq!(clock.tick_at(origin + Duration::from_millis(2500)).elapsed, 2.5);
    }

    #[test]
    fn reset_excludes_setup_time() {
        let mut clock = FrameClock::new();
        let origin = clock.origin;

        // Slow GPU setup between clock creation and the first frame.
        let ready = origin + Duration::from_millis(600);
        clock.reset_at(ready);

        assert_eq!(clock.tick_at(ready).elapsed, 0.0);
        assert_eq!(clock.tick_at(ready + Duration::from_millis(250)).elapsed, 0.25);
    }

    #[test]
    fn reading_before_origin_saturates() {
        let mut clock = FrameClock::new();
        let origin = clock.origin;
        clock.reset_at(origin + Duration::from_secs(1));
        assert_eq!(clock.tick_at(origin).elapsed, 0.0);
    }
}
