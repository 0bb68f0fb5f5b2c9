/// One periodic frame-rate report.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FrameReport {
    /// Frames per second over the report window just closed.
    pub fps: f64,

    /// Total frames counted since the stats were created.
    pub frame_count: u64,

    /// Actual length of the report window in seconds (>= the report interval).
    pub window_time: f64,
}

/// Rolling frames-per-second counter.
///
/// Counts down `report_interval` seconds of frame time; once it runs out,
/// a report is produced and the countdown restarts. The overshoot past the
/// interval boundary is included in the measured window, so
/// `fps = frames / actual_window_time`.
#[derive(Debug, Clone)]
pub struct FrameStats {
    frame_count: u64,
    frames_since_report: u64,
    window_start_time: f64,
    last_frame_time: f64,
    elapsed_since_report: f64,
    report_interval: f64,
}

impl FrameStats {
    pub const DEFAULT_REPORT_INTERVAL: f64 = 0.25;

    /// `start_time` is the clock reading the first frame is measured against.
    pub fn new(report_interval: f64, start_time: f64) -> Self {
        debug_assert!(report_interval > 0.0);
        Self {
            frame_count: 0,
            frames_since_report: 0,
            window_start_time: start_time,
            last_frame_time: start_time,
            elapsed_since_report: report_interval,
            report_interval,
        }
    }

    #[inline]
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    #[inline]
    pub fn frames_since_report(&self) -> u64 {
        self.frames_since_report
    }

    #[inline]
    pub fn report_interval(&self) -> f64 {
        self.report_interval
    }

    #[inline]
    pub fn window_start_time(&self) -> f64 {
        self.window_start_time
    }

    /// Time left before the next report.
    #[inline]
    pub fn remaining(&self) -> f64 {
        self.elapsed_since_report
    }

    /// Records one frame at clock reading `now` (seconds, monotonic).
    pub fn tick(&mut self, now: f64) -> Option<FrameReport> {
        self.elapsed_since_report -= now - self.last_frame_time;
        self.last_frame_time = now;

        self.frame_count += 1;
        self.frames_since_report += 1;

        if self.elapsed_since_report >= 0.0 {
            return None;
        }

        let window_time = self.report_interval - self.elapsed_since_report;
        let report = FrameReport {
            fps: self.frames_since_report as f64 / window_time,
            frame_count: self.frame_count,
            window_time,
        };

        self.frames_since_report = 0;
        self.elapsed_since_report = self.report_interval;
        self.window_start_time = now;

        Some(report)
    }
}

/// Window title carrying the latest report: `"<base> (<fps> fps, <zoom> zoom)"`.
pub fn status_title(base: &str, fps: f64, zoom: f32) -> String {
    format!("{base} ({fps:.1} fps, {zoom:.2} zoom)")
}
