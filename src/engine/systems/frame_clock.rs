/// Throughput sample emitted once per window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameReport {
    pub frames_in_window: u32,
}

/// Counts frames over fixed sampling windows.
///
/// This is not a rolling average: a window that overruns the period still
/// reports every frame it saw.
#[derive(Debug, Clone)]
pub struct FrameClock {
    last_tick: f64,
    frame_count: u32,
    window_secs: f64,
}

impl FrameClock {
    pub const DEFAULT_WINDOW_SECS: f64 = 1.0;

    /// `start` is the current time in seconds on the same clock later passed
    /// to [`tick`](Self::tick).
    pub fn new(start: f64) -> Self {
        Self::with_window(start, Self::DEFAULT_WINDOW_SECS)
    }

    pub fn with_window(start: f64, window_secs: f64) -> Self {
        debug_assert!(window_secs > 0.0);
        Self {
            last_tick: start,
            frame_count: 0,
            window_secs,
        }
    }

    pub fn frame_count(&self) -> u32 {
        self.frame_count
    }

    pub fn tick(&mut self, now: f64) -> Option<FrameReport> {
        self.frame_count = self.frame_count.saturating_add(1);

        if now - self.last_tick < self.window_secs {
            return None;
        }

        let report = FrameReport {
            frames_in_window: self.frame_count,
        };
        self.frame_count = 0;
        self.last_tick = now;
        Some(report)
    }
}
