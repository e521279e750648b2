//! Frame timing and performance monitoring.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Tracks frame durations for FPS calculation and periodic stats logging.
pub struct FrameTimer {
    frame_times: VecDeque<Duration>,
    last_frame: Instant,
    max_samples: usize,
    /// Zero disables stats logging.
    report_interval: Duration,
    last_report: Instant,
}

impl FrameTimer {
    /// Create a new frame timer with a default 120-sample rolling window
    /// and no stats logging.
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            frame_times: VecDeque::new(),
            last_frame: now,
            max_samples: 120,
            report_interval: Duration::ZERO,
            last_report: now,
        }
    }

    /// Log fps and frame time at debug level every `secs` seconds.
    pub fn with_report_interval(mut self, secs: f64) -> Self {
        self.set_report_interval(secs);
        self
    }

    pub fn set_report_interval(&mut self, secs: f64) {
        self.report_interval = if secs.is_finite() && secs > 0.0 {
            Duration::from_secs_f64(secs)
        } else {
            Duration::ZERO
        };
    }

    /// Record the start of a new frame. Call this once per frame.
    pub fn begin_frame(&mut self) {
        let now = Instant::now();
        let dt = now - self.last_frame;
        self.last_frame = now;
        self.frame_times.push_back(dt);
        if self.frame_times.len() > self.max_samples {
            self.frame_times.pop_front();
        }
        if self.report_due(now) {
            tracing::debug!(
                fps = format_args!("{:.1}", self.fps()),
                frame_ms = format_args!("{:.2}", self.frame_time_ms()),
                "frame stats"
            );
        }
    }

    fn report_due(&mut self, now: Instant) -> bool {
        if self.report_interval.is_zero() || now - self.last_report < self.report_interval {
            return false;
        }
        self.last_report = now;
        true
    }

    /// Average frames per second over the sample window.
    pub fn fps(&self) -> f64 {
        if self.frame_times.is_empty() {
            return 0.0;
        }
        let total: f64 = self.frame_times.iter().map(|d| d.as_secs_f64()).sum();
        if total <= 0.0 {
            return 0.0;
        }
        self.frame_times.len() as f64 / total
    }

    /// Average frame time in milliseconds.
    pub fn frame_time_ms(&self) -> f64 {
        if self.frame_times.is_empty() {
            return 0.0;
        }
        let total: f64 = self.frame_times.iter().map(|d| d.as_secs_f64()).sum();
        (total / self.frame_times.len() as f64) * 1000.0
    }

    /// Number of frame samples currently stored.
    pub fn sample_count(&self) -> usize {
        self.frame_times.len()
    }
}

impl Default for FrameTimer {
    fn default() -> Self {
        Self::new()
    }
}
