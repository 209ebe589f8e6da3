use std::time::{Duration, Instant};

/// Timing for one tick of a [`FrameClock`].
#[derive(Debug, Copy, Clone)]
pub struct FrameTime {
    /// Seconds since the previous tick, clamped.
    pub dt: f32,
    /// Seconds since the clock started. Drives animation.
    pub elapsed: f64,
    pub now: Instant,
    pub frame_index: u64,
}

/// Monotonic frame clock.
///
/// `dt` is clamped so a debugger pause or a minimized window does not
/// produce a huge step; `elapsed` is never clamped, so animations stay
/// phase-locked to wall time.
#[derive(Debug, Clone)]
pub struct FrameClock {
    start: Instant,
    last: Instant,
    frame_index: u64,
    dt_min: Duration,
    dt_max: Duration,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::with_clamps(Duration::from_micros(100), Duration::from_millis(250))
    }

    pub fn with_clamps(dt_min: Duration, dt_max: Duration) -> Self {
        debug_assert!(dt_min <= dt_max);
        let now = Instant::now();
        Self {
            start: now,
            last: now,
            frame_index: 0,
            dt_min,
            dt_max,
        }
    }

    /// Restarts the delta baseline without touching `elapsed`.
    pub fn reset(&mut self) {
        self.last = Instant::now();
    }

    pub fn tick(&mut self) -> FrameTime {
        self.tick_at(Instant::now())
    }

    fn tick_at(&mut self, now: Instant) -> FrameTime {
        let dt = now
            .saturating_duration_since(self.last)
            .clamp(self.dt_min, self.dt_max);
        self.last = now;

        let ft = FrameTime {
            dt: dt.as_secs_f32(),
            elapsed: now.saturating_duration_since(self.start).as_secs_f64(),
            now,
            frame_index: self.frame_index,
        };
        self.frame_index = self.frame_index.wrapping_add(1);
        ft
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

/// Rolling average of frame durations over a fixed window.
#[derive(Debug, Clone)]
pub struct FrameStats {
    samples: Vec<f32>,
    next: usize,
    filled: bool,
}

impl FrameStats {
    pub fn new(window: usize) -> Self {
        Self {
            samples: vec![0.0; window.max(1)],
            next: 0,
            filled: false,
        }
    }

    pub fn push(&mut self, dt: f32) {
        self.samples[self.next] = dt;
        self.next = (self.next + 1) % self.samples.len();
        if self.next == 0 {
            self.filled = true;
        }
    }

    /// Mean frame time in seconds, `0` before the first sample.
    pub fn mean_dt(&self) -> f32 {
        let n = if self.filled { self.samples.len() } else { self.next };
        if n == 0 {
            return 0.0;
        }
        self.samples[..n].iter().sum::<f32>() / n as f32
    }

    pub fn fps(&self) -> f32 {
        let dt = self.mean_dt();
        if dt > 0.0 { 1.0 / dt } else { 0.0 }
    }
}

impl Default for FrameStats {
    fn default() -> Self {
        Self::new(60)
    }
}
