//! Wall-clock timer for the render loop.

use std::time::Instant;

/// A clock for measuring elapsed time and delta time.
#[derive(Debug, Clone, Default)]
pub struct Clock {
    /// Baseline set by `start`.
    start: Option<Instant>,
    /// Time of the last delta query.
    last: Option<Instant>,
    /// Seconds accumulated while running.
    elapsed: f64,
}

impl Clock {
    /// Create a new clock (not started).
    pub fn new() -> Self {
        Self::default()
    }

    /// Create and start a new clock.
    pub fn start_new() -> Self {
        let mut clock = Self::new();
        clock.start();
        clock
    }

    /// Start (or restart) the clock.
    pub fn start(&mut self) {
        let now = Instant::now();
        self.start = Some(now);
        self.last = Some(now);
        self.elapsed = 0.0;
    }

    /// Stop the clock, keeping the elapsed time.
    pub fn stop(&mut self) {
        self.delta();
        self.start = None;
        self.last = None;
    }

    /// Seconds since the previous call. A stopped clock starts and returns 0.
    pub fn delta(&mut self) -> f64 {
        let Some(last) = self.last else {
            self.start();
            return 0.0;
        };
        let now = Instant::now();
        let diff = now.saturating_duration_since(last).as_secs_f64();
        self.last = Some(now);
        self.elapsed += diff;
        diff
    }

    /// Total running time in seconds.
    pub fn elapsed(&mut self) -> f64 {
        if self.is_running() {
            self.delta();
        }
        self.elapsed
    }

    /// Check if the clock is running.
    #[inline]
    pub fn is_running(&self) -> bool {
        self.start.is_some()
    }
}
