//! Countdown timer primitive

/// Counts down from a start value to zero, in seconds
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Timer {
    time_left: f32,
}

impl Timer {
    pub const fn new() -> Self {
        Self { time_left: 0.0 }
    }

    /// Arm the timer. Negative durations arm it as already expired.
    pub fn start(&mut self, seconds: f32) {
        self.time_left = seconds.max(0.0);
    }

    /// Advance by `dt` seconds (caller guarantees `dt >= 0`), floored at zero
    pub fn update(&mut self, dt: f32) {
        self.time_left = (self.time_left - dt).max(0.0);
    }

    #[inline]
    pub fn active(&self) -> bool {
        self.time_left > 0.0
    }

    #[inline]
    pub fn time_left(&self) -> f32 {
        self.time_left
    }
}
