//! Non-blocking delay
//!
//! Answers "has the duration elapsed" without ever waiting. Polled from a
//! cooperative loop, it gates periodic work such as button sampling.

/// Periodic non-blocking delay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Delay {
    start_ms: u32,
    duration_ms: u32,
    running: bool,
}

impl Delay {
    /// Create a stopped delay
    pub const fn new(duration_ms: u32) -> Self {
        Self {
            start_ms: 0,
            duration_ms,
            running: false,
        }
    }

    /// Check the delay
    ///
    /// The first call starts the delay and returns false. Afterwards it
    /// returns true once at least `duration_ms` have passed, and restarts
    /// the period from `now_ms`.
    pub fn read(&mut self, now_ms: u32) -> bool {
        if !self.running {
            self.start_ms = now_ms;
            self.running = true;
            return false;
        }

        if now_ms.wrapping_sub(self.start_ms) >= self.duration_ms {
            self.start_ms = now_ms;
            return true;
        }

        false
    }

    /// Change the duration; applies to the period in progress
    pub fn set_duration(&mut self, duration_ms: u32) {
        self.duration_ms = duration_ms;
    }

    /// Configured duration
    pub fn duration_ms(&self) -> u32 {
        self.duration_ms
    }

    /// Whether the delay has been started
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Stop the delay; the next `read` starts it again
    pub fn stop(&mut self) {
        self.running = false;
    }
}
