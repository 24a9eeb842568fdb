//! Heartbeat LED timing
//!
//! The LED blinks so a hung loop is visible at a glance. Each button press
//! swaps the blink period between two rates.

use super::delay::Delay;

/// Two-rate blink gate
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Blinker {
    delay: Delay,
    periods_ms: [u32; 2],
    current: usize,
}

impl Blinker {
    /// Create a blinker starting at `first_ms`
    pub const fn new(first_ms: u32, second_ms: u32) -> Self {
        Self {
            delay: Delay::new(first_ms),
            periods_ms: [first_ms, second_ms],
            current: 0,
        }
    }

    /// Returns true when the LED should toggle
    pub fn poll(&mut self, now_ms: u32) -> bool {
        self.delay.read(now_ms)
    }

    /// Swap to the other blink period
    pub fn toggle_rate(&mut self) {
        self.current ^= 1;
        self.delay.set_duration(self.periods_ms[self.current]);
    }

    /// Current blink period
    pub fn period_ms(&self) -> u32 {
        self.periods_ms[self.current]
    }
}
