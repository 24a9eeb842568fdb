//! Heartbeat LED

use marquee_core::timing::Blinker;
use marquee_hal::OutputPin;

/// LED toggled by a two-rate [`Blinker`]
pub struct Heartbeat<P> {
    led: P,
    blinker: Blinker,
}

impl<P: OutputPin> Heartbeat<P> {
    /// Create a heartbeat starting at `first_ms`, LED off
    pub fn new(mut led: P, first_ms: u32, second_ms: u32) -> Self {
        led.set_low();
        Self {
            led,
            blinker: Blinker::new(first_ms, second_ms),
        }
    }

    /// Toggle the LED if its period elapsed; returns true when it did
    pub fn poll(&mut self, now_ms: u32) -> bool {
        let due = self.blinker.poll(now_ms);
        if due {
            self.led.toggle();
        }
        due
    }

    /// Swap to the other blink rate
    pub fn toggle_rate(&mut self) {
        self.blinker.toggle_rate();
    }

    /// Current blink period
    pub fn period_ms(&self) -> u32 {
        self.blinker.period_ms()
    }

    /// Whether the LED is lit
    pub fn is_on(&self) -> bool {
        self.led.is_set_high()
    }
}
