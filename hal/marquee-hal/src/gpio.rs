//! GPIO pin abstractions
//!
//! Digital input and output pins, implemented by chip-specific HALs.

/// Digital output pin
///
/// Used for the heartbeat LED.
pub trait OutputPin {
    /// Set the pin high (logic 1)
    fn set_high(&mut self);

    /// Set the pin low (logic 0)
    fn set_low(&mut self);

    /// Toggle the pin state
    fn toggle(&mut self);

    /// Set the pin to a specific state
    fn set_state(&mut self, high: bool) {
        if high {
            self.set_high();
        } else {
            self.set_low();
        }
    }

    /// Check if the pin is currently set high
    fn is_set_high(&self) -> bool;

    /// Check if the pin is currently set low
    fn is_set_low(&self) -> bool {
        !self.is_set_high()
    }
}

/// Digital input pin
///
/// Used for the push-button. Reads the raw electrical level; polarity
/// (active high or low) is handled by the button driver.
pub trait InputPin {
    /// Check if the pin reads high (logic 1)
    fn is_high(&self) -> bool;

    /// Check if the pin reads low (logic 0)
    fn is_low(&self) -> bool {
        !self.is_high()
    }
}

/// Polarity of a digital input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Polarity {
    /// Logic high means asserted (button wired to VDD, pull-down)
    #[default]
    ActiveHigh,
    /// Logic low means asserted (button wired to GND, pull-up)
    ActiveLow,
}

impl Polarity {
    /// Whether a raw pin level counts as asserted for this polarity
    pub fn is_asserted(self, level_high: bool) -> bool {
        match self {
            Polarity::ActiveHigh => level_high,
            Polarity::ActiveLow => !level_high,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FakeLed {
        high: bool,
    }

    impl OutputPin for FakeLed {
        fn set_high(&mut self) {
            self.high = true;
        }

        fn set_low(&mut self) {
            self.high = false;
        }

        fn toggle(&mut self) {
            self.high = !self.high;
        }

        fn is_set_high(&self) -> bool {
            self.high
        }
    }

    #[test]
    fn test_set_state_and_toggle() {
        let mut led = FakeLed { high: false };
        led.set_state(true);
        assert!(led.is_set_high());
        led.toggle();
        assert!(led.is_set_low());
    }

    #[test]
    fn test_polarity() {
        assert!(Polarity::ActiveHigh.is_asserted(true));
        assert!(!Polarity::ActiveHigh.is_asserted(false));
        assert!(Polarity::ActiveLow.is_asserted(false));
        assert!(!Polarity::ActiveLow.is_asserted(true));
    }
}
