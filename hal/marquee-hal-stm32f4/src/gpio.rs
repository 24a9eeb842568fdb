//! GPIO wrappers for STM32F4
//!
//! Adapts embassy-stm32 `Input`/`Output` to the `marquee-hal` pin traits.

use embassy_stm32::gpio::{Input, Output};
use marquee_hal::{InputPin, OutputPin};

/// Push-pull output (heartbeat LED)
pub struct Stm32Output<'d>(Output<'d>);

impl<'d> Stm32Output<'d> {
    pub fn new(pin: Output<'d>) -> Self {
        Self(pin)
    }
}

impl OutputPin for Stm32Output<'_> {
    fn set_high(&mut self) {
        self.0.set_high();
    }

    fn set_low(&mut self) {
        self.0.set_low();
    }

    fn toggle(&mut self) {
        self.0.toggle();
    }

    fn is_set_high(&self) -> bool {
        self.0.is_set_high()
    }
}

/// Digital input (user button)
pub struct Stm32Input<'d>(Input<'d>);

impl<'d> Stm32Input<'d> {
    pub fn new(pin: Input<'d>) -> Self {
        Self(pin)
    }
}

impl InputPin for Stm32Input<'_> {
    fn is_high(&self) -> bool {
        self.0.is_high()
    }
}
