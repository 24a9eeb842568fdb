//! Debounced push-button
//!
//! Samples a GPIO input once per debounce period and runs the level through
//! the core debounce state machine.

use marquee_core::input::{ButtonEvent, ButtonState, Debouncer};
use marquee_hal::{InputPin, Polarity};

/// Push-button on a GPIO input
pub struct Button<P> {
    pin: P,
    polarity: Polarity,
    debouncer: Debouncer,
}

impl<P: InputPin> Button<P> {
    /// Create a button on `pin`
    pub fn new(pin: P, polarity: Polarity) -> Self {
        Self {
            pin,
            polarity,
            debouncer: Debouncer::new(),
        }
    }

    /// Take one debounce sample
    ///
    /// Call once per debounce period. Returns a confirmed edge, if any.
    pub fn sample(&mut self) -> Option<ButtonEvent> {
        let pressed = self.polarity.is_asserted(self.pin.is_high());
        self.debouncer.update(pressed)
    }

    /// Consume a latched press
    pub fn take_press(&mut self) -> bool {
        self.debouncer.take_press()
    }

    /// Whether the button is held down
    pub fn is_pressed(&self) -> bool {
        self.debouncer.is_pressed()
    }

    /// Debounce state
    pub fn state(&self) -> ButtonState {
        self.debouncer.state()
    }
}
