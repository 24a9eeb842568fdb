//! Button debounce state machine
//!
//! The button level is sampled at a fixed period (`DEBOUNCE_TIME_MS`). A
//! level change is only accepted when it is still present on the next
//! sample, so contact bounce shorter than one period is filtered out.
//!
//! ```text
//!            pressed              pressed
//!   Up ──────────────► Falling ──────────────► Down
//!    ▲   ◄────────────    │                      │
//!    │     released       │                      │ released
//!    │                                           ▼
//!    └──────────────────────────────────────── Rising
//!                released          ──────────►  (pressed: back to Down)
//! ```

/// Sampling period for the debounce state machine
pub const DEBOUNCE_TIME_MS: u32 = 40;

/// Debounce states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonState {
    /// Released and stable
    #[default]
    Up,
    /// Pressed on the last sample, waiting for confirmation
    Falling,
    /// Pressed and stable
    Down,
    /// Released on the last sample, waiting for confirmation
    Rising,
}

/// Confirmed button edges
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonEvent {
    /// Button confirmed pressed
    Pressed,
    /// Button confirmed released
    Released,
}

impl ButtonEvent {
    /// Status line reported over the serial port
    pub const fn message(self) -> &'static str {
        match self {
            ButtonEvent::Pressed => "Button pressed",
            ButtonEvent::Released => "Button released",
        }
    }
}

impl ButtonState {
    /// Next state for a sampled level, plus the edge it confirms
    pub fn transition(self, pressed: bool) -> (Self, Option<ButtonEvent>) {
        use ButtonState::*;

        match (self, pressed) {
            (Up, true) => (Falling, None),
            (Falling, true) => (Down, Some(ButtonEvent::Pressed)),
            (Falling, false) => (Up, None),
            (Down, false) => (Rising, None),
            (Rising, false) => (Up, Some(ButtonEvent::Released)),
            (Rising, true) => (Down, None),
            (state, _) => (state, None),
        }
    }

    /// Whether the button counts as held
    pub fn is_down(self) -> bool {
        matches!(self, ButtonState::Down | ButtonState::Rising)
    }
}

/// Debouncer with a latched press flag
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Debouncer {
    state: ButtonState,
    /// Set on a confirmed press, cleared by `take_press`
    press_latched: bool,
}

impl Debouncer {
    /// Create a debouncer in the released state
    pub const fn new() -> Self {
        Self {
            state: ButtonState::Up,
            press_latched: false,
        }
    }

    /// Feed one sample; call once per debounce period
    pub fn update(&mut self, pressed: bool) -> Option<ButtonEvent> {
        let (next, event) = self.state.transition(pressed);
        self.state = next;
        if event == Some(ButtonEvent::Pressed) {
            self.press_latched = true;
        }
        event
    }

    /// Consume the latched press
    ///
    /// Returns true once per physical press, however often it is polled.
    pub fn take_press(&mut self) -> bool {
        core::mem::take(&mut self.press_latched)
    }

    /// Current debounce state
    pub fn state(&self) -> ButtonState {
        self.state
    }

    /// Whether the button is currently held
    pub fn is_pressed(&self) -> bool {
        self.state.is_down()
    }
}
