//! Push-button input handling

pub mod debounce;

pub use debounce::{ButtonEvent, ButtonState, Debouncer, DEBOUNCE_TIME_MS};
