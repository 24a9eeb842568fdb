//! Non-blocking timing helpers
//!
//! Everything takes the current time in milliseconds as an argument; the
//! caller owns the clock.

pub mod blink;
pub mod delay;

pub use blink::Blinker;
pub use delay::Delay;
