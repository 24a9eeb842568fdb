//! Hardware driver implementations
//!
//! Concrete drivers for the board's peripherals, written against the
//! `marquee-hal` traits:
//!
//! - LCD1602 character display behind a PCF8574 I2C backpack
//! - Debounced push-button
//! - Heartbeat LED

#![no_std]
#![deny(unsafe_code)]

pub mod button;
pub mod lcd1602;
pub mod led;

pub use button::Button;
pub use lcd1602::Lcd1602;
pub use led::Heartbeat;
