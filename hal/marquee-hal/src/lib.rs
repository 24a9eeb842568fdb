//! Marquee Hardware Abstraction Layer
//!
//! This crate defines the hardware abstraction traits the display drivers
//! are written against. Chip-specific HALs (currently STM32F4) implement
//! them, so the LCD and button drivers can be tested on the host with mock
//! buses and pins.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  marquee-drivers (LCD1602, button)      │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  marquee-hal (this crate - traits)      │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//!             ┌───────────────┐
//!             │ marquee-hal-  │
//!             │    stm32f4    │
//!             └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::OutputPin`], [`gpio::InputPin`] - Digital I/O
//! - [`i2c::I2cBus`] - I2C bus writes to the display backpack
//! - [`uart::UartTx`] - Blocking serial transmit for status messages

#![no_std]
#![deny(unsafe_code)]

pub mod gpio;
pub mod i2c;
pub mod uart;

// Re-export key traits at crate root for convenience
pub use gpio::{InputPin, OutputPin, Polarity};
pub use i2c::I2cBus;
pub use uart::UartTx;
