//! STM32F4-specific HAL for the Marquee firmware
//!
//! Wraps embassy-stm32 peripherals so they implement the `marquee-hal`
//! traits, and carries the board clock setup. Supported chips:
//!
//! - STM32F429ZI (NUCLEO-F429ZI)
//!
//! # Features
//!
//! - `stm32f429zi` - Enable support for STM32F429ZIT6
//! - `defmt` - Enable debug formatting support

#![no_std]

pub mod clock;
pub mod gpio;
pub mod i2c;
pub mod uart;

pub use clock::nucleo_f429zi_config;
pub use gpio::{Stm32Input, Stm32Output};
pub use i2c::{i2c_config, I2cBusError, Stm32I2c};
pub use uart::{usart_config, Stm32UartTx, UartBusError};
