//! Character display abstraction for Marquee
//!
//! This crate provides:
//! - `CharDisplay` trait for character-addressable displays (HD44780 and
//!   compatibles)
//! - `Grid`, an in-memory character grid implementing `CharDisplay`, used for
//!   host testing and as a shadow of what the hardware shows
//!
//! # Architecture
//!
//! The display engine in `marquee-core` only knows about `CharDisplay`. On
//! the board the LCD1602 driver implements it over I2C; in tests the engine
//! renders into a `Grid` so every visible character and every write can be
//! asserted on.

#![no_std]

pub mod backend;
pub mod grid;

// Re-export key types
pub use backend::{CharDisplay, DisplayError};
pub use grid::{Grid, Grid1602, GRID_COLS, GRID_ROWS};
