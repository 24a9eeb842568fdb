//! Board-agnostic core logic for the Marquee display firmware
//!
//! This crate contains everything that does not depend on a specific
//! microcontroller:
//!
//! - Text buffer holding the latest received line
//! - Render strategies (static and slide) and the display engine
//! - UART line assembly
//! - Button debounce state machine
//! - Non-blocking delays and the heartbeat blinker
//! - Configuration types and their binary encoding

#![no_std]
#![deny(unsafe_code)]

pub mod config;
pub mod engine;
pub mod input;
pub mod render;
pub mod text;
pub mod timing;

pub use engine::DisplayEngine;
pub use render::{Refresh, RenderMode};
pub use text::{Snapshot, TextBuffer, TextError, MAX_TEXT_LEN};
