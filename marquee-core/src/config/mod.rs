//! Configuration types
//!
//! Board-agnostic configuration, embedded in the firmware as postcard
//! binary data.

#[cfg(feature = "serde")]
pub mod codec;
pub mod types;

pub use types::*;
