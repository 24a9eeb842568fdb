//! Configuration type definitions
//!
//! Defaults reproduce the behavior of the reference board: a 16x2 LCD on
//! a PCF8574 at 0x27, 40 ms button sampling, and a heartbeat LED that
//! alternates between 100 ms and 500 ms.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::input::DEBOUNCE_TIME_MS;
use crate::render::RenderMode;

/// Current configuration format version
pub const CONFIG_VERSION: u8 = 1;

/// Widest row an HD44780 controller can address
pub const MAX_DISPLAY_COLS: u8 = 40;

/// Most rows an HD44780 controller can address
pub const MAX_DISPLAY_ROWS: u8 = 4;

/// Configuration errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Display columns or rows out of the controller's range
    InvalidDimensions,
    /// I2C address does not fit in 7 bits
    InvalidAddress,
    /// A timing value that must be positive is zero
    ZeroInterval,
    /// Baud rate of zero
    ZeroBaudrate,
    /// Encoded config has a different format version
    VersionMismatch,
    /// Binary data could not be decoded
    Decode,
    /// Output buffer too small for encoding
    Encode,
}

/// Character display settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DisplayConfig {
    /// Characters per row
    pub cols: u8,
    /// Number of rows
    pub rows: u8,
    /// 7-bit I2C address of the PCF8574 backpack
    pub i2c_address: u8,
    /// Backlight on at boot
    pub backlight: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            cols: 16,
            rows: 2,
            i2c_address: 0x27,
            backlight: true,
        }
    }
}

/// Rendering settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RenderConfig {
    /// Mode active after boot
    pub initial_mode: RenderMode,
    /// Time between two slide shifts
    pub shift_interval_ms: u32,
    /// Main loop yield between iterations
    pub poll_interval_ms: u32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            initial_mode: RenderMode::Slide,
            shift_interval_ms: 300,
            poll_interval_ms: 1,
        }
    }
}

/// Push-button settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ButtonConfig {
    /// Debounce sampling period
    pub debounce_ms: u32,
    /// Pressed reads as logic low
    pub active_low: bool,
}

impl Default for ButtonConfig {
    fn default() -> Self {
        Self {
            debounce_ms: DEBOUNCE_TIME_MS,
            active_low: false,
        }
    }
}

/// Heartbeat LED settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct HeartbeatConfig {
    /// Blink period after boot
    pub first_ms: u32,
    /// Blink period after one button press
    pub second_ms: u32,
}

impl Default for HeartbeatConfig {
    fn default() -> Self {
        Self {
            first_ms: 100,
            second_ms: 500,
        }
    }
}

/// Serial port settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SerialConfig {
    /// Baud rate
    pub baudrate: u32,
    /// Report button presses and mode changes back over the port
    pub echo_events: bool,
}

impl Default for SerialConfig {
    fn default() -> Self {
        Self {
            baudrate: 115_200,
            echo_events: true,
        }
    }
}

/// Complete firmware configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MarqueeConfig {
    /// Format version
    pub version: u8,
    pub display: DisplayConfig,
    pub render: RenderConfig,
    pub button: ButtonConfig,
    pub heartbeat: HeartbeatConfig,
    pub serial: SerialConfig,
}

impl Default for MarqueeConfig {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            display: DisplayConfig::default(),
            render: RenderConfig::default(),
            button: ButtonConfig::default(),
            heartbeat: HeartbeatConfig::default(),
            serial: SerialConfig::default(),
        }
    }
}

impl MarqueeConfig {
    /// Check that every value is usable
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.version != CONFIG_VERSION {
            return Err(ConfigError::VersionMismatch);
        }

        let display = &self.display;
        if display.cols == 0
            || display.cols > MAX_DISPLAY_COLS
            || display.rows == 0
            || display.rows > MAX_DISPLAY_ROWS
        {
            return Err(ConfigError::InvalidDimensions);
        }
        if display.i2c_address > 0x7F {
            return Err(ConfigError::InvalidAddress);
        }

        if self.render.shift_interval_ms == 0
            || self.button.debounce_ms == 0
            || self.heartbeat.first_ms == 0
            || self.heartbeat.second_ms == 0
        {
            return Err(ConfigError::ZeroInterval);
        }

        if self.serial.baudrate == 0 {
            return Err(ConfigError::ZeroBaudrate);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = MarqueeConfig::default();
        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.display.cols, 16);
        assert_eq!(config.render.initial_mode, RenderMode::Slide);
        assert_eq!(config.button.debounce_ms, 40);
    }

    #[test]
    fn test_invalid_dimensions() {
        let mut config = MarqueeConfig::default();
        config.display.cols = 0;
        assert_eq!(config.validate(), Err(ConfigError::InvalidDimensions));

        let mut config = MarqueeConfig::default();
        config.display.rows = MAX_DISPLAY_ROWS + 1;
        assert_eq!(config.validate(), Err(ConfigError::InvalidDimensions));
    }

    #[test]
    fn test_invalid_address() {
        let mut config = MarqueeConfig::default();
        config.display.i2c_address = 0x80;
        assert_eq!(config.validate(), Err(ConfigError::InvalidAddress));
    }

    #[test]
    fn test_zero_intervals() {
        let mut config = MarqueeConfig::default();
        config.render.shift_interval_ms = 0;
        assert_eq!(config.validate(), Err(ConfigError::ZeroInterval));

        let mut config = MarqueeConfig::default();
        config.heartbeat.second_ms = 0;
        assert_eq!(config.validate(), Err(ConfigError::ZeroInterval));
    }

    #[test]
    fn test_zero_baudrate() {
        let mut config = MarqueeConfig::default();
        config.serial.baudrate = 0;
        assert_eq!(config.validate(), Err(ConfigError::ZeroBaudrate));
    }

    #[test]
    fn test_version_mismatch() {
        let mut config = MarqueeConfig::default();
        config.version = CONFIG_VERSION + 1;
        assert_eq!(config.validate(), Err(ConfigError::VersionMismatch));
    }
}
