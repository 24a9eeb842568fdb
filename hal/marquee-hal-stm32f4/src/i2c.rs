//! I2C bus driver for STM32F4
//!
//! Blocking master transfers for the LCD backpack. The PCF8574 transfers
//! are single bytes, so the blocking API keeps the driver synchronous.

use embassy_stm32::i2c::{Config, Error as I2cError, I2c, Master};
use embassy_stm32::mode::Mode;
use embassy_stm32::time::Hertz;
use marquee_hal::i2c::I2cConfig;
use marquee_hal::I2cBus;

/// embassy-stm32 I2C configuration for the given bus settings
///
/// Everything but the clock keeps embassy's defaults; the backpack
/// modules carry their own pull-ups.
pub fn i2c_config(config: &I2cConfig) -> Config {
    let mut out = Config::default();
    out.frequency = Hertz(config.frequency);
    out
}

/// Error from I2C operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum I2cBusError {
    /// Bus error
    Bus,
    /// Arbitration lost
    ArbitrationLost,
    /// NACK received (nothing at that address)
    Nack,
    /// Timeout
    Timeout,
    /// Overrun
    Overrun,
    /// Other error
    Other,
}

impl From<I2cError> for I2cBusError {
    fn from(e: I2cError) -> Self {
        match e {
            I2cError::Bus => I2cBusError::Bus,
            I2cError::Arbitration => I2cBusError::ArbitrationLost,
            I2cError::Nack => I2cBusError::Nack,
            I2cError::Timeout => I2cBusError::Timeout,
            I2cError::Overrun => I2cBusError::Overrun,
            _ => I2cBusError::Other,
        }
    }
}

/// I2C master implementing [`I2cBus`]
pub struct Stm32I2c<'d, M: Mode> {
    inner: I2c<'d, M, Master>,
}

impl<'d, M: Mode> Stm32I2c<'d, M> {
    pub fn new(inner: I2c<'d, M, Master>) -> Self {
        Self { inner }
    }
}

impl<M: Mode> I2cBus for Stm32I2c<'_, M> {
    type Error = I2cBusError;

    fn write(&mut self, address: u8, data: &[u8]) -> Result<(), Self::Error> {
        self.inner.blocking_write(address, data).map_err(Into::into)
    }
}
