//! UART driver for STM32F4
//!
//! Transmit side of USART3, routed to the ST-LINK virtual COM port.

use embassy_stm32::mode::Mode;
use embassy_stm32::usart::{Config, Error as UsartError, UartTx};
use marquee_hal::uart::UartConfig;
use marquee_hal::UartTx as MarqueeUartTx;

/// embassy-stm32 USART configuration for the given settings (8N1)
pub fn usart_config(config: &UartConfig) -> Config {
    let mut out = Config::default();
    out.baudrate = config.baudrate;
    out
}

/// Error from UART operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum UartBusError {
    /// Framing error
    Framing,
    /// Noise error
    Noise,
    /// Overrun error
    Overrun,
    /// Parity error
    Parity,
    /// Buffer too long for the DMA
    BufferTooLong,
    /// Other error
    Other,
}

impl From<UsartError> for UartBusError {
    fn from(e: UsartError) -> Self {
        match e {
            UsartError::Framing => UartBusError::Framing,
            UsartError::Noise => UartBusError::Noise,
            UsartError::Overrun => UartBusError::Overrun,
            UsartError::Parity => UartBusError::Parity,
            UsartError::BufferTooLong => UartBusError::BufferTooLong,
            _ => UartBusError::Other,
        }
    }
}

/// UART transmitter implementing the `marquee-hal` trait
pub struct Stm32UartTx<'d, M: Mode> {
    inner: UartTx<'d, M>,
}

impl<'d, M: Mode> Stm32UartTx<'d, M> {
    pub fn new(inner: UartTx<'d, M>) -> Self {
        Self { inner }
    }
}

impl<M: Mode> MarqueeUartTx for Stm32UartTx<'_, M> {
    type Error = UartBusError;

    fn write_blocking(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        self.inner.blocking_write(data).map_err(Into::into)
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        self.inner.blocking_flush().map_err(Into::into)
    }
}
