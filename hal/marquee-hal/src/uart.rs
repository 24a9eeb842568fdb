//! UART serial communication abstractions

/// UART transmitter
///
/// Blocking transmit, used for short status lines such as button events.
pub trait UartTx {
    /// Error type for transmit operations
    type Error;

    /// Write data to the UART
    ///
    /// Blocks until all data has been written or an error occurs.
    fn write_blocking(&mut self, data: &[u8]) -> Result<(), Self::Error>;

    /// Flush any buffered data
    fn flush(&mut self) -> Result<(), Self::Error>;

    /// Write a string followed by CR LF
    fn write_line(&mut self, line: &str) -> Result<(), Self::Error> {
        self.write_blocking(line.as_bytes())?;
        self.write_blocking(b"\r\n")
    }
}

/// UART configuration
///
/// Frames are always 8N1; only the baud rate is configurable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct UartConfig {
    /// Baud rate in bits per second
    pub baudrate: u32,
}

impl Default for UartConfig {
    fn default() -> Self {
        Self { baudrate: 115_200 }
    }
}

impl UartConfig {
    /// Configuration with the given baud rate
    pub const fn with_baudrate(baudrate: u32) -> Self {
        Self { baudrate }
    }
}
