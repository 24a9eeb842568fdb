//! UART line assembly
//!
//! Collects received bytes until a CR or LF and hands back the trimmed line.
//! Works one byte at a time so it can be fed straight from a UART read loop.

use heapless::{String, Vec};

use super::buffer::MAX_TEXT_LEN;

/// A complete received line
pub type Line = String<MAX_TEXT_LEN>;

/// Errors while assembling a line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LineError {
    /// Line exceeded `MAX_TEXT_LEN` bytes; the rest of it is discarded
    Overflow,
    /// Line was not valid UTF-8
    InvalidUtf8,
}

/// Byte-at-a-time line assembler
#[derive(Debug, Clone, Default)]
pub struct LineAssembler {
    buffer: Vec<u8, MAX_TEXT_LEN>,
    /// Dropping bytes until the next terminator after an overflow
    discarding: bool,
}

impl LineAssembler {
    /// Create an empty assembler
    pub const fn new() -> Self {
        Self {
            buffer: Vec::new(),
            discarding: false,
        }
    }

    /// Drop any partial line
    pub fn reset(&mut self) {
        self.buffer.clear();
        self.discarding = false;
    }

    /// Number of bytes of the current partial line
    pub fn pending(&self) -> usize {
        self.buffer.len()
    }

    /// Feed a single byte
    ///
    /// Returns `Ok(Some(line))` when a terminator completes a non-empty
    /// line, `Ok(None)` when more bytes are needed, or `Err` when the line
    /// is rejected. `Overflow` is reported once, on the byte that overflowed.
    pub fn feed(&mut self, byte: u8) -> Result<Option<Line>, LineError> {
        match byte {
            b'\r' | b'\n' => {
                if self.discarding {
                    self.reset();
                    return Ok(None);
                }
                self.finish()
            }
            _ => {
                if self.discarding {
                    return Ok(None);
                }
                if self.buffer.push(byte).is_err() {
                    self.buffer.clear();
                    self.discarding = true;
                    return Err(LineError::Overflow);
                }
                Ok(None)
            }
        }
    }

    fn finish(&mut self) -> Result<Option<Line>, LineError> {
        let result = match core::str::from_utf8(&self.buffer) {
            Ok(text) => {
                let text = text.trim();
                if text.is_empty() {
                    Ok(None)
                } else {
                    let mut line = Line::new();
                    // Cannot fail: trimmed text is no longer than the buffer
                    let _ = line.push_str(text);
                    Ok(Some(line))
                }
            }
            Err(_) => Err(LineError::InvalidUtf8),
        };
        self.buffer.clear();
        result
    }
}
