//! Display port trait
//!
//! The three primitives a character LCD controller offers, plus geometry.

/// Display port errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// Communication error with the display controller
    Communication,
    /// Cursor position outside the grid
    InvalidCoordinates,
    /// Display not initialized
    NotInitialized,
}

/// Character-addressable display
///
/// Writes go to the current cursor position, which advances one column
/// after every `write_char`. Glyphs are raw controller bytes; for HD44780
/// ROM A00 printable ASCII maps to itself.
pub trait CharDisplay {
    /// Blank every cell and home the cursor
    fn clear(&mut self) -> Result<(), DisplayError>;

    /// Move the cursor to `row`, `col` (both 0-based)
    fn set_cursor(&mut self, row: u8, col: u8) -> Result<(), DisplayError>;

    /// Write one glyph at the cursor and advance it
    fn write_char(&mut self, glyph: u8) -> Result<(), DisplayError>;

    /// Grid size as (columns, rows)
    fn dimensions(&self) -> (u8, u8);

    /// Write a run of glyphs starting at the cursor
    fn write_bytes(&mut self, glyphs: &[u8]) -> Result<(), DisplayError> {
        for &glyph in glyphs {
            self.write_char(glyph)?;
        }
        Ok(())
    }
}

impl<T: CharDisplay + ?Sized> CharDisplay for &mut T {
    fn clear(&mut self) -> Result<(), DisplayError> {
        (**self).clear()
    }

    fn set_cursor(&mut self, row: u8, col: u8) -> Result<(), DisplayError> {
        (**self).set_cursor(row, col)
    }

    fn write_char(&mut self, glyph: u8) -> Result<(), DisplayError> {
        (**self).write_char(glyph)
    }

    fn dimensions(&self) -> (u8, u8) {
        (**self).dimensions()
    }
}
