//! In-memory character grid
//!
//! A `CharDisplay` that keeps every cell in RAM. It behaves like an HD44780
//! for the operations the engine uses: writes past the last column are
//! dropped rather than wrapping to the next row.

use heapless::String;

use crate::backend::{CharDisplay, DisplayError};

/// Number of character rows on the LCD1602
pub const GRID_ROWS: usize = 2;

/// Number of character columns on the LCD1602
pub const GRID_COLS: usize = 16;

/// Grid matching the LCD1602 geometry
pub type Grid1602 = Grid<GRID_COLS, GRID_ROWS>;

/// In-memory character grid
#[derive(Clone)]
pub struct Grid<const COLS: usize, const ROWS: usize> {
    /// Current cell contents
    cells: [[u8; COLS]; ROWS],
    /// Cursor row
    row: usize,
    /// Cursor column
    col: usize,
    /// Display operations since the last `reset_counters`
    writes: usize,
    /// `clear` calls since the last `reset_counters`
    clears: usize,
}

impl<const COLS: usize, const ROWS: usize> Default for Grid<COLS, ROWS> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const COLS: usize, const ROWS: usize> Grid<COLS, ROWS> {
    /// Create a blank grid
    pub const fn new() -> Self {
        Self {
            cells: [[b' '; COLS]; ROWS],
            row: 0,
            col: 0,
            writes: 0,
            clears: 0,
        }
    }

    /// Raw glyphs of a row, or `None` if out of range
    pub fn row_bytes(&self, row: usize) -> Option<&[u8; COLS]> {
        self.cells.get(row)
    }

    /// A row as text, with non-ASCII glyphs shown as `?`
    pub fn row_text(&self, row: usize) -> String<COLS> {
        let mut line = String::new();
        if let Some(cells) = self.cells.get(row) {
            for &glyph in cells {
                let ch = if glyph.is_ascii() { glyph as char } else { '?' };
                let _ = line.push(ch);
            }
        }
        line
    }

    /// Number of display operations (clear, cursor moves and glyph writes)
    pub fn write_count(&self) -> usize {
        self.writes
    }

    /// Number of `clear` calls
    pub fn clear_count(&self) -> usize {
        self.clears
    }

    /// Reset the operation counters without touching the cells
    pub fn reset_counters(&mut self) {
        self.writes = 0;
        self.clears = 0;
    }

    /// Current cursor position as (row, col)
    pub fn cursor(&self) -> (usize, usize) {
        (self.row, self.col)
    }
}

impl<const COLS: usize, const ROWS: usize> CharDisplay for Grid<COLS, ROWS> {
    fn clear(&mut self) -> Result<(), DisplayError> {
        for row in &mut self.cells {
            row.fill(b' ');
        }
        self.row = 0;
        self.col = 0;
        self.writes += 1;
        self.clears += 1;
        Ok(())
    }

    fn set_cursor(&mut self, row: u8, col: u8) -> Result<(), DisplayError> {
        if row as usize >= ROWS || col as usize >= COLS {
            return Err(DisplayError::InvalidCoordinates);
        }
        self.row = row as usize;
        self.col = col as usize;
        self.writes += 1;
        Ok(())
    }

    fn write_char(&mut self, glyph: u8) -> Result<(), DisplayError> {
        if self.col < COLS {
            self.cells[self.row][self.col] = glyph;
        }
        self.col = self.col.saturating_add(1);
        self.writes += 1;
        Ok(())
    }

    fn dimensions(&self) -> (u8, u8) {
        (COLS as u8, ROWS as u8)
    }
}

#[cfg(feature = "defmt")]
impl<const COLS: usize, const ROWS: usize> defmt::Format for Grid<COLS, ROWS> {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "Grid[");
        for row in 0..ROWS {
            if row > 0 {
                defmt::write!(f, ", ");
            }
            defmt::write!(f, "{}", self.row_text(row).as_str());
        }
        defmt::write!(f, "]");
    }
}
