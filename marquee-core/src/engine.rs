//! Display engine
//!
//! Owns the text buffer, the active render strategy and the display port.
//! The host loop drives it with four calls:
//!
//! - [`DisplayEngine::append`] when a line arrives (replaces the text)
//! - [`DisplayEngine::tick`] on every loop iteration
//! - [`DisplayEngine::cycle_mode`] on a button press
//! - [`DisplayEngine::set_mode`] to pick a mode directly
//!
//! None of them block or read a clock. Only `tick` writes to the display.
//!
//! The text lives on row 0. Whenever a strategy clears the display, the
//! engine puts the active mode's label back on row 1 (if the display has
//! one), so the mode stays visible after every switch.

use marquee_display::{CharDisplay, DisplayError};

use crate::config::RenderConfig;
use crate::render::{Refresh, RenderMode, Strategy};
use crate::text::{Snapshot, TextBuffer, TextError};

/// Row showing the active mode's label
pub const BANNER_ROW: u8 = 1;

/// Display content engine
pub struct DisplayEngine<D: CharDisplay> {
    display: D,
    buffer: TextBuffer,
    strategy: Strategy,
    shift_interval_ms: u32,
    /// Display was cleared and the mode label is not back yet
    banner_pending: bool,
}

impl<D: CharDisplay> DisplayEngine<D> {
    /// Create an engine with an empty buffer
    ///
    /// Nothing is written until the first `tick`, which clears the display.
    pub fn new(display: D, mode: RenderMode, shift_interval_ms: u32) -> Self {
        Self {
            display,
            buffer: TextBuffer::new(),
            strategy: Strategy::new(mode, shift_interval_ms),
            shift_interval_ms,
            banner_pending: false,
        }
    }

    /// Create an engine from the render section of the configuration
    pub fn from_config(display: D, config: &RenderConfig) -> Self {
        Self::new(display, config.initial_mode, config.shift_interval_ms)
    }

    /// Replace the displayed text
    ///
    /// Despite the name this does not queue: the previous text is dropped,
    /// even if it has not been fully shown yet. Returns the new revision.
    pub fn append(&mut self, text: &str) -> Result<u32, TextError> {
        self.buffer.replace(text)
    }

    /// Switch to `mode` with fresh progress
    ///
    /// The next tick clears the display, shows the mode label and paints
    /// the current text from the start, even if `mode` was already active.
    pub fn set_mode(&mut self, mode: RenderMode) {
        self.strategy = Strategy::new(mode, self.shift_interval_ms);
    }

    /// Switch to the next mode in [`RenderMode::CYCLE`] and return it
    pub fn cycle_mode(&mut self) -> RenderMode {
        let next = self.mode().next();
        self.set_mode(next);
        next
    }

    /// Let the active strategy paint whatever changed
    ///
    /// On a display error the strategy keeps its previous progress, so the
    /// same paint is attempted again on the next tick.
    pub fn tick(&mut self, now_ms: u32) -> Result<Refresh, DisplayError> {
        let snapshot = self.buffer.snapshot();
        // Both strategies clear the display when they meet a new revision
        let clears = self.strategy.last_rendered_revision() != Some(snapshot.revision);

        let refresh = self.strategy.tick(snapshot, now_ms, &mut self.display)?;
        if clears {
            self.banner_pending = true;
        }
        if self.banner_pending {
            self.paint_banner()?;
            self.banner_pending = false;
            return Ok(Refresh::Repainted);
        }
        Ok(refresh)
    }

    /// Write the mode label on the (already blank) banner row
    fn paint_banner(&mut self) -> Result<(), DisplayError> {
        let (width, rows) = self.display.dimensions();
        if rows <= BANNER_ROW {
            return Ok(());
        }
        let label = self.mode().label().as_bytes();
        self.display.set_cursor(BANNER_ROW, 0)?;
        for &glyph in label.iter().take(usize::from(width)) {
            self.display.write_char(glyph)?;
        }
        Ok(())
    }

    /// Active mode
    pub fn mode(&self) -> RenderMode {
        self.strategy.mode()
    }

    /// Active strategy and its progress
    pub fn strategy(&self) -> &Strategy {
        &self.strategy
    }

    /// Current buffer revision
    pub fn revision(&self) -> u32 {
        self.buffer.revision()
    }

    /// Current buffer content
    pub fn snapshot(&self) -> Snapshot<'_> {
        self.buffer.snapshot()
    }

    /// Borrow the display port
    pub fn display(&self) -> &D {
        &self.display
    }

    /// Mutably borrow the display port
    ///
    /// Writing through this bypasses the strategies; call `set_mode` after
    /// to force a full repaint.
    pub fn display_mut(&mut self) -> &mut D {
        &mut self.display
    }

    /// Tear down the engine and hand back the display port
    pub fn into_display(self) -> D {
        self.display
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use marquee_display::Grid;

    const T: u32 = 100;

    type Engine = DisplayEngine<Grid<4, 2>>;

    fn engine(mode: RenderMode) -> Engine {
        DisplayEngine::new(Grid::new(), mode, T)
    }

    /// Display port that fails every operation while `broken` is set
    struct FlakyDisplay {
        inner: Grid<4, 2>,
        broken: bool,
    }

    impl CharDisplay for FlakyDisplay {
        fn clear(&mut self) -> Result<(), DisplayError> {
            if self.broken {
                return Err(DisplayError::Communication);
            }
            self.inner.clear()
        }

        fn set_cursor(&mut self, row: u8, col: u8) -> Result<(), DisplayError> {
            if self.broken {
                return Err(DisplayError::Communication);
            }
            self.inner.set_cursor(row, col)
        }

        fn write_char(&mut self, glyph: u8) -> Result<(), DisplayError> {
            if self.broken {
                return Err(DisplayError::Communication);
            }
            self.inner.write_char(glyph)
        }

        fn dimensions(&self) -> (u8, u8) {
            self.inner.dimensions()
        }
    }

    #[test]
    fn test_second_tick_is_idempotent() {
        for mode in RenderMode::CYCLE {
            let mut engine = engine(mode);
            engine.append("HI").unwrap();
            engine.tick(0).unwrap();
            engine.display_mut().reset_counters();

            assert_eq!(engine.tick(0).unwrap(), Refresh::Unchanged);
            assert_eq!(engine.display().write_count(), 0, "{:?}", mode);
        }
    }

    #[test]
    fn test_static_repaints_on_same_text_new_revision() {
        let mut engine = engine(RenderMode::Static);
        engine.append("HI").unwrap();
        engine.tick(0).unwrap();
        assert_eq!(engine.display().row_text(0).as_str(), "HI  ");

        engine.append("HI").unwrap();
        engine.display_mut().reset_counters();
        assert_eq!(engine.tick(1).unwrap(), Refresh::Repainted);
        assert_eq!(engine.display().clear_count(), 1);
        assert_eq!(engine.display().row_text(0).as_str(), "HI  ");

        // Exactly one repaint
        assert_eq!(engine.tick(2).unwrap(), Refresh::Unchanged);
    }

    #[test]
    fn test_cycle_from_slide_mid_scroll_to_static() {
        let mut engine = engine(RenderMode::Slide);
        engine.append("AB").unwrap();
        engine.tick(0).unwrap();
        engine.tick(T).unwrap();
        engine.tick(2 * T).unwrap();
        assert_eq!(engine.display().row_text(0).as_str(), "  AB");

        assert_eq!(engine.cycle_mode(), RenderMode::Static);
        assert_eq!(engine.tick(2 * T + 1).unwrap(), Refresh::Repainted);
        assert_eq!(engine.display().row_text(0).as_str(), "AB  ");
    }

    #[test]
    fn test_cycle_wraps_back_to_first() {
        let mut engine = engine(RenderMode::Static);
        assert_eq!(engine.cycle_mode(), RenderMode::Slide);
        assert_eq!(engine.cycle_mode(), RenderMode::Static);
        assert_eq!(engine.mode(), RenderMode::Static);
    }

    #[test]
    fn test_cycle_to_slide_restarts_from_right_edge() {
        let mut engine = engine(RenderMode::Static);
        engine.append("AB").unwrap();
        engine.tick(0).unwrap();

        engine.cycle_mode();
        engine.tick(1).unwrap();
        assert_eq!(engine.display().row_text(0).as_str(), "    ");
        engine.tick(1 + T).unwrap();
        assert_eq!(engine.display().row_text(0).as_str(), "   A");
    }

    #[test]
    fn test_mode_switch_does_not_touch_buffer() {
        let mut engine = engine(RenderMode::Slide);
        engine.append("keep").unwrap();
        engine.cycle_mode();
        engine.set_mode(RenderMode::Slide);
        assert_eq!(engine.revision(), 1);
        assert_eq!(engine.snapshot().content, b"keep");
    }

    #[test]
    fn test_set_same_mode_resets_progress() {
        let mut engine = engine(RenderMode::Slide);
        engine.append("AB").unwrap();
        engine.tick(0).unwrap();
        engine.tick(T).unwrap();

        engine.set_mode(RenderMode::Slide);
        assert_eq!(engine.strategy().last_rendered_revision(), None);
        engine.tick(T + 1).unwrap();
        assert_eq!(engine.display().row_text(0).as_str(), "    ");
    }

    #[test]
    fn test_most_recent_wins() {
        let mut engine = engine(RenderMode::Static);
        engine.append("FIRST").unwrap();
        engine.append("2ND").unwrap();
        engine.tick(0).unwrap();
        assert_eq!(engine.display().row_text(0).as_str(), "2ND ");
        assert_eq!(engine.strategy().last_rendered_revision(), Some(2));
    }

    #[test]
    fn test_revision_monotonic() {
        let mut engine = engine(RenderMode::Static);
        let start = engine.revision();
        for text in ["a", "a", "b", "a"] {
            engine.append(text).unwrap();
        }
        assert_eq!(engine.revision(), start + 4);
    }

    #[test]
    fn test_first_tick_clears_leftovers() {
        let mut grid = Grid::<4, 2>::new();
        grid.write_bytes(b"boot").unwrap();

        let mut engine = DisplayEngine::new(grid, RenderMode::Slide, T);
        assert_eq!(engine.tick(0).unwrap(), Refresh::Repainted);
        assert_eq!(engine.display().row_text(0).as_str(), "    ");
        assert_eq!(engine.display().row_text(1).as_str(), "Slid");
    }

    #[test]
    fn test_cycle_shows_mode_label() {
        let mut grid = Grid::<8, 2>::new();
        grid.set_cursor(1, 0).unwrap();
        grid.write_bytes(b"leftover").unwrap();
        let mut engine = DisplayEngine::new(grid, RenderMode::Slide, T);
        engine.append("HI").unwrap();
        engine.tick(0).unwrap();
        assert_eq!(engine.display().row_text(1).as_str(), "Slide   ");

        engine.cycle_mode();
        assert_eq!(engine.tick(1).unwrap(), Refresh::Repainted);
        assert_eq!(engine.display().row_text(0).as_str(), "HI      ");
        assert_eq!(engine.display().row_text(1).as_str(), "Static  ");

        engine.cycle_mode();
        engine.tick(2).unwrap();
        assert_eq!(engine.display().row_text(1).as_str(), "Slide   ");
    }

    #[test]
    fn test_label_survives_new_text() {
        let mut engine = engine(RenderMode::Static);
        engine.append("ONE").unwrap();
        engine.tick(0).unwrap();
        engine.append("TWO").unwrap();
        engine.tick(1).unwrap();
        assert_eq!(engine.display().row_text(0).as_str(), "TWO ");
        assert_eq!(engine.display().row_text(1).as_str(), "Stat");

        // Label is not rewritten while nothing changes
        engine.display_mut().reset_counters();
        assert_eq!(engine.tick(2).unwrap(), Refresh::Unchanged);
        assert_eq!(engine.display().write_count(), 0);
    }

    #[test]
    fn test_slide_shift_leaves_label_alone() {
        let mut engine = engine(RenderMode::Slide);
        engine.append("AB").unwrap();
        engine.tick(0).unwrap();
        engine.display_mut().reset_counters();

        engine.tick(T).unwrap();
        assert_eq!(engine.display().row_text(0).as_str(), "   A");
        // Cursor move plus one row of glyphs, nothing on the label row
        assert_eq!(engine.display().write_count(), 5);
        assert_eq!(engine.display().row_text(1).as_str(), "Slid");
    }

    #[test]
    fn test_display_error_is_retried() {
        let display = FlakyDisplay {
            inner: Grid::new(),
            broken: true,
        };
        let mut engine = DisplayEngine::new(display, RenderMode::Static, T);
        engine.append("OK").unwrap();

        assert_eq!(engine.tick(0), Err(DisplayError::Communication));
        assert_eq!(engine.strategy().last_rendered_revision(), None);

        engine.display_mut().broken = false;
        assert_eq!(engine.tick(1), Ok(Refresh::Repainted));
        assert_eq!(engine.display().inner.row_text(0).as_str(), "OK  ");
        assert_eq!(engine.display().inner.row_text(1).as_str(), "Stat");
    }

    /// Accepts `budget` writes, then fails until reset
    struct BudgetDisplay {
        inner: Grid<8, 2>,
        budget: u32,
    }

    impl CharDisplay for BudgetDisplay {
        fn clear(&mut self) -> Result<(), DisplayError> {
            self.inner.clear()
        }

        fn set_cursor(&mut self, row: u8, col: u8) -> Result<(), DisplayError> {
            self.inner.set_cursor(row, col)
        }

        fn write_char(&mut self, glyph: u8) -> Result<(), DisplayError> {
            if self.budget == 0 {
                return Err(DisplayError::Communication);
            }
            self.budget -= 1;
            self.inner.write_char(glyph)
        }

        fn dimensions(&self) -> (u8, u8) {
            self.inner.dimensions()
        }
    }

    #[test]
    fn test_failed_label_is_retried() {
        // Enough for the text row, not for the label
        let display = BudgetDisplay {
            inner: Grid::new(),
            budget: 8,
        };
        let mut engine = DisplayEngine::new(display, RenderMode::Static, T);
        engine.append("OK").unwrap();

        assert_eq!(engine.tick(0), Err(DisplayError::Communication));
        engine.display_mut().budget = 100;
        assert_eq!(engine.tick(1), Ok(Refresh::Repainted));
        assert_eq!(engine.display().inner.row_text(1).as_str(), "Static  ");
        assert_eq!(engine.tick(2), Ok(Refresh::Unchanged));
    }

    #[test]
    fn test_from_config() {
        let config = RenderConfig {
            initial_mode: RenderMode::Static,
            shift_interval_ms: 250,
            poll_interval_ms: 1,
        };
        let engine = DisplayEngine::from_config(Grid::<4, 2>::new(), &config);
        assert_eq!(engine.mode(), RenderMode::Static);
        assert_eq!(engine.into_display().write_count(), 0);
    }
}
