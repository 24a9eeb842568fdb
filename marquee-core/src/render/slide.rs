//! Slide (marquee) rendering
//!
//! New text starts fully off-screen to the right and moves one column to
//! the left every shift interval until its last character has left the
//! left edge. Then the strategy goes idle until the next revision.
//!
//! ```text
//! offset  4    3    2    1    0   -1   -2
//! row   "    " "   A" "  AB" " AB " "AB  " "B   " "    "
//! ```
//!
//! At most one column is shifted per tick, however long the caller took to
//! call again. A coarse or irregular host loop slows the animation down
//! instead of making it jump.

use marquee_display::{CharDisplay, DisplayError};

use super::{paint_row, Refresh};
use crate::text::Snapshot;

/// Slide progress
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SlidePhase {
    /// Nothing to animate: empty text, or the revision has fully scrolled
    Idle,
    /// Text is moving across the row
    Scrolling,
}

/// Marquee strategy
#[derive(Debug, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Slide {
    /// Minimum time between two shifts
    shift_interval_ms: u32,
    last_rendered_revision: Option<u32>,
    /// Column of the first character relative to the left edge
    scroll_offset: i32,
    last_shift_ms: u32,
    phase: SlidePhase,
}

impl Slide {
    /// Create a strategy that has rendered nothing yet
    pub const fn new(shift_interval_ms: u32) -> Self {
        Self {
            shift_interval_ms,
            last_rendered_revision: None,
            scroll_offset: 0,
            last_shift_ms: 0,
            phase: SlidePhase::Idle,
        }
    }

    /// Revision being (or last) animated
    pub fn last_rendered_revision(&self) -> Option<u32> {
        self.last_rendered_revision
    }

    /// Current scroll offset
    pub fn scroll_offset(&self) -> i32 {
        self.scroll_offset
    }

    /// Current phase
    pub fn phase(&self) -> SlidePhase {
        self.phase
    }

    /// Configured shift interval
    pub fn shift_interval_ms(&self) -> u32 {
        self.shift_interval_ms
    }

    /// Restart on new text, or shift one column if the interval elapsed
    pub fn tick<D: CharDisplay>(
        &mut self,
        snapshot: Snapshot<'_>,
        now_ms: u32,
        display: &mut D,
    ) -> Result<Refresh, DisplayError> {
        let (width, _) = display.dimensions();

        if self.last_rendered_revision != Some(snapshot.revision) {
            return self.restart(snapshot, now_ms, width, display);
        }

        if self.phase == SlidePhase::Idle {
            return Ok(Refresh::Unchanged);
        }

        // Wrapping: the millisecond clock rolls over after ~49 days
        if now_ms.wrapping_sub(self.last_shift_ms) < self.shift_interval_ms {
            return Ok(Refresh::Unchanged);
        }

        let offset = self.scroll_offset - 1;
        paint_row(display, snapshot.content, offset, width)?;

        self.scroll_offset = offset;
        self.last_shift_ms = now_ms;
        if offset <= -(snapshot.len() as i32) {
            self.phase = SlidePhase::Idle;
        }

        Ok(Refresh::Repainted)
    }

    /// Place the text just past the right edge
    ///
    /// The clear leaves the row blank, which is exactly what the starting
    /// offset shows, so no glyphs are written here.
    fn restart<D: CharDisplay>(
        &mut self,
        snapshot: Snapshot<'_>,
        now_ms: u32,
        width: u8,
        display: &mut D,
    ) -> Result<Refresh, DisplayError> {
        display.clear()?;

        self.last_rendered_revision = Some(snapshot.revision);
        self.scroll_offset = i32::from(width);
        self.last_shift_ms = now_ms;
        self.phase = if snapshot.is_empty() {
            SlidePhase::Idle
        } else {
            SlidePhase::Scrolling
        };

        Ok(Refresh::Repainted)
    }
}
