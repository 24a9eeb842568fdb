//! Render strategies
//!
//! A strategy turns the text buffer into display writes. There are exactly
//! two, so they form a closed enum dispatched by the engine:
//!
//! - [`StaticText`]: paint the first columns of the text once per revision
//! - [`Slide`]: scroll the text in from the right edge, one column per
//!   shift interval, until it has left on the left edge
//!
//! Both only touch the display when something visible changes, and both
//! record the revision they rendered so a repeated tick is free.

pub mod slide;
pub mod static_text;

use marquee_display::{CharDisplay, DisplayError};

use crate::text::Snapshot;

pub use slide::{Slide, SlidePhase};
pub use static_text::StaticText;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Row the text is rendered on
pub const TEXT_ROW: u8 = 0;

/// Blank glyph used for padding
pub const BLANK: u8 = b' ';

/// Available rendering algorithms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RenderMode {
    /// Replace-on-change
    Static,
    /// Right-to-left marquee
    #[default]
    Slide,
}

impl RenderMode {
    /// Order in which the button cycles through modes
    pub const CYCLE: [RenderMode; 2] = [RenderMode::Static, RenderMode::Slide];

    /// Position of this mode in [`RenderMode::CYCLE`]
    pub const fn index(self) -> usize {
        match self {
            RenderMode::Static => 0,
            RenderMode::Slide => 1,
        }
    }

    /// Mode following this one, wrapping around
    pub const fn next(self) -> Self {
        Self::CYCLE[(self.index() + 1) % Self::CYCLE.len()]
    }

    /// Human readable name
    pub const fn label(self) -> &'static str {
        match self {
            RenderMode::Static => "Static",
            RenderMode::Slide => "Slide",
        }
    }
}

/// Result of a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Refresh {
    /// Nothing was written to the display
    Unchanged,
    /// The display was updated
    Repainted,
}

impl Refresh {
    /// Whether the tick wrote to the display
    pub fn is_repainted(self) -> bool {
        matches!(self, Refresh::Repainted)
    }
}

/// The active strategy and its progress
#[derive(Debug, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Strategy {
    Static(StaticText),
    Slide(Slide),
}

impl Strategy {
    /// Fresh strategy of the given kind, with nothing rendered yet
    pub fn new(mode: RenderMode, shift_interval_ms: u32) -> Self {
        match mode {
            RenderMode::Static => Strategy::Static(StaticText::new()),
            RenderMode::Slide => Strategy::Slide(Slide::new(shift_interval_ms)),
        }
    }

    /// Kind of this strategy
    pub fn mode(&self) -> RenderMode {
        match self {
            Strategy::Static(_) => RenderMode::Static,
            Strategy::Slide(_) => RenderMode::Slide,
        }
    }

    /// Revision this strategy last painted, if any
    pub fn last_rendered_revision(&self) -> Option<u32> {
        match self {
            Strategy::Static(s) => s.last_rendered_revision(),
            Strategy::Slide(s) => s.last_rendered_revision(),
        }
    }

    /// Advance the strategy and paint whatever changed
    pub fn tick<D: CharDisplay>(
        &mut self,
        snapshot: Snapshot<'_>,
        now_ms: u32,
        display: &mut D,
    ) -> Result<Refresh, DisplayError> {
        match self {
            Strategy::Static(s) => s.tick(snapshot, display),
            Strategy::Slide(s) => s.tick(snapshot, now_ms, display),
        }
    }
}

/// Glyph visible at `col` when the text starts at column `offset`
///
/// Column `c` shows `content[c - offset]` when that index is inside the
/// content, otherwise a blank.
pub fn glyph_at(content: &[u8], offset: i32, col: u8) -> u8 {
    let index = i32::from(col) - offset;
    if index < 0 {
        return BLANK;
    }
    content.get(index as usize).copied().unwrap_or(BLANK)
}

/// Repaint the whole text row for the given offset
///
/// Always writes exactly `width` glyphs so leftovers from a longer text are
/// overwritten.
pub(crate) fn paint_row<D: CharDisplay>(
    display: &mut D,
    content: &[u8],
    offset: i32,
    width: u8,
) -> Result<(), DisplayError> {
    display.set_cursor(TEXT_ROW, 0)?;
    for col in 0..width {
        display.write_char(glyph_at(content, offset, col))?;
    }
    Ok(())
}
