//! Static rendering
//!
//! Shows the first columns of the text and leaves the display alone until a
//! new revision arrives. Text wider than the grid is truncated to the first
//! row; shorter text is blank-padded.

use marquee_display::{CharDisplay, DisplayError};

use super::{paint_row, Refresh};
use crate::text::Snapshot;

/// Replace-on-change strategy
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StaticText {
    last_rendered_revision: Option<u32>,
}

impl StaticText {
    /// Create a strategy that has rendered nothing yet
    pub const fn new() -> Self {
        Self {
            last_rendered_revision: None,
        }
    }

    /// Revision currently on screen
    pub fn last_rendered_revision(&self) -> Option<u32> {
        self.last_rendered_revision
    }

    /// Paint the text if its revision has not been painted yet
    pub fn tick<D: CharDisplay>(
        &mut self,
        snapshot: Snapshot<'_>,
        display: &mut D,
    ) -> Result<Refresh, DisplayError> {
        if self.last_rendered_revision == Some(snapshot.revision) {
            return Ok(Refresh::Unchanged);
        }

        let (width, _) = display.dimensions();
        display.clear()?;
        paint_row(display, snapshot.content, 0, width)?;

        self.last_rendered_revision = Some(snapshot.revision);
        Ok(Refresh::Repainted)
    }
}
