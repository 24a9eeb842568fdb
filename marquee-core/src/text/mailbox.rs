//! Latest-line hand-off
//!
//! The UART receiver may assemble several lines from one burst before the
//! display loop runs again. Only the newest one matters, so the slot is
//! overwritten instead of queued.

use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_sync::signal::Signal;

use super::line::Line;

/// Single-slot mailbox holding the most recent unread line
pub struct LineMailbox<M: RawMutex> {
    latest: Signal<M, Line>,
}

impl<M: RawMutex> LineMailbox<M> {
    /// Create an empty mailbox
    pub const fn new() -> Self {
        Self {
            latest: Signal::new(),
        }
    }

    /// Store `line`, replacing any unread one
    ///
    /// Returns true when an unread line was overwritten.
    pub fn post(&self, line: Line) -> bool {
        let replaced = self.latest.signaled();
        self.latest.signal(line);
        replaced
    }

    /// Take the newest unread line, if any
    pub fn take(&self) -> Option<Line> {
        self.latest.try_take()
    }

    /// Whether a line is waiting
    pub fn has_line(&self) -> bool {
        self.latest.signaled()
    }
}

impl<M: RawMutex> Default for LineMailbox<M> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::RenderMode;
    use crate::text::LineAssembler;
    use crate::DisplayEngine;
    use embassy_sync::blocking_mutex::raw::NoopRawMutex;
    use marquee_display::Grid;

    fn line(text: &str) -> Line {
        let mut line = Line::new();
        line.push_str(text).unwrap();
        line
    }

    #[test]
    fn test_empty() {
        let mailbox = LineMailbox::<NoopRawMutex>::new();
        assert!(!mailbox.has_line());
        assert_eq!(mailbox.take(), None);
    }

    #[test]
    fn test_newest_line_wins() {
        let mailbox = LineMailbox::<NoopRawMutex>::new();
        assert!(!mailbox.post(line("old")));
        assert!(mailbox.post(line("new")));

        assert_eq!(mailbox.take().as_deref(), Some("new"));
        assert_eq!(mailbox.take(), None);
    }

    #[test]
    fn test_burst_shows_last_line() {
        let mailbox = LineMailbox::<NoopRawMutex>::new();
        let mut assembler = LineAssembler::new();
        for &byte in b"L0\nL1\nL2\nL3\nL4\nL5\nL6\nL7\nL8\nL9\n" {
            if let Some(line) = assembler.feed(byte).unwrap() {
                mailbox.post(line);
            }
        }

        let mut engine = DisplayEngine::new(Grid::<4, 2>::new(), RenderMode::Static, 100);
        while let Some(line) = mailbox.take() {
            engine.append(line.as_str()).unwrap();
        }
        engine.tick(0).unwrap();
        assert_eq!(engine.display().row_text(0).as_str(), "L9  ");
    }
}
