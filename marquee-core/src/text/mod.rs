//! Text input: the display source buffer, UART line assembly and the
//! hand-off between them

pub mod buffer;
pub mod line;
pub mod mailbox;

pub use buffer::{glyph_for, Snapshot, TextBuffer, TextError, MAX_TEXT_LEN};
pub use line::{Line, LineAssembler, LineError};
pub use mailbox::LineMailbox;
