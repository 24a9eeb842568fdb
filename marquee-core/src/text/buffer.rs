//! Display source buffer
//!
//! Holds the most recent text handed to the engine. Every call to
//! [`TextBuffer::replace`] discards the previous content and bumps the
//! revision; render strategies compare revisions, not content, to decide
//! whether they have painted the current text yet.

use heapless::Vec;

/// Maximum number of characters the buffer holds
pub const MAX_TEXT_LEN: usize = 80;

/// Glyph shown for characters the display ROM cannot render
pub const REPLACEMENT_GLYPH: u8 = b'?';

/// Errors from replacing the buffer content
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TextError {
    /// Text has more than `MAX_TEXT_LEN` characters; the buffer is unchanged
    TooLong,
}

/// Read-only view of the buffer at one revision
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Snapshot<'a> {
    /// One glyph byte per character
    pub content: &'a [u8],
    /// Revision the content belongs to
    pub revision: u32,
}

impl Snapshot<'_> {
    /// Number of characters in the content
    pub fn len(&self) -> usize {
        self.content.len()
    }

    /// Whether the content is empty
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

/// Latest text to display, plus its revision counter
#[derive(Debug, Clone, Default)]
pub struct TextBuffer {
    content: Vec<u8, MAX_TEXT_LEN>,
    revision: u32,
}

impl TextBuffer {
    /// Create an empty buffer at revision 0
    pub const fn new() -> Self {
        Self {
            content: Vec::new(),
            revision: 0,
        }
    }

    /// Replace the content with `text` and bump the revision
    ///
    /// Returns the new revision. Replacing with identical text still bumps
    /// the revision.
    pub fn replace(&mut self, text: &str) -> Result<u32, TextError> {
        if text.chars().count() > MAX_TEXT_LEN {
            return Err(TextError::TooLong);
        }

        self.content.clear();
        for ch in text.chars() {
            // Cannot fail: length checked above
            let _ = self.content.push(glyph_for(ch));
        }
        self.revision = self.revision.wrapping_add(1);

        Ok(self.revision)
    }

    /// Current content and revision
    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            content: &self.content,
            revision: self.revision,
        }
    }

    /// Current revision
    pub fn revision(&self) -> u32 {
        self.revision
    }

    /// Content as glyph bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.content
    }

    /// Number of characters held
    pub fn len(&self) -> usize {
        self.content.len()
    }

    /// Whether the buffer is empty
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

/// Map a character to the display glyph byte
///
/// Printable ASCII maps to itself; anything else becomes `?`.
pub fn glyph_for(ch: char) -> u8 {
    if ch.is_ascii() && !ch.is_ascii_control() {
        ch as u8
    } else {
        REPLACEMENT_GLYPH
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_buffer_is_empty() {
        let buffer = TextBuffer::new();
        assert!(buffer.is_empty());
        assert_eq!(buffer.revision(), 0);
        assert_eq!(buffer.snapshot().content, b"");
    }

    #[test]
    fn test_replace_discards_previous_content() {
        let mut buffer = TextBuffer::new();
        buffer.replace("HELLO").unwrap();
        buffer.replace("HI").unwrap();
        assert_eq!(buffer.as_bytes(), b"HI");
    }

    #[test]
    fn test_revision_counts_every_replace() {
        let mut buffer = TextBuffer::new();
        for i in 1..=5 {
            assert_eq!(buffer.replace("same").unwrap(), i);
        }
        assert_eq!(buffer.revision(), 5);
    }

    #[test]
    fn test_too_long_leaves_buffer_untouched() {
        let mut buffer = TextBuffer::new();
        buffer.replace("keep").unwrap();

        let long = [b'x'; MAX_TEXT_LEN + 1];
        let long = core::str::from_utf8(&long).unwrap();
        assert_eq!(buffer.replace(long), Err(TextError::TooLong));
        assert_eq!(buffer.as_bytes(), b"keep");
        assert_eq!(buffer.revision(), 1);
    }

    #[test]
    fn test_exactly_max_len_fits() {
        let mut buffer = TextBuffer::new();
        let full = [b'y'; MAX_TEXT_LEN];
        let full = core::str::from_utf8(&full).unwrap();
        assert!(buffer.replace(full).is_ok());
        assert_eq!(buffer.len(), MAX_TEXT_LEN);
    }

    #[test]
    fn test_non_ascii_counts_as_one_column() {
        let mut buffer = TextBuffer::new();
        buffer.replace("a\u{e9}b\u{1F600}").unwrap();
        assert_eq!(buffer.as_bytes(), b"a?b?");
    }

    #[test]
    fn test_revision_wraps() {
        let mut buffer = TextBuffer {
            content: Vec::new(),
            revision: u32::MAX,
        };
        assert_eq!(buffer.replace("x").unwrap(), 0);
    }
}
