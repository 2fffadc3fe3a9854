use serde::{Deserialize, Serialize};
use std::ops::Range;

/// Placeholder text returned when a run produces no chunks at all
pub const NO_CHUNKS_TEXT: &str = "<no-chunks-created>";

/// A finalized piece of the input text
///
/// `text` is always the exact byte slice `original[start_byte..end_byte]`,
/// except for the sentinel chunk (see [`Chunk::sentinel`]).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Chunk {
    /// Byte offset in the original text (start, inclusive)
    pub start_byte: usize,
    /// Byte offset in the original text (end, exclusive)
    pub end_byte: usize,
    /// The chunk contents
    pub text: String,
}

impl Chunk {
    /// The placeholder handed back instead of an empty result
    pub fn sentinel() -> Self {
        Self {
            start_byte: 0,
            end_byte: 0,
            text: NO_CHUNKS_TEXT.to_string(),
        }
    }

    /// Whether this is the "no chunks created" placeholder
    pub fn is_sentinel(&self) -> bool {
        self.start_byte == 0 && self.end_byte == 0 && self.text == NO_CHUNKS_TEXT
    }

    /// Span of the original text this chunk covers
    pub fn byte_range(&self) -> Range<usize> {
        self.start_byte..self.end_byte
    }

    /// Length of the covered span in bytes
    pub fn len(&self) -> usize {
        self.end_byte.saturating_sub(self.start_byte)
    }

    /// True for a zero-width span, which includes the sentinel
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A borrowed span of the original text with its absolute byte offset.
/// Only lives for the duration of a split.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Fragment<'t> {
    pub text: &'t str,
    pub start: usize,
}

impl<'t> Fragment<'t> {
    pub fn root(text: &'t str) -> Self {
        Self { text, start: 0 }
    }

    /// Sub-fragment for a byte range relative to this fragment.
    /// The range must fall on char boundaries.
    pub fn slice(&self, range: Range<usize>) -> Self {
        Self {
            start: self.start + range.start,
            text: &self.text[range],
        }
    }

    pub fn end(&self) -> usize {
        self.start + self.text.len()
    }

    pub fn into_chunk(self) -> Chunk {
        Chunk {
            start_byte: self.start,
            end_byte: self.end(),
            text: self.text.to_string(),
        }
    }
}
