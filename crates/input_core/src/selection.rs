//! Text selection representation.

use crate::text::clamp_to_char_boundary;

/// A selection as a byte range into a control's value.
///
/// Always normalized so `start <= end`; a collapsed range is the caret.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SelectionRange {
    /// Start byte offset of the selection (inclusive).
    pub start: usize,
    /// End byte offset of the selection (exclusive).
    pub end: usize,
}

impl SelectionRange {
    /// Create a new selection range, normalizing so `start <= end`.
    #[inline]
    pub fn new(a: usize, b: usize) -> Self {
        Self {
            start: a.min(b),
            end: a.max(b),
        }
    }

    /// A caret at `at`.
    #[inline]
    pub fn collapsed(at: usize) -> Self {
        Self { start: at, end: at }
    }

    #[inline]
    pub fn is_collapsed(&self) -> bool {
        self.start == self.end
    }

    /// Snap both ends onto character boundaries of `value`.
    pub fn clamp_to(self, value: &str) -> Self {
        Self::new(
            clamp_to_char_boundary(value, self.start),
            clamp_to_char_boundary(value, self.end),
        )
    }

    /// The selected substring. Out-of-range ends are clamped first.
    pub fn slice<'a>(&self, value: &'a str) -> &'a str {
        let r = self.clamp_to(value);
        &value[r.start..r.end]
    }
}
