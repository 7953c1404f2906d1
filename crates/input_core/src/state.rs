//! Per-control editing state.

use crate::selection::SelectionRange;
use crate::text::{clamp_to_char_boundary, normalize_newlines};

/// Value, selection and focus of one multi-line text control.
///
/// Selection offsets follow the DOM setter rules for `selectionStart` /
/// `selectionEnd`, expressed in bytes instead of UTF-16 units.
#[derive(Clone, Debug, Default)]
pub struct TextControlState {
    value: String,
    selection: SelectionRange,
    focused: bool,
}

impl TextControlState {
    pub fn new(initial: &str) -> Self {
        let value = normalize_newlines(initial).into_owned();
        let end = value.len();
        Self {
            value,
            selection: SelectionRange::collapsed(end),
            focused: false,
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// Replace the value. Line endings are normalized and the caret moves to
    /// the end. Returns `true` if the value changed.
    pub fn set_value(&mut self, value: &str) -> bool {
        let value = normalize_newlines(value);
        if self.value == value {
            return false;
        }
        self.value = value.into_owned();
        self.selection = SelectionRange::collapsed(self.value.len());
        true
    }

    pub fn selection(&self) -> SelectionRange {
        self.selection
    }

    pub fn selection_start(&self) -> usize {
        self.selection.start
    }

    pub fn selection_end(&self) -> usize {
        self.selection.end
    }

    /// Moving the start past the end drags the end along.
    pub fn set_selection_start(&mut self, start: usize) {
        let start = clamp_to_char_boundary(&self.value, start);
        let end = self.selection.end.max(start);
        self.selection = SelectionRange { start, end };
    }

    /// Moving the end before the start drags the start along.
    pub fn set_selection_end(&mut self, end: usize) {
        let end = clamp_to_char_boundary(&self.value, end);
        let start = self.selection.start.min(end);
        self.selection = SelectionRange { start, end };
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn focus(&mut self) {
        self.focused = true;
        self.selection = self.selection.clamp_to(&self.value);
    }

    pub fn blur(&mut self) {
        self.focused = false;
    }
}
