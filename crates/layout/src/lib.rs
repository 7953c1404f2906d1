//! Text layout for text-input controls.
//!
//! The only layout this crate performs is the one a `<textarea>` needs:
//! breaking a value into line boxes for a given content width, honoring the
//! control's `white-space`, `overflow-wrap`, `letter-spacing`, `text-indent`
//! and `text-transform`. Glyph widths come from a [`TextMeasurer`], so the
//! same engine runs headless or against real font metrics.

pub mod textarea;
mod text;

pub use text::{FixedAdvanceMeasurer, TextMeasurer};
pub use textarea::{TextareaLayout, TextareaLine, layout_textarea_value};

/// A rectangle in CSS px units (we'll treat everything as px for now).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rectangle {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rectangle {
    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }
}
