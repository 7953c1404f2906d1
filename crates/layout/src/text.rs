use css::{ComputedStyle, FontFamily, TextTransform};
use std::borrow::Cow;

/// Layout can depend on this without knowing about egui, wgpu, etc.
pub trait TextMeasurer {
    /// Return the width of `text` in CSS px when rendered with `style`.
    ///
    /// Implementations measure the glyphs only; `letter-spacing` and
    /// `text-transform` are applied by the layout engine.
    fn measure(&self, text: &str, style: &ComputedStyle) -> f32;

    /// Return the height of one line box in CSS px for the given `style`.
    fn line_height(&self, style: &ComputedStyle) -> f32 {
        style.line_height_px()
    }
}

/// Deterministic measurer: every character advances by a fixed fraction of
/// the font size. Useful for headless hosts and tests.
#[derive(Clone, Copy, Debug)]
pub struct FixedAdvanceMeasurer {
    /// Advance per character as a fraction of `font-size` (proportional fonts).
    pub proportional_em: f32,
    /// Advance per character as a fraction of `font-size` (monospace fonts).
    pub monospace_em: f32,
}

impl FixedAdvanceMeasurer {
    pub const fn new() -> Self {
        Self {
            proportional_em: 0.5,
            monospace_em: 0.6,
        }
    }
}

impl Default for FixedAdvanceMeasurer {
    fn default() -> Self {
        Self::new()
    }
}

impl TextMeasurer for FixedAdvanceMeasurer {
    fn measure(&self, text: &str, style: &ComputedStyle) -> f32 {
        let em = match style.font_family {
            FontFamily::Monospace => self.monospace_em,
            FontFamily::SansSerif | FontFamily::Serif => self.proportional_em,
        };
        text.chars().count() as f32 * em * style.font_px()
    }
}

pub(crate) fn apply_text_transform<'t>(text: &'t str, transform: TextTransform) -> Cow<'t, str> {
    match transform {
        TextTransform::None => Cow::Borrowed(text),
        TextTransform::Uppercase => Cow::Owned(text.to_uppercase()),
        TextTransform::Lowercase => Cow::Owned(text.to_lowercase()),
        TextTransform::Capitalize => {
            let mut chars = text.chars();
            match chars.next() {
                Some(first) => Cow::Owned(first.to_uppercase().chain(chars).collect()),
                None => Cow::Borrowed(text),
            }
        }
    }
}

/// Width of a run after `text-transform` and `letter-spacing`.
///
/// Non-finite or negative results are clamped to zero.
pub(crate) fn styled_width(measurer: &dyn TextMeasurer, style: &ComputedStyle, text: &str) -> f32 {
    if text.is_empty() {
        return 0.0;
    }
    let shaped = apply_text_transform(text, style.text_transform);
    let glyphs = measurer.measure(&shaped, style);
    let glyphs = if glyphs.is_finite() { glyphs } else { 0.0 };
    let spacing = style.letter_spacing * shaped.chars().count() as f32;
    (glyphs + spacing).max(0.0)
}
