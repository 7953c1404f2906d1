//! The hidden measurement clone.
//!
//! One surface is owned by each calculator and reused for every measurement.
//! It never renders; it only runs textarea layout against a copy of the
//! target element's sizing style so the visible element is never touched.

use css::ComputedStyle;
use input_core::InputId;
use layout::{TextMeasurer, layout_textarea_value};

use crate::error::MeasureError;

/// Raw measurements taken from the clone.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct CloneMetrics {
    /// Content height plus vertical padding, excluding borders. This is what
    /// a browser reports as `scrollHeight` for the clone.
    pub scroll_height: f32,
    /// Height of one line of text, without padding.
    pub single_row_height: f32,
}

#[derive(Debug, Default)]
pub(crate) struct MeasurementSurface {
    style: Option<ComputedStyle>,
    border_box_width: f32,
    value: String,
}

impl MeasurementSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy sizing style and pin the clone to the element's live width.
    pub fn apply(&mut self, style: &ComputedStyle, border_box_width: f32) {
        self.style = Some(*style);
        self.border_box_width = border_box_width;
    }

    pub fn set_value(&mut self, value: &str) {
        self.value.clear();
        self.value.push_str(value);
    }

    pub fn measure(
        &self,
        id: InputId,
        measurer: &dyn TextMeasurer,
    ) -> Result<CloneMetrics, MeasureError> {
        let Some(style) = self.style.as_ref() else {
            return Err(MeasureError::Detached(id));
        };
        if !self.border_box_width.is_finite() {
            return Err(MeasureError::NoLayoutWidth {
                id,
                width: self.border_box_width,
            });
        }

        let bm = style.box_metrics;
        // The width is taken from the visible element's border box, so the
        // inner width is the same whatever the clone's box-sizing says.
        let content_width =
            (self.border_box_width - bm.padding_horizontal() - bm.border_horizontal()).max(0.0);

        let single_row_height = measurer.line_height(style);
        if !single_row_height.is_finite() {
            return Err(MeasureError::NonFiniteMetrics {
                id,
                height: single_row_height,
            });
        }

        let text = layout_textarea_value(measurer, content_width, style, &self.value);
        let scroll_height = text.content_height() + bm.padding_vertical();
        if !scroll_height.is_finite() {
            return Err(MeasureError::NonFiniteMetrics {
                id,
                height: scroll_height,
            });
        }

        log::trace!(
            target: "autosize.height",
            "{id}: clone {content_width}px wide, {} line(s), scroll height {scroll_height}",
            text.line_count()
        );

        Ok(CloneMetrics {
            scroll_height,
            single_row_height,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use css::{BoxMetrics, LineHeight};
    use layout::FixedAdvanceMeasurer;

    fn style() -> ComputedStyle {
        ComputedStyle {
            font_size: css::Length::Px(10.0),
            line_height: LineHeight::Px(20.0),
            box_metrics: BoxMetrics {
                padding_top: 4.0,
                padding_right: 4.0,
                padding_bottom: 4.0,
                padding_left: 4.0,
                border_top: 1.0,
                border_right: 1.0,
                border_bottom: 1.0,
                border_left: 1.0,
            },
            ..ComputedStyle::initial()
        }
    }

    #[test]
    fn scroll_height_includes_padding_but_not_border() {
        let mut surface = MeasurementSurface::new();
        surface.apply(&style(), 110.0);
        surface.set_value("hello");
        let m = surface
            .measure(InputId::from_raw(1), &FixedAdvanceMeasurer::new())
            .unwrap();
        assert_eq!(m.single_row_height, 20.0);
        assert_eq!(m.scroll_height, 28.0);
    }

    #[test]
    fn wraps_at_inner_width() {
        // 110 - 8 padding - 2 border = 100px of content, 5px per char.
        let mut surface = MeasurementSurface::new();
        surface.apply(&style(), 110.0);
        surface.set_value("aaaaaaaaaa aaaaaaaaaa");
        let m = surface
            .measure(InputId::from_raw(1), &FixedAdvanceMeasurer::new())
            .unwrap();
        assert_eq!(m.scroll_height, 2.0 * 20.0 + 8.0);
    }

    #[test]
    fn value_replaces_previous_contents() {
        let mut surface = MeasurementSurface::new();
        surface.apply(&style(), 110.0);
        surface.set_value("a\nb\nc");
        surface.set_value("x");
        let m = surface
            .measure(InputId::from_raw(1), &FixedAdvanceMeasurer::new())
            .unwrap();
        assert_eq!(m.scroll_height, 28.0);
    }

    #[test]
    fn unusable_width_is_an_error() {
        let mut surface = MeasurementSurface::new();
        surface.apply(&style(), f32::NAN);
        let err = surface
            .measure(InputId::from_raw(2), &FixedAdvanceMeasurer::new())
            .unwrap_err();
        assert!(matches!(err, MeasureError::NoLayoutWidth { .. }));
    }

    #[test]
    fn unstyled_surface_reports_detached() {
        let surface = MeasurementSurface::new();
        let err = surface
            .measure(InputId::from_raw(2), &FixedAdvanceMeasurer::new())
            .unwrap_err();
        assert_eq!(err, MeasureError::Detached(InputId::from_raw(2)));
    }
}
