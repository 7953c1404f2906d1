use css::ComputedStyle;
use input_core::InputId;

/// A live text control the host lets the calculator measure.
///
/// The host owns the element for its mount lifetime; the core only borrows it
/// for the duration of one call. An element that is not currently rendered
/// (detached, `display: none`, ...) reports `None` from both queries.
pub trait MeasurableElement {
    /// Identity of this control instance. Must be stable across calls.
    fn input_id(&self) -> InputId;

    /// The element's computed style, if it is rendered.
    fn computed_style(&self) -> Option<ComputedStyle>;

    /// The element's current border-box width in CSS px, if it is rendered.
    fn border_box_width(&self) -> Option<f32>;
}

impl<E: MeasurableElement + ?Sized> MeasurableElement for &E {
    fn input_id(&self) -> InputId {
        (**self).input_id()
    }

    fn computed_style(&self) -> Option<ComputedStyle> {
        (**self).computed_style()
    }

    fn border_box_width(&self) -> Option<f32> {
        (**self).border_box_width()
    }
}
