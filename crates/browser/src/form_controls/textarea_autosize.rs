use std::fmt;

use autosize::{AutosizeContext, LayoutResult, MeasurableElement};
use input_core::InputId;

use super::props::AutosizeProps;
use crate::dom::{AppliedStyle, Document};

/// Called as `(previous, new)` whenever the measured height changes.
pub type HeightCallback = Box<dyn FnMut(Option<f32>, Option<f32>)>;

/// Value measured for a control: its value, else its placeholder, else "".
pub fn measured_text<'a>(value: &'a str, placeholder: Option<&'a str>) -> &'a str {
    if !value.is_empty() {
        return value;
    }
    placeholder.filter(|p| !p.is_empty()).unwrap_or("")
}

/// An auto-growing textarea bound to one element of a [`Document`].
pub struct TextareaAutosize {
    handle: Option<InputId>,
    props: AutosizeProps,
    layout: LayoutResult,
    on_height_applied: Option<HeightCallback>,
}

impl fmt::Debug for TextareaAutosize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextareaAutosize")
            .field("handle", &self.handle)
            .field("props", &self.props)
            .field("layout", &self.layout)
            .field("on_height_applied", &self.on_height_applied.is_some())
            .finish()
    }
}

impl TextareaAutosize {
    pub fn new(props: AutosizeProps) -> Self {
        Self {
            handle: None,
            props,
            layout: LayoutResult::UNCHANGED,
            on_height_applied: None,
        }
    }

    pub fn with_height_callback(
        mut self,
        callback: impl FnMut(Option<f32>, Option<f32>) + 'static,
    ) -> Self {
        self.on_height_applied = Some(Box::new(callback));
        self
    }

    pub fn props(&self) -> &AutosizeProps {
        &self.props
    }

    pub fn handle(&self) -> Option<InputId> {
        self.handle
    }

    pub fn attach(&mut self, id: InputId) {
        self.handle = Some(id);
    }

    pub fn detach(&mut self) -> Option<InputId> {
        self.handle.take()
    }

    /// Last result from the calculator.
    pub fn layout(&self) -> LayoutResult {
        self.layout
    }

    /// Measure `text` against the bound element and store the result.
    /// Returns `true` if the height changed.
    pub fn resize(
        &mut self,
        ctx: &mut AutosizeContext,
        element: Option<&dyn MeasurableElement>,
        text: &str,
    ) -> bool {
        let next = ctx.calculate_height(
            element,
            text,
            self.props.use_cache_for_dom_measurements,
            self.props.row_bounds(),
        );
        let previous = self.layout.height;
        self.layout = next;

        if previous == next.height {
            return false;
        }
        log::debug!(
            target: "browser.autosize",
            "{:?}: height {previous:?} -> {:?}",
            self.handle,
            next.height
        );
        if let Some(callback) = self.on_height_applied.as_mut() {
            callback(previous, next.height);
        }
        true
    }

    /// The style to put on the element: the measured height, the author's
    /// `max-height` merged with the measured one, and hidden overflow once
    /// the content is taller than that maximum.
    pub fn applied_style(&self, author_max_height: Option<f32>) -> AppliedStyle {
        let height = self.layout.height.unwrap_or(0.0);
        let max_height = author_max_height
            .filter(|&h| h > 0.0)
            .unwrap_or(f32::INFINITY)
            .max(self.layout.max_height);
        AppliedStyle {
            height,
            max_height,
            overflow_hidden: max_height < height,
        }
    }

    // --- element pass-through ---

    pub fn value<'d>(&self, doc: &'d Document) -> Option<&'d str> {
        let id = self.handle?;
        doc.textarea(id).map(|el| el.state().value())
    }

    /// Writes the element's value directly, without re-measuring.
    pub fn set_value(&self, doc: &mut Document, value: &str) {
        if let Some(el) = self.handle.and_then(|id| doc.textarea_mut(id)) {
            el.state_mut().set_value(value);
        }
    }

    pub fn selection_start(&self, doc: &Document) -> Option<usize> {
        let id = self.handle?;
        doc.textarea(id).map(|el| el.state().selection_start())
    }

    pub fn set_selection_start(&self, doc: &mut Document, start: usize) {
        if let Some(el) = self.handle.and_then(|id| doc.textarea_mut(id)) {
            el.state_mut().set_selection_start(start);
        }
    }

    pub fn selection_end(&self, doc: &Document) -> Option<usize> {
        let id = self.handle?;
        doc.textarea(id).map(|el| el.state().selection_end())
    }

    pub fn set_selection_end(&self, doc: &mut Document, end: usize) {
        if let Some(el) = self.handle.and_then(|id| doc.textarea_mut(id)) {
            el.state_mut().set_selection_end(end);
        }
    }

    pub fn focus(&self, doc: &mut Document) {
        if let Some(el) = self.handle.and_then(|id| doc.textarea_mut(id)) {
            el.state_mut().focus();
        }
    }

    pub fn blur(&self, doc: &mut Document) {
        if let Some(el) = self.handle.and_then(|id| doc.textarea_mut(id)) {
            el.state_mut().blur();
        }
    }
}
