use std::collections::HashMap;
use std::fmt;

use autosize::{AutosizeContext, MeasurableElement};
use css::Length;
use gfx::EguiTextMeasurer;
use input_core::InputId;
use layout::TextMeasurer;

use crate::dom::{AppliedStyle, Document, TextareaAttrs};
use crate::form_controls::{TextareaAutosize, measured_text};
use crate::resize::ResizeListeners;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageError {
    UnknownControl(InputId),
}

impl fmt::Display for PageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageError::UnknownControl(id) => write!(f, "no mounted textarea {id}"),
        }
    }
}

impl std::error::Error for PageError {}

/// A document plus the auto-sizing textareas mounted in it.
pub struct Page {
    document: Document,
    autosize: AutosizeContext,
    controls: HashMap<InputId, TextareaAutosize>,
    resize_listeners: ResizeListeners,
}

impl Page {
    /// A page measured with fixed-advance metrics.
    pub fn new(viewport_width: f32) -> Self {
        Self::with_context(viewport_width, AutosizeContext::headless())
    }

    pub fn with_measurer(viewport_width: f32, measurer: impl TextMeasurer + 'static) -> Self {
        Self::with_context(viewport_width, AutosizeContext::new(measurer))
    }

    /// A page measured with egui's fonts. If `ctx` has not finished a frame
    /// yet, controls degrade to a zero height until its next pass begins.
    pub fn with_egui(viewport_width: f32, ctx: &egui::Context) -> Self {
        Self::with_measurer(viewport_width, EguiTextMeasurer::new(ctx))
    }

    fn with_context(viewport_width: f32, autosize: AutosizeContext) -> Self {
        Self {
            document: Document::new(viewport_width),
            autosize,
            controls: HashMap::new(),
            resize_listeners: ResizeListeners::new(),
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn autosize(&self) -> &AutosizeContext {
        &self.autosize
    }

    pub fn resize_listeners(&self) -> &ResizeListeners {
        &self.resize_listeners
    }

    pub fn control(&self, id: InputId) -> Option<&TextareaAutosize> {
        self.controls.get(&id)
    }

    /// Replace the author stylesheet. Mounted controls are not re-measured
    /// until their value or the viewport changes.
    pub fn set_stylesheet(&mut self, css: &str) {
        self.document.set_author_stylesheet(css);
    }

    /// Insert a textarea, size it, and start listening for viewport resizes.
    pub fn mount(&mut self, attrs: TextareaAttrs, mut control: TextareaAutosize) -> InputId {
        let id = self.document.insert_textarea(attrs);
        control.attach(id);
        self.controls.insert(id, control);
        if let Err(err) = self.recompute(id) {
            log::warn!(target: "browser.autosize", "mount: {err}");
        }
        self.resize_listeners.add(id);
        log::debug!(target: "browser.autosize", "mounted {id}");
        id
    }

    /// Stop listening for resizes and remove the element.
    pub fn unmount(&mut self, id: InputId) -> Result<TextareaAutosize, PageError> {
        let mut control = self
            .controls
            .remove(&id)
            .ok_or(PageError::UnknownControl(id))?;
        self.resize_listeners.remove(id);
        self.autosize.forget(id);
        self.document.remove_textarea(id);
        control.detach();
        log::debug!(target: "browser.autosize", "unmounted {id}");
        Ok(control)
    }

    /// Controlled value update. Re-measures only if the value changed;
    /// returns whether it did.
    pub fn set_value(&mut self, id: InputId, value: &str) -> Result<bool, PageError> {
        let el = self
            .document
            .textarea_mut(id)
            .ok_or(PageError::UnknownControl(id))?;
        if !el.state_mut().set_value(value) {
            return Ok(false);
        }
        self.recompute(id)?;
        Ok(true)
    }

    /// Change the viewport width and re-measure every listening control.
    pub fn resize_viewport(&mut self, width: f32) {
        self.document.set_viewport_width(width);
        log::debug!(
            target: "browser.autosize",
            "viewport resized to {}px; notifying {} control(s)",
            self.document.viewport_width(),
            self.resize_listeners.len()
        );
        for id in self.resize_listeners.snapshot() {
            if let Err(err) = self.recompute(id) {
                log::warn!(target: "browser.autosize", "resize listener: {err}");
            }
        }
    }

    /// Take the element out of layout (`display: none`). It stays mounted.
    pub fn hide(&mut self, id: InputId) -> Result<(), PageError> {
        self.set_rendered(id, false)
    }

    pub fn show(&mut self, id: InputId) -> Result<(), PageError> {
        self.set_rendered(id, true)
    }

    fn set_rendered(&mut self, id: InputId, rendered: bool) -> Result<(), PageError> {
        if self.document.set_rendered(id, rendered) {
            Ok(())
        } else {
            Err(PageError::UnknownControl(id))
        }
    }

    pub fn clear_style_cache(&mut self) {
        self.autosize.clear_style_cache();
    }

    pub fn applied_style(&self, id: InputId) -> Option<AppliedStyle> {
        self.document.textarea(id).map(|el| el.applied_style())
    }

    fn recompute(&mut self, id: InputId) -> Result<bool, PageError> {
        let control = self
            .controls
            .get_mut(&id)
            .ok_or(PageError::UnknownControl(id))?;
        let handle = control.handle();

        let changed = {
            let text = handle
                .and_then(|h| self.document.textarea(h))
                .map(|el| measured_text(el.state().value(), el.placeholder()))
                .unwrap_or("");
            let view = handle.and_then(|h| self.document.measurable(h));
            let element = view.as_ref().map(|v| v as &dyn MeasurableElement);
            control.resize(&mut self.autosize, element, text)
        };

        let author_max_height = self
            .document
            .computed_style(id)
            .and_then(|style| style.max_height)
            .map(Length::to_px);
        let applied = control.applied_style(author_max_height);
        if let Some(el) = self.document.textarea_mut(id) {
            el.set_applied_style(applied);
        }
        Ok(changed)
    }

    // --- element pass-through ---

    pub fn value(&self, id: InputId) -> Option<&str> {
        self.control(id)?.value(&self.document)
    }

    /// Write the element's value without re-measuring, as a direct DOM
    /// property write would.
    pub fn write_value(&mut self, id: InputId, value: &str) -> Result<(), PageError> {
        let control = self.controls.get(&id).ok_or(PageError::UnknownControl(id))?;
        control.set_value(&mut self.document, value);
        Ok(())
    }

    pub fn selection_start(&self, id: InputId) -> Option<usize> {
        self.control(id)?.selection_start(&self.document)
    }

    pub fn selection_end(&self, id: InputId) -> Option<usize> {
        self.control(id)?.selection_end(&self.document)
    }

    pub fn set_selection_start(&mut self, id: InputId, start: usize) -> Result<(), PageError> {
        let control = self.controls.get(&id).ok_or(PageError::UnknownControl(id))?;
        control.set_selection_start(&mut self.document, start);
        Ok(())
    }

    pub fn set_selection_end(&mut self, id: InputId, end: usize) -> Result<(), PageError> {
        let control = self.controls.get(&id).ok_or(PageError::UnknownControl(id))?;
        control.set_selection_end(&mut self.document, end);
        Ok(())
    }

    pub fn focus(&mut self, id: InputId) -> Result<(), PageError> {
        let control = self.controls.get(&id).ok_or(PageError::UnknownControl(id))?;
        control.focus(&mut self.document);
        Ok(())
    }

    pub fn blur(&mut self, id: InputId) -> Result<(), PageError> {
        let control = self.controls.get(&id).ok_or(PageError::UnknownControl(id))?;
        control.blur(&mut self.document);
        Ok(())
    }

    pub fn is_focused(&self, id: InputId) -> bool {
        self.document
            .textarea(id)
            .is_some_and(|el| el.state().is_focused())
    }
}
