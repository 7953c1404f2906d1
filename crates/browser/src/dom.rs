//! A minimal styled document holding textarea elements.

use std::collections::HashMap;

use autosize::MeasurableElement;
use css::{
    BoxSizing, ComputedStyle, Length, SelectorSubject, Stylesheet, cascade_declarations,
    compute_style, parse_stylesheet,
};
use input_core::{InputId, InputIdAllocator, TextControlState};

/// Built-in textarea styling, applied before any author sheet.
pub const UA_STYLESHEET: &str = "
textarea {
    font-family: monospace;
    font-size: 13px;
    line-height: normal;
    white-space: pre-wrap;
    overflow-wrap: break-word;
    padding: 2px;
    border: 1px solid;
    box-sizing: content-box;
    overflow: auto;
}
";

/// Attributes a textarea is created with.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TextareaAttrs {
    pub id: Option<String>,
    pub classes: Vec<String>,
    /// Inline `style=""` text.
    pub style: Option<String>,
    pub placeholder: Option<String>,
    pub value: String,
}

impl TextareaAttrs {
    pub fn with_value(value: &str) -> Self {
        Self {
            value: value.to_string(),
            ..Self::default()
        }
    }
}

/// Style the host has applied to a textarea on top of its cascade.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AppliedStyle {
    pub height: f32,
    /// Effective maximum; `f32::INFINITY` when unbounded.
    pub max_height: f32,
    pub overflow_hidden: bool,
}

impl Default for AppliedStyle {
    fn default() -> Self {
        Self {
            height: 0.0,
            max_height: f32::INFINITY,
            overflow_hidden: false,
        }
    }
}

#[derive(Clone, Debug)]
pub struct TextareaElement {
    id: InputId,
    attrs: TextareaAttrs,
    state: TextControlState,
    rendered: bool,
    applied: AppliedStyle,
}

impl TextareaElement {
    pub fn id(&self) -> InputId {
        self.id
    }

    pub fn attrs(&self) -> &TextareaAttrs {
        &self.attrs
    }

    pub fn placeholder(&self) -> Option<&str> {
        self.attrs.placeholder.as_deref()
    }

    pub fn state(&self) -> &TextControlState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut TextControlState {
        &mut self.state
    }

    pub fn is_rendered(&self) -> bool {
        self.rendered
    }

    pub fn applied_style(&self) -> AppliedStyle {
        self.applied
    }

    pub fn set_applied_style(&mut self, applied: AppliedStyle) {
        self.applied = applied;
    }
}

pub struct Document {
    ua_sheet: Stylesheet,
    author_sheet: Stylesheet,
    viewport_width: f32,
    textareas: HashMap<InputId, TextareaElement>,
    ids: InputIdAllocator,
}

impl Document {
    pub fn new(viewport_width: f32) -> Self {
        Self {
            ua_sheet: parse_stylesheet(UA_STYLESHEET),
            author_sheet: Stylesheet::default(),
            viewport_width: sanitize_width(viewport_width),
            textareas: HashMap::new(),
            ids: InputIdAllocator::new(),
        }
    }

    /// Replace the author stylesheet.
    pub fn set_author_stylesheet(&mut self, css: &str) {
        self.author_sheet = parse_stylesheet(css);
    }

    pub fn viewport_width(&self) -> f32 {
        self.viewport_width
    }

    pub fn set_viewport_width(&mut self, width: f32) {
        self.viewport_width = sanitize_width(width);
    }

    pub fn insert_textarea(&mut self, attrs: TextareaAttrs) -> InputId {
        let id = self.ids.allocate();
        let state = TextControlState::new(&attrs.value);
        self.textareas.insert(
            id,
            TextareaElement {
                id,
                attrs,
                state,
                rendered: true,
                applied: AppliedStyle::default(),
            },
        );
        id
    }

    pub fn remove_textarea(&mut self, id: InputId) -> Option<TextareaElement> {
        self.textareas.remove(&id)
    }

    pub fn textarea(&self, id: InputId) -> Option<&TextareaElement> {
        self.textareas.get(&id)
    }

    pub fn textarea_mut(&mut self, id: InputId) -> Option<&mut TextareaElement> {
        self.textareas.get_mut(&id)
    }

    /// Toggle whether the element takes part in layout (`display: none`).
    pub fn set_rendered(&mut self, id: InputId, rendered: bool) -> bool {
        match self.textareas.get_mut(&id) {
            Some(el) => {
                el.rendered = rendered;
                true
            }
            None => false,
        }
    }

    /// Cascade the UA and author sheets plus inline style for one textarea.
    pub fn computed_style(&self, id: InputId) -> Option<ComputedStyle> {
        let el = self.textareas.get(&id)?;
        if !el.rendered {
            return None;
        }
        let subject = SelectorSubject {
            tag: "textarea",
            id: el.attrs.id.as_deref(),
            classes: &el.attrs.classes,
        };
        let specified = cascade_declarations(
            &subject,
            &[&self.ua_sheet, &self.author_sheet],
            el.attrs.style.as_deref(),
        );
        Some(compute_style(&specified, None))
    }

    /// The element's used border-box width. `width: auto` fills the viewport.
    pub fn border_box_width(&self, id: InputId) -> Option<f32> {
        let style = self.computed_style(id)?;
        Some(used_border_box_width(&style, self.viewport_width))
    }

    /// A measurable view of one textarea, if it exists.
    pub fn measurable(&self, id: InputId) -> Option<DomTextarea<'_>> {
        self.textareas.contains_key(&id).then_some(DomTextarea { doc: self, id })
    }

    pub fn len(&self) -> usize {
        self.textareas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.textareas.is_empty()
    }
}

fn sanitize_width(width: f32) -> f32 {
    if width.is_finite() { width.max(0.0) } else { 0.0 }
}

fn used_border_box_width(style: &ComputedStyle, viewport_width: f32) -> f32 {
    let bm = style.box_metrics;
    let chrome = bm.padding_horizontal() + bm.border_horizontal();
    let width = match style.width {
        None => viewport_width,
        Some(Length::Px(w)) => match style.box_sizing {
            BoxSizing::ContentBox => w + chrome,
            BoxSizing::BorderBox => w,
        },
    };
    width.max(chrome)
}

/// Borrowed handle the autosize calculator measures through.
#[derive(Clone, Copy)]
pub struct DomTextarea<'a> {
    doc: &'a Document,
    id: InputId,
}

impl MeasurableElement for DomTextarea<'_> {
    fn input_id(&self) -> InputId {
        self.id
    }

    fn computed_style(&self) -> Option<ComputedStyle> {
        self.doc.computed_style(self.id)
    }

    fn border_box_width(&self) -> Option<f32> {
        self.doc.border_box_width(self.id)
    }
}
