//! Style introspection: the subset of computed style that text layout and
//! height conversion depend on, optionally memoized per element.

use std::collections::HashMap;

use css::{BoxSizing, ComputedStyle, Length, Overflow};
use input_core::InputId;

use crate::element::MeasurableElement;

/// Line height used when an element's style cannot be read
/// (the initial 16px font at `line-height: normal`).
pub const FALLBACK_LINE_HEIGHT: f32 = 16.0 * css::LineHeight::NORMAL_FACTOR;

/// Layout-relevant style of one element at one point in time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StyleSnapshot {
    pub box_sizing: BoxSizing,
    pub padding_top: f32,
    pub padding_bottom: f32,
    pub border_top: f32,
    pub border_bottom: f32,
    /// Used line-height in px.
    pub line_height: f32,
    /// Style given to the hidden measurement clone.
    pub sizing_style: ComputedStyle,
}

impl StyleSnapshot {
    pub fn from_computed(style: &ComputedStyle) -> Self {
        let bm = style.box_metrics;
        Self {
            box_sizing: style.box_sizing,
            padding_top: bm.padding_top,
            padding_bottom: bm.padding_bottom,
            border_top: bm.border_top,
            border_bottom: bm.border_bottom,
            line_height: style.line_height_px(),
            sizing_style: hidden_clone_style(style),
        }
    }

    /// Best-effort snapshot for an element whose style cannot be read:
    /// content-box, no padding or borders, fallback line height.
    pub fn fallback() -> Self {
        Self::from_computed(&ComputedStyle::initial())
    }

    /// Vertical padding (top + bottom).
    pub fn padding_size(&self) -> f32 {
        self.padding_top + self.padding_bottom
    }

    /// Vertical border widths (top + bottom).
    pub fn border_size(&self) -> f32 {
        self.border_top + self.border_bottom
    }

    /// The rendered border-box extent of an element whose explicit `height`
    /// is `height` under this snapshot's box-sizing.
    pub fn border_box_height(&self, height: f32) -> f32 {
        match self.box_sizing {
            BoxSizing::BorderBox => height,
            BoxSizing::ContentBox => height + self.padding_size() + self.border_size(),
        }
    }
}

/// Copy the text-layout properties of `style` and pin the clone overrides:
/// no height constraints and no scrollbars.
///
/// Everything that changes how text wraps travels with the copy
/// (font, letter-spacing, line-height, indent, transform, whitespace and
/// wrapping mode, padding, borders, box-sizing, width).
pub fn hidden_clone_style(style: &ComputedStyle) -> ComputedStyle {
    ComputedStyle {
        height: Some(Length::Px(0.0)),
        min_height: Some(Length::Px(0.0)),
        max_height: None,
        overflow: Overflow::Hidden,
        ..*style
    }
}

/// Snapshots keyed by element identity.
///
/// Entries are never invalidated automatically. Hosts whose styling can
/// change at runtime (stylesheet swaps, media queries) must either not use
/// the cache or call [`StyleCache::clear`] / [`StyleCache::invalidate`].
#[derive(Clone, Debug, Default)]
pub struct StyleCache {
    entries: HashMap<InputId, StyleSnapshot>,
}

impl StyleCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: InputId) -> Option<&StyleSnapshot> {
        self.entries.get(&id)
    }

    pub fn insert(&mut self, id: InputId, snapshot: StyleSnapshot) {
        self.entries.insert(id, snapshot);
    }

    /// Drop one element's entry. Returns `true` if there was one.
    pub fn invalidate(&mut self, id: InputId) -> bool {
        self.entries.remove(&id).is_some()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Read the layout-relevant style of `element`.
///
/// With `use_cache`, a snapshot previously stored for the same element is
/// returned unchanged and a fresh one is stored for next time. An element
/// whose style cannot be read yields [`StyleSnapshot::fallback`], which is
/// never cached so the element measures correctly once it is rendered.
pub fn get_style(
    element: &dyn MeasurableElement,
    use_cache: bool,
    cache: &mut StyleCache,
) -> StyleSnapshot {
    let id = element.input_id();

    if use_cache {
        if let Some(snapshot) = cache.get(id) {
            log::trace!(target: "autosize.style", "style cache hit for {id}");
            return *snapshot;
        }
    }

    let Some(style) = element.computed_style() else {
        log::debug!(target: "autosize.style", "no computed style for {id}; using fallback");
        return StyleSnapshot::fallback();
    };

    let snapshot = StyleSnapshot::from_computed(&style);
    if use_cache {
        log::trace!(target: "autosize.style", "caching style for {id}");
        cache.insert(id, snapshot);
    }
    snapshot
}
