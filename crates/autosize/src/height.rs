//! Height calculation for auto-growing text controls.

use std::collections::HashMap;

use css::BoxSizing;
use input_core::InputId;
use layout::TextMeasurer;

use crate::element::MeasurableElement;
use crate::error::MeasureError;
use crate::style::{StyleCache, StyleSnapshot, get_style};
use crate::surface::{CloneMetrics, MeasurementSurface};

/// Optional row limits. `None` means unbounded on that side.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RowBounds {
    pub min_rows: Option<u32>,
    pub max_rows: Option<u32>,
}

impl RowBounds {
    pub const UNBOUNDED: RowBounds = RowBounds {
        min_rows: None,
        max_rows: None,
    };

    pub fn new(min_rows: Option<u32>, max_rows: Option<u32>) -> Self {
        Self { min_rows, max_rows }
    }

    /// Both limits set and `min_rows > max_rows`. The maximum wins.
    pub fn is_inverted(&self) -> bool {
        matches!((self.min_rows, self.max_rows), (Some(min), Some(max)) if min > max)
    }
}

/// What the host should apply to the element.
///
/// `height` and the bounds are in the element's own box-sizing convention:
/// border-box extents for `border-box`, content heights for `content-box`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutResult {
    /// `None` means "no measurement possible; leave the element alone".
    pub height: Option<f32>,
    pub min_height: f32,
    pub max_height: f32,
}

impl LayoutResult {
    pub const UNCHANGED: LayoutResult = LayoutResult {
        height: None,
        min_height: f32::NEG_INFINITY,
        max_height: f32::INFINITY,
    };

    pub fn is_unchanged(&self) -> bool {
        self.height.is_none()
    }
}

/// Measures text control values through a private hidden clone.
///
/// Single-threaded; the clone is created on first use and reused for the
/// lifetime of the calculator. The row height of each element's last
/// successful measurement is kept for the degrade path.
pub struct HeightCalculator {
    measurer: Box<dyn TextMeasurer>,
    surface: Option<MeasurementSurface>,
    last_single_row_heights: HashMap<InputId, f32>,
}

impl HeightCalculator {
    pub fn new(measurer: impl TextMeasurer + 'static) -> Self {
        Self::with_measurer(Box::new(measurer))
    }

    pub fn with_measurer(measurer: Box<dyn TextMeasurer>) -> Self {
        Self {
            measurer,
            surface: None,
            last_single_row_heights: HashMap::new(),
        }
    }

    pub fn measurer(&self) -> &dyn TextMeasurer {
        &*self.measurer
    }

    /// Whether the hidden clone has been created yet.
    pub fn has_surface(&self) -> bool {
        self.surface.is_some()
    }

    /// Row height of the last successful measurement of `id`.
    pub fn last_single_row_height(&self, id: InputId) -> Option<f32> {
        self.last_single_row_heights.get(&id).copied()
    }

    /// Drop what is remembered about `id`. Returns whether anything was.
    pub fn forget(&mut self, id: InputId) -> bool {
        self.last_single_row_heights.remove(&id).is_some()
    }

    /// Compute the height `element` should take to show `value` without
    /// scrolling, honoring the row bounds.
    ///
    /// With no element the result is [`LayoutResult::UNCHANGED`] and no
    /// measurement happens. If the element cannot be measured the result is a
    /// best-effort single row with unbounded limits. The element itself is
    /// never modified.
    pub fn calculate_height(
        &mut self,
        element: Option<&dyn MeasurableElement>,
        value: &str,
        use_cache_for_style: bool,
        cache: &mut StyleCache,
        bounds: RowBounds,
    ) -> LayoutResult {
        let Some(element) = element else {
            return LayoutResult::UNCHANGED;
        };
        let id = element.input_id();
        let snapshot = get_style(element, use_cache_for_style, cache);

        let metrics = match self.measure_clone(element, &snapshot, value) {
            Ok(metrics) => metrics,
            Err(err) => {
                log::debug!(target: "autosize.height", "{err}; degrading to a single row");
                return self.degraded(id);
            }
        };
        self.last_single_row_heights.insert(id, metrics.single_row_height);

        let result = to_layout_result(&snapshot, metrics, bounds);
        if bounds.is_inverted() {
            log::warn!(
                target: "autosize.height",
                "{id}: min_rows {:?} exceeds max_rows {:?}; max_rows wins",
                bounds.min_rows,
                bounds.max_rows
            );
        }
        log::trace!(
            target: "autosize.height",
            "{id}: height {:?} (min {}, max {})",
            result.height,
            result.min_height,
            result.max_height
        );
        result
    }

    fn measure_clone(
        &mut self,
        element: &dyn MeasurableElement,
        snapshot: &StyleSnapshot,
        value: &str,
    ) -> Result<CloneMetrics, MeasureError> {
        let id = element.input_id();
        // Width is read live even when style comes from the cache, so a
        // resized element re-wraps correctly.
        let width = element
            .border_box_width()
            .ok_or(MeasureError::Detached(id))?;

        let surface = self.surface.get_or_insert_with(MeasurementSurface::new);
        surface.apply(&snapshot.sizing_style, width);
        surface.set_value(value);
        surface.measure(id, &*self.measurer)
    }

    fn degraded(&self, id: InputId) -> LayoutResult {
        LayoutResult {
            height: Some(self.last_single_row_height(id).unwrap_or(0.0)),
            ..LayoutResult::UNCHANGED
        }
    }
}

/// Convert clone measurements into the element's box-sizing convention and
/// apply the row bounds. The maximum is applied last, so it wins when the
/// bounds are inverted.
fn to_layout_result(
    snapshot: &StyleSnapshot,
    metrics: CloneMetrics,
    bounds: RowBounds,
) -> LayoutResult {
    let chrome = match snapshot.box_sizing {
        BoxSizing::BorderBox => snapshot.padding_size() + snapshot.border_size(),
        BoxSizing::ContentBox => 0.0,
    };
    let mut height = match snapshot.box_sizing {
        BoxSizing::BorderBox => metrics.scroll_height + snapshot.border_size(),
        BoxSizing::ContentBox => metrics.scroll_height - snapshot.padding_size(),
    };
    let row = metrics.single_row_height;

    let mut min_height = f32::NEG_INFINITY;
    if let Some(rows) = bounds.min_rows {
        min_height = row * rows as f32 + chrome;
        height = height.max(min_height);
    }

    let mut max_height = f32::INFINITY;
    if let Some(rows) = bounds.max_rows {
        max_height = row * rows as f32 + chrome;
        height = height.min(max_height);
    }

    LayoutResult {
        height: Some(height),
        min_height,
        max_height,
    }
}
