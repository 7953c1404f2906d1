use input_core::InputId;
use layout::{FixedAdvanceMeasurer, TextMeasurer};

use crate::element::MeasurableElement;
use crate::height::{HeightCalculator, LayoutResult, RowBounds};
use crate::style::StyleCache;

/// One host's autosize session: a calculator plus the style cache it reads
/// through. Hosts keep one of these for the lifetime of a document.
pub struct AutosizeContext {
    calculator: HeightCalculator,
    style_cache: StyleCache,
}

impl AutosizeContext {
    pub fn new(measurer: impl TextMeasurer + 'static) -> Self {
        Self::with_calculator(HeightCalculator::new(measurer))
    }

    pub fn with_calculator(calculator: HeightCalculator) -> Self {
        Self {
            calculator,
            style_cache: StyleCache::new(),
        }
    }

    /// A context backed by [`FixedAdvanceMeasurer`], for hosts without a font
    /// system.
    pub fn headless() -> Self {
        Self::new(FixedAdvanceMeasurer::new())
    }

    pub fn calculate_height(
        &mut self,
        element: Option<&dyn MeasurableElement>,
        value: &str,
        use_cache_for_style: bool,
        bounds: RowBounds,
    ) -> LayoutResult {
        self.calculator.calculate_height(
            element,
            value,
            use_cache_for_style,
            &mut self.style_cache,
            bounds,
        )
    }

    pub fn calculator(&self) -> &HeightCalculator {
        &self.calculator
    }

    pub fn style_cache(&self) -> &StyleCache {
        &self.style_cache
    }

    /// Forget the cached style of one element.
    pub fn invalidate_style(&mut self, id: InputId) -> bool {
        self.style_cache.invalidate(id)
    }

    /// Drop everything kept for an element that is going away: its cached
    /// style and its last-known row height.
    pub fn forget(&mut self, id: InputId) {
        self.style_cache.invalidate(id);
        self.calculator.forget(id);
    }

    pub fn clear_style_cache(&mut self) {
        log::debug!(
            target: "autosize.style",
            "clearing {} cached style(s)",
            self.style_cache.len()
        );
        self.style_cache.clear();
    }
}

impl Default for AutosizeContext {
    fn default() -> Self {
        Self::headless()
    }
}
