//! Auto-growing textareas.
//!
//! The measurement core lives in [`autosize`]; [`browser`] is a reference
//! host that mounts auto-sized textareas in a styled document. The most used
//! types are re-exported here.

pub use autosize::{
    AutosizeContext, HeightCalculator, LayoutResult, MeasurableElement, RowBounds, StyleCache,
    StyleSnapshot, get_style,
};
pub use browser::{AppliedStyle, AutosizeProps, Page, PageError, TextareaAttrs, TextareaAutosize};
pub use layout::{FixedAdvanceMeasurer, TextMeasurer};

pub use autosize;
pub use browser;
pub use css;
pub use input_core;
pub use layout;
