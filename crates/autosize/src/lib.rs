//! # autosize
//!
//! Computes the height a multi-line text control must take so its whole value
//! is visible without an internal scrollbar, optionally bounded by a minimum
//! and maximum number of rows.
//!
//! The value is laid out on a private hidden clone that copies the element's
//! sizing style and live width; the element itself is only read. Results are
//! expressed in the element's own `box-sizing` convention so the host can
//! assign them to `height` directly.
//!
//! - [`MeasurableElement`]: what a host exposes for measurement
//! - [`get_style`] / [`StyleCache`]: style introspection with optional caching
//! - [`HeightCalculator`]: the measurement itself
//! - [`AutosizeContext`]: a calculator and cache bundled for one host

mod context;
mod element;
mod error;
mod height;
mod style;
mod surface;

pub use context::AutosizeContext;
pub use element::MeasurableElement;
pub use error::MeasureError;
pub use height::{HeightCalculator, LayoutResult, RowBounds};
pub use style::{FALLBACK_LINE_HEIGHT, StyleCache, StyleSnapshot, get_style, hidden_clone_style};
