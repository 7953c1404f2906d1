//! Rendering-side adapters.
//!
//! Layout only knows the [`layout::TextMeasurer`] trait; this crate provides
//! an implementation backed by egui's font system so measured heights match
//! what an egui frontend would paint.

pub mod text_measurer;
pub use text_measurer::EguiTextMeasurer;
