//! # input_core
//!
//! UI-agnostic state for text controls.
//!
//! This crate provides:
//! - [`InputId`]: a stable, opaque identity for one control instance
//! - [`TextControlState`]: value, selection and focus of a multi-line control
//! - [`SelectionRange`]: a normalized byte range into a control's value
//!
//! It depends only on `std`; it performs no layout or text measurement.

mod id;
mod selection;
mod state;
mod text;

pub use id::{InputId, InputIdAllocator};
pub use selection::SelectionRange;
pub use state::TextControlState;
pub use text::{clamp_to_char_boundary, normalize_newlines};
