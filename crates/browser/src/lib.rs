//! # browser
//!
//! Reference host for auto-sizing textareas.
//!
//! A [`Page`] owns a styled [`Document`], one [`autosize::AutosizeContext`]
//! shared by all of its controls, and the list of controls listening for
//! viewport resizes. Each mounted [`TextareaAutosize`] re-measures when its
//! value changes or the viewport is resized, and writes the result back to
//! its element as an [`AppliedStyle`].

pub mod dom;
pub mod form_controls;
pub mod page;
pub mod resize;

pub use dom::{AppliedStyle, Document, DomTextarea, TextareaAttrs, TextareaElement, UA_STYLESHEET};
pub use form_controls::{AutosizeProps, HeightCallback, TextareaAutosize, measured_text};
pub use page::{Page, PageError};
pub use resize::ResizeListeners;
