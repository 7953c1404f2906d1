pub mod syntax;
pub mod cascade;
pub mod values;
pub mod computed;

// Re-exports so other crates can just use `css::...` nicely.
pub use syntax::{Declaration, Rule, Selector, Stylesheet, parse_declarations, parse_stylesheet};
pub use cascade::{SelectorSubject, cascade_declarations};
pub use values::{
    BoxSizing, FontFamily, Length, LineHeight, Overflow, OverflowWrap, TextTransform, WhiteSpace,
    parse_length,
};
pub use computed::{BoxMetrics, ComputedStyle, compute_style};
