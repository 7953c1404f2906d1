use crate::values::{
    BoxSizing, FontFamily, Length, LineHeight, Overflow, OverflowWrap, TextTransform, WhiteSpace,
    parse_border_width, parse_box_sizing, parse_font_family, parse_length,
    parse_line_height, parse_non_negative_px, parse_overflow, parse_overflow_wrap,
    parse_signed_px, parse_text_transform, parse_white_space,
};

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BoxMetrics {
    // Padding in CSS px
    pub padding_top: f32,
    pub padding_right: f32,
    pub padding_bottom: f32,
    pub padding_left: f32,

    // Border widths in CSS px
    pub border_top: f32,
    pub border_right: f32,
    pub border_bottom: f32,
    pub border_left: f32,
}

impl BoxMetrics {
    pub fn zero() -> Self {
        Self::default()
    }

    pub fn padding_vertical(&self) -> f32 {
        self.padding_top + self.padding_bottom
    }

    pub fn padding_horizontal(&self) -> f32 {
        self.padding_left + self.padding_right
    }

    pub fn border_vertical(&self) -> f32 {
        self.border_top + self.border_bottom
    }

    pub fn border_horizontal(&self) -> f32 {
        self.border_left + self.border_right
    }
}

#[derive(Clone, Debug, Copy, PartialEq)]
pub struct ComputedStyle {
    /// Inherited. We'll treat this as `px` only for now.
    /// Initial: 16px.
    pub font_size: Length,
    /// Inherited.
    pub font_family: FontFamily,
    /// Inherited.
    pub line_height: LineHeight,
    /// Inherited. Extra advance after each character, in px.
    pub letter_spacing: f32,
    /// Inherited. Indentation of the first line, in px.
    pub text_indent: f32,
    /// Inherited.
    pub text_transform: TextTransform,
    /// Inherited.
    pub white_space: WhiteSpace,
    /// Inherited.
    pub overflow_wrap: OverflowWrap,

    pub box_sizing: BoxSizing,
    pub box_metrics: BoxMetrics,

    /// `None` means `auto`. Interpreted per `box_sizing`.
    pub width: Option<Length>,
    pub height: Option<Length>,
    pub min_height: Option<Length>,
    /// `None` means `none`.
    pub max_height: Option<Length>,
    pub overflow: Overflow,
}

impl ComputedStyle {
    pub fn initial() -> Self {
        ComputedStyle {
            font_size: Length::Px(16.0),
            font_family: FontFamily::SansSerif,
            line_height: LineHeight::Normal,
            letter_spacing: 0.0,
            text_indent: 0.0,
            text_transform: TextTransform::None,
            white_space: WhiteSpace::Normal,
            overflow_wrap: OverflowWrap::Normal,
            box_sizing: BoxSizing::ContentBox,
            box_metrics: BoxMetrics::zero(),
            width: None,
            height: None,
            min_height: None,
            max_height: None,
            overflow: Overflow::Visible,
        }
    }

    #[inline]
    pub fn font_px(&self) -> f32 {
        self.font_size.to_px()
    }

    /// Used line-height in px.
    #[inline]
    pub fn line_height_px(&self) -> f32 {
        self.line_height.resolve(self.font_px())
    }
}

impl Default for ComputedStyle {
    fn default() -> Self {
        Self::initial()
    }
}

/// Expand a 1-4 value box shorthand (`padding`, `border-width`) into
/// (top, right, bottom, left).
fn parse_box_shorthand(value: &str, parse_one: fn(&str) -> Option<f32>) -> Option<[f32; 4]> {
    let parts = value
        .split_whitespace()
        .map(parse_one)
        .collect::<Option<Vec<f32>>>()?;
    match parts.as_slice() {
        [a] => Some([*a, *a, *a, *a]),
        [v, h] => Some([*v, *h, *v, *h]),
        [t, h, b] => Some([*t, *h, *b, *h]),
        [t, r, b, l] => Some([*t, *r, *b, *l]),
        _ => None,
    }
}

/// Pick the width component out of a `border` shorthand (`1px solid red`).
fn border_shorthand_width(value: &str) -> Option<f32> {
    let v = value.trim();
    if v.eq_ignore_ascii_case("none") || v == "0" {
        return Some(0.0);
    }
    let width = v.split_whitespace().find_map(parse_border_width);
    if width.is_some() {
        return width;
    }
    // A style without a width uses `medium`, unless the style is `none`.
    let has_none = v
        .split_whitespace()
        .any(|p| p.eq_ignore_ascii_case("none") || p.eq_ignore_ascii_case("hidden"));
    Some(if has_none { 0.0 } else { 3.0 })
}

fn optional_length(value: &str, none_keyword: &str) -> Option<Option<Length>> {
    let v = value.trim();
    if v.eq_ignore_ascii_case(none_keyword) {
        return Some(None);
    }
    parse_non_negative_px(v).map(|px| Some(Length::Px(px)))
}

/// Compute the final, inherited style for an element, given:
/// - its specified declarations (already cascaded)
/// - an optional parent computed style.
///
/// Unknown properties and unparsable values are ignored, as in CSS.
pub fn compute_style(
    specified: &[(String, String)],
    parent: Option<&ComputedStyle>,
) -> ComputedStyle {
    // 1. Start from initial values
    let mut result = ComputedStyle::initial();

    // 2. Apply inheritance (per property)
    if let Some(p) = parent {
        result.font_size = p.font_size;
        result.font_family = p.font_family;
        result.line_height = p.line_height;
        result.letter_spacing = p.letter_spacing;
        result.text_indent = p.text_indent;
        result.text_transform = p.text_transform;
        result.white_space = p.white_space;
        result.overflow_wrap = p.overflow_wrap;
    }

    // 3. Apply specified declarations (override inherited/initial)
    for (name, value) in specified {
        let value = value.as_str();
        let bm = &mut result.box_metrics;

        match name.as_str() {
            "font-size" => {
                if let Some(len) = parse_length(value) {
                    result.font_size = len;
                }
            }
            "font-family" => {
                if let Some(family) = parse_font_family(value) {
                    result.font_family = family;
                }
            }
            "line-height" => {
                if let Some(lh) = parse_line_height(value) {
                    result.line_height = lh;
                }
            }
            "letter-spacing" => {
                if let Some(px) = parse_signed_px(value) {
                    result.letter_spacing = px;
                }
            }
            "text-indent" => {
                if let Some(px) = parse_signed_px(value) {
                    result.text_indent = px;
                }
            }
            "text-transform" => {
                if let Some(t) = parse_text_transform(value) {
                    result.text_transform = t;
                }
            }
            "white-space" => {
                if let Some(ws) = parse_white_space(value) {
                    result.white_space = ws;
                }
            }
            "overflow-wrap" | "word-wrap" => {
                if let Some(ow) = parse_overflow_wrap(value) {
                    result.overflow_wrap = ow;
                }
            }
            "box-sizing" | "-moz-box-sizing" | "-webkit-box-sizing" => {
                if let Some(bs) = parse_box_sizing(value) {
                    result.box_sizing = bs;
                }
            }

            // --- Padding (non-inherited, px only) ---
            "padding" => {
                if let Some([t, r, b, l]) = parse_box_shorthand(value, parse_non_negative_px) {
                    bm.padding_top = t;
                    bm.padding_right = r;
                    bm.padding_bottom = b;
                    bm.padding_left = l;
                }
            }
            "padding-top" => {
                if let Some(px) = parse_non_negative_px(value) {
                    bm.padding_top = px;
                }
            }
            "padding-right" => {
                if let Some(px) = parse_non_negative_px(value) {
                    bm.padding_right = px;
                }
            }
            "padding-bottom" => {
                if let Some(px) = parse_non_negative_px(value) {
                    bm.padding_bottom = px;
                }
            }
            "padding-left" => {
                if let Some(px) = parse_non_negative_px(value) {
                    bm.padding_left = px;
                }
            }

            // --- Borders (non-inherited, width only) ---
            "border" => {
                if let Some(px) = border_shorthand_width(value) {
                    bm.border_top = px;
                    bm.border_right = px;
                    bm.border_bottom = px;
                    bm.border_left = px;
                }
            }
            "border-width" => {
                if let Some([t, r, b, l]) = parse_box_shorthand(value, parse_border_width) {
                    bm.border_top = t;
                    bm.border_right = r;
                    bm.border_bottom = b;
                    bm.border_left = l;
                }
            }
            "border-top" | "border-top-width" => {
                if let Some(px) = border_shorthand_width(value) {
                    bm.border_top = px;
                }
            }
            "border-right" | "border-right-width" => {
                if let Some(px) = border_shorthand_width(value) {
                    bm.border_right = px;
                }
            }
            "border-bottom" | "border-bottom-width" => {
                if let Some(px) = border_shorthand_width(value) {
                    bm.border_bottom = px;
                }
            }
            "border-left" | "border-left-width" => {
                if let Some(px) = border_shorthand_width(value) {
                    bm.border_left = px;
                }
            }

            "width" => {
                if let Some(w) = optional_length(value, "auto") {
                    result.width = w;
                }
            }
            "height" => {
                if let Some(h) = optional_length(value, "auto") {
                    result.height = h;
                }
            }
            "min-height" => {
                if let Some(h) = optional_length(value, "auto") {
                    result.min_height = h;
                }
            }
            "max-height" => {
                if let Some(h) = optional_length(value, "none") {
                    result.max_height = h;
                }
            }
            "overflow" => {
                if let Some(o) = parse_overflow(value) {
                    result.overflow = o;
                }
            }
            _ => {
                // unknown declarations are ignored
            }
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decls(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(n, v)| (n.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn padding_shorthand_expands_like_css() {
        let style = compute_style(&decls(&[("padding", "1px 2px 3px")]), None);
        let bm = style.box_metrics;
        assert_eq!(
            (bm.padding_top, bm.padding_right, bm.padding_bottom, bm.padding_left),
            (1.0, 2.0, 3.0, 2.0)
        );
        assert_eq!(bm.padding_vertical(), 4.0);
    }

    #[test]
    fn longhand_after_shorthand_overrides() {
        let style = compute_style(
            &decls(&[("border-width", "2px"), ("border-bottom-width", "5px")]),
            None,
        );
        assert_eq!(style.box_metrics.border_vertical(), 7.0);
        assert_eq!(style.box_metrics.border_horizontal(), 4.0);
    }

    #[test]
    fn border_shorthand_reads_width_token() {
        let style = compute_style(&decls(&[("border", "1px solid #ccc")]), None);
        assert_eq!(style.box_metrics.border_top, 1.0);

        let style = compute_style(&decls(&[("border", "solid")]), None);
        assert_eq!(style.box_metrics.border_top, 3.0);

        let style = compute_style(&decls(&[("border", "none")]), None);
        assert_eq!(style.box_metrics.border_top, 0.0);
    }

    #[test]
    fn text_properties_inherit_but_box_does_not() {
        let parent = compute_style(
            &decls(&[
                ("font-size", "20px"),
                ("line-height", "1.5"),
                ("white-space", "pre-wrap"),
                ("padding", "4px"),
            ]),
            None,
        );
        let child = compute_style(&[], Some(&parent));
        assert_eq!(child.font_px(), 20.0);
        assert_eq!(child.line_height_px(), 30.0);
        assert_eq!(child.white_space, WhiteSpace::PreWrap);
        assert_eq!(child.box_metrics.padding_top, 0.0);
    }

    #[test]
    fn vendor_box_sizing_is_accepted() {
        let style = compute_style(&decls(&[("-moz-box-sizing", "border-box")]), None);
        assert_eq!(style.box_sizing, BoxSizing::BorderBox);
    }

    #[test]
    fn properties_without_metrics_are_ignored() {
        let style = compute_style(
            &decls(&[("font-weight", "bold"), ("text-rendering", "optimizeLegibility")]),
            None,
        );
        assert_eq!(style, ComputedStyle::initial());
    }

    #[test]
    fn max_height_none_resets() {
        let style = compute_style(
            &decls(&[("max-height", "50px"), ("max-height", "none")]),
            None,
        );
        assert_eq!(style.max_height, None);
    }
}
