/// CSS Length value, currently only supports `px`,
/// but keep this extensible for `em`, `%`, etc.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Length {
    Px(f32),
}

impl Length {
    #[inline]
    pub fn to_px(self) -> f32 {
        match self {
            Length::Px(px) => px,
        }
    }
}

/// CSS `box-sizing`. Initial: `content-box`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BoxSizing {
    #[default]
    ContentBox,
    BorderBox,
}

/// CSS `white-space`. Initial: `normal` (the textarea UA rule sets `pre-wrap`).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WhiteSpace {
    #[default]
    Normal,
    Pre,
    PreWrap,
    PreLine,
    NoWrap,
}

impl WhiteSpace {
    /// Whether runs of spaces/tabs are kept as-is.
    pub fn preserves_spaces(self) -> bool {
        matches!(self, WhiteSpace::Pre | WhiteSpace::PreWrap)
    }

    /// Whether `\n` in the source forces a line break.
    pub fn preserves_newlines(self) -> bool {
        matches!(
            self,
            WhiteSpace::Pre | WhiteSpace::PreWrap | WhiteSpace::PreLine
        )
    }

    /// Whether lines may soft-wrap at the available width.
    pub fn wraps(self) -> bool {
        !matches!(self, WhiteSpace::Pre | WhiteSpace::NoWrap)
    }
}

/// CSS `overflow-wrap` (legacy alias `word-wrap`).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OverflowWrap {
    #[default]
    Normal,
    BreakWord,
    Anywhere,
}

/// CSS `text-transform`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TextTransform {
    #[default]
    None,
    Uppercase,
    Lowercase,
    Capitalize,
}

/// Generic font family. Named families are folded into the generic they
/// fall back to; the measurers only distinguish these three.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FontFamily {
    #[default]
    SansSerif,
    Serif,
    Monospace,
}

/// CSS `line-height`. `Number` is a multiplier of the font size.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum LineHeight {
    #[default]
    Normal,
    Number(f32),
    Px(f32),
}

impl LineHeight {
    /// Multiplier used for `line-height: normal`.
    pub const NORMAL_FACTOR: f32 = 1.2;

    pub fn resolve(self, font_px: f32) -> f32 {
        match self {
            LineHeight::Normal => font_px * Self::NORMAL_FACTOR,
            LineHeight::Number(n) => font_px * n,
            LineHeight::Px(px) => px,
        }
    }
}

/// CSS `overflow` (both axes).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Overflow {
    #[default]
    Visible,
    Hidden,
    Scroll,
    Auto,
}

/// Parse a positive length. Used for `font-size`.
/// For now we only support `NNpx` (e.g., "16px", "12.5px").
pub fn parse_length(value: &str) -> Option<Length> {
    let v = value.trim();

    if let Some(px_str) = v.strip_suffix("px") {
        let num = px_str.trim().parse::<f32>().ok()?;
        if num.is_finite() && num > 0.0 {
            return Some(Length::Px(num));
        }
    }
    // Future: em/rem/%/pt/etc
    None
}

/// Parse a length that may be zero (paddings, borders, widths).
/// A bare `0` is accepted without a unit, as in CSS.
pub fn parse_non_negative_px(value: &str) -> Option<f32> {
    let v = value.trim();
    if v == "0" {
        return Some(0.0);
    }
    let num = v.strip_suffix("px")?.trim().parse::<f32>().ok()?;
    (num.is_finite() && num >= 0.0).then_some(num)
}

/// Parse a signed length (`letter-spacing`, `text-indent`). `normal` is zero.
pub fn parse_signed_px(value: &str) -> Option<f32> {
    let v = value.trim();
    if v.eq_ignore_ascii_case("normal") || v == "0" {
        return Some(0.0);
    }
    let num = v.strip_suffix("px")?.trim().parse::<f32>().ok()?;
    num.is_finite().then_some(num)
}

pub fn parse_line_height(value: &str) -> Option<LineHeight> {
    let v = value.trim().to_ascii_lowercase();
    if v == "normal" {
        return Some(LineHeight::Normal);
    }
    if let Some(px) = v.strip_suffix("px") {
        let px = px.trim().parse::<f32>().ok()?;
        return (px.is_finite() && px >= 0.0).then_some(LineHeight::Px(px));
    }
    let n = v.parse::<f32>().ok()?;
    (n.is_finite() && n >= 0.0).then_some(LineHeight::Number(n))
}

/// Border width keywords resolve the way major engines do.
pub fn parse_border_width(value: &str) -> Option<f32> {
    match value.trim().to_ascii_lowercase().as_str() {
        "thin" => Some(1.0),
        "medium" => Some(3.0),
        "thick" => Some(5.0),
        other => parse_non_negative_px(other),
    }
}

pub fn parse_box_sizing(value: &str) -> Option<BoxSizing> {
    match value.trim().to_ascii_lowercase().as_str() {
        "content-box" => Some(BoxSizing::ContentBox),
        "border-box" => Some(BoxSizing::BorderBox),
        _ => None,
    }
}

pub fn parse_white_space(value: &str) -> Option<WhiteSpace> {
    match value.trim().to_ascii_lowercase().as_str() {
        "normal" => Some(WhiteSpace::Normal),
        "pre" => Some(WhiteSpace::Pre),
        "pre-wrap" => Some(WhiteSpace::PreWrap),
        "pre-line" => Some(WhiteSpace::PreLine),
        "nowrap" => Some(WhiteSpace::NoWrap),
        _ => None,
    }
}

pub fn parse_overflow_wrap(value: &str) -> Option<OverflowWrap> {
    match value.trim().to_ascii_lowercase().as_str() {
        "normal" => Some(OverflowWrap::Normal),
        "break-word" => Some(OverflowWrap::BreakWord),
        "anywhere" => Some(OverflowWrap::Anywhere),
        _ => None,
    }
}

pub fn parse_text_transform(value: &str) -> Option<TextTransform> {
    match value.trim().to_ascii_lowercase().as_str() {
        "none" => Some(TextTransform::None),
        "uppercase" => Some(TextTransform::Uppercase),
        "lowercase" => Some(TextTransform::Lowercase),
        "capitalize" => Some(TextTransform::Capitalize),
        _ => None,
    }
}

pub fn parse_overflow(value: &str) -> Option<Overflow> {
    match value.trim().to_ascii_lowercase().as_str() {
        "visible" => Some(Overflow::Visible),
        "hidden" => Some(Overflow::Hidden),
        "scroll" => Some(Overflow::Scroll),
        "auto" => Some(Overflow::Auto),
        _ => None,
    }
}

/// `font-family` is a fallback list; the first entry we can classify wins.
pub fn parse_font_family(value: &str) -> Option<FontFamily> {
    value.split(',').find_map(|name| {
        let name = name
            .trim()
            .trim_matches(|c| c == '"' || c == '\'')
            .to_ascii_lowercase();
        match name.as_str() {
            "monospace" | "ui-monospace" => Some(FontFamily::Monospace),
            "serif" | "ui-serif" => Some(FontFamily::Serif),
            "sans-serif" | "ui-sans-serif" | "system-ui" => Some(FontFamily::SansSerif),
            n if n.contains("mono") || n.contains("courier") || n.contains("consol") => {
                Some(FontFamily::Monospace)
            }
            n if n.contains("times") || n.contains("georgia") => Some(FontFamily::Serif),
            _ => None,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_negative_px_accepts_unitless_zero() {
        assert_eq!(parse_non_negative_px("0"), Some(0.0));
        assert_eq!(parse_non_negative_px(" 2.5px "), Some(2.5));
        assert_eq!(parse_non_negative_px("-1px"), None);
        assert_eq!(parse_non_negative_px("3em"), None);
    }

    #[test]
    fn line_height_forms() {
        assert_eq!(parse_line_height("normal"), Some(LineHeight::Normal));
        assert_eq!(parse_line_height("20px"), Some(LineHeight::Px(20.0)));
        assert_eq!(parse_line_height("1.5"), Some(LineHeight::Number(1.5)));
        assert_eq!(parse_line_height("-2"), None);

        assert_eq!(LineHeight::Normal.resolve(10.0), 12.0);
        assert_eq!(LineHeight::Number(2.0).resolve(10.0), 20.0);
        assert_eq!(LineHeight::Px(17.0).resolve(10.0), 17.0);
    }

    #[test]
    fn white_space_modes() {
        assert!(WhiteSpace::PreWrap.preserves_spaces());
        assert!(WhiteSpace::PreWrap.wraps());
        assert!(!WhiteSpace::Pre.wraps());
        assert!(WhiteSpace::PreLine.preserves_newlines());
        assert!(!WhiteSpace::PreLine.preserves_spaces());
        assert!(!WhiteSpace::Normal.preserves_newlines());
    }

    #[test]
    fn font_family_takes_first_known_entry() {
        assert_eq!(
            parse_font_family("\"Fira Mono\", serif"),
            Some(FontFamily::Monospace)
        );
        assert_eq!(
            parse_font_family("Unknown, serif"),
            Some(FontFamily::Serif)
        );
        assert_eq!(parse_font_family("Unknown"), None);
    }

    #[test]
    fn border_width_keywords() {
        assert_eq!(parse_border_width("thin"), Some(1.0));
        assert_eq!(parse_border_width("medium"), Some(3.0));
        assert_eq!(parse_border_width("4px"), Some(4.0));
    }
}
