mod breaker;
mod tokens;


use css::{ComputedStyle, OverflowWrap};

use crate::text::styled_width;
use crate::{Rectangle, TextMeasurer};

use breaker::break_word_prefix_end;
use tokens::{TextareaToken, tokenize_textarea_value};

/// Columns a tab advances by (CSS `tab-size` initial value).
const TAB_SIZE: f32 = 8.0;

// Widths within this tolerance of the available width still fit. Keeps
// accumulated float error from wrapping text that is exactly as wide as
// the content box.
const FIT_EPSILON: f32 = 0.01;

/// One line box of a laid-out textarea value.
#[derive(Clone, Debug, PartialEq)]
pub struct TextareaLine {
    /// Line box in content-box coordinates. `width` is the inline advance of
    /// the line's content (trailing spaces included).
    pub rect: Rectangle,
    /// Byte range of the value covered by this line (hard breaks excluded).
    pub source_range: (usize, usize),
}

/// Result of laying out a text control value inside a content box.
#[derive(Clone, Debug, PartialEq)]
pub struct TextareaLayout {
    pub lines: Vec<TextareaLine>,
    pub line_height: f32,
}

impl TextareaLayout {
    /// Height of the laid-out content. Never less than one line: an empty
    /// value still occupies a line box.
    pub fn content_height(&self) -> f32 {
        self.lines
            .last()
            .map(|l| l.rect.bottom().max(0.0))
            .unwrap_or(self.line_height)
            .max(self.line_height)
    }

    pub fn line_count(&self) -> usize {
        self.lines.len().max(1)
    }
}

struct LineCursor {
    lines: Vec<TextareaLine>,
    line_height: f32,
    x: f32,
    start_x: f32,
    has_content: bool,
    source_start: usize,
    source_end: usize,
}

impl LineCursor {
    fn new(line_height: f32, text_indent: f32) -> Self {
        Self {
            lines: Vec::new(),
            line_height,
            x: text_indent,
            start_x: text_indent,
            has_content: false,
            source_start: 0,
            source_end: 0,
        }
    }

    fn advance(&mut self, width: f32, source_range: (usize, usize)) {
        if !self.has_content {
            self.source_start = source_range.0;
        }
        self.x += width;
        self.has_content = true;
        self.source_end = source_range.1;
    }

    /// Close the current line. `next_start` is where the next line's source begins.
    fn flush(&mut self, next_start: usize) {
        let y = self.lines.len() as f32 * self.line_height;
        let (start, end) = if self.has_content {
            (self.source_start, self.source_end)
        } else {
            (self.source_start, self.source_start)
        };
        self.lines.push(TextareaLine {
            rect: Rectangle {
                x: self.start_x,
                y,
                width: (self.x - self.start_x).max(0.0),
                height: self.line_height,
            },
            source_range: (start, end),
        });

        // `text-indent` only applies to the first line.
        self.start_x = 0.0;
        self.x = 0.0;
        self.has_content = false;
        self.source_start = next_start;
        self.source_end = next_start;
    }
}

/// Lay out a text control value for the given content width.
///
/// This is what the browser does for the inside of a `<textarea>`: the
/// content box is `content_width` wide, text wraps per `white-space`, and long
/// words are split when `overflow-wrap` allows it. There is always at least
/// one line, and a trailing hard break opens an extra empty line, matching how
/// native controls report their scroll height.
pub fn layout_textarea_value(
    measurer: &dyn TextMeasurer,
    content_width: f32,
    style: &ComputedStyle,
    value: &str,
) -> TextareaLayout {
    let line_height = {
        let lh = measurer.line_height(style);
        if lh.is_finite() { lh.max(0.0) } else { 0.0 }
    };
    let max_x = if content_width.is_finite() {
        content_width.max(0.0) + FIT_EPSILON
    } else {
        f32::INFINITY
    };
    let wraps = style.white_space.wraps();
    let break_long_words = style.overflow_wrap != OverflowWrap::Normal;
    let preserve_spaces = style.white_space.preserves_spaces();

    let space_width = styled_width(measurer, style, " ");
    let tab_width = space_width * TAB_SIZE;

    let mut cursor = LineCursor::new(line_height, style.text_indent);

    for token in tokenize_textarea_value(value, style.white_space) {
        match token {
            TextareaToken::HardBreak { source_range } => {
                cursor.flush(source_range.1);
            }

            TextareaToken::Space { tab, source_range } => {
                // Collapsed whitespace never starts a line; preserved spaces
                // hang past the edge instead of wrapping.
                if !preserve_spaces && !cursor.has_content {
                    continue;
                }
                let width = if tab { tab_width } else { space_width };
                cursor.advance(width, source_range);
            }

            TextareaToken::Word { text, source_range } => {
                let mut remaining: &str = &text;
                let mut remaining_start = source_range.0;

                while !remaining.is_empty() {
                    let word_width = styled_width(measurer, style, remaining);
                    let fits = cursor.x + word_width <= max_x;
                    let remaining_range = (remaining_start, remaining_start + remaining.len());

                    if fits || !wraps {
                        cursor.advance(word_width, remaining_range);
                        break;
                    }

                    if cursor.has_content {
                        cursor.flush(remaining_start);
                        continue;
                    }

                    if !break_long_words {
                        // Overflows the content box; the next token wraps.
                        cursor.advance(word_width, remaining_range);
                        break;
                    }

                    let available_w = (max_x - cursor.x).max(0.0);
                    let split_end = break_word_prefix_end(measurer, style, remaining, available_w)
                        .clamp(1, remaining.len());
                    if split_end >= remaining.len() {
                        cursor.advance(word_width, remaining_range);
                        break;
                    }

                    let (prefix, rest) = remaining.split_at(split_end);
                    let prefix_width = styled_width(measurer, style, prefix);
                    cursor.advance(prefix_width, (remaining_start, remaining_start + split_end));
                    remaining_start += split_end;
                    remaining = rest;
                    cursor.flush(remaining_start);
                }
            }
        }
    }

    cursor.flush(value.len());

    TextareaLayout {
        lines: cursor.lines,
        line_height,
    }
}
