use css::ComputedStyle;

use crate::TextMeasurer;
use crate::text::styled_width;

/// Byte length of the longest prefix of `word` whose styled width is at most
/// `available`, cut on a char boundary.
///
/// Splits an unbreakable run for `overflow-wrap: break-word | anywhere`.
/// The first character is always taken, even if it alone is wider than
/// `available`, so every call consumes input. Returns 0 only for an empty
/// `word`.
pub(super) fn break_word_prefix_end(
    measurer: &dyn TextMeasurer,
    style: &ComputedStyle,
    word: &str,
    available: f32,
) -> usize {
    let Some(first) = word.chars().next() else {
        return 0;
    };
    let available = available.max(0.0);
    let fits = |end: usize| styled_width(measurer, style, &word[..end]) <= available;

    // Prefix widths grow with length, so bisect over the char count.
    // Invariant: the first `lo` chars fit (or `lo == 1`), `hi` chars do not.
    let char_count = word.chars().count();
    let end_of = |chars: usize| {
        word.char_indices()
            .nth(chars)
            .map_or(word.len(), |(idx, _)| idx)
    };

    if fits(word.len()) {
        return word.len();
    }
    let (mut lo, mut hi) = (1usize, char_count);
    while hi - lo > 1 {
        let mid = lo + (hi - lo) / 2;
        if fits(end_of(mid)) {
            lo = mid;
        } else {
            hi = mid;
        }
    }

    if lo == 1 && !fits(first.len_utf8()) {
        return first.len_utf8();
    }
    end_of(lo)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FixedAdvanceMeasurer;
    use css::Length;

    #[test]
    fn finds_longest_fitting_prefix() {
        let m = FixedAdvanceMeasurer::new();
        let style = ComputedStyle {
            font_size: Length::Px(20.0),
            ..ComputedStyle::initial()
        };
        // 10px per char.
        assert_eq!(break_word_prefix_end(&m, &style, "abcdefgh", 35.0), 3);
        assert_eq!(break_word_prefix_end(&m, &style, "abc", 1000.0), 3);
        assert_eq!(break_word_prefix_end(&m, &style, "abcd", 40.0), 4);
    }

    #[test]
    fn cuts_on_char_boundaries() {
        let m = FixedAdvanceMeasurer::new();
        let style = ComputedStyle {
            font_size: Length::Px(20.0),
            ..ComputedStyle::initial()
        };
        // Each of these is one char of 2 or 3 bytes.
        assert_eq!(break_word_prefix_end(&m, &style, "ééé", 25.0), 4);
        assert_eq!(break_word_prefix_end(&m, &style, "€€€", 10.0), 3);
    }

    #[test]
    fn always_makes_progress() {
        let m = FixedAdvanceMeasurer::new();
        let style = ComputedStyle::initial();
        assert_eq!(break_word_prefix_end(&m, &style, "éa", 0.0), 2);
        assert_eq!(break_word_prefix_end(&m, &style, "", 10.0), 0);
    }
}
