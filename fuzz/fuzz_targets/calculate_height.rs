#![no_main]

use autosize::{AutosizeContext, MeasurableElement, RowBounds};
use css::{BoxMetrics, BoxSizing, ComputedStyle, Length, LineHeight, OverflowWrap, WhiteSpace};
use input_core::InputId;
use libfuzzer_sys::fuzz_target;

struct FuzzTextarea {
    style: ComputedStyle,
    width: f32,
}

impl MeasurableElement for FuzzTextarea {
    fn input_id(&self) -> InputId {
        InputId::from_raw(1)
    }

    fn computed_style(&self) -> Option<ComputedStyle> {
        Some(self.style)
    }

    fn border_box_width(&self) -> Option<f32> {
        Some(self.width)
    }
}

fn rows(byte: u8) -> Option<u32> {
    match byte % 17 {
        0 => None,
        n => Some(u32::from(n)),
    }
}

fuzz_target!(|data: &[u8]| {
    let [min, max, flags, width, pad, rest @ ..] = data else {
        return;
    };
    let value = String::from_utf8_lossy(rest);

    let white_space = match flags & 0b11 {
        0 => WhiteSpace::Normal,
        1 => WhiteSpace::Pre,
        2 => WhiteSpace::PreWrap,
        _ => WhiteSpace::PreLine,
    };
    let el = FuzzTextarea {
        style: ComputedStyle {
            font_size: Length::Px(8.0 + f32::from(flags >> 4)),
            line_height: LineHeight::Number(1.0 + f32::from(flags >> 5) * 0.25),
            white_space,
            overflow_wrap: if flags & 0b100 != 0 {
                OverflowWrap::BreakWord
            } else {
                OverflowWrap::Normal
            },
            box_sizing: if flags & 0b1000 != 0 {
                BoxSizing::BorderBox
            } else {
                BoxSizing::ContentBox
            },
            box_metrics: BoxMetrics {
                padding_top: f32::from(pad & 0x0f),
                padding_bottom: f32::from(pad & 0x0f),
                padding_left: f32::from(pad >> 4),
                padding_right: f32::from(pad >> 4),
                border_top: 1.0,
                border_right: 1.0,
                border_bottom: 1.0,
                border_left: 1.0,
            },
            ..ComputedStyle::initial()
        },
        width: f32::from(*width) * 4.0,
    };
    let bounds = RowBounds::new(rows(*min), rows(*max));

    let mut ctx = AutosizeContext::headless();
    let first = ctx.calculate_height(Some(&el), &value, true, bounds);
    let second = ctx.calculate_height(Some(&el), &value, true, bounds);
    assert_eq!(first, second);

    let height = first.height.expect("measurable element");
    assert!(height.is_finite() && height >= 0.0, "{first:?}");
    if !bounds.is_inverted() {
        assert!(first.min_height <= height && height <= first.max_height, "{first:?}");
    } else {
        assert_eq!(height, first.max_height);
    }
    if bounds.min_rows.is_none() {
        assert_eq!(first.min_height, f32::NEG_INFINITY);
    }
    if bounds.max_rows.is_none() {
        assert_eq!(first.max_height, f32::INFINITY);
    }
});
