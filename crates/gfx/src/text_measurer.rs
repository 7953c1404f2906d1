use std::cell::RefCell;
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use css::{ComputedStyle, FontFamily, LineHeight};
use egui::{Color32, Context, FontId};
use layout::TextMeasurer;

/// `egui`-backed adapter for measuring text during layout.
///
/// egui loads fonts when a pass begins. Until the context has begun a pass
/// after this measurer was created (or had already completed one), every
/// metric is NaN so callers treat the text as unmeasurable.
pub struct EguiTextMeasurer {
    ctx: Context,
    fonts_ready: Arc<AtomicBool>,
    space_width_cache: RefCell<HashMap<(bool, u32), f32>>,
}

impl EguiTextMeasurer {
    pub fn new(ctx: &Context) -> Self {
        let fonts_ready = Arc::new(AtomicBool::new(ctx.cumulative_pass_nr() > 0));
        let flag = Arc::clone(&fonts_ready);
        ctx.on_begin_pass(
            "EguiTextMeasurer",
            Arc::new(move |_: &Context| flag.store(true, Ordering::Relaxed)),
        );
        Self {
            ctx: ctx.clone(),
            fonts_ready,
            space_width_cache: RefCell::new(HashMap::new()),
        }
    }

    pub fn context(&self) -> &Context {
        &self.ctx
    }

    pub fn fonts_ready(&self) -> bool {
        self.fonts_ready.load(Ordering::Relaxed)
    }
}

fn font_id(style: &ComputedStyle) -> FontId {
    let px = style.font_px().max(0.0);
    match style.font_family {
        FontFamily::Monospace => FontId::monospace(px),
        FontFamily::SansSerif | FontFamily::Serif => FontId::proportional(px),
    }
}

impl TextMeasurer for EguiTextMeasurer {
    fn measure(&self, text: &str, style: &ComputedStyle) -> f32 {
        if !self.fonts_ready() {
            return f32::NAN;
        }
        let font_id = font_id(style);
        // Color does not affect metrics.
        let color = Color32::BLACK;

        if text == " " {
            let key = (
                style.font_family == FontFamily::Monospace,
                font_id.size.to_bits(),
            );
            if let Some(w) = self.space_width_cache.borrow().get(&key).copied() {
                return w;
            }

            // A lone space lays out to an empty rect, NBSP does not.
            let nbsp = "\u{00A0}";
            let w_nbsp = self.ctx.fonts(|f| {
                f.layout_no_wrap(nbsp.to_owned(), font_id.clone(), color)
                    .rect
                    .width()
            });

            let w = if w_nbsp.is_finite() && w_nbsp > 0.0 {
                w_nbsp
            } else {
                let w_with = self.ctx.fonts(|f| {
                    f.layout_no_wrap(format!("x{nbsp}x"), font_id.clone(), color)
                        .rect
                        .width()
                });
                let w_without = self.ctx.fonts(|f| {
                    f.layout_no_wrap("xx".to_owned(), font_id.clone(), color)
                        .rect
                        .width()
                });
                let w = (w_with - w_without).max(0.0);

                if w.is_finite() && w > 0.0 {
                    w
                } else {
                    (font_id.size * 0.33).max(1.0)
                }
            };

            self.space_width_cache.borrow_mut().insert(key, w);
            return w;
        }

        self.ctx.fonts(|f| {
            f.layout_no_wrap(text.to_owned(), font_id, color)
                .rect
                .width()
        })
    }

    /// `line-height: normal` uses the font's own row height; explicit values
    /// resolve against the font size as usual.
    fn line_height(&self, style: &ComputedStyle) -> f32 {
        if !self.fonts_ready() {
            return f32::NAN;
        }
        match style.line_height {
            LineHeight::Normal => {
                let font_id = font_id(style);
                let row = self.ctx.fonts(|f| f.row_height(&font_id));
                if row.is_finite() && row > 0.0 {
                    row
                } else {
                    style.line_height_px()
                }
            }
            LineHeight::Number(_) | LineHeight::Px(_) => style.line_height_px(),
        }
    }
}
