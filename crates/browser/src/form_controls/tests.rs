use super::*;
use crate::dom::{Document, TextareaAttrs};
use autosize::{AutosizeContext, MeasurableElement, RowBounds};
use std::cell::RefCell;
use std::rc::Rc;

#[test]
fn rows_take_precedence_over_min_rows() {
    let props = AutosizeProps::new().rows(4).min_rows(2).max_rows(6);
    assert_eq!(props.row_bounds(), RowBounds::new(Some(4), Some(6)));

    let props = AutosizeProps::new().min_rows(2);
    assert_eq!(props.row_bounds(), RowBounds::new(Some(2), None));
}

#[test]
fn zero_rows_count_as_unset() {
    let props = AutosizeProps::new().rows(0).min_rows(3).max_rows(0);
    assert_eq!(props.row_bounds(), RowBounds::new(Some(3), None));
    assert_eq!(AutosizeProps::default().row_bounds(), RowBounds::UNBOUNDED);
}

#[test]
fn measured_text_falls_back_to_placeholder() {
    assert_eq!(measured_text("typed", Some("hint")), "typed");
    assert_eq!(measured_text("", Some("hint")), "hint");
    assert_eq!(measured_text("", Some("")), "");
    assert_eq!(measured_text("", None), "");
}

#[test]
fn callback_fires_only_when_height_changes() {
    let mut doc = Document::new(400.0);
    let id = doc.insert_textarea(TextareaAttrs::default());
    let mut ctx = AutosizeContext::headless();

    let calls = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&calls);
    let mut control = TextareaAutosize::new(AutosizeProps::new())
        .with_height_callback(move |prev, next| sink.borrow_mut().push((prev, next)));
    control.attach(id);

    let measure = |control: &mut TextareaAutosize, ctx: &mut AutosizeContext, text: &str| {
        let view = doc.measurable(id);
        control.resize(ctx, view.as_ref().map(|v| v as &dyn MeasurableElement), text)
    };

    assert!(measure(&mut control, &mut ctx, "one"));
    assert!(!measure(&mut control, &mut ctx, "two"));
    assert!(measure(&mut control, &mut ctx, "one\ntwo"));

    let calls = calls.borrow();
    assert_eq!(calls.len(), 2);
    assert_eq!(calls[0].0, None);
    assert_eq!(calls[1].0, calls[0].1);
    assert!(calls[1].1 > calls[0].1);
}

#[test]
fn applied_style_merges_author_max_height() {
    let mut doc = Document::new(400.0);
    let id = doc.insert_textarea(TextareaAttrs::default());
    let mut ctx = AutosizeContext::headless();
    let mut control = TextareaAutosize::new(AutosizeProps::new().max_rows(2));
    control.attach(id);

    let view = doc.measurable(id);
    control.resize(
        &mut ctx,
        view.as_ref().map(|v| v as &dyn MeasurableElement),
        "1\n2\n3\n4",
    );
    let layout = control.layout();
    let height = layout.height.unwrap();
    assert_eq!(height, layout.max_height);

    // Measured max wins over a smaller author max; height equals it, so
    // nothing overflows.
    let applied = control.applied_style(Some(1.0));
    assert_eq!(applied.max_height, layout.max_height);
    assert!(!applied.overflow_hidden);

    // A larger author max wins.
    let applied = control.applied_style(Some(height * 10.0));
    assert_eq!(applied.max_height, height * 10.0);
    assert_eq!(applied.height, height);
}

#[test]
fn overflow_stays_visible_while_height_fits() {
    let fresh = TextareaAutosize::new(AutosizeProps::new());
    // Never measured: height renders as 0 and nothing is clipped.
    let applied = fresh.applied_style(None);
    assert_eq!(applied.height, 0.0);
    assert_eq!(applied.max_height, f32::INFINITY);
    assert!(!applied.overflow_hidden);

    let mut doc = Document::new(400.0);
    let id = doc.insert_textarea(TextareaAttrs::default());
    let mut ctx = AutosizeContext::headless();
    let view = doc.measurable(id);
    // Inverted bounds: max wins, and the reported min is above it.
    let mut control = TextareaAutosize::new(AutosizeProps::new().min_rows(5).max_rows(1));
    control.attach(id);
    control.resize(&mut ctx, view.as_ref().map(|v| v as &dyn MeasurableElement), "x");
    let layout = control.layout();
    assert_eq!(layout.height, Some(layout.max_height));
    assert!(layout.min_height > layout.max_height);
    assert!(!control.applied_style(None).overflow_hidden);
}

#[test]
fn pass_through_without_handle_is_inert() {
    let mut doc = Document::new(400.0);
    let id = doc.insert_textarea(TextareaAttrs::with_value("kept"));
    let control = TextareaAutosize::new(AutosizeProps::new());

    assert_eq!(control.value(&doc), None);
    assert_eq!(control.selection_start(&doc), None);
    control.set_value(&mut doc, "changed");
    control.focus(&mut doc);
    let el = doc.textarea(id).unwrap();
    assert_eq!(el.state().value(), "kept");
    assert!(!el.state().is_focused());
}

#[test]
fn pass_through_delegates_to_element() {
    let mut doc = Document::new(400.0);
    let id = doc.insert_textarea(TextareaAttrs::with_value("hello world"));
    let mut control = TextareaAutosize::new(AutosizeProps::new());
    control.attach(id);

    control.set_selection_start(&mut doc, 6);
    assert_eq!(control.selection_start(&doc), Some(6));
    assert_eq!(control.selection_end(&doc), Some(11));
    control.set_selection_end(&mut doc, 8);
    assert_eq!(control.selection_end(&doc), Some(8));

    control.set_value(&mut doc, "bye");
    assert_eq!(control.value(&doc), Some("bye"));

    control.focus(&mut doc);
    assert!(doc.textarea(id).unwrap().state().is_focused());
    control.blur(&mut doc);
    assert!(!doc.textarea(id).unwrap().state().is_focused());

    assert_eq!(control.detach(), Some(id));
    assert_eq!(control.value(&doc), None);
}
