use browser::{AutosizeProps, Page, PageError, TextareaAttrs, TextareaAutosize};
use egui::RawInput;
use input_core::InputId;
use std::cell::RefCell;
use std::rc::Rc;

const CSS: &str = "textarea { font-family: sans-serif; font-size: 10px; line-height: 20px; padding: 4px; border: 1px solid; }";
const TALL_CSS: &str = "textarea { font-family: sans-serif; font-size: 10px; line-height: 40px; padding: 4px; border: 1px solid; }";

fn page() -> Page {
    let mut page = Page::new(110.0);
    page.set_stylesheet(CSS);
    page
}

fn height(page: &Page, id: InputId) -> f32 {
    page.applied_style(id).expect("mounted").height
}

#[test]
fn mount_sizes_and_registers_for_resize() {
    let mut page = page();
    let id = page.mount(
        TextareaAttrs::with_value("one\ntwo"),
        TextareaAutosize::new(AutosizeProps::new()),
    );
    assert_eq!(height(&page, id), 40.0);
    assert!(page.resize_listeners().contains(id));
}

#[test]
fn unmount_removes_listener_and_element() {
    let mut page = page();
    let id = page.mount(
        TextareaAttrs::default(),
        TextareaAutosize::new(AutosizeProps::new().cached()),
    );
    assert_eq!(page.autosize().style_cache().len(), 1);

    let control = page.unmount(id).expect("mounted");
    assert_eq!(control.handle(), None);
    assert!(page.resize_listeners().is_empty());
    assert!(page.document().is_empty());
    assert!(page.autosize().style_cache().is_empty());

    assert_eq!(page.set_value(id, "x"), Err(PageError::UnknownControl(id)));
    assert_eq!(page.unmount(id).err(), Some(PageError::UnknownControl(id)));
    // Resizing after unmount touches nothing.
    page.resize_viewport(50.0);
}

#[test]
fn value_changes_drive_height_and_callback() {
    let mut page = page();
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    let id = page.mount(
        TextareaAttrs::default(),
        TextareaAutosize::new(AutosizeProps::new())
            .with_height_callback(move |_, next| sink.borrow_mut().push(next)),
    );

    assert_eq!(page.set_value(id, "a\nb\nc"), Ok(true));
    assert_eq!(height(&page, id), 60.0);
    // Same value: nothing to do.
    assert_eq!(page.set_value(id, "a\nb\nc"), Ok(false));
    // Different value, same height: no callback.
    assert_eq!(page.set_value(id, "x\ny\nz"), Ok(true));
    assert_eq!(page.set_value(id, "x"), Ok(true));

    assert_eq!(*seen.borrow(), vec![Some(20.0), Some(60.0), Some(20.0)]);
}

#[test]
fn resize_with_same_value_repeats_last_result() {
    let mut page = page();
    let id = page.mount(
        TextareaAttrs::with_value("a sentence long enough to wrap twice over here"),
        TextareaAutosize::new(AutosizeProps::new().min_rows(1).max_rows(5).cached()),
    );
    let before = page.control(id).unwrap().layout();
    page.resize_viewport(110.0);
    assert_eq!(page.control(id).unwrap().layout(), before);
}

#[test]
fn narrower_viewport_rewraps_even_with_cached_style() {
    let mut page = page();
    let id = page.mount(
        TextareaAttrs::with_value("aaaaaa aaaaaa aaaaaa aaaaaa"),
        TextareaAutosize::new(AutosizeProps::new().cached()),
    );
    assert_eq!(height(&page, id), 40.0);
    page.resize_viewport(60.0);
    assert_eq!(height(&page, id), 80.0);
}

#[test]
fn cached_style_goes_stale_until_cleared() {
    let mut page = page();
    let cached = page.mount(
        TextareaAttrs::with_value("x"),
        TextareaAutosize::new(AutosizeProps::new().cached()),
    );
    let live = page.mount(
        TextareaAttrs::with_value("x"),
        TextareaAutosize::new(AutosizeProps::new()),
    );
    assert_eq!(height(&page, cached), 20.0);
    assert_eq!(height(&page, live), 20.0);

    page.set_stylesheet(TALL_CSS);
    page.resize_viewport(110.0);
    assert_eq!(height(&page, cached), 20.0);
    assert_eq!(height(&page, live), 40.0);

    page.clear_style_cache();
    page.resize_viewport(110.0);
    assert_eq!(height(&page, cached), 40.0);
}

#[test]
fn hidden_element_degrades_to_last_row_height() {
    let mut page = page();
    let id = page.mount(
        TextareaAttrs::with_value("1\n2\n3"),
        TextareaAutosize::new(AutosizeProps::new().min_rows(2)),
    );
    assert_eq!(height(&page, id), 60.0);

    page.hide(id).unwrap();
    page.resize_viewport(200.0);
    let layout = page.control(id).unwrap().layout();
    assert_eq!(layout.height, Some(20.0));
    assert_eq!(layout.min_height, f32::NEG_INFINITY);
    assert_eq!(layout.max_height, f32::INFINITY);

    page.show(id).unwrap();
    page.resize_viewport(110.0);
    assert_eq!(height(&page, id), 60.0);

    let missing = InputId::from_raw(404);
    assert_eq!(page.hide(missing), Err(PageError::UnknownControl(missing)));
}

#[test]
fn hidden_element_keeps_its_own_row_height() {
    let mut page = Page::new(110.0);
    page.set_stylesheet(
        "textarea { font-size: 10px; line-height: 20px; padding: 4px; border: 1px solid; } \
         .tall { line-height: 40px; }",
    );
    let short = page.mount(
        TextareaAttrs::with_value("x"),
        TextareaAutosize::new(AutosizeProps::new()),
    );
    let tall = page.mount(
        TextareaAttrs {
            classes: vec!["tall".into()],
            ..TextareaAttrs::with_value("x")
        },
        TextareaAutosize::new(AutosizeProps::new()),
    );
    assert_eq!(height(&page, short), 20.0);
    assert_eq!(height(&page, tall), 40.0);

    // The tall control is measured after the short one on every resize.
    page.hide(short).unwrap();
    page.resize_viewport(120.0);
    assert_eq!(page.control(short).unwrap().layout().height, Some(20.0));
    assert_eq!(height(&page, tall), 40.0);

    // Unmounting forgets the row height along with the cached style.
    page.unmount(short).unwrap();
    assert_eq!(page.autosize().calculator().last_single_row_height(short), None);
    assert_eq!(page.autosize().calculator().last_single_row_height(tall), Some(40.0));
}

#[test]
fn pass_through_accessors() {
    let mut page = page();
    let id = page.mount(
        TextareaAttrs::with_value("hello"),
        TextareaAutosize::new(AutosizeProps::new()),
    );
    assert_eq!(page.value(id), Some("hello"));
    assert_eq!(page.selection_start(id), Some(5));

    page.set_selection_start(id, 1).unwrap();
    page.set_selection_end(id, 3).unwrap();
    assert_eq!((page.selection_start(id), page.selection_end(id)), (Some(1), Some(3)));

    page.focus(id).unwrap();
    assert!(page.is_focused(id));
    page.blur(id).unwrap();
    assert!(!page.is_focused(id));

    // A direct write does not re-measure.
    page.write_value(id, "a\nb\nc\nd").unwrap();
    assert_eq!(page.value(id), Some("a\nb\nc\nd"));
    assert_eq!(height(&page, id), 20.0);

    let missing = InputId::from_raw(404);
    assert_eq!(page.value(missing), None);
    assert!(page.focus(missing).is_err());
}

#[test]
fn placeholder_sizes_empty_textarea() {
    let mut page = page();
    let id = page.mount(
        TextareaAttrs {
            placeholder: Some("line one\nline two\nline three".into()),
            ..TextareaAttrs::default()
        },
        TextareaAutosize::new(AutosizeProps::new()),
    );
    assert_eq!(height(&page, id), 60.0);
    page.set_value(id, "typed").unwrap();
    assert_eq!(height(&page, id), 20.0);
}

#[test]
fn egui_backed_page_grows_with_content() {
    let ctx = egui::Context::default();
    let mut page = Page::with_egui(300.0, &ctx);
    page.set_stylesheet("textarea { font-size: 14px; line-height: 18px; }");

    // No frame has run yet, so egui has no fonts: the mount degrades.
    let id = page.mount(
        TextareaAttrs::with_value("one"),
        TextareaAutosize::new(AutosizeProps::new().max_rows(3)),
    );
    let layout = page.control(id).unwrap().layout();
    assert_eq!(layout.height, Some(0.0));
    assert_eq!(layout.max_height, f32::INFINITY);

    let _ = ctx.run(RawInput::default(), |_| {
        page.resize_viewport(300.0);
        assert_eq!(height(&page, id), 18.0);

        page.set_value(id, "one\ntwo").unwrap();
        assert_eq!(height(&page, id), 36.0);

        page.set_value(id, "1\n2\n3\n4\n5").unwrap();
        assert_eq!(height(&page, id), 54.0);
    });
}
