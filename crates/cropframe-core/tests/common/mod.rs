#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use image::{DynamicImage, Rgba, RgbaImage};

use cropframe_core::config::{EditorConfig, FrameLayout};
use cropframe_core::editor::{CropEditor, Hooks};
use cropframe_core::error::LoadErrorKind;
use cropframe_core::model::GeometryModel;

/// Solid-color RGBA image.
pub fn solid(width: u32, height: u32, color: [u8; 3]) -> RgbaImage {
    RgbaImage::from_pixel(width, height, Rgba([color[0], color[1], color[2], 255]))
}

/// Image whose outer `ring` pixels are `edge` and whose interior is `inner`.
pub fn framed(width: u32, height: u32, ring: u32, edge: [u8; 3], inner: [u8; 3]) -> RgbaImage {
    RgbaImage::from_fn(width, height, |x, y| {
        let on_ring = x < ring || y < ring || x >= width - ring || y >= height - ring;
        let c = if on_ring { edge } else { inner };
        Rgba([c[0], c[1], c[2], 255])
    })
}

pub fn dynamic(img: RgbaImage) -> DynamicImage {
    DynamicImage::ImageRgba8(img)
}

/// Encode an image as PNG bytes.
pub fn png_bytes(img: &RgbaImage) -> Vec<u8> {
    let mut buf = std::io::Cursor::new(Vec::new());
    img.write_to(&mut buf, image::ImageFormat::Png)
        .expect("encode test PNG");
    buf.into_inner()
}

/// Square 400x400 frame inside a 600x600 helper, default options.
pub fn square_frame() -> FrameLayout {
    FrameLayout::default()
}

/// Every hook invocation, in order.
#[derive(Clone, Debug, PartialEq)]
pub enum Event {
    Load,
    Change,
    Zoom,
    Position,
    ImageSize,
    Remove,
    Error(LoadErrorKind),
}

pub type EventLog = Rc<RefCell<Vec<Event>>>;

/// Hooks that append every invocation to a shared log.
pub fn recording_hooks() -> (Hooks, EventLog) {
    let log: EventLog = Rc::new(RefCell::new(Vec::new()));
    let push = |log: &EventLog, e: Event| {
        let log = log.clone();
        move |_: &GeometryModel| log.borrow_mut().push(e.clone())
    };
    let err_log = log.clone();
    let hooks = Hooks::new()
        .on_load(push(&log, Event::Load))
        .on_change(push(&log, Event::Change))
        .on_zoom_change(push(&log, Event::Zoom))
        .on_position_change(push(&log, Event::Position))
        .on_image_size_change(push(&log, Event::ImageSize))
        .on_remove(push(&log, Event::Remove))
        .on_error(move |kind| err_log.borrow_mut().push(Event::Error(kind)));
    (hooks, log)
}

/// Editor with default options and a recording hook set.
pub fn editor() -> (CropEditor, EventLog) {
    let (hooks, log) = recording_hooks();
    let editor = CropEditor::new(square_frame(), EditorConfig::default(), hooks)
        .expect("default config is valid");
    (editor, log)
}
