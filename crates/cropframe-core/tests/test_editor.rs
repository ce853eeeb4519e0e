mod common;

use approx::assert_abs_diff_eq;

use cropframe_core::config::{EditorConfig, FrameLayout, ImageLimits};
use cropframe_core::editor::{CropEditor, Hooks, LoadOutcome, LoadState};
use cropframe_core::error::{CropFrameError, LoadErrorKind};
use cropframe_core::model::GeometryModel;
use cropframe_core::render::{to_data_url, ExportFormat};

use common::{dynamic, editor, framed, png_bytes, recording_hooks, solid, Event, EventLog};

/// Limits scaled down so test images stay small: normalize into 100x100.
fn small_config() -> EditorConfig {
    EditorConfig {
        image: ImageLimits {
            min_width: 10,
            min_height: 10,
            max_width: 100,
            max_height: 100,
        },
        ..Default::default()
    }
}

fn small_editor() -> (CropEditor, EventLog) {
    let (hooks, log) = recording_hooks();
    let editor = CropEditor::new(FrameLayout::centered(40, 40, 10), small_config(), hooks)
        .expect("valid config");
    (editor, log)
}

/// Load a 200x100 image: normalized 100x50, shown at 80x40 from (-20, 0).
fn load_wide(editor: &mut CropEditor, color: [u8; 3]) {
    let ticket = editor.begin_load();
    let outcome = editor
        .complete_load(ticket, Ok(dynamic(solid(200, 100, color))))
        .expect("load succeeds");
    assert_eq!(outcome, LoadOutcome::Loaded);
}

fn decode_png(bytes: &[u8]) -> image::RgbaImage {
    image::load_from_memory(bytes).expect("valid PNG").to_rgba8()
}

// ---------------------------------------------------------------------------
// Loading
// ---------------------------------------------------------------------------

#[test]
fn test_round_trip_default_config() {
    let (mut editor, log) = editor();
    let ticket = editor.begin_load();
    assert_eq!(editor.state(), LoadState::Loading);

    editor
        .complete_load(ticket, Ok(dynamic(solid(2000, 1000, [30, 60, 90]))))
        .unwrap();
    assert_eq!(editor.state(), LoadState::Loaded);

    let m = editor.model();
    assert_eq!(m.original_width, 1000.0);
    assert_abs_diff_eq!(m.original_height, 500.0, epsilon = 1e-9);
    assert_abs_diff_eq!(m.zoom, 0.8, epsilon = 1e-12);
    assert_eq!(m.height, 400.0);
    assert_eq!(m.background_color, [30, 60, 90]);
    assert_abs_diff_eq!(editor.zoom_range().min, 0.4, epsilon = 1e-12);

    let out = decode_png(&editor.export_crop(ExportFormat::Png, None).unwrap());
    assert_eq!(out.dimensions(), (400, 400));
    assert_eq!(out.get_pixel(200, 200).0, [30, 60, 90, 255]);

    assert_eq!(*log.borrow(), vec![Event::Change, Event::Load]);
}

#[test]
fn test_background_comes_from_image_border() {
    let (mut editor, _) = small_editor();
    let ticket = editor.begin_load();
    editor
        .complete_load(
            ticket,
            Ok(dynamic(framed(200, 100, 12, [200, 10, 10], [0, 0, 0]))),
        )
        .unwrap();
    // Sampled at the normalized 100x50 size, where the 12px ring becomes 6px.
    assert_eq!(editor.model().background_color, [200, 10, 10]);
}

#[test]
fn test_below_minimum_size_is_rejected() {
    let (mut editor, log) = editor();
    let ticket = editor.begin_load();
    let err = editor
        .complete_load(ticket, Ok(dynamic(solid(349, 1000, [0, 0, 0]))))
        .unwrap_err();

    assert_eq!(err.kind(), LoadErrorKind::ImageSize);
    assert_eq!(editor.state(), LoadState::Error(LoadErrorKind::ImageSize));
    assert_eq!(editor.model(), GeometryModel::default());
    assert_eq!(*log.borrow(), vec![Event::Error(LoadErrorKind::ImageSize)]);
}

#[test]
fn test_undecodable_bytes_report_unknown() {
    let (mut editor, log) = small_editor();
    let err = editor.load_from_bytes(b"not an image", "image/png").unwrap_err();

    assert_eq!(err.kind(), LoadErrorKind::Unknown);
    assert_eq!(editor.state(), LoadState::Error(LoadErrorKind::Unknown));
    assert_eq!(*log.borrow(), vec![Event::Error(LoadErrorKind::Unknown)]);
}

#[test]
fn test_non_image_mime_rejected_before_decode() {
    let (mut editor, log) = small_editor();
    let png = png_bytes(&solid(20, 20, [1, 1, 1]));
    let err = editor.load_from_bytes(&png, "text/plain").unwrap_err();

    assert!(matches!(err, CropFrameError::UnsupportedMime(ref m) if m == "text/plain"));
    assert_eq!(editor.state(), LoadState::Error(LoadErrorKind::FileType));
    assert_eq!(*log.borrow(), vec![Event::Error(LoadErrorKind::FileType)]);
}

#[test]
fn test_non_image_mime_keeps_loaded_image() {
    let (mut editor, log) = small_editor();
    load_wide(&mut editor, [5, 5, 5]);
    let before = editor.model();
    log.borrow_mut().clear();

    assert!(editor.load_from_bytes(b"%PDF-1.4", "application/pdf").is_err());
    assert_eq!(editor.state(), LoadState::Loaded);
    assert_eq!(editor.model(), before);
    assert_eq!(*log.borrow(), vec![Event::Error(LoadErrorKind::FileType)]);
}

#[test]
fn test_load_from_png_bytes() {
    let (mut editor, _) = small_editor();
    let png = png_bytes(&solid(50, 25, [70, 80, 90]));
    let outcome = editor.load_from_bytes(&png, "image/png").unwrap();
    assert_eq!(outcome, LoadOutcome::Loaded);
    assert_eq!(editor.image_dimensions(), Some((50, 25)));
}

#[test]
fn test_retry_after_error() {
    let (mut editor, _) = small_editor();
    assert!(editor.load_from_bytes(b"junk", "image/jpeg").is_err());
    load_wide(&mut editor, [1, 2, 3]);
    assert_eq!(editor.state(), LoadState::Loaded);
}

#[test]
fn test_non_image_mime_keeps_pending_load() {
    let (mut editor, log) = small_editor();
    let ticket = editor.begin_load();

    assert!(editor.load_from_bytes(b"hello", "text/plain").is_err());
    assert_eq!(editor.state(), LoadState::Loading);

    let outcome = editor
        .complete_load(ticket, Ok(dynamic(solid(200, 100, [40, 50, 60]))))
        .unwrap();
    assert_eq!(outcome, LoadOutcome::Loaded);
    assert_eq!(editor.state(), LoadState::Loaded);
    assert_eq!(editor.model().background_color, [40, 50, 60]);
    assert_eq!(
        *log.borrow(),
        vec![Event::Error(LoadErrorKind::FileType), Event::Change, Event::Load]
    );
}

#[test]
fn test_failed_reload_clears_surfaces() {
    let (mut editor, _) = small_editor();
    load_wide(&mut editor, [10, 20, 30]);

    let ticket = editor.begin_load();
    assert!(editor
        .complete_load(ticket, Ok(dynamic(solid(5, 5, [0, 0, 0]))))
        .is_err());
    assert_eq!(editor.state(), LoadState::Error(LoadErrorKind::ImageSize));

    let out = decode_png(&editor.export_crop(ExportFormat::Png, None).unwrap());
    assert!(out.pixels().all(|p| p.0 == [255, 255, 255, 255]));
    let helper = editor.helper_surface().expect("helper enabled by default");
    assert!(helper.pixels().all(|p| p.0[3] == 0));
}

#[test]
fn test_stale_ticket_is_discarded() {
    let (mut editor, log) = small_editor();
    let first = editor.begin_load();
    let second = editor.begin_load();

    let stale = editor
        .complete_load(first, Ok(dynamic(solid(200, 100, [255, 0, 0]))))
        .unwrap();
    assert_eq!(stale, LoadOutcome::Stale);
    assert_eq!(editor.state(), LoadState::Loading);
    assert!(log.borrow().is_empty());

    editor
        .complete_load(second, Ok(dynamic(solid(200, 100, [0, 255, 0]))))
        .unwrap();
    assert_eq!(editor.model().background_color, [0, 255, 0]);

    // A late result for the first ticket changes nothing.
    let late = editor
        .complete_load(first, Ok(dynamic(solid(200, 100, [0, 0, 255]))))
        .unwrap();
    assert_eq!(late, LoadOutcome::Stale);
    assert_eq!(editor.model().background_color, [0, 255, 0]);
}

#[test]
fn test_stale_error_is_not_reported() {
    let (mut editor, log) = small_editor();
    let first = editor.begin_load();
    let _second = editor.begin_load();
    let outcome = editor
        .complete_load(first, Err(CropFrameError::InvalidDataUrl("late".into())))
        .unwrap();
    assert_eq!(outcome, LoadOutcome::Stale);
    assert!(log.borrow().is_empty());
}

#[test]
fn test_load_data_url() {
    let (mut editor, _) = small_editor();
    let png = png_bytes(&solid(30, 30, [9, 9, 9]));
    let url = to_data_url(&png, ExportFormat::Png);
    assert_eq!(editor.load(&url).unwrap(), LoadOutcome::Loaded);
    assert_eq!(editor.model().background_color, [9, 9, 9]);
}

#[test]
fn test_load_file_checks_extension() {
    let (mut editor, _) = small_editor();
    let dir = tempfile::tempdir().unwrap();

    let good = dir.path().join("photo.png");
    std::fs::write(&good, png_bytes(&solid(40, 40, [3, 3, 3]))).unwrap();
    assert_eq!(editor.load_file(&good).unwrap(), LoadOutcome::Loaded);

    let bad = dir.path().join("notes.txt");
    std::fs::write(&bad, "hello").unwrap();
    let err = editor.load_file(&bad).unwrap_err();
    assert_eq!(err.kind(), LoadErrorKind::FileType);
}

#[test]
fn test_missing_file_reports_unknown() {
    let (mut editor, _) = small_editor();
    let dir = tempfile::tempdir().unwrap();
    let err = editor.load_file(&dir.path().join("gone.png")).unwrap_err();
    assert!(matches!(err, CropFrameError::Io(_)));
    assert_eq!(editor.state(), LoadState::Error(LoadErrorKind::Unknown));
}

// ---------------------------------------------------------------------------
// Zoom and drag
// ---------------------------------------------------------------------------

#[test]
fn test_input_is_inert_without_image() {
    let (mut editor, log) = small_editor();
    assert!(!editor.set_zoom(1.0));
    editor.pointer_down(10.0, 10.0);
    assert!(!editor.is_dragging());
    assert!(!editor.pointer_move(0.0, 0.0));
    assert!(!editor.pointer_up());
    assert!(log.borrow().is_empty());
}

#[test]
fn test_zoom_range_before_load_is_configured_range() {
    let (editor, _) = small_editor();
    let range = editor.zoom_range();
    assert_eq!(range.min, 0.1);
    assert_eq!(range.max, 2.0);
    assert_eq!(range.step, 0.01);
    assert_eq!(range.initial, 1.0);
}

#[test]
fn test_set_zoom_hook_order() {
    let (mut editor, log) = small_editor();
    load_wide(&mut editor, [0, 0, 0]);
    log.borrow_mut().clear();

    assert!(editor.set_zoom(1.0));
    let m = editor.model();
    assert_abs_diff_eq!(m.zoom, 1.0, epsilon = 1e-9);
    assert_abs_diff_eq!(m.width, 100.0, epsilon = 1e-9);
    assert_eq!(
        *log.borrow(),
        vec![Event::Change, Event::ImageSize, Event::Zoom]
    );
}

#[test]
fn test_set_zoom_clamps_to_fitted_range() {
    let (mut editor, _) = small_editor();
    load_wide(&mut editor, [0, 0, 0]);

    editor.set_zoom(10.0);
    assert_abs_diff_eq!(editor.model().zoom, 1.2, epsilon = 1e-9);
    assert!(editor.zoom_at_max());

    editor.set_zoom(0.0);
    assert_abs_diff_eq!(editor.model().zoom, 0.4, epsilon = 1e-9);
    assert!(editor.zoom_at_min());
}

#[test]
fn test_drag_renders_and_reports_on_release() {
    let (mut editor, log) = small_editor();
    load_wide(&mut editor, [0, 0, 0]);
    log.borrow_mut().clear();

    editor.pointer_down(20.0, 20.0);
    assert!(editor.pointer_move(10.0, 20.0));
    assert_eq!(editor.model().x, -30.0);
    assert_eq!(*log.borrow(), vec![Event::Change]);

    assert!(editor.pointer_up());
    assert_eq!(
        *log.borrow(),
        vec![Event::Change, Event::Position, Event::Change]
    );
    assert!(!editor.pointer_up());
}

#[test]
fn test_drag_against_edge_skips_render() {
    let (mut editor, log) = small_editor();
    load_wide(&mut editor, [0, 0, 0]);
    // Zoomed all the way out the image is 40x20: no axis can move.
    editor.set_zoom(0.4);
    log.borrow_mut().clear();

    editor.pointer_down(20.0, 20.0);
    assert!(!editor.pointer_move(5.0, 5.0));
    assert!(log.borrow().is_empty());
}

#[test]
fn test_new_load_cancels_drag() {
    let (mut editor, _) = small_editor();
    load_wide(&mut editor, [0, 0, 0]);
    editor.pointer_down(20.0, 20.0);
    let _ticket = editor.begin_load();
    assert!(!editor.is_dragging());
}

// ---------------------------------------------------------------------------
// Export and removal
// ---------------------------------------------------------------------------

#[test]
fn test_export_before_load_is_transparent_frame() {
    let (editor, _) = small_editor();
    let out = decode_png(&editor.export_crop(ExportFormat::Png, None).unwrap());
    assert_eq!(out.dimensions(), (40, 40));
    assert!(out.pixels().all(|p| p.0[3] == 0));
}

#[test]
fn test_export_jpeg_and_data_url() {
    let (mut editor, _) = small_editor();
    load_wide(&mut editor, [200, 100, 50]);

    let jpeg = editor.export_crop(ExportFormat::Jpeg, Some(0.9)).unwrap();
    assert_eq!(&jpeg[..2], &[0xFF, 0xD8]);

    let url = editor.export_data_url(ExportFormat::Png, None).unwrap();
    assert!(url.starts_with("data:image/png;base64,"));
}

#[test]
fn test_export_rejects_bad_quality() {
    let (editor, _) = small_editor();
    for q in [0.0, -0.5, 1.5, f32::NAN] {
        let err = editor.export_crop(ExportFormat::Jpeg, Some(q)).unwrap_err();
        assert!(matches!(err, CropFrameError::InvalidQuality(_)));
    }
}

#[test]
fn test_remove_resets_and_keeps_background_frame() {
    let (mut editor, log) = small_editor();
    load_wide(&mut editor, [10, 120, 200]);
    log.borrow_mut().clear();

    editor.remove();
    assert_eq!(editor.state(), LoadState::Empty);
    assert_eq!(editor.model(), GeometryModel::default());
    assert_eq!(editor.image_dimensions(), None);
    assert_eq!(*log.borrow(), vec![Event::Remove]);

    let out = decode_png(&editor.export_crop(ExportFormat::Png, None).unwrap());
    assert_eq!(out.dimensions(), (40, 40));
    assert!(out.pixels().all(|p| p.0 == [10, 120, 200, 255]));

    let helper = editor.helper_surface().expect("helper enabled by default");
    assert!(helper.pixels().all(|p| p.0[3] == 0));
}

#[test]
fn test_remove_cancels_pending_load() {
    let (mut editor, _) = small_editor();
    let ticket = editor.begin_load();
    editor.remove();
    let outcome = editor
        .complete_load(ticket, Ok(dynamic(solid(200, 100, [0, 0, 0]))))
        .unwrap();
    assert_eq!(outcome, LoadOutcome::Stale);
    assert_eq!(editor.state(), LoadState::Empty);
}

#[test]
fn test_helper_disabled_by_config() {
    let config = EditorConfig {
        image_helper: false,
        ..small_config()
    };
    let editor = CropEditor::new(FrameLayout::centered(40, 40, 10), config, Hooks::new()).unwrap();
    assert!(editor.helper_surface().is_none());
}

#[test]
fn test_invalid_config_is_rejected() {
    let mut config = EditorConfig::default();
    config.zoom.step = 0.0;
    assert!(matches!(
        CropEditor::new(FrameLayout::default(), config, Hooks::new()),
        Err(CropFrameError::InvalidConfig(_))
    ));

    let frame = FrameLayout {
        width: 0,
        ..Default::default()
    };
    assert!(CropEditor::new(frame, EditorConfig::default(), Hooks::new()).is_err());
}
