//! Pan/zoom crop-frame engine.
//!
//! An image is normalized into configured max bounds, fitted so it covers a
//! fixed-size crop frame, and then moved and scaled by pointer drags and a
//! zoom slider without ever uncovering the frame on a covered axis. Any
//! remaining gap is filled with a color sampled from the image's own border.
//!
//! ```no_run
//! use cropframe_core::config::{EditorConfig, FrameLayout};
//! use cropframe_core::editor::{CropEditor, Hooks};
//! use cropframe_core::render::ExportFormat;
//!
//! let mut editor = CropEditor::new(FrameLayout::default(), EditorConfig::default(), Hooks::new())?;
//! editor.load("portrait.jpg")?;
//! editor.set_zoom(1.2);
//! editor.pointer_down(200.0, 200.0);
//! editor.pointer_move(150.0, 180.0);
//! editor.pointer_up();
//! let png = editor.export_crop(ExportFormat::Png, None)?;
//! # Ok::<(), cropframe_core::error::CropFrameError>(())
//! ```

pub mod config;
pub mod consts;
pub mod editor;
pub mod engine;
pub mod error;
pub mod io;
pub mod model;
pub mod render;
pub mod sampler;
