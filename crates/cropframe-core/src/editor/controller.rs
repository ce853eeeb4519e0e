use std::path::Path;

use image::imageops::{self, FilterType};
use image::{DynamicImage, RgbaImage};
use tracing::{debug, info, warn};

use crate::config::{EditorConfig, FrameLayout};
use crate::consts::{DEFAULT_BACKGROUND_COLOR, DEFAULT_EXPORT_QUALITY};
use crate::engine::{apply_pan, apply_zoom, check_min_size, fit, DragSession};
use crate::error::{CropFrameError, LoadErrorKind, Result};
use crate::io::image_io::{decode_bytes, mime_from_path};
use crate::io::source::{FsLoader, ImageLoader};
use crate::model::{GeometryModel, ZoomRange};
use crate::render::{encode, to_data_url, Compositor, ExportFormat};
use crate::sampler::sample_border_color;

use super::hooks::Hooks;
use super::state::{LoadOutcome, LoadState, LoadTicket};

fn is_image_mime(mime: &str) -> bool {
    mime.trim().to_ascii_lowercase().starts_with("image/")
}

/// Interactive crop editor: load, fit, pan, zoom, render, export.
///
/// Single-threaded; every operation runs to completion, renders at most once
/// and fires its hooks before returning. Decoding is the only step that may
/// happen elsewhere: call [`begin_load`](Self::begin_load), decode off-thread,
/// then hand the result to [`complete_load`](Self::complete_load).
pub struct CropEditor<L: ImageLoader = FsLoader> {
    config: EditorConfig,
    frame: FrameLayout,
    hooks: Hooks,
    loader: L,
    state: LoadState,
    generation: u64,
    image: Option<RgbaImage>,
    model: GeometryModel,
    zoom_range: Option<ZoomRange>,
    drag: Option<DragSession>,
    compositor: Compositor,
}

impl CropEditor<FsLoader> {
    /// Editor that loads `data:` URLs and local paths.
    pub fn new(frame: FrameLayout, config: EditorConfig, hooks: Hooks) -> Result<Self> {
        Self::with_loader(frame, config, hooks, FsLoader)
    }
}

impl<L: ImageLoader> CropEditor<L> {
    pub fn with_loader(
        frame: FrameLayout,
        config: EditorConfig,
        hooks: Hooks,
        loader: L,
    ) -> Result<Self> {
        config.validate()?;
        frame.validate()?;

        let helper_color = config.image_helper.then_some(config.image_helper_color);
        let compositor = Compositor::new(&frame, helper_color);

        Ok(Self {
            config,
            frame,
            hooks,
            loader,
            state: LoadState::Empty,
            generation: 0,
            image: None,
            model: GeometryModel::default(),
            zoom_range: None,
            drag: None,
            compositor,
        })
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn frame(&self) -> &FrameLayout {
        &self.frame
    }

    pub fn state(&self) -> LoadState {
        self.state
    }

    /// Snapshot of the geometry, or the empty record when nothing is loaded.
    pub fn model(&self) -> GeometryModel {
        if self.state.is_loaded() {
            self.model
        } else {
            GeometryModel::default()
        }
    }

    /// Current zoom slider range. Before an image is fitted this is the
    /// configured range.
    pub fn zoom_range(&self) -> ZoomRange {
        match (self.state.is_loaded(), self.zoom_range) {
            (true, Some(range)) => range,
            _ => {
                let z = &self.config.zoom;
                ZoomRange {
                    min: z.min_value,
                    max: z.max_value,
                    step: z.step,
                    initial: z.initial_value,
                }
            }
        }
    }

    /// Natural size of the loaded image.
    pub fn image_dimensions(&self) -> Option<(u32, u32)> {
        self.image.as_ref().map(|img| img.dimensions())
    }

    pub fn crop_surface(&self) -> &RgbaImage {
        self.compositor.crop_surface()
    }

    pub fn helper_surface(&self) -> Option<&RgbaImage> {
        self.compositor.helper_surface()
    }

    /// Start a load attempt. Input is inert until it completes.
    pub fn begin_load(&mut self) -> LoadTicket {
        self.generation += 1;
        self.state = LoadState::Loading;
        self.drag = None;
        LoadTicket {
            generation: self.generation,
        }
    }

    /// Finish a load attempt with its decode result.
    ///
    /// Results for anything but the latest ticket are discarded, as are
    /// results arriving after a removal.
    pub fn complete_load(
        &mut self,
        ticket: LoadTicket,
        decoded: Result<DynamicImage>,
    ) -> Result<LoadOutcome> {
        if ticket.generation != self.generation || self.state != LoadState::Loading {
            debug!(
                ticket = ticket.generation,
                current = self.generation,
                "Discarding stale load"
            );
            return Ok(LoadOutcome::Stale);
        }

        let decoded = match decoded {
            Ok(img) => img,
            Err(e) => return Err(self.fail(e)),
        };

        let (natural_w, natural_h) = (decoded.width(), decoded.height());
        if let Err(e) = check_min_size(natural_w, natural_h, &self.config.image) {
            return Err(self.fail(e));
        }

        let rgba = decoded.into_rgba8();
        let fitted = fit(
            natural_w,
            natural_h,
            &self.frame,
            &self.config.image,
            &self.config.zoom,
        );

        let mut model = fitted.model;
        model.background_color = sample_at_normalized_size(&rgba, &model);

        info!(
            natural = %format!("{natural_w}x{natural_h}"),
            normalized = %format!("{:.0}x{:.0}", model.original_width, model.original_height),
            binding = %fitted.binding,
            zoom = model.zoom,
            background = ?model.background_color,
            "Image loaded"
        );

        self.compositor.invalidate();
        self.image = Some(rgba);
        self.model = model;
        self.zoom_range = Some(fitted.zoom_range);
        self.state = LoadState::Loaded;

        self.render();
        self.hooks.loaded(&self.model);
        Ok(LoadOutcome::Loaded)
    }

    /// Load from a source string understood by the loader. No MIME check is
    /// made; anything that fails to fetch or decode is reported as `unknown`.
    pub fn load(&mut self, source: &str) -> Result<LoadOutcome> {
        let ticket = self.begin_load();
        let decoded = self.loader.fetch(source).and_then(|fetched| {
            debug!(
                mime = fetched.mime.as_deref().unwrap_or("unknown"),
                bytes = fetched.bytes.len(),
                "Fetched image source"
            );
            decode_bytes(&fetched.bytes)
        });
        self.complete_load(ticket, decoded)
    }

    /// Load encoded bytes with a declared MIME type, as from a file picker
    /// or drop. Non-image types are rejected before any decode.
    pub fn load_from_bytes(&mut self, bytes: &[u8], mime: &str) -> Result<LoadOutcome> {
        if !is_image_mime(mime) {
            return Err(self.reject_file_type(mime));
        }
        let ticket = self.begin_load();
        self.complete_load(ticket, decode_bytes(bytes))
    }

    /// Load a local file, deriving its MIME type from the extension.
    pub fn load_file(&mut self, path: &Path) -> Result<LoadOutcome> {
        let mime = mime_from_path(path).unwrap_or("application/octet-stream");
        if !is_image_mime(mime) {
            return Err(self.reject_file_type(mime));
        }
        let ticket = self.begin_load();
        let decoded = std::fs::read(path)
            .map_err(CropFrameError::from)
            .and_then(|bytes| decode_bytes(&bytes));
        self.complete_load(ticket, decoded)
    }

    /// Move the zoom slider. The value is snapped to the slider step and
    /// clamped to the fitted range. Returns false when nothing is loaded.
    pub fn set_zoom(&mut self, zoom: f64) -> bool {
        if !self.state.is_loaded() {
            return false;
        }
        let zoom = self.zoom_range().snap(zoom);
        self.model = apply_zoom(&self.model, zoom);
        debug!(zoom, width = self.model.width, height = self.model.height, "Zoom applied");

        self.render();
        self.hooks.image_size_changed(&self.model);
        self.hooks.zoom_changed(&self.model);
        true
    }

    /// Whether the slider sits at its lower end.
    pub fn zoom_at_min(&self) -> bool {
        self.zoom_range().at_min(self.model().zoom)
    }

    /// Whether the slider sits at its upper end.
    pub fn zoom_at_max(&self) -> bool {
        self.zoom_range().at_max(self.model().zoom)
    }

    pub fn pointer_down(&mut self, pointer_x: f64, pointer_y: f64) {
        if self.state.is_loaded() {
            self.drag = Some(DragSession::start(&self.model, pointer_x, pointer_y));
        }
    }

    /// Drag the image. Returns true when the move was accepted and rendered.
    pub fn pointer_move(&mut self, pointer_x: f64, pointer_y: f64) -> bool {
        let Some(drag) = self.drag else {
            return false;
        };
        if !self.state.is_loaded() {
            return false;
        }

        let (dx, dy) = drag.delta(pointer_x, pointer_y);
        let outcome = apply_pan(&self.model, dx, dy);
        if !outcome.refreshed {
            return false;
        }
        self.model = outcome.model;
        debug!(x = self.model.x, y = self.model.y, "Pan applied");
        self.render();
        true
    }

    /// End a drag. Returns true when a drag was active.
    pub fn pointer_up(&mut self) -> bool {
        if self.drag.take().is_none() || !self.state.is_loaded() {
            return false;
        }
        self.hooks.position_changed(&self.model);
        self.hooks.changed(&self.model);
        true
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Encode the crop surface as it currently stands. Quality defaults to
    /// 1.0 and only affects JPEG.
    pub fn export_crop(&self, format: ExportFormat, quality: Option<f32>) -> Result<Vec<u8>> {
        encode(
            self.compositor.crop_surface(),
            format,
            quality.unwrap_or(DEFAULT_EXPORT_QUALITY),
        )
    }

    /// [`export_crop`](Self::export_crop) as a base64 `data:` URL.
    pub fn export_data_url(&self, format: ExportFormat, quality: Option<f32>) -> Result<String> {
        let bytes = self.export_crop(format, quality)?;
        Ok(to_data_url(&bytes, format))
    }

    /// Drop the image. The crop surface keeps the last background color so a
    /// later export is still a valid frame.
    pub fn remove(&mut self) {
        self.compositor.clear(self.model.background_color);
        self.compositor.invalidate();
        self.image = None;
        self.model = GeometryModel::default();
        self.zoom_range = None;
        self.drag = None;
        self.state = LoadState::Empty;

        debug!("Image removed");
        self.hooks.removed(&self.model);
    }

    fn render(&mut self) {
        let Some(image) = self.image.as_ref() else {
            return;
        };
        self.compositor.render(&self.model, image);
        self.hooks.changed(&self.model);
    }

    /// Enter the error state for a failed load and notify the host.
    fn fail(&mut self, err: CropFrameError) -> CropFrameError {
        let kind = err.kind();
        warn!(%kind, error = %err, "Image load failed");

        self.state = LoadState::Error(kind);
        self.image = None;
        self.model = GeometryModel::default();
        self.zoom_range = None;
        self.drag = None;
        self.compositor.clear(DEFAULT_BACKGROUND_COLOR);
        self.compositor.invalidate();

        self.hooks.errored(kind);
        err
    }

    /// A non-image input never starts a load, so a loaded image or a load
    /// in flight stays in place.
    fn reject_file_type(&mut self, mime: &str) -> CropFrameError {
        let err = CropFrameError::UnsupportedMime(mime.to_string());
        warn!(mime, "Rejected non-image input");
        if matches!(self.state, LoadState::Empty | LoadState::Error(_)) {
            self.state = LoadState::Error(LoadErrorKind::FileType);
        }
        self.hooks.errored(LoadErrorKind::FileType);
        err
    }
}

/// Border color of the image as displayed at its normalized size, so the
/// sampled ring has the same width whatever the source resolution.
fn sample_at_normalized_size(image: &RgbaImage, model: &GeometryModel) -> [u8; 3] {
    let width = model.original_width.round().max(1.0) as u32;
    let height = model.original_height.round().max(1.0) as u32;
    if (width, height) == image.dimensions() {
        return sample_border_color(image);
    }
    let normalized = imageops::resize(image, width, height, FilterType::Triangle);
    sample_border_color(&normalized)
}
