use serde::{Deserialize, Serialize};

use crate::consts::{
    DEFAULT_FRAME_HEIGHT, DEFAULT_FRAME_OFFSET, DEFAULT_FRAME_WIDTH, DEFAULT_HELPER_COLOR,
    DEFAULT_HELPER_SIZE, DEFAULT_MAX_HEIGHT, DEFAULT_MAX_WIDTH, DEFAULT_MIN_HEIGHT,
    DEFAULT_MIN_WIDTH, DEFAULT_ZOOM_INITIAL, DEFAULT_ZOOM_MAX, DEFAULT_ZOOM_MIN,
    DEFAULT_ZOOM_STEP,
};
use crate::error::{CropFrameError, Result};

/// Editor options. Built once when the editor is created and never mutated.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EditorConfig {
    /// Render the helper overlay surface.
    #[serde(default = "default_true")]
    pub image_helper: bool,
    /// RGBA fill blended over the helper surface outside the crop frame.
    #[serde(default = "default_helper_color")]
    pub image_helper_color: [u8; 4],
    #[serde(default)]
    pub zoom: ZoomConfig,
    #[serde(default)]
    pub image: ImageLimits,
}

fn default_true() -> bool {
    true
}
fn default_helper_color() -> [u8; 4] {
    DEFAULT_HELPER_COLOR
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            image_helper: true,
            image_helper_color: DEFAULT_HELPER_COLOR,
            zoom: ZoomConfig::default(),
            image: ImageLimits::default(),
        }
    }
}

impl EditorConfig {
    /// Reject option combinations the engines cannot work with.
    pub fn validate(&self) -> Result<()> {
        let z = &self.zoom;
        if z.step.is_nan() || z.step <= 0.0 {
            return Err(CropFrameError::InvalidConfig(format!(
                "zoom step must be > 0, got {}",
                z.step
            )));
        }
        if z.min_value > z.max_value {
            return Err(CropFrameError::InvalidConfig(format!(
                "zoom min_value {} exceeds max_value {}",
                z.min_value, z.max_value
            )));
        }
        if self.image.max_width == 0 || self.image.max_height == 0 {
            return Err(CropFrameError::InvalidConfig(
                "image max_width and max_height must be > 0".into(),
            ));
        }
        Ok(())
    }
}

/// Zoom slider options. `min_value`/`max_value` are outer bounds only; each
/// loaded image gets its own range from the fit engine.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ZoomConfig {
    #[serde(default = "default_zoom_initial")]
    pub initial_value: f64,
    #[serde(default = "default_zoom_min")]
    pub min_value: f64,
    #[serde(default = "default_zoom_max")]
    pub max_value: f64,
    #[serde(default = "default_zoom_step")]
    pub step: f64,
}

fn default_zoom_initial() -> f64 {
    DEFAULT_ZOOM_INITIAL
}
fn default_zoom_min() -> f64 {
    DEFAULT_ZOOM_MIN
}
fn default_zoom_max() -> f64 {
    DEFAULT_ZOOM_MAX
}
fn default_zoom_step() -> f64 {
    DEFAULT_ZOOM_STEP
}

impl Default for ZoomConfig {
    fn default() -> Self {
        Self {
            initial_value: DEFAULT_ZOOM_INITIAL,
            min_value: DEFAULT_ZOOM_MIN,
            max_value: DEFAULT_ZOOM_MAX,
            step: DEFAULT_ZOOM_STEP,
        }
    }
}

/// Size limits applied to every loaded image.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ImageLimits {
    /// Images narrower than this are rejected with `image-size`.
    #[serde(default = "default_min_width")]
    pub min_width: u32,
    /// Images shorter than this are rejected with `image-size`.
    #[serde(default = "default_min_height")]
    pub min_height: u32,
    /// Width of the normalization box.
    #[serde(default = "default_max_width")]
    pub max_width: u32,
    /// Height of the normalization box.
    #[serde(default = "default_max_height")]
    pub max_height: u32,
}

fn default_min_width() -> u32 {
    DEFAULT_MIN_WIDTH
}
fn default_min_height() -> u32 {
    DEFAULT_MIN_HEIGHT
}
fn default_max_width() -> u32 {
    DEFAULT_MAX_WIDTH
}
fn default_max_height() -> u32 {
    DEFAULT_MAX_HEIGHT
}

impl Default for ImageLimits {
    fn default() -> Self {
        Self {
            min_width: DEFAULT_MIN_WIDTH,
            min_height: DEFAULT_MIN_HEIGHT,
            max_width: DEFAULT_MAX_WIDTH,
            max_height: DEFAULT_MAX_HEIGHT,
        }
    }
}

/// Host layout of the crop frame and the helper surface around it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FrameLayout {
    /// Crop frame width in pixels.
    pub width: u32,
    /// Crop frame height in pixels.
    pub height: u32,
    /// Frame offset from the helper surface's left edge.
    #[serde(default)]
    pub left: u32,
    /// Frame offset from the helper surface's top edge.
    #[serde(default)]
    pub top: u32,
    #[serde(default = "default_helper_size")]
    pub helper_width: u32,
    #[serde(default = "default_helper_size")]
    pub helper_height: u32,
}

fn default_helper_size() -> u32 {
    DEFAULT_HELPER_SIZE
}

impl Default for FrameLayout {
    fn default() -> Self {
        Self {
            width: DEFAULT_FRAME_WIDTH,
            height: DEFAULT_FRAME_HEIGHT,
            left: DEFAULT_FRAME_OFFSET,
            top: DEFAULT_FRAME_OFFSET,
            helper_width: DEFAULT_HELPER_SIZE,
            helper_height: DEFAULT_HELPER_SIZE,
        }
    }
}

impl FrameLayout {
    /// A frame of the given size with the helper padded evenly around it.
    pub fn centered(width: u32, height: u32, padding: u32) -> Self {
        Self {
            width,
            height,
            left: padding,
            top: padding,
            helper_width: width + 2 * padding,
            helper_height: height + 2 * padding,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(CropFrameError::InvalidConfig(format!(
                "crop frame must be non-empty, got {}x{}",
                self.width, self.height
            )));
        }
        Ok(())
    }
}
