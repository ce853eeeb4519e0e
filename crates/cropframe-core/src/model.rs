use serde::{Deserialize, Serialize};

use crate::consts::DEFAULT_BACKGROUND_COLOR;

/// Placement of an image inside the crop frame.
///
/// All coordinates are in frame pixels; `x`/`y` is the image's top-left
/// corner relative to the frame's top-left corner. The decoded image itself
/// is owned by the editor and passed to the compositor per render.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GeometryModel {
    /// Width after normalization to the max bounds.
    pub original_width: f64,
    /// Height after normalization to the max bounds.
    pub original_height: f64,
    /// Displayed width, `original_width * zoom`.
    pub width: f64,
    /// Displayed height, `original_height * zoom`.
    pub height: f64,
    pub x: f64,
    pub y: f64,
    pub zoom: f64,
    pub crop_width: f64,
    pub crop_height: f64,
    /// Letterbox fill shown wherever the image does not cover the frame.
    pub background_color: [u8; 3],
}

impl Default for GeometryModel {
    fn default() -> Self {
        Self {
            original_width: 0.0,
            original_height: 0.0,
            width: 0.0,
            height: 0.0,
            x: 0.0,
            y: 0.0,
            zoom: 1.0,
            crop_width: 0.0,
            crop_height: 0.0,
            background_color: DEFAULT_BACKGROUND_COLOR,
        }
    }
}

impl GeometryModel {
    /// True when the displayed image spans the frame horizontally.
    pub fn covers_width(&self) -> bool {
        self.width >= self.crop_width
    }

    /// True when the displayed image spans the frame vertically.
    pub fn covers_height(&self) -> bool {
        self.height >= self.crop_height
    }
}

/// Axis whose constraint determined a fit's scale factor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Axis {
    Width,
    Height,
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Width => write!(f, "width"),
            Self::Height => write!(f, "height"),
        }
    }
}

/// Zoom slider range derived for one image.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ZoomRange {
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub initial: f64,
}

impl ZoomRange {
    pub fn contains(&self, zoom: f64) -> bool {
        zoom >= self.min && zoom <= self.max
    }

    pub fn clamp(&self, zoom: f64) -> f64 {
        zoom.clamp(self.min, self.max)
    }

    /// Quantize to the slider step (counted from `min`) and clamp, the way
    /// a range input settles on a value.
    pub fn snap(&self, zoom: f64) -> f64 {
        if self.step <= 0.0 || !zoom.is_finite() {
            return self.clamp(if zoom.is_finite() { zoom } else { self.initial });
        }
        let steps = ((zoom - self.min) / self.step).round();
        self.clamp(self.min + steps * self.step)
    }

    /// Slider sits on its lower end, compared at two decimals.
    pub fn at_min(&self, zoom: f64) -> bool {
        round2(zoom) == round2(self.min)
    }

    /// Slider sits on its upper end, compared at two decimals.
    pub fn at_max(&self, zoom: f64) -> bool {
        round2(zoom) == round2(self.max)
    }
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}
