use crate::config::{FrameLayout, ImageLimits, ZoomConfig};
use crate::error::{CropFrameError, Result};
use crate::model::{Axis, GeometryModel, ZoomRange};

use super::bounds::center;

/// Result of fitting an image to the crop frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Fit {
    pub model: GeometryModel,
    pub zoom_range: ZoomRange,
    /// Axis that exactly matches the frame at the initial zoom.
    pub binding: Axis,
}

/// Reject images below the configured minimum (or with a zero dimension).
pub fn check_min_size(width: u32, height: u32, limits: &ImageLimits) -> Result<()> {
    if width == 0 || height == 0 {
        return Err(CropFrameError::InvalidDimensions { width, height });
    }
    if width < limits.min_width || height < limits.min_height {
        return Err(CropFrameError::ImageTooSmall {
            width,
            height,
            min_width: limits.min_width,
            min_height: limits.min_height,
        });
    }
    Ok(())
}

/// Scale natural dimensions to fit inside the max bounds, keeping aspect.
///
/// Images are scaled up as well as down, so every loaded image ends up with
/// one side equal to its max bound.
pub fn normalize_to_bounds(
    natural_width: u32,
    natural_height: u32,
    limits: &ImageLimits,
) -> (f64, f64) {
    let (w, h) = (natural_width as f64, natural_height as f64);
    let (max_w, max_h) = (limits.max_width as f64, limits.max_height as f64);

    let frame_ratio = max_h / max_w;
    let image_ratio = h / w;

    if frame_ratio > image_ratio {
        (max_w, h * (max_w / w))
    } else {
        (w * (max_h / h), max_h)
    }
}

/// Fit an image so it covers the crop frame at its initial zoom.
///
/// The binding axis is set to the frame size exactly; the other axis
/// overflows. The returned zoom range bottoms out where the overflowing axis
/// matches the frame, so zooming all the way out uncovers the binding axis.
/// Callers must run [`check_min_size`] first; zero dimensions are not handled
/// here.
pub fn fit(
    natural_width: u32,
    natural_height: u32,
    frame: &FrameLayout,
    limits: &ImageLimits,
    zoom: &ZoomConfig,
) -> Fit {
    let (original_width, original_height) =
        normalize_to_bounds(natural_width, natural_height, limits);
    let (crop_w, crop_h) = (frame.width as f64, frame.height as f64);

    let frame_ratio = crop_h / crop_w;
    let image_ratio = original_height / original_width;

    let (binding, scale, zoom_min, width, height) = if frame_ratio > image_ratio {
        let scale = crop_h / original_height;
        (
            Axis::Height,
            scale,
            crop_w / original_width,
            original_width * scale,
            crop_h,
        )
    } else {
        let scale = crop_w / original_width;
        (
            Axis::Width,
            scale,
            crop_h / original_height,
            crop_w,
            original_height * scale,
        )
    };

    let mut model = GeometryModel {
        original_width,
        original_height,
        width,
        height,
        x: 0.0,
        y: 0.0,
        zoom: scale,
        crop_width: crop_w,
        crop_height: crop_h,
        ..Default::default()
    };
    center(&mut model);

    let zoom_range = ZoomRange {
        min: zoom_min,
        max: (zoom.max_value - scale).max(scale),
        step: zoom.step,
        initial: scale,
    };

    Fit {
        model,
        zoom_range,
        binding,
    }
}
