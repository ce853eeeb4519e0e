use crate::model::GeometryModel;

/// Keep one axis of the image from uncovering the frame.
///
/// Only applies when the image is larger than the frame on this axis; a
/// smaller axis keeps the caller's position.
fn clamp_axis(pos: f64, size: f64, crop: f64) -> f64 {
    if size <= crop {
        return pos;
    }
    let pos = pos.min(0.0);
    if size + pos < crop {
        // Snap to the far edge instead of leaving a gap.
        -(size - crop)
    } else {
        pos
    }
}

/// Clamp a candidate position against the image and frame sizes.
pub fn clamp_position(
    x: f64,
    y: f64,
    width: f64,
    height: f64,
    crop_width: f64,
    crop_height: f64,
) -> (f64, f64) {
    (
        clamp_axis(x, width, crop_width),
        clamp_axis(y, height, crop_height),
    )
}

/// Center the image on the frame, then clamp each axis.
pub fn center(model: &mut GeometryModel) {
    let x = -(model.width - model.crop_width) / 2.0;
    let y = -(model.height - model.crop_height) / 2.0;
    let (x, y) = clamp_position(
        x,
        y,
        model.width,
        model.height,
        model.crop_width,
        model.crop_height,
    );
    model.x = x;
    model.y = y;
}
