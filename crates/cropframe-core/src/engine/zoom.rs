use crate::model::GeometryModel;

use super::bounds::clamp_position;

/// Rescale the image to `zoom`, keeping the point under the frame center
/// fixed in image space.
///
/// The zoom value is used as given; range checks belong to the caller.
pub fn apply_zoom(model: &GeometryModel, zoom: f64) -> GeometryModel {
    if zoom == model.zoom {
        return *model;
    }

    let new_width = model.original_width * zoom;
    let new_height = model.original_height * zoom;

    let half_w = model.crop_width / 2.0;
    let half_h = model.crop_height / 2.0;

    // Frame-center offset as a fraction of the old size.
    let delta_x = (model.x - half_w) / model.width;
    let delta_y = (model.y - half_h) / model.height;

    let (x, y) = clamp_position(
        delta_x * new_width + half_w,
        delta_y * new_height + half_h,
        new_width,
        new_height,
        model.crop_width,
        model.crop_height,
    );

    GeometryModel {
        width: new_width,
        height: new_height,
        x,
        y,
        zoom,
        ..*model
    }
}
