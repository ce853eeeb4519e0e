use crate::model::GeometryModel;

/// Pointer anchor captured when a drag starts.
///
/// Deltas are cumulative from the anchor, so the image follows the pointer
/// without drift no matter how many move events arrive.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragSession {
    anchor_x: f64,
    anchor_y: f64,
}

impl DragSession {
    pub fn start(model: &GeometryModel, pointer_x: f64, pointer_y: f64) -> Self {
        Self {
            anchor_x: pointer_x - model.x,
            anchor_y: pointer_y - model.y,
        }
    }

    /// Candidate image position for the current pointer location.
    pub fn delta(&self, pointer_x: f64, pointer_y: f64) -> (f64, f64) {
        (pointer_x - self.anchor_x, pointer_y - self.anchor_y)
    }
}

/// Outcome of one pointer-move tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PanOutcome {
    pub model: GeometryModel,
    /// At least one axis moved; the frame needs a re-render.
    pub refreshed: bool,
}

/// Move the image by a cumulative drag delta.
///
/// Each axis only accepts a delta that keeps the frame covered; otherwise it
/// stays where it was. Positive deltas are treated as zero.
pub fn apply_pan(model: &GeometryModel, dx: f64, dy: f64) -> PanOutcome {
    let dx = dx.min(0.0);
    let dy = dy.min(0.0);

    let mut next = *model;
    let mut refreshed = false;

    if model.width + dx >= model.crop_width {
        next.x = dx;
        refreshed = true;
    }
    if model.height + dy >= model.crop_height {
        next.y = dy;
        refreshed = true;
    }

    PanOutcome {
        model: next,
        refreshed,
    }
}
