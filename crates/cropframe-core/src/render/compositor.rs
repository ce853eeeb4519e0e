use image::imageops::{self, FilterType};
use image::{Pixel, Rgba, RgbaImage};
use tracing::debug;

use crate::config::FrameLayout;
use crate::model::GeometryModel;

const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);

/// Resampled copy of the source image at one display size.
struct ScaledImage {
    width: u32,
    height: u32,
    pixels: RgbaImage,
}

/// Return the image resampled to `width x height`, reusing the previous
/// result when the size has not changed (every pan tick).
fn scaled<'a>(
    cache: &'a mut Option<ScaledImage>,
    source: &RgbaImage,
    width: u32,
    height: u32,
    filter: FilterType,
) -> &'a RgbaImage {
    if !matches!(cache, Some(c) if c.width == width && c.height == height) {
        *cache = None;
    }
    &cache
        .get_or_insert_with(|| ScaledImage {
            width,
            height,
            pixels: imageops::resize(source, width, height, filter),
        })
        .pixels
}

struct HelperSurface {
    pixels: RgbaImage,
    color: Rgba<u8>,
    cache: Option<ScaledImage>,
}

/// Draws a geometry model onto the crop surface and the optional helper
/// surface.
///
/// The source image is borrowed for each render only. Resampled copies are
/// cached by display size and must be dropped with [`Compositor::invalidate`]
/// when a different image is loaded.
pub struct Compositor {
    frame: FrameLayout,
    crop: RgbaImage,
    cache: Option<ScaledImage>,
    helper: Option<HelperSurface>,
}

impl Compositor {
    /// Build the surfaces for `frame`. The helper surface exists only when a
    /// helper color is given. Both start fully transparent.
    pub fn new(frame: &FrameLayout, helper_color: Option<[u8; 4]>) -> Self {
        let helper = helper_color.map(|color| HelperSurface {
            pixels: RgbaImage::from_pixel(frame.helper_width, frame.helper_height, TRANSPARENT),
            color: Rgba(color),
            cache: None,
        });
        Self {
            frame: frame.clone(),
            crop: RgbaImage::from_pixel(frame.width, frame.height, TRANSPARENT),
            cache: None,
            helper,
        }
    }

    pub fn crop_surface(&self) -> &RgbaImage {
        &self.crop
    }

    pub fn helper_surface(&self) -> Option<&RgbaImage> {
        self.helper.as_ref().map(|h| &h.pixels)
    }

    /// Drop resampled copies of the previous image.
    pub fn invalidate(&mut self) {
        self.cache = None;
        if let Some(helper) = self.helper.as_mut() {
            helper.cache = None;
        }
    }

    /// Fill the crop surface with `color` and clear the helper surface.
    pub fn clear(&mut self, color: [u8; 3]) {
        let fill = Rgba([color[0], color[1], color[2], 255]);
        for p in self.crop.pixels_mut() {
            *p = fill;
        }
        if let Some(helper) = self.helper.as_mut() {
            for p in helper.pixels.pixels_mut() {
                *p = TRANSPARENT;
            }
        }
    }

    /// Redraw both surfaces from `model`.
    pub fn render(&mut self, model: &GeometryModel, image: &RgbaImage) {
        let width = model.width.round().max(1.0) as u32;
        let height = model.height.round().max(1.0) as u32;
        let x = model.x.round() as i64;
        let y = model.y.round() as i64;

        // Background first, image over it: only uncovered or transparent
        // regions show the fill.
        self.clear(model.background_color);
        let smooth = scaled(&mut self.cache, image, width, height, FilterType::Triangle);
        imageops::overlay(&mut self.crop, smooth, x, y);

        if let Some(helper) = self.helper.as_mut() {
            let left = self.frame.left as i64;
            let top = self.frame.top as i64;
            let crisp = scaled(&mut helper.cache, image, width, height, FilterType::Nearest);
            imageops::overlay(&mut helper.pixels, crisp, x + left, y + top);

            let frame_x = left..left + self.frame.width as i64;
            let frame_y = top..top + self.frame.height as i64;
            for (px, py, p) in helper.pixels.enumerate_pixels_mut() {
                if frame_x.contains(&(px as i64)) && frame_y.contains(&(py as i64)) {
                    continue;
                }
                p.blend(&helper.color);
            }
        }

        debug!(width, height, x, y, "Rendered crop frame");
    }
}
