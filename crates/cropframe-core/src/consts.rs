/// Width in pixels of the edge ring averaged by the border color sampler.
pub const BORDER_SAMPLE_WIDTH: u32 = 3;

/// Fill color used before any image has been sampled (white).
pub const DEFAULT_BACKGROUND_COLOR: [u8; 3] = [255, 255, 255];

/// Helper overlay color: rgba(255, 255, 255, 0.90).
pub const DEFAULT_HELPER_COLOR: [u8; 4] = [255, 255, 255, 230];

/// Default zoom slider value before an image is fitted.
pub const DEFAULT_ZOOM_INITIAL: f64 = 1.0;

/// Default lower zoom bound. Replaced per image by the fit engine.
pub const DEFAULT_ZOOM_MIN: f64 = 0.1;

/// Default zoom ceiling. The fitted range's maximum is derived from it.
pub const DEFAULT_ZOOM_MAX: f64 = 2.0;

/// Default zoom slider step.
pub const DEFAULT_ZOOM_STEP: f64 = 0.01;

/// Minimum accepted natural image width.
pub const DEFAULT_MIN_WIDTH: u32 = 350;

/// Minimum accepted natural image height.
pub const DEFAULT_MIN_HEIGHT: u32 = 350;

/// Width of the box every loaded image is normalized into.
pub const DEFAULT_MAX_WIDTH: u32 = 1000;

/// Height of the box every loaded image is normalized into.
pub const DEFAULT_MAX_HEIGHT: u32 = 1000;

/// Default crop frame width, as laid out by the host.
pub const DEFAULT_FRAME_WIDTH: u32 = 400;

/// Default crop frame height, as laid out by the host.
pub const DEFAULT_FRAME_HEIGHT: u32 = 400;

/// Default offset of the crop frame inside the helper surface.
pub const DEFAULT_FRAME_OFFSET: u32 = 100;

/// Default helper surface edge length (frame plus offset on both sides).
pub const DEFAULT_HELPER_SIZE: u32 = 600;

/// Default export quality on a 0..1 scale.
pub const DEFAULT_EXPORT_QUALITY: f32 = 1.0;
