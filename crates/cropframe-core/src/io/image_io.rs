use std::path::Path;

use image::{DynamicImage, ImageFormat, RgbaImage};

use crate::error::{CropFrameError, Result};
use crate::render::export::{encode, ExportFormat};

/// Decode an image from memory, guessing the format from its content.
pub fn decode_bytes(bytes: &[u8]) -> Result<DynamicImage> {
    Ok(image::load_from_memory(bytes)?)
}

/// MIME type of an encoded image, sniffed from its magic bytes.
pub fn sniff_mime(bytes: &[u8]) -> Option<&'static str> {
    image::guess_format(bytes).ok().map(|f| f.to_mime_type())
}

/// MIME type implied by a file name's extension.
pub fn mime_from_path(path: &Path) -> Option<&'static str> {
    ImageFormat::from_path(path).ok().map(|f| f.to_mime_type())
}

/// Load an image file from disk.
pub fn load_image(path: &Path) -> Result<DynamicImage> {
    Ok(image::open(path)?)
}

/// Save a rendered surface, choosing the format from the file extension.
/// Unknown extensions fall back to PNG.
pub fn save_surface(surface: &RgbaImage, path: &Path, quality: f32) -> Result<()> {
    let format = ExportFormat::from_path(path).unwrap_or_default();
    let bytes = encode(surface, format, quality)?;
    std::fs::write(path, bytes).map_err(CropFrameError::from)
}
