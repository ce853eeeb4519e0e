use std::path::Path;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::PngEncoder;
use image::{DynamicImage, ExtendedColorType, ImageEncoder, RgbaImage};
use serde::{Deserialize, Serialize};

use crate::error::{CropFrameError, Result};

/// Encoding used when exporting the crop surface.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Png,
    /// Lossy; alpha is dropped.
    Jpeg,
}

impl ExportFormat {
    pub fn mime_type(&self) -> &'static str {
        match self {
            Self::Png => "image/png",
            Self::Jpeg => "image/jpeg",
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Jpeg => "jpg",
        }
    }

    /// Pick a format from a file extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        match path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .as_deref()
        {
            Some("png") => Some(Self::Png),
            Some("jpg" | "jpeg") => Some(Self::Jpeg),
            _ => None,
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Png => write!(f, "PNG"),
            Self::Jpeg => write!(f, "JPEG"),
        }
    }
}

/// Map a 0..1 quality onto the JPEG encoder's 1..=100 scale.
fn jpeg_quality(quality: f32) -> u8 {
    (quality * 100.0).round().clamp(1.0, 100.0) as u8
}

/// Encode a surface. `quality` must lie in `(0.0, 1.0]`; PNG ignores it.
pub fn encode(surface: &RgbaImage, format: ExportFormat, quality: f32) -> Result<Vec<u8>> {
    if !(quality > 0.0 && quality <= 1.0) {
        return Err(CropFrameError::InvalidQuality(quality));
    }
    let (width, height) = surface.dimensions();
    if width == 0 || height == 0 {
        return Err(CropFrameError::Encode(format!(
            "cannot encode an empty {width}x{height} surface"
        )));
    }

    let mut buffer = Vec::new();
    match format {
        ExportFormat::Png => {
            PngEncoder::new(&mut buffer).write_image(
                surface.as_raw(),
                width,
                height,
                ExtendedColorType::Rgba8,
            )?;
        }
        ExportFormat::Jpeg => {
            let rgb = DynamicImage::ImageRgba8(surface.clone()).to_rgb8();
            JpegEncoder::new_with_quality(&mut buffer, jpeg_quality(quality)).write_image(
                rgb.as_raw(),
                width,
                height,
                ExtendedColorType::Rgb8,
            )?;
        }
    }
    Ok(buffer)
}

/// Wrap encoded bytes in a base64 `data:` URL.
pub fn to_data_url(bytes: &[u8], format: ExportFormat) -> String {
    format!("data:{};base64,{}", format.mime_type(), STANDARD.encode(bytes))
}
