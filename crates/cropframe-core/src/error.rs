use std::fmt;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CropFrameError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image format error: {0}")]
    ImageError(#[from] image::ImageError),

    #[error("Unsupported MIME type: {0}")]
    UnsupportedMime(String),

    #[error("Image {width}x{height} is below the minimum size {min_width}x{min_height}")]
    ImageTooSmall {
        width: u32,
        height: u32,
        min_width: u32,
        min_height: u32,
    },

    #[error("Invalid image dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("Invalid data URL: {0}")]
    InvalidDataUrl(String),

    #[error("Quality must be in (0.0, 1.0], got {0}")]
    InvalidQuality(f32),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Encode error: {0}")]
    Encode(String),
}

impl CropFrameError {
    /// Classify the error into the reason reported to `on_error` hooks.
    pub fn kind(&self) -> LoadErrorKind {
        match self {
            Self::UnsupportedMime(_) => LoadErrorKind::FileType,
            Self::ImageTooSmall { .. } => LoadErrorKind::ImageSize,
            _ => LoadErrorKind::Unknown,
        }
    }
}

/// Reason a load attempt failed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LoadErrorKind {
    /// Input is not an `image/*` MIME type.
    FileType,
    /// Decoded image is smaller than the configured minimum.
    ImageSize,
    /// Decode or read failure of any other kind.
    Unknown,
}

impl fmt::Display for LoadErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FileType => write!(f, "file-type"),
            Self::ImageSize => write!(f, "image-size"),
            Self::Unknown => write!(f, "unknown"),
        }
    }
}

pub type Result<T> = std::result::Result<T, CropFrameError>;
