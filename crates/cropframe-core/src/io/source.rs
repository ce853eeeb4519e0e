use std::path::Path;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::error::{CropFrameError, Result};

use super::image_io::{mime_from_path, sniff_mime};

/// Raw image bytes handed to the editor by a loader.
#[derive(Clone, Debug, PartialEq)]
pub struct Fetched {
    pub bytes: Vec<u8>,
    /// Declared or sniffed MIME type, when one is known.
    pub mime: Option<String>,
}

/// Resolves a load source string into encoded image bytes.
///
/// The editor only decodes; where bytes come from is up to the host.
pub trait ImageLoader {
    fn fetch(&self, source: &str) -> Result<Fetched>;
}

/// Loader for `data:` URLs and local file paths.
#[derive(Clone, Copy, Debug, Default)]
pub struct FsLoader;

impl ImageLoader for FsLoader {
    fn fetch(&self, source: &str) -> Result<Fetched> {
        let trimmed = source.trim();
        if is_data_url(trimmed) {
            let url = parse_data_url(trimmed)?;
            return Ok(Fetched {
                bytes: url.bytes,
                mime: url.mime,
            });
        }
        if trimmed.contains("://") {
            return Err(CropFrameError::Io(std::io::Error::new(
                std::io::ErrorKind::Unsupported,
                format!("remote sources are not supported: {trimmed}"),
            )));
        }

        let path = Path::new(trimmed);
        let bytes = std::fs::read(path)?;
        let mime = sniff_mime(&bytes)
            .or_else(|| mime_from_path(path))
            .map(str::to_string);
        Ok(Fetched { bytes, mime })
    }
}

/// Decoded `data:` URL.
#[derive(Clone, Debug, PartialEq)]
pub struct DataUrl {
    pub mime: Option<String>,
    pub bytes: Vec<u8>,
}

pub fn is_data_url(source: &str) -> bool {
    source
        .get(..5)
        .is_some_and(|scheme| scheme.eq_ignore_ascii_case("data:"))
}

/// Parse `data:[<mime>][;param=value]*[;base64],<payload>`.
pub fn parse_data_url(source: &str) -> Result<DataUrl> {
    let source = source.trim();
    if !is_data_url(source) {
        return Err(CropFrameError::InvalidDataUrl("missing data: scheme".into()));
    }
    let (header, payload) = source[5..]
        .split_once(',')
        .ok_or_else(|| CropFrameError::InvalidDataUrl("missing ',' separator".into()))?;

    let mut parts = header.split(';');
    let mime = parts
        .next()
        .filter(|m| !m.is_empty())
        .map(|m| m.to_ascii_lowercase());
    let is_base64 = parts.any(|p| p.eq_ignore_ascii_case("base64"));

    let bytes = if is_base64 {
        let compact: String = payload.chars().filter(|c| !c.is_whitespace()).collect();
        STANDARD
            .decode(compact)
            .map_err(|e| CropFrameError::InvalidDataUrl(e.to_string()))?
    } else {
        percent_decode(payload)?
    };

    Ok(DataUrl { mime, bytes })
}

fn percent_decode(payload: &str) -> Result<Vec<u8>> {
    let raw = payload.as_bytes();
    let mut out = Vec::with_capacity(raw.len());
    let mut i = 0;
    while i < raw.len() {
        if raw[i] == b'%' {
            let hex = payload
                .get(i + 1..i + 3)
                .and_then(|h| u8::from_str_radix(h, 16).ok())
                .ok_or_else(|| {
                    CropFrameError::InvalidDataUrl(format!("bad percent escape at byte {i}"))
                })?;
            out.push(hex);
            i += 3;
        } else {
            out.push(raw[i]);
            i += 1;
        }
    }
    Ok(out)
}
