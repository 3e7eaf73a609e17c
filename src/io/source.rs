use std::path::Path;

use image::ImageReader;
use thiserror::Error;
use tracing::info;

/// Errors encountered when reading a source image
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Decode error: {0}")]
    Decode(#[from] image::ImageError),
}

/// A decoded source image held as an interleaved RGBA8 buffer.
///
/// Whatever the on-disk format and color type, pixels are normalized to
/// RGBA8 on load so transparency survives into the generated icons.
#[derive(Debug, Clone)]
pub struct SourceImage {
    pub width: u32,
    pub height: u32,
    rgba: Vec<u8>,
}

impl SourceImage {
    /// Open and decode the image at `path`, guessing the format from content.
    pub fn open(path: &Path) -> Result<Self, SourceError> {
        let decoded = ImageReader::open(path)?.with_guessed_format()?.decode()?;
        let rgba = decoded.to_rgba8();
        let (width, height) = rgba.dimensions();
        info!("Loaded source image {:?} ({}x{})", path, width, height);
        Ok(Self {
            width,
            height,
            rgba: rgba.into_raw(),
        })
    }

    pub fn pixels(&self) -> &[u8] {
        &self.rgba
    }

    pub fn into_pixels(self) -> Vec<u8> {
        self.rgba
    }
}
