/// Selected-photo handling
///
/// A `Photo` owns the decoded pixels of the most recently chosen file.
/// Dropping it (when a new selection replaces it, or when the app exits)
/// releases the buffer, so there is never more than one live photo.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use iced::widget::image::Handle;
use image::RgbaImage;
use thiserror::Error;

/// File extensions offered by the photo picker dialog
pub const IMAGE_EXTENSIONS: [&str; 7] = ["png", "jpg", "jpeg", "gif", "bmp", "webp", "tiff"];

/// Error raised when a selected file cannot be used as a photo
#[derive(Debug, Error)]
pub enum PhotoError {
    /// The file could not be read or decoded as an image
    #[error("could not decode image: {0}")]
    Decode(#[from] image::ImageError),
}

/// The currently selected photo.
///
/// Holds the decoded RGBA pixels behind an `Arc` so an in-flight export
/// keeps its snapshot alive even if the user picks a new photo meanwhile,
/// plus a widget handle for the live preview.
#[derive(Debug, Clone)]
pub struct Photo {
    pixels: Arc<RgbaImage>,
    handle: Handle,
    path: PathBuf,
}

impl Photo {
    /// Decode the file at `path` into a displayable photo.
    ///
    /// No file-type or size validation beyond what decoding itself
    /// enforces; anything the `image` crate can decode is accepted.
    pub fn load(path: &Path) -> Result<Self, PhotoError> {
        let decoded = image::open(path)?.to_rgba8();
        let handle = Handle::from_rgba(decoded.width(), decoded.height(), decoded.as_raw().clone());

        Ok(Photo {
            pixels: Arc::new(decoded),
            handle,
            path: path.to_path_buf(),
        })
    }

    /// Widget handle for the live preview
    pub fn handle(&self) -> Handle {
        self.handle.clone()
    }

    /// Shared pixel buffer for export composition
    pub fn pixels(&self) -> Arc<RgbaImage> {
        Arc::clone(&self.pixels)
    }

    /// Filename of the source file, for status messages
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string()
    }
}
