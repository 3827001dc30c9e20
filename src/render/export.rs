/// PNG export of the composed postcard
///
/// Export is the only suspending operation in the app: it runs as an
/// async task so the UI stays responsive while the card is rasterized,
/// encoded, and written out. Triggering it again while one is in flight
/// simply runs a second independent attempt.

use std::io::Cursor;
use std::path::PathBuf;

use image::ImageFormat;
use thiserror::Error;

use super::postcard::PostcardSurface;

/// Fixed name of the exported file
pub const FILE_NAME: &str = "postcard.png";

#[derive(Debug, Error)]
pub enum ExportError {
    /// Export was invoked but no renderable surface exists
    #[error("postcard surface is not available")]
    MissingSurface,
    /// PNG encoding failed
    #[error("could not encode postcard: {0}")]
    Encode(#[from] image::ImageError),
    /// Writing the output file failed
    #[error("could not write postcard: {0}")]
    Write(#[from] std::io::Error),
}

/// Where the exported card lands: the user's Downloads folder, falling
/// back to the home directory and then the working directory.
pub fn output_path() -> PathBuf {
    dirs::download_dir()
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."))
        .join(FILE_NAME)
}

/// Rasterize the surface, encode it as PNG, and write it to `path`.
///
/// An absent surface aborts the export with `MissingSurface`; nothing is
/// written. On success the written path is returned.
pub async fn export(surface: Option<PostcardSurface>, path: PathBuf) -> Result<PathBuf, ExportError> {
    let surface = surface.ok_or(ExportError::MissingSurface)?;

    let bitmap = surface.compose();
    let mut encoded = Vec::new();
    bitmap.write_to(&mut Cursor::new(&mut encoded), ImageFormat::Png)?;

    tokio::fs::write(&path, encoded).await?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::typeface::Typeface;
    use crate::state::form::FormState;
    use std::fs;

    fn block_on<F: std::future::Future>(future: F) -> F::Output {
        tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap()
            .block_on(future)
    }

    #[test]
    fn test_output_path_uses_fixed_file_name() {
        assert_eq!(
            output_path().file_name().unwrap().to_string_lossy(),
            FILE_NAME
        );
    }

    #[test]
    fn test_export_without_surface_writes_nothing() {
        let path = std::env::temp_dir().join("postcard-maker-never-written.png");
        fs::remove_file(&path).ok();

        let result = block_on(export(None, path.clone()));

        assert!(matches!(result, Err(ExportError::MissingSurface)));
        assert!(!path.exists());
    }

    #[test]
    fn test_export_writes_png() {
        let Some(typeface) = Typeface::discover() else {
            eprintln!("no system typeface available, skipping export test");
            return;
        };

        let path = std::env::temp_dir().join("postcard-maker-export.png");
        let surface = PostcardSurface::new(&FormState::default(), typeface);

        let written = block_on(export(Some(surface), path.clone())).unwrap();
        assert_eq!(written, path);

        let bytes = fs::read(&path).unwrap();
        assert_eq!(&bytes[..4], &[0x89, b'P', b'N', b'G']);

        fs::remove_file(path).ok();
    }
}
