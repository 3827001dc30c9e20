/// System typeface discovery for export composition
///
/// The live preview relies on the toolkit's own font fallback, but the
/// offscreen rasterizer draws glyphs itself and needs a concrete font
/// file. We look for a Thai-capable font in the usual system locations
/// and fall back to DejaVu Sans (Latin-only) as a last resort.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use ab_glyph::FontVec;

/// Well-known font locations, most preferred first
const CANDIDATE_PATHS: [&str; 8] = [
    "/usr/share/fonts/truetype/noto/NotoSansThai-Regular.ttf",
    "/usr/share/fonts/noto/NotoSansThai-Regular.ttf",
    "/usr/share/fonts/truetype/noto/NotoSerifThai-Regular.ttf",
    "/usr/share/fonts/opentype/noto/NotoSansThai-Regular.otf",
    "/System/Library/Fonts/Supplemental/Ayuthaya.ttf",
    "/System/Library/Fonts/Supplemental/Sathu.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
];

/// A loaded font, shared between the app state and export snapshots
#[derive(Debug, Clone)]
pub struct Typeface {
    font: Arc<FontVec>,
    path: PathBuf,
}

impl Typeface {
    /// Search the well-known locations and load the first usable font.
    /// Returns None when no candidate exists or parses.
    pub fn discover() -> Option<Self> {
        for candidate in CANDIDATE_PATHS {
            if let Some(typeface) = Self::load(Path::new(candidate)) {
                println!("🔤 Using typeface: {}", typeface.path.display());
                return Some(typeface);
            }
        }

        eprintln!("⚠️  No usable typeface found; postcard export is unavailable.");
        None
    }

    /// Load a specific font file
    pub fn load(path: &Path) -> Option<Self> {
        let bytes = fs::read(path).ok()?;
        let font = FontVec::try_from_vec(bytes).ok()?;

        Some(Typeface {
            font: Arc::new(font),
            path: path.to_path_buf(),
        })
    }

    pub fn font(&self) -> &FontVec {
        &self.font
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_missing_font_is_none() {
        assert!(Typeface::load(Path::new("/nonexistent/font.ttf")).is_none());
    }

    #[test]
    fn test_load_non_font_file_is_none() {
        let path = std::env::temp_dir().join("postcard-maker-not-a-font.ttf");
        fs::write(&path, b"definitely not a font").unwrap();

        assert!(Typeface::load(&path).is_none());

        fs::remove_file(path).ok();
    }
}
