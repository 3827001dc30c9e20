/// The live form values backing the postcard preview
///
/// Each field is written by exactly one message handler, so there is no
/// write contention among them. Nothing here is persisted; the state is
/// created empty at startup and dropped at exit.

use super::photo::Photo;

/// Current values of the three form fields
#[derive(Debug, Clone, Default)]
pub struct FormState {
    /// Free text, reflected verbatim in the preview (may be empty)
    pub name: String,
    /// Pre-formatted display text, empty until a date is chosen
    pub date: String,
    /// The selected photo, if any
    pub photo: Option<Photo>,
}

impl FormState {
    /// Replace the displayed photo.
    ///
    /// The previous photo (if any) is dropped here, releasing its pixel
    /// buffer at the moment of replacement. An export that already took a
    /// snapshot keeps that snapshot alive through its own `Arc`.
    pub fn replace_photo(&mut self, photo: Photo) {
        self.photo = Some(photo);
    }

    /// Drop the displayed photo, falling back to the placeholder panel
    pub fn clear_photo(&mut self) {
        self.photo = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::RgbaImage;
    use std::fs;
    use std::sync::Arc;

    fn test_photo(name: &str) -> Photo {
        let path = std::env::temp_dir().join(format!("postcard-maker-form-{}", name));
        let img = RgbaImage::from_pixel(8, 8, image::Rgba([0, 128, 255, 255]));
        img.save(&path).unwrap();
        let photo = Photo::load(&path).unwrap();
        fs::remove_file(path).ok();
        photo
    }

    #[test]
    fn test_starts_empty() {
        let form = FormState::default();
        assert_eq!(form.name, "");
        assert_eq!(form.date, "");
        assert!(form.photo.is_none());
    }

    #[test]
    fn test_replacement_releases_previous_photo() {
        let mut form = FormState::default();

        let first = test_photo("first.png");
        let first_pixels = first.pixels();
        form.replace_photo(first);
        assert_eq!(Arc::strong_count(&first_pixels), 2);

        // Selecting a second photo drops the first buffer immediately
        form.replace_photo(test_photo("second.png"));
        assert_eq!(Arc::strong_count(&first_pixels), 1);
        assert!(form.photo.is_some());
    }
}
