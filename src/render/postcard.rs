/// Offscreen postcard composition
///
/// `PostcardSurface` is the renderable surface handed to the export
/// action: a snapshot of the form values plus the typeface needed to draw
/// them. Composing it produces the same card the preview shows - title,
/// date line, name line, then the photo cropped to a fixed square or the
/// localized placeholder panel.

use std::sync::Arc;

use ab_glyph::PxScale;
use image::imageops::{self, FilterType};
use image::{Rgba, RgbaImage};
use imageproc::drawing::{draw_filled_rect_mut, draw_hollow_rect_mut, draw_text_mut, text_size};
use imageproc::rect::Rect;

use crate::state::form::FormState;
use super::typeface::Typeface;

/// Card dimensions in pixels
pub const CARD_WIDTH: u32 = 512;
pub const CARD_HEIGHT: u32 = 472;

/// Side of the square photo area (and of the placeholder panel)
pub const PHOTO_SIZE: u32 = 256;

const BORDER_WIDTH: u32 = 4;

const TITLE_SCALE: f32 = 36.0;
const LINE_SCALE: f32 = 24.0;

const TITLE_Y: i32 = 36;
const DATE_Y: i32 = 96;
const NAME_Y: i32 = 132;
const PHOTO_Y: i64 = 180;

/// Card title, matching the preview
const TITLE: &str = "โปสการ์ด";
/// Placeholder text shown when no photo is selected
const NO_PHOTO: &str = "ไม่มีรูปภาพ";

// Colors from the card's visual design
const GRADIENT_TOP: Rgba<u8> = Rgba([0xF0, 0xF4, 0xF8, 0xFF]);
const GRADIENT_BOTTOM: Rgba<u8> = Rgba([0xFF, 0xFF, 0xFF, 0xFF]);
const BORDER_COLOR: Rgba<u8> = Rgba([0xD1, 0xD5, 0xDB, 0xFF]);
const TITLE_COLOR: Rgba<u8> = Rgba([0x1F, 0x29, 0x37, 0xFF]);
const TEXT_COLOR: Rgba<u8> = Rgba([0x4B, 0x55, 0x63, 0xFF]);
const PLACEHOLDER_BG: Rgba<u8> = Rgba([0xD1, 0xD5, 0xDB, 0xFF]);
const PLACEHOLDER_TEXT: Rgba<u8> = Rgba([0x6B, 0x72, 0x80, 0xFF]);

/// A snapshot of everything needed to rasterize the postcard.
///
/// Built from the form state at the moment export is triggered; a photo
/// picked afterwards does not affect an export already in flight.
#[derive(Debug, Clone)]
pub struct PostcardSurface {
    name: String,
    date: String,
    photo: Option<Arc<RgbaImage>>,
    typeface: Typeface,
}

impl PostcardSurface {
    pub fn new(form: &FormState, typeface: Typeface) -> Self {
        PostcardSurface {
            name: form.name.clone(),
            date: form.date.clone(),
            photo: form.photo.as_ref().map(|photo| photo.pixels()),
            typeface,
        }
    }

    /// Rasterize the card into a pixel bitmap.
    ///
    /// Deterministic: the same snapshot always composes the same image.
    pub fn compose(&self) -> RgbaImage {
        let mut canvas = gradient_background();

        draw_centered_text(&mut canvas, TITLE, TITLE_Y, TITLE_SCALE, TITLE_COLOR, &self.typeface);
        if !self.date.is_empty() {
            draw_centered_text(&mut canvas, &self.date, DATE_Y, LINE_SCALE, TEXT_COLOR, &self.typeface);
        }
        if !self.name.is_empty() {
            draw_centered_text(&mut canvas, &self.name, NAME_Y, LINE_SCALE, TEXT_COLOR, &self.typeface);
        }

        let photo_x = ((CARD_WIDTH - PHOTO_SIZE) / 2) as i64;
        match &self.photo {
            Some(pixels) => {
                let scaled = cover_square(pixels, PHOTO_SIZE);
                imageops::overlay(&mut canvas, &scaled, photo_x, PHOTO_Y);
            }
            None => {
                draw_filled_rect_mut(
                    &mut canvas,
                    Rect::at(photo_x as i32, PHOTO_Y as i32).of_size(PHOTO_SIZE, PHOTO_SIZE),
                    PLACEHOLDER_BG,
                );

                // Center the placeholder text inside the panel
                let font = self.typeface.font();
                let scale = PxScale::from(LINE_SCALE);
                let (text_w, text_h) = text_size(scale, font, NO_PHOTO);
                let x = photo_x as i32 + (PHOTO_SIZE.saturating_sub(text_w) / 2) as i32;
                let y = PHOTO_Y as i32 + (PHOTO_SIZE.saturating_sub(text_h) / 2) as i32;
                draw_text_mut(&mut canvas, PLACEHOLDER_TEXT, x, y, scale, font, NO_PHOTO);
            }
        }

        for inset in 0..BORDER_WIDTH {
            draw_hollow_rect_mut(
                &mut canvas,
                Rect::at(inset as i32, inset as i32)
                    .of_size(CARD_WIDTH - inset * 2, CARD_HEIGHT - inset * 2),
                BORDER_COLOR,
            );
        }

        canvas
    }
}

/// Fill the card with a vertical light gradient
fn gradient_background() -> RgbaImage {
    let mut canvas = RgbaImage::new(CARD_WIDTH, CARD_HEIGHT);

    for y in 0..CARD_HEIGHT {
        let t = y as f32 / (CARD_HEIGHT - 1) as f32;
        let pixel = Rgba([
            lerp(GRADIENT_TOP.0[0], GRADIENT_BOTTOM.0[0], t),
            lerp(GRADIENT_TOP.0[1], GRADIENT_BOTTOM.0[1], t),
            lerp(GRADIENT_TOP.0[2], GRADIENT_BOTTOM.0[2], t),
            0xFF,
        ]);
        for x in 0..CARD_WIDTH {
            canvas.put_pixel(x, y, pixel);
        }
    }

    canvas
}

fn lerp(a: u8, b: u8, t: f32) -> u8 {
    (a as f32 + (b as f32 - a as f32) * t).round() as u8
}

/// Horizontally centered text at a fixed baseline row
fn draw_centered_text(
    canvas: &mut RgbaImage,
    text: &str,
    y: i32,
    scale: f32,
    color: Rgba<u8>,
    typeface: &Typeface,
) {
    let scale = PxScale::from(scale);
    let (text_w, _) = text_size(scale, typeface.font(), text);
    let x = (CARD_WIDTH.saturating_sub(text_w) / 2) as i32;
    draw_text_mut(canvas, color, x, y, scale, typeface.font(), text);
}

/// Scale and center-crop to a square, like the preview's cover fit
fn cover_square(src: &RgbaImage, size: u32) -> RgbaImage {
    let side = src.width().min(src.height()).max(1);
    let x = (src.width() - side) / 2;
    let y = (src.height() - side) / 2;

    let cropped = imageops::crop_imm(src, x, y, side, side).to_image();
    imageops::resize(&cropped, size, size, FilterType::Lanczos3)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::photo::Photo;
    use std::fs;

    fn system_typeface() -> Option<Typeface> {
        let typeface = Typeface::discover();
        if typeface.is_none() {
            eprintln!("no system typeface available, skipping composition test");
        }
        typeface
    }

    fn surface(form: &FormState, typeface: Typeface) -> RgbaImage {
        PostcardSurface::new(form, typeface).compose()
    }

    fn assert_near(actual: Rgba<u8>, expected: Rgba<u8>) {
        for channel in 0..4 {
            let delta = actual.0[channel].abs_diff(expected.0[channel]);
            assert!(delta <= 2, "channel {} off by {}", channel, delta);
        }
    }

    #[test]
    fn test_cover_square_crops_landscape() {
        let src = RgbaImage::from_pixel(100, 50, Rgba([10, 20, 30, 255]));
        let out = cover_square(&src, 64);
        assert_eq!((out.width(), out.height()), (64, 64));
    }

    #[test]
    fn test_cover_square_crops_portrait() {
        let src = RgbaImage::from_pixel(30, 90, Rgba([10, 20, 30, 255]));
        let out = cover_square(&src, 64);
        assert_eq!((out.width(), out.height()), (64, 64));
    }

    #[test]
    fn test_compose_dimensions_and_placeholder() {
        let Some(typeface) = system_typeface() else { return };

        let card = surface(&FormState::default(), typeface);
        assert_eq!((card.width(), card.height()), (CARD_WIDTH, CARD_HEIGHT));

        // Corner of the photo area shows the gray placeholder panel
        let x = (CARD_WIDTH - PHOTO_SIZE) / 2 + 4;
        let y = PHOTO_Y as u32 + 4;
        assert_eq!(*card.get_pixel(x, y), PLACEHOLDER_BG);
    }

    #[test]
    fn test_compose_includes_photo() {
        let Some(typeface) = system_typeface() else { return };

        let path = std::env::temp_dir().join("postcard-maker-compose.png");
        let red = Rgba([200, 40, 40, 255]);
        RgbaImage::from_pixel(64, 64, red).save(&path).unwrap();

        let mut form = FormState::default();
        form.replace_photo(Photo::load(&path).unwrap());
        fs::remove_file(path).ok();

        let card = surface(&form, typeface);
        let center = *card.get_pixel(CARD_WIDTH / 2, PHOTO_Y as u32 + PHOTO_SIZE / 2);
        assert_near(center, red);
    }

    #[test]
    fn test_snapshot_survives_photo_replacement() {
        let Some(typeface) = system_typeface() else { return };

        let path = std::env::temp_dir().join("postcard-maker-snapshot.png");
        let red = Rgba([200, 40, 40, 255]);
        RgbaImage::from_pixel(16, 16, red).save(&path).unwrap();

        let mut form = FormState::default();
        form.replace_photo(Photo::load(&path).unwrap());
        fs::remove_file(path).ok();

        let snapshot = PostcardSurface::new(&form, typeface);
        form.clear_photo();

        // The snapshot still composes with the photo it captured
        let card = snapshot.compose();
        let center = *card.get_pixel(CARD_WIDTH / 2, PHOTO_Y as u32 + PHOTO_SIZE / 2);
        assert_near(center, red);
    }
}
