use ab_glyph::{FontRef, PxScale};
use image::{Rgb, RgbImage, imageops};
use imageproc::drawing::{draw_text_mut, text_size};

use crate::ExportError;

/// DejaVu Sans, which covers the full Vietnamese Latin range
static FONT_DATA: &[u8] = include_bytes!("../assets/DejaVuSans.ttf");

const ELLIPSIS: char = '…';

pub(crate) fn load_font() -> Result<FontRef<'static>, ExportError> {
    Ok(FontRef::try_from_slice(FONT_DATA)?)
}

pub(crate) fn text_width(font: &FontRef<'_>, scale: PxScale, text: &str) -> u32 {
    text_size(scale, font, text).0
}

/// `text` unchanged if it fits in `max_width`, otherwise the longest prefix
/// that fits with an ellipsis appended
pub(crate) fn fit_label(font: &FontRef<'_>, scale: PxScale, text: &str, max_width: u32) -> String {
    if text_width(font, scale, text) <= max_width {
        return text.to_string();
    }

    let chars: Vec<char> = text.chars().collect();
    for len in (1..chars.len()).rev() {
        let mut candidate: String = chars[..len].iter().collect();
        candidate.push(ELLIPSIS);
        if text_width(font, scale, &candidate) <= max_width {
            return candidate;
        }
    }
    ELLIPSIS.to_string()
}

pub(crate) fn draw_centered(
    image: &mut RgbImage,
    font: &FontRef<'_>,
    text: &str,
    center_x: u32,
    y: u32,
    scale: PxScale,
    color: Rgb<u8>,
) {
    let x = center_x.saturating_sub(text_width(font, scale, text) / 2);
    draw_text_mut(image, color, x as i32, y as i32, scale, font, text);
}

/// Draw `text` rotated a quarter turn counterclockwise, reading bottom to top,
/// centred vertically on `center_y`
pub(crate) fn draw_vertical(
    image: &mut RgbImage,
    font: &FontRef<'_>,
    text: &str,
    x: u32,
    center_y: u32,
    scale: PxScale,
    colors: (Rgb<u8>, Rgb<u8>),
) {
    let (foreground, background) = colors;
    let (width, height) = text_size(scale, font, text);
    if width == 0 || height == 0 {
        return;
    }

    // Descenders can reach below the reported height
    let padding = (scale.y / 4.0).ceil() as u32;
    let mut strip = RgbImage::from_pixel(width, height + padding, background);
    draw_text_mut(&mut strip, foreground, 0, 0, scale, font, text);

    let rotated = imageops::rotate270(&strip);
    let top = center_y.saturating_sub(rotated.height() / 2);
    imageops::overlay(image, &rotated, i64::from(x), i64::from(top));
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCALE: PxScale = PxScale { x: 16.0, y: 16.0 };

    #[test]
    fn test_bundled_font_loads() {
        assert!(load_font().is_ok());
    }

    #[test]
    fn test_vietnamese_text_has_width() {
        let font = load_font().unwrap();
        assert!(text_width(&font, SCALE, "người") > 0);
        assert!(text_width(&font, SCALE, "xin chào") > text_width(&font, SCALE, "xin"));
    }

    #[test]
    fn test_fit_label_keeps_short_words() {
        let font = load_font().unwrap();
        assert_eq!(fit_label(&font, SCALE, "dự án", 200), "dự án");
    }

    #[test]
    fn test_fit_label_ellipsizes_long_words() {
        let font = load_font().unwrap();
        let word = "thành phố hồ chí minh";
        let max_width = text_width(&font, SCALE, word) / 2;

        let label = fit_label(&font, SCALE, word, max_width);

        assert!(label.ends_with(ELLIPSIS));
        assert!(word.starts_with(label.trim_end_matches(ELLIPSIS)));
        assert!(text_width(&font, SCALE, &label) <= max_width);
    }

    #[test]
    fn test_vertical_text_marks_pixels() {
        let font = load_font().unwrap();
        let white = Rgb([255, 255, 255]);
        let black = Rgb([0, 0, 0]);
        let mut image = RgbImage::from_pixel(40, 200, white);

        draw_vertical(&mut image, &font, "Frequency", 5, 100, SCALE, (black, white));

        assert!(image.pixels().any(|p| *p != white));
    }
}
