//! Raster primitives: disks, rectangles and centered text.
//!
//! All coordinates are signed; anything falling outside the canvas is
//! clipped silently.

use ab_glyph::{Font, ScaleFont, point};
use image::{Rgba, RgbaImage};

use super::fonts::Face;

#[inline]
fn put(canvas: &mut RgbaImage, x: i32, y: i32, color: Rgba<u8>) {
    if x >= 0 && y >= 0 && (x as u32) < canvas.width() && (y as u32) < canvas.height() {
        canvas.put_pixel(x as u32, y as u32, color);
    }
}

/// Composite `color` over the pixel with the given coverage (0.0..=1.0).
#[inline]
fn blend(canvas: &mut RgbaImage, x: i32, y: i32, color: Rgba<u8>, coverage: f32) {
    if x < 0 || y < 0 || x as u32 >= canvas.width() || y as u32 >= canvas.height() {
        return;
    }
    let a = coverage.clamp(0.0, 1.0);
    let dst = canvas.get_pixel_mut(x as u32, y as u32);
    for i in 0..3 {
        dst[i] = (color[i] as f32 * a + dst[i] as f32 * (1.0 - a)).round() as u8;
    }
    dst[3] = 255;
}

/// Filled disk: every pixel with `dx² + dy² <= r²`.
pub fn fill_circle(canvas: &mut RgbaImage, cx: i32, cy: i32, r: i32, color: Rgba<u8>) {
    for dy in -r..=r {
        for dx in -r..=r {
            if dx * dx + dy * dy <= r * r {
                put(canvas, cx + dx, cy + dy, color);
            }
        }
    }
}

/// Filled axis-aligned rectangle with its top-left corner at (x, y).
pub fn fill_rect(canvas: &mut RgbaImage, x: i32, y: i32, w: i32, h: i32, color: Rgba<u8>) {
    for dy in 0..h {
        for dx in 0..w {
            put(canvas, x + dx, y + dy, color);
        }
    }
}

/// Draw `text` horizontally centered on `cx` with its baseline at `baseline`.
pub fn draw_text_centered(
    canvas: &mut RgbaImage,
    face: &Face,
    text: &str,
    cx: i32,
    baseline: i32,
    color: Rgba<u8>,
) {
    let font = face.font();
    let scale = face.scale();
    let scaled = font.as_scaled(scale);

    let width = face.measure(text).round() as i32;
    let mut caret = (cx - width / 2) as f32;
    let mut prev = None;

    for ch in text.chars() {
        let id = font.glyph_id(ch);
        if let Some(p) = prev {
            caret += scaled.kern(p, id);
        }
        let glyph = id.with_scale_and_position(scale, point(caret, baseline as f32));
        caret += scaled.h_advance(id);
        prev = Some(id);

        if let Some(outlined) = font.outline_glyph(glyph) {
            let bounds = outlined.px_bounds();
            outlined.draw(|gx, gy, coverage| {
                let x = bounds.min.x as i32 + gx as i32;
                let y = bounds.min.y as i32 + gy as i32;
                blend(canvas, x, y, color, coverage);
            });
        }
    }
}
