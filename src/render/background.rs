//! Background styles for the wallpaper canvas.
//!
//! Every style derives its palette from a single seed color. Passes run
//! row-parallel with rayon; only [`BackgroundStyle::Noise`] is
//! non-deterministic.
//!
//! | Style | Passes |
//! |-------|--------|
//! | plain | solid fill |
//! | gradient | vertical gradient (×1.2 → ×0.4), vignette 0.45 |
//! | noise | solid fill, ±8 grain |
//! | ios | vertical gradient (×1.15 → ×0.3), clock-zone glow, vignette 0.5 |

use image::{Rgba, RgbaImage};
use rand::Rng;
use rayon::prelude::*;

use crate::device::DeviceProfile;
use crate::shader::{dist, falloff_linear, lerp, vignette};
use crate::theme::rgb;

/// Largest per-pixel offset added by the noise style.
const NOISE_AMPLITUDE: i32 = 8;

/// Brightness added at the center of the clock-zone glow.
const GLOW_STRENGTH: f32 = 18.0;

/// Glow radius as a fraction of canvas width.
const GLOW_RADIUS: f32 = 0.6;

/// Available background styles.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BackgroundStyle {
    /// Solid seed color.
    Plain,
    /// Vertical gradient with a soft vignette.
    Gradient,
    /// Solid seed color with per-pixel grain.
    Noise,
    /// Softer gradient, glow behind the clock and a stronger vignette.
    #[default]
    Premium,
}

impl BackgroundStyle {
    /// Parse a style name. Unknown names select the premium style.
    pub fn parse(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "plain" | "solid" => BackgroundStyle::Plain,
            "gradient" => BackgroundStyle::Gradient,
            "noise" => BackgroundStyle::Noise,
            _ => BackgroundStyle::Premium,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            BackgroundStyle::Plain => "plain",
            BackgroundStyle::Gradient => "gradient",
            BackgroundStyle::Noise => "noise",
            BackgroundStyle::Premium => "ios",
        }
    }

    /// Whether two renders with identical inputs produce identical pixels.
    pub fn is_deterministic(self) -> bool {
        !matches!(self, BackgroundStyle::Noise)
    }
}

// ============================================================================
// SEED COLORS
// ============================================================================

/// Resolve a seed color from a palette name or a `#RRGGBB` literal.
///
/// Never fails: empty, unknown or malformed input resolves to black.
pub fn seed_color(value: &str) -> Rgba<u8> {
    let value = value.trim().to_ascii_lowercase();

    if let Some(hex) = value.strip_prefix('#') {
        return parse_hex(hex).unwrap_or(rgb(0, 0, 0));
    }

    match value.as_str() {
        "blue" => rgb(10, 20, 40),
        "purple" => rgb(25, 10, 40),
        "green" => rgb(10, 40, 20),
        "red" => rgb(40, 10, 10),
        _ => rgb(0, 0, 0),
    }
}

fn parse_hex(hex: &str) -> Option<Rgba<u8>> {
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    Some(rgb(channel(0)?, channel(2)?, channel(4)?))
}

/// Multiply each channel by `k`, saturating at 255. Alpha stays opaque.
pub fn lighten(c: Rgba<u8>, k: f32) -> Rgba<u8> {
    scale_channels(c, k)
}

/// Multiply each channel by `k` (normally below 1). Alpha stays opaque.
pub fn darken(c: Rgba<u8>, k: f32) -> Rgba<u8> {
    scale_channels(c, k)
}

#[inline]
fn scale_channels(c: Rgba<u8>, k: f32) -> Rgba<u8> {
    let f = |v: u8| (v as f32 * k).clamp(0.0, 255.0) as u8;
    rgb(f(c[0]), f(c[1]), f(c[2]))
}

// ============================================================================
// COMPOSITING
// ============================================================================

/// Paint a device-sized canvas with the given style.
pub fn render_background(
    style: BackgroundStyle,
    seed: Rgba<u8>,
    device: &DeviceProfile,
) -> RgbaImage {
    let mut canvas = RgbaImage::new(device.width, device.height);
    paint(&mut canvas, style, seed, device.clock_bottom());
    canvas
}

/// Paint `canvas` in place. `clock_bottom` bounds the premium glow.
pub fn paint(canvas: &mut RgbaImage, style: BackgroundStyle, seed: Rgba<u8>, clock_bottom: i32) {
    match style {
        BackgroundStyle::Plain => fill_solid(canvas, seed),
        BackgroundStyle::Gradient => {
            vertical_gradient(canvas, lighten(seed, 1.2), darken(seed, 0.4));
            add_vignette(canvas, 0.45);
        }
        BackgroundStyle::Noise => {
            fill_solid(canvas, seed);
            add_noise(canvas, NOISE_AMPLITUDE);
        }
        BackgroundStyle::Premium => {
            vertical_gradient(canvas, lighten(seed, 1.15), darken(seed, 0.3));
            add_clock_glow(canvas, clock_bottom);
            add_vignette(canvas, 0.5);
        }
    }
}

/// Run `f(y, row)` for every row of RGBA bytes in parallel.
fn for_each_row<F>(canvas: &mut RgbaImage, f: F)
where
    F: Fn(u32, &mut [u8]) + Sync + Send,
{
    let stride = canvas.width() as usize * 4;
    if stride == 0 {
        return;
    }
    canvas
        .par_chunks_mut(stride)
        .enumerate()
        .for_each(|(y, row)| f(y as u32, row));
}

fn fill_solid(canvas: &mut RgbaImage, color: Rgba<u8>) {
    for_each_row(canvas, |_, row| {
        for px in row.chunks_exact_mut(4) {
            px.copy_from_slice(&color.0);
        }
    });
}

fn vertical_gradient(canvas: &mut RgbaImage, top: Rgba<u8>, bottom: Rgba<u8>) {
    let height = canvas.height().max(1) as f32;
    for_each_row(canvas, |y, row| {
        let t = y as f32 / height;
        let mix = |i: usize| lerp(top[i] as f32, bottom[i] as f32, t) as u8;
        let color = [mix(0), mix(1), mix(2), 255];
        for px in row.chunks_exact_mut(4) {
            px.copy_from_slice(&color);
        }
    });
}

/// Darken toward the corners. `power` is the darkening at a corner.
fn add_vignette(canvas: &mut RgbaImage, power: f32) {
    let cx = canvas.width() as f32 / 2.0;
    let cy = canvas.height() as f32 / 2.0;
    let max_dist = cx.hypot(cy).max(f32::EPSILON);

    for_each_row(canvas, |y, row| {
        for (x, px) in row.chunks_exact_mut(4).enumerate() {
            let d = dist(x as f32, y as f32, cx, cy) / max_dist;
            let v = vignette(d, power);
            for c in &mut px[..3] {
                *c = (*c as f32 * v) as u8;
            }
        }
    });
}

/// Radial brightening centered in the clock zone, clipped to `y < clock_bottom`.
fn add_clock_glow(canvas: &mut RgbaImage, clock_bottom: i32) {
    let cx = canvas.width() as f32 / 2.0;
    let cy = clock_bottom as f32 / 2.0;
    let radius = canvas.width() as f32 * GLOW_RADIUS;
    if radius <= 0.0 {
        return;
    }

    for_each_row(canvas, |y, row| {
        if y as i32 >= clock_bottom {
            return;
        }
        for (x, px) in row.chunks_exact_mut(4).enumerate() {
            let k = falloff_linear(dist(x as f32, y as f32, cx, cy), radius);
            if k <= 0.0 {
                continue;
            }
            for c in &mut px[..3] {
                *c = (*c as f32 + k * GLOW_STRENGTH).min(255.0) as u8;
            }
        }
    });
}

/// Add a uniform random offset in `[-amplitude, amplitude]` to every pixel.
///
/// One offset per pixel, applied to every channel.
fn add_noise(canvas: &mut RgbaImage, amplitude: i32) {
    for_each_row(canvas, |_, row| {
        let mut rng = rand::rng();
        for px in row.chunks_exact_mut(4) {
            let n = rng.random_range(-amplitude..=amplitude);
            for c in &mut px[..3] {
                *c = (*c as i32 + n).clamp(0, 255) as u8;
            }
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_device() -> DeviceProfile {
        DeviceProfile {
            key: "test",
            name: "Test",
            width: 60,
            height: 120,
            clock_zone_ratio: 0.3,
            buttons_zone_ratio: 0.8,
            bottom_inset: None,
        }
    }

    #[test]
    fn test_seed_color_names() {
        assert_eq!(seed_color("blue"), rgb(10, 20, 40));
        assert_eq!(seed_color("  Purple "), rgb(25, 10, 40));
        assert_eq!(seed_color("black"), rgb(0, 0, 0));
        assert_eq!(seed_color(""), rgb(0, 0, 0));
        assert_eq!(seed_color("chartreuse"), rgb(0, 0, 0));
    }

    #[test]
    fn test_seed_color_hex() {
        assert_eq!(seed_color("#1a2B3c"), rgb(0x1a, 0x2b, 0x3c));
        assert_eq!(seed_color("#fff"), rgb(0, 0, 0));
        assert_eq!(seed_color("#12345g"), rgb(0, 0, 0));
        assert_eq!(seed_color("#ééé"), rgb(0, 0, 0));
    }

    #[test]
    fn test_lighten_saturates() {
        assert_eq!(lighten(rgb(100, 200, 250), 1.2), rgb(120, 240, 255));
        assert_eq!(lighten(rgb(10, 20, 40), 1.0)[3], 255);
    }

    #[test]
    fn test_lighten_darken_round_trip() {
        for k in [1.1f32, 1.2, 1.5, 2.0] {
            for v in [0u8, 1, 17, 64, 100, 120] {
                if v as f32 * k >= 255.0 {
                    continue;
                }
                let c = rgb(v, v / 2, v / 3);
                let back = darken(lighten(c, k), 1.0 / k);
                for i in 0..3 {
                    let diff = (back[i] as i32 - c[i] as i32).abs();
                    assert!(diff <= 1, "k={} v={} channel {} drifted by {}", k, v, i, diff);
                }
                assert_eq!(back[3], 255);
            }
        }
    }

    #[test]
    fn test_parse_style() {
        assert_eq!(BackgroundStyle::parse("plain"), BackgroundStyle::Plain);
        assert_eq!(BackgroundStyle::parse("gradient"), BackgroundStyle::Gradient);
        assert_eq!(BackgroundStyle::parse("noise"), BackgroundStyle::Noise);
        assert_eq!(BackgroundStyle::parse("ios"), BackgroundStyle::Premium);
        assert_eq!(BackgroundStyle::parse("marble"), BackgroundStyle::Premium);
    }

    #[test]
    fn test_plain_fills_every_pixel() {
        let seed = rgb(12, 34, 56);
        let img = render_background(BackgroundStyle::Plain, seed, &small_device());
        assert_eq!(img.dimensions(), (60, 120));
        assert!(img.pixels().all(|p| *p == seed));
    }

    #[test]
    fn test_gradient_darkens_downward_and_outward() {
        let img = render_background(BackgroundStyle::Gradient, rgb(100, 100, 100), &small_device());
        let top = img.get_pixel(30, 0)[0];
        let bottom = img.get_pixel(30, 119)[0];
        assert!(top > bottom);

        let center = img.get_pixel(30, 60)[0];
        let edge = img.get_pixel(0, 60)[0];
        assert!(center > edge);
        assert!(img.pixels().all(|p| p[3] == 255));
    }

    #[test]
    fn test_premium_glow_lights_clock_zone() {
        let device = small_device();
        let img = render_background(BackgroundStyle::Premium, rgb(0, 0, 0), &device);
        // Black seed: the gradient is black, so any light comes from the glow
        let glow_y = (device.clock_bottom() / 2) as u32;
        assert!(img.get_pixel(30, glow_y)[0] > 0);
        assert_eq!(img.get_pixel(30, 110)[0], 0);
    }

    #[test]
    fn test_noise_stays_within_amplitude() {
        let seed = rgb(100, 3, 250);
        let img = render_background(BackgroundStyle::Noise, seed, &small_device());
        for p in img.pixels() {
            for i in 0..3 {
                let lo = (seed[i] as i32 - NOISE_AMPLITUDE).max(0);
                let hi = (seed[i] as i32 + NOISE_AMPLITUDE).min(255);
                assert!((lo..=hi).contains(&(p[i] as i32)));
            }
            assert_eq!(p[3], 255);
        }
    }

    #[test]
    fn test_noise_shifts_channels_together() {
        let img = render_background(BackgroundStyle::Noise, rgb(64, 64, 64), &small_device());
        assert!(img.pixels().all(|p| p[0] == p[1] && p[1] == p[2]));
    }

    #[test]
    fn test_deterministic_styles_repeat() {
        let device = small_device();
        for style in [BackgroundStyle::Plain, BackgroundStyle::Gradient, BackgroundStyle::Premium] {
            assert!(style.is_deterministic());
            let a = render_background(style, seed_color("blue"), &device);
            let b = render_background(style, seed_color("blue"), &device);
            assert_eq!(a.as_raw(), b.as_raw());
        }
        assert!(!BackgroundStyle::Noise.is_deterministic());
    }
}
