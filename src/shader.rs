//! # Shader Primitives
//!
//! Small per-pixel building blocks shared by the background styles. They
//! mirror common fragment-shader operations and work on plain `f32`s.

/// Linear interpolation between two values.
///
/// Returns `a` when `t=0`, `b` when `t=1`, and linear blend in between.
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Euclidean distance between two points.
#[inline]
pub fn dist(x: f32, y: f32, cx: f32, cy: f32) -> f32 {
    let dx = x - cx;
    let dy = y - cy;
    (dx * dx + dy * dy).sqrt()
}

/// Linear falloff: 1.0 at distance 0, 0.0 at `max_dist` and beyond.
#[inline]
pub fn falloff_linear(dist: f32, max_dist: f32) -> f32 {
    if dist >= max_dist {
        0.0
    } else {
        1.0 - dist / max_dist
    }
}

/// Vignette brightness multiplier.
///
/// `normalized_dist` is 0.0 at the image center and 1.0 at a corner.
/// Larger `power` darkens the edges more; the result never goes below 0.
#[inline]
pub fn vignette(normalized_dist: f32, power: f32) -> f32 {
    (1.0 - normalized_dist * power).max(0.0)
}
