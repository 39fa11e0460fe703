//! TTF faces for month titles, the footer and day numerals.
//!
//! Glyphs are rasterized with ab_glyph. A [`Face`] is a parsed font plus a
//! pixel scale; a [`FaceSet`] holds the three faces a render needs at one
//! UI scale. Sets are built by [`super::face_cache::FaceCache`] on demand.

use ab_glyph::{Font, FontArc, PxScale, ScaleFont};
use std::path::{Path, PathBuf};

use crate::error::WallpaperError;

/// Month title em size at scale 1.0, in pixels.
pub const BASE_MONTH_SIZE: f32 = 38.0;
/// Footer em size at scale 1.0, in pixels.
pub const BASE_FOOTER_SIZE: f32 = 30.0;
/// Day numeral em size at scale 1.0, in pixels.
pub const BASE_NUMBER_SIZE: f32 = 22.0;

/// Font shipped with the crate (DejaVu Sans Bold, Latin + Cyrillic).
pub const DEFAULT_FONT_PATH: &str = "assets/fonts/DejaVuSans-Bold.ttf";

/// Where font bytes come from.
pub trait FontSource: Send + Sync {
    /// Read the raw font file. Failure is fatal for the render.
    fn read_bytes(&self) -> Result<Vec<u8>, WallpaperError>;
}

/// Font read from disk on every cache miss.
#[derive(Debug, Clone)]
pub struct FileFontSource {
    path: PathBuf,
}

impl FileFontSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl FontSource for FileFontSource {
    fn read_bytes(&self) -> Result<Vec<u8>, WallpaperError> {
        std::fs::read(&self.path).map_err(|source| WallpaperError::FontLoad {
            path: self.path.clone(),
            source,
        })
    }
}

/// Font bytes embedded in the binary.
#[derive(Debug, Clone, Copy)]
pub struct StaticFontSource(pub &'static [u8]);

impl FontSource for StaticFontSource {
    fn read_bytes(&self) -> Result<Vec<u8>, WallpaperError> {
        Ok(self.0.to_vec())
    }
}

/// A font at one pixel size.
#[derive(Clone)]
pub struct Face {
    font: FontArc,
    scale: PxScale,
    size: f32,
}

impl std::fmt::Debug for Face {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Face").field("size", &self.size).finish()
    }
}

impl Face {
    /// Create a face whose em square is `size` pixels tall.
    ///
    /// ab_glyph scales by ascent-to-descent height, so the em size is
    /// converted through the font's units-per-em.
    pub fn new(font: &FontArc, size: f32) -> Self {
        let upem = font.units_per_em().unwrap_or(1000.0);
        let height = font.height_unscaled();
        let px = if upem > 0.0 { size * height / upem } else { size };
        Self {
            font: font.clone(),
            scale: PxScale::from(px),
            size,
        }
    }

    /// Em size in pixels.
    pub fn size(&self) -> f32 {
        self.size
    }

    pub(crate) fn font(&self) -> &FontArc {
        &self.font
    }

    pub(crate) fn scale(&self) -> PxScale {
        self.scale
    }

    /// Advance width of `text` in pixels, kerning included.
    pub fn measure(&self, text: &str) -> f32 {
        let scaled = self.font.as_scaled(self.scale);
        let mut width = 0.0f32;
        let mut prev = None;
        for ch in text.chars() {
            let id = self.font.glyph_id(ch);
            if let Some(p) = prev {
                width += scaled.kern(p, id);
            }
            width += scaled.h_advance(id);
            prev = Some(id);
        }
        width
    }
}

/// The three faces used by one render.
#[derive(Debug, Clone)]
pub struct FaceSet {
    pub month: Face,
    pub footer: Face,
    pub number: Face,
}

impl FaceSet {
    /// Parse `bytes` and derive faces for `scale`.
    pub fn load(bytes: Vec<u8>, scale: f32) -> Result<Self, WallpaperError> {
        let font = FontArc::try_from_vec(bytes)
            .map_err(|e| WallpaperError::FontParse(e.to_string()))?;
        Ok(Self::from_font(&font, scale))
    }

    pub fn from_font(font: &FontArc, scale: f32) -> Self {
        Self {
            month: Face::new(font, BASE_MONTH_SIZE * scale),
            footer: Face::new(font, BASE_FOOTER_SIZE * scale),
            number: Face::new(font, BASE_NUMBER_SIZE * scale),
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) const TEST_FONT: &[u8] = include_bytes!(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/assets/fonts/DejaVuSans-Bold.ttf"
    ));

    #[test]
    fn test_face_sizes_follow_scale() {
        let faces = FaceSet::load(TEST_FONT.to_vec(), 2.0).unwrap();
        assert!((faces.month.size() - 76.0).abs() < 1e-4);
        assert!((faces.footer.size() - 60.0).abs() < 1e-4);
        assert!((faces.number.size() - 44.0).abs() < 1e-4);
    }

    #[test]
    fn test_measure_grows_with_text_and_size() {
        let small = FaceSet::load(TEST_FONT.to_vec(), 1.0).unwrap();
        let large = FaceSet::load(TEST_FONT.to_vec(), 2.0).unwrap();
        let one = small.number.measure("1");
        let two = small.number.measure("11");
        assert!(one > 0.0);
        assert!(two > one);
        assert!(large.number.measure("11") > two);
        assert_eq!(small.number.measure(""), 0.0);
    }

    #[test]
    fn test_garbage_bytes_fail_to_parse() {
        let err = FaceSet::load(b"definitely not a font".to_vec(), 1.0).unwrap_err();
        assert!(matches!(err, WallpaperError::FontParse(_)));
    }

    #[test]
    fn test_missing_file_is_font_load_error() {
        let source = FileFontSource::new("/nonexistent/font.ttf");
        let err = source.read_bytes().unwrap_err();
        assert!(matches!(err, WallpaperError::FontLoad { .. }));
    }

    #[test]
    fn test_static_source() {
        let bytes = StaticFontSource(TEST_FONT).read_bytes().unwrap();
        assert_eq!(bytes.len(), TEST_FONT.len());
    }
}
