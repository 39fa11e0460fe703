//! Wallpaper compositor: background, twelve month cells and the footer.

use chrono::{DateTime, FixedOffset};
use image::RgbaImage;
use log::debug;
use std::sync::Arc;

use super::background::{self, BackgroundStyle};
use super::day_cell::{CellPainter, DayStyle};
use super::draw::draw_text_centered;
use super::face_cache::FaceCache;
use super::layout::{Geometry, GridLayout};
use crate::calendar::{self, Locale};
use crate::device::DeviceProfile;
use crate::error::WallpaperError;
use crate::theme::{Theme, WeekendMode};

/// What to draw on top of the background.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RenderMode {
    /// Full year grid with footer.
    #[default]
    Months,
    /// Background only.
    Blank,
}

impl RenderMode {
    /// `"months"` selects the grid; any other value renders the background alone.
    pub fn parse(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "months" => RenderMode::Months,
            _ => RenderMode::Blank,
        }
    }
}

/// All inputs of a single render.
#[derive(Debug, Clone)]
pub struct RenderRequest {
    /// Timezone-adjusted current time
    pub now: DateTime<FixedOffset>,
    pub device: DeviceProfile,
    pub theme: Theme,
    pub mode: RenderMode,
    pub locale: Locale,
    pub weekends: WeekendMode,
    pub day_style: DayStyle,
    /// User scale multiplier, clamped to 0.8..=1.3
    pub ui_scale: f32,
    pub background: BackgroundStyle,
    /// Palette name or `#RRGGBB`
    pub background_color: String,
}

/// Renders calendar wallpapers. Cheap to clone; clones share the face cache.
#[derive(Clone)]
pub struct Renderer {
    faces: Arc<FaceCache>,
}

impl Renderer {
    pub fn new(faces: Arc<FaceCache>) -> Self {
        Self { faces }
    }

    pub fn face_cache(&self) -> &Arc<FaceCache> {
        &self.faces
    }

    /// Render one wallpaper.
    ///
    /// Either returns a complete canvas the size of the device or an error;
    /// faces are resolved before any painting so a font failure never leaves
    /// a half-drawn image behind.
    pub fn render(&self, req: &RenderRequest) -> Result<RgbaImage, WallpaperError> {
        let geometry = Geometry::new(&req.device, req.ui_scale);
        let faces = self.faces.get(geometry.scale)?;

        let seed = background::seed_color(&req.background_color);
        let mut canvas = background::render_background(req.background, seed, &req.device);

        if req.mode != RenderMode::Months {
            return Ok(canvas);
        }

        let today = req.now.date_naive();
        let months = calendar::build_months(today, req.locale);
        let grid = GridLayout::new(&geometry);
        debug!(
            "[render] {} {}x{} scale {:.4} grid top {} cell {}x{}",
            req.device.key,
            geometry.width,
            geometry.height,
            geometry.scale,
            grid.top,
            grid.cell_width,
            grid.cell_height
        );

        let painter = CellPainter {
            geometry: &geometry,
            theme: &req.theme,
            faces: &faces,
            weekends: req.weekends,
            style: req.day_style,
        };
        for (i, month) in months.iter().enumerate() {
            let (cx, cy) = grid.cell_center(i);
            painter.paint(&mut canvas, month, cx, cy);
        }

        let progress = calendar::progress(today);
        draw_text_centered(
            &mut canvas,
            &faces.footer,
            &req.locale.footer_text(progress.days_left, progress.percent),
            geometry.width / 2,
            geometry.footer_baseline(),
            req.theme.text,
        );

        Ok(canvas)
    }
}
