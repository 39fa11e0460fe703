//! Device-relative geometry and the 3×4 month grid.
//!
//! Every length is authored against a 1179 px wide reference screen and
//! multiplied by [`Geometry::scale`] before use.

use crate::device::DeviceProfile;

/// Reference screen width all base sizes are authored for.
pub const BASE_WIDTH: f32 = 1179.0;

/// Allowed range of the user-supplied UI scale.
pub const UI_SCALE_MIN: f32 = 0.8;
pub const UI_SCALE_MAX: f32 = 1.3;

/// Height reserved for the footer text.
pub const FOOTER_HEIGHT: f32 = 52.0;
/// Gap between the grid and the footer.
pub const FOOTER_GAP: f32 = 28.0;
/// Footer baseline distance below the top of the button zone.
pub const FOOTER_OFFSET: f32 = 80.0;
/// Month title baseline distance above the cell center.
pub const TITLE_OFFSET: f32 = 52.0;

pub const GRID_COLUMNS: i32 = 3;
pub const GRID_ROWS: i32 = 4;

/// Canvas size, safe-area boundaries and the resolved scale for one render.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geometry {
    pub width: i32,
    pub height: i32,
    /// Top of the usable area (bottom of the clock zone)
    pub clock_bottom: i32,
    /// Bottom of the usable area (top of the button zone)
    pub buttons_top: i32,
    /// Lowest row not covered by the bottom inset
    pub content_bottom: i32,
    pub scale: f32,
}

impl Geometry {
    /// `ui_scale` is clamped to [`UI_SCALE_MIN`]..=[`UI_SCALE_MAX`].
    pub fn new(device: &DeviceProfile, ui_scale: f32) -> Self {
        let ui_scale = if ui_scale.is_finite() {
            ui_scale.clamp(UI_SCALE_MIN, UI_SCALE_MAX)
        } else {
            1.0
        };
        Self {
            width: device.width as i32,
            height: device.height as i32,
            clock_bottom: device.clock_bottom(),
            buttons_top: device.buttons_top(),
            content_bottom: device.content_bottom(),
            scale: device.width as f32 / BASE_WIDTH * ui_scale,
        }
    }

    /// `base * scale`, truncated to whole pixels.
    #[inline]
    pub fn px(&self, base: f32) -> i32 {
        (base * self.scale) as i32
    }

    /// Baseline of the footer line.
    pub fn footer_baseline(&self) -> i32 {
        (self.buttons_top + self.px(FOOTER_OFFSET)).min(self.content_bottom)
    }
}

/// Placement of the twelve month cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLayout {
    pub top: i32,
    pub cell_width: i32,
    pub cell_height: i32,
}

impl GridLayout {
    /// Fit the grid between the clock zone and the space kept for the footer.
    pub fn new(geometry: &Geometry) -> Self {
        let footer_reserved = geometry.px(FOOTER_HEIGHT) + geometry.px(FOOTER_GAP);
        let top = geometry.clock_bottom;
        let usable = (geometry.buttons_top - footer_reserved - top).max(0);
        Self {
            top,
            cell_width: geometry.width / GRID_COLUMNS,
            cell_height: usable / GRID_ROWS,
        }
    }

    /// Center of the cell for month `index` (0 = January), row-major.
    pub fn cell_center(&self, index: usize) -> (i32, i32) {
        let col = index as i32 % GRID_COLUMNS;
        let row = index as i32 / GRID_COLUMNS;
        (
            col * self.cell_width + self.cell_width / 2,
            self.top + row * self.cell_height + self.cell_height / 2,
        )
    }
}
