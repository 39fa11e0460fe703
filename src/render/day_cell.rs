//! Month cells: the title plus one marker per day.
//!
//! Days sit on a seven-column sub-grid (Monday first) below the month
//! title. The marker shape is chosen once per render via [`DayStyle`];
//! the marker color comes from [`resolve_day_color`].

use image::{Rgba, RgbaImage};

use super::draw::{draw_text_centered, fill_circle, fill_rect};
use super::fonts::FaceSet;
use super::layout::{Geometry, TITLE_OFFSET};
use crate::calendar::MonthData;
use crate::theme::{Theme, WeekendMode};

/// Dot radius at scale 1.0.
pub const BASE_DOT_RADIUS: f32 = 6.0;
/// Sub-grid pitch for dots and bars at scale 1.0.
pub const BASE_SPACING: f32 = 32.0;
/// Sub-grid pitch for numerals at scale 1.0.
pub const BASE_NUMBER_SPACING: f32 = 30.0;
pub const BASE_BAR_WIDTH: f32 = 20.0;
pub const BASE_BAR_HEIGHT: f32 = 6.0;

const WEEK: u32 = 7;

/// Shape drawn for each day.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DayStyle {
    #[default]
    Dots,
    Bars,
    Numbers,
}

impl DayStyle {
    /// Parse a style name. Unknown names fall back to dots.
    pub fn parse(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "bars" => DayStyle::Bars,
            "numbers" => DayStyle::Numbers,
            _ => DayStyle::Dots,
        }
    }

    fn spacing(self) -> f32 {
        match self {
            DayStyle::Dots | DayStyle::Bars => BASE_SPACING,
            DayStyle::Numbers => BASE_NUMBER_SPACING,
        }
    }
}

/// Color of day `day` (0-based) sitting in weekday column `col`.
///
/// First match wins: today, then past, then weekend highlight, then
/// future. A passed Saturday stays "past" and today is "today" whatever
/// the weekday.
pub fn resolve_day_color(
    day: u32,
    col: u32,
    month: &MonthData,
    theme: &Theme,
    weekends: WeekendMode,
) -> Rgba<u8> {
    if month.is_current && day + 1 == month.passed_days {
        return theme.today;
    }
    if day < month.passed_days {
        return theme.past;
    }
    if col == 5 || col == 6 {
        if let Some(color) = theme.weekend(weekends) {
            return color;
        }
    }
    theme.future
}

/// Sub-grid position of day `day`: (column, row).
#[inline]
pub fn day_slot(month: &MonthData, day: u32) -> (u32, u32) {
    let i = month.start_weekday + day;
    (i % WEEK, i / WEEK)
}

/// Everything a month cell needs that is fixed for the whole render.
pub struct CellPainter<'a> {
    pub geometry: &'a Geometry,
    pub theme: &'a Theme,
    pub faces: &'a FaceSet,
    pub weekends: WeekendMode,
    pub style: DayStyle,
}

impl CellPainter<'_> {
    /// Draw `month` into the cell centered at (cx, cy).
    pub fn paint(&self, canvas: &mut RgbaImage, month: &MonthData, cx: i32, cy: i32) {
        let title_color = if month.is_current {
            self.theme.today
        } else {
            self.theme.text
        };
        draw_text_centered(
            canvas,
            &self.faces.month,
            month.name,
            cx,
            cy - self.geometry.px(TITLE_OFFSET),
            title_color,
        );

        let spacing = self.geometry.px(self.style.spacing());
        let start_x = cx - (WEEK as i32 - 1) * spacing / 2;
        let start_y = cy;

        for day in 0..month.days {
            let (col, row) = day_slot(month, day);
            let x = start_x + col as i32 * spacing;
            let y = start_y + row as i32 * spacing;
            let color = resolve_day_color(day, col, month, self.theme, self.weekends);
            self.paint_day(canvas, day, x, y, color);
        }
    }

    fn paint_day(&self, canvas: &mut RgbaImage, day: u32, x: i32, y: i32, color: Rgba<u8>) {
        match self.style {
            DayStyle::Dots => {
                fill_circle(canvas, x, y, self.geometry.px(BASE_DOT_RADIUS), color);
            }
            DayStyle::Bars => {
                let w = self.geometry.px(BASE_BAR_WIDTH);
                let h = self.geometry.px(BASE_BAR_HEIGHT);
                fill_rect(canvas, x - w / 2, y - h / 2, w, h, color);
            }
            DayStyle::Numbers => {
                let label = (day + 1).to_string();
                draw_text_centered(canvas, &self.faces.number, &label, x, y, color);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::device;
    use crate::render::fonts::tests::TEST_FONT;
    use crate::theme::rgb;

    /// 30-day month starting on a Thursday; day index 9 is a Saturday.
    fn month(passed_days: u32, is_current: bool) -> MonthData {
        MonthData {
            name: "Test",
            days: 30,
            passed_days,
            is_current,
            start_weekday: 3,
        }
    }

    #[test]
    fn test_today_beats_weekend() {
        let theme = Theme::IOS;
        let m = month(10, true);
        let (col, _) = day_slot(&m, 9);
        assert_eq!(col, 5);
        assert_eq!(resolve_day_color(9, col, &m, &theme, WeekendMode::Red), theme.today);
    }

    #[test]
    fn test_past_weekend_stays_past() {
        let theme = Theme::IOS;
        let m = month(15, true);
        let (col, _) = day_slot(&m, 9);
        assert_eq!(resolve_day_color(9, col, &m, &theme, WeekendMode::Red), theme.past);
        // Sunday right after
        assert_eq!(resolve_day_color(10, 6, &m, &theme, WeekendMode::Green), theme.past);
    }

    #[test]
    fn test_future_weekend_uses_mode_color() {
        let theme = Theme::IOS;
        let m = month(3, true);
        assert_eq!(resolve_day_color(9, 5, &m, &theme, WeekendMode::Red), theme.weekend_red);
        assert_eq!(resolve_day_color(10, 6, &m, &theme, WeekendMode::Blue), theme.weekend_blue);
        assert_eq!(resolve_day_color(9, 5, &m, &theme, WeekendMode::Off), theme.future);
        assert_eq!(resolve_day_color(8, 4, &m, &theme, WeekendMode::Red), theme.future);
    }

    #[test]
    fn test_last_day_of_past_month_is_not_today() {
        let theme = Theme::IOS;
        let m = month(30, false);
        assert_eq!(resolve_day_color(29, 4, &m, &theme, WeekendMode::Off), theme.past);
    }

    #[test]
    fn test_future_month_is_all_future_or_weekend() {
        let theme = Theme::IOS;
        let m = month(0, false);
        for day in 0..m.days {
            let (col, _) = day_slot(&m, day);
            let c = resolve_day_color(day, col, &m, &theme, WeekendMode::Gray);
            if col >= 5 {
                assert_eq!(c, theme.weekend_gray);
            } else {
                assert_eq!(c, theme.future);
            }
        }
    }

    #[test]
    fn test_day_slot_wraps_weeks() {
        let m = month(0, false);
        assert_eq!(day_slot(&m, 0), (3, 0));
        assert_eq!(day_slot(&m, 3), (6, 0));
        assert_eq!(day_slot(&m, 4), (0, 1));
        assert_eq!(day_slot(&m, 29), (4, 4));
    }

    #[test]
    fn test_parse_day_style() {
        assert_eq!(DayStyle::parse("bars"), DayStyle::Bars);
        assert_eq!(DayStyle::parse("numbers"), DayStyle::Numbers);
        assert_eq!(DayStyle::parse("dots"), DayStyle::Dots);
        assert_eq!(DayStyle::parse("hexagons"), DayStyle::Dots);
    }

    #[test]
    fn test_dot_cell_paints_today_marker() {
        let geometry = Geometry::new(device::lookup("iphone-15"), 1.0);
        let faces = FaceSet::load(TEST_FONT.to_vec(), geometry.scale).unwrap();
        let theme = Theme::IOS;
        let painter = CellPainter {
            geometry: &geometry,
            theme: &theme,
            faces: &faces,
            weekends: WeekendMode::Off,
            style: DayStyle::Dots,
        };

        let mut canvas = RgbaImage::from_pixel(400, 400, rgb(0, 0, 0));
        let m = month(10, true);
        painter.paint(&mut canvas, &m, 200, 150);

        // Day 9 sits at column 5, row 1 of the sub-grid
        let x = 200 - 3 * 32 + 5 * 32;
        let y = 150 + 32;
        assert_eq!(*canvas.get_pixel(x as u32, y as u32), theme.today);
        // Day 0 is past
        assert_eq!(*canvas.get_pixel((200 - 96 + 3 * 32) as u32, 150), theme.past);
        // Column 0 of row 0 comes before the 1st and stays empty
        assert_eq!(*canvas.get_pixel((200 - 96) as u32, 150), rgb(0, 0, 0));
    }

    #[test]
    fn test_bar_cell_shape() {
        let geometry = Geometry::new(device::lookup("iphone-15"), 1.0);
        let faces = FaceSet::load(TEST_FONT.to_vec(), geometry.scale).unwrap();
        let theme = Theme::IOS;
        let painter = CellPainter {
            geometry: &geometry,
            theme: &theme,
            faces: &faces,
            weekends: WeekendMode::Off,
            style: DayStyle::Bars,
        };

        let mut canvas = RgbaImage::from_pixel(400, 400, rgb(0, 0, 0));
        let m = month(0, false);
        painter.paint(&mut canvas, &m, 200, 150);

        // Day 0: column 3 → x = 200; bar spans x-10..x+10, y-3..y+3
        assert_eq!(*canvas.get_pixel(190, 150), theme.future);
        assert_eq!(*canvas.get_pixel(209, 152), theme.future);
        assert_eq!(*canvas.get_pixel(210, 150), rgb(0, 0, 0));
        assert_eq!(*canvas.get_pixel(200, 154), rgb(0, 0, 0));
    }

    #[test]
    fn test_number_cell_draws_text() {
        let geometry = Geometry::new(device::lookup("iphone-15"), 1.0);
        let faces = FaceSet::load(TEST_FONT.to_vec(), geometry.scale).unwrap();
        let theme = Theme::IOS;
        let painter = CellPainter {
            geometry: &geometry,
            theme: &theme,
            faces: &faces,
            weekends: WeekendMode::Off,
            style: DayStyle::Numbers,
        };

        let mut canvas = RgbaImage::from_pixel(400, 400, rgb(0, 0, 0));
        painter.paint(&mut canvas, &month(0, false), 200, 150);
        // Numerals sit above their baseline row
        let lit_below_title = canvas
            .enumerate_pixels()
            .filter(|(_, y, p)| *y > 110 && **p != rgb(0, 0, 0))
            .count();
        assert!(lit_below_title > 0);
    }
}
