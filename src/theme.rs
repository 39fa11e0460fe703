//! Color palette for the calendar grid and the weekend-highlight modes.

use image::Rgba;

/// Opaque RGB color.
#[inline]
pub const fn rgb(r: u8, g: u8, b: u8) -> Rgba<u8> {
    Rgba([r, g, b, 255])
}

/// Semantic colors used by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub background: Rgba<u8>,
    /// Days already passed
    pub past: Rgba<u8>,
    pub future: Rgba<u8>,
    /// Month titles and footer
    pub text: Rgba<u8>,
    pub today: Rgba<u8>,
    pub weekend_gray: Rgba<u8>,
    pub weekend_green: Rgba<u8>,
    pub weekend_blue: Rgba<u8>,
    pub weekend_red: Rgba<u8>,
}

impl Theme {
    /// Dark lock-screen palette with an orange "today" accent.
    pub const IOS: Self = Self {
        background: rgb(0, 0, 0),
        past: rgb(220, 220, 220),
        future: rgb(90, 90, 90),
        text: rgb(200, 200, 200),
        today: rgb(255, 140, 0),
        weekend_gray: rgb(120, 120, 120),
        weekend_green: rgb(48, 160, 80),
        weekend_blue: rgb(50, 120, 220),
        weekend_red: rgb(210, 60, 55),
    };

    /// Highlight color for weekend cells, `None` when highlighting is off.
    pub fn weekend(&self, mode: WeekendMode) -> Option<Rgba<u8>> {
        match mode {
            WeekendMode::Off => None,
            WeekendMode::Gray => Some(self.weekend_gray),
            WeekendMode::Green => Some(self.weekend_green),
            WeekendMode::Blue => Some(self.weekend_blue),
            WeekendMode::Red => Some(self.weekend_red),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::IOS
    }
}

/// How Saturday and Sunday cells are colored when not yet passed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WeekendMode {
    #[default]
    Off,
    Gray,
    Green,
    Blue,
    Red,
}

impl WeekendMode {
    /// Parse a mode name. Anything unrecognized turns highlighting off.
    pub fn parse(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "gray" | "grey" => WeekendMode::Gray,
            "green" => WeekendMode::Green,
            "blue" => WeekendMode::Blue,
            "red" => WeekendMode::Red,
            _ => WeekendMode::Off,
        }
    }
}
