//! Wallpaper requests as they arrive from the outside world.
//!
//! [`RenderParams`] carries raw, possibly missing or malformed values (from
//! a query string or CLI flags). [`WallpaperService`] normalizes them to a
//! [`RenderRequest`], stamps the current time in the caller's timezone and
//! hands off to the [`Renderer`].

use chrono::{DateTime, FixedOffset, Offset, Utc};
use image::{ImageFormat, RgbaImage};
use serde::{Deserialize, Deserializer};
use std::io::Cursor;
use std::sync::Arc;

use crate::calendar::Locale;
use crate::device;
use crate::error::WallpaperError;
use crate::render::{BackgroundStyle, DayStyle, RenderMode, RenderRequest, Renderer};
use crate::theme::{Theme, WeekendMode};

/// UI size used when none is given, in percent.
pub const DEFAULT_SIZE_PERCENT: i32 = 100;
pub const MIN_SIZE_PERCENT: i32 = 80;
pub const MAX_SIZE_PERCENT: i32 = 130;

/// Widest UTC offset in use, in hours.
const MAX_TIMEZONE_HOURS: i32 = 14;

/// Source of "now".
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Always reports the same instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Raw wallpaper parameters. Every field is optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RenderParams {
    /// Device key, e.g. "iphone-15"
    #[serde(default)]
    pub device: Option<String>,
    /// "en" or "ru"
    #[serde(default)]
    pub lang: Option<String>,
    /// "off", "gray", "green", "blue" or "red"
    #[serde(default)]
    pub weekends: Option<String>,
    /// "dots", "bars" or "numbers"
    #[serde(default)]
    pub style: Option<String>,
    /// UTC offset in whole hours
    #[serde(default, deserialize_with = "lenient_int")]
    pub timezone: Option<i32>,
    /// UI size in percent (80–130)
    #[serde(default, deserialize_with = "lenient_int")]
    pub size: Option<i32>,
    /// "plain", "gradient", "noise" or "ios"
    #[serde(default)]
    pub bg: Option<String>,
    /// Palette name or "#RRGGBB"; also accepted as `color`
    #[serde(default, alias = "color")]
    pub bg_color: Option<String>,
}

/// Integer field that treats anything unparsable as absent.
fn lenient_int<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Int(i64),
        Text(String),
    }

    let raw = Option::<Raw>::deserialize(deserializer)?;
    Ok(match raw {
        Some(Raw::Int(n)) => i32::try_from(n).ok(),
        Some(Raw::Text(s)) => s.trim().parse().ok(),
        None => None,
    })
}

impl RenderParams {
    /// Size percent as a UI scale factor. Zero or missing means 100%.
    pub fn ui_scale(&self) -> f32 {
        let size = match self.size {
            None | Some(0) => DEFAULT_SIZE_PERCENT,
            Some(s) => s.clamp(MIN_SIZE_PERCENT, MAX_SIZE_PERCENT),
        };
        size as f32 / 100.0
    }

    /// Fixed offset for the requested timezone, clamped to ±14 hours.
    pub fn offset(&self) -> FixedOffset {
        let hours = self
            .timezone
            .unwrap_or(0)
            .clamp(-MAX_TIMEZONE_HOURS, MAX_TIMEZONE_HOURS);
        FixedOffset::east_opt(hours * 3600).unwrap_or_else(|| Utc.fix())
    }

    /// Normalize into a render request for `now` (UTC).
    pub fn to_request(&self, now: DateTime<Utc>, theme: Theme) -> RenderRequest {
        let text = |v: &Option<String>| v.as_deref().unwrap_or("").to_string();
        let bg_color = match self.bg_color.as_deref() {
            None | Some("") => "black".to_string(),
            Some(c) => c.to_string(),
        };

        RenderRequest {
            now: now.with_timezone(&self.offset()),
            device: *device::lookup(self.device.as_deref().unwrap_or("")),
            theme,
            mode: RenderMode::Months,
            locale: Locale::parse(&text(&self.lang)),
            weekends: WeekendMode::parse(&text(&self.weekends)),
            day_style: DayStyle::parse(&text(&self.style)),
            ui_scale: self.ui_scale(),
            background: BackgroundStyle::parse(&text(&self.bg)),
            background_color: bg_color,
        }
    }
}

/// Renders wallpapers for raw parameter sets.
#[derive(Clone)]
pub struct WallpaperService {
    clock: Arc<dyn Clock>,
    renderer: Renderer,
    theme: Theme,
}

impl WallpaperService {
    pub fn new(clock: Arc<dyn Clock>, renderer: Renderer, theme: Theme) -> Self {
        Self {
            clock,
            renderer,
            theme,
        }
    }

    pub fn renderer(&self) -> &Renderer {
        &self.renderer
    }

    /// Build the request for `params` at the current clock time.
    pub fn request(&self, params: &RenderParams) -> RenderRequest {
        params.to_request(self.clock.now(), self.theme)
    }

    pub fn render_wallpaper(&self, params: &RenderParams) -> Result<RgbaImage, WallpaperError> {
        self.renderer.render(&self.request(params))
    }
}

/// Encode a rendered wallpaper as PNG.
pub fn encode_png(image: &RgbaImage) -> Result<Vec<u8>, WallpaperError> {
    let mut png_bytes = Vec::new();
    image
        .write_to(&mut Cursor::new(&mut png_bytes), ImageFormat::Png)
        .map_err(|e| WallpaperError::Image(format!("Failed to encode PNG: {}", e)))?;
    Ok(png_bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::FaceCache;
    use crate::render::fonts::StaticFontSource;
    use crate::render::fonts::tests::TEST_FONT;
    use chrono::{Datelike, TimeZone, Timelike};
    use pretty_assertions::assert_eq;

    fn evening_utc() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 12, 31, 20, 0, 0).unwrap()
    }

    #[test]
    fn test_defaults() {
        let req = RenderParams::default().to_request(evening_utc(), Theme::IOS);
        assert_eq!(req.device.key, device::DEFAULT_DEVICE_KEY);
        assert_eq!(req.locale, Locale::En);
        assert_eq!(req.weekends, WeekendMode::Off);
        assert_eq!(req.day_style, DayStyle::Dots);
        assert_eq!(req.background, BackgroundStyle::Premium);
        assert_eq!(req.background_color, "black");
        assert_eq!(req.mode, RenderMode::Months);
        assert!((req.ui_scale - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_unknown_values_normalize() {
        let params = RenderParams {
            device: Some("fridge".into()),
            lang: Some("fr".into()),
            weekends: Some("pink".into()),
            style: Some("stars".into()),
            bg: Some("marble".into()),
            bg_color: Some("".into()),
            ..Default::default()
        };
        let req = params.to_request(evening_utc(), Theme::IOS);
        assert_eq!(req.device.key, "iphone-15");
        assert_eq!(req.locale, Locale::En);
        assert_eq!(req.weekends, WeekendMode::Off);
        assert_eq!(req.day_style, DayStyle::Dots);
        assert_eq!(req.background, BackgroundStyle::Premium);
        assert_eq!(req.background_color, "black");
    }

    #[test]
    fn test_malformed_numbers_fall_back() {
        let params: RenderParams =
            serde_json::from_str(r#"{"size": "big", "timezone": "east"}"#).unwrap();
        assert_eq!(params.size, None);
        assert_eq!(params.timezone, None);
        assert!((params.ui_scale() - 1.0).abs() < 1e-6);
        assert_eq!(params.offset().local_minus_utc(), 0);

        let params: RenderParams =
            serde_json::from_str(r#"{"size": " 120 ", "timezone": "+3"}"#).unwrap();
        assert_eq!(params.size, Some(120));
        assert_eq!(params.timezone, Some(3));

        let params: RenderParams = serde_json::from_str(r#"{"size": 90}"#).unwrap();
        assert_eq!(params.size, Some(90));
    }

    #[test]
    fn test_color_alias() {
        let params: RenderParams = serde_json::from_str(r##"{"color": "#ff0000"}"##).unwrap();
        assert_eq!(params.bg_color.as_deref(), Some("#ff0000"));
    }

    #[test]
    fn test_size_clamping() {
        let scale = |size| RenderParams { size, ..Default::default() }.ui_scale();
        assert!((scale(None) - 1.0).abs() < 1e-6);
        assert!((scale(Some(0)) - 1.0).abs() < 1e-6);
        assert!((scale(Some(50)) - 0.8).abs() < 1e-6);
        assert!((scale(Some(115)) - 1.15).abs() < 1e-6);
        assert!((scale(Some(400)) - 1.3).abs() < 1e-6);
    }

    #[test]
    fn test_timezone_shifts_date() {
        // 20:00 UTC on Dec 31 is already Jan 1 in UTC+5
        let params = RenderParams {
            timezone: Some(5),
            ..Default::default()
        };
        let req = params.to_request(evening_utc(), Theme::IOS);
        assert_eq!(req.now.year(), 2027);
        assert_eq!(req.now.ordinal(), 1);
        assert_eq!(req.now.hour(), 1);

        let params = RenderParams {
            timezone: Some(-99),
            ..Default::default()
        };
        assert_eq!(params.offset().local_minus_utc(), -14 * 3600);
    }

    #[test]
    fn test_service_uses_clock() {
        let renderer = Renderer::new(Arc::new(FaceCache::new(StaticFontSource(TEST_FONT), 4)));
        let service = WallpaperService::new(Arc::new(FixedClock(evening_utc())), renderer, Theme::IOS);
        let params = RenderParams {
            device: Some("iphone-se".into()),
            bg: Some("plain".into()),
            ..Default::default()
        };
        assert_eq!(service.request(&params).now, evening_utc());

        let img = service.render_wallpaper(&params).unwrap();
        assert_eq!(img.dimensions(), (750, 1334));
    }

    #[test]
    fn test_encode_png_signature() {
        let img = RgbaImage::from_pixel(4, 4, image::Rgba([1, 2, 3, 255]));
        let png = encode_png(&img).unwrap();
        assert_eq!(&png[..8], b"\x89PNG\r\n\x1a\n");
    }
}
