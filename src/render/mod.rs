//! # Rendering Module
//!
//! Turns device geometry, calendar data and style parameters into a
//! composited RGBA wallpaper.
//!
//! ## Modules
//!
//! - [`background`]: Solid, gradient, noise and premium backgrounds
//! - [`fonts`]: Font sources and per-scale face sets
//! - [`face_cache`]: Process-wide LRU cache of face sets
//! - [`layout`]: Device-relative scaling and the 3×4 month grid
//! - [`day_cell`]: Month cells and day color precedence
//! - [`draw`]: Disk, rectangle and text primitives
//! - [`calendar`]: The [`Renderer`] entry point
//!
//! ## Usage Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use calendar_wallpaper::render::{
//!     BackgroundStyle, DayStyle, FaceCache, FileFontSource, RenderMode, RenderRequest, Renderer,
//! };
//! use calendar_wallpaper::{calendar::Locale, device, theme::{Theme, WeekendMode}};
//!
//! let faces = FaceCache::with_default_capacity(FileFontSource::new("assets/fonts/DejaVuSans-Bold.ttf"));
//! let renderer = Renderer::new(Arc::new(faces));
//!
//! let image = renderer.render(&RenderRequest {
//!     now: chrono::Local::now().fixed_offset(),
//!     device: *device::lookup("iphone-15"),
//!     theme: Theme::IOS,
//!     mode: RenderMode::Months,
//!     locale: Locale::En,
//!     weekends: WeekendMode::Off,
//!     day_style: DayStyle::Dots,
//!     ui_scale: 1.0,
//!     background: BackgroundStyle::Premium,
//!     background_color: "blue".into(),
//! })?;
//! assert_eq!(image.dimensions(), (1179, 2556));
//! # Ok::<(), calendar_wallpaper::WallpaperError>(())
//! ```

pub mod background;
pub mod calendar;
pub mod day_cell;
pub mod draw;
pub mod face_cache;
pub mod fonts;
pub mod layout;

pub use background::BackgroundStyle;
pub use calendar::{RenderMode, RenderRequest, Renderer};
pub use day_cell::DayStyle;
pub use face_cache::FaceCache;
pub use fonts::{FileFontSource, FontSource, StaticFontSource};
