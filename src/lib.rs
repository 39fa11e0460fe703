//! # Calendar Wallpaper - Year-at-a-Glance Lock Screens
//!
//! Renders a full-year calendar as a phone lock-screen wallpaper. Each of the
//! twelve months is a small grid of day markers colored by whether the day has
//! passed, is today, falls on a highlighted weekend or is still ahead. A
//! footer reports days left in the year and the percentage elapsed.
//!
//! - **Device profiles**: canvas size and the zones reserved by the clock and
//!   the lock-screen buttons
//! - **Backgrounds**: solid, gradient, noise and a premium glow/vignette style
//! - **Day markers**: dots, bars or numerals
//! - **Server**: PNG wallpapers over HTTP for phone shortcuts
//!
//! ## Quick Start
//!
//! ```no_run
//! use std::sync::Arc;
//! use calendar_wallpaper::{
//!     render::{FaceCache, FileFontSource, Renderer},
//!     theme::Theme,
//!     wallpaper::{RenderParams, SystemClock, WallpaperService, encode_png},
//! };
//!
//! let faces = FaceCache::with_default_capacity(FileFontSource::new("assets/fonts/DejaVuSans-Bold.ttf"));
//! let service = WallpaperService::new(Arc::new(SystemClock), Renderer::new(Arc::new(faces)), Theme::IOS);
//!
//! let params = RenderParams {
//!     device: Some("iphone-15-pro-max".into()),
//!     weekends: Some("red".into()),
//!     ..Default::default()
//! };
//! let png = encode_png(&service.render_wallpaper(&params)?)?;
//! std::fs::write("wallpaper.png", png)?;
//!
//! # Ok::<(), calendar_wallpaper::WallpaperError>(())
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`device`] | Device profiles and zone geometry |
//! | [`calendar`] | Month data, year progress and locales |
//! | [`theme`] | Day colors and weekend highlight modes |
//! | [`shader`] | Interpolation and falloff helpers for backgrounds |
//! | [`render`] | Backgrounds, fonts, layout and the compositor |
//! | [`wallpaper`] | Parameter normalization, clock and PNG output |
//! | [`server`] | HTTP server |
//! | [`error`] | Error types |

pub mod calendar;
pub mod device;
pub mod error;
pub mod render;
pub mod server;
pub mod shader;
pub mod theme;
pub mod wallpaper;

// Re-exports for convenience
pub use device::DeviceProfile;
pub use error::WallpaperError;
pub use render::Renderer;
pub use wallpaper::{RenderParams, WallpaperService};
