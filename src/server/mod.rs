//! # HTTP Server for Wallpaper Rendering
//!
//! Serves rendered wallpapers as PNG so a phone shortcut can fetch a fresh
//! one every day.
//!
//! ## Usage
//!
//! ```bash
//! calendar-wallpaper serve --listen 0.0.0.0:8080
//! curl -o wall.png 'http://localhost:8080/wallpaper?device=iphone-15&weekends=red&timezone=3'
//! ```
//!
//! ## Routes
//!
//! | Route | Description |
//! |-------|-------------|
//! | `GET /` | Wallpaper link builder with live preview |
//! | `GET /assets/*path` | Page scripts and styles |
//! | `GET /wallpaper` | Rendered PNG (see [`crate::wallpaper::RenderParams`]) |
//! | `GET /api/devices` | Built-in device profiles |
//! | `GET /api/health` | Liveness and face cache occupancy |

mod handlers;
mod state;
mod static_files;

pub use state::ServerConfig;

use axum::{Router, routing::get};
use log::info;
use std::sync::Arc;

use crate::error::WallpaperError;
use crate::render::{FaceCache, FileFontSource, Renderer};
use crate::theme::Theme;
use crate::wallpaper::{SystemClock, WallpaperService};
use state::AppState;

/// Build the router for a ready service.
pub fn router(config: ServerConfig, service: WallpaperService) -> Router {
    let app_state = Arc::new(AppState::new(config, service));

    Router::new()
        // Link builder page
        .route("/", get(static_files::index_handler))
        .route("/assets/*path", get(static_files::asset_handler))
        // Wallpapers
        .route("/wallpaper", get(handlers::wallpaper::render))
        // API
        .route("/api/devices", get(handlers::devices::list))
        .route("/api/health", get(handlers::health::health))
        .with_state(app_state)
}

/// Start the HTTP server.
///
/// ## Example
///
/// ```no_run
/// use calendar_wallpaper::server::{serve, ServerConfig};
///
/// # async fn example() -> Result<(), calendar_wallpaper::WallpaperError> {
/// let config = ServerConfig {
///     listen_addr: "0.0.0.0:8080".to_string(),
///     font_path: "assets/fonts/DejaVuSans-Bold.ttf".into(),
///     face_cache_capacity: 64,
/// };
///
/// serve(config).await?;
/// # Ok(())
/// # }
/// ```
pub async fn serve(config: ServerConfig) -> Result<(), WallpaperError> {
    let faces = FaceCache::new(
        FileFontSource::new(&config.font_path),
        config.face_cache_capacity,
    );
    // Fail at startup rather than on the first request
    faces.get(1.0)?;

    let service = WallpaperService::new(
        Arc::new(SystemClock),
        Renderer::new(Arc::new(faces)),
        Theme::IOS,
    );
    let app = router(config.clone(), service);

    info!("Calendar wallpaper server starting...");
    info!("Listening on: {}", config.listen_addr);
    info!("Font: {}", config.font_path.display());
    info!(
        "Try http://{}/wallpaper?device=iphone-15",
        config.listen_addr
    );

    let listener = tokio::net::TcpListener::bind(&config.listen_addr)
        .await
        .map_err(|e| {
            WallpaperError::Server(format!("Failed to bind to {}: {}", config.listen_addr, e))
        })?;

    axum::serve(listener, app)
        .await
        .map_err(|e| WallpaperError::Server(format!("Server error: {}", e)))?;

    Ok(())
}
