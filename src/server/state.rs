//! Server state and configuration.

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::wallpaper::WallpaperService;

/// Server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to listen on (e.g., "0.0.0.0:8080")
    pub listen_addr: String,
    /// Font used for all text
    pub font_path: PathBuf,
    /// Number of UI scales whose faces stay cached
    pub face_cache_capacity: usize,
}

/// Application state shared across handlers.
pub struct AppState {
    pub config: ServerConfig,
    pub service: WallpaperService,
    /// Unix timestamp of server boot.
    pub boot_time: u64,
}

impl AppState {
    pub fn new(config: ServerConfig, service: WallpaperService) -> Self {
        let boot_time = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);
        Self {
            config,
            service,
            boot_time,
        }
    }
}
