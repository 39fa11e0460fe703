//! Wallpaper handler.

use axum::{
    extract::{Query, State},
    http::{StatusCode, header},
    response::IntoResponse,
};
use log::{info, warn};
use std::sync::Arc;
use std::time::Instant;

use crate::wallpaper::{RenderParams, encode_png};

use super::super::state::AppState;

/// GET /wallpaper - Render a wallpaper PNG.
///
/// Query parameters are all optional; see [`RenderParams`]. Unknown or
/// malformed values fall back to defaults, so only resource failures produce
/// an error. The response must never be cached: the picture changes daily.
pub async fn render(
    State(state): State<Arc<AppState>>,
    Query(params): Query<RenderParams>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let started = Instant::now();
    let service = state.service.clone();
    let request = params.clone();

    let png_bytes = tokio::task::spawn_blocking(move || {
        let image = service.render_wallpaper(&request)?;
        encode_png(&image)
    })
    .await
    .map_err(|e| {
        warn!("[wallpaper] render task failed: {}", e);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Task error: {}", e),
        )
    })?
    .map_err(|e| {
        warn!("[wallpaper] render failed: {}", e);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Render failed: {}", e),
        )
    })?;

    info!(
        "[wallpaper] device={} {} bytes in {:?}",
        params.device.as_deref().unwrap_or("-"),
        png_bytes.len(),
        started.elapsed()
    );

    Ok((
        [
            (header::CONTENT_TYPE, "image/png"),
            (
                header::CACHE_CONTROL,
                "no-store, no-cache, must-revalidate, max-age=0",
            ),
            (header::PRAGMA, "no-cache"),
            (header::EXPIRES, "0"),
        ],
        png_bytes,
    ))
}
