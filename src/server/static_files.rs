//! Embedded wallpaper builder page.

use axum::{
    extract::{Path, State},
    http::{StatusCode, header},
    response::{Html, IntoResponse},
};
use include_dir::{Dir, include_dir};
use log::warn;
use std::sync::Arc;

use crate::device::DEVICES;

use super::state::AppState;

/// The page and its assets, embedded at compile time.
static WEB_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/web");

/// Serve index.html with cache-busting parameters and the device table.
pub async fn index_handler(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    match WEB_DIR.get_file("index.html") {
        Some(file) => {
            let contents = String::from_utf8_lossy(file.contents());
            let cache_bust = format!("?v={}", state.boot_time);
            let busted = contents
                .replace(".js\"", &format!(".js{}\"", cache_bust))
                .replace(".css\"", &format!(".css{}\"", cache_bust));

            // Devices go in as static data so the page needs no API round-trip
            let devices_json = serde_json::to_string(DEVICES).unwrap_or_else(|e| {
                warn!("[web] failed to encode devices: {}", e);
                "[]".to_string()
            });
            let script = format!("<script>window.__DEVICES={}</script></head>", devices_json);

            Html(busted.replace("</head>", &script)).into_response()
        }
        None => (StatusCode::NOT_FOUND, "Page not found").into_response(),
    }
}

/// Serve files under `web/assets`.
pub async fn asset_handler(Path(path): Path<String>) -> impl IntoResponse {
    let clean_path = path.split('?').next().unwrap_or(&path);
    let file_path = format!("assets/{}", clean_path);

    match WEB_DIR.get_file(&file_path) {
        Some(file) => {
            let mime = mime_guess::from_path(clean_path)
                .first_or_octet_stream()
                .to_string();
            (
                [
                    (header::CONTENT_TYPE, mime),
                    (header::CACHE_CONTROL, "public, max-age=31536000".to_string()),
                ],
                file.contents().to_vec(),
            )
                .into_response()
        }
        None => (StatusCode::NOT_FOUND, "Asset not found").into_response(),
    }
}
