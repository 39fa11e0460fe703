//! Health check handler.

use axum::{Json, extract::State};
use serde::Serialize;
use std::sync::Arc;

use super::super::state::AppState;

#[derive(Debug, Serialize)]
pub struct Health {
    pub status: &'static str,
    pub boot_time: u64,
    pub cached_scales: usize,
    pub cache_capacity: usize,
}

/// GET /api/health - Liveness plus face cache occupancy.
pub async fn health(State(state): State<Arc<AppState>>) -> Json<Health> {
    let faces = state.service.renderer().face_cache();
    Json(Health {
        status: "ok",
        boot_time: state.boot_time,
        cached_scales: faces.len(),
        cache_capacity: state.config.face_cache_capacity,
    })
}
