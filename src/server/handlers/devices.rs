//! Device API handlers.

use axum::Json;

use crate::device::{DEVICES, DeviceProfile};

/// GET /api/devices - List built-in device profiles.
pub async fn list() -> Json<&'static [DeviceProfile]> {
    Json(DEVICES)
}
