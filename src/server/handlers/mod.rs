//! HTTP handlers for the server.

pub mod devices;
pub mod health;
pub mod wallpaper;
