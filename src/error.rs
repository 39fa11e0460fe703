//! # Error Types
//!
//! This module defines error types used throughout the calendar-wallpaper library.
//!
//! Only resource failures surface here. Malformed styling input (unknown
//! colors, style names, devices) is normalized to a default and never becomes
//! an error.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for wallpaper rendering operations
#[derive(Debug, Error)]
pub enum WallpaperError {
    /// Font bytes could not be read from their source
    #[error("Font load error ({path}): {source}")]
    FontLoad {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Font bytes were read but are not a usable font
    #[error("Font parse error: {0}")]
    FontParse(String),

    /// Image encoding error
    #[error("Image error: {0}")]
    Image(String),

    /// HTTP server errors (bind, serve)
    #[error("Server error: {0}")]
    Server(String),

    /// I/O error wrapper
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
