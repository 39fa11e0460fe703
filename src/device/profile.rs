//! # Device Profiles
//!
//! This module defines the lock-screen geometry of supported phones.
//!
//! ## Supported Devices
//!
//! | Key | Size (px) | Clock zone ends | Button zone starts |
//! |-----|-----------|-----------------|--------------------|
//! | iphone-se | 750×1334 | 26% | 84% |
//! | iphone-11 | 828×1792 | 28% | 83% |
//! | iphone-12 | 1170×2532 | 30% | 82% |
//! | iphone-15 | 1179×2556 | 30% | 75% |
//! | iphone-15-pro-max | 1290×2796 | 32% | 80% |
//!
//! ## Usage
//!
//! ```
//! use calendar_wallpaper::device;
//!
//! let profile = device::lookup("iphone-se");
//! assert_eq!(profile.width, 750);
//!
//! // Unknown keys fall back to the default profile
//! let fallback = device::lookup("pager");
//! assert_eq!(fallback.key, device::DEFAULT_DEVICE_KEY);
//! ```

use serde::Serialize;

/// Key of the profile used when a lookup misses.
pub const DEFAULT_DEVICE_KEY: &str = "iphone-15";

/// # Device Profile
///
/// Screen size plus the safe-area boundaries of the system lock-screen UI.
///
/// ## Zones
///
/// ```text
/// ┌──────────────┐ 0
/// │   clock /    │
/// │    date      │
/// ├──────────────┤ clock_bottom = height * clock_zone_ratio
/// │              │
/// │  usable for  │
/// │   content    │
/// │              │
/// ├──────────────┤ buttons_top = height * buttons_zone_ratio
/// │ torch camera │
/// └──────────────┘ height
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DeviceProfile {
    /// Lookup key (e.g. "iphone-15")
    pub key: &'static str,

    /// Human-readable name
    pub name: &'static str,

    /// Screen width in pixels
    pub width: u32,

    /// Screen height in pixels
    pub height: u32,

    /// Fraction of height where the clock/date zone ends
    pub clock_zone_ratio: f32,

    /// Fraction of height where the torch/camera button zone begins
    pub buttons_zone_ratio: f32,

    /// Pixels at the bottom edge reserved for the home indicator
    pub bottom_inset: Option<u32>,
}

impl DeviceProfile {
    /// Bottom edge of the clock/date zone in pixels.
    #[inline]
    pub fn clock_bottom(&self) -> i32 {
        (self.height as f32 * self.clock_zone_ratio) as i32
    }

    /// Top edge of the button zone in pixels.
    #[inline]
    pub fn buttons_top(&self) -> i32 {
        (self.height as f32 * self.buttons_zone_ratio) as i32
    }

    /// Lowest row content may use before the bottom inset.
    #[inline]
    pub fn content_bottom(&self) -> i32 {
        self.height as i32 - self.bottom_inset.unwrap_or(0) as i32
    }
}

impl Default for DeviceProfile {
    fn default() -> Self {
        *lookup(DEFAULT_DEVICE_KEY)
    }
}

// ============================================================================
// REGISTRY
// ============================================================================

/// All built-in device profiles.
pub static DEVICES: &[DeviceProfile] = &[
    // Home button
    DeviceProfile {
        key: "iphone-se",
        name: "iPhone SE (2 / 3)",
        width: 750,
        height: 1334,
        clock_zone_ratio: 0.26,
        buttons_zone_ratio: 0.84,
        bottom_inset: None,
    },
    // Notch
    DeviceProfile {
        key: "iphone-11",
        name: "iPhone 11 / XR",
        width: 828,
        height: 1792,
        clock_zone_ratio: 0.28,
        buttons_zone_ratio: 0.83,
        bottom_inset: Some(68),
    },
    DeviceProfile {
        key: "iphone-12",
        name: "iPhone 12 / 13 / 14",
        width: 1170,
        height: 2532,
        clock_zone_ratio: 0.30,
        buttons_zone_ratio: 0.82,
        bottom_inset: Some(102),
    },
    // Dynamic Island
    DeviceProfile {
        key: "iphone-15",
        name: "iPhone 14 Pro / 15 / 15 Pro",
        width: 1179,
        height: 2556,
        clock_zone_ratio: 0.30,
        buttons_zone_ratio: 0.75,
        bottom_inset: Some(102),
    },
    DeviceProfile {
        key: "iphone-15-pro-max",
        name: "iPhone Pro Max",
        width: 1290,
        height: 2796,
        clock_zone_ratio: 0.32,
        buttons_zone_ratio: 0.80,
        bottom_inset: Some(102),
    },
];

/// Find a profile by key, falling back to [`DEFAULT_DEVICE_KEY`].
pub fn lookup(key: &str) -> &'static DeviceProfile {
    DEVICES
        .iter()
        .find(|d| d.key == key)
        .or_else(|| DEVICES.iter().find(|d| d.key == DEFAULT_DEVICE_KEY))
        .unwrap_or(&DEVICES[0])
}

// ============================================================================
// TESTS
// ============================================================================
