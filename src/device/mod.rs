//! # Device Module
//!
//! Lock-screen geometry for supported phones.
//!
//! ## Modules
//!
//! - [`profile`]: Device profiles and the built-in registry

pub mod profile;

pub use profile::{DEFAULT_DEVICE_KEY, DEVICES, DeviceProfile, lookup};
