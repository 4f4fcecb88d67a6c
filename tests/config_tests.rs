// Host-side tests for configuration defaults, overrides and error types.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod core {
    pub mod config {
        include!("../src/core/config.rs");
    }
    pub mod error {
        include!("../src/core/error.rs");
    }
}

use crate::constants::*;
use crate::core::config::*;
use crate::core::error::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn constants_are_within_reasonable_bounds() {
    assert!(SCROLL_EASE > 0.0 && SCROLL_EASE < 1.0);
    assert!(CAMERA_FOV_DEG > 0.0 && CAMERA_FOV_DEG < 180.0);
    assert!(CAMERA_NEAR > 0.0 && CAMERA_NEAR < CAMERA_Z && CAMERA_Z < CAMERA_FAR);
    assert!(WHEEL_MULTIPLIER > 0.0);
    assert!(DRAG_MULTIPLIER > 0.0);
    assert!(PLANE_SEGMENTS >= 1);
    // 16-bit indices must address every vertex
    assert!((PLANE_SEGMENTS + 1) * (PLANE_SEGMENTS + 1) <= u16::MAX as u32);
    assert!(MAX_PIXEL_RATIO >= 1.0);
    assert!(FADE_IN_SEC > 0.0);
    assert!(IMAGE_SOURCE_ATTR.starts_with("data-"));
}

#[test]
fn defaults_mirror_constants() {
    let c = GalleryConfig::default();
    assert_eq!(c.fov_degrees, CAMERA_FOV_DEG);
    assert_eq!(c.camera_z, CAMERA_Z);
    assert_eq!(c.ease, SCROLL_EASE);
    assert_eq!(c.wheel_multiplier, WHEEL_MULTIPLIER);
    assert_eq!(c.drag_multiplier, DRAG_MULTIPLIER);
    assert_eq!(c.plane_segments, PLANE_SEGMENTS);
}

#[test]
fn valid_overrides_are_applied() {
    let mut c = GalleryConfig::default();
    assert!(c.apply_override("data-ease", "0.05"));
    assert!(c.apply_override("data-wheel-multiplier", " 1.5 "));
    assert!(c.apply_override("data-drag-multiplier", "3"));
    assert!(c.apply_override("data-fov", "60"));
    assert!(c.apply_override("data-camera-z", "8"));
    assert_eq!(c.ease, 0.05);
    assert_eq!(c.wheel_multiplier, 1.5);
    assert_eq!(c.drag_multiplier, 3.0);
    assert_eq!(c.fov_degrees, 60.0);
    assert_eq!(c.camera_z, 8.0);
}

#[test]
fn invalid_overrides_are_rejected() {
    let mut c = GalleryConfig::default();
    let before = c.clone();
    assert!(!c.apply_override("data-ease", "fast"));
    assert!(!c.apply_override("data-ease", "0"));
    assert!(!c.apply_override("data-ease", "1.5"));
    assert!(!c.apply_override("data-fov", "180"));
    assert!(!c.apply_override("data-camera-z", "0.01"));
    assert!(!c.apply_override("data-camera-z", "NaN"));
    assert!(!c.apply_override("data-unknown", "1"));
    assert_eq!(c, before);
}

#[test]
fn every_recognised_attribute_accepts_a_sane_value() {
    for key in CONFIG_ATTRIBUTES {
        let mut c = GalleryConfig::default();
        assert!(c.apply_override(key, "0.5") || c.apply_override(key, "6"), "{}", key);
    }
}

#[test]
fn error_messages_and_severity() {
    let e = GalleryError::asset_load("img/1.jpg", "404");
    assert_eq!(e.to_string(), "failed to load image img/1.jpg: 404");
    assert!(!e.is_fatal());

    let e = GalleryError::LayoutUnavailable { index: 4 };
    assert_eq!(e.to_string(), "no layout available for gallery item 4");
    assert!(!e.is_fatal());

    let e = GalleryError::Initialization("no window".into());
    assert!(e.is_fatal());
    assert!(e.to_string().contains("no window"));
}
