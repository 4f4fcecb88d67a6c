use super::super::constants::*;

/// Runtime tunables for the gallery.
///
/// Defaults come from `constants.rs`. `apply_override` accepts the `data-*`
/// attribute names read from the gallery container; unknown keys and values
/// that fail to parse or validate are ignored.
#[derive(Clone, Debug, PartialEq)]
pub struct GalleryConfig {
    pub fov_degrees: f32,
    pub camera_z: f32,
    pub near: f32,
    pub far: f32,
    pub ease: f32,
    pub wheel_multiplier: f32,
    pub drag_multiplier: f32,
    pub plane_segments: u32,
    pub max_pixel_ratio: f64,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            fov_degrees: CAMERA_FOV_DEG,
            camera_z: CAMERA_Z,
            near: CAMERA_NEAR,
            far: CAMERA_FAR,
            ease: SCROLL_EASE,
            wheel_multiplier: WHEEL_MULTIPLIER,
            drag_multiplier: DRAG_MULTIPLIER,
            plane_segments: PLANE_SEGMENTS,
            max_pixel_ratio: MAX_PIXEL_RATIO,
        }
    }
}

/// `data-*` attributes recognised on the gallery container.
pub const CONFIG_ATTRIBUTES: &[&str] = &[
    "data-ease",
    "data-wheel-multiplier",
    "data-drag-multiplier",
    "data-fov",
    "data-camera-z",
];

impl GalleryConfig {
    /// Apply one attribute override. Returns whether the value was accepted.
    pub fn apply_override(&mut self, key: &str, value: &str) -> bool {
        let Ok(v) = value.trim().parse::<f32>() else {
            return false;
        };
        if !v.is_finite() {
            return false;
        }
        match key {
            "data-ease" if v > 0.0 && v <= 1.0 => self.ease = v,
            "data-wheel-multiplier" => self.wheel_multiplier = v,
            "data-drag-multiplier" => self.drag_multiplier = v,
            "data-fov" if v > 0.0 && v < 180.0 => self.fov_degrees = v,
            "data-camera-z" if v > self.near && v < self.far => self.camera_z = v,
            _ => return false,
        }
        true
    }
}
