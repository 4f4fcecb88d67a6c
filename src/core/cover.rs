use glam::Vec2;

/// UV transform that crops an image to fill a plane without stretching.
///
/// The shader samples at `uv * scale + offset`. The axis where the image is
/// relatively longer is cropped symmetrically; the other axis is untouched.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CoverFit {
    pub scale: Vec2,
    pub offset: Vec2,
}

impl Default for CoverFit {
    fn default() -> Self {
        Self {
            scale: Vec2::ONE,
            offset: Vec2::ZERO,
        }
    }
}

impl CoverFit {
    pub fn new(plane: Vec2, image: Vec2) -> Self {
        if plane.x <= 0.0 || plane.y <= 0.0 || image.x <= 0.0 || image.y <= 0.0 {
            return Self::default();
        }
        let plane_aspect = plane.x / plane.y;
        let image_aspect = image.x / image.y;
        let scale = Vec2::new(
            (plane_aspect / image_aspect).min(1.0),
            (image_aspect / plane_aspect).min(1.0),
        );
        Self {
            scale,
            offset: (Vec2::ONE - scale) * 0.5,
        }
    }
}
