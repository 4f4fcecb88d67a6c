use glam::{Mat4, Vec3};

/// Window size in CSS pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Screen {
    pub width: f32,
    pub height: f32,
}

impl Screen {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn aspect(&self) -> f32 {
        self.width / self.height.max(1.0)
    }
}

/// Visible extent of the scene at the z = 0 plane, in world units.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

/// Perspective camera placed on the +Z axis looking at the origin.
///
/// The gallery planes live on z = 0, so `viewport` gives the world-space
/// rectangle that exactly covers the window.
#[derive(Clone, Debug)]
pub struct Camera {
    pub fovy_radians: f32,
    pub aspect: f32,
    pub znear: f32,
    pub zfar: f32,
    pub distance: f32,
}

impl Camera {
    pub fn new(fovy_degrees: f32, screen: Screen, znear: f32, zfar: f32, distance: f32) -> Self {
        Self {
            fovy_radians: fovy_degrees.to_radians(),
            aspect: screen.aspect(),
            znear,
            zfar,
            distance,
        }
    }

    /// Refresh the aspect ratio after a window resize.
    pub fn set_screen(&mut self, screen: Screen) {
        self.aspect = screen.aspect();
    }

    /// World-space size of the visible plane at z = 0.
    pub fn viewport(&self) -> Viewport {
        let height = 2.0 * (self.fovy_radians / 2.0).tan() * self.distance;
        Viewport {
            width: height * self.aspect,
            height,
        }
    }

    pub fn eye(&self) -> Vec3 {
        Vec3::new(0.0, 0.0, self.distance)
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye(), Vec3::ZERO, Vec3::Y)
    }

    #[inline]
    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}
