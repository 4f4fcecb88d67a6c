/// Camera, scroll and DOM tuning constants.
///
/// These are the defaults behind `GalleryConfig`; the gallery container can
/// override a subset of them through `data-*` attributes.
// Camera
pub const CAMERA_FOV_DEG: f32 = 45.0;
pub const CAMERA_Z: f32 = 5.0; // distance along the view axis
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 100.0;

// Scroll easing and input mapping
pub const SCROLL_EASE: f32 = 0.1; // fraction of remaining distance per frame
pub const WHEEL_MULTIPLIER: f32 = 0.75;
pub const DRAG_MULTIPLIER: f32 = 2.0;

// Shared plane geometry (unit size, subdivided)
pub const PLANE_SEGMENTS: u32 = 16;

// Renderer
pub const MAX_PIXEL_RATIO: f64 = 2.0;

// DOM contract
pub const GALLERY_SELECTOR: &str = ".gallery";
pub const ITEM_SELECTOR: &str = ".gallery__item__img";
pub const IMAGE_SOURCE_ATTR: &str = "data-src";
pub const CANVAS_ID: &str = "gallery-canvas";

// Opacity ramp after a texture becomes ready
pub const FADE_IN_SEC: f32 = 0.4;
