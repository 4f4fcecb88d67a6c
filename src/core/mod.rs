pub mod config;
pub mod cover;
pub mod error;
pub mod geometry;
pub mod layout;
pub mod scroll;
pub mod viewport;

pub use config::GalleryConfig;
pub use cover::CoverFit;
pub use error::GalleryError;
pub use geometry::{PlaneGeometry, PlaneVertex};
pub use layout::{gallery_height, Bounds, MediaItem, Placement};
pub use scroll::{Direction, ScrollState};
pub use viewport::{Camera, Screen, Viewport};

// Shaders bundled as string constants
pub static MEDIA_WGSL: &str = include_str!("../../shaders/media.wgsl");
