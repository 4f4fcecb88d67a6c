use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum GalleryError {
    /// A single image could not be fetched or decoded. Only that item is
    /// affected.
    #[error("failed to load image {url}: {reason}")]
    AssetLoad { url: String, reason: String },

    /// The element for item `index` has no usable bounding box.
    #[error("no layout available for gallery item {index}")]
    LayoutUnavailable { index: usize },

    /// Rendering context or required DOM nodes are missing.
    #[error("gallery initialization failed: {0}")]
    Initialization(String),
}

impl GalleryError {
    pub fn asset_load(url: impl Into<String>, reason: impl Into<String>) -> Self {
        GalleryError::AssetLoad {
            url: url.into(),
            reason: reason.into(),
        }
    }

    /// Fatal errors abort startup; everything else is local to one item.
    pub fn is_fatal(&self) -> bool {
        matches!(self, GalleryError::Initialization(_))
    }
}
