use crate::core::GalleryError;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

/// Outcome of one image load, waiting to be attached on the next frame.
pub struct LoadedImage {
    pub index: usize,
    pub result: Result<web::HtmlImageElement, GalleryError>,
}

/// Completed loads; filled by load futures, drained by the frame loop.
pub type LoadQueue = Rc<RefCell<Vec<LoadedImage>>>;

/// Fetch and decode `url` into an image element ready for GPU upload.
pub async fn load(url: &str) -> Result<web::HtmlImageElement, GalleryError> {
    let image = web::HtmlImageElement::new()
        .map_err(|e| GalleryError::asset_load(url, format!("{:?}", e)))?;
    image.set_cross_origin(Some("anonymous"));
    image.set_src(url);
    JsFuture::from(image.decode())
        .await
        .map_err(|e| GalleryError::asset_load(url, format!("{:?}", e)))?;
    if image.natural_width() == 0 || image.natural_height() == 0 {
        return Err(GalleryError::asset_load(url, "decoded image is empty"));
    }
    Ok(image)
}

/// Start a one-shot load for item `index`. The result is pushed to `queue`.
pub fn spawn_load(index: usize, url: String, queue: LoadQueue) {
    spawn_local(async move {
        let result = load(&url).await;
        queue.borrow_mut().push(LoadedImage { index, result });
    });
}
