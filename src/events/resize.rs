use crate::dom;
use crate::gallery::Gallery;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Keep the canvas backing store and the gallery layout in sync with the
/// window. The renderer picks up the new canvas size on the next frame.
pub fn wire_resize(
    window: &web::Window,
    canvas: web::HtmlCanvasElement,
    gallery: Rc<RefCell<Gallery>>,
    max_pixel_ratio: f64,
) {
    dom::sync_canvas_backing_size(&canvas, max_pixel_ratio);
    super::listen_passive(window, "resize", move |_ev: web::Event| {
        dom::sync_canvas_backing_size(&canvas, max_pixel_ratio);
        if let Some(w) = web::window() {
            gallery.borrow_mut().on_resize(&w);
        }
    });
}
