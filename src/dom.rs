use crate::constants::CANVAS_ID;
use crate::core::{Bounds, GalleryConfig, Screen};
use wasm_bindgen::JsCast;
use web_sys as web;

/// Current window size in CSS pixels.
pub fn screen(window: &web::Window) -> Screen {
    let w = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(1.0);
    let h = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(1.0);
    Screen::new(w as f32, h as f32)
}

#[inline]
pub fn bounds(element: &web::Element) -> Bounds {
    let rect = element.get_bounding_client_rect();
    Bounds::new(
        rect.top() as f32,
        rect.left() as f32,
        rect.width() as f32,
        rect.height() as f32,
    )
}

/// Image URL for a gallery item: `data-src`, falling back to `src`.
pub fn image_source(element: &web::Element, attr: &str) -> Option<String> {
    element
        .get_attribute(attr)
        .or_else(|| element.get_attribute("src"))
        .filter(|s| !s.trim().is_empty())
}

pub fn query_all(document: &web::Document, selector: &str) -> Vec<web::Element> {
    let Ok(list) = document.query_selector_all(selector) else {
        log::warn!("[gallery] invalid selector {}", selector);
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<web::Element>().ok())
        .collect()
}

/// Read `data-*` overrides from the gallery container into `config`.
pub fn apply_config_overrides(container: &web::Element, config: &mut GalleryConfig) {
    for key in crate::core::config::CONFIG_ATTRIBUTES {
        if let Some(value) = container.get_attribute(key) {
            if config.apply_override(key, &value) {
                log::info!("[gallery] config {}={}", key, value);
            } else {
                log::warn!("[gallery] ignoring {}={:?}", key, value);
            }
        }
    }
}

/// Use `#gallery-canvas` if the page provides one, otherwise create a
/// fixed full-window canvas and append it to `<body>`.
pub fn find_or_create_canvas(
    document: &web::Document,
) -> Result<web::HtmlCanvasElement, wasm_bindgen::JsValue> {
    if let Some(el) = document.get_element_by_id(CANVAS_ID) {
        return el.dyn_into::<web::HtmlCanvasElement>().map_err(Into::into);
    }
    let canvas: web::HtmlCanvasElement = document.create_element("canvas")?.dyn_into()?;
    canvas.set_id(CANVAS_ID);
    _ = canvas.set_attribute(
        "style",
        "position:fixed;top:0;left:0;width:100%;height:100%;pointer-events:none;",
    );
    let body = document
        .body()
        .ok_or_else(|| wasm_bindgen::JsValue::from_str("document has no body"))?;
    body.append_child(&canvas)?;
    Ok(canvas)
}

/// Match the canvas backing store to its CSS size times the clamped
/// device pixel ratio.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement, max_pixel_ratio: f64) {
    if let Some(w) = web::window() {
        let dpr = w.device_pixel_ratio().min(max_pixel_ratio);
        let rect = canvas.get_bounding_client_rect();
        let w_px = (rect.width() * dpr) as u32;
        let h_px = (rect.height() * dpr) as u32;
        canvas.set_width(w_px.max(1));
        canvas.set_height(h_px.max(1));
    }
}
