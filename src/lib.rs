#![cfg(target_arch = "wasm32")]
use crate::core::{GalleryConfig, GalleryError, ScrollState};
use crate::gallery::Gallery;
use anyhow::Context;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod gallery;
mod media;
mod render;
mod texture;

thread_local! {
    static LOOP: RefCell<Option<frame::LoopHandle>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("scroll-gallery starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            match e.downcast_ref::<GalleryError>() {
                Some(err) if !err.is_fatal() => log::warn!("init: {}", err),
                _ => log::error!("init error: {:?}", e),
            }
        }
    });
    Ok(())
}

/// Stop the frame loop. Input listeners stay registered but only mutate
/// state that is no longer rendered.
#[wasm_bindgen]
pub fn stop_gallery() {
    LOOP.with(|l| {
        if let Some(handle) = l.borrow_mut().take() {
            handle.stop();
        }
    });
}

fn init_error(msg: &str) -> GalleryError {
    GalleryError::Initialization(msg.to_string())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| init_error("no window"))?;
    let document = window.document().ok_or_else(|| init_error("no document"))?;

    let mut config = GalleryConfig::default();
    if let Some(container) = document
        .query_selector(constants::GALLERY_SELECTOR)
        .ok()
        .flatten()
    {
        dom::apply_config_overrides(&container, &mut config);
    }

    let canvas = dom::find_or_create_canvas(&document)
        .map_err(|e| init_error(&format!("canvas: {:?}", e)))?;
    // Size the backing store before the surface is created
    dom::sync_canvas_backing_size(&canvas, config.max_pixel_ratio);

    // Camera → viewport → items
    let gallery = Rc::new(RefCell::new(Gallery::new(&window, &document, &config)?));
    let scroll = Rc::new(RefCell::new(ScrollState::new(
        config.ease,
        config.wheel_multiplier,
        config.drag_multiplier,
    )));

    let gpu = frame::init_gpu(&canvas, config.plane_segments)
        .await
        .context("GPU initialization")?;

    events::resize::wire_resize(&window, canvas.clone(), gallery.clone(), config.max_pixel_ratio);
    events::wheel::wire_wheel(&window, scroll.clone());
    events::pointer::wire_drag_handlers(&window, scroll.clone());

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        gallery,
        scroll,
        canvas,
        gpu,
        loads_settled: false,
    }));
    let handle = frame::start_loop(frame_ctx);
    LOOP.with(|l| *l.borrow_mut() = Some(handle));

    Ok(())
}
