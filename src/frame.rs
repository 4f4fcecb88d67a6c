use crate::gallery::Gallery;
use crate::render;
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::core::ScrollState;

pub struct FrameContext<'a> {
    pub gallery: Rc<RefCell<Gallery>>,
    pub scroll: Rc<RefCell<ScrollState>>,
    pub canvas: web::HtmlCanvasElement,
    pub gpu: render::GpuState<'a>,
    pub loads_settled: bool,
}

impl<'a> FrameContext<'a> {
    /// One frame: ease scroll, attach finished loads, reposition items, draw.
    pub fn frame(&mut self) {
        let now = Instant::now();
        let (current, direction) = {
            let mut scroll = self.scroll.borrow_mut();
            scroll.tick();
            (scroll.current, scroll.direction)
        };

        let mut gallery = self.gallery.borrow_mut();
        gallery.attach_loaded(&self.gpu);
        if !self.loads_settled && gallery.pending() == 0 {
            self.loads_settled = true;
            let failures = gallery.failures();
            log::info!("[gallery] all textures settled ({} failed)", failures.len());
            for e in failures {
                log::debug!("[gallery] {}", e);
            }
        }
        gallery.update(current, direction);

        self.gpu.resize_if_needed(self.canvas.width(), self.canvas.height());
        let draws = gallery.draws(now);
        match self.gpu.render(gallery.view_projection(), &draws) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                self.gpu.reconfigure();
                log::debug!("[render] surface lost; reconfigured");
            }
            Err(e) => log::error!("render error: {:?}", e),
        }
    }
}

pub async fn init_gpu(
    canvas: &web::HtmlCanvasElement,
    plane_segments: u32,
) -> anyhow::Result<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    render::GpuState::new(leaked_canvas, plane_segments).await
}

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Stops the animation loop started by [`start_loop`].
#[derive(Clone)]
pub struct LoopHandle {
    running: Rc<Cell<bool>>,
    raf_id: Rc<Cell<Option<i32>>>,
    tick: FrameCallback,
}

impl LoopHandle {
    /// Cancel the pending frame and drop the frame callback.
    pub fn stop(&self) {
        if !self.running.replace(false) {
            return;
        }
        if let (Some(id), Some(w)) = (self.raf_id.take(), web::window()) {
            _ = w.cancel_animation_frame(id);
        }
        // The callback holds a handle back to this slot
        drop(self.tick.borrow_mut().take());
        log::info!("[gallery] frame loop stopped");
    }
}

fn request_frame(handle: &LoopHandle) {
    let Some(w) = web::window() else {
        return;
    };
    if let Some(cb) = handle.tick.borrow().as_ref() {
        handle
            .raf_id
            .set(w.request_animation_frame(cb.as_ref().unchecked_ref()).ok());
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) -> LoopHandle {
    let handle = LoopHandle {
        running: Rc::new(Cell::new(true)),
        raf_id: Rc::new(Cell::new(None)),
        tick: Rc::new(RefCell::new(None)),
    };
    let frame_handle = handle.clone();
    *handle.tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_handle.raf_id.set(None);
        if !frame_handle.running.get() {
            return;
        }
        frame_ctx.borrow_mut().frame();
        request_frame(&frame_handle);
    }) as Box<dyn FnMut()>));
    request_frame(&handle);
    handle
}
