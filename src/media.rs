use crate::constants::FADE_IN_SEC;
use crate::core::{CoverFit, Direction, GalleryError, MediaItem, Placement, Screen, Viewport};
use crate::dom;
use crate::render::{GpuState, MeshDraw, MeshGpu};
use crate::texture::{self, LoadQueue};
use glam::{Mat4, Quat, Vec3};
use instant::Instant;
use web_sys as web;

struct MediaMesh {
    gpu: MeshGpu,
    ready_at: Instant,
}

/// One DOM image mirrored as a textured plane.
pub struct Media {
    element: web::Element,
    url: Option<String>,
    item: MediaItem<MediaMesh, GalleryError>,
    requested_at: Instant,
}

impl Media {
    pub fn new(
        element: web::Element,
        index: usize,
        source_attr: &str,
        screen: Screen,
        viewport: Viewport,
        gallery_height: f32,
        queue: &LoadQueue,
    ) -> Self {
        let url = dom::image_source(&element, source_attr);
        let mut item = MediaItem::new(index, screen, viewport, gallery_height);
        match &url {
            Some(u) => texture::spawn_load(index, u.clone(), queue.clone()),
            None => {
                let reason = format!("item {} has no {}", index, source_attr);
                let err = GalleryError::asset_load("", reason);
                log::warn!("[media] {}", err);
                item.resolve(Err(err));
            }
        }
        Self {
            element,
            url,
            item,
            requested_at: Instant::now(),
        }
    }

    pub fn index(&self) -> usize {
        self.item.index()
    }

    /// Settle the pending load. Called once per item from the frame loop.
    pub fn attach(
        &mut self,
        result: Result<web::HtmlImageElement, GalleryError>,
        gpu: &GpuState<'_>,
    ) {
        let mesh = result.map(|image| MediaMesh {
            gpu: gpu.create_mesh(&image),
            ready_at: Instant::now(),
        });
        match &mesh {
            Err(e) if e.is_fatal() => log::error!("[media] item {}: {}", self.index(), e),
            Err(e) => log::warn!("[media] item {} skipped: {}", self.index(), e),
            Ok(_) => {}
        }
        if !self.item.resolve(mesh) {
            log::warn!("[media] item {} already settled; ignoring load result", self.index());
            return;
        }
        if self.item.is_ready() {
            log::info!(
                "[media] item {} ready in {} ms ({})",
                self.index(),
                self.requested_at.elapsed().as_millis(),
                self.url.as_deref().unwrap_or("")
            );
            self.relayout();
        }
    }

    pub fn on_resize(&mut self, screen: Screen, viewport: Viewport, gallery_height: f32) {
        self.item.on_resize(screen, viewport, gallery_height);
        self.relayout();
    }

    fn relayout(&mut self) {
        if !self.item.is_ready() {
            return;
        }
        if self.item.relayout(dom::bounds(&self.element)) == Placement::Unavailable {
            let err = GalleryError::LayoutUnavailable { index: self.index() };
            log::warn!("[media] {}", err);
        }
    }

    pub fn update(&mut self, scroll: f32, direction: Direction) {
        self.item.update(scroll, direction);
    }

    /// Draw data for this frame, or `None` while loading, failed or off screen.
    pub fn draw(&self, now: Instant) -> Option<MeshDraw<'_>> {
        let mesh = self.item.ready()?;
        let layout = self.item.layout();
        if !layout.is_visible() {
            return None;
        }
        let scale = layout.scale();
        let model = Mat4::from_scale_rotation_translation(
            Vec3::new(scale.x, scale.y, 1.0),
            Quat::IDENTITY,
            layout.position(),
        );
        let age = if now > mesh.ready_at {
            (now - mesh.ready_at).as_secs_f32()
        } else {
            0.0
        };
        Some(MeshDraw {
            mesh: &mesh.gpu,
            model,
            cover: CoverFit::new(scale, mesh.gpu.image_size),
            opacity: (age / FADE_IN_SEC).min(1.0),
        })
    }

    pub fn is_loading(&self) -> bool {
        self.item.is_loading()
    }

    pub fn error(&self) -> Option<&GalleryError> {
        self.item.error()
    }
}
