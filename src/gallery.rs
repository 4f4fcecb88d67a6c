use crate::constants::{GALLERY_SELECTOR, IMAGE_SOURCE_ATTR, ITEM_SELECTOR};
use crate::core::{gallery_height, Camera, Direction, GalleryConfig, GalleryError, Screen, Viewport};
use crate::dom;
use crate::media::Media;
use crate::render::{GpuState, MeshDraw};
use crate::texture::LoadQueue;
use glam::Mat4;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Owns the camera, the derived viewport and every gallery item.
pub struct Gallery {
    container: web::Element,
    camera: Camera,
    screen: Screen,
    viewport: Viewport,
    gallery_height: f32,
    medias: Vec<Media>,
    loads: LoadQueue,
}

impl Gallery {
    /// Measure the window, then create one item per gallery image.
    ///
    /// Camera and viewport exist before any item is constructed.
    pub fn new(
        window: &web::Window,
        document: &web::Document,
        config: &GalleryConfig,
    ) -> Result<Self, GalleryError> {
        let container = document
            .query_selector(GALLERY_SELECTOR)
            .ok()
            .flatten()
            .ok_or_else(|| {
                GalleryError::Initialization(format!("missing {}", GALLERY_SELECTOR))
            })?;

        let screen = dom::screen(window);
        let camera = Camera::new(
            config.fov_degrees,
            screen,
            config.near,
            config.far,
            config.camera_z,
        );
        let mut gallery = Self {
            container,
            camera,
            screen,
            viewport: Viewport::default(),
            gallery_height: 0.0,
            medias: Vec::new(),
            loads: Rc::new(RefCell::new(Vec::new())),
        };
        gallery.measure(window);

        let elements = dom::query_all(document, ITEM_SELECTOR);
        if elements.is_empty() {
            log::warn!("[gallery] no elements match {}", ITEM_SELECTOR);
        }
        let medias = elements
            .into_iter()
            .enumerate()
            .map(|(index, element)| {
                Media::new(
                    element,
                    index,
                    IMAGE_SOURCE_ATTR,
                    gallery.screen,
                    gallery.viewport,
                    gallery.gallery_height,
                    &gallery.loads,
                )
            })
            .collect();
        gallery.medias = medias;

        log::info!(
            "[gallery] {} items, screen {}x{}, viewport {:.3}x{:.3}, wrap {:.3}",
            gallery.medias.len(),
            gallery.screen.width,
            gallery.screen.height,
            gallery.viewport.width,
            gallery.viewport.height,
            gallery.gallery_height
        );
        Ok(gallery)
    }

    fn measure(&mut self, window: &web::Window) {
        self.screen = dom::screen(window);
        self.camera.set_screen(self.screen);
        self.viewport = self.camera.viewport();
        let container_height = self.container.client_height() as f32;
        self.gallery_height = gallery_height(self.screen, self.viewport, container_height);
    }

    pub fn on_resize(&mut self, window: &web::Window) {
        self.measure(window);
        for media in &mut self.medias {
            media.on_resize(self.screen, self.viewport, self.gallery_height);
        }
        log::debug!(
            "[gallery] resize {}x{} viewport {:.3}x{:.3}",
            self.screen.width,
            self.screen.height,
            self.viewport.width,
            self.viewport.height
        );
    }

    /// Hand finished texture loads to their items.
    pub fn attach_loaded(&mut self, gpu: &GpuState<'_>) {
        let loaded: Vec<_> = self.loads.borrow_mut().drain(..).collect();
        for item in loaded {
            match self.medias.get_mut(item.index) {
                Some(media) => media.attach(item.result, gpu),
                None => log::warn!("[gallery] load for unknown item {}", item.index),
            }
        }
    }

    /// Push the scroll state into every item, in index order.
    pub fn update(&mut self, scroll: f32, direction: Direction) {
        for media in &mut self.medias {
            media.update(scroll, direction);
        }
    }

    pub fn draws(&self, now: Instant) -> Vec<MeshDraw<'_>> {
        self.medias.iter().filter_map(|m| m.draw(now)).collect()
    }

    pub fn view_projection(&self) -> Mat4 {
        self.camera.view_projection()
    }

    pub fn pending(&self) -> usize {
        self.medias.iter().filter(|m| m.is_loading()).count()
    }

    pub fn failures(&self) -> Vec<&GalleryError> {
        self.medias.iter().filter_map(|m| m.error()).collect()
    }
}
