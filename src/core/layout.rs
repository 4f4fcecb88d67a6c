use super::scroll::Direction;
use super::viewport::{Screen, Viewport};
use glam::{Vec2, Vec3};

/// DOM bounding rectangle in CSS pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Bounds {
    pub top: f32,
    pub left: f32,
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub fn new(top: f32, left: f32, width: f32, height: f32) -> Self {
        Self {
            top,
            left,
            width,
            height,
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }
}

/// World-space height of one pass through the gallery: the wrap period.
#[inline]
pub fn gallery_height(screen: Screen, viewport: Viewport, container_height_px: f32) -> f32 {
    viewport.height * container_height_px / screen.height.max(1.0)
}

/// Placement of one gallery plane.
///
/// Scale and position are always recomputed from `bounds`, `screen`,
/// `viewport` and `extra`; nothing writes them directly.
#[derive(Clone, Debug)]
pub struct MediaLayout {
    pub index: usize,
    bounds: Bounds,
    screen: Screen,
    viewport: Viewport,
    gallery_height: f32,
    scale: Vec2,
    position: Vec3,
    extra: f32,
    is_before: bool,
    is_after: bool,
}

impl MediaLayout {
    pub fn new(
        index: usize,
        bounds: Bounds,
        screen: Screen,
        viewport: Viewport,
        gallery_height: f32,
    ) -> Self {
        let mut layout = Self {
            index,
            bounds,
            screen,
            viewport,
            gallery_height,
            scale: Vec2::ONE,
            position: Vec3::ZERO,
            extra: 0.0,
            is_before: false,
            is_after: false,
        };
        layout.on_resize(bounds, screen, viewport, gallery_height);
        layout
    }

    /// Replace the cached layout inputs and rebuild scale/position.
    ///
    /// Any accumulated wrap offset is discarded and `scroll` restarts at 0.
    pub fn on_resize(
        &mut self,
        bounds: Bounds,
        screen: Screen,
        viewport: Viewport,
        gallery_height: f32,
    ) {
        self.bounds = bounds;
        self.screen = screen;
        self.viewport = viewport;
        self.gallery_height = gallery_height;
        self.extra = 0.0;
        self.is_before = false;
        self.is_after = false;
        self.update_scale();
        self.update_x();
        self.update_y(0.0);
    }

    /// Per-frame update: wrap if fully out of view in the travel direction,
    /// then reposition for the new scroll offset.
    pub fn update(&mut self, scroll: f32, direction: Direction) {
        let plane_offset = self.scale.y / 2.0;
        let viewport_offset = self.viewport.height / 2.0;
        self.is_before = self.position.y + plane_offset < -viewport_offset;
        self.is_after = self.position.y - plane_offset > viewport_offset;

        match direction {
            Direction::Up if self.is_before => {
                self.extra -= self.gallery_height;
                self.is_before = false;
                self.is_after = false;
            }
            Direction::Down if self.is_after => {
                self.extra += self.gallery_height;
                self.is_before = false;
                self.is_after = false;
            }
            _ => {}
        }

        self.update_y(scroll);
    }

    fn update_scale(&mut self) {
        let sw = self.screen.width.max(1.0);
        let sh = self.screen.height.max(1.0);
        self.scale = Vec2::new(
            self.viewport.width * self.bounds.width / sw,
            self.viewport.height * self.bounds.height / sh,
        );
    }

    fn update_x(&mut self) {
        let sw = self.screen.width.max(1.0);
        self.position.x = -(self.viewport.width / 2.0)
            + self.scale.x / 2.0
            + (self.bounds.left / sw) * self.viewport.width;
    }

    fn update_y(&mut self, scroll: f32) {
        let sh = self.screen.height.max(1.0);
        self.position.y = self.viewport.height / 2.0
            - self.scale.y / 2.0
            - ((self.bounds.top - scroll) / sh) * self.viewport.height
            - self.extra;
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn scale(&self) -> Vec2 {
        self.scale
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn extra(&self) -> f32 {
        self.extra
    }

    pub fn gallery_height(&self) -> f32 {
        self.gallery_height
    }

    pub fn is_before(&self) -> bool {
        self.is_before
    }

    pub fn is_after(&self) -> bool {
        self.is_after
    }

    /// True when any part of the plane overlaps the visible area.
    pub fn is_visible(&self) -> bool {
        let half = self.scale.y / 2.0;
        let vh = self.viewport.height / 2.0;
        self.position.y + half >= -vh && self.position.y - half <= vh
    }
}

/// One-shot asset lifecycle of a gallery item.
#[derive(Debug)]
pub enum LoadState<T, E> {
    Loading,
    Ready(T),
    Failed(E),
}

impl<T, E> Default for LoadState<T, E> {
    fn default() -> Self {
        LoadState::Loading
    }
}

impl<T, E> LoadState<T, E> {
    /// Settle a pending load. Returns `false` (and drops `result`) if the
    /// state already left `Loading`.
    pub fn resolve(&mut self, result: Result<T, E>) -> bool {
        if !matches!(self, LoadState::Loading) {
            return false;
        }
        *self = match result {
            Ok(v) => LoadState::Ready(v),
            Err(e) => LoadState::Failed(e),
        };
        true
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, LoadState::Ready(_))
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, LoadState::Failed(_))
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            LoadState::Ready(v) => Some(v),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&E> {
        match self {
            LoadState::Failed(e) => Some(e),
            _ => None,
        }
    }
}

/// Result of laying an item out against freshly measured bounds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Placement {
    Placed,
    /// Not ready yet; the inputs stay cached for when it is.
    Pending,
    /// Empty bounds; the previous layout is kept.
    Unavailable,
}

/// A gallery item's load state together with its layout.
///
/// Screen, viewport and gallery height are cached on every resize, but the
/// plane is only laid out and moved once the asset is ready.
#[derive(Debug)]
pub struct MediaItem<T, E> {
    layout: MediaLayout,
    state: LoadState<T, E>,
    screen: Screen,
    viewport: Viewport,
    gallery_height: f32,
}

impl<T, E> MediaItem<T, E> {
    pub fn new(index: usize, screen: Screen, viewport: Viewport, gallery_height: f32) -> Self {
        Self {
            layout: MediaLayout::new(index, Bounds::default(), screen, viewport, gallery_height),
            state: LoadState::Loading,
            screen,
            viewport,
            gallery_height,
        }
    }

    pub fn index(&self) -> usize {
        self.layout.index
    }

    /// See [`LoadState::resolve`].
    pub fn resolve(&mut self, result: Result<T, E>) -> bool {
        self.state.resolve(result)
    }

    pub fn on_resize(&mut self, screen: Screen, viewport: Viewport, gallery_height: f32) {
        self.screen = screen;
        self.viewport = viewport;
        self.gallery_height = gallery_height;
    }

    /// Rebuild the layout from `bounds` and the cached inputs.
    pub fn relayout(&mut self, bounds: Bounds) -> Placement {
        if !self.state.is_ready() {
            return Placement::Pending;
        }
        if bounds.is_empty() {
            return Placement::Unavailable;
        }
        self.layout
            .on_resize(bounds, self.screen, self.viewport, self.gallery_height);
        Placement::Placed
    }

    pub fn update(&mut self, scroll: f32, direction: Direction) {
        if self.state.is_ready() {
            self.layout.update(scroll, direction);
        }
    }

    pub fn layout(&self) -> &MediaLayout {
        &self.layout
    }

    pub fn ready(&self) -> Option<&T> {
        self.state.ready()
    }

    pub fn error(&self) -> Option<&E> {
        self.state.error()
    }

    pub fn is_loading(&self) -> bool {
        self.state.is_loading()
    }

    pub fn is_ready(&self) -> bool {
        self.state.is_ready()
    }
}
