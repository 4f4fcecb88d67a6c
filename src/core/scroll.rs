/// Vertical travel of the content, derived from frame-to-frame scroll deltas.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Direction {
    /// Scroll offset decreasing.
    #[default]
    Up,
    /// Scroll offset increasing.
    Down,
}

#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

#[inline]
fn round2(v: f32) -> f32 {
    (v * 100.0).round() / 100.0
}

/// Smoothed scroll offset in CSS pixels.
///
/// Input handlers only move `target`; `tick` eases `current` toward it once
/// per frame and derives `direction`.
#[derive(Clone, Debug)]
pub struct ScrollState {
    pub current: f32,
    pub target: f32,
    /// `current` captured when a drag starts.
    pub position: f32,
    /// Pointer y captured when a drag starts.
    pub start: f32,
    pub last: f32,
    pub ease: f32,
    pub direction: Direction,
    pub wheel_multiplier: f32,
    pub drag_multiplier: f32,
    dragging: bool,
    locked: bool,
}

impl Default for ScrollState {
    fn default() -> Self {
        Self::new(0.1, 0.75, 2.0)
    }
}

impl ScrollState {
    pub fn new(ease: f32, wheel_multiplier: f32, drag_multiplier: f32) -> Self {
        Self {
            current: 0.0,
            target: 0.0,
            position: 0.0,
            start: 0.0,
            last: 0.0,
            ease: ease.clamp(f32::EPSILON, 1.0),
            direction: Direction::Up,
            wheel_multiplier,
            drag_multiplier,
            dragging: false,
            locked: false,
        }
    }

    /// Advance one frame: ease toward the target and update the direction.
    pub fn tick(&mut self) {
        let eased = round2(lerp(self.current, self.target, self.ease));
        // Rounding can stall short of the target or move away from it.
        self.current = if (self.target - eased).abs() >= (self.target - self.current).abs() {
            self.target
        } else {
            eased
        };

        if self.current > self.last {
            self.direction = Direction::Down;
        } else if self.current < self.last {
            self.direction = Direction::Up;
        }
        self.last = self.current;
    }

    pub fn on_wheel(&mut self, delta_y: f32) {
        self.target += delta_y * self.wheel_multiplier;
    }

    pub fn on_drag_start(&mut self, y: f32) {
        self.dragging = true;
        self.position = self.current;
        self.start = y;
    }

    pub fn on_drag_move(&mut self, y: f32) {
        if !self.dragging || self.locked {
            return;
        }
        let distance = (self.start - y) * self.drag_multiplier;
        self.target = self.position + distance;
    }

    pub fn on_drag_end(&mut self) {
        self.dragging = false;
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Drag moves are ignored while locked; wheel input is not affected.
    pub fn set_locked(&mut self, locked: bool) {
        self.locked = locked;
    }
}
