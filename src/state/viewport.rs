// Pan/zoom transform between world pixels and canvas (screen) pixels

pub const MIN_ZOOM: f64 = 0.35;
pub const MAX_ZOOM: f64 = 3.0;
pub const WHEEL_ZOOM_IN: f64 = 1.08;
pub const WHEEL_ZOOM_OUT: f64 = 0.92;

#[derive(Debug, Clone, PartialEq)]
pub struct Viewport {
    pub zoom: f64,
    pub pan_x: f64,
    pub pan_y: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            zoom: 1.0,
            pan_x: 0.0,
            pan_y: 0.0,
        }
    }
}

impl Viewport {
    pub fn world_to_screen(&self, x: f64, y: f64) -> (f64, f64) {
        (self.pan_x + x * self.zoom, self.pan_y + y * self.zoom)
    }

    pub fn screen_to_world(&self, x: f64, y: f64) -> (f64, f64) {
        ((x - self.pan_x) / self.zoom, (y - self.pan_y) / self.zoom)
    }

    /// Scales by `factor` (clamped) while keeping the world point under
    /// `(sx, sy)` fixed on screen.
    pub fn zoom_at(&mut self, factor: f64, sx: f64, sy: f64) {
        let (bx, by) = self.screen_to_world(sx, sy);
        self.zoom = (self.zoom * factor).clamp(MIN_ZOOM, MAX_ZOOM);
        let (ax, ay) = self.screen_to_world(sx, sy);
        self.pan_x += (ax - bx) * self.zoom;
        self.pan_y += (ay - by) * self.zoom;
    }

    /// One wheel tick: negative `delta_y` (scroll up) zooms in.
    pub fn wheel(&mut self, delta_y: f64, sx: f64, sy: f64) {
        let factor = if delta_y < 0.0 { WHEEL_ZOOM_IN } else { WHEEL_ZOOM_OUT };
        self.zoom_at(factor, sx, sy);
    }

    pub fn pan_by(&mut self, dx: f64, dy: f64) {
        self.pan_x += dx;
        self.pan_y += dy;
    }

    /// Puts the origin at the centre of a `width`×`height` canvas, but only while
    /// the pan is still exactly at its initial `(0, 0)`.
    pub fn center_if_unset(&mut self, width: f64, height: f64) -> bool {
        if self.pan_x == 0.0 && self.pan_y == 0.0 {
            self.pan_x = width / 2.0;
            self.pan_y = height / 2.0;
            return true;
        }
        false
    }

    /// Rendered hex corner radius for a world hex size.
    pub fn scaled(&self, size: f64) -> f64 {
        size * self.zoom
    }
}
