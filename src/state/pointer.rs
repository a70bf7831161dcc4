// Drag-to-pan tracking for mouse input

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Middle,
    Secondary,
}

impl PointerButton {
    /// Maps `MouseEvent::button()` codes; anything unknown is ignored.
    pub fn from_code(code: i16) -> Option<Self> {
        match code {
            0 => Some(PointerButton::Primary),
            1 => Some(PointerButton::Middle),
            2 => Some(PointerButton::Secondary),
            _ => None,
        }
    }
}

#[derive(Default, Debug, Clone, PartialEq)]
pub struct PointerState {
    pub panning: bool,
    pub last_x: f64,
    pub last_y: f64,
}

impl PointerState {
    pub fn begin_pan(&mut self, x: f64, y: f64) {
        self.panning = true;
        self.last_x = x;
        self.last_y = y;
    }

    /// Delta since the previous pointer position while panning.
    pub fn drag_to(&mut self, x: f64, y: f64) -> Option<(f64, f64)> {
        if !self.panning {
            return None;
        }
        let delta = (x - self.last_x, y - self.last_y);
        self.last_x = x;
        self.last_y = y;
        Some(delta)
    }

    pub fn release(&mut self) {
        self.panning = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drag_reports_incremental_deltas() {
        let mut p = PointerState::default();
        assert_eq!(p.drag_to(5.0, 5.0), None);
        p.begin_pan(10.0, 20.0);
        assert_eq!(p.drag_to(15.0, 18.0), Some((5.0, -2.0)));
        assert_eq!(p.drag_to(15.0, 28.0), Some((0.0, 10.0)));
        p.release();
        assert_eq!(p.drag_to(0.0, 0.0), None);
    }

    #[test]
    fn button_codes() {
        assert_eq!(PointerButton::from_code(0), Some(PointerButton::Primary));
        assert_eq!(PointerButton::from_code(1), Some(PointerButton::Middle));
        assert_eq!(PointerButton::from_code(2), Some(PointerButton::Secondary));
        assert_eq!(PointerButton::from_code(4), None);
    }
}
