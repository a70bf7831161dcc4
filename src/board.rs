//! Radius-bounded sparse hex map.

use rand::Rng;
use std::collections::BTreeMap;

use crate::hex::{cells_in_radius, in_radius, Axial};
use crate::terrain::{paintable, TerrainId};

pub const DEFAULT_HEX_SIZE: f64 = 70.0;
pub const DEFAULT_RADIUS: u32 = 10;

#[derive(Clone, Debug, PartialEq)]
pub struct Board {
    /// Hex corner radius in world pixels. Always > 0.
    pub hex_size: f64,
    pub radius: u32,
    /// Painted cells. Missing means empty; the `Leer` sentinel is never stored.
    /// Shrinking `radius` keeps cells that fall outside it.
    pub tiles: BTreeMap<Axial, TerrainId>,
}

impl Default for Board {
    fn default() -> Self {
        Self::new(DEFAULT_HEX_SIZE, DEFAULT_RADIUS)
    }
}

impl Board {
    pub fn new(hex_size: f64, radius: u32) -> Self {
        let hex_size = if hex_size.is_finite() && hex_size > 0.0 { hex_size } else { DEFAULT_HEX_SIZE };
        Self {
            hex_size,
            radius,
            tiles: BTreeMap::new(),
        }
    }

    pub fn contains(&self, at: Axial) -> bool {
        in_radius(at.q, at.r, self.radius)
    }

    pub fn get(&self, at: Axial) -> Option<TerrainId> {
        self.tiles.get(&at).copied()
    }

    /// Writes `terrain` at `at`, or clears the cell for the empty sentinel.
    /// Returns false (and changes nothing) outside the radius.
    pub fn paint(&mut self, at: Axial, terrain: TerrainId) -> bool {
        if !self.contains(at) {
            return false;
        }
        if terrain.is_empty() {
            self.tiles.remove(&at);
        } else {
            self.tiles.insert(at, terrain);
        }
        true
    }

    pub fn erase(&mut self, at: Axial) -> bool {
        self.paint(at, TerrainId::Leer)
    }

    pub fn clear(&mut self) {
        self.tiles.clear();
    }

    /// Replaces the whole map with an independent uniform pick per in-radius cell.
    pub fn randomize<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let choices: Vec<TerrainId> = paintable().collect();
        self.tiles.clear();
        for at in cells_in_radius(self.radius) {
            let pick = choices[rng.random_range(0..choices.len())];
            self.tiles.insert(at, pick);
        }
    }

    pub fn set_radius(&mut self, radius: u32) {
        self.radius = radius;
    }

    pub fn set_hex_size(&mut self, size: f64) -> bool {
        if !(size.is_finite() && size > 0.0) {
            return false;
        }
        self.hex_size = size;
        true
    }

    /// Painted cells that are currently visible (inside the radius).
    pub fn visible_tiles(&self) -> impl Iterator<Item = (Axial, TerrainId)> + '_ {
        self.tiles
            .iter()
            .filter(|(at, _)| at.in_radius(self.radius))
            .map(|(at, t)| (*at, *t))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn paint_outside_radius_is_ignored() {
        let mut b = Board::new(50.0, 2);
        b.paint(Axial::new(1, 0), TerrainId::Wald);
        let before = b.tiles.clone();
        assert!(!b.paint(Axial::new(5, 5), TerrainId::Wasser));
        assert_eq!(b.tiles, before);
    }

    #[test]
    fn painting_sentinel_erases() {
        let mut b = Board::new(50.0, 2);
        assert!(b.paint(Axial::new(0, 1), TerrainId::Berg));
        assert_eq!(b.get(Axial::new(0, 1)), Some(TerrainId::Berg));
        assert!(b.paint(Axial::new(0, 1), TerrainId::Leer));
        assert!(b.tiles.is_empty());
        assert!(b.erase(Axial::new(0, 0)));
    }

    #[test]
    fn shrinking_radius_keeps_hidden_tiles() {
        let mut b = Board::new(50.0, 4);
        b.paint(Axial::new(4, -1), TerrainId::Sumpf);
        b.paint(Axial::new(0, 0), TerrainId::Ebene);
        b.set_radius(1);
        assert_eq!(b.tiles.len(), 2);
        assert_eq!(b.visible_tiles().count(), 1);
        b.set_radius(4);
        assert_eq!(b.visible_tiles().count(), 2);
    }

    #[test]
    fn randomize_fills_every_cell_with_real_terrain() {
        let mut b = Board::new(50.0, 3);
        b.tiles.insert(Axial::new(9, 9), TerrainId::Wald);
        let mut rng = StdRng::seed_from_u64(7);
        b.randomize(&mut rng);
        assert_eq!(b.tiles.len(), 37);
        assert!(b.tiles.keys().all(|a| a.in_radius(3)));
        assert!(b.tiles.values().all(|t| !t.is_empty()));
    }

    #[test]
    fn clear_only_touches_tiles() {
        let mut b = Board::new(64.0, 5);
        b.paint(Axial::new(0, 0), TerrainId::Geysir);
        b.clear();
        assert!(b.tiles.is_empty());
        assert_eq!(b.radius, 5);
        assert_eq!(b.hex_size, 64.0);
    }

    #[test]
    fn hex_size_must_be_positive() {
        let mut b = Board::default();
        assert!(!b.set_hex_size(0.0));
        assert!(!b.set_hex_size(f64::NAN));
        assert!(b.set_hex_size(42.0));
        assert_eq!(b.hex_size, 42.0);
        assert_eq!(Board::new(-1.0, 0).hex_size, DEFAULT_HEX_SIZE);
    }
}
