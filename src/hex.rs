//! Axial hex math for a pointy-top layout.
//!
//! Cells are addressed by axial `(q, r)`; the third cube component is
//! `s = -q - r`. World space is the unzoomed pixel plane with the origin hex
//! centred at `(0, 0)`.

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;

const SQRT_3: f64 = 1.732_050_807_568_877_2;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Axial {
    pub q: i32,
    pub r: i32,
}

impl Axial {
    pub fn new(q: i32, r: i32) -> Self {
        Self { q, r }
    }

    /// Cube distance from the origin (`max(|q|, |r|, |s|)`), saturating at `u32::MAX`.
    pub fn ring(&self) -> u32 {
        let (q, r) = (i64::from(self.q), i64::from(self.r));
        let d = q.abs().max(r.abs()).max((q + r).abs());
        u32::try_from(d).unwrap_or(u32::MAX)
    }

    pub fn in_radius(&self, radius: u32) -> bool {
        self.ring() <= radius
    }

    /// Canonical `"q,r"` map key.
    pub fn key(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Axial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.q, self.r)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BadKey(pub String);

impl FromStr for Axial {
    type Err = BadKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bad = || BadKey(s.to_string());
        let (q, r) = s.split_once(',').ok_or_else(bad)?;
        let q = q.trim().parse::<i32>().map_err(|_| bad())?;
        let r = r.trim().parse::<i32>().map_err(|_| bad())?;
        Ok(Axial { q, r })
    }
}

pub fn tile_key(q: i32, r: i32) -> String {
    Axial::new(q, r).key()
}

pub fn in_radius(q: i32, r: i32, radius: u32) -> bool {
    Axial::new(q, r).in_radius(radius)
}

/// Centre of hex `(q, r)` in world pixels.
pub fn axial_to_pixel(q: i32, r: i32, size: f64) -> (f64, f64) {
    let (q, r) = (q as f64, r as f64);
    let x = size * (SQRT_3 * q + (SQRT_3 / 2.0) * r);
    let y = size * (1.5 * r);
    (x, y)
}

/// Hex containing the world pixel `(x, y)`.
pub fn pixel_to_axial(x: f64, y: f64, size: f64) -> Axial {
    let qf = (SQRT_3 / 3.0 * x - (1.0 / 3.0) * y) / size;
    let rf = ((2.0 / 3.0) * y) / size;
    cube_round(qf, rf, -qf - rf)
}

// Half-way values round towards +inf, not away from zero.
fn round_half_up(v: f64) -> f64 {
    (v + 0.5).floor()
}

/// Rounds fractional cube coordinates to the nearest hex.
///
/// The axis with the largest rounding error is rebuilt from the other two.
/// `q` only wins when strictly largest, `r` only when strictly above `s`;
/// every other tie falls to `s`.
pub fn cube_round(qf: f64, rf: f64, sf: f64) -> Axial {
    let mut q = round_half_up(qf);
    let mut r = round_half_up(rf);
    let s = round_half_up(sf);

    let dq = (q - qf).abs();
    let dr = (r - rf).abs();
    let ds = (s - sf).abs();

    if dq > dr && dq > ds {
        q = -r - s;
    } else if dr > ds {
        r = -q - s;
    }
    // else: s is implied by q and r

    Axial::new(q as i32, r as i32)
}

/// Corners of a hex centred at `(cx, cy)`, starting at -30° and going clockwise
/// in screen space.
pub fn hex_corners(cx: f64, cy: f64, size: f64) -> [(f64, f64); 6] {
    let mut pts = [(0.0, 0.0); 6];
    for (i, pt) in pts.iter_mut().enumerate() {
        let angle = PI / 180.0 * (60.0 * i as f64 - 30.0);
        *pt = (cx + size * angle.cos(), cy + size * angle.sin());
    }
    pts
}

/// Width and height of a hex's bounding box at the given corner radius.
pub fn hex_extent(size: f64) -> (f64, f64) {
    (SQRT_3 * size, 2.0 * size)
}

/// All cells within `radius` of the origin, `q` outer and `r` inner, both ascending.
pub fn cells_in_radius(radius: u32) -> impl Iterator<Item = Axial> {
    let r = radius.min(i32::MAX as u32) as i32;
    (-r..=r).flat_map(move |q| (-r..=r).map(move |rr| Axial::new(q, rr)))
        .filter(move |a| a.in_radius(radius))
}
