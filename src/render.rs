//! Canvas rendering, split into a pure frame plan and a thin painter.

use web_sys::CanvasRenderingContext2d;

use crate::assets::ImageCache;
use crate::board::Board;
use crate::hex::{axial_to_pixel, cells_in_radius, hex_corners, hex_extent, Axial};
use crate::state::Viewport;
use crate::util::with_alpha;

pub const GRID_STROKE: &str = "rgba(255,255,255,0.12)";
pub const VIGNETTE_INNER: &str = "rgba(255,255,255,0.04)";
pub const VIGNETTE_OUTER: &str = "rgba(0,0,0,0.0)";
const FLAT_ALPHA: &str = "CC";

/// Natural pixel size of loaded terrain images.
pub trait ImageSizes {
    /// `None` while the image is missing, including after a failed load.
    fn size_of(&self, src: &str) -> Option<(f64, f64)>;
}

/// Nothing loaded; every terrain falls back to its colour.
pub struct NoImages;

impl ImageSizes for NoImages {
    fn size_of(&self, _src: &str) -> Option<(f64, f64)> {
        None
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Vignette {
    pub cx: f64,
    pub cy: f64,
    pub inner: f64,
    pub outer: f64,
}

impl Vignette {
    pub fn for_canvas(width: f64, height: f64) -> Self {
        Self {
            cx: width * 0.55,
            cy: height * 0.45,
            inner: 20.0,
            outer: width.max(height),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum CellFill {
    /// Image clipped to the hexagon, drawn at `(x, y, w, h)`.
    Image { src: &'static str, rect: (f64, f64, f64, f64) },
    Color(String),
    Empty,
}

#[derive(Clone, Debug, PartialEq)]
pub struct HexCell {
    pub at: Axial,
    pub center: (f64, f64),
    pub corners: [(f64, f64); 6],
    pub fill: CellFill,
}

/// Everything one redraw needs, in canvas CSS pixels.
#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
    pub width: f64,
    pub height: f64,
    pub vignette: Vignette,
    pub cells: Vec<HexCell>,
}

/// Scales an image to cover the `hex_w`×`hex_h` box centred on `(cx, cy)`.
pub fn cover_rect(cx: f64, cy: f64, hex_w: f64, hex_h: f64, img_w: f64, img_h: f64) -> (f64, f64, f64, f64) {
    let scale = (hex_w / img_w).max(hex_h / img_h);
    let (w, h) = (img_w * scale, img_h * scale);
    (cx - w / 2.0, cy - h / 2.0, w, h)
}

pub fn plan_frame(board: &Board, view: &Viewport, images: &dyn ImageSizes, width: f64, height: f64) -> Frame {
    let size_px = view.scaled(board.hex_size);
    let (hex_w, hex_h) = hex_extent(size_px);
    let cells = cells_in_radius(board.radius)
        .map(|at| {
            let (wx, wy) = axial_to_pixel(at.q, at.r, board.hex_size);
            let (sx, sy) = view.world_to_screen(wx, wy);
            let fill = match board.get(at).map(|t| t.terrain()) {
                None => CellFill::Empty,
                Some(terrain) => {
                    let image = terrain
                        .image
                        .and_then(|src| images.size_of(src).map(|size| (src, size)))
                        .filter(|(_, (w, h))| *w > 0.0 && *h > 0.0);
                    match (image, terrain.color) {
                        (Some((src, (w, h))), _) => CellFill::Image {
                            src,
                            rect: cover_rect(sx, sy, hex_w, hex_h, w, h),
                        },
                        (None, Some(color)) => CellFill::Color(with_alpha(color, FLAT_ALPHA)),
                        (None, None) => CellFill::Empty,
                    }
                }
            };
            HexCell {
                at,
                center: (sx, sy),
                corners: hex_corners(sx, sy, size_px),
                fill,
            }
        })
        .collect();
    Frame {
        width,
        height,
        vignette: Vignette::for_canvas(width, height),
        cells,
    }
}

fn trace(ctx: &CanvasRenderingContext2d, corners: &[(f64, f64); 6]) {
    ctx.begin_path();
    ctx.move_to(corners[0].0, corners[0].1);
    for (x, y) in &corners[1..] {
        ctx.line_to(*x, *y);
    }
    ctx.close_path();
}

/// Replays `frame` onto a context whose transform already maps CSS pixels.
pub fn paint_frame(ctx: &CanvasRenderingContext2d, frame: &Frame, images: &ImageCache) {
    ctx.clear_rect(0.0, 0.0, frame.width, frame.height);
    let v = &frame.vignette;
    if let Ok(g) = ctx.create_radial_gradient(v.cx, v.cy, v.inner, v.cx, v.cy, v.outer) {
        g.add_color_stop(0.0, VIGNETTE_INNER).ok();
        g.add_color_stop(1.0, VIGNETTE_OUTER).ok();
        ctx.set_fill_style_canvas_gradient(&g);
        ctx.fill_rect(0.0, 0.0, frame.width, frame.height);
    }

    ctx.set_stroke_style_str(GRID_STROKE);
    ctx.set_line_width(1.0);
    for cell in &frame.cells {
        match &cell.fill {
            CellFill::Image { src, rect: (x, y, w, h) } => {
                if let Some(img) = images.get(src) {
                    trace(ctx, &cell.corners);
                    ctx.save();
                    ctx.clip();
                    ctx.draw_image_with_html_image_element_and_dw_and_dh(img, *x, *y, *w, *h)
                        .ok();
                    ctx.restore();
                }
            }
            CellFill::Color(color) => {
                trace(ctx, &cell.corners);
                ctx.set_fill_style_str(color);
                ctx.fill();
            }
            CellFill::Empty => {}
        }
        // outline always goes on top of the fill
        trace(ctx, &cell.corners);
        ctx.stroke();
    }
}
