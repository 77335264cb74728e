//! Deterministic placement of connection labels along routed edge paths.
//!
//! Every edge carries a short medium label ("HDMI", "USB-C", …) rendered as a
//! horizontal pill somewhere along the edge's orthogonal polyline. Placement:
//! - Prefer the longest segment of the path, centered on it.
//! - If the pill (expanded by a clearance gap) would overlap an already
//!   placed label, slide it along the segment in a predictable order
//!   (0, +step, -step, +2*step, …) before falling back to the next-longest
//!   segment.
//! - A pill wider than its segment is penalized so placement prefers
//!   segments the label actually fits on.
//!
//! The search is fully deterministic; callers that place labels in a fixed
//! edge order get identical results on every rebuild.

use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vec2f {
    pub x: f32,
    pub y: f32,
}

impl Vec2f {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle, min/max corners.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectF {
    pub min: Vec2f,
    pub max: Vec2f,
}

impl RectF {
    pub fn from_center_size(center: Vec2f, w: f32, h: f32) -> Self {
        Self {
            min: Vec2f::new(center.x - w * 0.5, center.y - h * 0.5),
            max: Vec2f::new(center.x + w * 0.5, center.y + h * 0.5),
        }
    }

    pub fn center(&self) -> Vec2f {
        Vec2f::new(
            (self.min.x + self.max.x) * 0.5,
            (self.min.y + self.max.y) * 0.5,
        )
    }

    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    /// Grow the rectangle by `margin` on every side.
    pub fn expanded(&self, margin: f32) -> RectF {
        RectF {
            min: Vec2f::new(self.min.x - margin, self.min.y - margin),
            max: Vec2f::new(self.max.x + margin, self.max.y + margin),
        }
    }

    pub fn intersects(&self, other: RectF) -> bool {
        !(self.max.x <= other.min.x
            || other.max.x <= self.min.x
            || self.max.y <= other.min.y
            || other.max.y <= self.min.y)
    }

    fn overlap_area(&self, other: RectF) -> f32 {
        let ix = (self.max.x.min(other.max.x) - self.min.x.max(other.min.x)).max(0.0);
        let iy = (self.max.y.min(other.max.y) - self.min.y.max(other.min.y)).max(0.0);
        ix * iy
    }
}

/// Text measurement hook. The viewer backs this with egui's galley layout;
/// tests use fixed sizes.
pub trait Measurer {
    /// Rendered size (width, height) of `text`, in path coordinates.
    fn measure(&self, text: &str) -> (f32, f32);
}

#[derive(Debug, Clone, Copy)]
pub struct Config {
    /// Padding added around the measured text on each side (the pill body).
    pub pad: f32,
    /// Required clearance between placed pills.
    pub gap: f32,
    /// Slide step as a fraction of the pill width.
    pub step_fraction: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            pad: 4.0,
            gap: 6.0,
            step_fraction: 0.5,
        }
    }
}

/// Place one label along `path`, avoiding the rectangles in `placed`.
///
/// Returns the pill rectangle, or `None` for degenerate paths (fewer than
/// two points). A label is always placed; when no collision-free spot
/// exists the least-overlapping candidate wins.
pub fn place_edge_label(
    path: &[Vec2f],
    text: &str,
    measurer: &dyn Measurer,
    cfg: Config,
    placed: &[RectF],
) -> Option<RectF> {
    if path.len() < 2 {
        return None;
    }

    let (tw, th) = measurer.measure(text);
    let w = tw + 2.0 * cfg.pad;
    let h = th + 2.0 * cfg.pad;

    // Segments, longest first; ties keep path order so results are stable.
    let mut segs: Vec<(Vec2f, Vec2f, f32)> = path
        .windows(2)
        .map(|pair| {
            let (a, b) = (pair[0], pair[1]);
            let len = ((b.x - a.x).powi(2) + (b.y - a.y).powi(2)).sqrt();
            (a, b, len)
        })
        .collect();
    segs.sort_by(|a, b| b.2.partial_cmp(&a.2).unwrap_or(Ordering::Equal));

    let step = (w * cfg.step_fraction).max(1.0);
    let mut best: Option<(RectF, f32)> = None;

    for (a, b, seg_len) in segs {
        let horizontal = (b.y - a.y).abs() <= (b.x - a.x).abs();
        let mid = Vec2f::new((a.x + b.x) * 0.5, (a.y + b.y) * 0.5);
        // How far the pill center may slide from the segment midpoint while
        // the pill stays within the segment extent.
        let span = if horizontal {
            ((seg_len - w) * 0.5).max(0.0)
        } else {
            ((seg_len - h) * 0.5).max(0.0)
        };
        let spill_penalty = if horizontal {
            (w - seg_len).max(0.0) * 100.0
        } else {
            (h - seg_len).max(0.0) * 100.0
        };

        let mut m = 0usize;
        loop {
            let delta = m as f32 * step;
            if delta > span && m > 0 {
                break;
            }
            let offsets: Vec<f32> = if m == 0 { vec![0.0] } else { vec![delta, -delta] };
            for d in offsets {
                let d = d.clamp(-span, span);
                let center = if horizontal {
                    Vec2f::new(mid.x + d, mid.y)
                } else {
                    Vec2f::new(mid.x, mid.y + d)
                };
                let rect = RectF::from_center_size(center, w, h);
                let clearance = rect.expanded(cfg.gap);
                let overlap: f32 = placed
                    .iter()
                    .map(|p| clearance.overlap_area(p.expanded(cfg.gap)))
                    .sum();
                // Small bias toward the midpoint keeps untouched diagrams tidy
                let score = overlap + spill_penalty + delta * 0.01;
                if best.map(|(_, s)| score < s).unwrap_or(true) {
                    best = Some((rect, score));
                }
            }
            if let Some((_, s)) = best {
                if s <= 0.0 {
                    return best.map(|(r, _)| r);
                }
            }
            m += 1;
        }
    }

    best.map(|(r, _)| r)
}
