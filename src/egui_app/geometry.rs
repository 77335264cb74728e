//! Pure node/edge geometry for the viewer.
//!
//! Everything here works in diagram space; the per-frame UI maps the results
//! to screen space with a single scale-and-translate.

#![cfg(feature = "egui")]

use eframe::egui::{Pos2, Rect, Vec2, pos2, vec2};

use crate::layout::Point;
use crate::routing::Handle;

/// Fixed node body size in diagram coordinates.
pub const NODE_WIDTH: f32 = 170.0;
pub const NODE_HEIGHT: f32 = 56.0;

/// How far an edge travels straight out of a handle before turning.
pub const HANDLE_STUB: f32 = 16.0;

/// Maximum distance (diagram units) between the pointer and a handle anchor
/// for an interactive connection to snap onto it.
pub const CONNECT_SNAP_DISTANCE: f32 = 24.0;

/// Node rectangle from its layout position (top-left corner).
pub fn node_rect(position: Point) -> Rect {
    Rect::from_min_size(
        pos2(position.x, position.y),
        vec2(NODE_WIDTH, NODE_HEIGHT),
    )
}

/// Anchor position of a handle: the midpoint of the corresponding side.
pub fn handle_anchor_pos(rect: Rect, handle: Handle) -> Pos2 {
    match handle {
        Handle::Top => pos2(rect.center().x, rect.top()),
        Handle::Bottom => pos2(rect.center().x, rect.bottom()),
        Handle::Left => pos2(rect.left(), rect.center().y),
        Handle::Right => pos2(rect.right(), rect.center().y),
    }
}

/// Unit vector pointing away from the node at a handle.
pub fn handle_outward(handle: Handle) -> Vec2 {
    match handle {
        Handle::Top => vec2(0.0, -1.0),
        Handle::Bottom => vec2(0.0, 1.0),
        Handle::Left => vec2(-1.0, 0.0),
        Handle::Right => vec2(1.0, 0.0),
    }
}

fn is_horizontal(handle: Handle) -> bool {
    matches!(handle, Handle::Left | Handle::Right)
}

/// Orthogonal step path between two handle anchors.
///
/// The path leaves each node straight out of its handle for [`HANDLE_STUB`]
/// units, then connects the two stub ends with at most two axis-aligned
/// legs. Consecutive duplicate points are collapsed so callers can draw the
/// result segment by segment.
pub fn edge_path(
    source_rect: Rect,
    target_rect: Rect,
    source_handle: Handle,
    target_handle: Handle,
) -> Vec<Pos2> {
    let start = handle_anchor_pos(source_rect, source_handle);
    let end = handle_anchor_pos(target_rect, target_handle);
    let a = start + handle_outward(source_handle) * HANDLE_STUB;
    let b = end + handle_outward(target_handle) * HANDLE_STUB;

    let mut points = vec![start, a];
    match (is_horizontal(source_handle), is_horizontal(target_handle)) {
        (true, true) => {
            // Both sideways: one vertical middle leg
            let mid_x = (a.x + b.x) * 0.5;
            points.push(pos2(mid_x, a.y));
            points.push(pos2(mid_x, b.y));
        }
        (false, false) => {
            // Both vertical: one horizontal middle leg
            let mid_y = (a.y + b.y) * 0.5;
            points.push(pos2(a.x, mid_y));
            points.push(pos2(b.x, mid_y));
        }
        (true, false) => {
            // Leave sideways, arrive vertically: single corner
            points.push(pos2(b.x, a.y));
        }
        (false, true) => {
            points.push(pos2(a.x, b.y));
        }
    }
    points.push(b);
    points.push(end);

    points.dedup_by(|p, q| (p.x - q.x).abs() < f32::EPSILON && (p.y - q.y).abs() < f32::EPSILON);
    points
}

/// The handle of `rect` whose anchor is closest to `p`, with the distance.
pub fn nearest_handle(rect: Rect, p: Pos2) -> (Handle, f32) {
    let mut best = (Handle::Top, f32::INFINITY);
    for handle in [Handle::Top, Handle::Bottom, Handle::Left, Handle::Right] {
        let d = handle_anchor_pos(rect, handle).distance(p);
        if d < best.1 {
            best = (handle, d);
        }
    }
    best
}
